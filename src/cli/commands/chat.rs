use anyhow::Result;
use std::io::{self, IsTerminal};

use super::connect;
use crate::chat::{ChatSession, PromptLines, ReaderLines};
use crate::cli::ChatArgs;

pub async fn run_chat(args: ChatArgs) -> Result<()> {
    let (_, llm_config, client) = connect(&args.overrides())?;
    let session = ChatSession::new(client, llm_config, args.system_prompt);
    let mut stdout = io::stdout();

    if io::stdin().is_terminal() {
        session.run(&mut PromptLines::new(), &mut stdout).await
    } else {
        tracing::debug!("stdin is not a terminal, reading chat lines from it");
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        session
            .run(&mut ReaderLines::new(stdin), &mut stdout)
            .await
    }
}
