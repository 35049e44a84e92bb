use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use quill::cli::commands;
use quill::cli::{Args, Command};
use quill::config::load_env_files;
use quill::error::AppError;
use quill::ui::Style;
use quill::{app, logging, output, paths};

fn main() -> ExitCode {
    app::init_user_agent();

    let args = Args::parse();
    logging::init(args.command.debug_flag().unwrap_or(false));
    load_env_files(&paths::env_file_paths());

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => return report(Err(err.into())),
    };

    let result = runtime.block_on(run(args.command));
    // A stdin read abandoned on Ctrl+C still holds a blocking-pool thread.
    runtime.shutdown_background();
    report(result)
}

/// Runs the command, abandoning it if the user presses Ctrl+C.
async fn run(command: Command) -> Result<()> {
    tokio::select! {
        result = commands::dispatch(command) => result,
        Ok(()) = tokio::signal::ctrl_c() => Err(AppError::UserCancelled.into()),
    }
}

fn report(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err)
            if err
                .downcast_ref::<AppError>()
                .is_some_and(AppError::is_cancellation) =>
        {
            eprintln!();
            eprintln!("{}", Style::warning("Operation cancelled by user"));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err}", Style::error("Error:"));
            if output::is_debug() {
                eprintln!();
                eprintln!("{err:?}");
            }
            ExitCode::FAILURE
        }
    }
}
