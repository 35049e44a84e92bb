use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show current configuration"),
    ("/exit", "Exit chat mode"),
    ("/help", "Show available commands"),
    ("/quit", "Exit chat mode"),
];

/// Words that end the session with or without a leading slash.
const QUIT_WORDS: &[&str] = &["quit", "exit", "q"];

/// Completes slash commands, matching the typed prefix in any letter case.
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl SlashCommandCompleter {
    fn matches(input: &str) -> impl Iterator<Item = &'static (&'static str, &'static str)> + '_ {
        SLASH_COMMANDS.iter().filter(move |(cmd, _)| {
            input.len() <= cmd.len() && cmd[..input.len()].eq_ignore_ascii_case(input)
        })
    }
}

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(Vec::new());
        }

        Ok(Self::matches(input)
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect())
    }

    fn get_completion(
        &mut self,
        input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let picked = highlighted_suggestion
            .and_then(|s| s.split_whitespace().next().map(str::to_string));

        // With nothing highlighted, complete a unique match.
        Ok(picked.or_else(|| {
            let mut matches = Self::matches(input);
            match (matches.next(), matches.next()) {
                (Some((cmd, _)), None) if input.starts_with('/') => Some((*cmd).to_string()),
                _ => None,
            }
        }))
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Help,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

fn is_quit_word(word: &str) -> bool {
    QUIT_WORDS.iter().any(|q| q.eq_ignore_ascii_case(word))
}

/// Classifies one line of chat input.
///
/// `quit`, `exit` and `q` end the session in any letter case, bare or as
/// slash commands. Everything else not starting with `/` is sent to the model
/// after trimming.
pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    if is_quit_word(input) {
        return Input::Command(SlashCommand::Quit);
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    match parts.first().map(|word| word.to_ascii_lowercase()).as_deref() {
        Some("config") => Input::Command(SlashCommand::Config),
        Some("help") => Input::Command(SlashCommand::Help),
        Some(word) if is_quit_word(word) => Input::Command(SlashCommand::Quit),
        _ => Input::Command(SlashCommand::Unknown(parts.join(" "))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_input(""), Input::Empty);
        assert_eq!(parse_input("   "), Input::Empty);
    }

    #[test]
    fn test_parse_text_input() {
        assert_eq!(
            parse_input("  Hello, world!  "),
            Input::Text("Hello, world!".to_string())
        );
    }

    #[test]
    fn test_parse_config_command() {
        assert_eq!(parse_input("/config"), Input::Command(SlashCommand::Config));
    }

    #[test]
    fn test_parse_help_command() {
        assert_eq!(parse_input("/HELP"), Input::Command(SlashCommand::Help));
    }

    #[test]
    fn test_parse_quit_words_any_case() {
        for line in ["quit", "QUIT", "Exit", "q", " Q ", "/quit", "/EXIT", "/q"] {
            assert_eq!(
                parse_input(line),
                Input::Command(SlashCommand::Quit),
                "{line:?} should quit"
            );
        }
    }

    #[test]
    fn test_quit_inside_sentence_is_text() {
        assert_eq!(
            parse_input("how do I quit vim"),
            Input::Text("how do I quit vim".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_input("/unknown arg"),
            Input::Command(SlashCommand::Unknown("unknown arg".to_string()))
        );
    }

    // SlashCommandCompleter tests

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("hello").unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_completer_suggestions_for_slash() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), 4); // /config, /exit, /help, /quit
    }

    #[test]
    fn test_completer_suggestions_filter_by_prefix() {
        let mut completer = SlashCommandCompleter;

        let suggestions = completer.get_suggestions("/c").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/config"));

        let suggestions = completer.get_suggestions("/q").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/quit"));
    }

    #[test]
    fn test_completer_offers_every_quit_form() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/E").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/exit"));

        for suggestion in completer.get_suggestions("/").unwrap() {
            let cmd = suggestion.split_whitespace().next().unwrap();
            if suggestion.contains("Exit chat mode") {
                assert_eq!(parse_input(cmd), Input::Command(SlashCommand::Quit));
            }
        }
    }

    #[test]
    fn test_completer_completes_unique_prefix() {
        let mut completer = SlashCommandCompleter;
        assert_eq!(
            completer.get_completion("/he", None).unwrap(),
            Some("/help".to_string())
        );
        assert!(completer.get_completion("/", None).unwrap().is_none());
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/config  Show current configuration".to_string();
        let completion = completer.get_completion("/c", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/config".to_string()));
    }

    #[test]
    fn test_completer_completion_none() {
        let mut completer = SlashCommandCompleter;
        let completion = completer.get_completion("/x", None).unwrap();
        assert!(completion.is_none());
    }
}
