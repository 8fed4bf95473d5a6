use inquire::autocompletion::{Autocomplete, Replacement};

// Session commands: (command, description)
pub const SESSION_COMMANDS: &[(&str, &str)] = &[
    ("/back", "Return to the main menu"),
    ("/cls", "Clear the screen"),
];

/// Session command autocompleter
#[derive(Clone, Default)]
pub struct SessionCommandCompleter;

impl Autocomplete for SessionCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SESSION_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Session commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Back,
    ClearScreen,
}

/// A parsed line of session input.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// Text to translate, exactly as typed apart from the line ending.
    Text(String),
    Command(SessionCommand),
    Empty,
}

/// Classifies one line typed in a translation session.
///
/// Only the exact commands are recognized; anything else that is not blank,
/// including other words starting with `/`, is translated.
pub fn parse_input(line: &str) -> Input {
    let line = line.trim_end_matches(['\r', '\n']);

    match line.trim() {
        "" => Input::Empty,
        "/back" => Input::Command(SessionCommand::Back),
        "/cls" => Input::Command(SessionCommand::ClearScreen),
        _ => Input::Text(line.to_string()),
    }
}
