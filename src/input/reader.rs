use anyhow::{Context, Result};
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{InquireError, Text};
use std::io::{BufRead, Write};

use crate::session::command::SessionCommandCompleter;

/// A source of console lines.
///
/// `Ok(None)` means the input has ended (EOF, or the prompt was cancelled).
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Reads a line typed inside a translation session.
    fn read_session_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.read_line(prompt)
    }
}

/// Reads lines from any buffered reader, echoing the prompt to `prompt_out`.
///
/// Used when stdin is not a terminal, and in tests.
pub struct StdinLines<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> StdinLines<R, W> {
    pub const fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineSource for StdinLines<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if !prompt.is_empty() {
            write!(self.prompt_out, "{prompt} ")?;
            self.prompt_out.flush()?;
        }

        let mut line = String::new();
        let bytes_read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read from stdin")?;

        if bytes_read == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Check if the inquire error is a user cancellation/interruption.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

fn cancelled_as_end(result: Result<String, InquireError>) -> Result<Option<String>> {
    match result {
        Ok(line) => Ok(Some(line)),
        Err(e) if is_prompt_cancelled(&e) => {
            println!(); // Clear line after the interrupted prompt
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Interactive prompts on a terminal.
pub struct PromptLines {
    render_config: RenderConfig<'static>,
}

impl PromptLines {
    pub fn new() -> Self {
        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        Self { render_config }
    }
}

impl Default for PromptLines {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for PromptLines {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        cancelled_as_end(
            Text::new(prompt)
                .with_render_config(self.render_config)
                .prompt(),
        )
    }

    fn read_session_line(&mut self, prompt: &str) -> Result<Option<String>> {
        cancelled_as_end(
            Text::new(prompt)
                .with_render_config(self.render_config)
                .with_autocomplete(SessionCommandCompleter)
                .with_help_message("Type a sentence to translate, /back for the menu, /cls to clear")
                .prompt(),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::{Cursor, sink};

    #[test]
    fn test_reads_lines_until_eof() {
        let mut lines = StdinLines::new(Cursor::new("first\nsecond\n"), sink());

        assert_eq!(lines.read_line("").unwrap(), Some("first".to_string()));
        assert_eq!(lines.read_line("").unwrap(), Some("second".to_string()));
        assert_eq!(lines.read_line("").unwrap(), None);
    }

    #[test]
    fn test_strips_crlf() {
        let mut lines = StdinLines::new(Cursor::new("hello\r\n"), sink());
        assert_eq!(lines.read_line("").unwrap(), Some("hello".to_string()));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut lines = StdinLines::new(Cursor::new("tail"), sink());
        assert_eq!(lines.read_line("").unwrap(), Some("tail".to_string()));
        assert_eq!(lines.read_line("").unwrap(), None);
    }

    #[test]
    fn test_blank_line_is_not_eof() {
        let mut lines = StdinLines::new(Cursor::new("\nx\n"), sink());
        assert_eq!(lines.read_line("").unwrap(), Some(String::new()));
    }

    #[test]
    fn test_prompt_is_echoed() {
        let mut prompt_out = Vec::new();
        let mut lines = StdinLines::new(Cursor::new("1\n"), &mut prompt_out);
        lines.read_session_line(">").unwrap();
        lines.read_line("").unwrap();

        assert_eq!(String::from_utf8(prompt_out).unwrap(), "> ");
    }

    #[test]
    fn test_is_prompt_cancelled() {
        assert!(is_prompt_cancelled(&InquireError::OperationCanceled));
        assert!(is_prompt_cancelled(&InquireError::OperationInterrupted));
        assert!(!is_prompt_cancelled(&InquireError::Custom("test".into())));
    }

    #[test]
    fn test_other_prompt_errors_propagate() {
        let result = cancelled_as_end(Err(InquireError::Custom("boom".into())));
        assert!(result.is_err());
    }
}
