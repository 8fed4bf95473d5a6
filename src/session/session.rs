use anyhow::Result;
use std::io::Write;

use super::command::{Input, SessionCommand, parse_input};
use super::ui;
use crate::config::Settings;
use crate::fs::append_line;
use crate::input::LineSource;
use crate::translation::{EngineError, Pipeline};
use crate::ui::{ERASE_PREVIOUS_LINE, Spinner, clear_screen, print_error};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `/back`.
    Back,
    /// The input stream ended.
    EndOfInput,
}

/// Formats one translated line for the console and the output log.
pub fn format_record(source: &str, translated: &str) -> String {
    format!("{source} -> {translated}")
}

/// An interactive translation session for one direction.
pub struct TranslateSession<'a> {
    pipeline: Pipeline<'a>,
    settings: &'a Settings,
    title: String,
    spinner: bool,
}

impl<'a> TranslateSession<'a> {
    pub fn new(pipeline: Pipeline<'a>, settings: &'a Settings, title: impl Into<String>) -> Self {
        Self {
            pipeline,
            settings,
            title: title.into(),
            spinner: false,
        }
    }

    /// Shows a spinner on stderr while the engine runs.
    #[must_use]
    pub fn with_spinner(mut self, enabled: bool) -> Self {
        self.spinner = enabled;
        self
    }

    /// Runs until `/back` or the end of input.
    pub fn run<R: LineSource, W: Write>(&self, reader: &mut R, out: &mut W) -> Result<SessionEnd> {
        ui::print_banner(out, &self.title)?;

        loop {
            let prompt = if self.settings.single_line_output {
                ""
            } else {
                ">"
            };

            let Some(line) = reader.read_session_line(prompt)? else {
                return Ok(SessionEnd::EndOfInput);
            };

            match parse_input(&line) {
                Input::Empty => {}
                Input::Command(SessionCommand::Back) => {
                    clear_screen(out)?;
                    return Ok(SessionEnd::Back);
                }
                Input::Command(SessionCommand::ClearScreen) => {
                    clear_screen(out)?;
                    ui::print_banner(out, &self.title)?;
                }
                Input::Text(text) => self.translate_and_print(&text, out)?,
            }
        }
    }

    fn translate_and_print<W: Write>(&self, text: &str, out: &mut W) -> Result<()> {
        let spinner = Spinner::maybe(self.spinner, "Translating...");
        let result = self.pipeline.translate_line(text);
        if let Some(spinner) = &spinner {
            spinner.stop();
        }

        let translated = match result {
            Ok(translated) => translated,
            Err(EngineError::Encode(_)) => return Ok(()),
            Err(e) => {
                print_error(&e.to_string());
                return Ok(());
            }
        };

        let record = format_record(text, &translated);
        if self.settings.single_line_output {
            write!(out, "{ERASE_PREVIOUS_LINE}")?;
        }
        writeln!(out, "{record}")?;
        out.flush()?;

        if self.settings.save_to_file {
            let _ = append_line(&self.settings.output_path, &record);
        }

        Ok(())
    }
}
