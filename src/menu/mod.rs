//! The main menu and the settings editor.

mod ui;

use anyhow::Result;
use std::io::Write;

use crate::config::{Settings, SettingsManager};
use crate::input::LineSource;
use crate::session::{SessionEnd, TranslateSession};
use crate::translation::{Direction, LanguagePair, Pipeline};
use crate::ui::clear_screen;

const CHOICE_PROMPT: &str = "Choice:";

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Translate(Direction),
    Settings,
    Exit,
}

/// Settings editor entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChoice {
    ToggleSaveToFile,
    ToggleSingleLineOutput,
    Back,
}

pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::Translate(Direction::Forward)),
        "2" => Some(MenuChoice::Translate(Direction::Backward)),
        "3" => Some(MenuChoice::Settings),
        "4" => Some(MenuChoice::Exit),
        _ => None,
    }
}

pub fn parse_settings_choice(input: &str) -> Option<SettingsChoice> {
    match input.trim() {
        "1" => Some(SettingsChoice::ToggleSaveToFile),
        "2" => Some(SettingsChoice::ToggleSingleLineOutput),
        "3" => Some(SettingsChoice::Back),
        _ => None,
    }
}

/// Whether the menu keeps running after a submenu returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// The console application: owns the settings and dispatches menu choices.
pub struct App<'a> {
    forward: Pipeline<'a>,
    backward: Pipeline<'a>,
    pair: LanguagePair,
    settings: Settings,
    manager: SettingsManager,
    spinner: bool,
}

impl<'a> App<'a> {
    pub fn new(
        forward: Pipeline<'a>,
        backward: Pipeline<'a>,
        pair: LanguagePair,
        settings: Settings,
        manager: SettingsManager,
    ) -> Self {
        Self {
            forward,
            backward,
            pair,
            settings,
            manager,
            spinner: false,
        }
    }

    /// Shows a spinner while translating.
    #[must_use]
    pub fn with_spinner(mut self, enabled: bool) -> Self {
        self.spinner = enabled;
        self
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs the main menu until the user picks exit or the input ends.
    pub fn run<R: LineSource, W: Write>(&mut self, reader: &mut R, out: &mut W) -> Result<()> {
        loop {
            ui::print_main_menu(out, &self.pair)?;

            let Some(line) = reader.read_line(CHOICE_PROMPT)? else {
                return Ok(());
            };

            let flow = match parse_menu_choice(&line) {
                Some(MenuChoice::Translate(direction)) => {
                    clear_screen(out)?;
                    self.run_session(direction, reader, out)?
                }
                Some(MenuChoice::Settings) => {
                    clear_screen(out)?;
                    self.run_settings(reader, out)?
                }
                Some(MenuChoice::Exit) => {
                    writeln!(out, "Exiting...")?;
                    Flow::Stop
                }
                None => Flow::Continue,
            };

            if flow == Flow::Stop {
                return Ok(());
            }
        }
    }

    fn run_session<R: LineSource, W: Write>(
        &self,
        direction: Direction,
        reader: &mut R,
        out: &mut W,
    ) -> Result<Flow> {
        let pipeline = match direction {
            Direction::Forward => self.forward,
            Direction::Backward => self.backward,
        };

        let session = TranslateSession::new(pipeline, &self.settings, self.pair.title(direction))
            .with_spinner(self.spinner);

        Ok(match session.run(reader, out)? {
            SessionEnd::Back | SessionEnd::EndOfInput => Flow::Continue,
        })
    }

    fn run_settings<R: LineSource, W: Write>(
        &mut self,
        reader: &mut R,
        out: &mut W,
    ) -> Result<Flow> {
        loop {
            ui::print_settings_menu(out, &self.settings)?;

            let Some(line) = reader.read_line(CHOICE_PROMPT)? else {
                return Ok(Flow::Stop);
            };

            let Some(choice) = parse_settings_choice(&line) else {
                continue;
            };

            clear_screen(out)?;
            match choice {
                SettingsChoice::ToggleSaveToFile => {
                    self.settings.save_to_file = !self.settings.save_to_file;
                }
                SettingsChoice::ToggleSingleLineOutput => {
                    self.settings.single_line_output = !self.settings.single_line_output;
                }
                SettingsChoice::Back => return Ok(Flow::Continue),
            }

            let _ = self.manager.save(&self.settings);
        }
    }
}
