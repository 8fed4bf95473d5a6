use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::fs::atomic_write;

/// Settings file used when no `--config` is given, relative to the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "config.ini";

/// Output log used when no `--output` is given.
pub const DEFAULT_OUTPUT_FILE: &str = "translations.txt";

pub const SAVE_TO_FILE_KEY: &str = "saveToFile";
pub const SINGLE_LINE_OUTPUT_KEY: &str = "singleLineOutput";

/// Console settings.
///
/// Only the two flags are persisted; the output path comes from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Append every translation to [`Settings::output_path`].
    pub save_to_file: bool,
    /// Replace the echoed input line with the result instead of printing below it.
    pub single_line_output: bool,
    /// Output log file.
    pub output_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            save_to_file: false,
            single_line_output: false,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Settings {
    /// Applies every recognized `key=value` line in `contents` on top of `self`.
    ///
    /// Unknown keys, malformed lines and unparsable values are skipped.
    /// Later lines win over earlier ones.
    #[must_use]
    pub fn merge_from_str(mut self, contents: &str) -> Self {
        for line in contents.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let Some(flag) = parse_flag(value) else {
                continue;
            };

            match key.trim() {
                SAVE_TO_FILE_KEY => self.save_to_file = flag,
                SINGLE_LINE_OUTPUT_KEY => self.single_line_output = flag,
                _ => {}
            }
        }
        self
    }

    /// Renders the persisted form: both keys, canonical `0`/`1` values.
    pub fn to_file_contents(&self) -> String {
        format!(
            "{SAVE_TO_FILE_KEY}={}\n{SINGLE_LINE_OUTPUT_KEY}={}\n",
            u8::from(self.save_to_file),
            u8::from(self.single_line_output)
        )
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

/// Loads and saves the settings file.
pub struct SettingsManager {
    settings_path: PathBuf,
}

impl SettingsManager {
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Reads the settings file on top of [`Settings::default`].
    ///
    /// A missing or unreadable file is not an error: the defaults are returned.
    pub fn load(&self) -> Settings {
        fs::read_to_string(&self.settings_path).map_or_else(
            |_| Settings::default(),
            |contents| Settings::default().merge_from_str(&contents),
        )
    }

    /// Rewrites the whole settings file.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        atomic_write(&self.settings_path, &settings.to_file_contents())
    }
}
