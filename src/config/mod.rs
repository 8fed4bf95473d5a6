//! Persisted console settings.

mod manager;

pub use manager::{
    DEFAULT_OUTPUT_FILE, DEFAULT_SETTINGS_FILE, SAVE_TO_FILE_KEY, SINGLE_LINE_OUTPUT_KEY,
    Settings, SettingsManager,
};
