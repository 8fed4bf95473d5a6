//! Language codes and the two-language pair the console works with.

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Language codes (ISO 639-1) accepted on the command line, with display names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("bg", "Bulgarian"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sv", "Swedish"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("zh", "Chinese"),
];

/// Suffix of the model directory names, e.g. `en-hu-f32`.
const MODEL_DIR_SUFFIX: &str = "f32";

/// Validates that the given language code is supported.
///
/// # Errors
///
/// Returns an error if the language code is not in the supported list.
pub fn validate_language(lang: &str) -> Result<()> {
    if SUPPORTED_LANGUAGES.iter().any(|(code, _)| *code == lang) {
        Ok(())
    } else {
        let codes: Vec<&str> = SUPPORTED_LANGUAGES.iter().map(|(code, _)| *code).collect();
        anyhow::bail!(
            "Invalid language code: '{lang}'\n\n\
             Valid language codes (ISO 639-1): {}",
            codes.join(", ")
        )
    }
}

/// Returns the display name of a language code, or the code itself if unknown.
pub fn language_name(code: &str) -> &str {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |(_, name)| *name)
}

/// Which way a session translates within a [`LanguagePair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// First language to second (menu item 1).
    Forward,
    /// Second language to first (menu item 2).
    Backward,
}

/// The two languages of the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub first: String,
    pub second: String,
}

impl LanguagePair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Returns `(source, target)` language codes for `direction`.
    pub fn codes(&self, direction: Direction) -> (&str, &str) {
        match direction {
            Direction::Forward => (self.first.as_str(), self.second.as_str()),
            Direction::Backward => (self.second.as_str(), self.first.as_str()),
        }
    }

    /// Short menu label such as `EN -> HU`.
    pub fn label(&self, direction: Direction) -> String {
        let (from, to) = self.codes(direction);
        format!("{} -> {}", from.to_uppercase(), to.to_uppercase())
    }

    /// Long banner title such as `English -> Hungarian`.
    pub fn title(&self, direction: Direction) -> String {
        let (from, to) = self.codes(direction);
        format!("{} -> {}", language_name(from), language_name(to))
    }

    /// Directory holding the translator model for `direction`.
    pub fn model_dir(&self, models_root: &Path, direction: Direction) -> PathBuf {
        let (from, to) = self.codes(direction);
        models_root.join(format!("{from}-{to}-{MODEL_DIR_SUFFIX}"))
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new("en", "hu")
    }
}
