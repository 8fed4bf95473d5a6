#![allow(clippy::unwrap_used)]
//! End-to-end console flows against in-memory engines.
//!
//! Drives the main menu, the settings editor and translation sessions with a
//! scripted input stream and checks what reaches the engines and the screen.

use std::cell::RefCell;
use std::fs;
use std::io::{Cursor, sink};
use tempfile::TempDir;

use nmt_cli::config::{Settings, SettingsManager};
use nmt_cli::input::StdinLines;
use nmt_cli::menu::App;
use nmt_cli::translation::{
    END_OF_SENTENCE, EngineError, LanguagePair, Pipeline, Tokenizer, TranslationOptions,
    Translator,
};

/// Splits on whitespace; refuses any text containing `#`.
struct WordTokenizer {
    encoded: RefCell<Vec<String>>,
}

impl WordTokenizer {
    fn new() -> Self {
        Self {
            encoded: RefCell::new(Vec::new()),
        }
    }
}

impl Tokenizer for WordTokenizer {
    fn encode(&self, text: &str) -> Result<Vec<String>, EngineError> {
        self.encoded.borrow_mut().push(text.to_string());
        if text.contains('#') {
            return Err(EngineError::Encode("unknown symbol".to_string()));
        }
        Ok(text.split_whitespace().map(str::to_string).collect())
    }

    fn decode(&self, tokens: &[String]) -> Result<String, EngineError> {
        Ok(tokens.join(" "))
    }
}

/// Looks words up in a tiny dictionary and records its input.
struct Dictionary {
    entries: &'static [(&'static str, &'static str)],
    received: RefCell<Vec<Vec<String>>>,
}

impl Dictionary {
    fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            entries,
            received: RefCell::new(Vec::new()),
        }
    }
}

impl Translator for Dictionary {
    fn translate(
        &self,
        tokens: &[String],
        options: &TranslationOptions,
    ) -> Result<Vec<String>, EngineError> {
        assert_eq!(*options, TranslationOptions::FIXED);
        self.received.borrow_mut().push(tokens.to_vec());
        tokens
            .iter()
            .filter(|t| t.as_str() != END_OF_SENTENCE)
            .map(|t| {
                self.entries
                    .iter()
                    .find(|(from, _)| *from == t.as_str())
                    .map(|(_, to)| (*to).to_string())
                    .ok_or_else(|| EngineError::Translate(format!("no entry for {t}")))
            })
            .collect()
    }
}

const EN_HU: &[(&str, &str)] = &[("hello", "szia"), ("good", "jó"), ("dog", "kutya")];
const HU_EN: &[(&str, &str)] = &[("szia", "hi"), ("kutya", "dog")];

fn run_console(
    tokenizer: &WordTokenizer,
    forward: &Dictionary,
    backward: &Dictionary,
    settings: Settings,
    settings_path: std::path::PathBuf,
    script: &str,
) -> String {
    let mut app = App::new(
        Pipeline::new(tokenizer, forward, tokenizer),
        Pipeline::new(tokenizer, backward, tokenizer),
        LanguagePair::new("en", "hu"),
        settings,
        SettingsManager::new(settings_path),
    );
    let mut reader = StdinLines::new(Cursor::new(script.to_string()), sink());
    let mut out = Vec::new();
    app.run(&mut reader, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_hello_is_translated_and_logged() {
    let temp_dir = TempDir::new().unwrap();
    let log = temp_dir.path().join("translations.txt");
    let tokenizer = WordTokenizer::new();
    let forward = Dictionary::new(EN_HU);
    let backward = Dictionary::new(HU_EN);
    let settings = Settings {
        save_to_file: true,
        output_path: log.clone(),
        ..Settings::default()
    };

    let out = run_console(
        &tokenizer,
        &forward,
        &backward,
        settings,
        temp_dir.path().join("config.ini"),
        "1\nhello\n/back\n4\n",
    );

    assert_eq!(
        *forward.received.borrow(),
        vec![vec!["hello".to_string(), "</s>".to_string()]]
    );
    assert!(out.contains("hello -> szia\n"));
    assert_eq!(fs::read_to_string(&log).unwrap(), "hello -> szia\n");
    assert!(backward.received.borrow().is_empty());
}

#[test]
fn test_failures_do_not_end_the_session() {
    let temp_dir = TempDir::new().unwrap();
    let tokenizer = WordTokenizer::new();
    let forward = Dictionary::new(EN_HU);
    let backward = Dictionary::new(HU_EN);

    let out = run_console(
        &tokenizer,
        &forward,
        &backward,
        Settings::default(),
        temp_dir.path().join("config.ini"),
        "1\n# hash\nunknown\ngood dog\n/back\n4\n",
    );

    // The rejected line never reached the translator
    assert_eq!(forward.received.borrow().len(), 2);
    assert!(!out.contains("# hash ->"));
    assert!(!out.contains("unknown ->"));
    assert!(out.contains("good dog -> jó kutya"));
    assert!(out.contains("Exiting..."));
}

#[test]
fn test_back_and_empty_lines_never_reach_engines() {
    let temp_dir = TempDir::new().unwrap();
    let tokenizer = WordTokenizer::new();
    let forward = Dictionary::new(EN_HU);
    let backward = Dictionary::new(HU_EN);

    run_console(
        &tokenizer,
        &forward,
        &backward,
        Settings::default(),
        temp_dir.path().join("config.ini"),
        "2\n\n\n/back\n4\n",
    );

    assert!(tokenizer.encoded.borrow().is_empty());
    assert!(backward.received.borrow().is_empty());
}

#[test]
fn test_settings_editor_persists_and_applies() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("config.ini");
    let log = temp_dir.path().join("out.txt");
    let tokenizer = WordTokenizer::new();
    let forward = Dictionary::new(EN_HU);
    let backward = Dictionary::new(HU_EN);
    let settings = Settings {
        output_path: log.clone(),
        ..Settings::default()
    };

    run_console(
        &tokenizer,
        &forward,
        &backward,
        settings,
        settings_path.clone(),
        "3\n1\n3\n2\nkutya\n/back\n4\n",
    );

    assert_eq!(
        fs::read_to_string(&settings_path).unwrap(),
        "saveToFile=1\nsingleLineOutput=0\n"
    );
    assert_eq!(fs::read_to_string(&log).unwrap(), "kutya -> dog\n");

    let reloaded = SettingsManager::new(settings_path).load();
    assert!(reloaded.save_to_file);
}
