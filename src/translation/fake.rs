//! In-memory engine doubles for unit tests.

use std::cell::{Cell, RefCell};

use super::engine::{END_OF_SENTENCE, EngineError, Tokenizer, TranslationOptions, Translator};

/// Whitespace tokenizer producing SentencePiece-style `▁word` pieces.
#[derive(Default)]
pub struct FakeTokenizer {
    fail_on: Option<String>,
    decode_prefix: String,
    encode_calls: Cell<usize>,
}

impl FakeTokenizer {
    pub fn failing_on(needle: &str) -> Self {
        Self {
            fail_on: Some(needle.to_string()),
            ..Self::default()
        }
    }

    pub fn with_decode_prefix(prefix: &str) -> Self {
        Self {
            decode_prefix: prefix.to_string(),
            ..Self::default()
        }
    }

    pub fn encode_calls(&self) -> usize {
        self.encode_calls.get()
    }
}

impl Tokenizer for FakeTokenizer {
    fn encode(&self, text: &str) -> Result<Vec<String>, EngineError> {
        self.encode_calls.set(self.encode_calls.get() + 1);
        if let Some(needle) = &self.fail_on
            && text.contains(needle.as_str())
        {
            return Err(EngineError::Encode(format!("cannot encode {text:?}")));
        }
        Ok(text.split_whitespace().map(|w| format!("▁{w}")).collect())
    }

    fn decode(&self, tokens: &[String]) -> Result<String, EngineError> {
        let text: String = tokens.concat().replace('▁', " ");
        Ok(format!("{}{}", self.decode_prefix, text.trim()))
    }
}

/// Upper-cases every source piece and records what it was given.
#[derive(Default)]
pub struct FakeTranslator {
    fail: bool,
    calls: RefCell<Vec<Vec<String>>>,
    last_options: Cell<Option<TranslationOptions>>,
}

impl FakeTranslator {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    pub fn last_options(&self) -> Option<TranslationOptions> {
        self.last_options.get()
    }
}

impl Translator for FakeTranslator {
    fn translate(
        &self,
        tokens: &[String],
        options: &TranslationOptions,
    ) -> Result<Vec<String>, EngineError> {
        self.calls.borrow_mut().push(tokens.to_vec());
        self.last_options.set(Some(*options));
        if self.fail {
            return Err(EngineError::Translate("decoder exploded".to_string()));
        }
        Ok(tokens
            .iter()
            .filter(|t| t.as_str() != END_OF_SENTENCE)
            .map(|t| t.to_uppercase())
            .collect())
    }
}
