//! Capability traits over the external tokenizer and translation engine.

use std::path::PathBuf;
use thiserror::Error;

/// Token the translation engine expects at the end of every source sequence.
///
/// SentencePiece never produces it, so callers append it before translating.
pub const END_OF_SENTENCE: &str = "</s>";

/// Errors raised at the engine boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("model not found: {}", .0.display())]
    ModelNotFound(PathBuf),

    #[error("failed to load model from {}: {message}", .path.display())]
    Load { path: PathBuf, message: String },

    #[error("tokenization failed: {0}")]
    Encode(String),

    #[error("detokenization failed: {0}")]
    Decode(String),

    #[error("translation failed: {0}")]
    Translate(String),
}

/// Decoding options passed with every translation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslationOptions {
    pub beam_size: usize,
    pub max_decoding_length: usize,
    pub repetition_penalty: f32,
}

impl TranslationOptions {
    /// The options used for every request in the console.
    pub const FIXED: Self = Self {
        beam_size: 2,
        max_decoding_length: 200,
        repetition_penalty: 1.2,
    };
}

impl Default for TranslationOptions {
    fn default() -> Self {
        Self::FIXED
    }
}

/// A subword tokenizer for one language.
pub trait Tokenizer {
    fn encode(&self, text: &str) -> Result<Vec<String>, EngineError>;

    fn decode(&self, tokens: &[String]) -> Result<String, EngineError>;
}

/// A sequence-to-sequence translator for one direction.
pub trait Translator {
    fn translate(
        &self,
        tokens: &[String],
        options: &TranslationOptions,
    ) -> Result<Vec<String>, EngineError>;
}
