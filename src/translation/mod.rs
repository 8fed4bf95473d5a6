//! Translation engine boundary: capability traits, the per-direction
//! pipeline, model discovery and the native backends.

#[cfg(feature = "engine")]
mod backend;
mod engine;
mod language;
mod models;
mod pipeline;

#[cfg(test)]
pub(crate) mod fake;

#[cfg(feature = "engine")]
pub use backend::{Ct2Translator, SentencePieceTokenizer};
pub use engine::{END_OF_SENTENCE, EngineError, Tokenizer, TranslationOptions, Translator};
pub use language::{
    Direction, LanguagePair, SUPPORTED_LANGUAGES, language_name, validate_language,
};
#[cfg(feature = "engine")]
pub use models::ModelSet;
pub use models::{SOURCE_SPM, TARGET_SPM, TokenizerPaths, resolve_tokenizer_paths};
pub use pipeline::Pipeline;
