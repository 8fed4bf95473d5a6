//! Adapters over the native CTranslate2 and SentencePiece libraries.

mod ct2;
mod spm;

pub use ct2::Ct2Translator;
pub use spm::SentencePieceTokenizer;
