use sentencepiece::SentencePieceProcessor;
use std::path::Path;

use crate::translation::engine::{EngineError, Tokenizer};

/// A SentencePiece model for one language.
pub struct SentencePieceTokenizer {
    processor: SentencePieceProcessor,
}

impl SentencePieceTokenizer {
    /// Loads a `.spm` model file.
    pub fn open(path: &Path) -> Result<Self, EngineError> {
        if !path.is_file() {
            return Err(EngineError::ModelNotFound(path.to_path_buf()));
        }

        let processor = SentencePieceProcessor::open(path).map_err(|e| EngineError::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(Self { processor })
    }
}

impl Tokenizer for SentencePieceTokenizer {
    fn encode(&self, text: &str) -> Result<Vec<String>, EngineError> {
        let pieces = self
            .processor
            .encode(text)
            .map_err(|e| EngineError::Encode(e.to_string()))?;

        Ok(pieces.into_iter().map(|p| p.piece).collect())
    }

    fn decode(&self, tokens: &[String]) -> Result<String, EngineError> {
        self.processor
            .decode_pieces(tokens)
            .map_err(|e| EngineError::Decode(e.to_string()))
    }
}
