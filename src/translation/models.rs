//! Locating and loading the model files for a language pair.
//!
//! Layout under the models root, for the pair `en`/`hu`:
//!
//! ```text
//! en-hu-f32/   translator en -> hu, source.spm (English), target.spm (Hungarian)
//! hu-en-f32/   translator hu -> en, source.spm (Hungarian), target.spm (English)
//! ```

use std::path::{Path, PathBuf};

use super::engine::EngineError;
use super::language::{Direction, LanguagePair};

pub const SOURCE_SPM: &str = "source.spm";
pub const TARGET_SPM: &str = "target.spm";

/// Tokenizer model files for the two languages of a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerPaths {
    pub first: PathBuf,
    pub second: PathBuf,
}

/// Finds the SentencePiece model of each language.
///
/// Each language's model is the `source.spm` of the direction that starts
/// from it. The second language may also come from the forward model's
/// `target.spm`, which is the same language. A missing model is an error:
/// the first language's model is never reused for the second.
pub fn resolve_tokenizer_paths(
    models_root: &Path,
    pair: &LanguagePair,
) -> Result<TokenizerPaths, EngineError> {
    let forward_dir = pair.model_dir(models_root, Direction::Forward);
    let backward_dir = pair.model_dir(models_root, Direction::Backward);

    let first = forward_dir.join(SOURCE_SPM);
    if !first.is_file() {
        return Err(EngineError::ModelNotFound(first));
    }

    let second = [backward_dir.join(SOURCE_SPM), forward_dir.join(TARGET_SPM)]
        .into_iter()
        .find(|p| p.is_file())
        .ok_or_else(|| EngineError::ModelNotFound(backward_dir.join(SOURCE_SPM)))?;

    Ok(TokenizerPaths { first, second })
}

#[cfg(feature = "engine")]
pub use loaded::ModelSet;

#[cfg(feature = "engine")]
mod loaded {
    use std::path::Path;

    use super::resolve_tokenizer_paths;
    use crate::status;
    use crate::translation::backend::{Ct2Translator, SentencePieceTokenizer};
    use crate::translation::engine::EngineError;
    use crate::translation::language::{Direction, LanguagePair};
    use crate::translation::pipeline::Pipeline;

    /// Every model handle the console needs, loaded once at startup.
    pub struct ModelSet {
        first_tokenizer: SentencePieceTokenizer,
        second_tokenizer: SentencePieceTokenizer,
        forward: Ct2Translator,
        backward: Ct2Translator,
    }

    impl ModelSet {
        pub fn load(models_root: &Path, pair: &LanguagePair) -> Result<Self, EngineError> {
            let paths = resolve_tokenizer_paths(models_root, pair)?;

            status!("  tokenizer {}", paths.first.display());
            let first_tokenizer = SentencePieceTokenizer::open(&paths.first)?;
            status!("  tokenizer {}", paths.second.display());
            let second_tokenizer = SentencePieceTokenizer::open(&paths.second)?;

            let forward_dir = pair.model_dir(models_root, Direction::Forward);
            status!("  translator {}", forward_dir.display());
            let forward = Ct2Translator::open(&forward_dir)?;

            let backward_dir = pair.model_dir(models_root, Direction::Backward);
            status!("  translator {}", backward_dir.display());
            let backward = Ct2Translator::open(&backward_dir)?;

            Ok(Self {
                first_tokenizer,
                second_tokenizer,
                forward,
                backward,
            })
        }

        pub fn pipeline(&self, direction: Direction) -> Pipeline<'_> {
            match direction {
                Direction::Forward => Pipeline::new(
                    &self.first_tokenizer,
                    &self.forward,
                    &self.second_tokenizer,
                ),
                Direction::Backward => Pipeline::new(
                    &self.second_tokenizer,
                    &self.backward,
                    &self.first_tokenizer,
                ),
            }
        }
    }
}
