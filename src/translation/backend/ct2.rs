use ct2rs::Config;
use ct2rs::sys::{TranslationOptions as Ct2Options, Translator as Ct2Engine};
use std::path::Path;

use crate::translation::engine::{EngineError, TranslationOptions, Translator};

/// A CTranslate2 model directory for one translation direction.
pub struct Ct2Translator {
    engine: Ct2Engine,
}

impl Ct2Translator {
    /// Loads a converted model directory (`model.bin`, vocabularies, config).
    pub fn open(model_dir: &Path) -> Result<Self, EngineError> {
        if !model_dir.is_dir() {
            return Err(EngineError::ModelNotFound(model_dir.to_path_buf()));
        }

        let engine =
            Ct2Engine::new(model_dir, &Config::default()).map_err(|e| EngineError::Load {
                path: model_dir.to_path_buf(),
                message: format!("{e:#}"),
            })?;

        Ok(Self { engine })
    }
}

impl Translator for Ct2Translator {
    fn translate(
        &self,
        tokens: &[String],
        options: &TranslationOptions,
    ) -> Result<Vec<String>, EngineError> {
        let ct2_options: Ct2Options<String, String> = Ct2Options {
            beam_size: options.beam_size,
            max_decoding_length: options.max_decoding_length,
            repetition_penalty: options.repetition_penalty,
            ..Default::default()
        };

        let results = self
            .engine
            .translate_batch(&[tokens.to_vec()], &ct2_options, None)
            .map_err(|e| EngineError::Translate(format!("{e:#}")))?;

        results
            .into_iter()
            .next()
            .and_then(|result| result.hypotheses.into_iter().next())
            .ok_or_else(|| EngineError::Translate("engine returned no hypothesis".to_string()))
    }
}
