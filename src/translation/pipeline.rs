use super::engine::{END_OF_SENTENCE, EngineError, Tokenizer, TranslationOptions, Translator};

/// One translation direction: source tokenizer, translator, target tokenizer.
#[derive(Clone, Copy)]
pub struct Pipeline<'a> {
    source: &'a dyn Tokenizer,
    translator: &'a dyn Translator,
    target: &'a dyn Tokenizer,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        source: &'a dyn Tokenizer,
        translator: &'a dyn Translator,
        target: &'a dyn Tokenizer,
    ) -> Self {
        Self {
            source,
            translator,
            target,
        }
    }

    /// Translates a single line of text.
    ///
    /// The returned error identifies the failing stage; an
    /// [`EngineError::Encode`] means the translator was never called.
    pub fn translate_line(&self, text: &str) -> Result<String, EngineError> {
        let mut tokens = self.source.encode(text)?;
        tokens.push(END_OF_SENTENCE.to_string());

        let output = self
            .translator
            .translate(&tokens, &TranslationOptions::FIXED)?;

        self.target.decode(&output)
    }
}
