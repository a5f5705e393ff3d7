use crate::core::orthography::fit_orthography;
use crate::core::recognizer::{recognize, Recognition};
use crate::core::types::{Model, ModelCollection, MorphologyVector};
use crate::error::{DeclensionError, Result};
use crate::persistence::load_from_disk;
use std::path::Path;
use tracing::debug;

/// Moves `word` to the `target` morphology by swapping its suffix.
///
/// `morphology`, when known, skips full recognition and only looks at the
/// entries for that vector. The stem is never touched.
pub fn declense(
    word: &str,
    target: &MorphologyVector,
    models: &[Model],
    morphology: Option<&MorphologyVector>,
) -> Result<String> {
    let found = recognize(word, models, morphology)?;
    let new_suffix = found
        .model
        .get(target)
        .ok_or_else(|| DeclensionError::UnknownTargetMorphology {
            target: target.clone(),
        })?;

    debug!(
        word,
        model = found.index,
        from = %found.vector,
        to = %target,
        "declensing"
    );

    let mut result = found.stem(word).to_string();
    result.push_str(new_suffix);
    Ok(result)
}

/// Declenses words against a bound model collection, optionally overridden
/// per call. It only reads its models, so several threads can share one.
#[derive(Debug, Clone, Default)]
pub struct Declensor {
    pub models: ModelCollection,
    orthography: bool,
}

impl Declensor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_models(models: ModelCollection) -> Self {
        Self {
            models,
            orthography: false,
        }
    }

    /// Loads the default models from a model file written by `save_to_disk`.
    pub fn from_file(path: &str) -> Result<Self> {
        Ok(Self::with_models(load_from_disk(Path::new(path))?))
    }

    /// Enables spelling fix-ups (`йа` -> `я` and friends) on every result.
    pub fn with_orthography(mut self, enabled: bool) -> Self {
        self.orthography = enabled;
        self
    }

    /// Declenses against the bound models.
    pub fn declense(
        &self,
        word: &str,
        target: &MorphologyVector,
        morphology: Option<&MorphologyVector>,
    ) -> Result<String> {
        self.declense_with(word, target, &self.models, morphology)
    }

    /// Declenses against `models` instead of the bound ones.
    pub fn declense_with(
        &self,
        word: &str,
        target: &MorphologyVector,
        models: &[Model],
        morphology: Option<&MorphologyVector>,
    ) -> Result<String> {
        let result = declense(word, target, models, morphology)?;
        if self.orthography {
            Ok(fit_orthography(&result))
        } else {
            Ok(result)
        }
    }

    /// Recognizes the current morphology of `word` among the bound models.
    pub fn recognize(&self, word: &str, hint: Option<&MorphologyVector>) -> Result<Recognition<'_>> {
        recognize(word, &self.models, hint)
    }
}
