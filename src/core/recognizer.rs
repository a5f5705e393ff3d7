// File: src/core/recognizer.rs
use crate::core::types::{Model, MorphologyVector};
use crate::error::{DeclensionError, Result};
use tracing::trace;

/// The model entry a word was matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recognition<'m> {
    /// Position of the model in the collection.
    pub index: usize,
    pub model: &'m Model,
    pub vector: &'m MorphologyVector,
    pub suffix: &'m str,
}

impl Recognition<'_> {
    /// The word with the recognized suffix removed.
    pub fn stem<'w>(&self, word: &'w str) -> &'w str {
        &word[..word.len() - self.suffix.len()]
    }
}

/// Finds the model entry whose suffix ends `word`.
///
/// With a `hint` only the entries at that vector are considered. Without one
/// every entry of every model is a candidate, which also recovers the current
/// morphology of the word. The longest matching suffix wins; ties go to the
/// earlier model, then to the smaller vector.
pub fn recognize<'m>(
    word: &str,
    models: &'m [Model],
    hint: Option<&MorphologyVector>,
) -> Result<Recognition<'m>> {
    let mut best: Option<Recognition<'m>> = None;

    for (index, model) in models.iter().enumerate() {
        for (vector, suffix) in model.entries() {
            if hint.is_some_and(|hint| hint != vector) || !word.ends_with(suffix) {
                continue;
            }
            trace!(index, %vector, suffix, "suffix matches");
            // Both are suffixes of the same word, so byte length orders them.
            if best.map_or(true, |b| suffix.len() > b.suffix.len()) {
                best = Some(Recognition { index, model, vector, suffix });
            }
        }
    }

    best.ok_or_else(|| DeclensionError::UnrecognizedWord {
        word: word.to_string(),
    })
}
