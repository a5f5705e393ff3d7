// File: src/error.rs
use crate::core::types::MorphologyVector;
use thiserror::Error;

/// Every failure the declension engine can report.
#[derive(Error, Debug)]
pub enum DeclensionError {
    /// Empty form set, mismatched arities, or a form shorter than `minsize`.
    #[error("invalid training data: {0}")]
    InvalidTrainingData(String),

    /// An empty letter group or a threshold outside [0, 1].
    #[error("invalid group configuration: {0}")]
    InvalidGroupConfiguration(String),

    /// No (model, vector) suffix matches the word.
    #[error("no model suffix matches the word '{word}'")]
    UnrecognizedWord { word: String },

    /// The matched model has no suffix for the requested morphology.
    #[error("matched model has no suffix for morphology {target}")]
    UnknownTargetMorphology { target: MorphologyVector },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("model file codec error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DeclensionError>;
