// File: src/training.rs
use crate::config::TrainingConfig;
use crate::core::builder::build_models;
use crate::core::generalizer::generalize;
use crate::core::types::{ModelCollection, MorphologyVector};
use crate::error::Result;
use crate::taxonomy::PartOfSpeech;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// One sample form of a lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEntry {
    pub vector: MorphologyVector,
    pub form: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexeme {
    pub forms: Vec<FormEntry>,
}

/// Training data as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSet {
    /// When set, every vector is checked against this layout.
    #[serde(default)]
    pub part_of_speech: Option<PartOfSpeech>,
    pub lexemes: Vec<Lexeme>,
}

impl TrainingSet {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

pub struct TrainingEngine {
    config: TrainingConfig,
}

impl TrainingEngine {
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Builds a model per lexeme, then generalizes them over the configured
    /// letter groups.
    pub fn train(&self, set: &TrainingSet) -> Result<ModelCollection> {
        self.config.validate()?;

        if let Some(pos) = set.part_of_speech {
            for entry in set.lexemes.iter().flat_map(|lexeme| &lexeme.forms) {
                pos.check(&entry.vector)?;
            }
        }

        let lexemes = set.lexemes.iter().map(|lexeme| {
            lexeme
                .forms
                .iter()
                .map(|entry| (entry.vector.clone(), entry.form.as_str()))
        });
        let built = build_models(lexemes, self.config.minsize)?;
        let models = generalize(&built, &self.config.groups, self.config.threshold)?;

        info!(
            lexemes = set.lexemes.len(),
            built = built.len(),
            synthesized = models.len() - built.len(),
            "training finished"
        );
        Ok(models)
    }
}
