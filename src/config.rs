// File: src/config.rs
use crate::core::generalizer::DEFAULT_THRESHOLD;
use crate::core::types::LetterGroup;
use crate::error::{DeclensionError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Consonant and vowel alternation classes of Ukrainian.
pub const UKRAINIAN_GROUPS: [&str; 6] = [
    "мвнлрй",
    "дзжгґб",
    "птсцшчпкхф",
    "аіуео",
    "яїюєь",
    "шчщс",
];

/// Knobs of the training pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Minimum number of characters every suffix keeps.
    pub minsize: usize,
    /// Share of a letter group that must be observed before generalizing to it.
    pub threshold: f64,
    pub groups: Vec<LetterGroup>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            minsize: 0,
            threshold: DEFAULT_THRESHOLD,
            groups: Vec::new(),
        }
    }
}

impl TrainingConfig {
    pub fn ukrainian() -> Self {
        Self {
            groups: UKRAINIAN_GROUPS.iter().map(|&g| LetterGroup::from(g)).collect(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(DeclensionError::InvalidGroupConfiguration(format!(
                "threshold {} is outside [0, 1]",
                self.threshold
            )));
        }
        if self.groups.iter().any(LetterGroup::is_empty) {
            return Err(DeclensionError::InvalidGroupConfiguration(
                "letter groups must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
