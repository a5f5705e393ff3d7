// File: src/taxonomy.rs
//! Coordinate layouts of morphology vectors per part of speech.
//!
//! The zero vector of every layout holds the dictionary (infinitive) form.

use crate::core::types::MorphologyVector;
use crate::error::{DeclensionError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    /// number, case
    Noun,
    /// tense, person, number, gender
    Verb,
    /// case, number, gender
    Adjective,
}

const NOUN: &[&[&str]] = &[
    &["infinitive", "singular", "plural"],
    &["nominative", "genitive", "dative", "accusative", "instrumental", "locative", "vocative"],
];

const VERB: &[&[&str]] = &[
    &["infinitive", "present", "future", "past"],
    &["first", "second", "third"],
    &["singular", "plural"],
    &["masculine", "feminine", "neutral"],
];

const ADJECTIVE: &[&[&str]] = &[
    &["infinitive", "nominative", "genitive", "dative", "accusative", "instrumental", "locative"],
    &["singular", "plural"],
    &["masculine", "feminine", "neutral"],
];

impl PartOfSpeech {
    fn layout(self) -> &'static [&'static [&'static str]] {
        match self {
            PartOfSpeech::Noun => NOUN,
            PartOfSpeech::Verb => VERB,
            PartOfSpeech::Adjective => ADJECTIVE,
        }
    }

    pub fn arity(self) -> usize {
        self.layout().len()
    }

    /// Number of cells in a fully populated paradigm.
    pub fn paradigm_size(self) -> usize {
        self.layout().iter().map(|axis| axis.len()).product()
    }

    pub fn infinitive(self) -> MorphologyVector {
        MorphologyVector::new(vec![0; self.arity()])
    }

    /// Human readable label of every coordinate, or `None` when one is out of range.
    pub fn describe(self, vector: &MorphologyVector) -> Option<Vec<&'static str>> {
        if vector.arity() != self.arity() {
            return None;
        }
        vector
            .coords()
            .iter()
            .zip(self.layout())
            .map(|(&c, axis)| axis.get(c as usize).copied())
            .collect()
    }

    /// Checks that `vector` has this part of speech's arity and stays within
    /// every axis.
    pub fn check(self, vector: &MorphologyVector) -> Result<()> {
        if self.describe(vector).is_some() {
            Ok(())
        } else {
            Err(DeclensionError::InvalidTrainingData(format!(
                "vector {} does not fit the {:?} layout of arity {}",
                vector,
                self,
                self.arity()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arities_and_sizes() {
        assert_eq!(PartOfSpeech::Noun.arity(), 2);
        assert_eq!(PartOfSpeech::Verb.arity(), 4);
        assert_eq!(PartOfSpeech::Adjective.arity(), 3);
        assert_eq!(PartOfSpeech::Verb.paradigm_size(), 72);
        assert_eq!(PartOfSpeech::Adjective.infinitive(), MorphologyVector::from([0, 0, 0]));
    }

    #[test]
    fn describes_coordinates() {
        let labels = PartOfSpeech::Noun.describe(&MorphologyVector::from([1, 2])).unwrap();
        assert_eq!(labels, vec!["singular", "dative"]);
        assert!(PartOfSpeech::Noun.describe(&MorphologyVector::from([3, 0])).is_none());
    }

    #[test]
    fn check_rejects_wrong_arity() {
        assert!(PartOfSpeech::Verb.check(&MorphologyVector::from([3, 0, 0, 1])).is_ok());
        assert!(matches!(
            PartOfSpeech::Verb.check(&MorphologyVector::from([1, 1])),
            Err(DeclensionError::InvalidTrainingData(_))
        ));
    }
}
