// src/core/types.rs
use crate::error::DeclensionError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::num::ParseIntError;
use std::ops::Deref;
use std::str::FromStr;

/// Grammatical features of one word form, one small integer per coordinate.
/// What each coordinate means is up to the part-of-speech taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MorphologyVector(Vec<u8>);

impl MorphologyVector {
    pub fn new(coords: Vec<u8>) -> Self {
        Self(coords)
    }

    pub fn arity(&self) -> usize {
        self.0.len()
    }

    pub fn coords(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> From<[u8; N]> for MorphologyVector {
    fn from(coords: [u8; N]) -> Self {
        Self(coords.to_vec())
    }
}

impl From<Vec<u8>> for MorphologyVector {
    fn from(coords: Vec<u8>) -> Self {
        Self(coords)
    }
}

impl fmt::Display for MorphologyVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

/// Accepts `1,2`, `1, 2` and `(1, 2)`.
impl FromStr for MorphologyVector {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        inner
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// The declension paradigm of one lexeme: a suffix for every known morphology.
///
/// The stem is never stored. When the model came out of training it keeps one
/// exemplar form (the form at its reference vector) and the stem is derived as
/// `exemplar - suffix`. A model is never empty and all of its vectors share
/// one arity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ModelRepr", into = "ModelRepr")]
pub struct Model {
    suffixes: BTreeMap<MorphologyVector, String>,
    exemplar: Option<String>,
}

/// On-disk shape of a model. JSON maps need string keys, so entries are pairs.
#[derive(Serialize, Deserialize)]
struct ModelRepr {
    entries: Vec<(MorphologyVector, String)>,
    #[serde(default)]
    exemplar: Option<String>,
}

impl TryFrom<ModelRepr> for Model {
    type Error = DeclensionError;

    fn try_from(repr: ModelRepr) -> Result<Self, Self::Error> {
        let entries = repr.entries.len();
        let suffixes: BTreeMap<MorphologyVector, String> = repr.entries.into_iter().collect();
        if suffixes.len() != entries {
            return Err(DeclensionError::InvalidTrainingData(
                "model lists the same vector twice".to_string(),
            ));
        }
        check_table(&suffixes)?;
        Ok(Self {
            suffixes,
            exemplar: repr.exemplar,
        })
    }
}

/// Rejects empty tables and tables mixing vector arities.
fn check_table(suffixes: &BTreeMap<MorphologyVector, String>) -> Result<(), DeclensionError> {
    let mut vectors = suffixes.keys();
    let Some(first) = vectors.next() else {
        return Err(DeclensionError::InvalidTrainingData(
            "model has no suffixes".to_string(),
        ));
    };
    if first.arity() == 0 {
        return Err(DeclensionError::InvalidTrainingData(
            "morphology vectors must have at least one coordinate".to_string(),
        ));
    }
    if let Some(odd) = vectors.find(|v| v.arity() != first.arity()) {
        return Err(DeclensionError::InvalidTrainingData(format!(
            "vector {} has arity {}, expected {}",
            odd,
            odd.arity(),
            first.arity()
        )));
    }
    Ok(())
}

impl From<Model> for ModelRepr {
    fn from(model: Model) -> Self {
        Self {
            entries: model.suffixes.into_iter().collect(),
            exemplar: model.exemplar,
        }
    }
}

impl Model {
    /// Creates an untagged model straight from a suffix table.
    pub fn from_suffixes<I, S>(entries: I) -> crate::error::Result<Self>
    where
        I: IntoIterator<Item = (MorphologyVector, S)>,
        S: Into<String>,
    {
        let suffixes: BTreeMap<MorphologyVector, String> =
            entries.into_iter().map(|(v, s)| (v, s.into())).collect();
        check_table(&suffixes)?;
        Ok(Self {
            suffixes,
            exemplar: None,
        })
    }

    pub(crate) fn with_exemplar(mut self, exemplar: String) -> Self {
        self.exemplar = Some(exemplar);
        self
    }

    pub fn get(&self, vector: &MorphologyVector) -> Option<&str> {
        self.suffixes.get(vector).map(String::as_str)
    }

    /// Entries in vector order.
    pub fn entries(&self) -> impl Iterator<Item = (&MorphologyVector, &str)> {
        self.suffixes.iter().map(|(v, s)| (v, s.as_str()))
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    pub fn arity(&self) -> Option<usize> {
        self.suffixes.keys().next().map(MorphologyVector::arity)
    }

    /// The populated vector with the shortest suffix; the first one in vector
    /// order wins a tie.
    pub fn reference_vector(&self) -> Option<&MorphologyVector> {
        let mut best: Option<(&MorphologyVector, usize)> = None;
        for (vector, suffix) in &self.suffixes {
            let len = suffix.chars().count();
            if best.map_or(true, |(_, shortest)| len < shortest) {
                best = Some((vector, len));
            }
        }
        best.map(|(vector, _)| vector)
    }

    pub fn exemplar(&self) -> Option<&str> {
        self.exemplar.as_deref()
    }

    pub fn stem(&self) -> Option<&str> {
        let exemplar = self.exemplar.as_deref()?;
        let suffix = self.get(self.reference_vector()?)?;
        exemplar.strip_suffix(suffix)
    }

    /// The last stem character, sitting right before the suffix boundary.
    pub fn root_char(&self) -> Option<char> {
        self.stem()?.chars().last()
    }

    /// True when both models carry exactly the same suffix table.
    pub fn same_paradigm(&self, other: &Model) -> bool {
        self.suffixes == other.suffixes
    }
}

/// An ordered set of models. Order matters for recognition tie-breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelCollection(Vec<Model>);

impl ModelCollection {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, model: Model) {
        self.0.push(model);
    }

    pub fn into_inner(self) -> Vec<Model> {
        self.0
    }
}

impl Deref for ModelCollection {
    type Target = [Model];

    fn deref(&self) -> &[Model] {
        &self.0
    }
}

impl From<Vec<Model>> for ModelCollection {
    fn from(models: Vec<Model>) -> Self {
        Self(models)
    }
}

impl FromIterator<Model> for ModelCollection {
    fn from_iter<I: IntoIterator<Item = Model>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ModelCollection {
    type Item = Model;
    type IntoIter = std::vec::IntoIter<Model>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ModelCollection {
    type Item = &'a Model;
    type IntoIter = std::slice::Iter<'a, Model>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Letters that alternate with each other at the stem/suffix boundary.
/// Repeated letters are collapsed, first occurrence keeps its place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LetterGroup {
    letters: Vec<char>,
}

impl LetterGroup {
    pub fn new<I: IntoIterator<Item = char>>(letters: I) -> Self {
        let mut unique = Vec::new();
        for c in letters {
            if !unique.contains(&c) {
                unique.push(c);
            }
        }
        Self { letters: unique }
    }

    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&c)
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl From<&str> for LetterGroup {
    fn from(letters: &str) -> Self {
        Self::new(letters.chars())
    }
}

impl From<String> for LetterGroup {
    fn from(letters: String) -> Self {
        Self::new(letters.chars())
    }
}

impl From<LetterGroup> for String {
    fn from(group: LetterGroup) -> Self {
        group.letters.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_parses_and_displays() {
        let v: MorphologyVector = "(1, 2)".parse().unwrap();
        assert_eq!(v, MorphologyVector::from([1, 2]));
        assert_eq!(v.to_string(), "(1, 2)");
        assert_eq!("0,3,1".parse::<MorphologyVector>().unwrap().arity(), 3);
        assert!("1,x".parse::<MorphologyVector>().is_err());
    }

    #[test]
    fn reference_vector_prefers_shortest_then_first() {
        let model = Model::from_suffixes([
            (MorphologyVector::from([0, 0]), "а"),
            (MorphologyVector::from([1, 0]), "ою"),
            (MorphologyVector::from([1, 1]), "у"),
        ])
        .unwrap();
        assert_eq!(model.reference_vector(), Some(&MorphologyVector::from([0, 0])));
    }

    #[test]
    fn stem_is_derived_from_exemplar() {
        let model = Model::from_suffixes([
            (MorphologyVector::from([0, 0]), "о"),
            (MorphologyVector::from([1, 1]), "ом"),
        ])
        .unwrap()
        .with_exemplar("вікно".to_string());
        assert_eq!(model.stem(), Some("вікн"));
        assert_eq!(model.root_char(), Some('н'));
    }

    #[test]
    fn untagged_model_has_no_stem() {
        let model = Model::from_suffixes([(MorphologyVector::from([0]), "и")]).unwrap();
        assert_eq!(model.stem(), None);
        assert_eq!(model.root_char(), None);
    }

    #[test]
    fn suffix_table_must_share_one_arity() {
        let mixed = Model::from_suffixes([
            (MorphologyVector::from([0]), "а"),
            (MorphologyVector::from([1, 1, 1]), "и"),
        ]);
        assert!(matches!(mixed, Err(DeclensionError::InvalidTrainingData(_))));

        let empty: Vec<(MorphologyVector, &str)> = Vec::new();
        assert!(matches!(
            Model::from_suffixes(empty),
            Err(DeclensionError::InvalidTrainingData(_))
        ));
        assert!(matches!(
            Model::from_suffixes([(MorphologyVector::new(Vec::new()), "а")]),
            Err(DeclensionError::InvalidTrainingData(_))
        ));
    }

    #[test]
    fn deserialized_model_is_checked() {
        let mixed = r#"{"entries":[[[0],"а"],[[1,1],"и"]],"exemplar":null}"#;
        assert!(serde_json::from_str::<Model>(mixed).is_err());

        let empty = r#"{"entries":[],"exemplar":null}"#;
        assert!(serde_json::from_str::<Model>(empty).is_err());

        let repeated = r#"{"entries":[[[0],"а"],[[0],"и"]]}"#;
        assert!(serde_json::from_str::<Model>(repeated).is_err());

        let valid = r#"{"entries":[[[0,0],"а"],[[1,1],"и"]],"exemplar":"нога"}"#;
        let model: Model = serde_json::from_str(valid).unwrap();
        assert_eq!(model.arity(), Some(2));
        assert_eq!(model.stem(), Some("ног"));
    }

    #[test]
    fn letter_group_collapses_duplicates() {
        let group = LetterGroup::from("птсп");
        assert_eq!(group.len(), 3);
        assert!(group.contains('с'));
        assert_eq!(String::from(group), "птс");
    }
}
