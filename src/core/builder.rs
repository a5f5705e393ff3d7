// File: src/core/builder.rs
use crate::core::types::{Model, ModelCollection, MorphologyVector};
use crate::error::{DeclensionError, Result};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::debug;

/// Builds the suffix table of one lexeme from its sample forms.
///
/// The stem is the longest common prefix of all forms, cut back so that every
/// form keeps at least `minsize` characters of suffix. For every input pair
/// `stem + model[vector] == form` holds afterwards.
pub fn build_model<I, S>(forms: I, minsize: usize) -> Result<Model>
where
    I: IntoIterator<Item = (MorphologyVector, S)>,
    S: Into<String>,
{
    let forms = collect_forms(forms)?;

    let mut min_len = usize::MAX;
    for (vector, form) in &forms {
        let len = form.chars().count();
        if len < minsize {
            return Err(DeclensionError::InvalidTrainingData(format!(
                "form '{}' at {} is shorter than minsize {}",
                form, vector, minsize
            )));
        }
        min_len = min_len.min(len);
    }

    let stem_len = common_prefix_len(forms.values()).min(min_len - minsize);
    debug!(forms = forms.len(), stem_len, minsize, "built stem");

    let suffixes = forms
        .iter()
        .map(|(vector, form)| (vector.clone(), form[char_offset(form, stem_len)..].to_string()));
    let model = Model::from_suffixes(suffixes)?;

    let exemplar = model
        .reference_vector()
        .and_then(|vector| forms.get(vector))
        .cloned()
        .unwrap_or_default();
    Ok(model.with_exemplar(exemplar))
}

/// Builds one model per lexeme, keeping the input order.
pub fn build_models<L, I, S>(lexemes: L, minsize: usize) -> Result<ModelCollection>
where
    L: IntoIterator<Item = I>,
    I: IntoIterator<Item = (MorphologyVector, S)>,
    S: Into<String>,
{
    lexemes
        .into_iter()
        .map(|forms| build_model(forms, minsize))
        .collect()
}

fn collect_forms<I, S>(forms: I) -> Result<BTreeMap<MorphologyVector, String>>
where
    I: IntoIterator<Item = (MorphologyVector, S)>,
    S: Into<String>,
{
    let mut collected: BTreeMap<MorphologyVector, String> = BTreeMap::new();
    let mut arity = None;

    for (vector, form) in forms {
        let form = form.into();
        match arity {
            None if vector.arity() == 0 => {
                return Err(DeclensionError::InvalidTrainingData(
                    "morphology vectors must have at least one coordinate".to_string(),
                ));
            }
            None => arity = Some(vector.arity()),
            Some(expected) if expected != vector.arity() => {
                return Err(DeclensionError::InvalidTrainingData(format!(
                    "vector {} has arity {}, expected {}",
                    vector,
                    vector.arity(),
                    expected
                )));
            }
            Some(_) => {}
        }

        match collected.entry(vector) {
            Entry::Vacant(slot) => {
                slot.insert(form);
            }
            Entry::Occupied(slot) if *slot.get() != form => {
                return Err(DeclensionError::InvalidTrainingData(format!(
                    "conflicting forms '{}' and '{}' at {}",
                    slot.get(),
                    form,
                    slot.key()
                )));
            }
            Entry::Occupied(_) => {}
        }
    }

    if collected.is_empty() {
        return Err(DeclensionError::InvalidTrainingData(
            "no forms given".to_string(),
        ));
    }
    Ok(collected)
}

/// Length in characters of the prefix shared by every word.
fn common_prefix_len<'a, I: IntoIterator<Item = &'a String>>(words: I) -> usize {
    let mut words = words.into_iter();
    let Some(first) = words.next() else {
        return 0;
    };
    let mut len = first.chars().count();
    for word in words {
        len = first
            .chars()
            .zip(word.chars())
            .take(len)
            .take_while(|(a, b)| a == b)
            .count();
    }
    len
}

/// Byte offset of the `n`-th character, or the end of the string.
pub(crate) fn char_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v<const N: usize>(coords: [u8; N]) -> MorphologyVector {
        MorphologyVector::from(coords)
    }

    fn smile_forms() -> Vec<(MorphologyVector, &'static str)> {
        vec![
            (v([0, 0]), "усмішка"),
            (v([1, 0]), "усмішка"),
            (v([1, 1]), "усмішки"),
            (v([1, 2]), "усмішці"),
            (v([2, 6]), "усмішки"),
        ]
    }

    #[test]
    fn extracts_stem_and_suffixes() {
        let model = build_model(smile_forms(), 2).unwrap();
        assert_eq!(model.get(&v([0, 0])), Some("ка"));
        assert_eq!(model.get(&v([1, 1])), Some("ки"));
        assert_eq!(model.get(&v([1, 2])), Some("ці"));
        assert_eq!(model.get(&v([2, 6])), Some("ки"));
        assert_eq!(model.stem(), Some("усміш"));
    }

    #[test]
    fn minsize_shortens_stem() {
        let model = build_model(smile_forms(), 3).unwrap();
        assert_eq!(model.get(&v([0, 0])), Some("шка"));
        assert_eq!(model.get(&v([1, 2])), Some("шці"));
        assert_eq!(model.stem(), Some("усмі"));
    }

    #[test]
    fn minsize_equal_to_shortest_form_empties_stem() {
        let model = build_model([(v([0]), "кіт"), (v([1]), "кота")], 3).unwrap();
        assert_eq!(model.get(&v([0])), Some("кіт"));
        assert_eq!(model.get(&v([1])), Some("кота"));
        assert_eq!(model.stem(), Some(""));
    }

    #[test]
    fn single_form_keeps_minsize_tail() {
        let model = build_model([(v([0, 0]), "вода")], 2).unwrap();
        assert_eq!(model.get(&v([0, 0])), Some("да"));

        let model = build_model([(v([0, 0]), "вода")], 0).unwrap();
        assert_eq!(model.get(&v([0, 0])), Some(""));
        assert_eq!(model.stem(), Some("вода"));
    }

    #[test]
    fn rejects_bad_training_data() {
        let empty: Vec<(MorphologyVector, String)> = Vec::new();
        assert!(matches!(
            build_model(empty, 0),
            Err(DeclensionError::InvalidTrainingData(_))
        ));
        assert!(matches!(
            build_model([(v([0, 0]), "рука"), (v([1, 0, 0]), "руки")], 0),
            Err(DeclensionError::InvalidTrainingData(_))
        ));
        assert!(matches!(
            build_model([(v([0]), "я")], 2),
            Err(DeclensionError::InvalidTrainingData(_))
        ));
        assert!(matches!(
            build_model([(v([0]), "рука"), (v([0]), "руки")], 0),
            Err(DeclensionError::InvalidTrainingData(_))
        ));
    }

    #[test]
    fn builds_models_in_order() {
        let models = build_models(
            vec![
                vec![(v([0]), "нога"), (v([1]), "ноги")],
                vec![(v([0]), "вікно"), (v([1]), "вікна")],
            ],
            1,
        )
        .unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].stem(), Some("ног"));
        assert_eq!(models[1].stem(), Some("вікн"));
    }
}
