// File: src/core/generalizer.rs
use crate::core::types::{LetterGroup, Model, ModelCollection};
use crate::error::{DeclensionError, Result};
use tracing::{debug, warn};

pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Synthesizes models for group letters that no observed root ends with.
///
/// A model covers a group when the last character of its stem belongs to the
/// group. Once the share of group letters seen as root characters reaches
/// `threshold`, every unseen letter gets a copy of each distinct covering
/// paradigm, tagged with a root ending in that letter. Coverage is measured
/// against the input models only.
///
/// Returns the input models followed by the synthesized ones.
pub fn generalize(models: &[Model], groups: &[LetterGroup], threshold: f64) -> Result<ModelCollection> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(DeclensionError::InvalidGroupConfiguration(format!(
            "threshold {} is outside [0, 1]",
            threshold
        )));
    }
    if let Some(index) = groups.iter().position(LetterGroup::is_empty) {
        return Err(DeclensionError::InvalidGroupConfiguration(format!(
            "letter group #{} is empty",
            index
        )));
    }

    let roots: Vec<Option<char>> = models.iter().map(Model::root_char).collect();
    for (index, _) in roots.iter().enumerate().filter(|(_, root)| root.is_none()) {
        warn!(index, "model without a usable stem skipped");
    }
    let mut result: ModelCollection = models.iter().cloned().collect();

    for group in groups {
        let mut covered: Vec<char> = Vec::new();
        let mut sources: Vec<&Model> = Vec::new();

        for (model, root) in models.iter().zip(&roots) {
            let Some(root) = *root else {
                continue;
            };
            if !group.contains(root) {
                continue;
            }
            if !covered.contains(&root) {
                covered.push(root);
            }
            if !sources.iter().any(|known| known.same_paradigm(model)) {
                sources.push(model);
            }
        }

        let coverage = covered.len() as f64 / group.len() as f64;
        if coverage < threshold {
            debug!(group = %String::from(group.clone()), coverage, threshold, "coverage too low");
            continue;
        }

        let mut synthesized = 0usize;
        for &letter in group.letters().iter().filter(|c| !covered.contains(*c)) {
            for source in &sources {
                if let Some(model) = retag(source, letter) {
                    result.push(model);
                    synthesized += 1;
                }
            }
        }
        debug!(
            group = %String::from(group.clone()),
            coverage,
            paradigms = sources.len(),
            synthesized,
            "generalized group"
        );
    }

    Ok(result)
}

/// Copies the suffix table of `model` under a root whose last letter is `letter`.
fn retag(model: &Model, letter: char) -> Option<Model> {
    let mut root = model.stem()?.to_string();
    root.pop()?;
    root.push(letter);
    root.push_str(model.get(model.reference_vector()?)?);
    Some(model.clone().with_exemplar(root))
}
