// File: src/persistence.rs
use crate::core::types::ModelCollection;
use crate::error::Result;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Writes the models through a temp file in the target directory, so a
/// crash never leaves a half-written model file behind.
pub fn save_to_disk(models: &ModelCollection, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, models)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    debug!(path = %path.display(), models = models.len(), "model file saved");
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<ModelCollection> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let models: ModelCollection = bincode::deserialize_from(reader)?;
    debug!(path = %path.display(), models = models.len(), "model file loaded");
    Ok(models)
}

pub fn to_json(models: &ModelCollection) -> Result<String> {
    Ok(serde_json::to_string_pretty(models)?)
}

pub fn from_json(json: &str) -> Result<ModelCollection> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::build_model;
    use crate::core::types::MorphologyVector;
    use crate::error::DeclensionError;

    fn models() -> ModelCollection {
        let model = build_model(
            [
                (MorphologyVector::from([0, 0]), "сонце"),
                (MorphologyVector::from([1, 1]), "сонця"),
            ],
            1,
        )
        .unwrap();
        vec![model].into()
    }

    #[test]
    fn saves_and_loads_model_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("models.bin");

        save_to_disk(&models(), &path).unwrap();
        let loaded = load_from_disk(&path).unwrap();

        assert_eq!(loaded, models());
        assert_eq!(loaded[0].stem(), Some("сонц"));
    }

    #[test]
    fn json_export_keeps_vectors_readable() {
        let json = to_json(&models()).unwrap();
        assert!(json.contains("\"exemplar\": \"сонце\""));
        assert_eq!(from_json(&json).unwrap(), models());
    }

    #[test]
    fn json_with_mixed_arity_model_is_rejected() {
        let json = r#"[{"entries":[[[0],"а"],[[1,1],"и"]],"exemplar":null}]"#;
        assert!(matches!(from_json(json), Err(DeclensionError::Json(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_disk(&dir.path().join("absent.bin"));
        assert!(matches!(result, Err(DeclensionError::Io(_))));
    }
}
