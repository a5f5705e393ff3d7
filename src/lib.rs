// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod taxonomy;
pub mod training;

pub use crate::core::builder::{build_model, build_models};
pub use crate::core::engine::{declense, Declensor};
pub use crate::core::generalizer::generalize;
pub use crate::core::recognizer::{recognize, Recognition};
pub use crate::core::types::{LetterGroup, Model, ModelCollection, MorphologyVector};
pub use crate::error::{DeclensionError, Result};
