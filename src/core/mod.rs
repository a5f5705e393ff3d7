// src/core/mod.rs

pub mod builder;
pub mod engine;
pub mod generalizer;
pub mod orthography;
pub mod recognizer;
pub mod types;
