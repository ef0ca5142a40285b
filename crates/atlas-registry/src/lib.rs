//! Dataset loading, validation, and snapshot management
//!
//! The core computation crates work over plain immutable records; this
//! crate owns getting those records into memory. Datasets are validated
//! once at load time (skip and warn on malformed entries) so nothing
//! downstream has to re-check shapes, then published as an atomically
//! swappable snapshot that an external sync can replace wholesale.

pub mod registry;
pub mod source;

use thiserror::Error;

pub use registry::{AtlasRegistry, AtlasSnapshot};
pub use source::{DatasetSource, InMemorySource, JsonDirectorySource};

/// Errors surfaced while loading a dataset
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A dataset file could not be read
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    /// A dataset file was not valid JSON for its expected shape
    #[error("malformed dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation left no usable facilities
    #[error("dataset contains no valid facilities")]
    EmptyDataset,
}
