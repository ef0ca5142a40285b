//! Shared domain records for the facility atlas core
//!
//! Every other crate in the workspace consumes the [`Facility`] record
//! defined here. Records deserialize directly from the dataset JSON files,
//! so field names follow the dataset's camelCase keys.

#![warn(missing_docs)]

pub mod error;
pub mod facility;

pub use error::InsufficientInputError;
pub use facility::{Facility, FacilityMetadata, ProviderType};
