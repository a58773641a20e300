//! Core data model definitions shared across Hanadayori crates.
#![allow(missing_docs)]

pub mod card;
pub mod error;
pub mod photo;
pub mod search;

// Intentionally curated re-exports for downstream consumers.
pub use card::CardState;
pub use error::{ModelError, Result as ModelResult};
pub use photo::{PhotoId, PhotoResult, PhotoSrc, PhotoVariant};
pub use search::{Orientation, SearchPage};
