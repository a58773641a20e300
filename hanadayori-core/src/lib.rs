//! Core library for Hanadayori.
//!
//! A card is one flower photograph plus a message. Cards are never stored:
//! the share link itself carries the image URL, the photographer credit and
//! the message as query parameters.
//!
//! - [`providers`]: the image gateway in front of the stock-photo API
//! - [`share`]: encoding a card into a link and reading it back
//! - [`wizard`]: the select, compose, share flow that produces a link
//! - [`upload`]: photos supplied by the user instead of the provider
//! - [`feed`] and [`flowers`]: the picker's photo feed and vocabulary
#![allow(missing_docs)]

pub mod api;
pub mod error;
pub mod feed;
pub mod flowers;
pub mod providers;
pub mod share;
pub mod upload;
pub mod wizard;

pub use error::{FetchFailed, LinkError, UploadError, WizardError};
pub use feed::FlowerFeed;
pub use flowers::{FLOWER_KINDS, FlowerKind, VARIETY_TERMS};
pub use providers::{ApiKey, ImageProvider, PexelsProvider, SearchQuery};
pub use share::{Decoded, LinkCodec};
pub use wizard::{Wizard, WizardMessage, WizardState, WizardStep};

pub use hanadayori_model as model;
