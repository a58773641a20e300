//! # Hanadayori Server
//!
//! HTTP front for flower greeting cards:
//!
//! - an image search proxy that holds the Pexels credential server-side
//! - share-link creation and resolution
//! - the server-rendered card viewer
#![allow(missing_docs)]

pub mod errors;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod shutdown;
pub mod state;

pub use errors::{AppError, AppResult};
pub use routes::create_app;
pub use state::AppState;
