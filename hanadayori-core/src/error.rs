use std::path::PathBuf;

use thiserror::Error;

use crate::wizard::WizardStep;

/// The single failure kind of the image gateway.
///
/// Network errors, rejected credentials, rate limiting and malformed bodies
/// all collapse into this value; the cause is logged where it happens and
/// is not carried to callers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Failed to fetch images")]
pub struct FetchFailed;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("share link is {len} bytes, exceeding the {limit} byte limit")]
    TooLarge { len: usize, limit: usize },

    #[error("card has no image URL")]
    EmptyImageUrl,

    #[error("share link base cannot carry a query: {0}")]
    InvalidBase(String),
}

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("not an image: {0}")]
    NotAnImage(String),

    #[error("image file is empty")]
    Empty,

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("no image selected")]
    NoImageSelected,

    #[error("{message} is not accepted while {step}")]
    UnexpectedMessage {
        step: WizardStep,
        message: &'static str,
    },

    #[error(transparent)]
    Link(#[from] LinkError),
}
