//! Shareable State Codec.
//!
//! A card travels as three query parameters on the viewer URL:
//!
//! ```text
//! <origin>/view?imageUrl=<...>&photographer=<...>&message=<...>
//! ```
//!
//! There is no server-side copy of a card. Decoding never fails: a link
//! missing any of the three keys decodes to [`Decoded::Incomplete`].
//!
//! Links carry no checksum or signature. Anyone holding a link can edit
//! it; a greeting card is not a security boundary.

pub mod codec;

pub use codec::{
    DEFAULT_MAX_LINK_LEN, Decoded, KEY_IMAGE_URL, KEY_MESSAGE, KEY_PHOTOGRAPHER,
    LinkCodec, MIN_LINK_LEN,
};
