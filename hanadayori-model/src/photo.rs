use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Provider-assigned photo identifier.
///
/// Unique among the photos of a single search response. Locally supplied
/// images use the creation timestamp (milliseconds) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PhotoId(pub u64);

impl PhotoId {
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for PhotoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pre-sized renditions of one source image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PhotoVariant {
    Original,
    Large2x,
    Large,
    Medium,
    Small,
    Portrait,
    Landscape,
    Tiny,
}

impl PhotoVariant {
    pub const ALL: [PhotoVariant; 8] = [
        PhotoVariant::Original,
        PhotoVariant::Large2x,
        PhotoVariant::Large,
        PhotoVariant::Medium,
        PhotoVariant::Small,
        PhotoVariant::Portrait,
        PhotoVariant::Landscape,
        PhotoVariant::Tiny,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            PhotoVariant::Original => "original",
            PhotoVariant::Large2x => "large2x",
            PhotoVariant::Large => "large",
            PhotoVariant::Medium => "medium",
            PhotoVariant::Small => "small",
            PhotoVariant::Portrait => "portrait",
            PhotoVariant::Landscape => "landscape",
            PhotoVariant::Tiny => "tiny",
        }
    }
}

impl Display for PhotoVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhotoVariant {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhotoVariant::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownVariant(s.to_string()))
    }
}

/// Variant name -> URL mapping as delivered by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhotoSrc {
    pub original: String,
    pub large2x: String,
    pub large: String,
    pub medium: String,
    pub small: String,
    pub portrait: String,
    pub landscape: String,
    pub tiny: String,
}

impl PhotoSrc {
    /// Every variant pointing at the same URL.
    pub fn uniform(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            original: url.clone(),
            large2x: url.clone(),
            large: url.clone(),
            medium: url.clone(),
            small: url.clone(),
            portrait: url.clone(),
            landscape: url.clone(),
            tiny: url,
        }
    }

    pub fn get(&self, variant: PhotoVariant) -> &str {
        match variant {
            PhotoVariant::Original => &self.original,
            PhotoVariant::Large2x => &self.large2x,
            PhotoVariant::Large => &self.large,
            PhotoVariant::Medium => &self.medium,
            PhotoVariant::Small => &self.small,
            PhotoVariant::Portrait => &self.portrait,
            PhotoVariant::Landscape => &self.landscape,
            PhotoVariant::Tiny => &self.tiny,
        }
    }
}

/// One selectable image.
///
/// Immutable once constructed: either decoded from a search response or
/// synthesized from a user upload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhotoResult {
    pub id: PhotoId,
    pub width: u32,
    pub height: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub url: String,
    pub photographer: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub photographer_url: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub photographer_id: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub avg_color: Option<String>,
    pub src: PhotoSrc,
    #[cfg_attr(feature = "serde", serde(default))]
    pub liked: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "nullable_string")
    )]
    pub alt: String,
}

impl PhotoResult {
    pub fn variant_url(&self, variant: PhotoVariant) -> &str {
        self.src.get(variant)
    }

    /// Pixel aspect ratio, `None` for locally supplied images whose size is
    /// unknown.
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.width > 0 && self.height > 0)
            .then(|| self.width as f32 / self.height as f32)
    }
}

#[cfg(feature = "serde")]
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
