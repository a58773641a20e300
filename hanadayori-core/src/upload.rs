//! Photos supplied by the user instead of fetched from the provider.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use hanadayori_model::{PhotoId, PhotoResult, PhotoSrc};
use tracing::debug;

use crate::error::UploadError;

pub const UPLOAD_PHOTOGRAPHER: &str = "あなたの写真";
pub const UPLOAD_ALT: &str = "アップロードした画像";

/// Build a [`PhotoResult`] around raw image bytes.
///
/// Every size variant points at one `data:` URL carrying the bytes. The
/// content type is checked before anything is built.
pub fn photo_from_bytes(
    bytes: &[u8],
    content_type: &str,
) -> Result<PhotoResult, UploadError> {
    let content_type = content_type.trim();
    if !content_type.starts_with("image/") {
        return Err(UploadError::NotAnImage(content_type.to_string()));
    }
    if bytes.is_empty() {
        return Err(UploadError::Empty);
    }

    let data_url =
        format!("data:{content_type};base64,{}", BASE64.encode(bytes));
    let id = PhotoId(Utc::now().timestamp_millis().max(0) as u64);
    debug!(%id, content_type, len = bytes.len(), "built photo from upload");

    Ok(PhotoResult {
        id,
        width: 0,
        height: 0,
        url: data_url.clone(),
        photographer: UPLOAD_PHOTOGRAPHER.to_string(),
        photographer_url: String::new(),
        photographer_id: 0,
        avg_color: None,
        src: PhotoSrc::uniform(data_url),
        liked: false,
        alt: UPLOAD_ALT.to_string(),
    })
}

/// Read an image file and wrap it with [`photo_from_bytes`]. The content
/// type comes from the file extension.
pub async fn photo_from_path(path: &Path) -> Result<PhotoResult, UploadError> {
    let content_type = content_type_for(path).ok_or_else(|| {
        UploadError::NotAnImage(path.display().to_string())
    })?;

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| UploadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    photo_from_bytes(&bytes, content_type)
}

fn content_type_for(path: &Path) -> Option<&'static str> {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => Some("image/jpeg"),
        Some("png") => Some("image/png"),
        Some("webp") => Some("image/webp"),
        Some("gif") => Some("image/gif"),
        Some("avif") => Some("image/avif"),
        _ => None,
    }
}
