//! Image upload for roadmap thumbnails.
//!
//! A plain HTTPS POST (not GraphQL): base64 payload plus MIME type in,
//! hosted URL out.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Endpoint of the image upload service.
pub const UPLOAD_ENDPOINT: &str = "https://api.qriosity.app/roadmap-image";

/// Upload size cap enforced client-side before encoding.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// MIME types the upload service accepts.
pub const ACCEPTED_MIME_TYPES: [&str; 4] =
    ["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Wire shape of the upload request.
#[derive(Debug, Serialize)]
pub struct UploadRequest {
    /// Base64-encoded image bytes.
    pub image: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

/// Validate a candidate thumbnail before any encoding work.
///
/// # Errors
///
/// A short human-readable reason, rendered inline by the file input.
pub fn validate_image(mime_type: &str, len: usize) -> Result<(), &'static str> {
    if !ACCEPTED_MIME_TYPES.contains(&mime_type) {
        return Err("Please select a JPEG, PNG, or WEBP image.");
    }
    if len > MAX_UPLOAD_BYTES {
        return Err("Image exceeds the 5MB limit.");
    }
    Ok(())
}

/// Build the upload payload for raw image bytes.
pub fn build_upload_request(bytes: &[u8], mime_type: &str) -> UploadRequest {
    UploadRequest {
        image: STANDARD.encode(bytes),
        mime_type: mime_type.to_owned(),
    }
}

/// Upload an image and return its hosted URL.
///
/// # Errors
///
/// [`ApiError::Network`] on transport failures or non-OK statuses,
/// [`ApiError::Decode`] on malformed bodies.
pub async fn upload_image(bytes: &[u8], mime_type: &str) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = build_upload_request(bytes, mime_type);
        let response = gloo_net::http::Request::post(UPLOAD_ENDPOINT)
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Network(format!(
                "upload endpoint returned {}",
                response.status()
            )));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.url)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (bytes, mime_type);
        Err(ApiError::Unavailable)
    }
}
