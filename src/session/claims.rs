//! Display-only decoding of identity claims from the session token.
//!
//! The token is a compact JWT issued by the identity provider. We decode the
//! payload segment locally to get a subject id and a display name; the
//! signature is never checked here. Any trust decision belongs to the
//! backend: these claims only ever drive UI text and request parameters.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// The token could not be parsed as a compact JWT with the expected claims.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("malformed session token")]
pub struct MalformedToken;

/// Identity claims carried in the session token payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct IdentityClaims {
    /// Stable subject identifier assigned by the identity provider.
    #[serde(rename = "userId")]
    pub subject_id: String,
    /// Human-readable name, used for UI text and user-scoped queries.
    #[serde(rename = "username")]
    pub display_name: String,
}

/// Decode the claims out of a compact JWT without verifying its signature.
///
/// # Errors
///
/// Returns [`MalformedToken`] if the token is not a three-segment compact
/// JWT, the payload segment is not url-safe base64, or the claim set lacks
/// the expected fields.
pub fn decode(token: &str) -> Result<IdentityClaims, MalformedToken> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(MalformedToken);
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload).map_err(|_| MalformedToken)?;
    serde_json::from_slice(&bytes).map_err(|_| MalformedToken)
}
