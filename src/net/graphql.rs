//! GraphQL transport: request envelope, identity decoration, error mapping.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`. Other builds get an
//! [`ApiError::Unavailable`] stub so pages degrade without panicking.
//!
//! Every request carries the static API key; when the token store holds a
//! session token it is additionally attached as a bearer credential. Absent
//! token, the request goes out unauthenticated: authorization is enforced
//! server-side. There is no retry and no refresh-on-401: an auth failure
//! surfaces to the caller, which typically forces a logout.

#[cfg(test)]
#[path = "graphql_test.rs"]
mod graphql_test;

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use super::error::{ApiError, AppErrorKind};

/// Endpoint of the hosted GraphQL API.
pub const GRAPHQL_ENDPOINT: &str = "https://api.qriosity.app/graphql";

#[cfg(feature = "csr")]
const API_KEY: &str = "da2-qriosity-web-client";

/// Outgoing request envelope: a query document plus its variables.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<serde_json::Value>,
    errors: Option<Vec<GraphQlErrorEntry>>,
}

/// Bearer header value for a stored token, if one is present.
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token.map(|token| format!("Bearer {token}"))
}

/// Map a backend error message to a typed error once, at the transport edge.
pub fn error_from_message(message: &str) -> ApiError {
    match message {
        "invalid email or password" | "invalid username or password" => {
            ApiError::InvalidCredentials
        }
        "user has no views remaining" => ApiError::Application {
            kind: AppErrorKind::NoViewsRemaining,
            message: message.to_owned(),
        },
        "roadmap not found" => ApiError::Application {
            kind: AppErrorKind::RoadmapNotFound,
            message: message.to_owned(),
        },
        "User already exists" => ApiError::Application {
            kind: AppErrorKind::UserExists,
            message: message.to_owned(),
        },
        other => ApiError::Application {
            kind: AppErrorKind::Other,
            message: other.to_owned(),
        },
    }
}

/// Reduce a raw response body to its `data` payload or a typed error.
///
/// # Errors
///
/// [`ApiError::Decode`] when the body is not a GraphQL response, otherwise
/// the mapped error for the first entry of a non-empty `errors` array.
pub fn unwrap_response(body: &str) -> Result<serde_json::Value, ApiError> {
    let response: GraphQlResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    if let Some(errors) = response.errors {
        if let Some(first) = errors.first() {
            return Err(error_from_message(&first.message));
        }
    }

    response
        .data
        .ok_or_else(|| ApiError::Decode("response carried no data".to_owned()))
}

/// Pull one named field out of a `data` payload and deserialize it.
///
/// # Errors
///
/// [`ApiError::Decode`] when the field is absent, null, or fails to
/// deserialize into `T`.
pub fn decode_field<T: DeserializeOwned>(
    mut data: serde_json::Value,
    field: &str,
) -> Result<T, ApiError> {
    let value = match data.get_mut(field) {
        Some(value) if !value.is_null() => value.take(),
        _ => return Err(ApiError::Decode(format!("missing field `{field}`"))),
    };
    serde_json::from_value(value).map_err(|e| ApiError::Decode(format!("field `{field}`: {e}")))
}

/// Execute one GraphQL operation against the remote endpoint.
///
/// # Errors
///
/// [`ApiError::Network`] on transport failures, [`ApiError::Decode`] on
/// malformed bodies, and the mapped application error when the backend
/// reports one.
pub async fn execute(
    query: &str,
    variables: serde_json::Value,
) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "csr")]
    {
        let envelope = GraphQlRequest { query, variables };

        let mut request = gloo_net::http::Request::post(GRAPHQL_ENDPOINT)
            .header("x-api-key", API_KEY);
        if let Some(auth) =
            bearer_header(crate::session::token_store::read().as_deref())
        {
            request = request.header("Authorization", &auth);
        }

        let response = request
            .json(&envelope)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Network(format!(
                "graphql endpoint returned {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        unwrap_response(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (query, variables);
        Err(ApiError::Unavailable)
    }
}
