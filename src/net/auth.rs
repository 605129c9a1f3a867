//! Auth facade: account operations against the remote API plus token-store
//! bookkeeping.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only writer of the token store. Registration deliberately
//! does NOT establish a session: accounts confirm their email first and
//! then log in, so a token only ever appears via [`login`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::error::ApiError;
use super::graphql;
use super::types::{Acknowledged, AuthPayload};
use crate::session::claims::{self, IdentityClaims};
use crate::session::token_store;

const LOGIN_QUERY: &str = "\
query Login($username: String!, $password: String!) {
    login(username: $username, password: $password) {
        token
    }
}";

const REGISTER_MUTATION: &str = "\
mutation Register($username: String!, $password: String!, $email: String!, $topics: [String!]!) {
    register(username: $username, password: $password, email: $email, topics: $topics) {
        username
    }
}";

const CONFIRM_EMAIL_MUTATION: &str = "\
mutation ConfirmEmail($email: String!, $token: String!) {
    confirmEmail(email: $email, token: $token) {
        success
    }
}";

const RESEND_CONFIRMATION_QUERY: &str = "\
query ResendConfirmationEmail($email: String!) {
    resendConfirmationEmail(email: $email) {
        success
    }
}";

/// Exchange credentials for a session token and store it.
///
/// # Errors
///
/// [`ApiError::InvalidCredentials`] when the backend rejects the pair,
/// [`ApiError::Network`] on transport failure, [`ApiError::Decode`] when
/// the returned token is not decodable.
pub async fn login(username: &str, password: &str) -> Result<IdentityClaims, ApiError> {
    let variables = serde_json::json!({ "username": username, "password": password });
    let data = graphql::execute(LOGIN_QUERY, variables).await?;
    let payload: AuthPayload = graphql::decode_field(data, "login")?;

    // Decode before storing so an authenticated session always carries
    // claims we can render.
    let identity = claims::decode(&payload.token)
        .map_err(|_| ApiError::Decode("login returned an undecodable token".to_owned()))?;
    token_store::save(&payload.token);
    Ok(identity)
}

/// Create an account. No token is stored; the caller sends the user through
/// email confirmation and a fresh login.
///
/// # Errors
///
/// [`ApiError::Application`] with [`AppErrorKind::UserExists`] on name
/// collisions, [`ApiError::Network`] on transport failure.
///
/// [`AppErrorKind::UserExists`]: super::error::AppErrorKind::UserExists
pub async fn register(
    username: &str,
    password: &str,
    email: &str,
    topics: &[String],
) -> Result<(), ApiError> {
    let variables = serde_json::json!({
        "username": username,
        "password": password,
        "email": email,
        "topics": topics,
    });
    graphql::execute(REGISTER_MUTATION, variables).await.map(|_| ())
}

/// Exchange a one-time code for email confirmation.
///
/// Fails soft: any rejection or transport problem yields `false` so the
/// caller can show inline retry UI.
pub async fn confirm_email(email: &str, code: &str) -> bool {
    let variables = serde_json::json!({ "email": email, "token": code });
    match graphql::execute(CONFIRM_EMAIL_MUTATION, variables).await {
        Ok(data) => graphql::decode_field::<Acknowledged>(data, "confirmEmail")
            .map(|ack| ack.success)
            .unwrap_or(false),
        Err(_) => false,
    }
}

/// Re-trigger the confirmation email. Fails soft like [`confirm_email`].
pub async fn resend_confirmation(email: &str) -> bool {
    let variables = serde_json::json!({ "email": email });
    match graphql::execute(RESEND_CONFIRMATION_QUERY, variables).await {
        Ok(data) => graphql::decode_field::<Acknowledged>(data, "resendConfirmationEmail")
            .map(|ack| ack.success)
            .unwrap_or(false),
        Err(_) => false,
    }
}

/// Drop the stored session token. Idempotent.
pub fn logout() {
    token_store::clear();
}

/// Token-presence check; performs no validation.
pub fn is_authenticated() -> bool {
    token_store::read().is_some()
}

/// Claims of the current session, or `None` when logged out or when the
/// stored token does not decode.
pub fn current_claims() -> Option<IdentityClaims> {
    claims::decode(&token_store::read()?).ok()
}
