//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A two-state machine, Unauthenticated → Authenticated, read by the route
//! guard and identity-aware components. Written only through the explicit
//! transitions below: recomputed from the token store at app start, flipped
//! by login/logout. Never persisted itself.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::auth;
use crate::session::claims::IdentityClaims;

/// Reactive session flag plus cached display identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
    pub display_name: Option<String>,
}

impl SessionState {
    /// Recompute from the token store. Called at the explicit checkpoints
    /// only (mount, post-login, post-logout): the flag is not re-validated
    /// continuously. Authentication is a pure presence check; the decoded
    /// display name is best-effort UI text.
    pub fn checkpoint() -> Self {
        Self {
            authenticated: auth::is_authenticated(),
            display_name: auth::current_claims().map(|claims| claims.display_name),
        }
    }

    /// Transition fired after the auth facade confirms a login.
    pub fn after_login(claims: &IdentityClaims) -> Self {
        Self {
            authenticated: true,
            display_name: Some(claims.display_name.clone()),
        }
    }

    /// Transition fired on logout.
    pub fn after_logout() -> Self {
        Self::default()
    }
}
