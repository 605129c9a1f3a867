//! Typed failure taxonomy for remote calls.
//!
//! DESIGN
//! ======
//! The backend reports application failures as human-readable GraphQL error
//! messages. Those strings are mapped to [`AppErrorKind`] once, at the
//! transport edge, so call sites match on a machine-readable kind instead
//! of scattering message comparisons through the UI.

/// Machine-readable kind for an application-level failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppErrorKind {
    /// The viewer has exhausted their roadmap views for the current plan.
    NoViewsRemaining,
    /// The requested roadmap does not exist.
    RoadmapNotFound,
    /// Registration collided with an existing account.
    UserExists,
    /// Anything the client has no special handling for.
    Other,
}

/// A failed remote call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the supplied credentials.
    #[error("invalid username or password")]
    InvalidCredentials,
    /// The request never produced a usable response.
    #[error("request failed: {0}")]
    Network(String),
    /// Remote calls only exist in the browser build.
    #[error("remote calls are not available outside the browser")]
    Unavailable,
    /// The response arrived but did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The backend processed the request and reported a domain failure.
    #[error("{message}")]
    Application { kind: AppErrorKind, message: String },
}

impl ApiError {
    /// The application error kind, if this is an application-level failure.
    pub fn kind(&self) -> Option<AppErrorKind> {
        match self {
            Self::Application { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
