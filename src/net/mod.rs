//! Networking modules for the remote GraphQL API and auxiliary endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `graphql` owns the transport and request decoration, `error` the typed
//! failure taxonomy, `types` the wire DTOs. The remaining modules are thin
//! facades: one async function per remote operation, each resolving the
//! current identity where the backend wants one.

pub mod auth;
pub mod challenge;
pub mod courses;
pub mod error;
pub mod graphql;
pub mod roadmaps;
pub mod topics;
pub mod types;
pub mod upload;
pub mod users;
