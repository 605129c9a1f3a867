//! Session primitives: the persisted bearer token and its decoded claims.
//!
//! SYSTEM CONTEXT
//! ==============
//! `token_store` is the single piece of client-persisted state; `claims`
//! projects display identity out of the stored token. Trust decisions are
//! made server-side: nothing in this module verifies anything.

pub mod claims;
pub mod token_store;
