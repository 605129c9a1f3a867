//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, dialogs, and chrome while reading/writing
//! shared state from Leptos context providers. Route-level orchestration
//! stays in `pages`.

pub mod course_card;
pub mod course_picker;
pub mod daily_challenge;
pub mod navbar;
pub mod out_of_views;
pub mod roadmap_card;
pub mod route_guard;
pub mod thumbnail_input;
pub mod toast;
