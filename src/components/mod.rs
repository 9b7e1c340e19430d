//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and route guards while reading shared
//! state from Leptos context providers.

pub mod navbar;
pub mod route_guard;
pub mod status_badge;
