//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (cookies, query
//! strings, session storage, timers) from page and component logic.

pub mod cookie;
pub mod guard;
pub mod lifetime;
pub mod query;
pub mod storage;
