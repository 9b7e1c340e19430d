//! Networking modules for the blog/shop REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs credentialed REST calls, `types` defines the wire schema,
//! `resolver` decides the signed-in identity on load, and `session` holds the
//! login/register/logout flows that change it.

pub mod api;
pub mod resolver;
pub mod session;
pub mod types;
