//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `cart`, `blog`, etc.) so individual
//! pages and components can depend on small focused models.

pub mod auth;
pub mod blog;
pub mod cart;
pub mod redirect;
pub mod transactions;
