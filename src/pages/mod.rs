//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, form state) and
//! delegates shared rendering to `components`.

pub mod admin;
pub mod article;
pub mod home;
pub mod info;
pub mod login;
pub mod shop;
pub mod transactions;
