//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and delegates validation to `util::validate`
//! and network sequencing to `net::flow`.

pub mod chat;
pub mod home;
pub mod login;
pub mod register;
