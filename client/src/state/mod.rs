//! Client-side session state.
//!
//! DESIGN
//! ======
//! `storage` abstracts the two browser stores behind traits, `auth` is the
//! in-memory view of who is signed in, and `session` ties them together so
//! every login/logout path writes storage and cookie in one place.

pub mod auth;
pub mod session;
pub mod storage;
