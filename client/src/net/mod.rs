//! Networking modules for the REST authentication API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the login/register/create-chat calls, `transport` is the HTTP
//! seam underneath it, `flow` sequences calls for the form pages, and `types`
//! defines the wire schema.

pub mod api;
pub mod flow;
pub mod transport;
pub mod types;
