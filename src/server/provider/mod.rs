//! Clients for the external REST services the server depends on.
//!
//! - `auth` - hosted auth service (password sign-in, sign-up, token revocation)
//! - `email` - transactional email API used by the public forms

pub mod auth;
pub mod email;
