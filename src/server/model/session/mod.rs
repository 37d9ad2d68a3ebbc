//! Session data models and utilities.
//!
//! Type-safe wrappers for values kept in the Redis-backed tower-sessions store: the logged in
//! user's ID and the hosted auth access token needed to revoke it on logout.

pub mod auth;
pub mod user;
