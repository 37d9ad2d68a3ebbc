//! Server application models and type definitions.
//!
//! Application state shared by every handler, database model type aliases and the typed
//! wrappers around session data.

pub mod app;
pub mod db;
pub mod dto;
pub mod session;
