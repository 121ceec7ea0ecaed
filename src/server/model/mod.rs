//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including the
//! shared application state and the type-safe session data wrappers. These
//! models bridge the gap between the account directory, HTTP handlers, and the
//! session layer.

pub mod app;
pub mod session;
