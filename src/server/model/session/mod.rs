//! Session data models and utilities.
//!
//! This module provides type-safe wrappers for session data storage and
//! retrieval using tower-sessions. Each submodule defines a specific piece of
//! session state with methods for inserting, retrieving, and removing data
//! from the session store.

pub mod user;
