//! Server application core modules.
//!
//! This module contains all server-side functionality for the Heimdall
//! portal, including HTTP routing, the session gate, authentication and
//! password reset flows, role-gated route groups, file uploads, and static
//! asset serving. It provides the complete backend infrastructure in front
//! of the campus account directory.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod gate;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod store;
