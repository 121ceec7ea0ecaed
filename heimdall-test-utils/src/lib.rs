//! Test utilities for Heimdall.
//!
//! This crate deliberately has no dependency on the main crate so it can be
//! pulled into its test suites without a cycle. It provides a builder for
//! per-test environments, a small HTTP driver that carries cookies between
//! requests, and canned request bodies for upload tests.

pub mod builder;
pub mod client;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::{test_setup, TestBuilder};
pub use client::{TestClient, TestResponse};
pub use context::TestContext;
pub use error::TestError;

/// Everything a test module normally needs.
pub mod prelude {
    pub use crate::builder::{test_setup, TestBuilder};
    pub use crate::client::{TestClient, TestResponse};
    pub use crate::context::TestContext;
    pub use crate::error::TestError;
    pub use crate::fixtures;
}
