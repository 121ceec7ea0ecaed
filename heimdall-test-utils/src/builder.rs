//! Declarative builder for test environments.

use crate::context::TestContext;
use crate::error::TestError;

/// Builds a [`TestContext`] from a declarative description of the fixtures a
/// test needs.
///
/// ```no_run
/// # use heimdall_test_utils::prelude::*;
/// # fn demo() -> Result<(), TestError> {
/// let test = TestBuilder::new()
///     .with_public_file("index.html", b"<html></html>")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct TestBuilder {
    public_files: Vec<(String, Vec<u8>)>,
}

impl TestBuilder {
    /// An empty builder. [`build`](Self::build) on it yields a fresh session
    /// and an empty public directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file under the temporary public directory before the test
    /// runs. Parent directories in `relative_path` are created as needed.
    pub fn with_public_file(mut self, relative_path: &str, bytes: &[u8]) -> Self {
        self.public_files
            .push((relative_path.to_string(), bytes.to_vec()));
        self
    }

    /// Materialize the environment.
    pub fn build(self) -> Result<TestContext, TestError> {
        TestContext::new(&self.public_files)
    }
}

/// Shorthand for the common case of a test that needs no fixtures.
pub fn test_setup() -> Result<TestContext, TestError> {
    TestBuilder::new().build()
}
