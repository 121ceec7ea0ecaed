//! Test context structure and utilities.

use std::sync::Arc;

use tempfile::TempDir;
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Per-test environment produced by [`TestBuilder`](crate::TestBuilder).
///
/// The session is detached from any HTTP machinery, which is what
/// handler-level tests want. The temporary directory stands in for the
/// public asset directory and is deleted when the context drops.
pub struct TestContext {
    /// Session backed by a throwaway in-memory store
    pub session: Session,
    /// Temporary public asset directory
    pub public_dir: TempDir,
}

impl TestContext {
    pub(crate) fn new(public_files: &[(String, Vec<u8>)]) -> Result<Self, TestError> {
        let public_dir = tempfile::tempdir()?;

        for (relative_path, bytes) in public_files {
            let path = public_dir.path().join(relative_path);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, bytes)?;
        }

        let session = Session::new(None, Arc::new(MemoryStore::default()), None);

        Ok(Self {
            session,
            public_dir,
        })
    }
}
