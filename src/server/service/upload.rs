//! Upload storage for the public image directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rand::{distr::Alphanumeric, Rng};

use crate::{
    model::upload::UploadReceiptDto,
    server::error::{upload::UploadError, Error},
};

const SUFFIX_LENGTH: usize = 8;

/// Destination for portal file uploads.
#[async_trait]
pub trait UploadStore: Send + Sync {
    /// Persist `data` under a name derived from `file_name`, returning where
    /// the stored file can be fetched from.
    async fn store(&self, file_name: &str, data: &[u8]) -> Result<UploadReceiptDto, Error>;
}

/// Upload store writing into the directory served at `/TestImages`.
pub struct FsUploadStore {
    root: PathBuf,
}

impl FsUploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl UploadStore for FsUploadStore {
    async fn store(&self, file_name: &str, data: &[u8]) -> Result<UploadReceiptDto, Error> {
        let stored_name = unique_name(file_name)?;

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(UploadError::Io)?;
        tokio::fs::write(self.root.join(&stored_name), data)
            .await
            .map_err(UploadError::Io)?;

        tracing::info!(file_name, stored_name, size = data.len(), "stored upload");

        Ok(UploadReceiptDto {
            url: format!("/TestImages/{stored_name}"),
            file_name: stored_name,
        })
    }
}

/// Strip anything path-like from the client-supplied name and add a random
/// suffix so repeated uploads of the same file never collide.
fn unique_name(file_name: &str) -> Result<String, Error> {
    let base = Path::new(file_name)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("");
    let cleaned: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    if !cleaned.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(UploadError::InvalidFileName(file_name.to_string()).into());
    }

    let (stem, extension) = match cleaned.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() && !extension.is_empty() => {
            (stem.to_string(), Some(extension.to_string()))
        }
        _ => (cleaned, None),
    };

    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LENGTH)
        .map(char::from)
        .collect();

    Ok(match extension {
        Some(extension) => format!("{stem}-{suffix}.{extension}"),
        None => format!("{stem}-{suffix}"),
    })
}
