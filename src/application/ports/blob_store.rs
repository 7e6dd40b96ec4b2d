use async_trait::async_trait;
use bytes::Bytes;
#[cfg(test)]
use mockall::{automock, predicate::*};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Blob not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for the filesystem copy of avatar images
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Write `data` under `file_name`, replacing any existing file, and
    /// return the full path that was written
    async fn write(&self, file_name: &str, data: &[u8]) -> Result<PathBuf, StorageError>;

    /// Read a blob back from a path previously returned by `write`
    async fn read(&self, path: &Path) -> Result<Bytes, StorageError>;
}
