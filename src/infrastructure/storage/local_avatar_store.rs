use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::application::ports::{BlobStore, StorageError};
use crate::infrastructure::storage::PathBuilder;

/// Avatar images stored as plain files in a single directory
pub struct LocalAvatarStore {
    path_builder: PathBuilder,
    durable_writes: bool,
}

impl LocalAvatarStore {
    pub fn new(root: PathBuf) -> Self {
        Self::with_durability(root, true)
    }

    pub fn with_durability(root: PathBuf, durable_writes: bool) -> Self {
        Self {
            path_builder: PathBuilder::new(root),
            durable_writes,
        }
    }

    pub fn root(&self) -> &Path {
        self.path_builder.root()
    }

    /// Make sure the avatars directory exists. Safe to call repeatedly.
    pub async fn init(&self) -> Result<(), StorageError> {
        let root = self.path_builder.root();
        let is_dir = fs::metadata(root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);

        if !is_dir {
            info!("Creating avatars directory: {:?}", root);
            fs::create_dir_all(root).await?;
        }

        Ok(())
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> std::io::Result<()> {
        // File::create truncates, so an existing file is replaced, never appended to
        let mut file = File::create(path).await?;
        file.write_all(data).await?;
        file.flush().await?;
        if self.durable_writes {
            file.sync_all().await?;
        }
        Ok(())
    }
}

#[async_trait]
impl BlobStore for LocalAvatarStore {
    async fn write(&self, file_name: &str, data: &[u8]) -> Result<PathBuf, StorageError> {
        let path = self.path_builder.resolve(file_name)?;

        debug!("Writing avatar file: {:?} ({} bytes)", path, data.len());
        if let Err(e) = self.write_file(&path, data).await {
            warn!("Failed to write avatar file {:?}: {}", path, e);
            // Best effort cleanup of a partial file
            let _ = fs::remove_file(&path).await;
            return Err(StorageError::Io(e));
        }

        Ok(path)
    }

    async fn read(&self, path: &Path) -> Result<Bytes, StorageError> {
        let data = fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound(path.display().to_string())
            } else {
                StorageError::Io(e)
            }
        })?;

        Ok(Bytes::from(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("avatars");

        let store = LocalAvatarStore::new(root.clone());
        store.init().await.unwrap();

        assert!(root.is_dir());
    }

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = LocalAvatarStore::new(dir.path().to_path_buf());

        store.init().await.unwrap();
        store.init().await.unwrap();

        assert!(dir.path().is_dir());
    }

    #[tokio::test]
    async fn test_init_fails_when_root_is_a_file() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("not-a-dir");
        std::fs::write(&root, b"occupied").unwrap();

        let store = LocalAvatarStore::new(root);

        assert!(store.init().await.is_err());
    }

    #[tokio::test]
    async fn test_write_and_read_blob() {
        let dir = TempDir::new().unwrap();
        let store = LocalAvatarStore::new(dir.path().to_path_buf());
        store.init().await.unwrap();

        let content = b"Hello, avatar!";
        let path = store.write("abc.png", content).await.unwrap();

        assert_eq!(path, dir.path().join("abc.png"));

        let read_back = store.read(&path).await.unwrap();
        assert_eq!(&read_back[..], content);
    }

    #[tokio::test]
    async fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let store = LocalAvatarStore::with_durability(dir.path().to_path_buf(), false);
        store.init().await.unwrap();

        store.write("same", b"first version, longer").await.unwrap();
        let path = store.write("same", b"second").await.unwrap();

        assert_eq!(std::fs::read(path).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = LocalAvatarStore::new(dir.path().to_path_buf());

        let result = store.read(&dir.path().join("gone.png")).await;

        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_write_rejects_names_leaving_root() {
        let dir = TempDir::new().unwrap();
        let store = LocalAvatarStore::new(dir.path().join("avatars"));
        store.init().await.unwrap();

        let result = store.write("../escape.png", b"x").await;

        assert!(matches!(result, Err(StorageError::Internal(_))));
        assert!(!dir.path().join("escape.png").exists());
    }
}
