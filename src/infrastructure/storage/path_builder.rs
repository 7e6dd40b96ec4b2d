use std::path::{Component, Path, PathBuf};

use crate::application::ports::StorageError;

/// Utility for generating avatar file paths
pub struct PathBuilder {
    root: PathBuf,
}

impl PathBuilder {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a bare file name to /root/{file_name}
    ///
    /// Anything that is not a single normal path component is rejected so a
    /// name can never point outside the root.
    pub fn resolve(&self, file_name: &str) -> Result<PathBuf, StorageError> {
        let mut components = Path::new(file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) => Ok(self.root.join(name)),
            _ => Err(StorageError::Internal(format!(
                "Invalid avatar file name: {:?}",
                file_name
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_joins_root() {
        let builder = PathBuilder::new(PathBuf::from("/data/avatars"));
        assert_eq!(
            builder.resolve("abc.png").unwrap(),
            PathBuf::from("/data/avatars/abc.png")
        );
    }

    #[test]
    fn test_resolve_rejects_traversal_and_nesting() {
        let builder = PathBuilder::new(PathBuf::from("/data/avatars"));
        for bad in ["", "..", "../x.png", "a/b.png", "/etc/passwd", "."] {
            assert!(builder.resolve(bad).is_err(), "should reject {:?}", bad);
        }
    }
}
