/// Name under which an avatar is written into the blob store.
///
/// Built from a generated unique base name plus the extension of the file
/// name the client uploaded, e.g. `3f2c...e1.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarFileName(String);

impl AvatarFileName {
    /// Compose `base.extension`, or just `base` when the original name has no
    /// usable extension.
    pub fn compose(base: impl Into<String>, original_file_name: Option<&str>) -> Self {
        let base = base.into();
        match original_file_name.and_then(Self::extension_of) {
            Some(extension) => Self(format!("{}.{}", base, extension)),
            None => Self(base),
        }
    }

    /// Text after the last `.` of a file name.
    ///
    /// Returns `None` when there is no dot, when nothing follows it, or when
    /// the dot belongs to a directory component (`photos.d/avatar`).
    pub fn extension_of(file_name: &str) -> Option<&str> {
        let dot = file_name.rfind('.')?;
        let extension = &file_name[dot + 1..];
        if extension.is_empty() || extension.contains(['/', '\\']) {
            return None;
        }
        Some(extension)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AvatarFileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
