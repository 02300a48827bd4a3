//! Disk-backed photo storage.

use std::path::{Path, PathBuf};

use chrono::Utc;

/// Writes uploaded photos to the upload directory and hands back the file
/// name as the blob reference stored on the item.
#[derive(Clone)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Persist an uploaded file, returning its reference.
    ///
    /// References are `{unix_millis}-{original name}`, which keeps uploads
    /// with identical names from clobbering each other while staying
    /// human-readable. Any path components in the client-supplied name are
    /// stripped first.
    pub async fn put(&self, original_name: &str, bytes: &[u8]) -> std::io::Result<String> {
        let base = Path::new(original_name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload");
        let reference = format!("{}-{}", Utc::now().timestamp_millis(), base);

        tokio::fs::write(self.root.join(&reference), bytes).await?;
        Ok(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_writes_file_and_returns_reference() {
        let dir = tempfile::tempdir().unwrap();
        let blobs = BlobStore::new(dir.path());

        let reference = blobs.put("photo.jpg", b"jpegbytes").await.unwrap();
        assert!(reference.ends_with("-photo.jpg"));

        let stored = std::fs::read(dir.path().join(&reference)).unwrap();
        assert_eq!(stored, b"jpegbytes");
    }

    #[tokio::test]
    async fn test_put_strips_path_components() {
        let dir = tempfile::tempdir().unwrap();
        let blobs = BlobStore::new(dir.path());

        let reference = blobs.put("../../etc/passwd", b"x").await.unwrap();
        assert!(reference.ends_with("-passwd"));
        assert!(!reference.contains('/'));
    }

    #[tokio::test]
    async fn test_put_into_missing_directory_fails() {
        let blobs = BlobStore::new("/nonexistent/upload/dir");
        assert!(blobs.put("photo.jpg", b"x").await.is_err());
    }
}
