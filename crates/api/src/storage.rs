//! Attachment blob storage.
//!
//! Handlers talk to the [`ObjectStore`] trait; the concrete backend is a
//! local filesystem store. Object keys follow the pattern
//! `{folder}/{millis}_{filename}` so repeated uploads of the same file
//! never collide.

use async_trait::async_trait;

use crate::error::{AppError, AppResult};

/// A stored attachment blob.
#[derive(Debug, Clone)]
pub struct StoredObject {
    /// The object key within the store, e.g. `notes/1724580000000_report.pdf`.
    pub key: String,
    /// Publicly reachable URL for the object.
    pub url: String,
}

/// Abstraction over attachment blob storage.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Persist `bytes` under `key`, overwriting any existing object.
    async fn put_bytes(&self, key: &str, bytes: &[u8]) -> AppResult<StoredObject>;

    /// Publicly reachable URL for the object stored under `key`.
    fn public_url(&self, key: &str) -> String;
}

/// Build a collision-free object key for an uploaded file.
///
/// Uses the current Unix time in milliseconds as a prefix so two uploads of
/// the same filename land under distinct keys. Folder and filename are
/// client input: each is reduced to its final path component with parent
/// references dropped, so the key always stays a two-segment relative path.
pub fn object_key(folder: &str, filename: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    format!(
        "{}/{millis}_{}",
        sanitize_component(folder),
        sanitize_component(filename)
    )
}

/// Reduce untrusted input to a single safe path segment.
///
/// Splits on both separator styles, drops `.`/`..` and empty segments, and
/// keeps the last remaining one. Input with nothing left becomes `unnamed`.
fn sanitize_component(input: &str) -> String {
    input
        .split(['/', '\\'])
        .map(str::trim)
        .filter(|seg| !seg.is_empty() && *seg != "." && *seg != "..")
        .next_back()
        .unwrap_or("unnamed")
        .to_string()
}

/// Filesystem-backed [`ObjectStore`].
///
/// Objects live under `root_dir` mirroring their key paths, and public URLs
/// are formed by appending the key to `base_url`.
pub struct FsObjectStore {
    root_dir: std::path::PathBuf,
    base_url: String,
}

impl FsObjectStore {
    pub fn new(root_dir: impl Into<std::path::PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root_dir: root_dir.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for FsObjectStore {
    async fn put_bytes(&self, key: &str, bytes: &[u8]) -> AppResult<StoredObject> {
        // Only plain relative segments may reach the filesystem join.
        let traversal = std::path::Path::new(key)
            .components()
            .any(|c| !matches!(c, std::path::Component::Normal(_)));
        if traversal {
            return Err(AppError::BadRequest(format!("Invalid object key: {key}")));
        }

        let path = self.root_dir.join(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::InternalError(format!("Failed to create dir: {e}")))?;
        }
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to write object: {e}")))?;
        tracing::debug!(key, size = bytes.len(), "Stored attachment blob");
        Ok(StoredObject {
            key: key.to_string(),
            url: self.public_url(key),
        })
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }
}
