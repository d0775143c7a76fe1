//! Where finished labels go.
//!
//! [`LabelStore`] is the persistence seam. [`DirStore`] writes PNG files into a
//! directory; [`MemoryStore`] keeps them in memory, which is what the tests and
//! dry runs use.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

#[async_trait]
pub trait LabelStore: Send + Sync {
    /// Persists `bytes` under `file_name` and returns where it ended up.
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> std::io::Result<PathBuf>;
}

/// Writes labels as files inside one directory.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl LabelStore for DirStore {
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> std::io::Result<PathBuf> {
        let path = self.root.join(file_name);
        debug!(path = %path.display(), size = bytes.len(), "Writing label");
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }
}

/// Keeps labels in memory, keyed by file name.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// File names saved so far, sorted.
    pub fn file_names(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    pub fn get(&self, file_name: &str) -> Option<Vec<u8>> {
        self.lock().get(file_name).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, Vec<u8>>> {
        // A panic while holding the lock cannot leave the map half-written.
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl LabelStore for MemoryStore {
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> std::io::Result<PathBuf> {
        let mut files = self.lock();
        if files.contains_key(file_name) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("{file_name} was already saved"),
            ));
        }
        files.insert(file_name.to_string(), bytes);
        Ok(PathBuf::from(file_name))
    }
}
