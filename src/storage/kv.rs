// SPDX-License-Identifier: MIT

//! Key-value storage over the device filesystem.
//!
//! Each key maps to one JSON file under the data directory; writes
//! replace the file via a temp-file rename so a crash mid-write leaves
//! the previous value intact. There is no locking: two writers racing on
//! the same key are last-write-wins, which callers accept by keeping one
//! writer per key.

use crate::error::AppError;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Key-value store backed by the filesystem, or by memory in tests.
#[derive(Clone)]
pub struct KvStore {
    backend: Backend,
}

#[derive(Clone)]
enum Backend {
    File { root: PathBuf },
    Memory(Arc<Mutex<HashMap<String, String>>>),
}

impl KvStore {
    /// Open a file-backed store rooted at the app's data directory,
    /// creating the directory if needed.
    pub async fn open<P: AsRef<Path>>(root: P) -> Result<Self, AppError> {
        let root = root.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to create data dir: {}", e)))?;

        tracing::info!(root = %root.display(), "Opened key-value store");
        Ok(Self {
            backend: Backend::File { root },
        })
    }

    /// In-memory store for tests.
    pub fn new_in_memory() -> Self {
        Self {
            backend: Backend::Memory(Arc::new(Mutex::new(HashMap::new()))),
        }
    }

    fn path_for(root: &Path, key: &str) -> PathBuf {
        root.join(format!("{}.json", key))
    }

    /// Read the raw string under `key`, or `None` when absent.
    pub async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        match &self.backend {
            Backend::File { root } => {
                match tokio::fs::read_to_string(Self::path_for(root, key)).await {
                    Ok(value) => Ok(Some(value)),
                    Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                    Err(e) => Err(AppError::Storage(format!("Failed to read {}: {}", key, e))),
                }
            }
            Backend::Memory(map) => Ok(lock(map).get(key).cloned()),
        }
    }

    /// Replace the full value under `key`.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        match &self.backend {
            Backend::File { root } => {
                let path = Self::path_for(root, key);
                let tmp = path.with_extension("json.tmp");
                tokio::fs::write(&tmp, value)
                    .await
                    .map_err(|e| AppError::Storage(format!("Failed to write {}: {}", key, e)))?;
                tokio::fs::rename(&tmp, &path)
                    .await
                    .map_err(|e| AppError::Storage(format!("Failed to commit {}: {}", key, e)))?;
                Ok(())
            }
            Backend::Memory(map) => {
                lock(map).insert(key.to_string(), value.to_string());
                Ok(())
            }
        }
    }

    /// Delete `key`; deleting an absent key succeeds.
    pub async fn remove(&self, key: &str) -> Result<(), AppError> {
        match &self.backend {
            Backend::File { root } => {
                match tokio::fs::remove_file(Self::path_for(root, key)).await {
                    Ok(()) => Ok(()),
                    Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                    Err(e) => Err(AppError::Storage(format!("Failed to remove {}: {}", key, e))),
                }
            }
            Backend::Memory(map) => {
                lock(map).remove(key);
                Ok(())
            }
        }
    }
}

fn lock(map: &Mutex<HashMap<String, String>>) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
    map.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_roundtrip() {
        let kv = KvStore::new_in_memory();

        assert_eq!(kv.get("missing").await.unwrap(), None);

        kv.set("k", "v1").await.unwrap();
        assert_eq!(kv.get("k").await.unwrap().as_deref(), Some("v1"));

        kv.set("k", "v2").await.unwrap();
        assert_eq!(kv.get("k").await.unwrap().as_deref(), Some("v2"));

        kv.remove("k").await.unwrap();
        assert_eq!(kv.get("k").await.unwrap(), None);

        // Removing again is fine
        kv.remove("k").await.unwrap();
    }
}
