//! Dictionary resource loading.
//!
//! Resources are read whole and kept as immutable shared buffers. A missing
//! or unreadable file is reported as [`HunstemError::ResourceNotFound`] and
//! is not retried.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;

use crate::config::DictionaryConfig;
use crate::error::{HunstemError, Result};

/// Raw bytes of one dictionary resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DictionaryResource {
    name: String,
    bytes: Arc<[u8]>,
}

impl DictionaryResource {
    /// Wrap an in-memory buffer.
    pub fn from_bytes<S: Into<String>>(name: S, bytes: impl Into<Arc<[u8]>>) -> Self {
        DictionaryResource {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// File name the resource was loaded as.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Reads resources by file name from a base directory.
#[derive(Clone, Debug)]
pub struct ResourceLoader {
    base_dir: PathBuf,
}

impl ResourceLoader {
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        ResourceLoader {
            base_dir: base_dir.into(),
        }
    }

    /// Create a loader rooted at the configured base directory.
    pub fn from_config(config: &DictionaryConfig) -> Self {
        Self::new(&config.base_dir)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Full path of the resource called `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    /// Read the resource called `name`.
    pub async fn load(&self, name: &str) -> Result<DictionaryResource> {
        let path = self.path_for(name);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| HunstemError::resource_not_found(name, &path, e))?;
        debug!("loaded {} ({} bytes)", path.display(), bytes.len());
        Ok(DictionaryResource::from_bytes(name, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_resource() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.aff"), b"SET UTF-8\n").unwrap();

        let loader = ResourceLoader::new(dir.path());
        let resource = loader.load("index.aff").await.unwrap();

        assert_eq!(resource.name(), "index.aff");
        assert_eq!(resource.bytes(), b"SET UTF-8\n");
        assert_eq!(resource.len(), 10);
    }

    #[tokio::test]
    async fn test_missing_resource() {
        let dir = TempDir::new().unwrap();
        let loader = ResourceLoader::new(dir.path());

        let err = loader.load("index.dic").await.unwrap_err();
        match err {
            HunstemError::ResourceNotFound { ref name, ref path, .. } => {
                assert_eq!(name, "index.dic");
                assert_eq!(path, &dir.path().join("index.dic"));
            }
            ref other => panic!("unexpected error: {other}"),
        }
        assert!(err.is_fatal());
    }

    #[test]
    fn test_from_config() {
        let config = DictionaryConfig::default().with_base_dir("/srv/dict");
        let loader = ResourceLoader::from_config(&config);
        assert_eq!(loader.path_for("index.aff"), PathBuf::from("/srv/dict/index.aff"));
    }

    #[test]
    fn test_empty_resource() {
        let resource = DictionaryResource::from_bytes("empty.dic", Vec::<u8>::new());
        assert!(resource.is_empty());
    }
}
