//! Key-value store wrapper with automatic serialization.

use crate::backend::{DirBackend, KvBackend, MemoryBackend};
use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

/// Type-safe cache over a [`KvBackend`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
pub struct Cache {
    backend: Box<dyn KvBackend>,
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache").finish_non_exhaustive()
    }
}

impl Cache {
    /// Wrap an arbitrary backend.
    pub fn with_backend(backend: impl KvBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// A cache that lives only as long as this process.
    pub fn in_memory() -> Self {
        Self::with_backend(MemoryBackend::new())
    }

    /// A cache persisted as one file per key under `dir`.
    pub fn open_dir(dir: impl AsRef<Path>) -> Result<Self, CacheError> {
        Ok(Self::with_backend(DirBackend::open(dir)?))
    }

    /// Open the default Spin key-value store.
    #[cfg(target_arch = "wasm32")]
    pub fn open_default() -> Result<Self, CacheError> {
        Ok(Self::with_backend(crate::backend::SpinBackend::open_default()?))
    }

    /// Open a named Spin key-value store.
    #[cfg(target_arch = "wasm32")]
    pub fn open(name: &str) -> Result<Self, CacheError> {
        Ok(Self::with_backend(crate::backend::SpinBackend::open(name)?))
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, and a
    /// [`CacheError::SerializeError`] if the stored bytes do not decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.backend.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.backend.set(key, &bytes)
    }

    /// Delete a value from the cache. Deleting a missing key is not an error.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.backend.delete(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::sync::Arc;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Line {
        sku: String,
        qty: i64,
    }

    #[test]
    fn test_typed_roundtrip() {
        let cache = Cache::in_memory();
        let lines = vec![Line {
            sku: "sku-1".into(),
            qty: 2,
        }];

        cache.set("lines", &lines).unwrap();
        let back: Option<Vec<Line>> = cache.get("lines").unwrap();
        assert_eq!(back, Some(lines));
    }

    #[test]
    fn test_missing_key_is_none() {
        let cache = Cache::in_memory();
        let value: Option<Vec<Line>> = cache.get("nope").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_garbage_bytes_are_a_serialize_error() {
        let backend = Arc::new(MemoryBackend::new());
        backend.set("lines", b"{not json").unwrap();

        let cache = Cache::with_backend(backend);
        let result: Result<Option<Vec<Line>>, _> = cache.get("lines");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
    }

    #[test]
    fn test_shared_backend_is_visible_to_both_caches() {
        let backend = Arc::new(MemoryBackend::new());
        let writer = Cache::with_backend(backend.clone());
        let reader = Cache::with_backend(backend);

        writer.set("n", &7).unwrap();
        assert_eq!(reader.get::<i32>("n").unwrap(), Some(7));

        writer.delete("n").unwrap();
        assert_eq!(reader.get::<i32>("n").unwrap(), None);
    }

    #[test]
    fn test_open_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Cache::open_dir(dir.path().join("nested")).unwrap();
        cache.set("k", "v").unwrap();
        assert_eq!(cache.get::<String>("k").unwrap().as_deref(), Some("v"));
    }
}
