use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info};

use crate::data::DataError;

/// Load-once table cache keyed by file path.
///
/// Entries live until [`TableCache::invalidate`] or [`TableCache::clear`];
/// there is no eviction. Failed loads are not cached, so the next request
/// reads the file again.
pub struct TableCache<T> {
    entries: Mutex<HashMap<PathBuf, Arc<T>>>,
}

impl<T> Default for TableCache<T> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl<T> TableCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<PathBuf, Arc<T>>> {
        // A panic while loading leaves the map itself consistent.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the cached table for `path`, loading it with `load` on a miss.
    pub fn get_or_load<F>(&self, path: &Path, load: F) -> Result<Arc<T>, DataError>
    where
        F: FnOnce(&Path) -> Result<T, DataError>,
    {
        let mut entries = self.lock();
        if let Some(table) = entries.get(path) {
            return Ok(Arc::clone(table));
        }

        debug!(path = %path.display(), "table cache miss");
        let table = Arc::new(load(path)?);
        entries.insert(path.to_path_buf(), Arc::clone(&table));
        Ok(table)
    }

    /// Drop the entry for `path`. Returns whether anything was cached.
    pub fn invalidate(&self, path: &Path) -> bool {
        let removed = self.lock().remove(path).is_some();
        if removed {
            info!(path = %path.display(), "table cache entry invalidated");
        }
        removed
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
