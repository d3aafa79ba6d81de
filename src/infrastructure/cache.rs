//! Offline listing cache
//!
//! A small key-value store for listing snapshots, the terminal counterpart of the
//! browser's local storage. Values are JSON; the catalog decides what goes in.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const CACHE_FILE: &str = "offline-cache.json";

/// Snapshots kept per cache; the oldest by `saved_at` is evicted beyond this
pub const MAX_ENTRIES: usize = 256;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cache contents are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cache lock poisoned")]
    Poisoned,
}

pub trait OfflineCache: Send + Sync {
    fn save(&self, key: &str, value: Value) -> Result<(), CacheError>;
    fn load(&self, key: &str) -> Result<Option<Value>, CacheError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub saved_at: DateTime<Utc>,
    pub value: Value,
}

impl CacheEntry {
    fn new(value: Value) -> Self {
        Self {
            saved_at: Utc::now(),
            value,
        }
    }
}

fn insert_capped(entries: &mut HashMap<String, CacheEntry>, key: &str, value: Value) {
    entries.insert(key.to_string(), CacheEntry::new(value));
    while entries.len() > MAX_ENTRIES {
        let Some(oldest) = entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .min_by_key(|(_, entry)| entry.saved_at)
            .map(|(k, _)| k.clone())
        else {
            break;
        };
        log::debug!("Evicting offline snapshot {oldest}");
        entries.remove(&oldest);
    }
}

/// In-memory cache, lost on exit
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OfflineCache for MemoryCache {
    fn save(&self, key: &str, value: Value) -> Result<(), CacheError> {
        let mut entries = self.entries.lock().map_err(|_| CacheError::Poisoned)?;
        insert_capped(&mut entries, key, value);
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Value>, CacheError> {
        let entries = self.entries.lock().map_err(|_| CacheError::Poisoned)?;
        Ok(entries.get(key).map(|entry| entry.value.clone()))
    }
}

/// Cache persisted as one JSON document; every save rewrites the file
#[derive(Debug)]
pub struct FileCache {
    path: PathBuf,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl FileCache {
    /// Opens the cache at `path`. A missing file starts empty; an unreadable
    /// snapshot is moved aside to `<path>.corrupt` and the cache starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => HashMap::new(),
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    let aside = corrupt_path(&path);
                    log::warn!(
                        "Offline cache {} is corrupt ({e}); moving it to {}",
                        path.display(),
                        aside.display()
                    );
                    fs::rename(&path, &aside).map_err(|source| CacheError::Io {
                        path: path.clone(),
                        source,
                    })?;
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(source) => return Err(CacheError::Io { path, source }),
        };
        log::debug!("Opened offline cache {} ({} entries)", path.display(), entries.len());
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Opens `offline-cache.json` inside `dir`, creating the directory if needed.
    pub fn in_dir(dir: &Path) -> Result<Self, CacheError> {
        fs::create_dir_all(dir).map_err(|source| CacheError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        Self::open(dir.join(CACHE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn saved_at(&self, key: &str) -> Option<DateTime<Utc>> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).map(|entry| entry.saved_at))
    }

    fn persist(&self, entries: &HashMap<String, CacheEntry>) -> Result<(), CacheError> {
        let contents = serde_json::to_string(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)
            .and_then(|()| fs::rename(&tmp, &self.path))
            .map_err(|source| CacheError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".corrupt");
    PathBuf::from(name)
}

impl OfflineCache for FileCache {
    fn save(&self, key: &str, value: Value) -> Result<(), CacheError> {
        let mut entries = self.entries.lock().map_err(|_| CacheError::Poisoned)?;
        insert_capped(&mut entries, key, value);
        self.persist(&entries)
    }

    fn load(&self, key: &str) -> Result<Option<Value>, CacheError> {
        let entries = self.entries.lock().map_err(|_| CacheError::Poisoned)?;
        Ok(entries.get(key).map(|entry| entry.value.clone()))
    }
}
