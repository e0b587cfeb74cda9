//! Key-value persistence for ~/.solflap/ save files.
//!
//! Everything persisted goes through [`KeyValueStore`], so the same game
//! state works against the on-disk JSON store, the in-memory store used by
//! tests, or any host-provided backend.

pub mod profile;

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Opaque string storage. Lookups that fail for any reason report absence;
/// writes that fail are dropped silently and the game keeps running on its
/// in-memory state.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Get the ~/.solflap/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".solflap");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// File-backed store: one JSON file per key under ~/.solflap/.
#[derive(Debug, Default)]
pub struct JsonFileStore;

impl JsonFileStore {
    pub fn new() -> Self {
        Self
    }

    /// Keys come from wallet addresses and fixed names, but sanitize anyway
    /// so a hostile key cannot escape the data directory.
    fn path_for(key: &str) -> io::Result<PathBuf> {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        Ok(data_dir()?.join(format!("{}.json", safe)))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = Self::path_for(key).ok()?;
        fs::read_to_string(path).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Ok(path) = Self::path_for(key) {
            let _ = fs::write(path, value);
        }
    }
}

/// In-memory store for tests and for running without a writable home.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}
