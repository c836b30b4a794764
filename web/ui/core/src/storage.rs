use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Error, Result};

/// Synchronous string key-value store, shaped after the browser's
/// `localStorage`.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries.lock().map_err(|e| Error::Storage(e.to_string()))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("currentUser").unwrap(), None);

        storage.set("currentUser", "{}").unwrap();
        assert_eq!(storage.get("currentUser").unwrap().as_deref(), Some("{}"));

        storage.remove("currentUser").unwrap();
        assert_eq!(storage.get("currentUser").unwrap(), None);
    }
}
