//! In-memory store

use std::collections::HashMap;

use super::{ScoreStore, StorageError, validate_key};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_back() {
        let mut store = MemoryStore::new();
        assert_eq!(store.read("scores").unwrap(), None);
        store.write("scores", "[3,2,1]").unwrap();
        assert_eq!(store.read("scores").unwrap().as_deref(), Some("[3,2,1]"));
    }
}
