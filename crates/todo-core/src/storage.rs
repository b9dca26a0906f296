//! Slot Storage
//!
//! String-keyed read/write interface behind which the persisted task slot
//! lives. The browser build plugs in a cookie jar; tests use [`MemoryStorage`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{StorageError, StorageResult};

/// Key/value storage for whole serialized values
pub trait SlotStorage {
    /// Read the value under `key`, `None` if absent
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value under `key`
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: SlotStorage + ?Sized> SlotStorage for &S {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).write(key, value)
    }
}

/// In-memory storage, optionally with a per-value size limit
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
    limit: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes whose value exceeds `limit` bytes
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Put a raw value in place, bypassing the limit
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

impl SlotStorage for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        if let Some(limit) = self.limit {
            if value.len() > limit {
                return Err(StorageError::TooLarge { size: value.len(), limit });
            }
        }
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_is_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("tasks").unwrap(), None);
    }

    #[test]
    fn test_write_overwrites() {
        let storage = MemoryStorage::new();
        storage.write("tasks", "[1]").unwrap();
        storage.write("tasks", "[2]").unwrap();
        assert_eq!(storage.read("tasks").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_limit_rejects_and_keeps_previous() {
        let storage = MemoryStorage::with_limit(4);
        storage.write("k", "abcd").unwrap();
        let err = storage.write("k", "abcde").unwrap_err();
        assert_eq!(err, StorageError::TooLarge { size: 5, limit: 4 });
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("abcd"));
    }
}
