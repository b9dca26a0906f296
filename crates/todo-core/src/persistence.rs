//! Task Persistence
//!
//! Write-through of the whole collection into one storage slot, and hydration
//! from it on startup. Both directions fail open: a failed save leaves the
//! previous value in place, a failed load yields an empty list.

use crate::config::TASKS_COOKIE_KEY;
use crate::error::{StorageError, StorageResult};
use crate::storage::SlotStorage;
use crate::store::TaskList;
use crate::task::Task;

pub struct TaskPersistence<S> {
    storage: S,
    key: String,
}

impl<S: SlotStorage> TaskPersistence<S> {
    /// Persist under the default `tasks` key
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, TASKS_COOKIE_KEY)
    }

    pub fn with_key(storage: S, key: &str) -> Self {
        Self {
            storage,
            key: key.to_string(),
        }
    }

    /// Overwrite the slot with `tasks`, logging and dropping any failure
    pub fn save(&self, tasks: &TaskList) {
        match self.try_save(tasks.tasks()) {
            Ok(()) => log::debug!("saved {} tasks", tasks.len()),
            Err(e) => log::error!("Error saving tasks to {}: {}", self.key, e),
        }
    }

    pub fn try_save(&self, tasks: &[Task]) -> StorageResult<()> {
        let json = serde_json::to_string(tasks).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.write(&self.key, &json)
    }

    /// Read the slot; absent or unreadable data gives an empty list
    pub fn load(&self) -> TaskList {
        match self.try_load() {
            Ok(tasks) => {
                log::info!("loaded {} tasks", tasks.len());
                let mut list = TaskList::new();
                list.replace(tasks);
                list
            }
            Err(e) => {
                log::error!("Error loading tasks from {}: {}", self.key, e);
                TaskList::new()
            }
        }
    }

    pub fn try_load(&self) -> StorageResult<Vec<Task>> {
        match self.storage.read(&self.key)? {
            Some(json) => serde_json::from_str(&json).map_err(|e| StorageError::Parse(e.to_string())),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::{TimeZone, Utc};

    fn sample() -> TaskList {
        let mut list = TaskList::new();
        list.create_at("Buy milk".to_string(), String::new(), Utc.timestamp_opt(1_700_000_000, 0).unwrap());
        list.create_at("Pay bills".to_string(), "before Friday".to_string(), Utc.timestamp_opt(1_700_000_100, 0).unwrap());
        let id = list.tasks()[0].id.clone();
        list.toggle_complete_at(&id, Utc.timestamp_opt(1_700_000_200, 0).unwrap());
        list
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let persistence = TaskPersistence::new(MemoryStorage::new());
        let list = sample();
        persistence.save(&list);
        assert_eq!(persistence.load(), list);
    }

    #[test]
    fn test_round_trip_keeps_subsecond_timestamps() {
        let persistence = TaskPersistence::new(MemoryStorage::new());
        let mut list = TaskList::new();
        list.create_at("x".to_string(), String::new(), Utc.timestamp_millis_opt(1_700_000_000_123).unwrap());
        persistence.save(&list);
        assert_eq!(persistence.load().tasks()[0].created_at, list.tasks()[0].created_at);
    }

    #[test]
    fn test_missing_slot_loads_empty() {
        let persistence = TaskPersistence::new(MemoryStorage::new());
        assert!(persistence.load().is_empty());
        assert!(persistence.try_load().unwrap().is_empty());
    }

    #[test]
    fn test_garbage_loads_empty() {
        let storage = MemoryStorage::new();
        storage.insert_raw(TASKS_COOKIE_KEY, "{not json");
        let persistence = TaskPersistence::new(storage);
        assert!(matches!(persistence.try_load(), Err(StorageError::Parse(_))));
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn test_oversized_save_leaves_previous_value() {
        let persistence = TaskPersistence::new(MemoryStorage::with_limit(1000));
        let small = sample();
        persistence.save(&small);

        let mut big = small.clone();
        for i in 0..20 {
            big.create_at(format!("task number {i}"), "x".repeat(20), Utc::now());
        }
        assert!(matches!(persistence.try_save(big.tasks()), Err(StorageError::TooLarge { .. })));
        persistence.save(&big);
        assert_eq!(persistence.load(), small);
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStorage::new();
        let persistence = TaskPersistence::with_key(&storage, "other");
        persistence.save(&sample());
        assert!(storage.read("other").unwrap().is_some());
        assert!(storage.read(TASKS_COOKIE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_loads_value_written_by_browser() {
        let storage = MemoryStorage::new();
        storage.insert_raw(
            TASKS_COOKIE_KEY,
            r#"[{"id":"1","title":"Buy milk","description":"","priority":0,"completed":false,"createdAt":"2024-03-01T09:00:00.000Z"}]"#,
        );
        let list = TaskPersistence::new(storage).load();
        assert_eq!(list.len(), 1);
        assert_eq!(list.active_count(), 1);
    }

    #[test]
    fn test_load_keeps_stored_order_and_priorities() {
        let storage = MemoryStorage::new();
        storage.insert_raw(
            TASKS_COOKIE_KEY,
            r#"[{"id":"b","title":"B","priority":5,"completed":false,"createdAt":"2024-03-01T09:00:00Z"},{"id":"a","title":"A","priority":2,"completed":false,"createdAt":"2024-03-01T08:00:00Z"}]"#,
        );
        let list = TaskPersistence::new(storage).load();
        let stored: Vec<(&str, i64)> = list.tasks().iter().map(|t| (t.id.as_str(), t.priority)).collect();
        assert_eq!(stored, vec![("b", 5), ("a", 2)]);
        assert_eq!(list.partition().active[0].title, "A");
    }
}
