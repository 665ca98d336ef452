//! In-memory collection store, one instance per entity type

use crate::core::error::{ConsoleResult, StoreError};
use crate::core::record::{Record, RecordId};
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory container for all records of one entity type.
///
/// Records keep insertion order. Identifiers come from a monotonically
/// increasing counter held next to the collection, so deleting a record never
/// frees its identifier for reuse. Cloning the store yields another handle to
/// the same collection.
#[derive(Clone)]
pub struct CollectionStore<T: Record> {
    inner: Arc<RwLock<Inner<T>>>,
}

struct Inner<T> {
    records: IndexMap<RecordId, T>,
    next_id: RecordId,
}

impl<T: Record> CollectionStore<T> {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                records: IndexMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Create a store populated with the given records, in order.
    ///
    /// Each record goes through [`add`], so identifiers are store-assigned
    /// starting at 1 regardless of what the seeds carry.
    ///
    /// [`add`]: CollectionStore::add
    pub fn seeded(records: Vec<T>) -> ConsoleResult<Self> {
        let store = Self::new();
        for record in records {
            store.add(record)?;
        }
        Ok(store)
    }

    fn read(&self, operation: &'static str) -> ConsoleResult<RwLockReadGuard<'_, Inner<T>>> {
        self.inner.read().map_err(|_| {
            StoreError::LockPoisoned {
                entity_type: T::resource_name_singular(),
                operation,
            }
            .into()
        })
    }

    fn write(&self, operation: &'static str) -> ConsoleResult<RwLockWriteGuard<'_, Inner<T>>> {
        self.inner.write().map_err(|_| {
            StoreError::LockPoisoned {
                entity_type: T::resource_name_singular(),
                operation,
            }
            .into()
        })
    }

    /// Assign the next identifier to `record` and append it.
    ///
    /// Returns the stored record with its identifier set.
    pub fn add(&self, mut record: T) -> ConsoleResult<T> {
        let mut inner = self.write("add")?;
        let id = inner.next_id;
        inner.next_id += 1;
        record.set_id(id);
        inner.records.insert(id, record.clone());
        tracing::debug!(entity = T::resource_name_singular(), id, "record added");
        Ok(record)
    }

    /// Replace the record with identifier `id` by `candidate`, keeping its
    /// position in the collection.
    ///
    /// Fails with `RECORD_NOT_FOUND` if no such record exists; an update
    /// never creates a record.
    pub fn update(&self, id: RecordId, mut candidate: T) -> ConsoleResult<T> {
        let mut inner = self.write("update")?;
        if !inner.records.contains_key(&id) {
            return Err(StoreError::NotFound {
                entity_type: T::resource_name_singular(),
                id,
            }
            .into());
        }
        candidate.set_id(id);
        // Inserting over an existing key keeps the original position.
        inner.records.insert(id, candidate.clone());
        tracing::debug!(entity = T::resource_name_singular(), id, "record updated");
        Ok(candidate)
    }

    /// Delete the record with identifier `id`.
    ///
    /// Idempotent: deleting an absent record is a no-op, not an error.
    pub fn remove(&self, id: RecordId) -> ConsoleResult<()> {
        let mut inner = self.write("remove")?;
        if inner.records.shift_remove(&id).is_some() {
            tracing::debug!(entity = T::resource_name_singular(), id, "record removed");
        }
        Ok(())
    }

    /// Get a record by identifier
    pub fn get(&self, id: RecordId) -> ConsoleResult<Option<T>> {
        let inner = self.read("get")?;
        Ok(inner.records.get(&id).cloned())
    }

    /// All records in insertion order
    pub fn list(&self) -> ConsoleResult<Vec<T>> {
        let inner = self.read("list")?;
        Ok(inner.records.values().cloned().collect())
    }

    /// Number of records currently stored
    pub fn len(&self) -> ConsoleResult<usize> {
        let inner = self.read("len")?;
        Ok(inner.records.len())
    }

    /// Check whether the store holds no records
    pub fn is_empty(&self) -> ConsoleResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl<T: Record> Default for CollectionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ConsoleError;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: RecordId,
        label: String,
    }

    impl Item {
        fn new(label: &str) -> Self {
            Self {
                id: 0,
                label: label.to_string(),
            }
        }
    }

    impl Record for Item {
        fn resource_name() -> &'static str {
            "items"
        }

        fn resource_name_singular() -> &'static str {
            "item"
        }

        fn id(&self) -> RecordId {
            self.id
        }

        fn set_id(&mut self, id: RecordId) {
            self.id = id;
        }

        fn searchable_values(&self) -> Vec<String> {
            vec![self.label.clone()]
        }
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let store = CollectionStore::new();
        let a = store.add(Item::new("a")).unwrap();
        let b = store.add(Item::new("b")).unwrap();
        let c = store.add(Item::new("c")).unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = CollectionStore::new();
        for label in ["first", "second", "third"] {
            store.add(Item::new(label)).unwrap();
        }

        let labels: Vec<String> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|item| item.label)
            .collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_len_tracks_adds_and_removes() {
        let store = CollectionStore::new();
        let a = store.add(Item::new("a")).unwrap();
        store.add(Item::new("b")).unwrap();
        assert_eq!(store.len().unwrap(), 2);

        store.remove(a.id).unwrap();
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_update_roundtrip_leaves_other_records_unchanged() {
        let store = CollectionStore::new();
        let a = store.add(Item::new("a")).unwrap();
        let b = store.add(Item::new("b")).unwrap();

        let updated = store.update(a.id, Item::new("a2")).unwrap();
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.label, "a2");

        let all = store.list().unwrap();
        assert_eq!(all[0], updated);
        assert_eq!(all[1], b);
    }

    #[test]
    fn test_update_missing_record_is_reported() {
        let store: CollectionStore<Item> = CollectionStore::new();
        let err = store.update(42, Item::new("ghost")).unwrap_err();
        assert!(matches!(
            err,
            ConsoleError::Store(StoreError::NotFound { id: 42, .. })
        ));
        // The failed update must not create the record.
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = CollectionStore::new();
        let a = store.add(Item::new("a")).unwrap();

        store.remove(a.id).unwrap();
        store.remove(a.id).unwrap();
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let store = CollectionStore::new();
        store.add(Item::new("a")).unwrap();
        let b = store.add(Item::new("b")).unwrap();
        store.add(Item::new("c")).unwrap();

        store.remove(b.id).unwrap();
        let d = store.add(Item::new("d")).unwrap();

        assert_eq!(d.id, 4);
        let ids: Vec<RecordId> = store.list().unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_seeded_assigns_ids_in_order() {
        let store =
            CollectionStore::seeded(vec![Item::new("x"), Item::new("y"), Item::new("z")]).unwrap();
        let ids: Vec<RecordId> = store.list().unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_clone_shares_the_collection() {
        let store = CollectionStore::new();
        let handle = store.clone();
        store.add(Item::new("shared")).unwrap();
        assert_eq!(handle.len().unwrap(), 1);
    }
}
