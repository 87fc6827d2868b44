use crate::entities::Entity;
use crate::storage::{StorageError, Store};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Process-local store backed by a `BTreeMap`.
pub struct MemoryStore<E: Entity> {
    inner: RwLock<Inner<E>>,
}

struct Inner<E: Entity> {
    records: BTreeMap<E::Key, E>,
    next_id: i64,
}

impl<E: Entity> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<E: Entity> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Store<E> for MemoryStore<E> {
    async fn list_all(&self) -> Result<Vec<E>, StorageError> {
        let inner = self.inner.read().await;
        let mut records: Vec<E> = inner.records.values().cloned().collect();
        records.sort_by_key(|record| record.id());
        Ok(records)
    }

    async fn find_by_key(&self, key: &E::Key) -> Result<Option<E>, StorageError> {
        Ok(self.inner.read().await.records.get(key).cloned())
    }

    async fn save(&self, mut record: E) -> Result<E, StorageError> {
        let mut inner = self.inner.write().await;

        if let Some(existing) = inner.records.get(record.key()) {
            record.set_id(existing.id());
        } else if record.id() == 0 {
            record.set_id(inner.next_id);
            inner.next_id += 1;
        } else {
            inner.next_id = inner.next_id.max(record.id() + 1);
        }

        inner.records.insert(record.key().clone(), record.clone());
        Ok(record)
    }

    async fn delete_by_key(&self, key: &E::Key) -> Result<bool, StorageError> {
        Ok(self.inner.write().await.records.remove(key).is_some())
    }
}
