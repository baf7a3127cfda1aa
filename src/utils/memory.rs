use std::collections::BTreeMap;
use tokio::sync::RwLock;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// MemoryStore backs the in-memory repositories. Entities are kept ordered by id and
// updates follow the same optimistic versioning as a persistent store.
#[derive(Debug)]
pub(crate) struct MemoryStore<E> {
    kind: &'static str,
    items: RwLock<BTreeMap<i64, E>>,
}

impl<E: Identifiable + Clone> MemoryStore<E> {
    pub(crate) fn new(kind: &'static str) -> Self {
        Self {
            kind,
            items: RwLock::new(BTreeMap::new()),
        }
    }

    pub(crate) fn with_items(kind: &'static str, entities: Vec<E>) -> LibraryResult<Self> {
        let mut items = BTreeMap::new();
        for entity in entities {
            if items.insert(entity.id(), entity).is_some() {
                return Err(LibraryError::duplicate_key(format!("duplicate {} in seed data", kind).as_str()));
            }
        }
        Ok(Self {
            kind,
            items: RwLock::new(items),
        })
    }

    pub(crate) async fn create(&self, entity: &E) -> LibraryResult<usize> {
        if entity.id() <= 0 {
            return Err(LibraryError::validation(
                format!("{} id must be positive but was {}", self.kind, entity.id()).as_str(), Some("400".to_string())));
        }
        let mut items = self.items.write().await;
        if items.contains_key(&entity.id()) {
            return Err(LibraryError::duplicate_key(format!("{} {} already exists", self.kind, entity.id()).as_str()));
        }
        items.insert(entity.id(), entity.clone());
        tracing::debug!(kind = self.kind, id = entity.id(), "created");
        Ok(1)
    }

    // update replaces the stored entity when versions match; bump builds the stored copy
    pub(crate) async fn update(&self, entity: &E, bump: impl FnOnce(&E) -> E) -> LibraryResult<usize> {
        let mut items = self.items.write().await;
        let existing = items.get(&entity.id())
            .ok_or_else(|| LibraryError::not_found(format!("{} not found for {}", self.kind, entity.id()).as_str()))?;
        if existing.version() != entity.version() {
            return Err(LibraryError::database(
                format!("{} {} version mismatch, stored {} given {}",
                        self.kind, entity.id(), existing.version(), entity.version()).as_str(), None, false));
        }
        items.insert(entity.id(), bump(entity));
        tracing::debug!(kind = self.kind, id = entity.id(), "updated");
        Ok(1)
    }

    pub(crate) async fn get(&self, id: i64) -> Option<E> {
        self.items.read().await.get(&id).cloned()
    }

    pub(crate) async fn contains(&self, id: i64) -> bool {
        self.items.read().await.contains_key(&id)
    }

    pub(crate) async fn filter(&self, predicate: impl Fn(&E) -> bool) -> Vec<E> {
        self.items.read().await.values().filter(|e| predicate(e)).cloned().collect()
    }

    pub(crate) async fn all(&self) -> Vec<E> {
        self.filter(|_| true).await
    }

    pub(crate) async fn delete(&self, id: i64) -> LibraryResult<usize> {
        match self.items.write().await.remove(&id) {
            Some(_) => {
                tracing::debug!(kind = self.kind, id, "deleted");
                Ok(1)
            }
            None => Err(LibraryError::not_found(format!("{} not found for {}", self.kind, id).as_str())),
        }
    }
}
