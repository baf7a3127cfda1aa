use async_trait::async_trait;
use crate::cards::domain::model::LibraryCardEntity;
use crate::cards::repository::LibraryCardRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::utils::memory::MemoryStore;

#[derive(Debug)]
pub struct MemoryLibraryCardRepository {
    store: MemoryStore<LibraryCardEntity>,
}

impl MemoryLibraryCardRepository {
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new("library card"),
        }
    }

    pub fn with_cards(cards: Vec<LibraryCardEntity>) -> LibraryResult<Self> {
        Ok(Self {
            store: MemoryStore::with_items("library card", cards)?,
        })
    }

    pub fn from_json(json: &str) -> LibraryResult<Self> {
        let cards: Vec<LibraryCardEntity> = serde_json::from_str(json)?;
        Self::with_cards(cards)
    }
}

impl Default for MemoryLibraryCardRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<LibraryCardEntity> for MemoryLibraryCardRepository {
    async fn create(&self, entity: &LibraryCardEntity) -> LibraryResult<usize> {
        self.store.create(entity).await
    }

    async fn update(&self, entity: &LibraryCardEntity) -> LibraryResult<usize> {
        self.store.update(entity, LibraryCardEntity::next_version).await
    }

    async fn get_by_id(&self, id: i64) -> LibraryResult<Option<LibraryCardEntity>> {
        Ok(self.store.get(id).await)
    }

    async fn exist(&self, id: i64) -> LibraryResult<bool> {
        Ok(self.store.contains(id).await)
    }

    async fn get_all(&self) -> LibraryResult<Vec<LibraryCardEntity>> {
        Ok(self.store.all().await)
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        self.store.delete(id).await
    }
}

#[async_trait]
impl LibraryCardRepository for MemoryLibraryCardRepository {
    async fn get_by_book_id(&self, book_id: i64) -> LibraryResult<Vec<LibraryCardEntity>> {
        Ok(self.store.filter(|c| c.holds(book_id)).await)
    }
}
