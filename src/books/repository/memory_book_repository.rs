use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::utils::memory::MemoryStore;

#[derive(Debug)]
pub struct MemoryBookRepository {
    store: MemoryStore<BookEntity>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new("book"),
        }
    }

    pub fn with_books(books: Vec<BookEntity>) -> LibraryResult<Self> {
        Ok(Self {
            store: MemoryStore::with_items("book", books)?,
        })
    }

    // from_json seeds the repository from a JSON array of books
    pub fn from_json(json: &str) -> LibraryResult<Self> {
        let books: Vec<BookEntity> = serde_json::from_str(json)?;
        Self::with_books(books)
    }
}

impl Default for MemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        self.store.create(entity).await
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        self.store.update(entity, BookEntity::next_version).await
    }

    async fn get_by_id(&self, id: i64) -> LibraryResult<Option<BookEntity>> {
        Ok(self.store.get(id).await)
    }

    async fn exist(&self, id: i64) -> LibraryResult<bool> {
        Ok(self.store.contains(id).await)
    }

    async fn get_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.store.all().await)
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        self.store.delete(id).await
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn get_by_author_id(&self, author_id: i64) -> LibraryResult<Vec<BookEntity>> {
        let books = self.store.filter(|b| b.author_id == author_id).await;
        tracing::debug!(author_id, count = books.len(), "books by author");
        Ok(books)
    }
}
