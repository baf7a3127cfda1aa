use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::genres::domain::model::GenreEntity;
use crate::genres::repository::GenreRepository;
use crate::utils::memory::MemoryStore;

#[derive(Debug)]
pub struct MemoryGenreRepository {
    store: MemoryStore<GenreEntity>,
}

impl MemoryGenreRepository {
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new("genre"),
        }
    }

    pub fn with_genres(genres: Vec<GenreEntity>) -> LibraryResult<Self> {
        Ok(Self {
            store: MemoryStore::with_items("genre", genres)?,
        })
    }

    pub fn from_json(json: &str) -> LibraryResult<Self> {
        let genres: Vec<GenreEntity> = serde_json::from_str(json)?;
        Self::with_genres(genres)
    }
}

impl Default for MemoryGenreRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<GenreEntity> for MemoryGenreRepository {
    async fn create(&self, entity: &GenreEntity) -> LibraryResult<usize> {
        self.store.create(entity).await
    }

    async fn update(&self, entity: &GenreEntity) -> LibraryResult<usize> {
        self.store.update(entity, GenreEntity::next_version).await
    }

    async fn get_by_id(&self, id: i64) -> LibraryResult<Option<GenreEntity>> {
        Ok(self.store.get(id).await)
    }

    async fn exist(&self, id: i64) -> LibraryResult<bool> {
        Ok(self.store.contains(id).await)
    }

    async fn get_all(&self) -> LibraryResult<Vec<GenreEntity>> {
        Ok(self.store.all().await)
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        self.store.delete(id).await
    }
}

#[async_trait]
impl GenreRepository for MemoryGenreRepository {
    async fn get_by_name(&self, name: &str) -> LibraryResult<Option<GenreEntity>> {
        let name = name.to_lowercase();
        let found = self.store.filter(|g| g.name.to_lowercase() == name).await;
        Ok(found.into_iter().next())
    }
}
