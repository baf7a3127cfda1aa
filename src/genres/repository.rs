pub mod memory_genre_repository;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::genres::domain::model::GenreEntity;

#[async_trait]
pub trait GenreRepository: Repository<GenreEntity> {
    // name lookup ignores case
    async fn get_by_name(&self, name: &str) -> LibraryResult<Option<GenreEntity>>;
}
