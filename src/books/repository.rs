pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    async fn get_by_author_id(&self, author_id: i64) -> LibraryResult<Vec<BookEntity>>;
}
