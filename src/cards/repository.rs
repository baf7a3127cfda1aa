pub mod memory_card_repository;

use async_trait::async_trait;
use crate::cards::domain::model::LibraryCardEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[async_trait]
pub trait LibraryCardRepository: Repository<LibraryCardEntity> {
    // cards that currently hold the given book
    async fn get_by_book_id(&self, book_id: i64) -> LibraryResult<Vec<LibraryCardEntity>>;
}
