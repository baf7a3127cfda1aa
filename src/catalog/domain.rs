pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::core::order::OrderDto;

#[async_trait]
pub trait BookService: Sync + Send {
    /// Fails with `LibraryError::NotFound` when no book has the given id.
    async fn get_book(&self, id: i64) -> LibraryResult<BookDto>;
    async fn exist(&self, id: i64) -> LibraryResult<bool>;
    async fn get_books(&self, order: &OrderDto) -> LibraryResult<Vec<BookDto>>;
    async fn get_books_by_author(&self, author_id: i64, order: &OrderDto) -> LibraryResult<Vec<BookDto>>;
}
