use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::cards::repository::LibraryCardRepository;
use crate::catalog::domain::BookService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::mapper::Mapper;
use crate::core::order::{apply_order, OrderDto};
use crate::genres::repository::GenreRepository;

pub(crate) const BOOK_NOT_FOUND: &str = "Book with given id not found";

pub struct BookServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
    #[allow(dead_code)]
    library_card_repository: Box<dyn LibraryCardRepository>,
    #[allow(dead_code)]
    genre_repository: Box<dyn GenreRepository>,
    mapper: Box<dyn Mapper<BookEntity, BookDto>>,
}

impl BookServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               library_card_repository: Box<dyn LibraryCardRepository>,
               genre_repository: Box<dyn GenreRepository>,
               mapper: Box<dyn Mapper<BookEntity, BookDto>>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            library_card_repository,
            genre_repository,
            mapper,
        }
    }
}

#[async_trait]
impl BookService for BookServiceImpl {
    async fn get_book(&self, id: i64) -> LibraryResult<BookDto> {
        match self.book_repository.get_by_id(id).await? {
            Some(book) => self.mapper.map(&book),
            None => {
                tracing::debug!(branch = self.branch_id.as_str(), id, "book not found");
                Err(LibraryError::not_found(BOOK_NOT_FOUND))
            }
        }
    }

    async fn exist(&self, id: i64) -> LibraryResult<bool> {
        self.book_repository.exist(id).await
    }

    async fn get_books(&self, order: &OrderDto) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.get_all().await?;
        let mapped = self.mapper.map_all(&books)?;
        tracing::debug!(branch = self.branch_id.as_str(), count = mapped.len(),
            order_by = ?order.order_by, direction = %order.direction(), "listing books");
        Ok(apply_order(mapped, order))
    }

    async fn get_books_by_author(&self, author_id: i64, order: &OrderDto) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.get_by_author_id(author_id).await?;
        let mapped = self.mapper.map_all(&books)?;
        tracing::debug!(branch = self.branch_id.as_str(), author_id, count = mapped.len(),
            order_by = ?order.order_by, direction = %order.direction(), "listing books by author");
        Ok(apply_order(mapped, order))
    }
}
