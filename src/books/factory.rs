use crate::books::domain::model::BookEntity;
use crate::books::mapper::BookMapper;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::library::LibraryResult;
use crate::core::mapper::Mapper;
use crate::books::dto::BookDto;

pub fn create_book_repository(seed: Vec<BookEntity>) -> LibraryResult<Box<dyn BookRepository>> {
    Ok(Box::new(MemoryBookRepository::with_books(seed)?))
}

pub fn create_book_mapper() -> Box<dyn Mapper<BookEntity, BookDto>> {
    Box::new(BookMapper)
}
