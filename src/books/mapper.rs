use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::core::mapper::Mapper;

// BookMapper projects persisted books onto the catalog transfer object
#[derive(Debug, Default, Clone, Copy)]
pub struct BookMapper;

impl Mapper<BookEntity, BookDto> for BookMapper {
    fn map(&self, source: &BookEntity) -> LibraryResult<BookDto> {
        Ok(BookDto::from(source))
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id,
            title: other.title.to_string(),
            author_id: other.author_id,
            genre_id: other.genre_id,
            isbn: other.isbn.to_string(),
            language: other.language.to_string(),
            published_at: other.published_at,
        }
    }
}
