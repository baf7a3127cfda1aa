use crate::core::library::LibraryResult;
use crate::genres::domain::model::GenreEntity;
use crate::genres::repository::GenreRepository;
use crate::genres::repository::memory_genre_repository::MemoryGenreRepository;

pub fn create_genre_repository(seed: Vec<GenreEntity>) -> LibraryResult<Box<dyn GenreRepository>> {
    Ok(Box::new(MemoryGenreRepository::with_genres(seed)?))
}
