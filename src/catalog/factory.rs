use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::books::factory::{create_book_mapper, create_book_repository};
use crate::cards::domain::model::LibraryCardEntity;
use crate::cards::factory::create_library_card_repository;
use crate::catalog::domain::BookService;
use crate::catalog::domain::service::BookServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::genres::domain::model::GenreEntity;
use crate::genres::factory::create_genre_repository;

// CatalogSeed holds the initial contents of the in-memory repositories
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub books: Vec<BookEntity>,
    #[serde(default)]
    pub cards: Vec<LibraryCardEntity>,
    #[serde(default)]
    pub genres: Vec<GenreEntity>,
}

impl CatalogSeed {
    pub fn from_json(json: &str) -> LibraryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

pub fn create_book_service(config: &Configuration, seed: CatalogSeed) -> LibraryResult<Box<dyn BookService>> {
    let book_repo = create_book_repository(seed.books)?;
    let card_repo = create_library_card_repository(seed.cards)?;
    let genre_repo = create_genre_repository(seed.genres)?;
    tracing::info!(branch = config.branch_id.as_str(), "book service created");
    Ok(Box::new(BookServiceImpl::new(config, book_repo, card_repo, genre_repo, create_book_mapper())))
}
