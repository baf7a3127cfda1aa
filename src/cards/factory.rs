use crate::cards::domain::model::LibraryCardEntity;
use crate::cards::repository::LibraryCardRepository;
use crate::cards::repository::memory_card_repository::MemoryLibraryCardRepository;
use crate::core::library::LibraryResult;

pub fn create_library_card_repository(seed: Vec<LibraryCardEntity>) -> LibraryResult<Box<dyn LibraryCardRepository>> {
    Ok(Box::new(MemoryLibraryCardRepository::with_cards(seed)?))
}
