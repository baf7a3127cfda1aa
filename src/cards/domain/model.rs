use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// LibraryCardEntity is a reader's card along with the books currently loaned on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryCardEntity {
    pub card_id: i64,
    #[serde(default)]
    pub version: i64,
    pub reader_name: String,
    #[serde(default)]
    pub book_ids: Vec<i64>,
    #[serde(with = "serializer")]
    pub issued_at: NaiveDateTime,
}

impl LibraryCardEntity {
    pub fn new(card_id: i64, reader_name: &str) -> Self {
        Self {
            card_id,
            version: 0,
            reader_name: reader_name.to_string(),
            book_ids: vec![],
            issued_at: Utc::now().naive_utc(),
        }
    }

    pub fn holds(&self, book_id: i64) -> bool {
        self.book_ids.contains(&book_id)
    }

    pub(crate) fn next_version(&self) -> Self {
        Self {
            version: self.version + 1,
            ..self.clone()
        }
    }
}

impl Identifiable for LibraryCardEntity {
    fn id(&self) -> i64 {
        self.card_id
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use crate::cards::domain::model::LibraryCardEntity;

    #[tokio::test]
    async fn test_should_build_card() {
        let mut card = LibraryCardEntity::new(1, "Ishmael");
        assert_eq!("Ishmael", card.reader_name.as_str());
        assert!(!card.holds(3));
        card.book_ids.push(3);
        assert!(card.holds(3));
        assert_eq!(1, card.next_version().version);
    }
}
