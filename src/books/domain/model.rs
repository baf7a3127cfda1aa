use chrono::{NaiveDateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookEntity abstracts a catalogued title in library management system; every copy of the
// same edition shares the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: i64,
    #[serde(default)]
    pub version: i64,
    pub title: String,
    pub author_id: i64,
    #[serde(default)]
    pub genre_id: Option<i64>,
    pub isbn: String,
    pub language: String,
    #[serde(with = "serializer")]
    pub published_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(book_id: i64, author_id: i64, title: &str) -> Self {
        Self {
            book_id,
            version: 0,
            title: title.to_string(),
            author_id,
            genre_id: None,
            isbn: format!("978-{:010}", rand::thread_rng().gen_range(0..10_000_000_000i64)), // random for testing purpose
            language: "en".to_string(),
            published_at: Utc::now().naive_utc(), // for testing purpose
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    // next_version is the stored form of an accepted update
    pub(crate) fn next_version(&self) -> Self {
        Self {
            version: self.version + 1,
            updated_at: Utc::now().naive_utc(),
            ..self.clone()
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.book_id
    }

    fn version(&self) -> i64 {
        self.version
    }
}
