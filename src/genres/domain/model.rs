use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreEntity {
    pub genre_id: i64,
    #[serde(default)]
    pub version: i64,
    pub name: String,
}

impl GenreEntity {
    pub fn new(genre_id: i64, name: &str) -> Self {
        Self {
            genre_id,
            version: 0,
            name: name.to_string(),
        }
    }

    pub(crate) fn next_version(&self) -> Self {
        Self {
            version: self.version + 1,
            ..self.clone()
        }
    }
}

impl Identifiable for GenreEntity {
    fn id(&self) -> i64 {
        self.genre_id
    }

    fn version(&self) -> i64 {
        self.version
    }
}
