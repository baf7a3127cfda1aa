use std::cmp::Ordering;
use std::collections::HashMap;
use chrono::{NaiveDateTime, Utc};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use crate::core::order::{Comparator, Sortable};
use crate::utils::date::serializer;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: i64,
    pub title: String,
    pub author_id: i64,
    pub genre_id: Option<i64>,
    pub isbn: String,
    pub language: String,
    #[serde(with = "serializer")]
    pub published_at: NaiveDateTime,
}

impl BookDto {
    pub fn new(book_id: i64, title: &str) -> BookDto {
        BookDto {
            book_id,
            title: title.to_string(),
            author_id: 0,
            genre_id: None,
            isbn: String::new(),
            language: "en".to_string(),
            published_at: Utc::now().naive_utc(), // for testing purpose
        }
    }
}

fn by_id(a: &BookDto, b: &BookDto) -> Ordering {
    a.book_id.cmp(&b.book_id)
}

// case-folded, raw text breaks ties
fn by_title(a: &BookDto, b: &BookDto) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
        .then_with(|| a.title.cmp(&b.title))
}

fn by_author(a: &BookDto, b: &BookDto) -> Ordering {
    a.author_id.cmp(&b.author_id)
}

fn by_isbn(a: &BookDto, b: &BookDto) -> Ordering {
    a.isbn.cmp(&b.isbn)
}

fn by_published(a: &BookDto, b: &BookDto) -> Ordering {
    a.published_at.cmp(&b.published_at)
}

lazy_static! {
    // keys are lowercase; lookups lowercase the requested field
    static ref SORT_FIELDS: HashMap<&'static str, Comparator<BookDto>> = {
        let mut fields: HashMap<&'static str, Comparator<BookDto>> = HashMap::new();
        fields.insert("id", by_id);
        fields.insert("title", by_title);
        fields.insert("author", by_author);
        fields.insert("isbn", by_isbn);
        fields.insert("published", by_published);
        fields
    };
}

impl Sortable for BookDto {
    fn comparator(field: &str) -> Option<Comparator<Self>> {
        SORT_FIELDS.get(field.to_lowercase().as_str()).copied()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::books::dto::BookDto;
    use crate::core::order::{apply_order, OrderDto, Sortable};

    fn titles(books: &[BookDto]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new(1, "title");
        assert_eq!(1, book.book_id);
        assert_eq!("title", book.title.as_str());
        assert_eq!("en", book.language.as_str());
    }

    #[tokio::test]
    async fn test_should_resolve_sort_fields() {
        for field in ["id", "title", "Title", "AUTHOR", "isbn", "published"] {
            assert!(BookDto::comparator(field).is_some(), "{} should be sortable", field);
        }
        assert!(BookDto::comparator("language").is_none());
        assert!(BookDto::comparator("").is_none());
    }

    #[tokio::test]
    async fn test_should_sort_by_title_desc() {
        let books = vec![BookDto::new(1, "Aaa"), BookDto::new(2, "Bbb")];
        let sorted = apply_order(books, &OrderDto::new("title", "desc"));
        assert_eq!(vec!["Bbb", "Aaa"], titles(&sorted));
    }

    #[tokio::test]
    async fn test_should_sort_by_title_ignoring_case() {
        let books = vec![BookDto::new(1, "zebra"), BookDto::new(2, "Banana"), BookDto::new(3, "apple"),
                         BookDto::new(4, "Apple")];
        let sorted = apply_order(books, &OrderDto::new("title", "asc"));
        assert_eq!(vec!["Apple", "apple", "Banana", "zebra"], titles(&sorted));
    }

    #[tokio::test]
    async fn test_should_sort_by_author_then_keep_input_order() {
        let mut books = vec![BookDto::new(1, "c"), BookDto::new(2, "a"), BookDto::new(3, "b")];
        books[0].author_id = 9;
        books[1].author_id = 4;
        books[2].author_id = 9;
        let sorted = apply_order(books, &OrderDto::new("author", "asc"));
        assert_eq!(vec!["a", "c", "b"], titles(&sorted));
    }

    #[tokio::test]
    async fn test_should_sort_by_published() {
        let mut old = BookDto::new(1, "old");
        old.published_at = NaiveDate::from_ymd_opt(1851, 10, 18).and_then(|d| d.and_hms_opt(0, 0, 0)).expect("valid date");
        let mut new = BookDto::new(2, "new");
        new.published_at = NaiveDate::from_ymd_opt(2011, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0)).expect("valid date");
        let sorted = apply_order(vec![new, old], &OrderDto::new("published", "asc"));
        assert_eq!(vec!["old", "new"], titles(&sorted));
    }
}
