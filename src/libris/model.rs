use crate::error::{LibrisError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub const YEAR_RANGE: RangeInclusive<u16> = 1900..=3000;
pub const PROGRESS_RANGE: RangeInclusive<u8> = 0..=100;
pub const RATING_RANGE: RangeInclusive<u8> = 1..=5;

/// Field names as they appear in the store and in CSV headers.
pub const FIELD_NAMES: [&str; 7] = [
    "Title", "Author", "Year", "Genre", "Read", "Progress", "Rating",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Project,
    Global,
}

/// A single catalog entry. Only constructed through [`BookDraft::validate`] or
/// by deserializing a record that passes the same checks, so every `Book` in
/// memory has all seven fields in range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookDraft")]
pub struct Book {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Author")]
    author: String,
    #[serde(rename = "Year")]
    year: u16,
    #[serde(rename = "Genre")]
    genre: String,
    #[serde(rename = "Read")]
    read: bool,
    #[serde(rename = "Progress")]
    progress: u8,
    #[serde(rename = "Rating")]
    rating: u8,
}

impl Book {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }
}

/// Unvalidated input for a new book, mirroring the add form. Defaults match the
/// form widgets: earliest allowed year, no progress, a middling rating.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookDraft {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Year")]
    pub year: u16,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Read", default)]
    pub read: bool,
    #[serde(rename = "Progress")]
    pub progress: u8,
    #[serde(rename = "Rating")]
    pub rating: u8,
}

impl Default for BookDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            year: *YEAR_RANGE.start(),
            genre: String::new(),
            read: false,
            progress: *PROGRESS_RANGE.start(),
            rating: 3,
        }
    }
}

impl BookDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: u16,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            ..Self::default()
        }
    }

    pub fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    pub fn progress(mut self, progress: u8) -> Self {
        self.progress = progress;
        self
    }

    pub fn rating(mut self, rating: u8) -> Self {
        self.rating = rating;
        self
    }

    /// Names of the required text fields that are empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Genre", &self.genre),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn validate(self) -> Result<Book> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(LibrisError::Validation(format!(
                "missing required field(s): {}",
                missing.join(", ")
            )));
        }
        if !YEAR_RANGE.contains(&self.year) {
            return Err(LibrisError::Validation(format!(
                "Year {} is outside {}-{}",
                self.year,
                YEAR_RANGE.start(),
                YEAR_RANGE.end()
            )));
        }
        if !PROGRESS_RANGE.contains(&self.progress) {
            return Err(LibrisError::Validation(format!(
                "Progress {}% is outside {}-{}",
                self.progress,
                PROGRESS_RANGE.start(),
                PROGRESS_RANGE.end()
            )));
        }
        if !RATING_RANGE.contains(&self.rating) {
            return Err(LibrisError::Validation(format!(
                "Rating {} is outside {}-{}",
                self.rating,
                RATING_RANGE.start(),
                RATING_RANGE.end()
            )));
        }

        Ok(Book {
            title: self.title,
            author: self.author,
            year: self.year,
            genre: self.genre,
            read: self.read,
            progress: self.progress,
            rating: self.rating,
        })
    }
}

impl TryFrom<BookDraft> for Book {
    type Error = LibrisError;

    fn try_from(draft: BookDraft) -> Result<Self> {
        draft.validate()
    }
}

/// The full ordered list of books. Insertion order is the persisted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Drops every book whose title equals `title` exactly, returning the removed books.
    pub fn remove_by_title(&mut self, title: &str) -> Vec<Book> {
        let (removed, kept) = std::mem::take(&mut self.books)
            .into_iter()
            .partition(|book| book.title == title);
        self.books = kept;
        removed
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Self { books }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

/// Column a library listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Title,
    Author,
    Year,
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Title,
        SortKey::Author,
        SortKey::Year,
        SortKey::Rating,
    ];

    pub fn compare(&self, a: &Book, b: &Book) -> Ordering {
        match self {
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Author => a.author.cmp(&b.author),
            SortKey::Year => a.year.cmp(&b.year),
            SortKey::Rating => a.rating.cmp(&b.rating),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Author => "author",
            SortKey::Year => "year",
            SortKey::Rating => "rating",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown sort key '{}' (expected one of: title, author, year, rating)",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> BookDraft {
        BookDraft::new("Dune", "Frank Herbert", 1965, "Science Fiction").rating(5)
    }

    #[test]
    fn validates_a_complete_draft() {
        let book = dune().validate().unwrap();
        assert_eq!(book.title(), "Dune");
        assert_eq!(book.year(), 1965);
        assert!(!book.is_read());
        assert_eq!(book.progress(), 0);
        assert_eq!(book.rating(), 5);
    }

    #[test]
    fn rejects_empty_required_fields() {
        let mut draft = dune();
        draft.author.clear();
        draft.genre.clear();
        assert_eq!(draft.missing_fields(), vec!["Author", "Genre"]);
        assert!(matches!(draft.validate(), Err(LibrisError::Validation(_))));
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        let mut draft = dune();
        draft.year = 1899;
        assert!(draft.validate().is_err());
        assert!(dune().progress(101).validate().is_err());
        assert!(dune().rating(0).validate().is_err());
        assert!(dune().rating(6).validate().is_err());
    }

    #[test]
    fn serializes_with_capitalized_field_names() {
        let book = dune().read(true).progress(40).validate().unwrap();
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["Title"], "Dune");
        assert_eq!(json["Author"], "Frank Herbert");
        assert_eq!(json["Year"], 1965);
        assert_eq!(json["Genre"], "Science Fiction");
        assert_eq!(json["Read"], true);
        assert_eq!(json["Progress"], 40);
        assert_eq!(json["Rating"], 5);
    }

    #[test]
    fn deserialization_applies_validation() {
        let bad = r#"{"Title":"X","Author":"Y","Year":1965,"Genre":"Z","Read":false,"Progress":0,"Rating":9}"#;
        assert!(serde_json::from_str::<Book>(bad).is_err());

        let missing_genre = r#"{"Title":"X","Author":"Y","Year":1965,"Read":false,"Progress":0,"Rating":3}"#;
        assert!(serde_json::from_str::<Book>(missing_genre).is_err());
    }

    #[test]
    fn remove_by_title_drops_every_exact_match() {
        let mut catalog = Catalog::from(vec![
            dune().validate().unwrap(),
            BookDraft::new("Rebecca", "Daphne du Maurier", 1938, "Mystery")
                .validate()
                .unwrap(),
            dune().read(true).validate().unwrap(),
        ]);

        let removed = catalog.remove_by_title("Dune");
        assert_eq!(removed.len(), 2);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.books()[0].title(), "Rebecca");

        assert!(catalog.remove_by_title("rebecca").is_empty());
    }

    #[test]
    fn sort_key_parses_case_insensitively() {
        assert_eq!("Rating".parse::<SortKey>().unwrap(), SortKey::Rating);
        assert_eq!("year".parse::<SortKey>().unwrap(), SortKey::Year);
        assert!("pages".parse::<SortKey>().is_err());
    }
}
