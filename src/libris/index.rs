//! # Display Numbering
//!
//! Listings number their rows starting from 1 (the `S.No` column). The number
//! belongs to the rendered view, not the book: the same book can be row 1 when
//! sorted by title and row 4 when sorted by year. Numbers are therefore
//! assigned after filtering and sorting, never stored.

use crate::model::Book;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayBook {
    pub index: usize,
    pub book: Book,
}

/// Pairs each book with its 1-based position in `books`.
pub fn index_books<I>(books: I) -> Vec<DisplayBook>
where
    I: IntoIterator<Item = Book>,
{
    books
        .into_iter()
        .enumerate()
        .map(|(i, book)| DisplayBook { index: i + 1, book })
        .collect()
}
