use crate::commands::{CmdMessage, CmdResult, NO_BOOKS};
use crate::error::Result;
use crate::index::index_books;
use crate::model::{Book, Catalog};
use crate::store::DataStore;

/// Books whose title or author contains `query`, ignoring case, in catalog order.
/// An empty query matches everything.
pub fn search(catalog: &Catalog, query: &str) -> Vec<Book> {
    let query = query.to_lowercase();
    catalog
        .iter()
        .filter(|book| {
            book.title().to_lowercase().contains(&query)
                || book.author().to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

pub fn run<S: DataStore>(store: &S, query: &str) -> Result<CmdResult> {
    let catalog = store.load()?;
    if catalog.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(NO_BOOKS)));
    }

    let matches = search(&catalog, query);
    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::warning("No books found."));
    }
    Ok(result.with_listed_books(index_books(matches)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn shelf() -> InMemoryStore {
        StoreFixture::new()
            .with_book("Dune", "Frank Herbert", 1965, "Science Fiction")
            .with_book("Emma", "Jane Austen", 1996, "Fiction")
            .with_book("Herbs of the World", "A. Gardener", 2010, "Non-Fiction")
            .store
    }

    #[test]
    fn matches_title_or_author_ignoring_case() {
        let result = run(&shelf(), "HERB").unwrap();
        let titles: Vec<_> = result
            .listed_books
            .iter()
            .map(|dp| dp.book.title())
            .collect();
        assert_eq!(titles, vec!["Dune", "Herbs of the World"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn results_are_numbered_from_one() {
        let result = run(&shelf(), "e").unwrap();
        assert_eq!(result.listed_books[0].index, 1);
        assert_eq!(result.listed_books.last().unwrap().index, 3);
    }

    #[test]
    fn no_match_is_a_warning() {
        let result = run(&shelf(), "tolkien").unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn empty_catalog_differs_from_no_match() {
        let result = run(&InMemoryStore::new(), "dune").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.messages[0].content, NO_BOOKS);
    }

    #[test]
    fn empty_query_matches_everything() {
        let catalog = shelf().load().unwrap();
        assert_eq!(search(&catalog, "").len(), 3);
    }
}
