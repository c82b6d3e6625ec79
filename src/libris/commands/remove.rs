use crate::commands::{CmdMessage, CmdResult, NO_BOOKS};
use crate::error::Result;
use crate::store::DataStore;

/// Removes every book titled exactly `title`. Titles are not unique, so all
/// matches go; success is reported even when nothing matched.
pub fn run<S: DataStore>(store: &mut S, title: &str) -> Result<CmdResult> {
    let mut catalog = store.load()?;
    if catalog.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(NO_BOOKS)));
    }

    let removed = catalog.remove_by_title(title);
    tracing::debug!(title, removed = removed.len(), "removing by title");
    store.save(&catalog)?;

    Ok(CmdResult::default()
        .with_affected_books(removed)
        .with_message(CmdMessage::success(format!("'{}' removed!", title))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{search, MessageLevel};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_all_books_with_that_title() {
        let mut store = StoreFixture::new()
            .with_book("Dune", "Frank Herbert", 1965, "Science Fiction")
            .with_book("Emma", "Jane Austen", 1996, "Fiction")
            .with_book("Dune", "Someone Else", 2021, "Science Fiction")
            .store;

        let result = run(&mut store, "Dune").unwrap();
        assert_eq!(result.affected_books.len(), 2);
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let remaining = store.load().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining.books()[0].title(), "Emma");
    }

    #[test]
    fn removed_title_no_longer_matches_search() {
        let mut store = StoreFixture::new()
            .with_book("Dune", "Frank Herbert", 1965, "Science Fiction")
            .with_book("Dune Messiah", "Frank Herbert", 1969, "Science Fiction")
            .store;

        run(&mut store, "Dune").unwrap();
        let found = search::run(&store, "Dune").unwrap();
        assert!(found
            .listed_books
            .iter()
            .all(|dp| dp.book.title() != "Dune"));
        assert_eq!(found.listed_books.len(), 1);
    }

    #[test]
    fn no_match_still_reports_success_and_writes() {
        let mut store = StoreFixture::new().with_books(2).store;

        let result = run(&mut store, "Missing").unwrap();
        assert!(result.affected_books.is_empty());
        assert_eq!(result.messages[0].content, "'Missing' removed!");
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn match_is_exact_and_case_sensitive() {
        let mut store = StoreFixture::new()
            .with_book("Dune", "Frank Herbert", 1965, "Science Fiction")
            .store;

        let result = run(&mut store, "dune").unwrap();
        assert!(result.affected_books.is_empty());
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn empty_catalog_is_informational() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Anything").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.messages[0].content, NO_BOOKS);
        assert_eq!(store.save_count(), 0);
    }
}
