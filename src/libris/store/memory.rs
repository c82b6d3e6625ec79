use super::DataStore;
use crate::error::Result;
use crate::model::Catalog;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    catalog: Catalog,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the catalog has been written.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Catalog> {
        Ok(self.catalog.clone())
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        self.catalog = catalog.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::BookDraft;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_draft(mut self, draft: BookDraft) -> Self {
            let mut catalog = self.store.catalog.clone();
            catalog.push(draft.validate().unwrap());
            self.store.catalog = catalog;
            self
        }

        pub fn with_book(self, title: &str, author: &str, year: u16, genre: &str) -> Self {
            self.with_draft(BookDraft::new(title, author, year, genre))
        }

        pub fn with_read_book(self, title: &str, genre: &str, progress: u8) -> Self {
            self.with_draft(
                BookDraft::new(title, "Some Author", 2000, genre)
                    .read(true)
                    .progress(progress),
            )
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let title = format!("Test Book {}", i + 1);
                self = self.with_book(&title, "Test Author", 2000, "Fiction");
            }
            self
        }
    }
}
