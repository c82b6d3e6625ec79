use crate::commands::{CmdMessage, CmdResult, NO_BOOKS};
use crate::error::Result;
use crate::index::index_books;
use crate::model::{Book, Catalog, SortKey};
use crate::store::DataStore;

/// A copy of the catalog ordered ascending by `key`. Ties keep catalog order.
pub fn sorted_view(catalog: &Catalog, key: SortKey) -> Vec<Book> {
    let mut books = catalog.books().to_vec();
    books.sort_by(|a, b| key.compare(a, b));
    books
}

pub fn run<S: DataStore>(store: &S, key: SortKey) -> Result<CmdResult> {
    let catalog = store.load()?;
    if catalog.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(NO_BOOKS)));
    }

    Ok(CmdResult::default().with_listed_books(index_books(sorted_view(&catalog, key))))
}
