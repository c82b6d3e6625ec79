use crate::commands::{CmdMessage, CmdResult};
use crate::config::normalized;
use crate::error::{LibrisError, Result};
use crate::model::{Book, Catalog, FIELD_NAMES};
use crate::store::DataStore;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes the catalog as CSV to `path`. Refuses, with an error banner, to
/// write over any of the `protected` files (the library and its config).
pub fn run<S: DataStore>(store: &S, path: &Path, protected: &[PathBuf]) -> Result<CmdResult> {
    if let Some(taken) = protected.iter().find(|p| same_file(p, path)) {
        return Ok(CmdResult::default().with_message(CmdMessage::error(format!(
            "Cannot export to {}: it would overwrite {}",
            path.display(),
            taken.display()
        ))));
    }

    let catalog = store.load()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(LibrisError::Io)?;
    }
    let file = File::create(path).map_err(LibrisError::Io)?;
    export_csv(BufWriter::new(file), &catalog)?;
    tracing::debug!(path = %path.display(), books = catalog.len(), "exported library");

    Ok(CmdResult::default()
        .with_export_path(path.to_path_buf())
        .with_message(CmdMessage::success(format!(
            "Library exported successfully to {}",
            path.display()
        ))))
}

/// Compares resolved paths when both exist, lexical paths otherwise.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => normalized(a) == normalized(b),
    }
}

/// Writes a header row of field names, then one row per book in catalog order.
pub fn export_csv<W: Write>(mut writer: W, catalog: &Catalog) -> Result<()> {
    writeln!(writer, "{}", FIELD_NAMES.join(",")).map_err(LibrisError::Io)?;
    for book in catalog {
        writeln!(writer, "{}", csv_row(book)).map_err(LibrisError::Io)?;
    }
    writer.flush().map_err(LibrisError::Io)?;
    Ok(())
}

fn csv_row(book: &Book) -> String {
    [
        escape(book.title()),
        escape(book.author()),
        Cow::Owned(book.year().to_string()),
        escape(book.genre()),
        Cow::Borrowed(if book.is_read() { "True" } else { "False" }),
        Cow::Owned(book.progress().to_string()),
        Cow::Owned(book.rating().to_string()),
    ]
    .join(",")
}

/// Quotes a field only when it holds a delimiter, quote, or line break.
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookDraft;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn to_string(catalog: &Catalog) -> String {
        let mut buf = Vec::new();
        export_csv(&mut buf, catalog).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_then_rows_in_catalog_order() {
        let store = StoreFixture::new()
            .with_draft(
                BookDraft::new("Dune", "Frank Herbert", 1965, "Science Fiction")
                    .read(true)
                    .progress(100)
                    .rating(5),
            )
            .with_book("Emma", "Jane Austen", 1996, "Fiction")
            .store;

        let csv = to_string(&store.load().unwrap());
        assert_eq!(
            csv,
            "Title,Author,Year,Genre,Read,Progress,Rating\n\
             Dune,Frank Herbert,1965,Science Fiction,True,100,5\n\
             Emma,Jane Austen,1996,Fiction,False,0,3\n"
        );
    }

    #[test]
    fn empty_catalog_writes_header_only() {
        assert_eq!(
            to_string(&Catalog::new()),
            "Title,Author,Year,Genre,Read,Progress,Rating\n"
        );
    }

    #[test]
    fn quotes_fields_with_commas_and_quotes() {
        assert_eq!(escape("Plain"), "Plain");
        assert_eq!(escape("Sapiens, Revised"), "\"Sapiens, Revised\"");
        assert_eq!(escape("The \"Best\" Book"), "\"The \"\"Best\"\" Book\"");
        assert_eq!(escape("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn run_writes_file_and_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("books.csv");
        let store = StoreFixture::new().with_books(2).store;

        let result = run(&store, &path, &[]).unwrap();
        assert_eq!(result.export_path.as_deref(), Some(path.as_path()));

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 3);
    }

    #[test]
    fn refuses_to_overwrite_protected_files() {
        let temp = TempDir::new().unwrap();
        let library = temp.path().join("library.json");
        std::fs::write(&library, "[]").unwrap();
        let store = StoreFixture::new().with_books(2).store;

        for target in [
            library.clone(),
            temp.path().join(".").join("library.json"),
            temp.path().join("sub").join("..").join("library.json"),
        ] {
            std::fs::create_dir_all(temp.path().join("sub")).unwrap();
            let result = run(&store, &target, &[library.clone()]).unwrap();
            assert!(result.has_errors(), "{} was accepted", target.display());
            assert!(result.export_path.is_none());
        }
        assert_eq!(std::fs::read_to_string(&library).unwrap(), "[]");
    }

    #[test]
    fn export_does_not_touch_the_store() {
        let temp = TempDir::new().unwrap();
        let store = InMemoryStore::new();
        run(&store, &temp.path().join("x.csv"), &[]).unwrap();
        assert_eq!(store.save_count(), 0);
    }
}
