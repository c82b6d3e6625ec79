use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Catalog;
use crate::store::DataStore;
use serde::Serialize;

/// Shown as the top genre of an empty catalog.
pub const NO_GENRE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryStats {
    pub total: usize,
    pub read: usize,
    /// Mean of every book's progress percentage, 0 for an empty catalog.
    pub average_progress: f64,
    pub top_genre: String,
}

pub fn statistics(catalog: &Catalog) -> LibraryStats {
    let total = catalog.len();
    let read = catalog.iter().filter(|book| book.is_read()).count();
    let average_progress = if total > 0 {
        let sum: u64 = catalog.iter().map(|book| u64::from(book.progress())).sum();
        sum as f64 / total as f64
    } else {
        0.0
    };

    LibraryStats {
        total,
        read,
        average_progress,
        top_genre: most_frequent_genre(catalog).unwrap_or(NO_GENRE).to_string(),
    }
}

/// Genres are tallied in order of first appearance; on equal counts the genre
/// seen first wins.
fn most_frequent_genre(catalog: &Catalog) -> Option<&str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for book in catalog {
        match counts.iter_mut().find(|(genre, _)| *genre == book.genre()) {
            Some((_, count)) => *count += 1,
            None => counts.push((book.genre(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (genre, count) in counts {
        let better = match best {
            Some((_, top)) => count > top,
            None => true,
        };
        if better {
            best = Some((genre, count));
        }
    }
    best.map(|(genre, _)| genre)
}

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let catalog = store.load()?;
    Ok(CmdResult::default().with_stats(statistics(&catalog)))
}
