use crate::config::LibrisConfig;
use crate::index::DisplayBook;
use crate::model::Book;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod exit;
pub mod export;
pub mod goal;
pub mod list;
pub mod recommend;
pub mod remove;
pub mod search;
pub mod stats;

pub use goal::GoalProgress;
pub use stats::LibraryStats;

/// Banner shown whenever a view needs books and the catalog has none.
pub const NO_BOOKS: &str = "No books available.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<DisplayBook>,
    pub recommendations: Vec<String>,
    pub stats: Option<LibraryStats>,
    pub goal: Option<GoalProgress>,
    pub export_path: Option<PathBuf>,
    pub config: Option<LibrisConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<DisplayBook>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_recommendations(mut self, titles: &[&str]) -> Self {
        self.recommendations = titles.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_stats(mut self, stats: LibraryStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_goal(mut self, goal: GoalProgress) -> Self {
        self.goal = Some(goal);
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: LibrisConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
