use clap::{CommandFactory, Parser, Subcommand};
use libris::model::SortKey;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2026-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "libris", bin_name = "libris", version = get_version())]
#[command(about = "A personal book catalog for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the per-user library instead of the one in the current directory
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the welcome screen
    #[command(display_order = 1)]
    Home,

    /// Add a book to the library
    #[command(alias = "a", display_order = 2)]
    Add {
        #[arg(long, default_value = "")]
        title: String,

        #[arg(long, default_value = "")]
        author: String,

        /// Publication year (1900-3000)
        #[arg(long, default_value_t = 1900, value_parser = clap::value_parser!(u16).range(1900..=3000))]
        year: u16,

        #[arg(long, default_value = "")]
        genre: String,

        /// Mark the book as read
        #[arg(long)]
        read: bool,

        /// Reading progress in percent (0-100)
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=100))]
        progress: u8,

        /// Rating from 1 to 5
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
    },

    /// Remove every book with exactly this title
    #[command(alias = "rm", display_order = 3)]
    Remove {
        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Search by title or author
    #[command(alias = "s", display_order = 4)]
    Search {
        /// Query words (joined with spaces, case-insensitive)
        #[arg(num_args = 0..)]
        query: Vec<String>,
    },

    /// Show the library as a table
    #[command(alias = "ls", alias = "view", display_order = 5)]
    List {
        /// Sort by title, author, year or rating
        #[arg(short, long)]
        sort: Option<SortKey>,
    },

    /// Show library statistics
    #[command(display_order = 6)]
    Stats,

    /// Show progress toward a yearly reading goal
    #[command(display_order = 7)]
    Goal {
        /// Number of books to read this year
        #[arg(default_value_t = 0)]
        goal: u32,
    },

    /// Export the library to CSV
    #[command(display_order = 8)]
    Export {
        /// Output file (relative paths land next to the library)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Save the library and say goodbye
    #[command(display_order = 9)]
    Exit,

    /// Suggest books for a genre
    #[command(display_order = 10)]
    Recommend {
        /// Genre words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        genre: Vec<String>,
    },

    /// Get or set configuration
    #[command(display_order = 11)]
    Config {
        /// Configuration key (library-file, export-file, default-sort)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Visible subcommands as `(name, about)`, in display order.
pub fn views() -> Vec<(String, String)> {
    let cmd = Cli::command();
    let mut subcommands: Vec<_> = cmd
        .get_subcommands()
        .filter(|sc| !sc.is_hide_set())
        .collect();
    subcommands.sort_by_key(|sc| sc.get_display_order());

    subcommands
        .into_iter()
        .map(|sc| {
            let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
            (sc.get_name().to_string(), about)
        })
        .collect()
}
