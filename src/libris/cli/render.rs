//! # Rendering Module
//!
//! Styled terminal output built from the templates in `templates.rs`. Each
//! template is rendered in a fresh minijinja environment that carries a single
//! `style` filter backed by [`LIBRIS_THEME`]. Color is detected from the
//! terminal (and turned off by `--no-color`) unless the caller forces it on
//! or off.
//!
//! Layout calculations (column widths, truncation, padding) stay in Rust
//! because they need Unicode display widths. Templates only decide where the
//! precomputed strings go and which named style each one gets.

use super::styles::{names, LIBRIS_THEME};
use super::templates::{
    CONFIG_TEMPLATE, GOAL_TEMPLATE, HOME_TEMPLATE, MESSAGES_TEMPLATE, RECOMMENDATIONS_TEMPLATE,
    SEARCH_TEMPLATE, STATS_TEMPLATE, TABLE_TEMPLATE,
};
use console::Term;
use libris::api::{CmdMessage, GoalProgress, LibraryStats, MessageLevel};
use libris::config::LibrisConfig;
use libris::index::DisplayBook;
use libris::model::{SortKey, FIELD_NAMES};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a text column (title, author, genre) may grow before truncation.
pub const MAX_COLUMN_WIDTH: usize = 40;
pub const COLUMN_GAP: &str = "  ";
pub const INDEX_HEADER: &str = "S.No";

fn detect_color() -> bool {
    console::colors_enabled() && Term::stdout().features().colors_supported()
}

/// Renders `template` with `data`, forcing color on or off when `use_color`
/// is set.
fn render_template<T: Serialize>(
    template: &str,
    data: &T,
    use_color: Option<bool>,
) -> Result<String, Error> {
    let use_color = use_color.unwrap_or_else(detect_color);

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        LIBRIS_THEME.apply(&name, &value.to_string(), use_color)
    });

    env.render_str(template, data)
}

#[derive(Serialize)]
struct ViewEntry {
    name: String,
    about: String,
}

#[derive(Serialize)]
struct HomeData {
    views: Vec<ViewEntry>,
}

/// Renders the welcome screen followed by the list of views.
pub fn render_home(views: &[(String, String)]) -> String {
    render_home_internal(views, None)
}

fn render_home_internal(views: &[(String, String)], use_color: Option<bool>) -> String {
    let width = views.iter().map(|(name, _)| name.width()).max().unwrap_or(0);
    let data = HomeData {
        views: views
            .iter()
            .map(|(name, about)| ViewEntry {
                name: pad_to_width(name, width),
                about: about.clone(),
            })
            .collect(),
    };

    render_template(HOME_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Renders command messages, one per line, styled by level.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

#[derive(Serialize)]
struct RecommendationsData {
    heading: String,
    titles: Vec<String>,
}

pub fn render_recommendations(genre: &str, titles: &[String]) -> String {
    render_recommendations_internal(genre, titles, None)
}

fn render_recommendations_internal(
    genre: &str,
    titles: &[String],
    use_color: Option<bool>,
) -> String {
    if titles.is_empty() {
        return String::new();
    }
    let data = RecommendationsData {
        heading: format!("Recommended books for {}:", genre),
        titles: titles.to_vec(),
    };

    render_template(RECOMMENDATIONS_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct SearchLine {
    title: String,
    author: String,
    year: u16,
    genre: String,
    status: &'static str,
    status_style: &'static str,
    progress: u8,
    rating: u8,
}

#[derive(Serialize)]
struct SearchData {
    books: Vec<SearchLine>,
}

/// Renders search hits as one summary line per book.
pub fn render_search_results(books: &[DisplayBook]) -> String {
    render_search_results_internal(books, None)
}

fn render_search_results_internal(books: &[DisplayBook], use_color: Option<bool>) -> String {
    let data = SearchData {
        books: books
            .iter()
            .map(|db| {
                let book = &db.book;
                let (status, status_style) = if book.is_read() {
                    ("Read", names::READ)
                } else {
                    ("Unread", names::UNREAD)
                };
                SearchLine {
                    title: book.title().to_string(),
                    author: book.author().to_string(),
                    year: book.year(),
                    genre: book.genre().to_string(),
                    status,
                    status_style,
                    progress: book.progress(),
                    rating: book.rating(),
                }
            })
            .collect(),
    };

    render_template(SEARCH_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct TableRow {
    index: String,
    cells: String,
}

#[derive(Serialize)]
struct TableData {
    heading: String,
    header: String,
    rows: Vec<TableRow>,
}

/// Renders the library as an aligned table with a 1-based `S.No` column.
pub fn render_library_table(books: &[DisplayBook], sort: SortKey) -> String {
    render_library_table_internal(books, sort, None)
}

fn render_library_table_internal(
    books: &[DisplayBook],
    sort: SortKey,
    use_color: Option<bool>,
) -> String {
    let rows: Vec<Vec<String>> = books.iter().map(table_cells).collect();

    let mut widths: Vec<usize> = std::iter::once(INDEX_HEADER)
        .chain(FIELD_NAMES.iter().copied())
        .map(UnicodeWidthStr::width)
        .collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let header_cells: Vec<String> = std::iter::once(INDEX_HEADER)
        .chain(FIELD_NAMES.iter().copied())
        .map(str::to_string)
        .collect();

    let data = TableData {
        heading: format!("Your Library (sorted by {})", sort),
        header: join_padded(&header_cells, &widths),
        rows: rows
            .iter()
            .map(|cells| TableRow {
                index: format!("{}{}", pad_to_width(&cells[0], widths[0]), COLUMN_GAP),
                cells: join_padded(&cells[1..], &widths[1..]),
            })
            .collect(),
    };

    render_template(TABLE_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn table_cells(db: &DisplayBook) -> Vec<String> {
    let book = &db.book;
    vec![
        db.index.to_string(),
        truncate_to_width(book.title(), MAX_COLUMN_WIDTH),
        truncate_to_width(book.author(), MAX_COLUMN_WIDTH),
        book.year().to_string(),
        truncate_to_width(book.genre(), MAX_COLUMN_WIDTH),
        if book.is_read() { "yes" } else { "no" }.to_string(),
        format!("{}%", book.progress()),
        format!("{}/5", book.rating()),
    ]
}

/// Pads every cell but the last to its column width and joins with gaps.
fn join_padded(cells: &[String], widths: &[usize]) -> String {
    let last = cells.len().saturating_sub(1);
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            if i == last {
                cell.clone()
            } else {
                pad_to_width(cell, *width)
            }
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}

#[derive(Serialize)]
struct Metric {
    label: String,
    value: String,
}

#[derive(Serialize)]
struct StatsData {
    metrics: Vec<Metric>,
}

pub fn render_stats(stats: &LibraryStats) -> String {
    render_stats_internal(stats, None)
}

fn render_stats_internal(stats: &LibraryStats, use_color: Option<bool>) -> String {
    let pairs = [
        ("Total Books", stats.total.to_string()),
        ("Books Read", stats.read.to_string()),
        (
            "Average Reading Progress",
            format!("{:.2}%", stats.average_progress),
        ),
        ("Most Read Genre", stats.top_genre.clone()),
    ];
    let width = pairs.iter().map(|(label, _)| label.width()).max().unwrap_or(0);

    let data = StatsData {
        metrics: pairs
            .into_iter()
            .map(|(label, value)| Metric {
                label: pad_to_width(label, width),
                value,
            })
            .collect(),
    };

    render_template(STATS_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct GoalData {
    heading: String,
    progress: String,
    met: bool,
    remaining: usize,
}

pub fn render_goal(goal: &GoalProgress) -> String {
    render_goal_internal(goal, None)
}

fn render_goal_internal(goal: &GoalProgress, use_color: Option<bool>) -> String {
    let data = GoalData {
        heading: format!("Reading Goal for {}", goal.year),
        progress: format!("{}/{}", goal.read, goal.goal),
        met: goal.is_met(),
        remaining: goal.remaining(),
    };

    render_template(GOAL_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

pub fn render_config(config: &LibrisConfig) -> String {
    render_config_internal(config, None)
}

fn render_config_internal(config: &LibrisConfig, use_color: Option<bool>) -> String {
    let data = ConfigData {
        entries: config
            .entries()
            .into_iter()
            .map(|(key, value)| ConfigEntry { key, value })
            .collect(),
    };

    render_template(CONFIG_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
