//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as standalone
//! files under `templates/`, so layout edits show up as plain text diffs.
//! They are embedded here at compile time and used as ordinary string
//! constants by `render.rs`.
//!
//! A few conventions:
//!
//!   1. Whitespace: the environment trims the newline after a block tag and
//!      strips indentation before one, and keeps the file's trailing newline.
//!      Every output line therefore corresponds to one template line; block
//!      tags (`{% for %}`, `{% if %}`) produce no output of their own.
//!
//!   2. Styles: templates pick a style by name through the `style` filter.
//!      When a style depends on the data (read vs unread), Rust computes the
//!      style name and the template applies it, instead of branching.
//!
//!   3. Layout: column widths and padding are computed in Rust, where
//!      Unicode display width is available. Templates only place the
//!      precomputed strings.

pub const HOME_TEMPLATE: &str = include_str!("templates/home.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const RECOMMENDATIONS_TEMPLATE: &str = include_str!("templates/recommendations.tmp");
pub const SEARCH_TEMPLATE: &str = include_str!("templates/search.tmp");
pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const STATS_TEMPLATE: &str = include_str!("templates/stats.tmp");
pub const GOAL_TEMPLATE: &str = include_str!("templates/goal.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
