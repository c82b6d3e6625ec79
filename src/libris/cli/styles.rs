//! Named terminal styles referenced from templates via the `style` filter.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style names shared between Rust code and templates.
pub mod names {
    pub const HEADING: &str = "heading";
    pub const HINT: &str = "hint";
    pub const LABEL: &str = "label";
    pub const VALUE: &str = "value";
    pub const TITLE: &str = "title";
    pub const INDEX: &str = "index";
    pub const TABLE_HEADER: &str = "table_header";
    pub const READ: &str = "read";
    pub const UNREAD: &str = "unread";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

/// Prefixed to text whose style name is not registered, so template typos show up.
pub const MISSING_STYLE: &str = "(!?)";

pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE, text),
        }
    }
}

pub static LIBRIS_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::HEADING, Style::new().bold().cyan())
        .add(names::HINT, Style::new().dim().italic())
        .add(names::LABEL, Style::new().dim())
        .add(names::VALUE, Style::new().bold())
        .add(names::TITLE, Style::new().bold())
        .add(names::INDEX, Style::new().yellow())
        .add(names::TABLE_HEADER, Style::new().bold().underlined())
        .add(names::READ, Style::new().green())
        .add(names::UNREAD, Style::new().red())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_leaves_text_alone() {
        assert_eq!(LIBRIS_THEME.apply(names::TITLE, "Dune", false), "Dune");
    }

    #[test]
    fn colored_mode_wraps_in_ansi() {
        let theme = Theme::new().add("bold", Style::new().bold().force_styling(true));
        let out = theme.apply("bold", "Dune", true);
        assert!(out.contains("\x1b[1m"));
        assert!(out.contains("Dune"));
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(LIBRIS_THEME.apply("nope", "Dune", false), "(!?) Dune");
    }
}
