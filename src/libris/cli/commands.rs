//! # CLI Layer
//!
//! This module is **one possible UI client** for libris. It is the only place
//! in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! Each handler maps one subcommand to one API call, then prints the rendered
//! data followed by the result's messages.

use super::logging;
use super::render::{
    render_config, render_goal, render_home, render_library_table, render_messages,
    render_recommendations, render_search_results, render_stats,
};
use super::setup::{views, Cli, Commands};
use clap::Parser;
use libris::api::{CmdResult, ConfigAction, LibrisApi};
use libris::error::{LibrisError, Result};
use libris::init::initialize;
use libris::model::{BookDraft, SortKey};
use libris::store::fs::FileStore;
use std::path::PathBuf;

struct AppContext {
    api: LibrisApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let cwd = std::env::current_dir().map_err(LibrisError::Io)?;
    let context = initialize(&cwd, cli.global)?;
    let mut ctx = AppContext { api: context.api };

    match cli.command {
        None | Some(Commands::Home) => handle_home(),
        Some(Commands::Add {
            title,
            author,
            year,
            genre,
            read,
            progress,
            rating,
        }) => {
            let draft = BookDraft::new(title, author, year, genre)
                .read(read)
                .progress(progress)
                .rating(rating);
            handle_add(&mut ctx, draft)
        }
        Some(Commands::Remove { title }) => handle_remove(&mut ctx, title.join(" ")),
        Some(Commands::Search { query }) => handle_search(&ctx, query.join(" ")),
        Some(Commands::List { sort }) => handle_list(&ctx, sort),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Goal { goal }) => handle_goal(&ctx, goal),
        Some(Commands::Export { output }) => handle_export(&ctx, output),
        Some(Commands::Exit) => handle_exit(&mut ctx),
        Some(Commands::Recommend { genre }) => handle_recommend(&ctx, genre.join(" ")),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn handle_home() -> Result<()> {
    print!("{}", render_home(&views()));
    Ok(())
}

fn handle_add(ctx: &mut AppContext, draft: BookDraft) -> Result<()> {
    let genre = draft.genre.clone();
    let result = ctx.api.add_book(draft)?;
    print_messages(&result);
    print!("{}", render_recommendations(&genre, &result.recommendations));
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, title: String) -> Result<()> {
    let result = ctx.api.remove_books(&title)?;
    print_messages(&result);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: String) -> Result<()> {
    let result = ctx.api.search_books(&query)?;
    print!("{}", render_search_results(&result.listed_books));
    print_messages(&result);
    Ok(())
}

fn handle_list(ctx: &AppContext, sort: Option<SortKey>) -> Result<()> {
    let result = ctx.api.list_books(sort)?;
    if !result.listed_books.is_empty() {
        let key = sort.unwrap_or(ctx.api.settings().default_sort);
        print!("{}", render_library_table(&result.listed_books, key));
    }
    print_messages(&result);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.statistics()?;
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
    }
    print_messages(&result);
    Ok(())
}

fn handle_goal(ctx: &AppContext, goal: u32) -> Result<()> {
    let result = ctx.api.reading_goal(goal)?;
    if let Some(progress) = &result.goal {
        print!("{}", render_goal(progress));
    }
    print_messages(&result);
    Ok(())
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_library(output.as_deref())?;
    print_messages(&result);
    Ok(())
}

fn handle_exit(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.exit()?;
    print_messages(&result);
    Ok(())
}

fn handle_recommend(ctx: &AppContext, genre: String) -> Result<()> {
    let result = ctx.api.recommend(&genre);
    print!("{}", render_recommendations(&genre, &result.recommendations));
    print_messages(&result);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result);
    Ok(())
}

fn print_messages(result: &CmdResult) {
    let output = render_messages(&result.messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}
