// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::error::Error;
use std::io::{self, BufRead};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use sitefind::{
    Catalog, Category, Key, SearchConfig, SearchOptions, SearchSession, SearchState, Searcher,
    SessionAction,
};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{pad_right, Painter, Role};
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sitefind=warn")),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Search {
            manifest,
            query,
            category,
            json,
            config,
        } => run_search(&manifest, &query, category.as_deref(), json, config.as_deref()),
        Commands::Inspect { manifest } => run_inspect(&manifest),
        Commands::Interactive { manifest, config } => {
            run_interactive(&manifest, config.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<SearchConfig, Box<dyn Error>> {
    match path {
        Some(path) => Ok(SearchConfig::load(path)?),
        None => Ok(SearchConfig::default()),
    }
}

fn parse_category(name: Option<&str>) -> Result<Option<Category>, Box<dyn Error>> {
    match name {
        None | Some("") | Some("all") => Ok(None),
        Some(name) => Ok(Some(name.parse()?)),
    }
}

fn run_search(
    manifest: &Path,
    query: &str,
    category: Option<&str>,
    json: bool,
    config: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let config = load_config(config)?;
    let options = SearchOptions {
        category: parse_category(category)?,
    };
    let searcher = Searcher::new(Catalog::load_or_empty(manifest), config);
    let state = searcher.query(query, &options);

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    match state.results() {
        Some(results) => Painter::detect().print_results(results, None, searcher.highlighter()),
        None => println!(
            "Query too short: type at least {} characters",
            searcher.config().min_query_len
        ),
    }
    Ok(())
}

fn run_inspect(manifest: &Path) -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::load(manifest)?;
    let counts = catalog.counts();
    let p = Painter::detect();

    p.box_top(&p.bold(Role::Query, "CATALOG"));
    p.box_row(&format!(" manifest   {}", manifest.display()));
    p.box_row(&format!(" documents  {}", catalog.len()));
    p.box_bottom();

    p.box_top(&p.bold(Role::Query, "CATEGORIES"));
    for category in Category::ALL {
        let count = counts.get(&category).copied().unwrap_or(0);
        p.box_row(&format!(" {} {}", pad_right(&p.category_label(category), 14), count));
    }
    p.box_bottom();

    if !catalog.popular_searches().is_empty() {
        p.box_top(&p.bold(Role::Query, "POPULAR SEARCHES"));
        for term in catalog.popular_searches() {
            p.box_row(&format!(" {}", term));
        }
        p.box_bottom();
    }
    Ok(())
}

/// One line of interactive input.
enum Command<'a> {
    Type(&'a str),
    Press(Key),
    Category(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    match line.trim() {
        ":down" => Command::Press(Key::ArrowDown),
        ":up" => Command::Press(Key::ArrowUp),
        ":enter" => Command::Press(Key::Enter),
        ":esc" => Command::Press(Key::Escape),
        ":open" => Command::Press(Key::Shortcut),
        other => match other.strip_prefix(":category") {
            Some(rest) => Command::Category(rest.trim()),
            None => Command::Type(line),
        },
    }
}

fn run_interactive(manifest: &Path, config: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let config = load_config(config)?;
    let debounce = config.debounce();
    let searcher = Arc::new(Searcher::new(Catalog::load_or_empty(manifest), config));
    let mut session = SearchSession::new(Arc::clone(&searcher));
    let painter = Painter::detect();
    session.handle_key(Key::Shortcut);

    for line in io::stdin().lock().lines() {
        let line = line?;
        let now = Instant::now();

        match parse_command(&line) {
            Command::Type(text) => {
                session.input(text, now);
            }
            Command::Category(name) => match parse_category(Some(name)) {
                Ok(category) => {
                    session.set_category(category, now);
                }
                Err(e) => {
                    // Report and keep reading
                    eprintln!("❌ {}", e);
                    continue;
                }
            },
            Command::Press(key) => match session.handle_key(key) {
                SessionAction::Navigate(url) => {
                    println!("→ {}", url);
                    session.handle_key(Key::Shortcut);
                    continue;
                }
                SessionAction::Closed => {
                    println!("(closed)");
                    continue;
                }
                SessionAction::Opened | SessionAction::None => {}
            },
        }

        // Stdin lines arrive far apart compared to keystrokes; let the window lapse.
        session.poll(now + debounce);
        render(&painter, &session, &searcher);
    }
    Ok(())
}

fn render(painter: &Painter, session: &SearchSession, searcher: &Searcher) {
    match session.state() {
        SearchState::Idle => println!("(idle)"),
        SearchState::Loading => println!("(searching…)"),
        state => {
            if let Some(results) = state.results() {
                painter.print_results(
                    results,
                    Some(session.selected_index()),
                    searcher.highlighter(),
                );
            }
        }
    }
}
