// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sitefind command-line interface.
//!
//! Three subcommands: `search` runs one query against a catalog, `inspect`
//! summarizes a catalog, and `interactive` drives a full search session from
//! stdin, arrow keys and all, for poking at debounce and selection behavior.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sitefind",
    about = "Category-grouped, highlighted search over a static site catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog and display grouped results
    Search {
        /// Path to the catalog manifest.json
        manifest: PathBuf,

        /// Search query
        query: String,

        /// Only search one category (page, service, project, blog)
        #[arg(short, long)]
        category: Option<String>,

        /// Print the search state as JSON instead of boxes
        #[arg(long)]
        json: bool,

        /// TOML file overriding search defaults
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Summarize a catalog: documents per category and popular searches
    Inspect {
        /// Path to the catalog manifest.json
        manifest: PathBuf,
    },

    /// Read queries and key commands from stdin, one per line
    ///
    /// Plain lines are typed queries. Commands: `:down`, `:up`, `:enter`,
    /// `:esc`, `:open`, `:category <name|all>`.
    Interactive {
        /// Path to the catalog manifest.json
        manifest: PathBuf,

        /// TOML file overriding search defaults
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
