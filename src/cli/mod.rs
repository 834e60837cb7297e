// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsearch command-line interface.
//!
//! Three subcommands: `search` for one-shot queries against an index,
//! `inspect` to sanity-check an index before shipping it, and `interactive`
//! to drive a live search session (debounce, lazy loading and all) from a
//! terminal. A SOURCE is either an `http(s)://` URL or a path to the JSON
//! index file.

pub mod display;

use clap::{Parser, Subcommand};
use display::{entry_lines, row, section_bot, section_top, themed, BOLD, GRAY};
use docsearch::{ResultEntry, ResultSurface};

#[derive(Parser)]
#[command(
    name = "docsearch",
    about = "Incremental search over a static docs index",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one query and print the ranked results
    Search {
        /// Index location: http(s) URL or path to search.json
        source: String,

        /// Search query (trimmed and lowercased before matching)
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Break score ties by URL instead of index order
        #[arg(long)]
        url_tiebreak: bool,

        /// Print the rendered panel as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Summarize an index: page count, content size, empty pages
    Inspect {
        /// Index location: http(s) URL or path to search.json
        source: String,
    },

    /// Type queries line by line against a live search session
    ///
    /// Each line replaces the input's value, exactly as if it had been typed
    /// into the search box. `:focus`, `:escape`, `:click` and `:quit` simulate
    /// the other input events.
    Interactive {
        /// Index location: http(s) URL or path to search.json
        source: String,

        /// Quiet period before a query runs, in milliseconds
        #[arg(long, default_value = "120")]
        debounce_ms: u64,

        /// Maximum number of results to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}

/// Prints each panel the session renders as a box on stdout.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    visible: bool,
}

impl ResultSurface for TerminalSurface {
    fn hide(&mut self) {
        if self.visible {
            println!("{}", themed(GRAY, &[], "(results hidden)"));
        }
        self.visible = false;
    }

    fn show_placeholder(&mut self, message: &str) {
        section_top("RESULTS");
        row(&format!(" {}", themed(GRAY, &[BOLD], message)));
        section_bot();
        self.visible = true;
    }

    fn show_entries(&mut self, entries: &[ResultEntry]) {
        print_entries(&format!("RESULTS ({})", entries.len()), entries, &[]);
        self.visible = true;
    }
}

/// Print a boxed result listing. `offsets` lines up with `entries` when
/// match offsets are known.
pub fn print_entries(label: &str, entries: &[ResultEntry], offsets: &[u32]) {
    section_top(label);
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            row("");
        }
        for line in entry_lines(i + 1, entry, offsets.get(i).copied()) {
            row(&line);
        }
    }
    section_bot();
}
