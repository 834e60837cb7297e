// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::collections::HashSet;
use std::rc::Rc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::LocalSet;
use tracing_subscriber::EnvFilter;

use docsearch::runtime::native::TokioRuntime;
use docsearch::{
    render, search_query, FileSource, IndexError, IndexSource, IndexedPage, PointerTarget, Query,
    SearchConfig, SearchSession, TieBreak,
};

mod cli;
use cli::display::{self, format_size, pad_right, row, section_bot, section_top, themed};
use cli::{print_entries, Cli, Commands, TerminalSurface};

fn main() {
    init_logging();

    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{}", display::error_line(&format!("failed to start runtime: {}", e)));
            std::process::exit(1);
        }
    };

    let result = LocalSet::new().block_on(&runtime, async {
        match cli.command {
            Commands::Search {
                source,
                query,
                limit,
                url_tiebreak,
                json,
            } => run_search(&source, &query, limit, url_tiebreak, json).await,
            Commands::Inspect { source } => run_inspect(&source).await,
            Commands::Interactive {
                source,
                debounce_ms,
                limit,
            } => run_interactive(&source, debounce_ms, limit).await,
        }
    });

    if let Err(e) = result {
        eprintln!("{}", display::error_line(&e));
        std::process::exit(1);
    }
}

/// `DOCSEARCH_LOG` follows the usual `RUST_LOG` syntax; warnings by default.
fn init_logging() {
    let filter = EnvFilter::try_from_env("DOCSEARCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_source(location: &str) -> Rc<dyn IndexSource> {
    #[cfg(feature = "http")]
    if location.starts_with("http://") || location.starts_with("https://") {
        return Rc::new(docsearch::HttpSource::new(location));
    }
    Rc::new(FileSource::new(location))
}

async fn load_pages(location: &str) -> Result<Vec<IndexedPage>, String> {
    open_source(location)
        .fetch()
        .await
        .map_err(|e: IndexError| e.to_string())
}

fn config_from_flags(limit: usize, url_tiebreak: bool) -> Result<SearchConfig, String> {
    let config = SearchConfig {
        max_results: limit,
        tie_break: if url_tiebreak {
            TieBreak::Url
        } else {
            TieBreak::Index
        },
        ..SearchConfig::default()
    };
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

async fn run_search(
    location: &str,
    raw_query: &str,
    limit: usize,
    url_tiebreak: bool,
    json: bool,
) -> Result<(), String> {
    let config = config_from_flags(limit, url_tiebreak)?;
    let pages = load_pages(location).await?;
    let query = Query::parse(raw_query, config.min_query_len);

    let results = match &query {
        Some(query) => search_query(&pages, query, config.max_results, config.tie_break),
        None => Vec::new(),
    };
    let panel = render(&results, query.as_ref(), &config);

    if json {
        let out = serde_json::to_string_pretty(&panel).map_err(|e| e.to_string())?;
        println!("{}", out);
        return Ok(());
    }

    match query {
        None => println!(
            "{}",
            themed(
                display::GRAY,
                &[],
                &format!(
                    "query must be at least {} characters after trimming",
                    config.min_query_len
                )
            )
        ),
        Some(query) if results.is_empty() => {
            println!("{} {}", config.empty_message, themed(display::GRAY, &[], &format!("({})", query)));
        }
        Some(query) => {
            let offsets: Vec<u32> = results.iter().map(|r| r.score.get()).collect();
            let label = format!("\"{}\" · {} of {} pages", query, results.len(), pages.len());
            print_entries(&label, panel.entries(), &offsets);
        }
    }
    Ok(())
}

async fn run_inspect(location: &str) -> Result<(), String> {
    let pages = load_pages(location).await?;

    let content_bytes: usize = pages.iter().map(|p| p.content.len()).sum();
    let content_chars: usize = pages.iter().map(|p| p.content.chars().count()).sum();
    let empty_content: Vec<&IndexedPage> =
        pages.iter().filter(|p| p.content.trim().is_empty()).collect();
    let empty_titles = pages.iter().filter(|p| p.title.trim().is_empty()).count();

    let mut seen = HashSet::new();
    let duplicate_urls: Vec<&str> = pages
        .iter()
        .filter(|p| !seen.insert(p.url.as_str()))
        .map(|p| p.url.as_str())
        .collect();

    let stat = |label: &str, value: String| {
        row(&format!(" {} {}", pad_right(label, 22), value));
    };

    section_top("INDEX");
    stat("Source", location.to_string());
    stat("Pages", pages.len().to_string());
    stat(
        "Content",
        format!("{} ({} chars)", format_size(content_bytes), content_chars),
    );
    stat("Empty content", empty_content.len().to_string());
    stat("Empty titles", empty_titles.to_string());
    stat("Duplicate URLs", duplicate_urls.len().to_string());

    if !empty_content.is_empty() {
        display::section_bot();
        section_top("PAGES WITHOUT CONTENT");
        for page in &empty_content {
            row(&format!(" {}", display::truncate_chars(&page.url, display::BOX_WIDTH - 2)));
        }
    }
    if !duplicate_urls.is_empty() {
        section_bot();
        section_top("DUPLICATE URLS");
        for url in &duplicate_urls {
            row(&format!(" {}", display::truncate_chars(url, display::BOX_WIDTH - 2)));
        }
    }
    section_bot();
    Ok(())
}

async fn run_interactive(location: &str, debounce_ms: u64, limit: usize) -> Result<(), String> {
    let mut config = config_from_flags(limit, false)?;
    config.debounce_ms = debounce_ms;
    config.index_url = location.to_string();

    let session = SearchSession::new(
        config,
        open_source(location),
        Rc::new(TokioRuntime),
        Box::new(TerminalSurface::default()),
    );

    println!(
        "{}",
        themed(
            display::GRAY,
            &[display::DIM],
            "type to search · :focus :escape :click :quit"
        )
    );

    let mut current = String::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.map_err(|e| e.to_string())? {
        match line.as_str() {
            ":quit" | ":q" => break,
            ":focus" => session.on_focus(&current),
            ":escape" => session.on_escape(),
            ":click" => session.on_pointer(PointerTarget::Outside),
            _ => {
                current = line;
                session.on_query_changed(&current);
            }
        }
    }

    // the spawned evaluation dies with the LocalSet, so settle it here
    session.flush(&current).await;

    let stats = session.stats();
    tracing::info!(
        evaluations = stats.evaluations,
        matcher_runs = stats.matcher_runs,
        stale_discarded = stats.stale_discarded,
        fetches = session.store().fetch_count(),
        pages = session.store().loaded().map_or(0, |index| index.len()),
        "interactive session finished"
    );
    Ok(())
}
