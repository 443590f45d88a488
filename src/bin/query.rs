use std::env;
use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use suggest_core::ingest::{load_dictionary, load_usage};
use suggest_core::SuggestEngine;

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: i64 = 1_000_000;

fn main() -> Result<()> {
    init_logging();

    let mut json = false;
    let mut args = Vec::new();
    for arg in env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            args.push(arg);
        }
    }

    if args.len() < 2 {
        eprintln!("usage: suggest_query [--json] <dictionary> <prefix> [limit] [usage-file]");
        process::exit(2);
    }

    let dictionary = PathBuf::from(&args[0]);
    let prefix = args[1].as_str();
    let limit = args.get(2).map_or(DEFAULT_LIMIT, |raw| limit_or_default(raw));
    let usage = args.get(3).map(PathBuf::from);

    let mut engine = SuggestEngine::new();
    load_dictionary(&mut engine, &dictionary)
        .with_context(|| format!("loading dictionary {}", dictionary.display()))?;
    if let Some(path) = usage {
        load_usage(&mut engine, &path)
            .with_context(|| format!("replaying usage history {}", path.display()))?;
    }

    let suggestions = engine.suggestions(prefix, limit);
    if json {
        println!("{}", serde_json::to_string(&suggestions)?);
    } else {
        for suggestion in &suggestions {
            println!("{}\t(freq={})", suggestion.word, suggestion.frequency);
        }
    }
    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Unparsable, non-positive or absurdly large limits fall back to the
/// default rather than erroring.
fn limit_or_default(raw: &str) -> usize {
    match raw.parse::<i64>() {
        Ok(v) if v > 0 && v <= MAX_LIMIT => v as usize,
        _ => DEFAULT_LIMIT,
    }
}
