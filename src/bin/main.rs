use std::env;
use std::io::{self, stdin, stdout, Write};
use std::path::Path;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};

use suggest_core::ingest::load_dictionary;
use suggest_core::{SuggestEngine, Suggestion};

const SUGGESTION_ROWS: usize = 8;

fn main() -> io::Result<()> {
    let mut engine = SuggestEngine::new();
    let mut status = String::from("Type a prefix to see suggestions.");
    let mut last_query: Option<(String, Vec<Suggestion>)> = None;

    if let Some(path) = env::args().nth(1) {
        status = match load_dictionary(&mut engine, Path::new(&path)) {
            Ok(count) => format!("Loaded {} words from {}.", count, path),
            Err(e) => format!("Could not load dictionary: {}", e),
        };
    }

    loop {
        print_ui(&engine, &status, &last_query)?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let cmd = input.trim();

        match cmd {
            "exit" | "quit" => break,
            "" => {}
            s if s.starts_with('+') => {
                let word = s[1..].trim();
                engine.insert(word);
                status = if engine.contains(word) {
                    format!("Recorded a use of '{}'.", word)
                } else {
                    format!("'{}' cannot be stored (ASCII letters only).", word)
                };
                // Refresh the visible list so the bump shows up immediately.
                if let Some((prefix, results)) = &mut last_query {
                    *results = engine.suggestions(prefix, SUGGESTION_ROWS);
                }
            }
            prefix => {
                let results = engine.suggestions(prefix, SUGGESTION_ROWS);
                status = format!(
                    "{} stored words start with '{}'.",
                    engine.prefix_count(prefix),
                    prefix
                );
                last_query = Some((prefix.to_string(), results));
            }
        }
    }

    Ok(())
}

fn print_ui(
    engine: &SuggestEngine,
    status: &str,
    last_query: &Option<(String, Vec<Suggestion>)>,
) -> io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    println!("{}", "Smart Suggest Shell".bold());
    println!("---------------------------------------------------------------");
    println!("Dictionary holds {} words.", engine.word_count());
    println!("Type a prefix for the top {} suggestions.", SUGGESTION_ROWS);
    println!("'+word' records a usage event. 'exit' to quit.\n");

    println!("{}", status);

    if let Some((prefix, results)) = last_query {
        let marker = if engine.contains(prefix) {
            " (a word itself)"
        } else {
            ""
        };
        println!("\nSuggestions for '{}'{}", prefix, marker);
        if results.is_empty() {
            println!("  none");
        } else {
            for (i, suggestion) in results.iter().enumerate() {
                println!(
                    "  {}: {} {}",
                    i + 1,
                    suggestion.word.as_str().bold(),
                    format!("(freq={})", suggestion.frequency).dim()
                );
            }
        }
    }

    print!("\n> ");
    out.flush()
}
