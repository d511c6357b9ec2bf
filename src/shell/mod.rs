//! unitval interactive shell.
//!
//! One conversion per line: `<value> <interpretation>` prints the canonical
//! number and its round-trip rendering. `format <number> <interpretation>`
//! goes the other way.

use crate::config::Config;
use crate::convert::Registry;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;

/// Runs the interactive shell.
///
/// # Errors
/// Returns error message if readline cannot be initialized.
pub fn run(config: &Config, registry: &Registry) -> Result<(), String> {
    tracing::debug!("initializing shell");
    let mut rl = DefaultEditor::new().map_err(|e| format!("Error creating editor: {e}"))?;

    let history_path = get_history_path();
    if let Some(path) = &history_path
        && rl.load_history(path).is_ok()
    {
        tracing::debug!("history loaded");
    }

    println!("unitval shell - type 'help' for commands, 'quit' to exit");

    loop {
        match rl.readline(&config.shell.prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                if !handle_line(line, registry) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                break;
            }
            Err(e) => {
                return Err(format!("Readline error: {e}"));
            }
        }
    }

    if let Some(path) = &history_path {
        let _ = rl.save_history(path);
    }

    Ok(())
}

/// Returns false when the shell should exit.
fn handle_line(line: &str, registry: &Registry) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        ["quit" | "exit"] => return false,
        ["help"] => print_help(),
        ["list"] => {
            for converter in registry.converters() {
                println!(
                    "{:<14} e.g. {}",
                    converter.interpretation().as_str(),
                    converter.examples()
                );
            }
        }
        ["format", number, interpretation] => match number.parse::<f64>() {
            Ok(value) => match registry.format(value, interpretation) {
                Some(text) => println!("{text}"),
                None => println!(
                    "unknown interpretation '{interpretation}' (try: {})",
                    registry.interpretation_names()
                ),
            },
            Err(_) => println!("not a number: '{number}'"),
        },
        [value, interpretation] => {
            match registry.convert_or_error(*value, interpretation) {
                Ok(canonical) => {
                    let formatted = registry
                        .format(canonical, interpretation)
                        .unwrap_or_default();
                    println!("{canonical} ({formatted})");
                }
                Err(e) => println!("{e}"),
            }
        }
        _ => {
            println!("Unknown command. Type 'help' for usage.");
        }
    }

    true
}

fn print_help() {
    println!(
        "Commands:
  <value> <interpretation>           Convert to canonical form (e.g., 1.5KiB storage-size)
  format <number> <interpretation>   Render a canonical number (e.g., format 1024 storage-size)
  list                               List interpretations
  help                               Show this help
  quit / exit                        Leave the shell"
    );
}

fn get_history_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.cache_dir().join("unitval_history"))
}
