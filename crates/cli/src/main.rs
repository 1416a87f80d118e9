//! Admissions CLI: single-command front end over the executor.
//!
//! ```text
//! admissions --as ada submit --file draft.json
//! admissions --as dean --admin decide ada accepted -m "Welcome"
//! admissions --as dean --admin list --status submitted --json
//! ```
//!
//! Logging goes to stderr and is controlled by `ADMISSIONS_LOG`
//! (an `EnvFilter` directive, default `warn`).

mod commands;
mod format;
mod parse;

use std::path::Path;
use std::process;
use std::sync::Arc;

use admissions_engine::{Config, Database};
use admissions_executor::Executor;
use admissions_security::{AccessMode, Principal};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_output, OutputMode};
use parse::matches_to_command;

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();
    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let db = match open_database(&matches) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let caller = matches.get_one::<String>("as").map(|subject| {
        if matches.get_flag("admin") {
            Principal::admin(subject.as_str())
        } else {
            Principal::student(subject.as_str())
        }
    });

    let cmd = match matches_to_command(&matches, caller.as_ref().map(|p| p.subject.as_str())) {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(2);
        }
    };

    let executor = Executor::new(Arc::new(db));
    match executor.execute_as(caller.as_ref(), cmd) {
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ADMISSIONS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_database(matches: &clap::ArgMatches) -> Result<Database, String> {
    let config_path = matches.get_one::<String>("config").map(Path::new);
    let config = Config::load(config_path).map_err(|e| format!("Failed to load config: {}", e))?;

    let mut builder = Database::builder().config(&config);
    if let Some(path) = matches.get_one::<String>("db") {
        builder = builder.path(path);
    }
    if matches.get_flag("read-only") {
        builder = builder.access_mode(AccessMode::ReadOnly);
    }
    builder
        .open()
        .map_err(|e| format!("Failed to open database: {}", e))
}
