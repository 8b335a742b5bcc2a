//! FitLog - Command-line Fitness Journal
//!
//! Main entry point: an interactive read loop over stdin.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use fitlog::commands::{parse_command, Journal};
use fitlog::storage::config::load_config;
use fitlog::storage::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const PROMPT: &str = "> ";
const LINE: &str = "____________________________________________________________";
const PREFIX_MESSAGE: &str = " ";
const PREFIX_EXCEPTION: &str = "OOPS!!! ";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting FitLog v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().context("failed to load configuration")?;
    let mut database = Database::open(&config.database_path())
        .with_context(|| format!("failed to open {}", config.database_path().display()))?;

    let mut journal = Journal::new(database.load_activities()?, database.load_goals()?);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    show(&mut stdout, &["Hello! I'm FitLog!".to_string(), "What can I do for you?".to_string()])?;

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        if input.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&config.tags, &config.journal.detail_flag, &input) {
            Ok(command) => command,
            Err(e) => {
                show(&mut stdout, &[format!("{}{}", PREFIX_EXCEPTION, e)])?;
                continue;
            }
        };

        let is_exit = command.is_exit();
        let is_mutating = command.is_mutating();

        match journal.execute(&config.tags, command) {
            Ok(output) => {
                show(&mut stdout, &output.lines)?;
                if is_mutating {
                    persist(&mut database, &journal);
                }
            }
            Err(e) => show(&mut stdout, &[format!("{}{}", PREFIX_EXCEPTION, e)])?,
        }

        if is_exit {
            break;
        }
    }

    Ok(())
}

/// Write the journal to disk, logging failures instead of aborting the session.
fn persist(database: &mut Database, journal: &Journal) {
    if let Err(e) = database.save_activities(journal.activities()) {
        tracing::warn!("Failed to save activities: {}", e);
    }
    if let Err(e) = database.save_goals(journal.goals()) {
        tracing::warn!("Failed to save activity goals: {}", e);
    }
}

fn show(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    writeln!(out, "{}", LINE)?;
    for line in lines {
        for part in line.lines() {
            writeln!(out, "{}{}", PREFIX_MESSAGE, part)?;
        }
    }
    writeln!(out, "{}", LINE)
}
