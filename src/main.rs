// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tokio_util::sync::CancellationToken;

use sequence_pacer::config::consts::DEFAULT_NUMBERS;
use sequence_pacer::config::{load_config, Config};
use sequence_pacer::directory::table::render;
use sequence_pacer::directory::{
    SortColumn, SortDirection, StatusFilter, UserDirectoryClient, UserTable,
};
use sequence_pacer::engine::{ProcessOptions, Sequence, SequenceProcessor};
use sequence_pacer::traits::Processor;
use sequence_pacer::observability::init_tracing;
use sequence_pacer::preferences::PreferenceStore;

#[derive(Parser)]
#[command(name = "sequence-pacer")]
#[command(about = "Paced, cancellable number processing plus a small user directory viewer")]
struct Cli {
    /// YAML config file
    #[arg(short, long, global = true, env = "SEQUENCE_PACER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a JSON array of numbers with a delay between items
    Run {
        /// JSON array of numbers
        #[arg(default_value = DEFAULT_NUMBERS)]
        numbers: String,
        /// Wait between items in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Cancel the run this many milliseconds after it starts
        #[arg(long)]
        cancel_after_ms: Option<u64>,
        /// Don't print progress lines
        #[arg(long, default_value_t = false)]
        no_progress: bool,
    },
    /// Fetch the user list and print it as a table
    Users {
        /// Override the directory endpoint
        #[arg(long)]
        endpoint: Option<String>,
        /// Sort column: name, balance, email, registerAt, active
        #[arg(long)]
        sort: Option<SortColumn>,
        /// Sort descending
        #[arg(long, default_value_t = false)]
        desc: bool,
        /// Status filter: all, active, inactive
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        /// Show registration time as well as date
        #[arg(long, default_value_t = false)]
        full_dates: bool,
    },
    /// Show or change the persisted dark mode preference
    DarkMode {
        #[arg(value_enum)]
        action: Option<DarkModeAction>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DarkModeAction {
    On,
    Off,
    Toggle,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("info");
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Run {
            numbers,
            delay_ms,
            cancel_after_ms,
            no_progress,
        } => {
            run_sequence(&config, &numbers, delay_ms, cancel_after_ms, no_progress).await
        }
        Commands::Users {
            endpoint,
            sort,
            desc,
            status,
            full_dates,
        } => {
            let direction = if desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            show_users(&config, endpoint, sort.map(|c| (c, direction)), status, full_dates).await
        }
        Commands::DarkMode { action } => dark_mode(&config, action),
    }
}

async fn run_sequence(
    config: &Config,
    numbers: &str,
    delay_ms: Option<u64>,
    cancel_after_ms: Option<u64>,
    no_progress: bool,
) -> Result<()> {
    let sequence = Sequence::parse(numbers)?;

    let token = CancellationToken::new();
    let mut options = ProcessOptions::from_config(&config.processing).with_cancellation(token.clone());
    if let Some(ms) = delay_ms {
        options = options.with_delay(Duration::from_millis(ms));
    }
    if !no_progress {
        options = options.with_progress(|percent: u8| println!("Progress: {}%", percent));
    }

    let cancel_after = cancel_after_ms
        .map(Duration::from_millis)
        .or_else(|| config.processing.cancel_after());
    let canceller = cancel_after.map(|after| {
        let token = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            token.cancel();
        })
    });

    let result = SequenceProcessor::new().process(&sequence, &options).await;

    if let Some(handle) = canceller {
        handle.abort();
    }

    let outcome = result?;
    if outcome.is_completed() {
        println!("Done: {} items processed", outcome.processed());
    } else {
        println!(
            "Stopped early: {} of {} items processed",
            outcome.processed(),
            sequence.len()
        );
    }
    Ok(())
}

async fn show_users(
    config: &Config,
    endpoint: Option<String>,
    sort: Option<(SortColumn, SortDirection)>,
    status: StatusFilter,
    full_dates: bool,
) -> Result<()> {
    let client = match endpoint {
        Some(endpoint) => UserDirectoryClient::new(endpoint, config.directory.timeout())?,
        None => UserDirectoryClient::from_config(&config.directory)?,
    };

    println!("Loading users from {} ...", client.endpoint());

    // A failed fetch is reported once and leaves the table empty.
    let table = match client.fetch_users().await {
        Ok(users) => UserTable::new(users),
        Err(e) => {
            eprintln!("Error fetching data: {}", e);
            UserTable::default()
        }
    };

    let rows = table.view(sort, status);
    print!("{}", render(&rows, full_dates));
    println!("Showing {} of {} users", rows.len(), table.len());
    Ok(())
}

fn dark_mode(config: &Config, action: Option<DarkModeAction>) -> Result<()> {
    let store = PreferenceStore::new(config.preferences.path());

    let enabled = match action {
        None => store.dark_mode()?,
        Some(DarkModeAction::On) => {
            store.set_dark_mode(true)?;
            true
        }
        Some(DarkModeAction::Off) => {
            store.set_dark_mode(false)?;
            false
        }
        Some(DarkModeAction::Toggle) => store.toggle_dark_mode()?,
    };

    println!("Dark mode: {}", if enabled { "on" } else { "off" });
    Ok(())
}
