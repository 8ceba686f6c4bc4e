//! Entry point for the `folio` command-line host.
//!
//! Opens the persisted UI state from a JSON file, applies one interaction,
//! and prints the result. Cues are logged rather than sounded.

mod commands;
mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_logging::FolioSubscriberBuilder;
use folio_state::{Capabilities, RootAttributeSink, Shell, TokioScheduler, TracingSynth};
use folio_storage::{BestEffortStore, JsonFileStore};
use tracing::info;

use crate::config::HostConfig;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Inspect and change the persisted UI state of the folio site")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// State file to use instead of the configured one
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    /// Verbose logging (shows every cue)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current state
    Show,
    /// Switch between light and dark
    ToggleTheme,
    /// Collapse or expand the navigation rail
    ToggleCollapse,
    /// Set the navigation rail's collapse flag
    SetCollapsed {
        #[arg(action = clap::ArgAction::Set)]
        collapsed: bool,
    },
    /// Turn audio cues on or off
    ToggleSound,
    /// Set the cue volume (clamped to 0..=1)
    SetVolume {
        #[arg(allow_negative_numbers = true)]
        volume: f32,
    },
    /// Feed visibility batches such as `about:1,projects:0.6` through the
    /// scroll-spy and show the highlighted link
    Spy {
        #[arg(required = true)]
        batches: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => HostConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => HostConfig::default(),
    };
    if let Some(store) = args.store {
        config.store_path = store;
    }
    if args.verbose {
        config.logging.default_level = "debug".to_string();
    }

    let _log_guard = FolioSubscriberBuilder::new()
        .with_config(config.logging.clone())
        .init();

    let backend = JsonFileStore::open(&config.store_path)
        .with_context(|| format!("opening state file {}", config.store_path.display()))?;
    let sink = RootAttributeSink::new();
    let shell = Shell::open(
        config.state.clone(),
        Capabilities {
            store: Arc::new(BestEffortStore::new(backend)),
            sink: Arc::new(sink.clone()),
            synth: Arc::new(TracingSynth),
            scheduler: Arc::new(TokioScheduler::new(tokio::runtime::Handle::current())),
        },
    );
    info!(store = %config.store_path.display(), "Opened folio state");

    match args.command {
        Command::Show => {}
        Command::ToggleTheme => shell.on_theme_toggle(),
        Command::ToggleCollapse => shell.on_collapse_toggle(),
        Command::SetCollapsed { collapsed } => shell.layout().set_collapsed(collapsed),
        Command::ToggleSound => shell.on_sound_toggle(),
        Command::SetVolume { volume } => shell.feedback().set_volume(volume),
        Command::Spy { batches } => {
            print!("{}", commands::run_spy(&shell, &batches)?);
            return Ok(());
        }
    }

    // Let deferred cue tones fire before exiting.
    tokio::time::sleep(config.state.toggle_delay() * 3).await;

    print!("{}", commands::render_state(&shell, &sink));
    print!("{}", commands::render_nav(&shell, None));
    Ok(())
}
