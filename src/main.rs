//! Picklist - selectable list in the terminal

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use picklist::app::App;
use picklist::config::AppConfig;
use picklist::constants;
use picklist::ui;
use picklist::watch::{self, WatchMessage};
use picklist::{ItemCollection, ListView};

/// Selectable list in the terminal
#[derive(Parser)]
#[command(name = "picklist")]
#[command(version)]
#[command(about = "Click a row to select it; the selection resets when the items file changes")]
struct Cli {
    /// Items file (.json array or .toml with [[items]]); defaults to placeholder items
    #[arg(short, long)]
    items: Option<PathBuf>,

    /// Title drawn on the list border
    #[arg(short, long)]
    title: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an items file and print how many items it holds
    Check {
        /// Items file to validate
        file: PathBuf,
    },
    /// Print the placeholder items as JSON
    DefaultItems,
    /// Print an example configuration file
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up logging to file
    let log_dir = dirs::home_dir()
        .map(|h| h.join(constants::DATA_SUBDIR))
        .unwrap_or_else(|| PathBuf::from("/tmp/picklist"));
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, constants::LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    tracing::info!("Picklist starting");

    let cli = Cli::parse();
    let config = AppConfig::load();

    match cli.command {
        Some(Commands::Check { file }) => check(&file),
        Some(Commands::DefaultItems) => {
            println!("{}", ItemCollection::placeholder().to_json());
            Ok(())
        }
        Some(Commands::Config) => {
            println!("# {}", picklist::config::config_file_path().display());
            print!("{}", AppConfig::example_toml());
            Ok(())
        }
        None => {
            let items_path = cli.items.or_else(|| config.items_file.clone());
            let title = cli.title.unwrap_or_else(|| config.title.clone());
            run_tui(items_path, title, &config).await
        }
    }
}

fn check(file: &Path) -> Result<()> {
    let items = ItemCollection::load(file)?;
    println!("{}: {} items", file.display(), items.len());
    Ok(())
}

async fn run_tui(items_path: Option<PathBuf>, title: String, config: &AppConfig) -> Result<()> {
    // Baseline for the watcher, taken before loading so no edit is missed
    let last_modified = match items_path.as_deref() {
        Some(path) => watch::modified(path).await,
        None => None,
    };

    // Validate before touching the terminal so errors print normally
    let items = items_path
        .as_deref()
        .map(ItemCollection::load)
        .transpose()
        .context("Failed to load initial items")?;

    let mut app = App::new(ListView::new(items).title(title), items_path.clone());

    // Watch the items file for replacements
    let (watch_tx, mut watch_rx) = mpsc::channel::<WatchMessage>(constants::WATCH_CHANNEL_SIZE);
    let watcher = items_path.map(|path| {
        watch::spawn_items_watcher(
            path,
            last_modified,
            Duration::from_millis(config.watch_interval_ms),
            watch_tx,
        )
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app, &mut watch_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Some(handle) = watcher {
        handle.abort();
    }

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        return Err(err);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watch_rx: &mut mpsc::Receiver<WatchMessage>,
) -> Result<()> {
    // Create async event stream for responsive input
    let mut event_stream = EventStream::new();

    loop {
        // Draw UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS);

        tokio::select! {
            biased;  // Replacements first so a reset lands before later clicks

            Some(msg) = watch_rx.recv() => {
                app.handle_watch_message(msg);
            }
            Some(event) = event_stream.next() => {
                match event? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key.code);
                    }
                    Event::Mouse(mouse) => {
                        let size = terminal.size()?;
                        app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
                    }
                    _ => {}
                }
            }
            _ = tokio::time::sleep(timeout) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
