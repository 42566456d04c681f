//! Quoth CLI: terminal quotation keeper

mod app;
mod ui;

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use crossbeam_channel::bounded;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use tracing_subscriber::EnvFilter;

use quoth::data::collection::{QuoteCollection, QUOTES_FILE};
use quoth::data::settings::{Settings, SETTINGS_FILE};
use quoth::data::{storage, Quote, SessionStore};
use quoth::remote::{JsonFeed, QuoteSource};
use quoth::{exchange, select, sync};

use app::controller::AppController;
use app::state::{AppCommand, AppSnapshot};
use ui::{InputMode, InputState};

/// Quoth, a terminal quotation keeper
#[derive(Parser)]
#[command(name = "quoth", about = "Terminal quotation keeper", version)]
struct Cli {
    /// Sync server base URL (overrides the saved setting)
    #[arg(long)]
    server: Option<String>,

    /// Data directory (defaults to the user config directory)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a random quote and exit
    Show {
        /// Restrict to a category ("all" selects everything)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Add a quote to the collection
    Add {
        /// Quote text
        text: String,
        /// Category label
        #[arg(short, long)]
        category: String,
    },
    /// Import quotes from a JSON file
    Import {
        /// File containing a JSON array of quotes
        file: PathBuf,
    },
    /// Export the collection to a JSON file
    Export {
        /// Output path
        #[arg(default_value = exchange::EXPORT_FILE)]
        file: PathBuf,
    },
    /// Fetch the remote feed and merge new quotes
    Sync,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Silent unless RUST_LOG is set, so log lines never land in the TUI.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => storage::config_dir()?,
    };

    let mut settings = Settings::load_from(&data_dir.join(SETTINGS_FILE));
    if let Some(server) = &cli.server {
        settings.sync_server = server.clone();
    }

    match cli.command {
        Some(command) => run_command(command, &data_dir, &settings),
        None => run_tui(data_dir, settings),
    }
}

fn run_command(
    command: Command,
    data_dir: &Path,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let quotes_path = data_dir.join(QUOTES_FILE);

    match command {
        Command::Show { category } => {
            let collection = QuoteCollection::load_from(&quotes_path);
            let filter = category.as_deref().unwrap_or(&settings.selected_category);
            let pool = select::filter_by_category(collection.quotes(), filter);
            match select::pick_random(&pool) {
                Some(quote) => println!("{quote}"),
                None => println!("{}", ui::EMPTY_FILTER_TEXT),
            }
        }
        Command::Add { text, category } => {
            let mut collection = QuoteCollection::load_from(&quotes_path);
            let quote = Quote::new(text.trim(), category.trim());
            collection.add(quote.clone())?;
            collection.save_to(&quotes_path)?;

            // Post to the server as well; failures are only logged.
            match JsonFeed::new(&settings.sync_server) {
                Ok(feed) => {
                    if let Err(e) = feed.publish_quote(&quote) {
                        tracing::warn!("failed to post quote: {e}");
                    }
                }
                Err(e) => tracing::warn!("could not build feed client: {e}"),
            }

            println!("Added: {quote}");
        }
        Command::Import { file } => {
            let mut collection = QuoteCollection::load_from(&quotes_path);
            let quotes = exchange::import_file(&file)?;
            let added = collection.append_all(quotes);
            collection.save_to(&quotes_path)?;
            println!("Imported {added} quotes from {}", file.display());
        }
        Command::Export { file } => {
            let collection = QuoteCollection::load_from(&quotes_path);
            exchange::export_to_file(&file, collection.quotes())?;
            println!("Exported {} quotes to {}", collection.len(), file.display());
        }
        Command::Sync => {
            let mut collection = QuoteCollection::load_from(&quotes_path);
            let feed = JsonFeed::new(&settings.sync_server)?;
            let outcome = sync::sync_once(&feed, &mut collection)?;
            collection.save_to(&quotes_path)?;
            println!("Fetched {} quotes, added {}", outcome.fetched, outcome.added);
        }
    }

    Ok(())
}

fn run_tui(data_dir: PathBuf, settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let (cmd_tx, cmd_rx) = bounded(64);
    let shared_state = Arc::new(Mutex::new(AppSnapshot::default()));

    let source: Arc<dyn QuoteSource> = Arc::new(JsonFeed::new(&settings.sync_server)?);

    // Spawn controller on its own thread
    let ctrl_state = shared_state.clone();
    let ctrl_tx = cmd_tx.clone();
    std::thread::Builder::new()
        .name("controller".into())
        .spawn(move || {
            let mut ctrl = AppController::new(
                cmd_rx,
                ctrl_tx,
                ctrl_state,
                source,
                data_dir,
                settings,
                SessionStore::new(),
            );
            ctrl.run();
        })
        .expect("failed to spawn controller thread");

    // Enter TUI
    terminal::enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();
    let mut input = InputState::default();
    let mut running = true;

    while running {
        {
            let snapshot = shared_state
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .clone();
            terminal.draw(|f| ui::draw(f, &snapshot, &input))?;
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match input.mode {
                        InputMode::Normal => match key.code {
                            KeyCode::Char('q') | KeyCode::Esc => running = false,
                            KeyCode::Char('n') => {
                                let _ = cmd_tx.send(AppCommand::ShowRandom);
                            }
                            KeyCode::Char('f') | KeyCode::Right => {
                                let _ = cmd_tx.send(AppCommand::CycleFilter { backward: false });
                            }
                            KeyCode::Char('F') | KeyCode::Left => {
                                let _ = cmd_tx.send(AppCommand::CycleFilter { backward: true });
                            }
                            KeyCode::Char('a') => input.mode = InputMode::EditText,
                            KeyCode::Char('i') => {
                                let _ = cmd_tx
                                    .send(AppCommand::Import(PathBuf::from(exchange::EXPORT_FILE)));
                            }
                            KeyCode::Char('e') => {
                                let _ = cmd_tx
                                    .send(AppCommand::Export(PathBuf::from(exchange::EXPORT_FILE)));
                            }
                            KeyCode::Char('s') => {
                                let _ = cmd_tx.send(AppCommand::SyncNow);
                            }
                            _ => {}
                        },
                        InputMode::EditText => match key.code {
                            KeyCode::Esc => input.reset(),
                            KeyCode::Enter => input.mode = InputMode::EditCategory,
                            KeyCode::Backspace => {
                                input.text.pop();
                            }
                            KeyCode::Char(c) => input.text.push(c),
                            _ => {}
                        },
                        InputMode::EditCategory => match key.code {
                            KeyCode::Esc => input.reset(),
                            KeyCode::Enter => {
                                let _ = cmd_tx.send(AppCommand::AddQuote {
                                    text: input.text.clone(),
                                    category: input.category.clone(),
                                });
                                input.reset();
                            }
                            KeyCode::Backspace => {
                                input.category.pop();
                            }
                            KeyCode::Char(c) => input.category.push(c),
                            _ => {}
                        },
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    // The UI is done; ask the controller to stop
    let _ = cmd_tx.send(AppCommand::Shutdown);

    // Restore terminal
    terminal::disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}
