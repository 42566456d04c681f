//! Shared application state and commands
//!
//! `AppCommand` is the command type sent by the TUI and by worker threads;
//! `AppSnapshot` is the state the TUI renders each tick.

use std::path::PathBuf;

use quoth::data::Quote;
use quoth::select::ALL_CATEGORIES;

/// Commands processed by the controller
pub enum AppCommand {
    /// Show a new random quote from the current filter
    ShowRandom,
    /// Select a category filter, persist it, and re-pick
    SetFilter(String),
    /// Step the filter through the category index
    CycleFilter { backward: bool },
    /// Add a quote as typed in the form
    AddQuote { text: String, category: String },
    /// Import quotes from a JSON file
    Import(PathBuf),
    /// Export the collection to a JSON file
    Export(PathBuf),
    /// Run a sync cycle now
    SyncNow,
    /// Shut the controller down
    Shutdown,

    // Internal: a sync fetch finished on a worker thread (not sent by the TUI)
    InternalSyncFetched(Result<Vec<Quote>, String>),
}

/// What the quote area is showing
#[derive(Clone, Debug, Default, PartialEq)]
pub enum QuoteDisplay {
    /// Nothing picked yet this session
    #[default]
    Idle,
    /// A quote on display
    Quote(Quote),
    /// The current filter matches nothing
    EmptyCategory,
}

/// A transient notification (expiry is tracked by the controller)
#[derive(Clone, Debug)]
pub struct Banner {
    pub message: String,
    /// Error banners render in the alert style
    pub is_error: bool,
}

/// Snapshot of app state shared between the controller and the TUI
#[derive(Clone, Debug)]
pub struct AppSnapshot {
    /// Quote area contents
    pub display: QuoteDisplay,
    /// Transient banner, if any
    pub banner: Option<Banner>,
    /// Category filter currently applied
    pub filter: String,
    /// Distinct categories, sorted (the "all" entry is implicit)
    pub categories: Vec<String>,
    /// Total quotes in the collection
    pub quote_count: usize,
}

impl Default for AppSnapshot {
    fn default() -> Self {
        Self {
            display: QuoteDisplay::Idle,
            banner: None,
            filter: ALL_CATEGORIES.to_string(),
            categories: Vec::new(),
            quote_count: 0,
        }
    }
}
