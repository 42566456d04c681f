//! Quote collection management
//!
//! In-memory ordered collection of quotes; the source of truth for a
//! session. Insertion order is preserved and duplicates are allowed; only
//! the merge path deduplicates, by exact (text, category) match.

use crate::data::storage;
use crate::data::types::Quote;
use crate::error::{QuoteError, Result};
use std::path::Path;

/// Collection data file name
pub const QUOTES_FILE: &str = "quotes.json";

/// Quotes seeded when no stored collection exists
fn default_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The best way to get started is to quit talking and begin doing.",
            "Motivation",
        ),
        Quote::new("Don’t let yesterday take up too much of today.", "Wisdom"),
    ]
}

/// Ordered collection of quotes
pub struct QuoteCollection {
    quotes: Vec<Quote>,
    /// Whether there are unsaved changes
    dirty: bool,
}

impl QuoteCollection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self {
            quotes: Vec::new(),
            dirty: false,
        }
    }

    fn seeded() -> Self {
        Self {
            quotes: default_quotes(),
            // The seed set has not been written yet; the next save does it.
            dirty: true,
        }
    }

    /// Load the collection from a specific path
    ///
    /// Absence or parse failure falls back to the default seed set; the
    /// failure is logged, never surfaced. A stored empty array loads as an
    /// empty collection, since only a missing or unreadable store seeds.
    pub fn load_from(path: &Path) -> Self {
        match storage::load_from::<Vec<Quote>>(path) {
            Ok(Some(quotes)) => Self {
                quotes,
                dirty: false,
            },
            Ok(None) => Self::seeded(),
            Err(e) => {
                tracing::warn!("failed to load quotes, seeding defaults: {e}");
                Self::seeded()
            }
        }
    }

    /// Save the collection to a specific path
    ///
    /// The stored form is a plain JSON array of quotes. Skipped when there
    /// are no unsaved changes.
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        storage::save_to(path, &self.quotes)?;
        self.dirty = false;
        Ok(())
    }

    /// Check if there are unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Add a new quote
    ///
    /// Both fields must be non-empty after trimming; nothing is appended
    /// otherwise.
    pub fn add(&mut self, quote: Quote) -> Result<()> {
        if !quote.is_valid() {
            return Err(QuoteError::InvalidQuote(
                "both quote text and category are required".to_string(),
            ));
        }
        self.quotes.push(quote);
        self.dirty = true;
        Ok(())
    }

    /// Append quotes without validation (the import path)
    ///
    /// Returns the number appended. Duplicates are kept.
    pub fn append_all(&mut self, quotes: Vec<Quote>) -> usize {
        let count = quotes.len();
        if count > 0 {
            self.quotes.extend(quotes);
            self.dirty = true;
        }
        count
    }

    /// Exact-match membership test (linear scan)
    pub fn contains(&self, quote: &Quote) -> bool {
        self.quotes.iter().any(|q| q == quote)
    }

    /// Merge remote quotes, appending those not already present
    ///
    /// Local entries are never removed or overwritten; re-merging an
    /// already-present record is a no-op. Returns the number appended.
    pub fn merge(&mut self, remote: Vec<Quote>) -> usize {
        let mut added = 0;
        for quote in remote {
            if !self.contains(&quote) {
                self.quotes.push(quote);
                added += 1;
            }
        }
        if added > 0 {
            self.dirty = true;
        }
        added
    }

    /// All quotes in insertion order
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Number of quotes
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Distinct categories, sorted
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<_> = self.quotes.iter().map(|q| q.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }
}

impl Default for QuoteCollection {
    fn default() -> Self {
        Self::new()
    }
}
