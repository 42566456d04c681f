//! Session-scoped state
//!
//! Holds state that lives only as long as the current session. Nothing here
//! touches disk: the store is dropped with the process, which is the whole
//! point of session scoping.

use crate::data::types::Quote;

/// State tied to the current session
#[derive(Debug, Default)]
pub struct SessionStore {
    last_quote: Option<Quote>,
}

impl SessionStore {
    /// Create an empty session store
    pub fn new() -> Self {
        Self::default()
    }

    /// Last quote shown this session, if any
    pub fn last_quote(&self) -> Option<&Quote> {
        self.last_quote.as_ref()
    }

    /// Record the most recently shown quote
    pub fn set_last_quote(&mut self, quote: Quote) {
        self.last_quote = Some(quote);
    }

    /// Forget the stored quote
    pub fn clear(&mut self) {
        self.last_quote = None;
    }
}
