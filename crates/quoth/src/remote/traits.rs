//! Remote quote source trait

use crate::data::types::Quote;
use crate::error::Result;

/// A remote source of quotes
///
/// One implementation talks to the real feed; tests substitute mocks.
pub trait QuoteSource: Send + Sync {
    /// Machine-readable identifier for the source
    fn name(&self) -> &'static str;

    /// Fetch the full remote quote list
    fn fetch_quotes(&self) -> Result<Vec<Quote>>;

    /// Post a single quote to the remote endpoint
    ///
    /// The response is ignored beyond logging; callers treat this as
    /// fire-and-forget.
    fn publish_quote(&self, quote: &Quote) -> Result<()>;
}
