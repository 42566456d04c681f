//! Reconciliation with the remote feed
//!
//! One sync cycle fetches the remote list and appends every record missing
//! from the local collection. Cycles are independent and the merge is
//! idempotent per record, so overlapping or repeated cycles converge to the
//! same collection.

use crate::data::collection::QuoteCollection;
use crate::error::Result;
use crate::remote::QuoteSource;

/// What a sync cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Records the remote returned
    pub fetched: usize,
    /// Records appended locally
    pub added: usize,
}

/// Run one sync cycle against the source
///
/// Local entries are never removed or overwritten; "remote wins" applies
/// only to additions. Fetch errors propagate with the collection untouched;
/// the caller logs them and lets the next cycle retry.
pub fn sync_once(
    source: &dyn QuoteSource,
    collection: &mut QuoteCollection,
) -> Result<SyncOutcome> {
    let remote = source.fetch_quotes()?;
    let fetched = remote.len();
    let added = collection.merge(remote);

    tracing::debug!(source = source.name(), fetched, added, "sync cycle complete");

    Ok(SyncOutcome { fetched, added })
}
