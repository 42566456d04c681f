//! Quote selection and filtering
//!
//! Pure functions, independent of any UI binding.

use crate::data::types::Quote;
use rand::Rng;

/// Sentinel category that selects the entire collection
pub const ALL_CATEGORIES: &str = "all";

/// Quotes whose category matches exactly (case-sensitive)
///
/// The sentinel [`ALL_CATEGORIES`] returns the full input.
pub fn filter_by_category<'a>(quotes: &'a [Quote], category: &str) -> Vec<&'a Quote> {
    if category == ALL_CATEGORIES {
        quotes.iter().collect()
    } else {
        quotes.iter().filter(|q| q.category == category).collect()
    }
}

/// Uniformly random element of the pool, or `None` when it is empty
///
/// Uses the thread-local (non-cryptographic) RNG.
pub fn pick_random<T>(pool: &[T]) -> Option<&T> {
    pick_random_with(pool, &mut rand::thread_rng())
}

/// [`pick_random`] with a caller-supplied RNG, for deterministic tests
pub fn pick_random_with<'a, T, R: Rng>(pool: &'a [T], rng: &mut R) -> Option<&'a T> {
    if pool.is_empty() {
        return None;
    }
    pool.get(rng.gen_range(0..pool.len()))
}
