//! JSON quote feed
//!
//! `QuoteSource` implementation for a server that exposes its quote list as
//! a plain JSON array and accepts posted quotes.

use crate::config::sync::{FEED_PATH, PUBLISH_PATH};
use crate::data::types::Quote;
use crate::error::Result;
use crate::network::HttpClient;

use super::traits::QuoteSource;

use serde::Deserialize;

/// Wire shape of a remote quote record
///
/// Fields are defaulted so partial records still parse; conversion drops
/// records missing either field.
#[derive(Debug, Deserialize)]
struct RemoteQuote {
    #[serde(default)]
    text: String,
    #[serde(default)]
    category: String,
}

impl RemoteQuote {
    fn into_quote(self) -> Option<Quote> {
        let quote = Quote::new(self.text, self.category);
        if quote.is_valid() {
            Some(quote)
        } else {
            None
        }
    }
}

/// Remote feed speaking plain JSON over HTTP
pub struct JsonFeed {
    client: HttpClient,
    base_url: String,
}

impl JsonFeed {
    /// Create a feed against the given server base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build a full URL from an endpoint path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl QuoteSource for JsonFeed {
    fn name(&self) -> &'static str {
        "json-feed"
    }

    fn fetch_quotes(&self) -> Result<Vec<Quote>> {
        let records: Vec<RemoteQuote> = self.client.get_json(&self.url(FEED_PATH))?;

        let total = records.len();
        let quotes: Vec<Quote> = records
            .into_iter()
            .filter_map(RemoteQuote::into_quote)
            .collect();

        if quotes.len() < total {
            tracing::debug!(
                dropped = total - quotes.len(),
                "skipped malformed remote records"
            );
        }

        Ok(quotes)
    }

    fn publish_quote(&self, quote: &Quote) -> Result<()> {
        self.client.post_json(&self.url(PUBLISH_PATH), quote)
    }
}
