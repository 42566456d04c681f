//! Core quote data types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single quotation with its category
///
/// There is no separate identifier: two quotes are the same record exactly
/// when both text and category match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    /// Quotation text
    pub text: String,
    /// Category label (matched case-sensitively)
    pub category: String,
}

impl Quote {
    /// Create a new quote
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Whether both fields are non-empty after trimming
    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty() && !self.category.trim().is_empty()
    }
}

impl fmt::Display for Quote {
    /// The fixed presenter format: `"<text>" - [<category>]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - [{}]", self.text, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let quote = Quote::new("Be bold", "Courage");
        assert_eq!(quote.to_string(), "\"Be bold\" - [Courage]");
    }

    #[test]
    fn test_equality_is_exact_match() {
        let a = Quote::new("Be bold", "Courage");
        let b = Quote::new("Be bold", "Courage");
        let c = Quote::new("Be bold", "courage");

        assert_eq!(a, b);
        assert_ne!(a, c); // category comparison is case-sensitive
    }

    #[test]
    fn test_validity() {
        assert!(Quote::new("text", "cat").is_valid());
        assert!(!Quote::new("", "cat").is_valid());
        assert!(!Quote::new("text", "").is_valid());
        assert!(!Quote::new("   ", "cat").is_valid());
        assert!(!Quote::new("text", "  ").is_valid());
    }

    #[test]
    fn test_serde_roundtrip() {
        let quote = Quote::new("Stay curious", "Learning");
        let json = serde_json::to_string(&quote).unwrap();
        let back: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(quote, back);
    }
}
