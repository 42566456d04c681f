//! Import and export of quote collections
//!
//! Export writes the full collection as a pretty-printed JSON array; import
//! accepts only a JSON array of quote objects and leaves the caller's
//! collection untouched on any failure.

use crate::data::types::Quote;
use crate::error::{QuoteError, Result};
use std::fs;
use std::path::Path;

/// Default export file name
pub const EXPORT_FILE: &str = "quotes.json";

/// Serialize quotes as a pretty-printed JSON array
pub fn export_json(quotes: &[Quote]) -> Result<String> {
    serde_json::to_string_pretty(quotes)
        .map_err(|e| QuoteError::Storage(format!("failed to serialize quotes: {e}")))
}

/// Write the full collection to a file
pub fn export_to_file(path: &Path, quotes: &[Quote]) -> Result<()> {
    fs::write(path, export_json(quotes)?)?;
    Ok(())
}

/// Parse imported file contents into quotes
///
/// The value must be a JSON array of quote objects. Elements are taken
/// as-is; empty fields are not rejected here.
pub fn parse_import(contents: &str) -> Result<Vec<Quote>> {
    let value: serde_json::Value = serde_json::from_str(contents)
        .map_err(|e| QuoteError::Import(format!("not valid JSON: {e}")))?;

    if !value.is_array() {
        return Err(QuoteError::Import(
            "expected a JSON array of quotes".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| QuoteError::Import(format!("array elements are not quotes: {e}")))
}

/// Read and parse a quote file
pub fn import_file(path: &Path) -> Result<Vec<Quote>> {
    let contents = fs::read_to_string(path)?;
    parse_import(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path() -> std::path::PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("quoth_exchange_test_{}.json", id))
    }

    fn sample() -> Vec<Quote> {
        vec![
            Quote::new("Be bold", "Courage"),
            Quote::new("Stay curious", "Learning"),
        ]
    }

    #[test]
    fn test_export_import_roundtrip() {
        let quotes = sample();
        let json = export_json(&quotes).unwrap();
        let mut back = parse_import(&json).unwrap();

        // Same set, order-insensitive
        let mut original = quotes.clone();
        original.sort_by(|a, b| (&a.text, &a.category).cmp(&(&b.text, &b.category)));
        back.sort_by(|a, b| (&a.text, &a.category).cmp(&(&b.text, &b.category)));
        assert_eq!(original, back);
    }

    #[test]
    fn test_export_is_pretty_printed() {
        let json = export_json(&sample()).unwrap();
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_import_rejects_invalid_json() {
        assert!(parse_import("not json array").is_err());
    }

    #[test]
    fn test_import_rejects_non_array_json() {
        // Valid JSON values that are not arrays
        assert!(parse_import("\"not json array\"").is_err());
        assert!(parse_import(r#"{"text": "x", "category": "y"}"#).is_err());
        assert!(parse_import("42").is_err());
    }

    #[test]
    fn test_import_rejects_non_quote_elements() {
        assert!(parse_import(r#"[1, 2, 3]"#).is_err());
        assert!(parse_import(r#"[{"text": "missing category"}]"#).is_err());
    }

    #[test]
    fn test_import_accepts_empty_fields_as_is() {
        let quotes = parse_import(r#"[{"text": "", "category": ""}]"#).unwrap();
        assert_eq!(quotes, vec![Quote::new("", "")]);
    }

    #[test]
    fn test_import_accepts_empty_array() {
        assert!(parse_import("[]").unwrap().is_empty());
    }

    #[test]
    fn test_file_roundtrip() {
        let path = temp_path();
        let quotes = sample();

        export_to_file(&path, &quotes).unwrap();
        let back = import_file(&path).unwrap();
        assert_eq!(quotes, back);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_import_missing_file_is_io_error() {
        let result = import_file(&temp_path());
        assert!(matches!(result, Err(QuoteError::Io(_))));
    }
}
