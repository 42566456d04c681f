//! Storage layer for JSON persistence
//!
//! One file-backed store for every persisted data type.

use crate::config::app::NAME;
use crate::error::{QuoteError, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Get the application config directory path
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(NAME))
        .ok_or_else(|| {
            QuoteError::Storage(
                "could not determine config directory (HOME may not be set)".to_string(),
            )
        })
}

fn io_error(op: &str, path: &Path, e: &std::io::Error) -> QuoteError {
    let msg = match e.kind() {
        ErrorKind::PermissionDenied => format!("permission denied: cannot {op} {path:?}"),
        ErrorKind::NotFound => format!("cannot {op} {path:?}: parent path does not exist"),
        _ => format!("failed to {op} {path:?}: {e}"),
    };
    QuoteError::Storage(msg)
}

/// Load data from a JSON file at a specific path
///
/// Returns `None` if the file doesn't exist; an existing but empty file is
/// treated the same way. Returns an error if the file exists but can't be
/// read or parsed.
pub fn load_from<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(io_error("read", path, &e)),
    };

    if content.trim().is_empty() {
        return Ok(None);
    }

    let data = serde_json::from_str(&content)
        .map_err(|e| QuoteError::Storage(format!("failed to parse {path:?}: {e}")))?;

    Ok(Some(data))
}

/// Save data to a JSON file at a specific path, pretty-printed
///
/// Creates parent directories if they don't exist.
pub fn save_to<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error("create directory", parent, &e))?;
        }
    }

    let content = serde_json::to_string_pretty(data)
        .map_err(|e| QuoteError::Storage(format!("failed to serialize data: {e}")))?;

    fs::write(path, content).map_err(|e| io_error("write", path, &e))
}
