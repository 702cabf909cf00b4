//! Sentinel-delimited region rewriting.
//!
//! Everything from [`START_SENTINEL`] through the first following
//! [`END_SENTINEL`] belongs to the weather card; the rest of the document is
//! never touched.

use std::{fs, path::Path};

use tracing::{info, warn};

use crate::error::DocumentError;

pub const START_SENTINEL: &str = "<!-- WEATHER-START -->";
pub const END_SENTINEL: &str = "<!-- WEATHER-END -->";

/// Replace the first sentinel-delimited region of `document` with `block`.
///
/// Returns `None` when the document has no complete sentinel pair. Only the
/// first region is rewritten; later pairs are left as they are.
pub fn splice(document: &str, block: &str) -> Option<String> {
    let start = document.find(START_SENTINEL)?;
    let end_rel = document[start + START_SENTINEL.len()..].find(END_SENTINEL)?;
    let end = start + START_SENTINEL.len() + end_rel + END_SENTINEL.len();

    let mut out = String::with_capacity(document.len() + block.len());
    out.push_str(&document[..start]);
    out.push_str(START_SENTINEL);
    out.push('\n');
    out.push_str(block);
    out.push('\n');
    out.push_str(END_SENTINEL);
    out.push_str(&document[end..]);

    Some(out)
}

/// Read a document as UTF-8 with `\r\n` and lone `\r` folded to `\n`.
pub fn read_document(path: &Path) -> Result<String, DocumentError> {
    let raw = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(normalize_newlines(&raw))
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Rewrite the weather region of the file at `path`.
///
/// Writes only when the result differs from the current (newline-normalised)
/// content. Returns whether the file was written.
pub fn update(path: &Path, block: &str) -> Result<bool, DocumentError> {
    let current = read_document(path)?;

    let Some(next) = plan(path, &current, block) else {
        return Ok(false);
    };

    fs::write(path, next).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Weather card written");

    Ok(true)
}

/// Like [`update`], but never writes. Returns whether a write would happen.
pub fn preview(path: &Path, block: &str) -> Result<bool, DocumentError> {
    let current = read_document(path)?;
    Ok(plan(path, &current, block).is_some())
}

/// The new document text, if it differs from `current`.
fn plan(path: &Path, current: &str, block: &str) -> Option<String> {
    let Some(next) = splice(current, block) else {
        warn!(
            path = %path.display(),
            start = START_SENTINEL,
            end = END_SENTINEL,
            "Sentinel pair not found; leaving document untouched"
        );
        return None;
    };

    (next != current).then_some(next)
}
