//! Detection of Docs API document JSON.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// How a document stores its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocsLayout {
    /// Content lives in a tab tree
    Tabbed,
    /// Content lives in a single top-level body
    Legacy,
}

impl std::fmt::Display for DocsLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocsLayout::Tabbed => write!(f, "tabbed"),
            DocsLayout::Legacy => write!(f, "legacy"),
        }
    }
}

/// Detect the layout of a parsed JSON value.
///
/// # Returns
/// * `Ok(DocsLayout)` if the value is a document object
/// * `Err(Error::InvalidDocument)` otherwise
pub fn detect_layout(value: &Value) -> Result<DocsLayout> {
    let object = value
        .as_object()
        .ok_or_else(|| Error::InvalidDocument("top-level JSON value is not an object".into()))?;

    let has_tabs = object
        .get("tabs")
        .and_then(Value::as_array)
        .is_some_and(|tabs| !tabs.is_empty());
    if has_tabs {
        return Ok(DocsLayout::Tabbed);
    }

    if object.get("body").is_some_and(Value::is_object) {
        return Ok(DocsLayout::Legacy);
    }

    // A document without content still carries its ID.
    if object.get("documentId").is_some_and(Value::is_string) {
        return Ok(DocsLayout::Legacy);
    }

    Err(Error::InvalidDocument(
        "expected one of `documentId`, `tabs` or `body`".into(),
    ))
}

/// Detect the layout of raw JSON bytes.
pub fn detect_layout_from_bytes(data: &[u8]) -> Result<DocsLayout> {
    let value: Value = serde_json::from_slice(data)?;
    detect_layout(&value)
}

/// Detect the layout of a JSON file.
///
/// # Example
/// ```no_run
/// use ungdoc::detect::detect_layout_from_path;
///
/// let layout = detect_layout_from_path("document.json").unwrap();
/// println!("Layout: {}", layout);
/// ```
pub fn detect_layout_from_path<P: AsRef<Path>>(path: P) -> Result<DocsLayout> {
    let data = fs::read(path)?;
    detect_layout_from_bytes(&data)
}

/// Quick check whether bytes hold Docs document JSON.
pub fn is_docs_json(data: &[u8]) -> bool {
    detect_layout_from_bytes(data).is_ok()
}
