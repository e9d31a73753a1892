//! # ungdoc
//!
//! Google Docs to Markdown conversion library for Rust.
//!
//! This library takes a document as returned by the Docs API
//! `documents.get` call and converts every tab of it to Markdown, keeping
//! headings, ordered and bulleted lists, tables, links and inline styling.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ungdoc::{parse_file, render};
//!
//! fn main() -> ungdoc::Result<()> {
//!     // Load a document fetched with `includeTabsContent=true`
//!     let doc = parse_file("document.json")?;
//!
//!     // Convert every tab to Markdown
//!     let options = render::RenderOptions::default();
//!     for tab in render::to_markdown(&doc, &options) {
//!         println!("## {}\n\n{}", tab.tab_title, tab.tab_markdown);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Multi-tab documents**: nested tabs are flattened parent-first
//! - **Structure preservation**: headings, lists, tables, section breaks
//! - **Inline styling**: bold, italic, strikethrough and links
//! - **Parallel processing**: uses Rayon to render tabs concurrently
//! - **Output envelopes**: JSON and compact text

pub mod detect;
pub mod error;
pub mod model;
pub mod render;

pub use detect::{detect_layout, is_docs_json, DocsLayout};
pub use error::{Error, Result};
pub use model::{
    Body, Bullet, Document, DocumentTab, GlyphType, List, ListCatalog, NamedStyleType, Paragraph,
    StructuralElement, Tab, Table, TableCell, TableRow, TextRun, TextStyle,
};
pub use render::{
    ContentResponse, ExtractionStats, JsonFormat, RenderOptions, RenderResult, TabFragment,
};

use std::io::Read;
use std::path::Path;

/// Parse a Docs API document JSON file.
///
/// # Arguments
///
/// * `path` - Path to the JSON file
///
/// # Example
///
/// ```no_run
/// use ungdoc::parse_file;
///
/// let doc = parse_file("document.json").unwrap();
/// println!("Tabs: {}", doc.tab_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let data = std::fs::read(path.as_ref())?;
    log::debug!("Read {} bytes from {}", data.len(), path.as_ref().display());
    parse_bytes(&data)
}

/// Parse a Docs API document from JSON bytes.
///
/// The input must be a JSON object carrying `documentId`, `tabs` or `body`.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let value: serde_json::Value = serde_json::from_slice(data)?;
    parse_value(value)
}

/// Parse a Docs API document from a JSON string.
pub fn parse_str(json: &str) -> Result<Document> {
    parse_bytes(json.as_bytes())
}

/// Parse a Docs API document from a reader.
///
/// # Example
///
/// ```no_run
/// use ungdoc::parse_reader;
/// use std::io::stdin;
///
/// let doc = parse_reader(stdin().lock()).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    parse_value(value)
}

fn parse_value(value: serde_json::Value) -> Result<Document> {
    let layout = detect_layout(&value)?;
    let doc: Document = serde_json::from_value(value)?;
    log::debug!(
        "Parsed {} document {:?} with {} tab(s)",
        layout,
        doc.document_id,
        doc.tab_count()
    );
    Ok(doc)
}

/// Convert a document file to one Markdown fragment per tab.
///
/// # Example
///
/// ```no_run
/// use ungdoc::to_markdown;
///
/// for tab in to_markdown("document.json").unwrap() {
///     std::fs::write(format!("{}.md", tab.tab_title), tab.tab_markdown).unwrap();
/// }
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<Vec<TabFragment>> {
    let doc = parse_file(path)?;
    Ok(render::to_markdown(&doc, &RenderOptions::default()))
}

/// Convert a document file to the JSON envelope.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    let response = render::to_response(&doc, &RenderOptions::default());
    render::to_json(&response, format)
}

/// Find a converted tab by ID or title.
pub fn find_tab<'a>(tabs: &'a [TabFragment], key: &str) -> Result<&'a TabFragment> {
    tabs.iter()
        .find(|tab| tab.matches(key))
        .ok_or_else(|| Error::TabNotFound(key.to_string()))
}

/// Builder for loading and converting Docs documents.
///
/// # Example
///
/// ```no_run
/// use ungdoc::Ungdoc;
///
/// let markdown = Ungdoc::new()
///     .with_heading_offset(1)
///     .without_child_tabs()
///     .parse("document.json")?
///     .to_markdown();
/// # Ok::<(), ungdoc::Error>(())
/// ```
pub struct Ungdoc {
    render_options: RenderOptions,
}

impl Ungdoc {
    /// Create a new Ungdoc builder.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// Shift every heading down by `offset` levels.
    pub fn with_heading_offset(mut self, offset: u8) -> Self {
        self.render_options = self.render_options.with_heading_offset(offset);
        self
    }

    /// Only convert top-level tabs.
    pub fn without_child_tabs(mut self) -> Self {
        self.render_options = self.render_options.with_child_tabs(false);
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.render_options = self.render_options.sequential();
        self
    }

    /// Parse a document file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UngdocResult> {
        Ok(self.wrap(parse_file(path)?))
    }

    /// Parse a document from JSON bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<UngdocResult> {
        Ok(self.wrap(parse_bytes(data)?))
    }

    /// Parse a document from a JSON string.
    pub fn parse_str(self, json: &str) -> Result<UngdocResult> {
        Ok(self.wrap(parse_str(json)?))
    }

    /// Wrap an already loaded document.
    pub fn document(self, document: Document) -> UngdocResult {
        self.wrap(document)
    }

    fn wrap(self, document: Document) -> UngdocResult {
        UngdocResult {
            document,
            render_options: self.render_options,
        }
    }
}

impl Default for Ungdoc {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded document with its render options.
pub struct UngdocResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl UngdocResult {
    /// Convert to one Markdown fragment per tab.
    pub fn to_markdown(&self) -> Vec<TabFragment> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert with statistics.
    pub fn to_markdown_with_stats(&self) -> RenderResult {
        render::to_markdown_with_stats(&self.document, &self.render_options)
    }

    /// Convert to the `{docId, docTitle, tabs}` envelope.
    pub fn to_response(&self) -> ContentResponse {
        render::to_response(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.to_response(), format)
    }

    /// Convert to compact text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.to_response())
    }

    /// Markdown of a single tab, by ID or title.
    pub fn tab_markdown(&self, key: &str) -> Result<String> {
        let tabs = self.to_markdown();
        find_tab(&tabs, key).map(|tab| tab.tab_markdown.clone())
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
