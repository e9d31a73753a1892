//! Rendering output: per-tab fragments, the response envelope and statistics.

use serde::{Deserialize, Serialize};

/// Converted Markdown for one tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabFragment {
    /// Tab ID (empty for legacy single-body documents)
    pub tab_id: String,

    /// Tab title, or the document title when the tab has none
    pub tab_title: String,

    /// Tab content as Markdown
    pub tab_markdown: String,
}

impl TabFragment {
    /// Create a new fragment.
    pub fn new(
        tab_id: impl Into<String>,
        tab_title: impl Into<String>,
        tab_markdown: impl Into<String>,
    ) -> Self {
        Self {
            tab_id: tab_id.into(),
            tab_title: tab_title.into(),
            tab_markdown: tab_markdown.into(),
        }
    }

    /// Whether `key` names this tab by ID or title.
    pub fn matches(&self, key: &str) -> bool {
        (!self.tab_id.is_empty() && self.tab_id == key) || self.tab_title == key
    }
}

/// Converted content of a whole document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    /// Document ID
    pub doc_id: String,

    /// Document title
    pub doc_title: String,

    /// One fragment per tab, in tab-tree order
    pub tabs: Vec<TabFragment>,
}

impl ContentResponse {
    /// Create a new response.
    pub fn new(
        doc_id: impl Into<String>,
        doc_title: impl Into<String>,
        tabs: Vec<TabFragment>,
    ) -> Self {
        Self {
            doc_id: doc_id.into(),
            doc_title: doc_title.into(),
            tabs,
        }
    }
}

/// Result of rendering a document, including statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// Rendered tabs
    pub tabs: Vec<TabFragment>,

    /// Extraction statistics
    pub stats: ExtractionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(tabs: Vec<TabFragment>, stats: ExtractionStats) -> Self {
        Self { tabs, stats }
    }

    /// Total Markdown length in bytes across all tabs.
    pub fn content_len(&self) -> usize {
        self.tabs.iter().map(|t| t.tab_markdown.len()).sum()
    }
}

/// Statistics collected during conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of tabs rendered
    pub tab_count: u32,

    /// Number of body paragraphs written
    pub paragraph_count: u32,

    /// Number of headings written
    pub heading_count: u32,

    /// Number of list items written
    pub list_item_count: u32,

    /// Number of tables written
    pub table_count: u32,

    /// Number of section breaks written
    pub section_break_count: u32,

    /// Number of elements skipped as unsupported
    pub skipped_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment tab count.
    pub fn add_tab(&mut self) {
        self.tab_count += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment list item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Increment table count.
    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Increment section break count.
    pub fn add_section_break(&mut self) {
        self.section_break_count += 1;
    }

    /// Increment skipped element count.
    pub fn add_skipped(&mut self) {
        self.skipped_count += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.tab_count += other.tab_count;
        self.paragraph_count += other.paragraph_count;
        self.heading_count += other.heading_count;
        self.list_item_count += other.list_item_count;
        self.table_count += other.table_count;
        self.section_break_count += other.section_break_count;
        self.skipped_count += other.skipped_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
