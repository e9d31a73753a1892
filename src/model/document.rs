//! Document-level types.

use super::{ListCatalog, StructuralElement};
use serde::{Deserialize, Serialize};

/// A Google Docs document as returned by `documents.get`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Document ID
    #[serde(default)]
    pub document_id: String,

    /// Document title
    #[serde(default)]
    pub title: String,

    /// Revision the content was read at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_id: Option<String>,

    /// Top-level tabs (present when tab content was requested)
    #[serde(default)]
    pub tabs: Vec<Tab>,

    /// Legacy single-tab body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,

    /// Document-level lists; not consulted when rendering the legacy body
    #[serde(default)]
    pub lists: ListCatalog,
}

impl Document {
    /// Create a new empty document.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Create a document from top-level tabs.
    pub fn with_tabs(title: impl Into<String>, tabs: Vec<Tab>) -> Self {
        Self {
            tabs,
            ..Self::new(title)
        }
    }

    /// Create a legacy document with a single body.
    pub fn with_body(title: impl Into<String>, content: Vec<StructuralElement>) -> Self {
        Self {
            body: Some(Body { content }),
            ..Self::new(title)
        }
    }

    /// Set the document ID.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.document_id = id.into();
        self
    }

    /// Whether the document exposes tabs rather than a legacy body.
    pub fn has_tabs(&self) -> bool {
        !self.tabs.is_empty()
    }

    /// Total number of tabs (including nested).
    pub fn tab_count(&self) -> usize {
        fn count_tabs(tabs: &[Tab]) -> usize {
            tabs.iter().map(|tab| 1 + count_tabs(&tab.child_tabs)).sum()
        }
        count_tabs(&self.tabs)
    }
}

/// A tab of a document. Tabs nest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    /// Tab properties (ID, title)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_properties: Option<TabProperties>,

    /// Tab content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_tab: Option<DocumentTab>,

    /// Nested tabs
    #[serde(default)]
    pub child_tabs: Vec<Tab>,
}

impl Tab {
    /// Create a tab with the given ID, title and body.
    pub fn new(
        tab_id: impl Into<String>,
        title: impl Into<String>,
        content: Vec<StructuralElement>,
    ) -> Self {
        Self {
            tab_properties: Some(TabProperties {
                tab_id: tab_id.into(),
                title: title.into(),
                ..Default::default()
            }),
            document_tab: Some(DocumentTab {
                body: Some(Body { content }),
                lists: ListCatalog::new(),
            }),
            child_tabs: Vec::new(),
        }
    }

    /// Set the tab's list catalog.
    pub fn with_lists(mut self, lists: ListCatalog) -> Self {
        self.document_tab.get_or_insert_with(DocumentTab::default).lists = lists;
        self
    }

    /// Add a child tab.
    pub fn add_child(&mut self, child: Tab) {
        self.child_tabs.push(child);
    }

    /// Builder form of [`Tab::add_child`].
    pub fn with_child(mut self, child: Tab) -> Self {
        self.add_child(child);
        self
    }

    /// Tab ID, or an empty string without properties.
    pub fn id(&self) -> &str {
        self.tab_properties
            .as_ref()
            .map(|p| p.tab_id.as_str())
            .unwrap_or("")
    }

    /// Tab title, or an empty string without properties.
    pub fn title(&self) -> &str {
        self.tab_properties
            .as_ref()
            .map(|p| p.title.as_str())
            .unwrap_or("")
    }
}

/// Properties of a tab.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabProperties {
    /// Tab ID
    #[serde(default)]
    pub tab_id: String,

    /// User-visible title
    #[serde(default)]
    pub title: String,

    /// Parent tab, for nested tabs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_tab_id: Option<String>,

    /// Position within the parent
    #[serde(default)]
    pub index: u32,

    /// Depth in the tab tree
    #[serde(default)]
    pub nesting_level: u32,
}

/// Content of a document tab.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTab {
    /// Tab body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,

    /// Lists used in this tab
    #[serde(default)]
    pub lists: ListCatalog,
}

/// A document body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Body {
    /// Structural elements in document order
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}
