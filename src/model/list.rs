//! List metadata used to tell ordered lists from bulleted ones.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lists of a document tab, keyed by list ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListCatalog {
    lists: HashMap<String, List>,
}

impl ListCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a list to the catalog.
    pub fn insert(&mut self, list_id: impl Into<String>, list: List) {
        self.lists.insert(list_id.into(), list);
    }

    /// Builder form of [`ListCatalog::insert`].
    pub fn with_list(mut self, list_id: impl Into<String>, list: List) -> Self {
        self.insert(list_id, list);
        self
    }

    /// Get a list by ID.
    pub fn get(&self, list_id: &str) -> Option<&List> {
        self.lists.get(list_id)
    }

    /// Number of lists in the catalog.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Check if the catalog has no lists.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Whether items of `list_id` at `nesting_level` render as an ordered list.
    ///
    /// A missing list ID, an unknown list or a nesting level beyond the
    /// list's defined levels all count as unordered.
    pub fn is_ordered(&self, list_id: Option<&str>, nesting_level: usize) -> bool {
        list_id
            .and_then(|id| self.get(id))
            .and_then(|list| list.glyph_type(nesting_level))
            .is_some_and(GlyphType::is_ordered)
    }
}

/// A list definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    /// Per-level list properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_properties: Option<ListProperties>,
}

impl List {
    /// Create a list whose levels use the given glyph types, outermost first.
    pub fn with_glyphs(glyphs: impl IntoIterator<Item = GlyphType>) -> Self {
        Self {
            list_properties: Some(ListProperties {
                nesting_levels: glyphs
                    .into_iter()
                    .map(|glyph_type| NestingLevel {
                        glyph_type,
                        glyph_symbol: None,
                    })
                    .collect(),
            }),
        }
    }

    /// Glyph type at a nesting level.
    pub fn glyph_type(&self, nesting_level: usize) -> Option<GlyphType> {
        self.list_properties
            .as_ref()
            .and_then(|p| p.nesting_levels.get(nesting_level))
            .map(|level| level.glyph_type)
    }
}

/// List properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProperties {
    /// One entry per nesting level, outermost first
    #[serde(default)]
    pub nesting_levels: Vec<NestingLevel>,
}

/// Rendering of one nesting level of a list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestingLevel {
    /// Glyph type for numbered levels
    #[serde(default)]
    pub glyph_type: GlyphType,

    /// Bullet symbol for unnumbered levels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glyph_symbol: Option<String>,
}

/// Glyph type of a list level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GlyphType {
    /// No glyph type set (symbol bullets)
    #[default]
    #[serde(rename = "GLYPH_TYPE_UNSPECIFIED")]
    Unspecified,
    /// No glyph
    None,
    /// 1, 2, 3
    Decimal,
    /// 01, 02, 03
    ZeroDecimal,
    /// A, B, C
    UpperAlpha,
    /// a, b, c
    Alpha,
    /// I, II, III
    UpperRoman,
    /// i, ii, iii
    Roman,
    /// Unrecognized glyph type
    #[serde(other)]
    Other,
}

impl GlyphType {
    /// Only decimal, lowercase alpha and lowercase roman levels are ordered.
    pub fn is_ordered(self) -> bool {
        matches!(self, GlyphType::Decimal | GlyphType::Alpha | GlyphType::Roman)
    }
}
