//! Structural elements of a document body.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// One node of a document body.
///
/// On the wire exactly one of `paragraph`, `table`, `sectionBreak` or
/// `tableOfContents` is set alongside the element's index range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawElement", into = "RawElement")]
pub enum StructuralElement {
    /// A paragraph of text
    Paragraph(Paragraph),
    /// A table
    Table(Table),
    /// A section break
    SectionBreak,
    /// Table of contents or an element kind this crate does not render
    Unsupported,
}

impl StructuralElement {
    /// Check if this element is rendered.
    pub fn is_supported(&self) -> bool {
        !matches!(self, StructuralElement::Unsupported)
    }
}

impl From<Paragraph> for StructuralElement {
    fn from(p: Paragraph) -> Self {
        StructuralElement::Paragraph(p)
    }
}

impl From<Table> for StructuralElement {
    fn from(t: Table) -> Self {
        StructuralElement::Table(t)
    }
}

/// Section break marker. Its style is not needed for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionBreak {}

/// Wire form of a structural element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    paragraph: Option<Paragraph>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    table: Option<Table>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    section_break: Option<SectionBreak>,
}

impl From<RawElement> for StructuralElement {
    fn from(raw: RawElement) -> Self {
        if let Some(p) = raw.paragraph {
            StructuralElement::Paragraph(p)
        } else if let Some(t) = raw.table {
            StructuralElement::Table(t)
        } else if raw.section_break.is_some() {
            StructuralElement::SectionBreak
        } else {
            StructuralElement::Unsupported
        }
    }
}

impl From<StructuralElement> for RawElement {
    fn from(element: StructuralElement) -> Self {
        match element {
            StructuralElement::Paragraph(p) => RawElement {
                paragraph: Some(p),
                ..Default::default()
            },
            StructuralElement::Table(t) => RawElement {
                table: Some(t),
                ..Default::default()
            },
            StructuralElement::SectionBreak => RawElement {
                section_break: Some(SectionBreak {}),
                ..Default::default()
            },
            StructuralElement::Unsupported => RawElement::default(),
        }
    }
}
