//! Document model types for Google Docs content.
//!
//! These types mirror the JSON returned by the Docs API `documents.get`
//! call closely enough to deserialize it directly, while exposing
//! structural elements as a proper sum type. The model is read-only input
//! to the renderers in [`crate::render`].

mod document;
mod element;
mod list;
mod paragraph;
mod table;

pub use document::{Body, Document, DocumentTab, Tab, TabProperties};
pub use element::{SectionBreak, StructuralElement};
pub use list::{GlyphType, List, ListCatalog, ListProperties, NestingLevel};
pub use paragraph::{
    Bullet, Link, NamedStyleType, Paragraph, ParagraphElement, ParagraphStyle, TextRun, TextStyle,
};
pub use table::{Table, TableCell, TableRow};
