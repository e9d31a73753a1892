//! Rendering module for converting documents to Markdown and derived formats.

mod inline;
mod json;
mod markdown;
mod normalize;
mod options;
mod result;
mod tabs;
mod text;

pub use inline::{format_text, format_text_run, normalize_typography};
pub use json::{to_json, JsonFormat};
pub use markdown::{render_body, MarkdownRenderer};
pub use normalize::normalize_newlines;
pub use options::RenderOptions;
pub use result::{ContentResponse, ExtractionStats, RenderResult, TabFragment};
pub use tabs::{collect_tabs, collect_tabs_with_stats};
pub use text::to_text;

use crate::model::Document;

/// Convert a document to one Markdown fragment per tab.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Vec<TabFragment> {
    collect_tabs(doc, options)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document, options: &RenderOptions) -> RenderResult {
    let options = options.clone().with_stats(true);
    let (tabs, stats) = collect_tabs_with_stats(doc, &options);
    RenderResult::new(tabs, stats)
}

/// Convert a document into the `{docId, docTitle, tabs}` envelope.
pub fn to_response(doc: &Document, options: &RenderOptions) -> ContentResponse {
    ContentResponse::new(
        doc.document_id.clone(),
        doc.title.clone(),
        collect_tabs(doc, options),
    )
}
