//! Compact human-readable rendering of converted documents.

use super::ContentResponse;

/// Render a converted document as plain text with one header line per tab.
pub fn to_text(response: &ContentResponse) -> String {
    let mut output = String::new();

    output.push_str("Document: ");
    output.push_str(&response.doc_title);
    if !response.doc_id.is_empty() {
        output.push_str(&format!(" ({})", response.doc_id));
    }
    output.push('\n');

    for tab in &response.tabs {
        output.push('\n');
        output.push_str("== ");
        output.push_str(&tab.tab_title);
        if !tab.tab_id.is_empty() {
            output.push_str(&format!(" [{}]", tab.tab_id));
        }
        output.push_str(" ==\n");
        output.push_str(tab.tab_markdown.trim_end());
        output.push('\n');
    }

    output
}
