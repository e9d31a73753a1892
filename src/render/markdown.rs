//! Markdown rendering of document bodies.

use crate::model::{ListCatalog, Paragraph, StructuralElement, Table};

use super::inline::format_text_run;
use super::ExtractionStats;

/// Highest Markdown heading level.
const MAX_HEADING_LEVEL: usize = 6;

/// Markdown renderer for a sequence of structural elements.
///
/// Output is appended to a caller-owned buffer. Spacing decisions look at
/// what the buffer already ends with, so the same renderer must not be
/// shared between buffers that are later concatenated.
#[derive(Debug, Default)]
pub struct MarkdownRenderer {
    collect_stats: bool,
    stats: ExtractionStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer that counts what it writes.
    pub fn with_stats() -> Self {
        Self {
            collect_stats: true,
            stats: ExtractionStats::new(),
        }
    }

    /// Statistics collected so far.
    pub fn stats(&self) -> &ExtractionStats {
        &self.stats
    }

    /// Consume the renderer and return its statistics.
    pub fn into_stats(self) -> ExtractionStats {
        self.stats
    }

    /// Append the Markdown form of `elements` to `output`.
    pub fn render_elements(
        &mut self,
        output: &mut String,
        elements: &[StructuralElement],
        lists: &ListCatalog,
        heading_offset: u8,
    ) {
        for element in elements {
            match element {
                StructuralElement::Paragraph(p) => {
                    self.render_paragraph(output, p, lists, heading_offset)
                }
                StructuralElement::Table(t) => self.render_table(output, t, lists, heading_offset),
                StructuralElement::SectionBreak => self.render_section_break(output),
                StructuralElement::Unsupported => {
                    log::debug!("Skipping unsupported structural element");
                    if self.collect_stats {
                        self.stats.add_skipped();
                    }
                }
            }
        }
    }

    /// Append one paragraph to `output`.
    pub fn render_paragraph(
        &mut self,
        output: &mut String,
        para: &Paragraph,
        lists: &ListCatalog,
        heading_offset: u8,
    ) {
        let heading_prefix = heading_prefix(para.heading_level(), heading_offset);
        let bullet_prefix = para.bullet.as_ref().map(|bullet| {
            let level = bullet.nesting_level as usize;
            let indent = "  ".repeat(level);
            if lists.is_ordered(bullet.list_id.as_deref(), level) {
                format!("{}1. ", indent)
            } else {
                format!("{}- ", indent)
            }
        });

        let content: String = para.text_runs().map(format_text_run).collect();

        // Blank paragraphs keep vertical spacing but never stack blank lines.
        if content.trim().is_empty() {
            if !output.ends_with("\n\n") {
                output.push('\n');
            }
            return;
        }

        let content = content.strip_suffix('\n').unwrap_or(&content);

        if let Some(prefix) = heading_prefix {
            if !output.is_empty() && !output.ends_with("\n\n") {
                output.push('\n');
            }
            output.push_str(&prefix);
            output.push_str(content);
            output.push_str("\n\n");
            if self.collect_stats {
                self.stats.add_heading();
            }
        } else if let Some(prefix) = bullet_prefix {
            let trimmed = content.trim();
            if trimmed.is_empty() || trimmed == "-" {
                log::trace!("Dropping placeholder list item {:?}", content);
                return;
            }
            output.push_str(&prefix);
            output.push_str(content);
            output.push('\n');
            if self.collect_stats {
                self.stats.add_list_item();
            }
        } else {
            output.push_str(content);
            output.push_str("\n\n");
            if self.collect_stats {
                self.stats.add_paragraph();
            }
        }
    }

    /// Append a pipe table to `output`. Tables without rows produce nothing.
    pub fn render_table(
        &mut self,
        output: &mut String,
        table: &Table,
        lists: &ListCatalog,
        heading_offset: u8,
    ) {
        if table.is_empty() {
            return;
        }
        if self.collect_stats {
            self.stats.add_table();
        }

        output.push('\n');

        for (i, row) in table.table_rows.iter().enumerate() {
            output.push('|');
            for cell in &row.table_cells {
                let mut cell_output = String::new();
                self.render_elements(&mut cell_output, &cell.content, lists, heading_offset);
                let text = cell_output.trim().replace('\n', " ");
                output.push(' ');
                output.push_str(&text);
                output.push_str(" |");
            }
            output.push('\n');

            // Header separator after the first row
            if i == 0 {
                output.push('|');
                for _ in &row.table_cells {
                    output.push_str(" --- |");
                }
                output.push('\n');
            }
        }

        output.push('\n');
    }

    fn render_section_break(&mut self, output: &mut String) {
        // Nothing to separate at the start of a body.
        if output.trim().is_empty() {
            return;
        }
        output.push_str("\n---\n\n");
        if self.collect_stats {
            self.stats.add_section_break();
        }
    }
}

/// Heading marker for a native level shifted by `offset`, capped at 6.
fn heading_prefix(level: u8, offset: u8) -> Option<String> {
    if level == 0 {
        return None;
    }
    let adjusted = (level as usize + offset as usize).min(MAX_HEADING_LEVEL);
    Some(format!("{} ", "#".repeat(adjusted)))
}

/// Render `elements` into a fresh string.
pub fn render_body(elements: &[StructuralElement], lists: &ListCatalog, heading_offset: u8) -> String {
    let mut output = String::new();
    MarkdownRenderer::new().render_elements(&mut output, elements, lists, heading_offset);
    output
}
