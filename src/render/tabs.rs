//! Flattening of the tab tree into Markdown fragments.

use rayon::prelude::*;

use crate::model::{Document, ListCatalog, StructuralElement, Tab};

use super::normalize::normalize_newlines;
use super::{ExtractionStats, MarkdownRenderer, RenderOptions, TabFragment};

/// One tab body waiting to be rendered.
struct TabJob<'a> {
    tab_id: &'a str,
    tab_title: &'a str,
    content: &'a [StructuralElement],
    /// Tab-scoped lists; `None` renders every bullet unordered.
    lists: Option<&'a ListCatalog>,
}

/// Convert every tab of a document, parents before their children.
pub fn collect_tabs(doc: &Document, options: &RenderOptions) -> Vec<TabFragment> {
    collect_tabs_with_stats(doc, options).0
}

/// Convert every tab of a document and report what was written.
pub fn collect_tabs_with_stats(
    doc: &Document,
    options: &RenderOptions,
) -> (Vec<TabFragment>, ExtractionStats) {
    let jobs = plan_jobs(doc, options);
    log::debug!(
        "Rendering {} tab(s) of document {:?}",
        jobs.len(),
        doc.document_id
    );

    let rendered: Vec<(TabFragment, ExtractionStats)> = if options.parallel && jobs.len() > 1 {
        jobs.par_iter().map(|job| render_job(job, options)).collect()
    } else {
        jobs.iter().map(|job| render_job(job, options)).collect()
    };

    let mut stats = ExtractionStats::new();
    let fragments = rendered
        .into_iter()
        .map(|(fragment, tab_stats)| {
            stats.merge(&tab_stats);
            fragment
        })
        .collect();
    (fragments, stats)
}

fn plan_jobs<'a>(doc: &'a Document, options: &RenderOptions) -> Vec<TabJob<'a>> {
    let mut jobs = Vec::new();

    if doc.has_tabs() {
        visit_tabs(&doc.tabs, &doc.title, options, &mut jobs);
    } else if let Some(body) = &doc.body {
        // Legacy bodies carry no tab-scoped lists.
        jobs.push(TabJob {
            tab_id: "",
            tab_title: &doc.title,
            content: &body.content,
            lists: None,
        });
    } else {
        log::warn!(
            "Document {:?} has neither tabs nor a body",
            doc.document_id
        );
    }

    jobs
}

fn visit_tabs<'a>(
    tabs: &'a [Tab],
    doc_title: &'a str,
    options: &RenderOptions,
    jobs: &mut Vec<TabJob<'a>>,
) {
    for tab in tabs {
        if let (Some(props), Some(document_tab)) = (&tab.tab_properties, &tab.document_tab) {
            let tab_title = if props.title.is_empty() {
                doc_title
            } else {
                props.title.as_str()
            };
            jobs.push(TabJob {
                tab_id: &props.tab_id,
                tab_title,
                content: document_tab
                    .body
                    .as_ref()
                    .map(|b| b.content.as_slice())
                    .unwrap_or(&[]),
                lists: Some(&document_tab.lists),
            });
        } else {
            log::debug!("Skipping tab {:?} without content", tab.id());
        }

        if options.include_child_tabs {
            visit_tabs(&tab.child_tabs, doc_title, options, jobs);
        }
    }
}

fn render_job(job: &TabJob<'_>, options: &RenderOptions) -> (TabFragment, ExtractionStats) {
    let mut renderer = if options.collect_stats {
        MarkdownRenderer::with_stats()
    } else {
        MarkdownRenderer::new()
    };

    let no_lists = ListCatalog::new();
    let mut output = String::new();
    renderer.render_elements(
        &mut output,
        job.content,
        job.lists.unwrap_or(&no_lists),
        options.heading_offset,
    );
    let markdown = normalize_newlines(&output);

    let mut stats = renderer.into_stats();
    if options.collect_stats {
        stats.add_tab();
        stats.count_text(&markdown);
    }

    (TabFragment::new(job.tab_id, job.tab_title, markdown), stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GlyphType, List, Paragraph, TabProperties};

    fn text_tab(id: &str, title: &str, text: &str) -> Tab {
        Tab::new(id, title, vec![Paragraph::with_text(text).into()])
    }

    #[test]
    fn test_parent_before_children() {
        let parent = text_tab("t.0", "Parent", "p\n")
            .with_child(text_tab("t.1", "Child", "c\n").with_child(text_tab("t.2", "Leaf", "l\n")));
        let doc = Document::with_tabs("Doc", vec![parent, text_tab("t.3", "Sibling", "s\n")]);

        let ids: Vec<_> = collect_tabs(&doc, &RenderOptions::default())
            .into_iter()
            .map(|f| f.tab_id)
            .collect();
        assert_eq!(ids, ["t.0", "t.1", "t.2", "t.3"]);
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let tabs = (0..8)
            .map(|i| text_tab(&format!("t.{i}"), "", &format!("tab {i}\n")))
            .collect();
        let doc = Document::with_tabs("Doc", tabs);

        let parallel = collect_tabs(&doc, &RenderOptions::default());
        let sequential = collect_tabs(&doc, &RenderOptions::new().sequential());
        assert_eq!(parallel, sequential);
        assert_eq!(parallel[5].tab_markdown, "tab 5\n\n");
    }

    #[test]
    fn test_empty_title_falls_back_to_document_title() {
        let doc = Document::with_tabs("My Doc", vec![text_tab("t.0", "", "x\n")]);
        let fragments = collect_tabs(&doc, &RenderOptions::default());
        assert_eq!(fragments[0].tab_title, "My Doc");
    }

    #[test]
    fn test_tab_without_content_is_skipped_but_children_kept() {
        let shell = Tab {
            tab_properties: Some(TabProperties {
                tab_id: "t.0".to_string(),
                title: "Shell".to_string(),
                ..Default::default()
            }),
            document_tab: None,
            child_tabs: vec![text_tab("t.1", "Inner", "i\n")],
        };
        let doc = Document::with_tabs("Doc", vec![shell]);

        let fragments = collect_tabs(&doc, &RenderOptions::default());
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].tab_id, "t.1");
    }

    #[test]
    fn test_child_tabs_can_be_excluded() {
        let doc = Document::with_tabs(
            "Doc",
            vec![text_tab("t.0", "A", "a\n").with_child(text_tab("t.1", "B", "b\n"))],
        );
        let fragments = collect_tabs(&doc, &RenderOptions::new().with_child_tabs(false));
        assert_eq!(fragments.len(), 1);
    }

    #[test]
    fn test_tab_lists_are_scoped() {
        let numbered = ListCatalog::new().with_list("l", List::with_glyphs([GlyphType::Decimal]));
        let item = || vec![Paragraph::bullet("item\n", Some("l"), 0).into()];
        let doc = Document::with_tabs(
            "Doc",
            vec![
                Tab::new("t.0", "Numbered", item()).with_lists(numbered),
                Tab::new("t.1", "Plain", item()),
            ],
        );

        let fragments = collect_tabs(&doc, &RenderOptions::default());
        assert_eq!(fragments[0].tab_markdown, "1. item\n");
        assert_eq!(fragments[1].tab_markdown, "- item\n");
    }

    #[test]
    fn test_legacy_body() {
        let doc = Document::with_body("Legacy", vec![Paragraph::with_text("old\n").into()]);
        let fragments = collect_tabs(&doc, &RenderOptions::default());
        assert_eq!(fragments, [TabFragment::new("", "Legacy", "old\n\n")]);
    }

    #[test]
    fn test_legacy_body_ignores_document_lists() {
        let mut doc = Document::with_body(
            "Legacy",
            vec![Paragraph::bullet("first\n", Some("kix.1"), 0).into()],
        );
        doc.lists = ListCatalog::new().with_list("kix.1", List::with_glyphs([GlyphType::Decimal]));

        let fragments = collect_tabs(&doc, &RenderOptions::default());
        assert_eq!(fragments[0].tab_markdown, "- first\n");
    }

    #[test]
    fn test_document_without_content() {
        assert!(collect_tabs(&Document::new("Empty"), &RenderOptions::default()).is_empty());
    }

    #[test]
    fn test_output_is_normalized() {
        let doc = Document::with_body(
            "Doc",
            vec![
                Paragraph::with_text("a\n\n\n\n").into(),
                Paragraph::with_text("b\n").into(),
            ],
        );
        let fragments = collect_tabs(&doc, &RenderOptions::default());
        assert_eq!(fragments[0].tab_markdown, "a\n\nb\n\n");
    }

    #[test]
    fn test_stats_merged_across_tabs() {
        let doc = Document::with_tabs(
            "Doc",
            vec![text_tab("t.0", "A", "one two\n"), text_tab("t.1", "B", "three\n")],
        );
        let (_, stats) = collect_tabs_with_stats(&doc, &RenderOptions::new().with_stats(true));
        assert_eq!(stats.tab_count, 2);
        assert_eq!(stats.paragraph_count, 2);
        assert_eq!(stats.word_count, 3);
    }
}
