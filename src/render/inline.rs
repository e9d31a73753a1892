//! Inline formatting of text runs.

use crate::model::{TextRun, TextStyle};

/// Characters that count as surrounding whitespace when splitting a run.
const EDGE_WHITESPACE: [char; 3] = [' ', '\t', '\n'];

/// Convert one text run to Markdown.
///
/// Emphasis and link markers wrap the trimmed text only, so whitespace and
/// newlines at the edges of a run stay outside the markers.
pub fn format_text_run(run: &TextRun) -> String {
    format_text(&run.content, &run.text_style)
}

/// Convert text with the given style to Markdown.
pub fn format_text(content: &str, style: &TextStyle) -> String {
    let text = normalize_typography(&content.replace('\u{000B}', "\n\n"));

    if text.trim().is_empty() {
        return text;
    }

    if let Some(url) = style.link_url() {
        // Leading whitespace is dropped for links; only the tail is kept.
        let core = text.trim();
        if core.is_empty() {
            return text;
        }
        let suffix = &text[text.trim_end_matches(EDGE_WHITESPACE).len()..];
        return format!("[{}]({}){}", core, url, suffix);
    }

    if style.has_emphasis() {
        let core = text.trim();
        if core.is_empty() {
            return text;
        }
        let leading = &text[..text.len() - text.trim_start_matches(EDGE_WHITESPACE).len()];
        let trailing = &text[text.trim_end_matches(EDGE_WHITESPACE).len()..];

        let mut decorated = if style.bold && style.italic {
            format!("***{}***", core)
        } else if style.bold {
            format!("**{}**", core)
        } else if style.italic {
            format!("*{}*", core)
        } else {
            core.to_string()
        };
        if style.strikethrough {
            decorated = format!("~~{}~~", decorated);
        }

        return format!("{}{}{}", leading, decorated, trailing);
    }

    text
}

/// Replace smart quotes and em dashes with ASCII equivalents.
pub fn normalize_typography(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' => result.push('\''),
            '\u{201C}' | '\u{201D}' => result.push('"'),
            '\u{2014}' => result.push_str("--"),
            _ => result.push(c),
        }
    }
    result
}
