//! Newline normalization applied to every finished fragment.

use once_cell::sync::Lazy;
use regex::Regex;

/// Three or more consecutive newlines.
static MULTIPLE_NEWLINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("newline pattern is valid"));

/// Collapse runs of three or more newlines to a single blank line.
///
/// Idempotent: normalizing already-normalized text returns it unchanged.
pub fn normalize_newlines(text: &str) -> String {
    MULTIPLE_NEWLINES.replace_all(text, "\n\n").into_owned()
}
