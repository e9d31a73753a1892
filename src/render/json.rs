//! JSON rendering of converted documents.

use crate::error::{Error, Result};

use super::ContentResponse;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a converted document as `{"docId", "docTitle", "tabs": [...]}`.
pub fn to_json(response: &ContentResponse, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(response),
        JsonFormat::Compact => serde_json::to_string(response),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TabFragment;

    fn sample() -> ContentResponse {
        ContentResponse::new(
            "doc-1",
            "Test",
            vec![TabFragment::new("t.0", "Intro", "Hello\n\n")],
        )
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"docTitle\": \"Test\""));
        assert!(json.contains("\"tabMarkdown\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert_eq!(
            json,
            r#"{"docId":"doc-1","docTitle":"Test","tabs":[{"tabId":"t.0","tabTitle":"Intro","tabMarkdown":"Hello\n\n"}]}"#
        );
    }
}
