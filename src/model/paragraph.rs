//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of styled text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    /// Inline elements in document order
    #[serde(default)]
    pub elements: Vec<ParagraphElement>,

    /// Paragraph style (heading classification)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph_style: Option<ParagraphStyle>,

    /// List membership, if this paragraph is a list item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullet: Option<Bullet>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_run(TextRun::new(text));
        p
    }

    /// Create a heading paragraph.
    pub fn heading(text: impl Into<String>, style: NamedStyleType) -> Self {
        let mut p = Self::with_text(text);
        p.paragraph_style = Some(ParagraphStyle {
            named_style_type: style,
        });
        p
    }

    /// Create a list item paragraph.
    pub fn bullet(text: impl Into<String>, list_id: Option<&str>, nesting_level: u32) -> Self {
        let mut p = Self::with_text(text);
        p.bullet = Some(Bullet {
            list_id: list_id.map(str::to_string),
            nesting_level,
        });
        p
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.elements.push(ParagraphElement {
            text_run: Some(run),
        });
    }

    /// Builder form of [`Paragraph::add_run`].
    pub fn with_run(mut self, run: TextRun) -> Self {
        self.add_run(run);
        self
    }

    /// Iterate over the non-empty text runs.
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.elements
            .iter()
            .filter_map(|e| e.text_run.as_ref())
            .filter(|run| !run.is_empty())
    }

    /// Get the unformatted text of the paragraph.
    pub fn plain_text(&self) -> String {
        self.text_runs().map(|run| run.content.as_str()).collect()
    }

    /// Heading level (1-6), or 0 for body text.
    pub fn heading_level(&self) -> u8 {
        self.paragraph_style
            .as_ref()
            .map(|s| s.named_style_type.heading_level())
            .unwrap_or(0)
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        self.heading_level() > 0
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        self.bullet.is_some()
    }
}

/// One inline element of a paragraph.
///
/// Only text runs carry content that is rendered; auto text, page breaks and
/// inline objects deserialize to an element with no run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphElement {
    /// The text run, if this element is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_run: Option<TextRun>,
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    /// The text content; may contain newlines and vertical tabs
    #[serde(default)]
    pub content: String,

    /// Text styling
    #[serde(default)]
    pub text_style: TextStyle,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            text_style: TextStyle::default(),
        }
    }

    /// Create a bold text run.
    pub fn bold(content: impl Into<String>) -> Self {
        Self::new(content).styled(TextStyle {
            bold: true,
            ..Default::default()
        })
    }

    /// Create an italic text run.
    pub fn italic(content: impl Into<String>) -> Self {
        Self::new(content).styled(TextStyle {
            italic: true,
            ..Default::default()
        })
    }

    /// Create a hyperlinked text run.
    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(content).styled(TextStyle {
            link: Some(Link {
                url: Some(url.into()),
            }),
            ..Default::default()
        })
    }

    /// Replace the style of this run.
    pub fn styled(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Text styling properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Bold text
    #[serde(default)]
    pub bold: bool,

    /// Italic text
    #[serde(default)]
    pub italic: bool,

    /// Underlined text (not representable in Markdown)
    #[serde(default)]
    pub underline: bool,

    /// Strikethrough text
    #[serde(default)]
    pub strikethrough: bool,

    /// Hyperlink target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

impl TextStyle {
    /// Non-empty link URL, if any.
    pub fn link_url(&self) -> Option<&str> {
        self.link
            .as_ref()
            .and_then(|l| l.url.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// Check if any emphasis is applied.
    pub fn has_emphasis(&self) -> bool {
        self.bold || self.italic || self.strikethrough
    }
}

/// A hyperlink.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// External URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Paragraph styling properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    /// Named style applied to the paragraph
    #[serde(default)]
    pub named_style_type: NamedStyleType,
}

/// Named paragraph styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NamedStyleType {
    /// Body text
    NormalText,
    /// Document title
    Title,
    /// Document subtitle
    Subtitle,
    #[serde(rename = "HEADING_1")]
    Heading1,
    #[serde(rename = "HEADING_2")]
    Heading2,
    #[serde(rename = "HEADING_3")]
    Heading3,
    #[serde(rename = "HEADING_4")]
    Heading4,
    #[serde(rename = "HEADING_5")]
    Heading5,
    #[serde(rename = "HEADING_6")]
    Heading6,
    /// Missing or unrecognized style
    #[default]
    #[serde(other, rename = "NAMED_STYLE_TYPE_UNSPECIFIED")]
    Unspecified,
}

impl NamedStyleType {
    /// Heading level (1-6), or 0 if this style is not a heading.
    pub fn heading_level(self) -> u8 {
        match self {
            NamedStyleType::Title | NamedStyleType::Heading1 => 1,
            NamedStyleType::Heading2 => 2,
            NamedStyleType::Heading3 => 3,
            NamedStyleType::Heading4 => 4,
            NamedStyleType::Heading5 => 5,
            NamedStyleType::Heading6 => 6,
            NamedStyleType::NormalText | NamedStyleType::Subtitle | NamedStyleType::Unspecified => {
                0
            }
        }
    }
}

/// List membership of a paragraph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bullet {
    /// List this paragraph belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,

    /// Nesting level (0 = top level)
    #[serde(default)]
    pub nesting_level: u32,
}
