//! Block structure of a scanned Markdown document.
//!
//! Text payloads keep their inline markup (emphasis, code spans, images)
//! unresolved; the renderer resolves it per text run. Code block content is
//! the exception and is carried verbatim.

/// A block-level unit of a scanned document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading with level (1-3) and raw inline text
    Heading { level: u8, text: String },

    /// Paragraph of raw inline text
    Paragraph(String),

    /// Single-line quote; adjacent quote lines stay separate blocks
    Blockquote(String),

    /// Fenced code region, exempt from inline resolution
    CodeBlock { code: String },

    /// Run of list items. No Markdown surface syntax produces the ordered
    /// variant; it is only constructed programmatically.
    List { ordered: bool, items: Vec<String> },

    /// Thematic break
    HorizontalRule,

    /// A line holding nothing but one image
    Image { alt: String, src: String },
}
