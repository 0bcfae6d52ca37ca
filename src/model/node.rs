//! Content nodes produced by the parser.

use serde::{Deserialize, Serialize};

use super::{AttributeSet, InlineStyle, ListStyle};

/// A typed unit of content.
///
/// Block nodes (paragraph, header, list item) each represent one line and
/// own the inline nodes of that line as `children`. Inline nodes carry
/// their own text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentNode {
    /// What the node is
    pub kind: NodeKind,

    /// Text of an inline node; empty for blocks
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,

    /// Index of the source op
    pub order: usize,

    /// Inline nodes of a block, in op order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    /// Create a block node for a completed line.
    pub fn block(kind: NodeKind, order: usize, children: Vec<ContentNode>) -> Self {
        Self {
            kind,
            text: String::new(),
            order,
            children,
        }
    }

    /// Create an inline node from a text segment and its op's attributes.
    pub fn inline(text: impl Into<String>, attributes: &AttributeSet, order: usize) -> Self {
        let kind = match (&attributes.link, attributes.style.has_styling()) {
            (Some(href), _) => NodeKind::Link {
                href: href.clone(),
                style: attributes.style.clone(),
            },
            (None, true) => NodeKind::InlineRun(attributes.style.clone()),
            (None, false) => NodeKind::Text,
        };

        Self {
            kind,
            text: text.into(),
            order,
            children: Vec::new(),
        }
    }

    /// Plain text content; for blocks, the concatenated text of the line.
    pub fn text(&self) -> String {
        if self.kind.is_block() {
            self.children.iter().map(|c| c.text.as_str()).collect()
        } else {
            self.text.clone()
        }
    }

    /// Check if the node has no text.
    pub fn is_empty(&self) -> bool {
        if self.kind.is_block() {
            self.children.iter().all(|c| c.text.is_empty())
        } else {
            self.text.is_empty()
        }
    }
}

/// Kind of a content node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// Plain line
    Paragraph,

    /// Header line
    Header {
        /// Level as given in the delta (1-7)
        level: u8,
    },

    /// List item line
    ListItem {
        /// Ordered or bullet
        style: ListStyle,
    },

    /// Unformatted text span
    Text,

    /// Formatted text span
    InlineRun(InlineStyle),

    /// Hyperlinked text span, possibly formatted
    Link {
        /// Link target
        href: String,
        /// Formatting inside the link
        style: InlineStyle,
    },
}

impl NodeKind {
    /// Resolve the block kind of a line from the attributes of its newline.
    ///
    /// A header wins over a list when both are present.
    pub fn for_line(attributes: &AttributeSet) -> Self {
        if let Some(level) = attributes.header {
            NodeKind::Header { level }
        } else if let Some(style) = attributes.list {
            NodeKind::ListItem { style }
        } else {
            NodeKind::Paragraph
        }
    }

    /// Whether the kind is a line-level block.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            NodeKind::Paragraph | NodeKind::Header { .. } | NodeKind::ListItem { .. }
        )
    }
}
