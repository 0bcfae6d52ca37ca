//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

use super::Format;
use crate::model::{ContentNode, NodeKind};

/// Result of rendering a delta, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (HTML or Markdown)
    pub content: String,

    /// Name of the output format
    pub format: String,

    /// Render statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, format: Format, stats: RenderStats) -> Self {
        Self {
            content,
            format: format.name().to_string(),
            stats,
        }
    }
}

/// Statistics collected while parsing and rendering a delta.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of plain paragraphs
    pub paragraph_count: u32,

    /// Number of header lines
    pub header_count: u32,

    /// Number of list groups opened
    pub list_count: u32,

    /// Number of list items
    pub list_item_count: u32,

    /// Number of formatted text runs
    pub inline_run_count: u32,

    /// Number of links
    pub link_count: u32,

    /// Number of malformed ops skipped
    pub skipped_op_count: u32,

    /// Number of attributes dropped by validation
    pub rejected_attribute_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment list group count.
    pub fn add_list(&mut self) {
        self.list_count += 1;
    }

    /// Count a block node and its inline children.
    pub fn record(&mut self, node: &ContentNode) {
        match node.kind {
            NodeKind::Paragraph => self.paragraph_count += 1,
            NodeKind::Header { .. } => self.header_count += 1,
            NodeKind::ListItem { .. } => self.list_item_count += 1,
            NodeKind::InlineRun(_) => self.inline_run_count += 1,
            NodeKind::Link { .. } => self.link_count += 1,
            NodeKind::Text => {}
        }

        if node.kind.is_block() {
            for child in &node.children {
                self.record(child);
            }
            self.count_text(&node.text());
        }
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}
