//! Per-node rendering contract.
//!
//! Every (node kind, format) pair answers the same questions: how it is
//! displayed, whether a line terminator follows it, whether it has a closing
//! construct, which structural parent it needs, and what its own fragment
//! looks like. The render loop only consults these answers.

use super::state::{Group, GroupKey, RenderState};
use super::{html, markdown, Format, RenderOptions};
use crate::model::{ContentNode, ListStyle, NodeKind};

/// How a node's output is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayType {
    /// Occupies its own line(s)
    Block,
    /// Flows within a line
    #[default]
    Inline,
}

/// Renderer for one content node in one format.
#[derive(Debug, Clone, Copy)]
pub struct NodeRenderer<'a> {
    node: &'a ContentNode,
    format: Format,
    options: &'a RenderOptions,
}

impl<'a> NodeRenderer<'a> {
    /// Create a renderer for a node.
    pub fn new(node: &'a ContentNode, format: Format, options: &'a RenderOptions) -> Self {
        Self {
            node,
            format,
            options,
        }
    }

    /// Display type of the node's output.
    pub fn display_type(&self) -> DisplayType {
        if self.node.kind.is_block() {
            DisplayType::Block
        } else {
            DisplayType::Inline
        }
    }

    /// Whether a line terminator follows the node.
    pub fn new_line(&self) -> bool {
        self.display_type() == DisplayType::Block
    }

    /// Whether the node's group must be explicitly closed before a
    /// differing node.
    pub fn close(&self) -> bool {
        match (self.format, &self.node.kind) {
            (Format::Html, NodeKind::ListItem { .. }) => true,
            (Format::Markdown, NodeKind::ListItem { .. }) => false,
            _ => false,
        }
    }

    /// Structural wrapper the node must be nested in.
    pub fn parent_tag(&self) -> Option<&'static str> {
        match self.node.kind {
            NodeKind::ListItem {
                style: ListStyle::Ordered,
            } => Some("ol"),
            NodeKind::ListItem {
                style: ListStyle::Bullet,
            } => Some("ul"),
            _ => None,
        }
    }

    /// The group this node belongs to, if it needs one.
    pub fn group(&self) -> Option<GroupKey> {
        let tag = self.parent_tag()?;
        let style = match self.node.kind {
            NodeKind::ListItem { style } => style,
            _ => return None,
        };
        Some(GroupKey {
            tag,
            style,
            close: self.close(),
        })
    }

    /// Render the node's own fragment, without group wrappers or the
    /// trailing line terminator.
    pub fn render(&self, state: &mut RenderState) -> String {
        let inner: String = self
            .node
            .children
            .iter()
            .map(|child| NodeRenderer::new(child, self.format, self.options).render(state))
            .collect();

        match self.format {
            Format::Html => html::render_node(self.node, &inner, self.options, state),
            Format::Markdown => markdown::render_node(self.node, &inner, self.options, state),
        }
    }
}

/// Opening construct of a group.
pub fn open_group(format: Format, group: &Group) -> String {
    match format {
        Format::Html => format!("<{}>\n", group.tag),
        Format::Markdown => String::new(),
    }
}

/// Closing construct of a group.
pub fn close_group(format: Format, group: &Group) -> String {
    match format {
        Format::Html if group.close => format!("</{}>\n", group.tag),
        _ => String::new(),
    }
}
