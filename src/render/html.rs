//! HTML fragments for content nodes.

use super::escape::escape_html;
use super::state::RenderState;
use super::{Format, RenderOptions};
use crate::model::{ContentNode, InlineStyle, NodeKind, Script};

/// Render one node; `inner` is the already rendered content of its children.
pub(crate) fn render_node(
    node: &ContentNode,
    inner: &str,
    options: &RenderOptions,
    state: &mut RenderState,
) -> String {
    match &node.kind {
        NodeKind::Paragraph => {
            let tag = options.block_element_for(Format::Html);
            if node.is_empty() {
                // Quill's own markup for a blank line
                wrap(tag, "<br>")
            } else {
                wrap(tag, inner)
            }
        }
        NodeKind::Header { level } => {
            let tag = format!("h{}", options.heading_level(*level));
            wrap(&tag, inner)
        }
        NodeKind::ListItem { .. } => {
            state.next_item();
            wrap("li", inner)
        }
        NodeKind::Text => text(node, options),
        NodeKind::InlineRun(style) => apply_style(text(node, options), style),
        NodeKind::Link { href, style } => format!(
            "<a href=\"{}\">{}</a>",
            escape_html(href),
            apply_style(text(node, options), style)
        ),
    }
}

fn text(node: &ContentNode, options: &RenderOptions) -> String {
    if options.escape_special_chars {
        escape_html(&node.text)
    } else {
        node.text.clone()
    }
}

fn wrap(tag: &str, content: &str) -> String {
    format!("<{tag}>{content}</{tag}>")
}

fn apply_style(text: String, style: &InlineStyle) -> String {
    let mut result = text;

    // Apply styles (innermost first)
    if style.strike {
        result = wrap("s", &result);
    }
    if style.italic {
        result = wrap("em", &result);
    }
    if style.bold {
        result = wrap("strong", &result);
    }
    match style.script {
        Some(Script::Sub) => result = wrap("sub", &result),
        Some(Script::Super) => result = wrap("sup", &result),
        None => {}
    }
    if style.underline {
        result = wrap("u", &result);
    }

    result
}
