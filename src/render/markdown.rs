//! Markdown fragments for content nodes.

use super::escape::{escape_line_start, escape_link_target, escape_markdown};
use super::state::RenderState;
use super::{Format, RenderOptions};
use crate::model::{ContentNode, InlineStyle, ListStyle, NodeKind, Script};

/// Render one node; `inner` is the already rendered content of its children.
pub(crate) fn render_node(
    node: &ContentNode,
    inner: &str,
    options: &RenderOptions,
    state: &mut RenderState,
) -> String {
    match &node.kind {
        NodeKind::Paragraph => format!(
            "{}{}",
            options.block_element_for(Format::Markdown),
            line_start(inner, options)
        ),
        NodeKind::Header { level } => {
            let prefix = "#".repeat(options.heading_level(*level) as usize);
            format!("{} {}", prefix, inner)
        }
        NodeKind::ListItem { style } => {
            let number = state.next_item();
            match style {
                ListStyle::Ordered => format!("{}. {}", number, line_start(inner, options)),
                ListStyle::Bullet => {
                    format!("{} {}", options.list_marker, line_start(inner, options))
                }
            }
        }
        NodeKind::Text => text(node, options),
        NodeKind::InlineRun(style) => apply_style(text(node, options), style),
        NodeKind::Link { href, style } => format!(
            "[{}]({})",
            apply_style(text(node, options), style),
            escape_link_target(href)
        ),
    }
}

fn text(node: &ContentNode, options: &RenderOptions) -> String {
    if options.escape_special_chars {
        escape_markdown(&node.text)
    } else {
        node.text.clone()
    }
}

fn line_start(inner: &str, options: &RenderOptions) -> String {
    if options.escape_special_chars {
        escape_line_start(inner)
    } else {
        inner.to_string()
    }
}

/// Wrap a run in its style markers, keeping edge whitespace outside them.
fn apply_style(text: String, style: &InlineStyle) -> String {
    let core = text.trim();
    if core.is_empty() {
        return text;
    }
    let start = text.len() - text.trim_start().len();
    let end = start + core.len();

    format!(
        "{}{}{}",
        &text[..start],
        wrap_style(core.to_string(), style),
        &text[end..]
    )
}

fn wrap_style(text: String, style: &InlineStyle) -> String {
    let mut result = text;

    // Apply styles (innermost first)
    if style.strike {
        result = format!("~~{}~~", result);
    }
    if style.italic {
        result = format!("*{}*", result);
    }
    if style.bold {
        result = format!("**{}**", result);
    }
    // No Markdown syntax for these; only reached when explicitly enabled.
    match style.script {
        Some(Script::Sub) => result = format!("<sub>{}</sub>", result),
        Some(Script::Super) => result = format!("<sup>{}</sup>", result),
        None => {}
    }
    if style.underline {
        result = format!("<u>{}</u>", result);
    }

    result
}
