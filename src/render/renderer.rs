//! Delta renderer: load, parse and assemble the output string.

use super::node::{close_group, open_group, NodeRenderer};
use super::state::RenderState;
use super::{Format, RenderOptions, RenderResult, RenderStats};
use crate::error::Result;
use crate::model::ContentNode;
use crate::parser::{DeltaParser, ParseOptions};

/// Renders delta JSON to one output format.
///
/// The renderer holds only immutable options. Every call builds its own
/// parser and render state, so one instance can serve concurrent callers.
///
/// # Example
///
/// ```
/// use undelta::{DeltaRenderer, Format};
///
/// let renderer = DeltaRenderer::new(Format::Html);
/// let html = renderer.render(r#"{"ops":[{"insert":"Hello\n"}]}"#)?;
/// assert_eq!(html, "<p>Hello</p>\n");
/// # Ok::<(), undelta::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DeltaRenderer {
    format: Format,
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl DeltaRenderer {
    /// Create a renderer with the defaults of a format.
    pub fn new(format: Format) -> Self {
        Self {
            format,
            parse_options: ParseOptions::for_format(format),
            render_options: RenderOptions::default(),
        }
    }

    /// Set parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Output format.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Parse options in use.
    pub fn parse_options(&self) -> &ParseOptions {
        &self.parse_options
    }

    /// Render options in use.
    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }

    /// Render delta JSON.
    pub fn render(&self, json: &str) -> Result<String> {
        let parser = self.parse(json)?;
        Ok(self.render_content(parser.content()))
    }

    /// Render delta JSON and collect statistics.
    pub fn render_with_stats(&self, json: &str) -> Result<RenderResult> {
        let parser = self.parse(json)?;

        let mut stats = RenderStats::new();
        stats.skipped_op_count = parser.skipped().len() as u32;
        stats.rejected_attribute_count = parser.rejected_attributes() as u32;

        let content = self.render_nodes(parser.content(), Some(&mut stats));
        Ok(RenderResult::new(content, self.format, stats))
    }

    /// Render already parsed content nodes.
    pub fn render_content(&self, nodes: &[ContentNode]) -> String {
        self.render_nodes(nodes, None)
    }

    fn parse(&self, json: &str) -> Result<DeltaParser> {
        let mut parser = DeltaParser::new(self.parse_options.clone());
        parser.load(json)?;
        parser.parse()?;
        Ok(parser)
    }

    fn render_nodes(&self, nodes: &[ContentNode], mut stats: Option<&mut RenderStats>) -> String {
        let mut output = String::new();
        let mut state = RenderState::new();

        for node in nodes {
            let renderer = NodeRenderer::new(node, self.format, &self.render_options);

            let transition = state.enter(renderer.group());
            if let Some(closed) = transition.closed {
                output.push_str(&close_group(self.format, &closed));
            }
            if transition.opened {
                if let Some(group) = state.open_group() {
                    output.push_str(&open_group(self.format, group));
                }
                if let Some(stats) = stats.as_deref_mut() {
                    stats.add_list();
                }
            }

            output.push_str(&renderer.render(&mut state));
            if renderer.new_line() {
                output.push('\n');
            }

            if let Some(stats) = stats.as_deref_mut() {
                stats.record(node);
            }
        }

        if let Some(closed) = state.finish() {
            output.push_str(&close_group(self.format, &closed));
        }

        output
    }
}

impl Default for DeltaRenderer {
    fn default() -> Self {
        Self::new(Format::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const MIXED_LISTS: &str = r#"{"ops":[{"insert":"One"},{"insert":"\n","attributes":{"list":"ordered"}},{"insert":"Two"},{"insert":"\n","attributes":{"list":"bullet"}}]}"#;

    #[test]
    fn test_html_paragraphs() {
        let renderer = DeltaRenderer::new(Format::Html);
        let html = renderer.render(r#"[{"insert":"One\nTwo\n"}]"#).unwrap();
        assert_eq!(html, "<p>One</p>\n<p>Two</p>\n");
    }

    #[test]
    fn test_mixed_lists_html() {
        let renderer = DeltaRenderer::new(Format::Html);
        let html = renderer.render(MIXED_LISTS).unwrap();
        assert_eq!(html, "<ol>\n<li>One</li>\n</ol>\n<ul>\n<li>Two</li>\n</ul>\n");
    }

    #[test]
    fn test_mixed_lists_markdown_numbering() {
        let renderer = DeltaRenderer::new(Format::Markdown);
        let md = renderer.render(MIXED_LISTS).unwrap();
        assert_eq!(md, "1. One\n* Two\n");
    }

    #[test]
    fn test_group_closed_before_paragraph() {
        let renderer = DeltaRenderer::new(Format::Html);
        let html = renderer
            .render(r#"[{"insert":"A"},{"insert":"\n","attributes":{"list":"bullet"}},{"insert":"after\n"}]"#)
            .unwrap();
        assert_eq!(html, "<ul>\n<li>A</li>\n</ul>\n<p>after</p>\n");
    }

    #[test]
    fn test_errors() {
        let renderer = DeltaRenderer::default();
        assert!(matches!(renderer.render("nope"), Err(Error::InvalidJson(_))));
        assert!(matches!(
            renderer.render(r#"{"ops":[]}"#),
            Err(Error::EmptyDocument)
        ));
    }

    #[test]
    fn test_render_with_stats() {
        let renderer = DeltaRenderer::new(Format::Markdown);
        let result = renderer
            .render_with_stats(
                r#"[{"insert":"a","attributes":{"bold":true,"color":"red"}},{"insert":"\n"},{"insert":7},{"insert":"x"},{"insert":"\n","attributes":{"list":"bullet"}}]"#,
            )
            .unwrap();
        assert_eq!(result.content, "**a**\n* x\n");
        assert_eq!(result.stats.paragraph_count, 1);
        assert_eq!(result.stats.list_count, 1);
        assert_eq!(result.stats.list_item_count, 1);
        assert_eq!(result.stats.inline_run_count, 1);
        assert_eq!(result.stats.skipped_op_count, 1);
        assert_eq!(result.stats.rejected_attribute_count, 1);
    }

    #[test]
    fn test_render_content() {
        let renderer = DeltaRenderer::new(Format::Markdown);
        let mut parser = DeltaParser::default();
        parser.load(r#"[{"insert":"Hi\n"}]"#).unwrap();
        parser.parse().unwrap();
        assert_eq!(renderer.render_content(parser.content()), "Hi\n");
    }

    #[test]
    fn test_renderer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DeltaRenderer>();
    }
}
