//! # undelta
//!
//! Render Quill document deltas to HTML and Markdown.
//!
//! A delta is a JSON sequence of insert operations with optional formatting
//! attributes. This library parses the ops into typed content nodes and
//! renders them, grouping consecutive list items under the right wrapper.
//!
//! ## Quick Start
//!
//! ```
//! use undelta::to_markdown;
//!
//! let delta = r#"{"ops":[
//!     {"insert":"Item 1"},{"attributes":{"list":"ordered"},"insert":"\n"},
//!     {"insert":"Item 2"},{"attributes":{"list":"ordered"},"insert":"\n"}
//! ]}"#;
//!
//! let markdown = to_markdown(delta)?;
//! assert_eq!(markdown, "1. Item 1\n2. Item 2\n");
//! # Ok::<(), undelta::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Two output formats**: HTML fragments and Markdown
//! - **Lenient parsing**: invalid attributes are dropped, malformed ops skipped
//! - **Configurable allow-list**: enable or disable each attribute and value
//! - **Stateless renderers**: safe to share across threads

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Attribute, AttributeSet, ContentNode, Delta, InlineStyle, Insert, ListStyle, NodeKind, Op,
    Script,
};
pub use parser::{
    AttributeOptions, DeltaParser, ErrorMode, ListOptions, ParseOptions, ScriptOptions,
};
pub use render::{
    is_tag_name, DeltaRenderer, DisplayType, Format, NodeRenderer, RenderOptions, RenderResult,
    RenderStats,
};

/// Render delta JSON to the given format with default options.
///
/// # Example
///
/// ```
/// use undelta::{render, Format};
///
/// let html = render(r#"{"ops":[{"insert":"Hi\n"}]}"#, Format::Html).unwrap();
/// assert_eq!(html, "<p>Hi</p>\n");
/// ```
pub fn render(json: &str, format: Format) -> Result<String> {
    DeltaRenderer::new(format).render(json)
}

/// Render delta JSON to a format given by name (`"html"`, `"markdown"`, `"md"`).
///
/// Unknown names fail with [`Error::UnsupportedFormat`].
pub fn render_as(json: &str, format: &str) -> Result<String> {
    let format: Format = format.parse()?;
    render(json, format)
}

/// Render delta JSON to an HTML fragment.
pub fn to_html(json: &str) -> Result<String> {
    render(json, Format::Html)
}

/// Render delta JSON to Markdown.
pub fn to_markdown(json: &str) -> Result<String> {
    render(json, Format::Markdown)
}

/// Builder for configuring and running a render.
///
/// # Example
///
/// ```
/// use undelta::{Format, Undelta};
///
/// let html = Undelta::new(Format::Html)
///     .with_block_element("div")
///     .strict()
///     .render(r#"{"ops":[{"insert":"Hello\n"}]}"#)?;
/// assert_eq!(html, "<div>Hello</div>\n");
/// # Ok::<(), undelta::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Undelta {
    format: Format,
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Undelta {
    /// Create a builder for a format, with that format's attribute defaults.
    pub fn new(format: Format) -> Self {
        Self {
            format,
            parse_options: ParseOptions::for_format(format),
            render_options: RenderOptions::default(),
        }
    }

    /// Builder for HTML output.
    pub fn html() -> Self {
        Self::new(Format::Html)
    }

    /// Builder for Markdown output.
    pub fn markdown() -> Self {
        Self::new(Format::Markdown)
    }

    /// Set the attribute allow-list.
    pub fn with_attributes(mut self, attributes: AttributeOptions) -> Self {
        self.parse_options = self.parse_options.with_attributes(attributes);
        self
    }

    /// Fail on malformed ops.
    pub fn strict(mut self) -> Self {
        self.parse_options = self.parse_options.strict();
        self
    }

    /// Skip malformed ops (default).
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Set the paragraph element (HTML tag or Markdown prefix).
    ///
    /// An HTML element that is not a bare tag name renders as `p`.
    pub fn with_block_element(mut self, element: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_block_element(element);
        self
    }

    /// Set the Markdown bullet marker.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.render_options = self.render_options.with_list_marker(marker);
        self
    }

    /// Set the maximum emitted heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.render_options = self.render_options.with_max_heading(level);
        self
    }

    /// Enable or disable escaping of special characters.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.render_options = self.render_options.with_escaping(escape);
        self
    }

    /// Build the renderer.
    pub fn build(self) -> DeltaRenderer {
        DeltaRenderer::new(self.format)
            .with_parse_options(self.parse_options)
            .with_render_options(self.render_options)
    }

    /// Render delta JSON.
    pub fn render(self, json: &str) -> Result<String> {
        self.build().render(json)
    }

    /// Render delta JSON and collect statistics.
    pub fn render_with_stats(self, json: &str) -> Result<RenderResult> {
        self.build().render_with_stats(json)
    }
}

impl Default for Undelta {
    fn default() -> Self {
        Self::new(Format::default())
    }
}
