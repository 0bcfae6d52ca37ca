//! Rendering options and configuration.

use super::Format;

/// Default HTML element for plain paragraphs.
pub const DEFAULT_HTML_BLOCK: &str = "p";

/// Check that a string is a bare HTML tag name (ASCII letters and digits).
pub fn is_tag_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Options for rendering content nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Element for plain paragraphs: an HTML tag, or a Markdown line prefix.
    /// `None` uses the format default (`p` for HTML, no prefix for Markdown).
    pub block_element: Option<String>,

    /// Character to use for bullet list markers in Markdown
    pub list_marker: char,

    /// Maximum emitted heading level (1-6)
    pub max_heading_level: u8,

    /// Escape characters that are special in the target format
    pub escape_special_chars: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the paragraph element.
    pub fn with_block_element(mut self, element: impl Into<String>) -> Self {
        self.block_element = Some(element.into());
        self
    }

    /// Set the bullet list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, 6);
        self
    }

    /// Enable or disable escaping of special characters.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// The paragraph element for a format.
    ///
    /// In HTML anything but a bare tag name falls back to `p`.
    pub fn block_element_for(&self, format: Format) -> &str {
        match (self.block_element.as_deref(), format) {
            (Some(element), Format::Html) if is_tag_name(element) => element,
            (_, Format::Html) => DEFAULT_HTML_BLOCK,
            (Some(prefix), Format::Markdown) => prefix,
            (None, Format::Markdown) => "",
        }
    }

    /// Clamp a header level to the emitted maximum.
    pub fn heading_level(&self, level: u8) -> u8 {
        level.clamp(1, self.max_heading_level.clamp(1, 6))
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            block_element: None,
            list_marker: '*',
            max_heading_level: 6,
            escape_special_chars: true,
        }
    }
}
