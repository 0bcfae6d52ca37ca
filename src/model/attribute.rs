//! Validated formatting attributes.

use serde::{Deserialize, Serialize};

/// A formatting attribute that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", content = "value", rename_all = "snake_case")]
pub enum Attribute {
    /// Bold text
    Bold,
    /// Italic text
    Italic,
    /// Underlined text
    Underline,
    /// Strikethrough text
    Strike,
    /// Header level, applies to the whole line
    Header(u8),
    /// Hyperlink target
    Link(String),
    /// List item style, applies to the whole line
    List(ListStyle),
    /// Subscript or superscript
    Script(Script),
}

/// List item style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// Numbered list
    Ordered,
    /// Bulleted list
    Bullet,
}

impl ListStyle {
    /// Parse the delta value of a `list` attribute.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ordered" => Some(ListStyle::Ordered),
            "bullet" => Some(ListStyle::Bullet),
            _ => None,
        }
    }
}

/// Vertical text position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// Subscript
    Sub,
    /// Superscript
    Super,
}

impl Script {
    /// Parse the delta value of a `script` attribute.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sub" => Some(Script::Sub),
            "super" => Some(Script::Super),
            _ => None,
        }
    }
}

/// Inline styling of a text run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underlined text
    pub underline: bool,

    /// Strikethrough text
    pub strike: bool,

    /// Subscript or superscript
    pub script: Option<Script>,
}

impl InlineStyle {
    /// Check if any styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic || self.underline || self.strike || self.script.is_some()
    }
}

/// The validated attributes of one op, split into inline and block parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    /// Inline styling
    pub style: InlineStyle,

    /// Link target
    pub link: Option<String>,

    /// Header level
    pub header: Option<u8>,

    /// List style
    pub list: Option<ListStyle>,
}

impl AttributeSet {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a validated attribute.
    pub fn insert(&mut self, attribute: Attribute) {
        match attribute {
            Attribute::Bold => self.style.bold = true,
            Attribute::Italic => self.style.italic = true,
            Attribute::Underline => self.style.underline = true,
            Attribute::Strike => self.style.strike = true,
            Attribute::Script(script) => self.style.script = Some(script),
            Attribute::Link(href) => self.link = Some(href),
            Attribute::Header(level) => self.header = Some(level),
            Attribute::List(style) => self.list = Some(style),
        }
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut set = AttributeSet::new();
        for attribute in iter {
            set.insert(attribute);
        }
        set
    }
}
