//! Parsing options and configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::model::{ListStyle, Script};
use crate::render::Format;

/// Options for parsing deltas.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Which attributes are honored
    pub attributes: AttributeOptions,

    /// Error handling mode for malformed ops
    pub error_mode: ErrorMode,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create parse options with the attribute defaults of an output format.
    pub fn for_format(format: Format) -> Self {
        Self {
            attributes: AttributeOptions::for_format(format),
            ..Self::default()
        }
    }

    /// Set the attribute allow-list.
    pub fn with_attributes(mut self, attributes: AttributeOptions) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Skip malformed ops and continue.
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Fail on the first malformed op.
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }
}

/// Error handling mode during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any malformed op
    Strict,
    /// Skip malformed ops and continue
    #[default]
    Lenient,
}

/// Attribute allow-list.
///
/// An attribute that is disabled here is treated as absent by the parser.
/// Loadable from JSON; missing fields keep their default (enabled).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeOptions {
    /// Honor `bold`
    pub bold: bool,

    /// Honor `italic`
    pub italic: bool,

    /// Honor `underline`
    pub underline: bool,

    /// Honor `strike`
    pub strike: bool,

    /// Honor `header`
    pub header: bool,

    /// Honor `link`
    pub link: bool,

    /// Permitted `list` values
    pub list: ListOptions,

    /// Permitted `script` values
    pub script: ScriptOptions,
}

impl AttributeOptions {
    /// Every attribute and value enabled.
    pub fn all() -> Self {
        Self {
            bold: true,
            italic: true,
            underline: true,
            strike: true,
            header: true,
            link: true,
            list: ListOptions::all(),
            script: ScriptOptions::all(),
        }
    }

    /// Every attribute disabled.
    pub fn none() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            strike: false,
            header: false,
            link: false,
            list: ListOptions::none(),
            script: ScriptOptions::none(),
        }
    }

    /// Defaults for an output format.
    ///
    /// Markdown has no syntax for underline or sub/superscript, so those are
    /// disabled and their text renders plain.
    pub fn for_format(format: Format) -> Self {
        match format {
            Format::Html => Self::all(),
            Format::Markdown => Self {
                underline: false,
                script: ScriptOptions::none(),
                ..Self::all()
            },
        }
    }

    /// Load options from a JSON document.
    ///
    /// Fields missing from the document keep the defaults of `format`, so
    /// `{"bold": false}` for Markdown still leaves underline and script off.
    pub fn from_json_for(format: Format, json: &str) -> Result<Self> {
        let overrides: Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(Self::for_format(format))?;
        merge_json(&mut merged, overrides);
        Ok(serde_json::from_value(merged)?)
    }

    /// Load options from a JSON file, on top of the defaults of `format`.
    pub fn from_file_for<P: AsRef<Path>>(format: Format, path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_for(format, &json)
    }

    /// Enable or disable bold.
    pub fn with_bold(mut self, enabled: bool) -> Self {
        self.bold = enabled;
        self
    }

    /// Enable or disable italic.
    pub fn with_italic(mut self, enabled: bool) -> Self {
        self.italic = enabled;
        self
    }

    /// Enable or disable underline.
    pub fn with_underline(mut self, enabled: bool) -> Self {
        self.underline = enabled;
        self
    }

    /// Enable or disable strikethrough.
    pub fn with_strike(mut self, enabled: bool) -> Self {
        self.strike = enabled;
        self
    }

    /// Enable or disable headers.
    pub fn with_header(mut self, enabled: bool) -> Self {
        self.header = enabled;
        self
    }

    /// Enable or disable links.
    pub fn with_link(mut self, enabled: bool) -> Self {
        self.link = enabled;
        self
    }

    /// Set permitted list styles.
    pub fn with_list(mut self, list: ListOptions) -> Self {
        self.list = list;
        self
    }

    /// Set permitted script positions.
    pub fn with_script(mut self, script: ScriptOptions) -> Self {
        self.script = script;
        self
    }
}

impl Default for AttributeOptions {
    fn default() -> Self {
        Self::all()
    }
}

/// Overlay `overrides` onto `base`, recursing into nested objects.
fn merge_json(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overrides) => *base = overrides,
    }
}

/// Permitted values of the `list` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListOptions {
    /// Allow `"ordered"`
    pub ordered: bool,

    /// Allow `"bullet"`
    pub bullet: bool,
}

impl ListOptions {
    /// Both styles allowed.
    pub fn all() -> Self {
        Self {
            ordered: true,
            bullet: true,
        }
    }

    /// Lists disabled.
    pub fn none() -> Self {
        Self {
            ordered: false,
            bullet: false,
        }
    }

    /// Whether any list style is allowed.
    pub fn is_enabled(&self) -> bool {
        self.ordered || self.bullet
    }

    /// Whether a specific style is allowed.
    pub fn allows(&self, style: ListStyle) -> bool {
        match style {
            ListStyle::Ordered => self.ordered,
            ListStyle::Bullet => self.bullet,
        }
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self::all()
    }
}

/// Permitted values of the `script` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptOptions {
    /// Allow `"sub"`
    pub sub: bool,

    /// Allow `"super"`
    #[serde(rename = "super")]
    pub sup: bool,
}

impl ScriptOptions {
    /// Both positions allowed.
    pub fn all() -> Self {
        Self {
            sub: true,
            sup: true,
        }
    }

    /// Script disabled.
    pub fn none() -> Self {
        Self {
            sub: false,
            sup: false,
        }
    }

    /// Whether any script position is allowed.
    pub fn is_enabled(&self) -> bool {
        self.sub || self.sup
    }

    /// Whether a specific position is allowed.
    pub fn allows(&self, script: Script) -> bool {
        match script {
            Script::Sub => self.sub,
            Script::Super => self.sup,
        }
    }
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self::all()
    }
}
