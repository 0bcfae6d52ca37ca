//! Attribute validation against the allow-list.
//!
//! Validation never fails: an attribute is either accepted with a typed
//! value or rejected, and rejected attributes are treated as absent.

use serde_json::Value;

use super::AttributeOptions;
use crate::model::{Attribute, ListStyle, Script};

/// Lowest accepted header level.
pub const MIN_HEADER_LEVEL: u64 = 1;

/// Highest accepted header level.
///
/// Quill deltas may carry up to level 7; renderers clamp to their own maximum.
pub const MAX_HEADER_LEVEL: u64 = 7;

/// Outcome of validating one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The attribute is permitted, with its typed value
    Accepted(Attribute),
    /// The attribute is dropped
    Rejected(Rejection),
}

/// Why an attribute was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Not one of the recognized attribute names
    Unknown,
    /// Recognized but disabled in options
    Disabled,
    /// Value has the wrong type or is out of range
    OutOfDomain,
}

/// Check whether an attribute and value are permitted.
pub fn is_valid(attribute: &str, value: &Value, options: &AttributeOptions) -> bool {
    matches!(validate(attribute, value, options), Validation::Accepted(_))
}

/// Validate an attribute and convert its value.
pub fn validate(attribute: &str, value: &Value, options: &AttributeOptions) -> Validation {
    use Rejection::*;

    let flag = |enabled: bool, accepted: Attribute| {
        if !enabled {
            Validation::Rejected(Disabled)
        } else if value.as_bool() == Some(true) {
            Validation::Accepted(accepted)
        } else {
            Validation::Rejected(OutOfDomain)
        }
    };

    match attribute {
        "bold" => flag(options.bold, Attribute::Bold),
        "italic" => flag(options.italic, Attribute::Italic),
        "underline" => flag(options.underline, Attribute::Underline),
        "strike" => flag(options.strike, Attribute::Strike),
        "header" => {
            if !options.header {
                return Validation::Rejected(Disabled);
            }
            match value.as_u64() {
                Some(level) if (MIN_HEADER_LEVEL..=MAX_HEADER_LEVEL).contains(&level) => {
                    Validation::Accepted(Attribute::Header(level as u8))
                }
                _ => Validation::Rejected(OutOfDomain),
            }
        }
        "link" => {
            if !options.link {
                return Validation::Rejected(Disabled);
            }
            match value.as_str() {
                Some(href) if !href.is_empty() => Validation::Accepted(Attribute::Link(href.into())),
                _ => Validation::Rejected(OutOfDomain),
            }
        }
        "list" => {
            if !options.list.is_enabled() {
                return Validation::Rejected(Disabled);
            }
            match value.as_str().and_then(ListStyle::from_name) {
                Some(style) if options.list.allows(style) => {
                    Validation::Accepted(Attribute::List(style))
                }
                Some(_) => Validation::Rejected(Disabled),
                None => Validation::Rejected(OutOfDomain),
            }
        }
        "script" => {
            if !options.script.is_enabled() {
                return Validation::Rejected(Disabled);
            }
            match value.as_str().and_then(Script::from_name) {
                Some(script) if options.script.allows(script) => {
                    Validation::Accepted(Attribute::Script(script))
                }
                Some(_) => Validation::Rejected(Disabled),
                None => Validation::Rejected(OutOfDomain),
            }
        }
        _ => Validation::Rejected(Unknown),
    }
}
