//! Document model types for delta content representation.
//!
//! This module defines the raw input model (a Quill delta and its ops) and
//! the intermediate representation (content nodes) that bridges parsing and
//! rendering. The node model is format-agnostic.

mod attribute;
mod delta;
mod node;

pub use attribute::{Attribute, AttributeSet, InlineStyle, ListStyle, Script};
pub use delta::{Delta, Insert, Op};
pub use node::{ContentNode, NodeKind};
