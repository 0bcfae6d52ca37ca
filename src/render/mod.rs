//! Rendering module for converting content nodes to HTML and Markdown.

pub mod escape;
mod format;
mod html;
mod markdown;
pub mod node;
mod options;
mod renderer;
mod result;
pub mod state;

pub use format::Format;
pub use node::{DisplayType, NodeRenderer};
pub use options::{is_tag_name, RenderOptions, DEFAULT_HTML_BLOCK};
pub use renderer::DeltaRenderer;
pub use result::{RenderResult, RenderStats};
pub use state::{Group, GroupKey, RenderState, Transition};
