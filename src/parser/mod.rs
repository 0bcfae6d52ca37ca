//! Delta parsing module.

mod delta_parser;
mod options;
pub mod validator;

pub use delta_parser::DeltaParser;
pub use options::{AttributeOptions, ErrorMode, ListOptions, ParseOptions, ScriptOptions};
pub use validator::{is_valid, validate, Rejection, Validation};
