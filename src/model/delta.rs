//! Raw delta input: the `ops` array and its insert operations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// A decoded delta document.
///
/// Ops are kept as raw JSON values so a single malformed op can be skipped
/// without rejecting the whole document.
#[derive(Debug, Clone, PartialEq)]
pub struct Delta {
    ops: Vec<Value>,
}

impl Delta {
    /// Decode a delta from JSON text.
    ///
    /// Accepts both `{"ops": [...]}` and a bare `[...]` op array.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build a delta from an already decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let ops = match value {
            Value::Null => return Err(Error::EmptyDocument),
            Value::Array(ops) => ops,
            Value::Object(mut map) => match map.remove("ops") {
                None | Some(Value::Null) => return Err(Error::EmptyDocument),
                Some(Value::Array(ops)) => ops,
                Some(other) => {
                    return Err(Error::InvalidJson(format!(
                        "`ops` must be an array, found {}",
                        json_type(&other)
                    )))
                }
            },
            other => {
                return Err(Error::InvalidJson(format!(
                    "expected an object or an array, found {}",
                    json_type(&other)
                )))
            }
        };

        if ops.is_empty() {
            return Err(Error::EmptyDocument);
        }

        Ok(Self { ops })
    }

    /// Number of ops, including ones that may turn out to be malformed.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the delta has no ops. Never true for a successfully decoded delta.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Decode the op at `index`.
    pub fn op(&self, index: usize) -> Option<Result<Op>> {
        self.ops.get(index).map(|value| Op::from_value(index, value))
    }

    /// Iterate over the ops in insertion order, decoding each one.
    pub fn ops(&self) -> impl Iterator<Item = (usize, Result<Op>)> + '_ {
        self.ops
            .iter()
            .enumerate()
            .map(|(index, value)| (index, Op::from_value(index, value)))
    }
}

/// A single insert operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Op {
    /// Inserted content
    pub insert: Insert,

    /// Formatting attributes, unvalidated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,
}

impl Op {
    /// Create a plain text op.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            insert: Insert::Text(text.into()),
            attributes: None,
        }
    }

    /// Add an attribute to this op.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes
            .get_or_insert_with(Map::new)
            .insert(name.into(), value.into());
        self
    }

    fn from_value(index: usize, value: &Value) -> Result<Self> {
        Op::deserialize(value).map_err(|e| Error::MalformedOp {
            index,
            reason: e.to_string(),
        })
    }

    /// The inserted text, or `None` for embeds.
    pub fn text_content(&self) -> Option<&str> {
        match &self.insert {
            Insert::Text(text) => Some(text),
            Insert::Embed(_) => None,
        }
    }
}

/// Content of an insert: text or an embed object (image, video, formula...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Insert {
    /// Plain text, possibly containing newlines
    Text(String),
    /// Embed placeholder; not rendered
    Embed(Map<String, Value>),
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_object() {
        let delta = Delta::from_json(r#"{"ops":[{"insert":"Hello\n"}]}"#).unwrap();
        assert_eq!(delta.len(), 1);
        let op = delta.op(0).unwrap().unwrap();
        assert_eq!(op.text_content(), Some("Hello\n"));
        assert!(op.attributes.is_none());
    }

    #[test]
    fn test_from_json_bare_array() {
        let delta = Delta::from_json(r#"[{"insert":"a"},{"insert":"\n"}]"#).unwrap();
        assert_eq!(delta.len(), 2);
    }

    #[test]
    fn test_from_json_empty() {
        assert!(matches!(
            Delta::from_json(r#"{"ops":[]}"#),
            Err(Error::EmptyDocument)
        ));
        assert!(matches!(Delta::from_json("[]"), Err(Error::EmptyDocument)));
        assert!(matches!(Delta::from_json("null"), Err(Error::EmptyDocument)));
        assert!(matches!(Delta::from_json("{}"), Err(Error::EmptyDocument)));
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            Delta::from_json("not json"),
            Err(Error::InvalidJson(_))
        ));
        assert!(matches!(Delta::from_json("42"), Err(Error::InvalidJson(_))));
        assert!(matches!(
            Delta::from_json(r#"{"ops":"text"}"#),
            Err(Error::InvalidJson(_))
        ));
    }

    #[test]
    fn test_malformed_op() {
        let delta = Delta::from_json(r#"[{"insert":1},{"retain":3},{"insert":"ok"}]"#).unwrap();
        let ops: Vec<_> = delta.ops().collect();
        assert!(matches!(ops[0].1, Err(Error::MalformedOp { index: 0, .. })));
        assert!(matches!(ops[1].1, Err(Error::MalformedOp { index: 1, .. })));
        assert!(ops[2].1.is_ok());
    }

    #[test]
    fn test_attributes_must_be_object() {
        let delta = Delta::from_json(r#"[{"insert":"a","attributes":"bold"}]"#).unwrap();
        assert!(delta.op(0).unwrap().is_err());

        let delta = Delta::from_json(r#"[{"insert":"a","attributes":null}]"#).unwrap();
        assert!(delta.op(0).unwrap().is_ok());
    }

    #[test]
    fn test_embed_insert() {
        let delta = Delta::from_json(r#"[{"insert":{"image":"x.png"}}]"#).unwrap();
        let op = delta.op(0).unwrap().unwrap();
        assert!(matches!(op.insert, Insert::Embed(_)));
        assert_eq!(op.text_content(), None);
    }

    #[test]
    fn test_op_builder() {
        let op = Op::text("Bold").with_attribute("bold", true);
        let attrs = op.attributes.unwrap();
        assert_eq!(attrs.get("bold"), Some(&Value::Bool(true)));
    }
}
