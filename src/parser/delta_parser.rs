//! Delta parser: turns the flat op sequence into line-level content nodes.

use serde_json::{Map, Value};

use super::validator::{validate, Validation};
use super::{ErrorMode, ParseOptions};
use crate::error::{Error, Result};
use crate::model::{AttributeSet, ContentNode, Delta, Insert, NodeKind};

/// Delta parser.
///
/// Each line of the delta becomes one block node. Block attributes are read
/// from the op holding the newline that ends the line, inline attributes
/// from the op holding the text.
///
/// # Example
///
/// ```
/// use undelta::parser::{DeltaParser, ParseOptions};
///
/// let mut parser = DeltaParser::new(ParseOptions::default());
/// parser.load(r#"{"ops":[{"insert":"Title"},{"insert":"\n","attributes":{"header":1}}]}"#)?;
/// parser.parse()?;
/// assert_eq!(parser.content().len(), 1);
/// # Ok::<(), undelta::Error>(())
/// ```
#[derive(Debug)]
pub struct DeltaParser {
    options: ParseOptions,
    delta: Option<Delta>,
    content: Vec<ContentNode>,
    skipped: Vec<Error>,
    rejected_attributes: usize,
}

impl DeltaParser {
    /// Create a parser with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            delta: None,
            content: Vec::new(),
            skipped: Vec::new(),
            rejected_attributes: 0,
        }
    }

    /// Decode a delta from JSON text.
    ///
    /// Fails with [`Error::InvalidJson`] or [`Error::EmptyDocument`]; a
    /// failed load leaves the parser empty.
    pub fn load(&mut self, json: &str) -> Result<()> {
        self.reset();
        self.delta = Some(Delta::from_json(json)?);
        Ok(())
    }

    /// Whether a delta has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.delta.is_some()
    }

    /// Build the content nodes from the loaded delta.
    pub fn parse(&mut self) -> Result<()> {
        let delta = self.delta.as_ref().ok_or(Error::NotLoaded)?;

        let mut content = Vec::new();
        let mut skipped = Vec::new();
        let mut rejected = 0;
        let mut line: Vec<ContentNode> = Vec::new();

        for (index, op) in delta.ops() {
            let op = match op {
                Ok(op) => op,
                Err(err) => {
                    if self.options.error_mode == ErrorMode::Strict || !err.is_recoverable() {
                        return Err(err);
                    }
                    log::warn!("Skipping op: {}", err);
                    skipped.push(err);
                    continue;
                }
            };

            let text = match op.insert {
                Insert::Text(text) => text,
                Insert::Embed(embed) => {
                    log::debug!(
                        "Skipping embed at op {} ({})",
                        index,
                        embed.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
                    );
                    continue;
                }
            };

            let (attributes, dropped) = self.attributes(index, op.attributes.as_ref());
            rejected += dropped;

            let mut segments = text.split('\n');
            if let Some(first) = segments.next() {
                push_segment(&mut line, first, &attributes, index);
            }
            for segment in segments {
                let kind = NodeKind::for_line(&attributes);
                content.push(ContentNode::block(kind, index, std::mem::take(&mut line)));
                push_segment(&mut line, segment, &attributes, index);
            }
        }

        // Quill always ends a document with a newline, but be lenient.
        if let Some(last) = line.last() {
            let order = last.order;
            content.push(ContentNode::block(NodeKind::Paragraph, order, line));
        }

        // Ops that yield no text still make a document: one blank line.
        if content.is_empty() {
            content.push(ContentNode::block(NodeKind::Paragraph, 0, Vec::new()));
        }

        log::debug!(
            "Parsed {} ops into {} lines ({} skipped, {} attributes dropped)",
            delta.len(),
            content.len(),
            skipped.len(),
            rejected
        );

        self.skipped = skipped;
        self.rejected_attributes = rejected;
        self.content = content;
        Ok(())
    }

    /// The parsed content nodes, in op order.
    pub fn content(&self) -> &[ContentNode] {
        &self.content
    }

    /// Take the parsed content nodes.
    pub fn into_content(self) -> Vec<ContentNode> {
        self.content
    }

    /// Malformed ops skipped by the last parse.
    pub fn skipped(&self) -> &[Error] {
        &self.skipped
    }

    /// Number of attributes dropped by validation in the last parse.
    pub fn rejected_attributes(&self) -> usize {
        self.rejected_attributes
    }

    /// Get the parser options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    fn reset(&mut self) {
        self.delta = None;
        self.content.clear();
        self.skipped.clear();
        self.rejected_attributes = 0;
    }

    fn attributes(&self, index: usize, raw: Option<&Map<String, Value>>) -> (AttributeSet, usize) {
        let mut set = AttributeSet::new();
        let mut dropped = 0;

        for (name, value) in raw.into_iter().flatten() {
            match validate(name, value, &self.options.attributes) {
                Validation::Accepted(attribute) => set.insert(attribute),
                Validation::Rejected(reason) => {
                    log::trace!("Op {}: dropping `{}` = {} ({:?})", index, name, value, reason);
                    dropped += 1;
                }
            }
        }

        (set, dropped)
    }
}

impl Default for DeltaParser {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

fn push_segment(line: &mut Vec<ContentNode>, text: &str, attributes: &AttributeSet, order: usize) {
    if !text.is_empty() {
        line.push(ContentNode::inline(text, attributes, order));
    }
}
