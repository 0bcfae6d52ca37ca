//! Per-render block tracking.
//!
//! A group is a structural wrapper spanning consecutive nodes of the same
//! kind, such as the `<ol>` around ordered list items. The state decides
//! when the open group must be closed and a new one opened. A fresh state
//! is created for every render call.

use crate::model::ListStyle;

/// Identity of a group wanted by a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupKey {
    /// Wrapper tag, e.g. `ol`
    pub tag: &'static str,

    /// List style of the grouped items
    pub style: ListStyle,

    /// Whether the wrapper has a closing construct
    pub close: bool,
}

/// An open group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Wrapper tag, e.g. `ol`
    pub tag: &'static str,

    /// List style of the grouped items
    pub style: ListStyle,

    /// Whether the wrapper has a closing construct
    pub close: bool,

    /// Items rendered so far
    pub items: usize,
}

impl Group {
    fn matches(&self, key: &GroupKey) -> bool {
        self.tag == key.tag && self.style == key.style
    }
}

impl From<GroupKey> for Group {
    fn from(key: GroupKey) -> Self {
        Self {
            tag: key.tag,
            style: key.style,
            close: key.close,
            items: 0,
        }
    }
}

/// Result of moving to the next node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    /// Group that ended before the node
    pub closed: Option<Group>,

    /// Whether a new group was opened for the node
    pub opened: bool,
}

/// Render state: `NoGroup` or `InGroup(tag, style)`.
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    open: Option<Group>,
}

impl RenderState {
    /// Create a state with no open group.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently open group.
    pub fn open_group(&self) -> Option<&Group> {
        self.open.as_ref()
    }

    /// Move to a node that wants `key` as its group (`None` for ungrouped nodes).
    pub fn enter(&mut self, key: Option<GroupKey>) -> Transition {
        match (self.open.take(), key) {
            (None, None) => Transition::default(),
            (Some(group), None) => {
                log::debug!("Closing <{}> group after {} items", group.tag, group.items);
                Transition {
                    closed: Some(group),
                    opened: false,
                }
            }
            (Some(group), Some(key)) if group.matches(&key) => {
                self.open = Some(group);
                Transition::default()
            }
            (previous, Some(key)) => {
                if let Some(ref group) = previous {
                    log::debug!("Switching group <{}> to <{}>", group.tag, key.tag);
                }
                self.open = Some(key.into());
                Transition {
                    closed: previous,
                    opened: true,
                }
            }
        }
    }

    /// Count an item in the open group and return its 1-based position.
    ///
    /// Outside a group every item is the first.
    pub fn next_item(&mut self) -> usize {
        match self.open.as_mut() {
            Some(group) => {
                group.items += 1;
                group.items
            }
            None => 1,
        }
    }

    /// End the render, returning the group still open.
    pub fn finish(&mut self) -> Option<Group> {
        self.open.take()
    }
}
