// SPDX-License-Identifier: MPL-2.0
//! Node handles and input focus tracking.
//!
//! Every element a gallery touches (controls, image slots, overlay scrim)
//! is addressed through an opaque [`NodeId`]. Focus is owned by the host
//! page and reached through the [`FocusHost`] trait so the controller can
//! be driven by an in-memory page in tests and by the iced shell at runtime.

use std::collections::HashSet;
use std::fmt;

/// Opaque handle to one element of the page markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out unique node ids for one page.
#[derive(Debug, Clone, Default)]
pub struct NodeAllocator {
    next: u32,
}

impl NodeAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh id, never handed out before by this allocator.
    pub fn allocate(&mut self) -> NodeId {
        self.next += 1;
        NodeId(self.next)
    }
}

/// Access to the page's input focus.
pub trait FocusHost {
    /// The element currently holding input focus, if any.
    fn focused(&self) -> Option<NodeId>;

    /// Whether `node` can currently receive focus.
    fn can_focus(&self, node: NodeId) -> bool;

    /// Moves focus to `node`. Ignored when the node cannot take focus.
    fn focus(&mut self, node: NodeId);
}

/// In-memory focus state used by [`Page`](super::page::Page).
#[derive(Debug, Clone, Default)]
pub struct FocusState {
    focused: Option<NodeId>,
    disabled: HashSet<NodeId>,
    detached: HashSet<NodeId>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a control as disabled (or enabled again).
    pub fn set_disabled(&mut self, node: NodeId, disabled: bool) {
        if disabled {
            self.disabled.insert(node);
            if self.focused == Some(node) {
                self.focused = None;
            }
        } else {
            self.disabled.remove(&node);
        }
    }

    /// Removes a node from the page; it can no longer be focused.
    pub fn detach(&mut self, node: NodeId) {
        self.detached.insert(node);
        if self.focused == Some(node) {
            self.focused = None;
        }
    }

    /// Drops focus entirely (e.g. the user clicked empty page space).
    pub fn blur(&mut self) {
        self.focused = None;
    }
}

impl FocusHost for FocusState {
    fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    fn can_focus(&self, node: NodeId) -> bool {
        !self.disabled.contains(&node) && !self.detached.contains(&node)
    }

    fn focus(&mut self, node: NodeId) {
        if self.can_focus(node) {
            self.focused = Some(node);
        }
    }
}
