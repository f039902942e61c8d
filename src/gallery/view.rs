// SPDX-License-Identifier: MPL-2.0
//! Rendered presentation state of one gallery instance.
//!
//! The controller writes this after every navigation; hosts only read it.
//! Image slot contents live in the [`ImageBinder`](super::image_slot::ImageBinder).

use super::focus::NodeId;

/// Highlight state of one selector control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorView {
    pub control: NodeId,
    pub active: bool,
    /// Mirrors `active` for assistive technology.
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryView {
    pub main_image_visible: bool,
    pub placeholder_visible: bool,
    /// Whether the main stage can be activated to open the modal.
    pub main_enabled: bool,
    /// Prev/next controls (inline and modal).
    pub nav_controls_visible: bool,
    pub thumbs_visible: bool,
    pub modal_open: bool,
    pub selectors: Vec<SelectorView>,
    /// Inline position text, `None` without a counter target.
    pub counter_text: Option<String>,
    /// Modal position text, `None` without a modal counter target.
    pub modal_counter_text: Option<String>,
}

impl GalleryView {
    /// The selector currently marked active.
    #[must_use]
    pub fn active_selector(&self) -> Option<NodeId> {
        self.selectors
            .iter()
            .find(|selector| selector.active)
            .map(|selector| selector.control)
    }
}
