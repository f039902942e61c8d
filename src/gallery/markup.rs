// SPDX-License-Identifier: MPL-2.0
//! Markup contract a gallery instance is mounted on.
//!
//! The page layer describes which elements exist; every field that may be
//! absent is an `Option` (or an empty list) and the controller degrades to
//! a no-op for anything missing.

use super::focus::{NodeAllocator, NodeId};

/// One selector control (thumbnail) and the slide data it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorMarkup {
    pub control: NodeId,
    /// Image URL of the full-size slide; empty when the entry has none.
    pub source: String,
    /// Accessible label, used as alt text.
    pub label: Option<String>,
    /// The thumbnail's own image slot.
    pub thumbnail: Option<NodeId>,
}

/// Overlay elements of the optional modal presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalMarkup {
    /// The scrim/overlay container. Clicking it directly closes the modal.
    pub overlay: NodeId,
    /// Surface receiving swipe gestures inside the modal.
    pub stage: Option<NodeId>,
    pub image: Option<NodeId>,
    pub counter: Option<NodeId>,
    pub close: Option<NodeId>,
    pub prev: Vec<NodeId>,
    pub next: Vec<NodeId>,
}

/// Everything one gallery root exposes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryMarkup {
    pub selectors: Vec<SelectorMarkup>,
    /// Surface receiving swipe gestures on the inline presentation.
    pub stage: Option<NodeId>,
    /// Control that opens the modal.
    pub main_button: Option<NodeId>,
    pub main_image: Option<NodeId>,
    pub placeholder: Option<NodeId>,
    pub thumbs_track: Option<NodeId>,
    pub counter: Option<NodeId>,
    pub prev: Vec<NodeId>,
    pub next: Vec<NodeId>,
    pub modal: Option<ModalMarkup>,
    /// Other focusable content inside the gallery boundary.
    pub extra: Vec<NodeId>,
}

impl GalleryMarkup {
    /// Builds complete markup (every optional part present) for the given
    /// `(source, label)` entries, allocating ids from `nodes`.
    pub fn standard(nodes: &mut NodeAllocator, entries: &[(&str, &str)]) -> Self {
        let selectors = entries
            .iter()
            .map(|(source, label)| SelectorMarkup {
                control: nodes.allocate(),
                source: (*source).to_string(),
                label: (!label.is_empty()).then(|| (*label).to_string()),
                thumbnail: Some(nodes.allocate()),
            })
            .collect();

        let modal = ModalMarkup {
            overlay: nodes.allocate(),
            stage: Some(nodes.allocate()),
            image: Some(nodes.allocate()),
            counter: Some(nodes.allocate()),
            close: Some(nodes.allocate()),
            prev: vec![nodes.allocate()],
            next: vec![nodes.allocate()],
        };

        Self {
            selectors,
            stage: Some(nodes.allocate()),
            main_button: Some(nodes.allocate()),
            main_image: Some(nodes.allocate()),
            placeholder: Some(nodes.allocate()),
            thumbs_track: Some(nodes.allocate()),
            counter: Some(nodes.allocate()),
            prev: vec![nodes.allocate()],
            next: vec![nodes.allocate()],
            modal: Some(modal),
            extra: Vec::new(),
        }
    }

    /// All prev controls, inline and modal-scoped.
    pub fn all_prev(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.prev
            .iter()
            .chain(self.modal.iter().flat_map(|modal| modal.prev.iter()))
            .copied()
    }

    /// All next controls, inline and modal-scoped.
    pub fn all_next(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.next
            .iter()
            .chain(self.modal.iter().flat_map(|modal| modal.next.iter()))
            .copied()
    }

    /// Whether `node` lies inside this gallery's boundary.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes().any(|candidate| candidate == node)
    }

    /// Every node this markup references.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        let selectors = self
            .selectors
            .iter()
            .flat_map(|selector| std::iter::once(selector.control).chain(selector.thumbnail));
        let singles = [
            self.stage,
            self.main_button,
            self.main_image,
            self.placeholder,
            self.thumbs_track,
            self.counter,
        ]
        .into_iter()
        .flatten();
        let modal = self.modal.iter().flat_map(|modal| {
            [
                Some(modal.overlay),
                modal.stage,
                modal.image,
                modal.counter,
                modal.close,
            ]
            .into_iter()
            .flatten()
        });

        selectors
            .chain(singles)
            .chain(self.all_prev())
            .chain(self.all_next())
            .chain(modal)
            .chain(self.extra.iter().copied())
    }

    /// The modal image slot, if any.
    #[must_use]
    pub fn modal_image(&self) -> Option<NodeId> {
        self.modal.as_ref().and_then(|modal| modal.image)
    }

    #[must_use]
    pub fn modal_close(&self) -> Option<NodeId> {
        self.modal.as_ref().and_then(|modal| modal.close)
    }

    #[must_use]
    pub fn modal_stage(&self) -> Option<NodeId> {
        self.modal.as_ref().and_then(|modal| modal.stage)
    }

    #[must_use]
    pub fn modal_counter(&self) -> Option<NodeId> {
        self.modal.as_ref().and_then(|modal| modal.counter)
    }
}
