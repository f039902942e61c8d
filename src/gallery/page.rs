// SPDX-License-Identifier: MPL-2.0
//! Page host for gallery instances.
//!
//! A [`Page`] plays the part of the document: it hands out node ids, owns
//! input focus, and dispatches events the way the page would. Clicks,
//! pointer samples and image outcomes go to the instance owning the target
//! node; key presses reach every instance, like document-level listeners.

use super::command::{Input, Key};
use super::controller::{GalleryController, GallerySettings};
use super::focus::{FocusHost, FocusState, NodeAllocator, NodeId};
use super::gesture::PointerInput;
use super::markup::GalleryMarkup;
use super::scroll_lock::ScrollLockRegistry;
use std::time::Instant;

/// Index of a mounted gallery within its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GalleryId(usize);

#[derive(Debug)]
pub struct Page {
    nodes: NodeAllocator,
    focus: FocusState,
    galleries: Vec<GalleryController>,
    registry: ScrollLockRegistry,
    settings: GallerySettings,
}

impl Page {
    /// A page sharing the process-wide scroll lock.
    pub fn new(settings: GallerySettings) -> Self {
        Self::with_registry(settings, ScrollLockRegistry::global().clone())
    }

    /// A page with its own scroll-lock registry.
    pub fn with_registry(settings: GallerySettings, registry: ScrollLockRegistry) -> Self {
        Self {
            nodes: NodeAllocator::new(),
            focus: FocusState::new(),
            galleries: Vec::new(),
            registry,
            settings,
        }
    }

    /// Allocator for building markup on this page.
    pub fn nodes_mut(&mut self) -> &mut NodeAllocator {
        &mut self.nodes
    }

    /// Mounts one gallery root.
    pub fn mount(&mut self, markup: GalleryMarkup) -> GalleryId {
        let gallery = GalleryController::mount(markup, &self.settings, self.registry.clone());
        if !gallery.view().main_enabled {
            if let Some(main) = gallery.markup().main_button {
                self.focus.set_disabled(main, true);
            }
        }
        self.galleries.push(gallery);
        GalleryId(self.galleries.len() - 1)
    }

    /// Mounts every root found on the page.
    pub fn mount_all(&mut self, roots: impl IntoIterator<Item = GalleryMarkup>) -> Vec<GalleryId> {
        roots.into_iter().map(|markup| self.mount(markup)).collect()
    }

    /// Panics if `id` was not returned by this page's `mount`.
    #[must_use]
    pub fn gallery(&self, id: GalleryId) -> &GalleryController {
        &self.galleries[id.0]
    }

    pub fn gallery_mut(&mut self, id: GalleryId) -> &mut GalleryController {
        &mut self.galleries[id.0]
    }

    pub fn galleries(&self) -> impl Iterator<Item = (GalleryId, &GalleryController)> {
        self.galleries
            .iter()
            .enumerate()
            .map(|(index, gallery)| (GalleryId(index), gallery))
    }

    #[must_use]
    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    /// Moves focus to `node`.
    pub fn focus_node(&mut self, node: NodeId) {
        self.focus.focus(node);
    }

    /// Clicks `node`: focuses it if it is a control, then notifies its gallery.
    pub fn click(&mut self, node: NodeId, now: Instant) -> bool {
        let Some(index) = self.owner_of(node) else {
            self.focus.blur();
            return false;
        };
        let gallery = &mut self.galleries[index];
        if gallery.is_control(node) {
            self.focus.focus(node);
        }
        gallery.handle(Input::Click(node), now, &mut self.focus)
    }

    /// Presses `key` on whatever holds focus. Every gallery sees it.
    pub fn key(&mut self, key: Key, now: Instant) -> bool {
        let mut consumed = false;
        for gallery in &mut self.galleries {
            consumed |= gallery.handle(Input::Key(key), now, &mut self.focus);
        }
        consumed
    }

    /// Delivers a pointer sample on `surface`.
    pub fn pointer(&mut self, surface: NodeId, input: PointerInput, now: Instant) -> bool {
        self.dispatch_to_owner(surface, Input::Pointer { surface, input }, now)
    }

    /// Reports that `slot` finished loading `source`.
    pub fn image_loaded(&mut self, slot: NodeId, source: &str, now: Instant) -> bool {
        let input = Input::ImageLoaded {
            slot,
            source: source.to_string(),
        };
        self.dispatch_to_owner(slot, input, now)
    }

    /// Reports that `slot` failed to load `source`.
    pub fn image_failed(&mut self, slot: NodeId, source: &str, now: Instant) -> bool {
        let input = Input::ImageFailed {
            slot,
            source: source.to_string(),
        };
        self.dispatch_to_owner(slot, input, now)
    }

    /// Runs scheduled work due at `now` on every gallery.
    pub fn advance(&mut self, now: Instant) {
        for gallery in &mut self.galleries {
            gallery.tick(now, &mut self.focus);
        }
    }

    /// Earliest scheduled deadline across galleries.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.galleries
            .iter()
            .filter_map(GalleryController::next_due)
            .min()
    }

    #[must_use]
    pub fn has_pending_tasks(&self) -> bool {
        self.galleries
            .iter()
            .any(GalleryController::has_pending_tasks)
    }

    /// Whether page scrolling is suppressed by an open modal.
    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.registry.is_locked()
    }

    fn dispatch_to_owner(&mut self, node: NodeId, input: Input, now: Instant) -> bool {
        match self.owner_of(node) {
            Some(index) => self.galleries[index].handle(input, now, &mut self.focus),
            None => false,
        }
    }

    fn owner_of(&self, node: NodeId) -> Option<usize> {
        self.galleries.iter().position(|gallery| gallery.contains(node))
    }
}
