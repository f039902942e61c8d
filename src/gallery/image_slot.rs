// SPDX-License-Identifier: MPL-2.0
//! Image lifecycle binding for display slots.
//!
//! Each physical image slot (main stage, modal, thumbnails) gets an explicit
//! [`SlotState`] record. Load outcomes reported by the host clear the loading
//! marker; a failure swaps in the built-in fallback asset at most once per
//! [`ImageBinder::set_image`] call, so an unreachable fallback can never
//! start a load/error cycle.

use super::focus::NodeId;
use std::collections::HashMap;

/// Source of the built-in placeholder graphic (see `assets/fallback.svg`).
pub const FALLBACK_IMAGE_URL: &str = "lens-gallery://fallback.svg";

/// Alt text used when a caller supplies none.
pub const DEFAULT_IMAGE_ALT: &str = "Image";

/// Presentation state of one image slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlotState {
    /// URL the slot currently displays (or tries to).
    pub source: String,
    pub alt: String,
    /// A load for `source` is in flight.
    pub loading: bool,
    /// The fallback asset was substituted after a failure.
    pub fallback_applied: bool,
    /// Incremented on every source change.
    pub generation: u64,
}

impl SlotState {
    /// Whether the slot is showing the built-in fallback asset.
    #[must_use]
    pub fn shows_fallback(&self) -> bool {
        self.source == FALLBACK_IMAGE_URL
    }
}

/// What a failed load led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureOutcome {
    /// The fallback asset replaced the failed source.
    FallbackSubstituted,
    /// The fallback was already in use; only the loading marker was cleared.
    Settled,
    /// The slot is unknown or not bound.
    Ignored,
}

/// Tracks every bound image slot of one gallery instance.
#[derive(Debug, Clone, Default)]
pub struct ImageBinder {
    slots: HashMap<NodeId, SlotState>,
    bound: Vec<NodeId>,
}

impl ImageBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches lifecycle handling to a slot.
    ///
    /// Returns `false` when the slot was already bound; rebinding never
    /// attaches a second set of handlers.
    pub fn bind(&mut self, slot: NodeId) -> bool {
        if self.is_bound(slot) {
            return false;
        }
        self.bound.push(slot);
        self.slots.entry(slot).or_default();
        true
    }

    #[must_use]
    pub fn is_bound(&self, slot: NodeId) -> bool {
        self.bound.contains(&slot)
    }

    /// Points a slot at a new image.
    ///
    /// An empty `url` shows the fallback asset directly. A missing slot is
    /// a no-op.
    pub fn set_image(&mut self, slot: Option<NodeId>, url: &str, alt: &str) {
        let Some(slot) = slot else {
            return;
        };
        let state = self.slots.entry(slot).or_default();
        state.fallback_applied = false;
        state.loading = true;
        state.alt = if alt.is_empty() {
            DEFAULT_IMAGE_ALT.to_string()
        } else {
            alt.to_string()
        };
        state.source = if url.is_empty() {
            FALLBACK_IMAGE_URL.to_string()
        } else {
            url.to_string()
        };
        state.generation += 1;
    }

    /// The host finished loading the slot's current source.
    pub fn on_load(&mut self, slot: NodeId) {
        if !self.is_bound(slot) {
            return;
        }
        if let Some(state) = self.slots.get_mut(&slot) {
            state.loading = false;
        }
    }

    /// The host failed to load the slot's current source.
    pub fn on_error(&mut self, slot: NodeId) -> FailureOutcome {
        if !self.is_bound(slot) {
            return FailureOutcome::Ignored;
        }
        let Some(state) = self.slots.get_mut(&slot) else {
            return FailureOutcome::Ignored;
        };

        if state.fallback_applied || state.shows_fallback() {
            state.loading = false;
            tracing::debug!(%slot, "fallback image failed to load");
            return FailureOutcome::Settled;
        }

        tracing::debug!(%slot, source = %state.source, "image failed, using fallback");
        state.fallback_applied = true;
        state.source = FALLBACK_IMAGE_URL.to_string();
        state.generation += 1;
        // Stays loading until the fallback itself settles.
        state.loading = true;
        FailureOutcome::FallbackSubstituted
    }

    #[must_use]
    pub fn slot(&self, slot: NodeId) -> Option<&SlotState> {
        self.slots.get(&slot)
    }

    /// Slots with a load in flight, as `(slot, source, generation)`.
    pub fn pending_loads(&self) -> impl Iterator<Item = (NodeId, &str, u64)> + '_ {
        self.slots
            .iter()
            .filter(|(_, state)| state.loading)
            .map(|(slot, state)| (*slot, state.source.as_str(), state.generation))
    }
}
