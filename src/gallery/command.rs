// SPDX-License-Identifier: MPL-2.0
//! Raw inputs a gallery receives and the typed commands they translate to.

use super::focus::NodeId;
use super::gesture::{PointerInput, SwipeDirection};

/// Keys the gallery reacts to. Everything else is [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Escape,
    Other,
}

impl Key {
    /// Enter and Space activate the focused control.
    #[must_use]
    pub fn is_activation(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// Which swipe surface produced a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSurface {
    Main,
    Modal,
}

/// Raw input routed to one gallery instance.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// A click or tap whose target is `node`.
    Click(NodeId),
    /// A key press; the target is whatever holds focus.
    Key(Key),
    /// A pointer sample on `surface`.
    Pointer { surface: NodeId, input: PointerInput },
    /// `slot` finished loading `source`.
    ImageLoaded { slot: NodeId, source: String },
    /// `slot` failed to load `source`.
    ImageFailed { slot: NodeId, source: String },
}

/// State-changing commands consumed by the gallery reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectSlide(usize),
    RequestNext,
    RequestPrevious,
    OpenModal,
    CloseModal,
    SwipeDetected {
        surface: GestureSurface,
        direction: SwipeDirection,
    },
}
