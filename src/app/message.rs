// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery::{Key, NodeId};
use iced::Point;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A gallery control or surface was clicked.
    Click(NodeId),
    /// A key was pressed and not captured by a widget.
    Key(Key),
    /// The cursor moved over a gesture surface.
    CursorMoved { surface: NodeId, position: Point },
    /// Left button pressed on a gesture surface.
    PointerPressed(NodeId),
    /// Right or middle button pressed on a gesture surface.
    SecondaryPressed(NodeId),
    /// Left button released on a gesture surface.
    PointerReleased(NodeId),
    /// The cursor left a gesture surface mid-gesture.
    PointerExited(NodeId),
    /// Result of probing an image source off-thread.
    ImageProbed {
        slot: NodeId,
        source: String,
        generation: u64,
        ok: bool,
    },
    Tick(Instant), // Drives deferred focus and suppression expiry
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Directory to build the gallery from.
    pub directory: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `LENS_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
