// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`gallery`] - Stage, thumbnail strip, counter and modal overlay
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod gallery;
