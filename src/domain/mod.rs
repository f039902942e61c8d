// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`ui`]: Interaction tunables ([`SwipeThreshold`](ui::newtypes::SwipeThreshold),
//!   [`SuppressionWindow`](ui::newtypes::SuppressionWindow))

pub mod ui;

pub use ui::{SuppressionWindow, SwipeThreshold};
