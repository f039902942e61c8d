// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gestures**: Swipe recognition distance
//! - **Timing**: Post-swipe click suppression
//! - **Display**: Alt text and thumbnail defaults

use crate::domain::ui::newtypes::{suppression_bounds, swipe_bounds};

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum horizontal travel (px) for a pointer drag to count as a swipe.
pub const DEFAULT_SWIPE_MIN_DISTANCE: f32 = swipe_bounds::DEFAULT;

/// Smallest configurable swipe distance.
pub const MIN_SWIPE_MIN_DISTANCE: f32 = swipe_bounds::MIN;

/// Largest configurable swipe distance.
pub const MAX_SWIPE_MIN_DISTANCE: f32 = swipe_bounds::MAX;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// How long a click right after a swipe is swallowed (ms).
pub const DEFAULT_CLICK_SUPPRESSION_MS: u32 = suppression_bounds::DEFAULT_MS;

/// Longest configurable suppression window (ms).
pub const MAX_CLICK_SUPPRESSION_MS: u32 = suppression_bounds::MAX_MS;

/// Tick interval while deferred gallery tasks are pending (ms).
pub const SCHEDULER_TICK_MS: u64 = 16;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Prefix for generated alt text ("Image 3").
pub const DEFAULT_ALT_PREFIX: &str = "Image";

/// Whether the thumbnail strip is shown.
pub const DEFAULT_SHOW_THUMBNAILS: bool = true;

/// Edge length of thumbnail buttons (logical px).
pub const THUMBNAIL_SIZE: f32 = 96.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SWIPE_MIN_DISTANCE > 0.0);
    assert!(DEFAULT_SWIPE_MIN_DISTANCE >= MIN_SWIPE_MIN_DISTANCE);
    assert!(DEFAULT_SWIPE_MIN_DISTANCE <= MAX_SWIPE_MIN_DISTANCE);

    assert!(DEFAULT_CLICK_SUPPRESSION_MS <= MAX_CLICK_SUPPRESSION_MS);

    assert!(SCHEDULER_TICK_MS > 0);
    assert!(THUMBNAIL_SIZE > 0.0);
};
