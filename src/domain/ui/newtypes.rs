// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for interaction tunables,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Swipe Threshold Bounds
// =============================================================================

/// Minimum horizontal travel for a swipe, in logical pixels.
pub mod swipe_bounds {
    /// Smallest accepted threshold.
    pub const MIN: f32 = 8.0;
    /// Largest accepted threshold.
    pub const MAX: f32 = 400.0;
    /// Default threshold.
    pub const DEFAULT: f32 = 44.0;
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Minimum horizontal distance a pointer must travel to count as a swipe.
///
/// Always within 8–400 logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping to the valid range.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if !pixels.is_finite() {
            return Self::default();
        }
        Self(pixels.clamp(swipe_bounds::MIN, swipe_bounds::MAX))
    }

    /// Returns the threshold in pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(swipe_bounds::DEFAULT)
    }
}

// =============================================================================
// Suppression Window Bounds
// =============================================================================

/// Post-swipe click suppression window, in milliseconds.
pub mod suppression_bounds {
    /// Shortest window (suppression effectively off).
    pub const MIN_MS: u32 = 0;
    /// Longest window.
    pub const MAX_MS: u32 = 2_000;
    /// Default window.
    pub const DEFAULT_MS: u32 = 260;
}

// =============================================================================
// SuppressionWindow
// =============================================================================

/// How long a click following a swipe is swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuppressionWindow(u32);

impl SuppressionWindow {
    /// Creates a new window, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(suppression_bounds::MIN_MS, suppression_bounds::MAX_MS))
    }

    /// Returns the window in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the window as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for SuppressionWindow {
    fn default() -> Self {
        Self(suppression_bounds::DEFAULT_MS)
    }
}
