// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Zoom multiplier bounds and steps
//! - **Catalog**: Default page and thumbnail naming
//! - **Gestures**: Double-tap detection, drag slop and wheel pinch
//! - **Animation**: Durations of the presentation curves

use std::time::Duration;

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Natural size of the image (fit to the pane).
pub const MIN_SCALE: f32 = 1.0;

/// Maximum zoom multiplier.
pub const MAX_SCALE: f32 = 5.0;

/// Increment applied by the zoom in/out controls.
pub const SCALE_STEP: f32 = 1.0;

/// Scale reached by a double-tap from rest.
pub const DOUBLE_TAP_SCALE: f32 = MAX_SCALE;

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Page shown at startup when the catalog contains it.
pub const DEFAULT_PAGE_ID: u32 = 2;

/// Prefix that turns an image name into its thumbnail name.
pub const THUMBNAIL_PREFIX: &str = "thumb-";

/// File extensions tried, in order, when resolving an image name to a file.
pub const ASSET_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "gif", "bmp"];

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Two presses closer than this count as a double-tap.
pub const DOUBLE_TAP_THRESHOLD: Duration = Duration::from_millis(350);

/// Pointer travel (logical pixels) below which a press/release is a tap,
/// not a drag.
pub const DRAG_SLOP: f32 = 4.0;

/// Factor applied per ctrl + wheel step during a wheel pinch.
pub const WHEEL_PINCH_STEP: f32 = 1.1;

/// Pixel scroll distance counted as one wheel step.
pub const WHEEL_PIXELS_PER_STEP: f32 = 120.0;

/// A wheel pinch ends after this long without wheel input.
pub const WHEEL_PINCH_IDLE: Duration = Duration::from_millis(250);

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration used by the linear curve attached to live gesture updates and
/// the entry fade-in.
pub const LINEAR_DURATION: Duration = Duration::from_secs(1);

/// Duration of the ease-out curve used by the drawer.
pub const EASE_OUT_DURATION: Duration = Duration::from_millis(500);

/// Settling time of the spring curve used by zoom changes and resets.
pub const SPRING_DURATION: Duration = Duration::from_millis(550);

/// Refresh interval of the animation tick while something is moving.
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Whether the scale/offset info panel is shown at startup.
pub const DEFAULT_SHOW_INFO_PANEL: bool = true;

const _: () = {
    assert!(MIN_SCALE < MAX_SCALE);
    assert!(SCALE_STEP > 0.0);
    assert!(DEFAULT_PAGE_ID >= 1);
    assert!(WHEEL_PINCH_STEP > 1.0);
    assert!(WHEEL_PIXELS_PER_STEP > 0.0);
};
