// SPDX-License-Identifier: MPL-2.0
//! Gesture interpretation.
//!
//! Drag and pinch gestures run in two phases: a live phase, where every
//! update is applied immediately, and an end phase, where clamping and
//! snap-back corrections are committed. Both gesture families report values
//! that are cumulative since the gesture began, so every live update
//! replaces the previous one instead of composing with it.

use super::state::{Offset, ViewerState, DOUBLE_TAP_SCALE};
use super::transition::TransitionHint;

/// Raw gesture reported by the input layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Two taps in quick succession.
    DoubleTap,
    /// Drag translation since the drag started.
    DragChanged(Offset),
    DragEnded,
    /// Magnification factor since the pinch started.
    PinchChanged(f32),
    PinchEnded,
}

/// Applies a gesture to the state and returns the curve to animate it with.
pub fn interpret(state: &mut ViewerState, gesture: Gesture) -> TransitionHint {
    match gesture {
        Gesture::DoubleTap => double_tap(state),
        Gesture::DragChanged(translation) => {
            state.apply_pan_delta(translation);
            TransitionHint::linear()
        }
        Gesture::DragEnded => {
            if state.scale().is_min() {
                state.end_pan();
                TransitionHint::Spring
            } else {
                TransitionHint::Immediate
            }
        }
        Gesture::PinchChanged(factor) => {
            pinch_changed(state, factor);
            TransitionHint::linear()
        }
        Gesture::PinchEnded => pinch_ended(state),
    }
}

/// Only the exact natural size counts as "at rest": a double-tap anywhere
/// above it resets instead of zooming further.
fn double_tap(state: &mut ViewerState) -> TransitionHint {
    if state.scale().is_min() {
        state.set_scale(DOUBLE_TAP_SCALE);
    } else {
        state.reset();
    }
    TransitionHint::Spring
}

/// Factors past either bound are clamped by `Scale`, so a pinch that
/// overshoots the maximum holds there until the gesture ends.
fn pinch_changed(state: &mut ViewerState, factor: f32) {
    state.set_scale(factor);
}

fn pinch_ended(state: &mut ViewerState) -> TransitionHint {
    if state.scale().is_min() {
        state.reset();
        TransitionHint::Spring
    } else {
        TransitionHint::Immediate
    }
}
