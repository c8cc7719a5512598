// SPDX-License-Identifier: MPL-2.0
//! Discrete zoom controls: one step in, one step out, or back to rest.

use super::state::{ViewerState, SCALE_STEP};
use super::transition::TransitionHint;

/// Buttons of the control bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    ZoomOut,
    Reset,
    ZoomIn,
}

impl ControlKind {
    /// Left-to-right order of the control bar.
    pub const ALL: [ControlKind; 3] = [ControlKind::ZoomOut, ControlKind::Reset, ControlKind::ZoomIn];

    /// Returns the i18n key of the button tooltip.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ControlKind::ZoomOut => "control-zoom-out",
            ControlKind::Reset => "control-reset",
            ControlKind::ZoomIn => "control-zoom-in",
        }
    }
}

/// Applies a control to the state. Each control is a no-op outside its
/// guard (zoom in at the maximum, zoom out at rest).
pub fn apply(state: &mut ViewerState, kind: ControlKind) -> TransitionHint {
    let scale = state.scale();
    match kind {
        ControlKind::ZoomOut => {
            if !scale.is_min() {
                state.set_scale(scale.value() - SCALE_STEP);
            }
        }
        ControlKind::Reset => state.reset(),
        ControlKind::ZoomIn => {
            if !scale.is_max() {
                state.set_scale(scale.value() + SCALE_STEP);
            }
        }
    }
    TransitionHint::Spring
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::viewer::state::{Offset, MAX_SCALE, MIN_SCALE};

    fn at_scale(scale: f32) -> ViewerState {
        let mut state = ViewerState::new(&Catalog::builtin());
        state.set_scale(scale);
        state
    }

    #[test]
    fn zoom_in_steps_by_one() {
        let mut state = at_scale(MIN_SCALE);
        apply(&mut state, ControlKind::ZoomIn);
        assert_eq!(state.scale().value(), 2.0);
    }

    #[test]
    fn zoom_in_clamps_at_max() {
        let mut state = at_scale(4.5);
        apply(&mut state, ControlKind::ZoomIn);
        assert_eq!(state.scale().value(), MAX_SCALE);
    }

    #[test]
    fn zoom_in_at_max_is_noop() {
        let mut state = at_scale(MAX_SCALE);
        state.apply_pan_delta(Offset::new(1.0, 2.0));
        let before = state.clone();
        apply(&mut state, ControlKind::ZoomIn);
        assert_eq!(state, before);
    }

    #[test]
    fn zoom_out_steps_by_one() {
        let mut state = at_scale(4.0);
        state.apply_pan_delta(Offset::new(6.0, 6.0));
        apply(&mut state, ControlKind::ZoomOut);
        assert_eq!(state.scale().value(), 3.0);
        assert_eq!(state.offset(), Offset::new(6.0, 6.0));
    }

    #[test]
    fn zoom_out_below_rest_resets() {
        let mut state = at_scale(1.5);
        state.apply_pan_delta(Offset::new(20.0, 20.0));
        apply(&mut state, ControlKind::ZoomOut);
        assert_eq!(state.scale().value(), MIN_SCALE);
        assert!(state.offset().is_zero());
    }

    #[test]
    fn zoom_out_at_rest_is_noop() {
        let mut state = at_scale(MIN_SCALE);
        state.apply_pan_delta(Offset::new(20.0, 20.0));
        apply(&mut state, ControlKind::ZoomOut);
        assert_eq!(state.offset(), Offset::new(20.0, 20.0));
    }

    #[test]
    fn reset_is_unconditional() {
        let mut state = at_scale(3.3);
        state.apply_pan_delta(Offset::new(-4.0, 9.0));
        apply(&mut state, ControlKind::Reset);
        assert_eq!(state.scale().value(), MIN_SCALE);
        assert!(state.offset().is_zero());
    }

    #[test]
    fn controls_are_listed_left_to_right() {
        assert_eq!(ControlKind::ALL[0], ControlKind::ZoomOut);
        assert_eq!(ControlKind::ALL[2], ControlKind::ZoomIn);
        assert_eq!(ControlKind::Reset.i18n_key(), "control-reset");
    }
}
