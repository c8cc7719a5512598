// SPDX-License-Identifier: MPL-2.0
//! Presentation hints attached to state changes.
//!
//! The viewer core only guarantees end values. How the UI travels from the
//! old value to the new one is described by a [`TransitionHint`], which the
//! core hands out but never branches on.

use crate::config::{EASE_OUT_DURATION, LINEAR_DURATION, SPRING_DURATION};
use std::time::Duration;

/// Interpolation curve the renderer should use to reach the new state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionHint {
    /// Jump straight to the new value.
    Immediate,
    /// Damped spring, used for zoom changes and resets.
    Spring,
    /// Constant-speed interpolation over the given duration.
    Linear(Duration),
    /// Decelerating interpolation over the given duration.
    EaseOut(Duration),
}

impl TransitionHint {
    /// Curve attached to live gesture updates and the entry fade-in.
    #[must_use]
    pub fn linear() -> Self {
        Self::Linear(LINEAR_DURATION)
    }

    /// Curve attached to drawer moves.
    #[must_use]
    pub fn ease_out() -> Self {
        Self::EaseOut(EASE_OUT_DURATION)
    }

    /// Time the renderer should spend reaching the end value.
    #[must_use]
    pub fn duration(self) -> Duration {
        match self {
            Self::Immediate => Duration::ZERO,
            Self::Spring => SPRING_DURATION,
            Self::Linear(duration) | Self::EaseOut(duration) => duration,
        }
    }

    /// Maps linear progress in `[0, 1]` to eased progress.
    ///
    /// The spring overshoots slightly before settling on 1.0.
    #[must_use]
    pub fn ease(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Immediate => 1.0,
            Self::Linear(_) => t,
            Self::EaseOut(_) => 1.0 - (1.0 - t).powi(3),
            Self::Spring => {
                if t >= 1.0 {
                    1.0
                } else {
                    let decay = (-6.0 * t).exp();
                    1.0 - decay * (t * 9.0).cos()
                }
            }
        }
    }
}

/// Outcome of feeding one event to the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Whether any observable field changed.
    pub changed: bool,
    /// How the renderer should animate toward the new state.
    pub hint: TransitionHint,
}

impl Transition {
    #[must_use]
    pub fn new(changed: bool, hint: TransitionHint) -> Self {
        Self { changed, hint }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_curve_ends_on_one() {
        for hint in [
            TransitionHint::Immediate,
            TransitionHint::Spring,
            TransitionHint::linear(),
            TransitionHint::ease_out(),
        ] {
            assert!((hint.ease(1.0) - 1.0).abs() < f32::EPSILON, "{hint:?}");
        }
    }

    #[test]
    fn linear_is_identity() {
        assert_eq!(TransitionHint::linear().ease(0.25), 0.25);
    }

    #[test]
    fn ease_out_runs_ahead_of_linear() {
        let hint = TransitionHint::ease_out();
        assert!(hint.ease(0.3) > 0.3);
        assert_eq!(hint.ease(0.0), 0.0);
    }

    #[test]
    fn spring_starts_at_zero() {
        assert!(TransitionHint::Spring.ease(0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn immediate_has_no_duration() {
        assert_eq!(TransitionHint::Immediate.duration(), Duration::ZERO);
        assert_eq!(TransitionHint::Immediate.ease(0.0), 1.0);
    }

    #[test]
    fn durations_follow_config() {
        assert_eq!(TransitionHint::linear().duration(), LINEAR_DURATION);
        assert_eq!(TransitionHint::ease_out().duration(), EASE_OUT_DURATION);
        assert_eq!(TransitionHint::Spring.duration(), SPRING_DURATION);
    }
}
