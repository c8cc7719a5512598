// SPDX-License-Identifier: MPL-2.0
//! Tweened presentation of the viewer state.
//!
//! The viewer core jumps straight to end values. [`Presentation`] keeps the
//! values actually drawn and eases them toward each new snapshot along the
//! curve named by the [`TransitionHint`] attached to the change.

use crate::viewer::{Snapshot, TransitionHint};
use std::time::Instant;

/// One animated scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    hint: TransitionHint,
}

impl Tween {
    fn at_rest(value: f32, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            start: now,
            hint: TransitionHint::Immediate,
        }
    }

    fn progress(&self, now: Instant) -> f32 {
        let duration = self.hint.duration();
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
    }

    fn value(&self, now: Instant) -> f32 {
        let eased = self.hint.ease(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    fn is_done(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Starts a new leg toward `to` from wherever the value currently is.
    fn retarget(&mut self, to: f32, hint: TransitionHint, now: Instant) {
        if to == self.to {
            return;
        }
        *self = Self {
            from: self.value(now),
            to,
            start: now,
            hint,
        };
    }
}

/// Values handed to the renderer for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    /// 0.0 = drawer closed, 1.0 = fully open.
    pub drawer: f32,
    /// Image opacity; rises from 0.0 with the entry fade-in.
    pub opacity: f32,
}

#[derive(Debug, Clone)]
pub struct Presentation {
    scale: Tween,
    offset_x: Tween,
    offset_y: Tween,
    drawer: Tween,
    opacity: Tween,
}

impl Presentation {
    /// Starts at rest on `snapshot`.
    #[must_use]
    pub fn new(snapshot: &Snapshot, now: Instant) -> Self {
        Self {
            scale: Tween::at_rest(snapshot.scale, now),
            offset_x: Tween::at_rest(snapshot.offset.x, now),
            offset_y: Tween::at_rest(snapshot.offset.y, now),
            drawer: Tween::at_rest(drawer_target(snapshot), now),
            opacity: Tween::at_rest(opacity_target(snapshot), now),
        }
    }

    /// Eases every channel whose target moved toward the new snapshot.
    pub fn retarget(&mut self, snapshot: &Snapshot, hint: TransitionHint, now: Instant) {
        self.scale.retarget(snapshot.scale, hint, now);
        self.offset_x.retarget(snapshot.offset.x, hint, now);
        self.offset_y.retarget(snapshot.offset.y, hint, now);
        self.drawer.retarget(drawer_target(snapshot), hint, now);
        self.opacity.retarget(opacity_target(snapshot), hint, now);
    }

    #[must_use]
    pub fn frame(&self, now: Instant) -> Frame {
        Frame {
            scale: self.scale.value(now),
            offset_x: self.offset_x.value(now),
            offset_y: self.offset_y.value(now),
            drawer: self.drawer.value(now).clamp(0.0, 1.0),
            opacity: self.opacity.value(now).clamp(0.0, 1.0),
        }
    }

    /// Whether any channel is still moving; drives the tick subscription.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        [
            &self.scale,
            &self.offset_x,
            &self.offset_y,
            &self.drawer,
            &self.opacity,
        ]
        .iter()
        .any(|tween| !tween.is_done(now))
    }
}

fn drawer_target(snapshot: &Snapshot) -> f32 {
    if snapshot.drawer_open {
        1.0
    } else {
        0.0
    }
}

fn opacity_target(snapshot: &Snapshot) -> f32 {
    if snapshot.entry_animation_done {
        1.0
    } else {
        0.0
    }
}
