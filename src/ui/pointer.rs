// SPDX-License-Identifier: MPL-2.0
//! Pointer and touch tracking for the image pane.
//!
//! Turns raw mouse, touch and modifier events into the viewer's gesture
//! events:
//!
//! - two taps (clicks) within [`DOUBLE_TAP_THRESHOLD`] produce `DoubleTap`
//! - a left-button or one-finger drag produces `DragChanged` with the
//!   translation since the press, then `DragEnded`
//! - a two-finger touch produces `PinchChanged` with the ratio of the current
//!   distance between those two fingers to the initial one, then `PinchEnded`
//! - ctrl + wheel produces `PinchChanged` with a factor multiplied by
//!   [`WHEEL_PINCH_STEP`] per step, then `PinchEnded` once ctrl is released
//!   or the wheel stays idle for [`WHEEL_PINCH_IDLE`]
//!
//! Movement below [`DRAG_SLOP`] keeps a press a tap. Gestures only start
//! inside the hit area (the displayed image), see [`State::set_hit_area`].

use crate::config::{
    DOUBLE_TAP_THRESHOLD, DRAG_SLOP, WHEEL_PINCH_IDLE, WHEEL_PINCH_STEP, WHEEL_PIXELS_PER_STEP,
};
use crate::viewer::Event;
use iced::{keyboard, mouse, touch, Point, Rectangle, Vector};
use std::collections::HashMap;
use std::time::Instant;

/// What the current touch sequence turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Touch {
    #[default]
    Idle,
    /// One finger down, possibly a tap or a drag.
    Single { origin: Point, dragging: bool },
    /// Two fingers down; further fingers are ignored.
    Pinch {
        fingers: [touch::Finger; 2],
        initial_distance: f32,
    },
    /// A pinch ended while fingers remain on the surface; ignored until all
    /// are lifted.
    Finished,
}

/// Left-button press being tracked.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Press {
    origin: Point,
    dragging: bool,
}

/// Ctrl + wheel pinch in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
struct WheelPinch {
    factor: f32,
    last_scroll: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    cursor_position: Option<Point>,
    hit_area: Option<Rectangle>,
    modifiers: keyboard::Modifiers,
    press: Option<Press>,
    fingers: HashMap<touch::Finger, Point>,
    touch: Touch,
    wheel: Option<WheelPinch>,
    last_tap: Option<Instant>,
}

impl State {
    /// Feeds one raw event. `now` is the event time, used for double-tap
    /// detection and the wheel pinch timeout.
    pub fn handle(&mut self, event: &iced::Event, now: Instant) -> Vec<Event> {
        match event {
            iced::Event::Mouse(mouse_event) => self.handle_mouse(*mouse_event, now),
            iced::Event::Touch(touch_event) => self.handle_touch(*touch_event, now),
            iced::Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
                self.modifiers = *modifiers;
                if modifiers.control() {
                    Vec::new()
                } else {
                    self.end_wheel_pinch()
                }
            }
            _ => Vec::new(),
        }
    }

    /// Ends a wheel pinch that has been idle for too long.
    pub fn poll(&mut self, now: Instant) -> Vec<Event> {
        match self.wheel {
            Some(wheel) if now.saturating_duration_since(wheel.last_scroll) >= WHEEL_PINCH_IDLE => {
                self.end_wheel_pinch()
            }
            _ => Vec::new(),
        }
    }

    /// Restricts where gestures may start. Gestures already running are not
    /// affected. Without a hit area, gestures start anywhere.
    pub fn set_hit_area(&mut self, area: Rectangle) {
        self.hit_area = Some(area);
    }

    /// Current cursor position, if the cursor is over the window.
    #[must_use]
    pub fn cursor_position(&self) -> Option<Point> {
        self.cursor_position
    }

    /// Whether a drag or pinch is in progress.
    #[must_use]
    pub fn is_gesturing(&self) -> bool {
        self.press.is_some_and(|press| press.dragging)
            || self.wheel.is_some()
            || matches!(
                self.touch,
                Touch::Single { dragging: true, .. } | Touch::Pinch { .. }
            )
    }

    fn accepts(&self, position: Point) -> bool {
        self.hit_area.is_none_or(|area| area.contains(position))
    }

    fn handle_mouse(&mut self, event: mouse::Event, now: Instant) -> Vec<Event> {
        match event {
            mouse::Event::CursorMoved { position } => {
                self.cursor_position = Some(position);
                let Some(press) = self.press.as_mut() else {
                    return Vec::new();
                };
                drag_update(&mut press.dragging, press.origin, position)
                    .into_iter()
                    .collect()
            }
            mouse::Event::CursorLeft => {
                self.cursor_position = None;
                let mut events = self.end_wheel_pinch();
                events.extend(self.release_mouse(now));
                events
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let events = self.end_wheel_pinch();
                if let Some(origin) = self.cursor_position.filter(|p| self.accepts(*p)) {
                    self.press = Some(Press {
                        origin,
                        dragging: false,
                    });
                }
                events
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => self.release_mouse(now),
            mouse::Event::WheelScrolled { delta } => self.wheel_scrolled(delta, now),
            _ => Vec::new(),
        }
    }

    fn release_mouse(&mut self, now: Instant) -> Vec<Event> {
        match self.press.take() {
            Some(Press { dragging: true, .. }) => {
                self.last_tap = None;
                vec![Event::DragEnded]
            }
            Some(Press { dragging: false, .. }) => self.tap(now).into_iter().collect(),
            None => Vec::new(),
        }
    }

    fn wheel_scrolled(&mut self, delta: mouse::ScrollDelta, now: Instant) -> Vec<Event> {
        let steps = scroll_steps(&delta);
        if !self.modifiers.control() || steps.abs() < f32::EPSILON {
            return Vec::new();
        }

        let base = match self.wheel {
            Some(wheel) => wheel.factor,
            None => {
                let over_image = self.cursor_position.is_some_and(|p| self.accepts(p));
                if !over_image || self.press.is_some() || self.touch != Touch::Idle {
                    return Vec::new();
                }
                self.last_tap = None;
                1.0
            }
        };
        let factor = base * WHEEL_PINCH_STEP.powf(steps);

        self.wheel = Some(WheelPinch {
            factor,
            last_scroll: now,
        });
        vec![Event::PinchChanged(factor)]
    }

    fn end_wheel_pinch(&mut self) -> Vec<Event> {
        match self.wheel.take() {
            Some(_) => vec![Event::PinchEnded],
            None => Vec::new(),
        }
    }

    fn handle_touch(&mut self, event: touch::Event, now: Instant) -> Vec<Event> {
        match event {
            touch::Event::FingerPressed { id, position } => {
                if self.fingers.is_empty()
                    && (!self.accepts(position) || self.press.is_some() || self.wheel.is_some())
                {
                    return Vec::new();
                }
                self.fingers.insert(id, position);
                self.finger_pressed(position)
            }
            touch::Event::FingerMoved { id, position } => {
                if !self.fingers.contains_key(&id) {
                    return Vec::new();
                }
                self.fingers.insert(id, position);
                self.finger_moved(id, position)
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
                if self.fingers.remove(&id).is_none() {
                    return Vec::new();
                }
                self.finger_lifted(id, now)
            }
        }
    }

    fn finger_pressed(&mut self, position: Point) -> Vec<Event> {
        match (self.touch, self.fingers.len()) {
            (Touch::Idle, 1) => {
                self.touch = Touch::Single {
                    origin: position,
                    dragging: false,
                };
                Vec::new()
            }
            (Touch::Single { dragging, .. }, 2) => {
                let mut events = Vec::new();
                if dragging {
                    events.push(Event::DragEnded);
                }
                self.last_tap = None;
                self.touch = self.start_pinch().unwrap_or(Touch::Finished);
                events
            }
            _ => Vec::new(),
        }
    }

    fn start_pinch(&self) -> Option<Touch> {
        let mut ids = self.fingers.keys().copied();
        let fingers = [ids.next()?, ids.next()?];
        let initial_distance = self.distance_between(fingers)?;
        (initial_distance > 0.0).then_some(Touch::Pinch {
            fingers,
            initial_distance,
        })
    }

    fn finger_moved(&mut self, id: touch::Finger, position: Point) -> Vec<Event> {
        match self.touch {
            Touch::Single { origin, dragging } => {
                let mut dragging = dragging;
                let event = drag_update(&mut dragging, origin, position);
                self.touch = Touch::Single { origin, dragging };
                event.into_iter().collect()
            }
            Touch::Pinch {
                fingers,
                initial_distance,
            } if fingers.contains(&id) => self
                .distance_between(fingers)
                .map(|distance| Event::PinchChanged(distance / initial_distance))
                .into_iter()
                .collect(),
            _ => Vec::new(),
        }
    }

    fn finger_lifted(&mut self, id: touch::Finger, now: Instant) -> Vec<Event> {
        let remaining = self.fingers.len();
        match self.touch {
            Touch::Pinch { fingers, .. } if fingers.contains(&id) => {
                self.touch = if remaining == 0 {
                    Touch::Idle
                } else {
                    Touch::Finished
                };
                vec![Event::PinchEnded]
            }
            Touch::Single { dragging, .. } if remaining == 0 => {
                self.touch = Touch::Idle;
                if dragging {
                    self.last_tap = None;
                    vec![Event::DragEnded]
                } else {
                    self.tap(now).into_iter().collect()
                }
            }
            Touch::Finished if remaining == 0 => {
                self.touch = Touch::Idle;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Registers a tap; the second one within the threshold is a double-tap.
    fn tap(&mut self, now: Instant) -> Option<Event> {
        let is_double_tap = self
            .last_tap
            .is_some_and(|t| now.duration_since(t) < DOUBLE_TAP_THRESHOLD);

        if is_double_tap {
            // Reset to avoid triple-tap
            self.last_tap = None;
            Some(Event::DoubleTap)
        } else {
            self.last_tap = Some(now);
            None
        }
    }

    fn distance_between(&self, [a, b]: [touch::Finger; 2]) -> Option<f32> {
        Some(self.fingers.get(&a)?.distance(*self.fingers.get(&b)?))
    }
}

/// Emits the drag translation once the pointer has left the slop radius.
fn drag_update(dragging: &mut bool, origin: Point, position: Point) -> Option<Event> {
    let translation: Vector = position - origin;
    if !*dragging && translation.x.hypot(translation.y) < DRAG_SLOP {
        return None;
    }
    *dragging = true;
    Some(Event::DragChanged {
        dx: translation.x,
        dy: translation.y,
    })
}

/// Converts a scroll delta into wheel steps (positive when scrolling up).
fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / WHEEL_PIXELS_PER_STEP,
    }
}
