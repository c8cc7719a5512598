// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::ui::animation::{Frame, Presentation};
use crate::ui::page_image;
use crate::ui::pointer;
use crate::viewer::{self, Viewer};
use iced::{window, Point, Rectangle, Size, Task, Vector};
use std::time::Instant;

/// Mutable application state touched by the update loop.
pub struct UpdateContext<'a> {
    pub viewer: &'a mut Viewer,
    pub presentation: &'a mut Presentation,
    pub pointer: &'a mut pointer::State,
    /// Clock the presentation is evaluated at.
    pub now: &'a mut Instant,
    /// Window size, tracked from resize events.
    pub viewport: &'a mut Size,
    /// Aspect ratio of the current page image, `None` when it is missing.
    pub aspect_ratio: Option<f32>,
}

/// Feeds one event to the viewer and starts the matching animation.
pub fn handle_viewer_event(
    ctx: &mut UpdateContext<'_>,
    event: viewer::Event,
    now: Instant,
) -> Task<Message> {
    *ctx.now = now;
    let transition = ctx.viewer.handle(event);
    if transition.changed {
        ctx.presentation
            .retarget(&ctx.viewer.snapshot(), transition.hint, now);
    }
    Task::none()
}

/// Runs a raw window, mouse, touch or modifier event through the pointer
/// tracker. Gestures may only start over the image as currently displayed.
pub fn handle_raw_event(
    ctx: &mut UpdateContext<'_>,
    event: &iced::Event,
    now: Instant,
) -> Task<Message> {
    *ctx.now = now;
    if let iced::Event::Window(window::Event::Resized(size)) = event {
        *ctx.viewport = *size;
        return Task::none();
    }

    let area = gesture_area(
        *ctx.viewport,
        ctx.aspect_ratio,
        ctx.presentation.frame(now),
    );
    ctx.pointer.set_hit_area(area);

    for gesture in ctx.pointer.handle(event, now) {
        let _ = handle_viewer_event(ctx, gesture, now);
    }
    Task::none()
}

/// Advances the clock and ends a wheel pinch gone idle.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    *ctx.now = now;
    for gesture in ctx.pointer.poll(now) {
        let _ = handle_viewer_event(ctx, gesture, now);
    }
    Task::none()
}

/// On-screen rectangle of the page image, clipped to the window. The whole
/// window when the page has no image.
fn gesture_area(viewport: Size, aspect_ratio: Option<f32>, frame: Frame) -> Rectangle {
    let pane = Rectangle::new(Point::ORIGIN, viewport);
    let Some(aspect_ratio) = aspect_ratio else {
        return pane;
    };

    let image = page_image::image_bounds(
        pane,
        aspect_ratio,
        frame.scale,
        Vector::new(frame.offset_x, frame.offset_y),
    );
    image
        .intersection(&pane)
        .unwrap_or(Rectangle::new(pane.center(), Size::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, PageId};
    use crate::config::{SPRING_DURATION, WHEEL_PINCH_IDLE, WHEEL_PINCH_STEP};
    use crate::viewer::{Offset, TransitionHint};
    use iced::{keyboard, mouse};
    use std::time::Duration;

    struct Harness {
        viewer: Viewer,
        presentation: Presentation,
        pointer: pointer::State,
        now: Instant,
        viewport: Size,
        aspect_ratio: Option<f32>,
    }

    impl Harness {
        /// 480x720 window showing a square image: at natural size the image
        /// spans x 16..464, y 136..584.
        fn new() -> Self {
            let viewer = Viewer::new(Catalog::builtin());
            let now = Instant::now();
            Self {
                presentation: Presentation::new(&viewer.snapshot(), now),
                viewer,
                pointer: pointer::State::default(),
                now,
                viewport: Size::new(480.0, 720.0),
                aspect_ratio: Some(1.0),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                viewer: &mut self.viewer,
                presentation: &mut self.presentation,
                pointer: &mut self.pointer,
                now: &mut self.now,
                viewport: &mut self.viewport,
                aspect_ratio: self.aspect_ratio,
            }
        }

        fn raw(&mut self, event: iced::Event, at: Instant) {
            let _ = handle_raw_event(&mut self.ctx(), &event, at);
        }

        fn double_click(&mut self, x: f32, y: f32, at: Instant) {
            self.raw(moved(x, y), at);
            for at in [at, at + Duration::from_millis(120)] {
                self.raw(pressed(), at);
                self.raw(released(), at);
            }
        }
    }

    fn moved(x: f32, y: f32) -> iced::Event {
        iced::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(x, y),
        })
    }

    fn pressed() -> iced::Event {
        iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    }

    fn released() -> iced::Event {
        iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
    }

    fn ctrl(held: bool) -> iced::Event {
        let modifiers = if held {
            keyboard::Modifiers::CTRL
        } else {
            keyboard::Modifiers::empty()
        };
        iced::Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers))
    }

    fn wheel(lines: f32) -> iced::Event {
        iced::Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: lines },
        })
    }

    #[test]
    fn mount_starts_entry_fade_in() {
        let mut harness = Harness::new();
        let start = harness.now;
        let _ = handle_viewer_event(&mut harness.ctx(), viewer::Event::Mount, start);

        assert!(harness.viewer.snapshot().entry_animation_done);
        assert!(harness.presentation.is_animating(start));
        let end = start + TransitionHint::linear().duration();
        assert_eq!(harness.presentation.frame(end).opacity, 1.0);
    }

    #[test]
    fn double_click_on_image_zooms_to_max() {
        let mut harness = Harness::new();
        let start = harness.now;

        harness.double_click(240.0, 360.0, start);

        assert_eq!(harness.viewer.snapshot().scale, 5.0);
    }

    #[test]
    fn double_click_below_image_leaves_scale() {
        let mut harness = Harness::new();
        let start = harness.now;

        // Where the control bar sits at the bottom of the window.
        harness.double_click(140.0, 700.0, start);

        assert_eq!(harness.viewer.snapshot().scale, 1.0);
    }

    #[test]
    fn zoomed_image_accepts_gestures_across_window() {
        let mut harness = Harness::new();
        let start = harness.now;
        harness.double_click(240.0, 360.0, start);
        assert_eq!(harness.viewer.snapshot().scale, 5.0);

        let settled = start + SPRING_DURATION * 4;
        harness.double_click(10.0, 10.0, settled);
        assert_eq!(harness.viewer.snapshot().scale, 1.0);
    }

    #[test]
    fn resize_moves_hit_area() {
        let mut harness = Harness::new();
        let start = harness.now;
        let resized = iced::Event::Window(window::Event::Resized(Size::new(1000.0, 300.0)));
        harness.raw(resized, start);
        assert_eq!(harness.viewport, Size::new(1000.0, 300.0));

        // The square image now spans x 366..634.
        harness.double_click(240.0, 150.0, start);
        assert_eq!(harness.viewer.snapshot().scale, 1.0);

        harness.double_click(500.0, 150.0, start + Duration::from_secs(1));
        assert_eq!(harness.viewer.snapshot().scale, 5.0);
    }

    #[test]
    fn missing_image_accepts_gestures_anywhere() {
        let mut harness = Harness::new();
        harness.aspect_ratio = None;
        let start = harness.now;

        harness.double_click(140.0, 700.0, start);
        assert_eq!(harness.viewer.snapshot().scale, 5.0);
    }

    #[test]
    fn mouse_drag_at_natural_size_snaps_back() {
        let mut harness = Harness::new();
        let now = harness.now;

        harness.raw(moved(200.0, 300.0), now);
        harness.raw(pressed(), now);
        harness.raw(moved(230.0, 340.0), now);
        assert_eq!(harness.viewer.snapshot().offset, Offset::new(30.0, 40.0));

        harness.raw(released(), now);
        assert_eq!(harness.viewer.snapshot().offset, Offset::ZERO);
    }

    #[test]
    fn ctrl_wheel_zooms_until_ctrl_released() {
        let mut harness = Harness::new();
        let now = harness.now;

        harness.raw(moved(240.0, 360.0), now);
        harness.raw(ctrl(true), now);
        harness.raw(wheel(2.0), now);
        let expected = WHEEL_PINCH_STEP.powf(2.0);
        assert!((harness.viewer.snapshot().scale - expected).abs() < 1e-5);

        harness.raw(ctrl(false), now);
        assert!(!harness.pointer.is_gesturing());
        assert!((harness.viewer.snapshot().scale - expected).abs() < 1e-5);
    }

    #[test]
    fn ctrl_wheel_down_at_natural_size_stays_reset() {
        let mut harness = Harness::new();
        let now = harness.now;

        harness.raw(moved(240.0, 360.0), now);
        harness.raw(ctrl(true), now);
        harness.raw(wheel(-1.0), now);
        assert_eq!(harness.viewer.snapshot().scale, 1.0);
        assert_eq!(harness.viewer.snapshot().offset, Offset::ZERO);
    }

    #[test]
    fn tick_ends_idle_wheel_pinch() {
        let mut harness = Harness::new();
        let now = harness.now;

        harness.raw(moved(240.0, 360.0), now);
        harness.raw(ctrl(true), now);
        harness.raw(wheel(1.0), now);
        assert!(harness.pointer.is_gesturing());

        let _ = handle_tick(&mut harness.ctx(), now + WHEEL_PINCH_IDLE);
        assert!(!harness.pointer.is_gesturing());
    }

    #[test]
    fn unchanged_event_does_not_restart_animation() {
        let mut harness = Harness::new();
        let now = harness.now;
        let unknown = viewer::Event::ThumbnailSelected(PageId::new(99));

        let _ = handle_viewer_event(&mut harness.ctx(), unknown, now);
        assert!(!harness.presentation.is_animating(now));
    }

    #[test]
    fn tick_advances_clock() {
        let mut harness = Harness::new();
        let later = harness.now + Duration::from_millis(16);
        let _ = handle_tick(&mut harness.ctx(), later);
        assert_eq!(harness.now, later);
    }
}
