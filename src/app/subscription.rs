// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Mouse, touch, modifier and resize events go to the pointer tracker.
//! Presses already captured by a widget (a control button, the chrome
//! around it) are dropped so they never start a gesture. Uncaptured key
//! presses are mapped to shortcuts.

use super::Message;
use crate::viewer::{ControlKind, Event};
use iced::{event, keyboard, mouse, time, touch, window, Subscription};
use std::time::Duration;

/// Routes native events to the pointer tracker and keyboard shortcuts.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match &event {
        iced::Event::Mouse(mouse::Event::ButtonPressed(_))
        | iced::Event::Touch(touch::Event::FingerPressed { .. }) => match status {
            event::Status::Ignored => Some(Message::RawEvent(event)),
            event::Status::Captured => None,
        },
        iced::Event::Mouse(_)
        | iced::Event::Touch(_)
        | iced::Event::Keyboard(keyboard::Event::ModifiersChanged(_))
        | iced::Event::Window(window::Event::Resized(_)) => Some(Message::RawEvent(event)),
        iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            match status {
                event::Status::Ignored => shortcut(key, *modifiers).map(Message::Viewer),
                event::Status::Captured => None,
            }
        }
        _ => None,
    })
}

/// Maps a key press to a viewer event.
///
/// `+`/`=` zoom in, `-` zooms out, `0` resets, `d` toggles the drawer and
/// `i` the info panel.
#[must_use]
pub fn shortcut(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Event> {
    if modifiers.command() || modifiers.alt() {
        return None;
    }

    match key.as_ref() {
        keyboard::Key::Character("+" | "=") => Some(Event::ControlPressed(ControlKind::ZoomIn)),
        keyboard::Key::Character("-") => Some(Event::ControlPressed(ControlKind::ZoomOut)),
        keyboard::Key::Character("0") => Some(Event::ControlPressed(ControlKind::Reset)),
        keyboard::Key::Character("d" | "D") => Some(Event::DrawerHandleTapped),
        keyboard::Key::Character("i" | "I") => Some(Event::InfoPanelToggled),
        _ => None,
    }
}

/// Periodic tick driving the tweens and the wheel pinch timeout; only runs
/// while something moves.
pub fn create_tick_subscription(animating: bool, interval: Duration) -> Subscription<Message> {
    if animating {
        time::every(interval).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: &str) -> keyboard::Key {
        keyboard::Key::Character(c.into())
    }

    #[test]
    fn zoom_keys_map_to_controls() {
        let none = keyboard::Modifiers::empty();
        assert_eq!(
            shortcut(&key("+"), none),
            Some(Event::ControlPressed(ControlKind::ZoomIn))
        );
        assert_eq!(
            shortcut(&key("="), none),
            Some(Event::ControlPressed(ControlKind::ZoomIn))
        );
        assert_eq!(
            shortcut(&key("-"), none),
            Some(Event::ControlPressed(ControlKind::ZoomOut))
        );
        assert_eq!(
            shortcut(&key("0"), none),
            Some(Event::ControlPressed(ControlKind::Reset))
        );
    }

    #[test]
    fn panel_keys_toggle() {
        let none = keyboard::Modifiers::empty();
        assert_eq!(shortcut(&key("d"), none), Some(Event::DrawerHandleTapped));
        assert_eq!(shortcut(&key("I"), none), Some(Event::InfoPanelToggled));
    }

    #[test]
    fn command_chords_are_left_alone() {
        assert_eq!(shortcut(&key("0"), keyboard::Modifiers::COMMAND), None);
        assert_eq!(shortcut(&key("x"), keyboard::Modifiers::empty()), None);
    }
}
