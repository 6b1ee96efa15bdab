// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts only fire for key presses no widget captured, so typing
//! into the language switcher never toggles the theme.

use super::Message;
use crate::ui::shell;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Routes window resizes and shortcut key presses.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Keyboard(keyboard_event) => match status {
            event::Status::Ignored => shortcut(&keyboard_event),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Maps a key press to its shortcut: `Ctrl+D` toggles the theme and `Escape`
/// closes the drawer.
pub fn shortcut(event: &keyboard::Event) -> Option<Message> {
    let keyboard::Event::KeyPressed { key, modifiers, .. } = event else {
        return None;
    };
    shortcut_for_key(key, *modifiers)
}

/// Shortcut bound to `key` pressed with `modifiers`, if any.
pub fn shortcut_for_key(key: &Key, modifiers: Modifiers) -> Option<Message> {
    match key {
        Key::Character(c) if modifiers.command() && c.as_str().eq_ignore_ascii_case("d") => {
            Some(Message::Shell(shell::Message::ToggleTheme))
        }
        Key::Named(Named::Escape) => Some(Message::Shell(shell::Message::CloseDrawer)),
        _ => None,
    }
}

/// Ticks while notifications are visible so they can expire.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_d_toggles_theme() {
        for letter in ["d", "D"] {
            let message = shortcut_for_key(&Key::Character(letter.into()), Modifiers::COMMAND);
            assert!(matches!(
                message,
                Some(Message::Shell(shell::Message::ToggleTheme))
            ));
        }
    }

    #[test]
    fn plain_d_is_not_a_shortcut() {
        assert!(shortcut_for_key(&Key::Character("d".into()), Modifiers::empty()).is_none());
        assert!(shortcut_for_key(&Key::Character("d".into()), Modifiers::SHIFT).is_none());
    }

    #[test]
    fn escape_closes_drawer() {
        let message = shortcut_for_key(&Key::Named(Named::Escape), Modifiers::empty());
        assert!(matches!(
            message,
            Some(Message::Shell(shell::Message::CloseDrawer))
        ));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(shortcut_for_key(&Key::Named(Named::Enter), Modifiers::COMMAND).is_none());
        assert!(shortcut_for_key(&Key::Character("k".into()), Modifiers::COMMAND).is_none());
        assert!(shortcut(&keyboard::Event::ModifiersChanged(Modifiers::COMMAND)).is_none());
    }
}
