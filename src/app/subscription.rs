// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resizes are always tracked so the page can size its columns. The
//! Escape listener only exists while some lightbox is open.

use super::Message;
use iced::keyboard::{self, key};
use iced::{event, window, Event, Subscription};

/// Subscriptions for the current page state.
pub fn create_subscription(any_lightbox_open: bool) -> Subscription<Message> {
    let resize = event::listen_with(|event, _status, _window| match event {
        Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    });

    if any_lightbox_open {
        Subscription::batch([resize, escape_subscription()])
    } else {
        resize
    }
}

fn escape_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| {
        if is_escape(&event) {
            Some(Message::EscapePressed)
        } else {
            None
        }
    })
}

fn is_escape(event: &Event) -> bool {
    matches!(
        event,
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        })
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::{Location, Modifiers};

    fn key_press(key: keyboard::Key, code: key::Code) -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: key.clone(),
            modified_key: key,
            physical_key: key::Physical::Code(code),
            location: Location::Standard,
            modifiers: Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn escape_key_is_recognized() {
        assert!(is_escape(&key_press(
            keyboard::Key::Named(key::Named::Escape),
            key::Code::Escape
        )));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(!is_escape(&key_press(
            keyboard::Key::Named(key::Named::Enter),
            key::Code::Enter
        )));
        assert!(!is_escape(&key_press(
            keyboard::Key::Character("q".into()),
            key::Code::KeyQ
        )));
    }
}
