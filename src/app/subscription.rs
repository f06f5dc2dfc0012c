// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::FRAME_TICK_MS;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Routes the Escape key to the alert broadcast.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    })
}

/// Ticks the alert clock while alerts are on screen.
pub fn create_tick_subscription(has_alerts: bool) -> Subscription<Message> {
    if has_alerts {
        time::every(Duration::from_millis(FRAME_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
