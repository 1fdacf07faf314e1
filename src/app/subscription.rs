// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only native event the layout reacts to is a window resize, which
//! feeds the width classification.

use super::Message;
use iced::{event, Subscription};

/// Creates the window event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}
