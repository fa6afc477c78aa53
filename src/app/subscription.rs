// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window events (file drops, close requests) are routed to the
//! update loop; whether a drop is accepted is decided there, from the wizard
//! step.

use super::config::{BACKDROP_FRAME_MS, NOTIFICATION_TICK_MS};
use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes window events the application reacts to.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        _ => None,
    })
}

/// Creates the periodic tick driving the backdrop and toast auto-dismiss.
///
/// Animation frames run at the backdrop frame rate; when only toasts are
/// pending a slower tick is enough.
pub fn create_tick_subscription(animating: bool, has_notifications: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(BACKDROP_FRAME_MS)).map(Message::Tick)
    } else if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
