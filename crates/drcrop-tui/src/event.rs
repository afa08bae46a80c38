//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use drcrop_app::input_key::InputKey;
use drcrop_app::message::Message;
use drcrop_core::prelude::*;
use std::time::Duration;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None,
    }
}

/// Convert a crossterm event into a message, if it means anything to us.
///
/// Drag-and-drop of a file arrives as a bracketed paste of its path.
pub fn event_to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Paste(text) => Some(Message::Paste(text)),
        _ => None,
    }
}

/// Poll for terminal events, generating a tick when nothing arrives
pub fn poll(tick_rate: Duration) -> Result<Option<Message>> {
    if event::poll(tick_rate)? {
        let event = event::read()?;
        Ok(event_to_message(event))
    } else {
        // Tick on timeout for the spinner and status expiry
        Ok(Some(Message::Tick))
    }
}
