//! Keyboard input source
//!
//! Reads the terminal in raw mode and posts key events to the runtime queue
//! until the queue is closed.

use std::io;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use beacon_core::{InputEvent, InputKind, Key};
use beacon_rt::InputSender;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Start the keyboard listener thread
pub fn spawn(input: InputSender) -> JoinHandle<io::Result<()>> {
    thread::spawn(move || {
        let result = keyboard_thread(&input);
        if let Err(err) = &result {
            log::error!("keyboard thread error: {}", err);
        }
        result
    })
}

fn keyboard_thread(input: &InputSender) -> io::Result<()> {
    terminal::enable_raw_mode()?;

    let result = loop {
        if input.is_closed() {
            break Ok(());
        }
        match event::poll(POLL_INTERVAL) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(err) => break Err(err),
        }
        let key_event = match event::read() {
            Ok(Event::Key(key_event)) => key_event,
            Ok(_) => continue,
            Err(err) => break Err(err),
        };
        if post(input, key_event).is_err() {
            break Ok(());
        }
    };

    terminal::disable_raw_mode()?;
    result
}

/// Terminals rarely report releases, so a press is posted as a tap.
fn post(input: &InputSender, key_event: KeyEvent) -> Result<(), beacon_rt::QueueError> {
    let Some(key) = map_key(&key_event) else {
        return Ok(());
    };
    match key_event.kind {
        KeyEventKind::Press => input.tap(key),
        KeyEventKind::Repeat => input.send(InputEvent::new(key, InputKind::Repeat)),
        KeyEventKind::Release => input.send(InputEvent::release(key)),
    }
}

/// Map a terminal key to a device key
pub fn map_key(key: &KeyEvent) -> Option<Key> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Key::Back);
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(Key::Ok),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => Some(Key::Back),
        _ => None,
    }
}

/// Display keyboard help
pub fn help() -> &'static str {
    "Enter/Space: OK   Left/Right: select   Esc/Backspace/q: back"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn maps_navigation_keys() {
        assert_eq!(map_key(&plain(KeyCode::Enter)), Some(Key::Ok));
        assert_eq!(map_key(&plain(KeyCode::Char(' '))), Some(Key::Ok));
        assert_eq!(map_key(&plain(KeyCode::Left)), Some(Key::Left));
        assert_eq!(map_key(&plain(KeyCode::Right)), Some(Key::Right));
        assert_eq!(map_key(&plain(KeyCode::Up)), Some(Key::Up));
        assert_eq!(map_key(&plain(KeyCode::Esc)), Some(Key::Back));
        assert_eq!(map_key(&plain(KeyCode::Char('q'))), Some(Key::Back));
    }

    #[test]
    fn ctrl_c_means_back() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&ctrl_c), Some(Key::Back));
        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&ctrl_x), None);
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(map_key(&plain(KeyCode::Char('z'))), None);
        assert_eq!(map_key(&plain(KeyCode::Tab)), None);
    }
}
