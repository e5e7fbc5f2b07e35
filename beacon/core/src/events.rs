//! Input events and the commands they map to

use core::fmt;
use core::str::FromStr;

use crate::CoreError;

/// Physical keys on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Right,
    Left,
    Ok,
    Back,
}

impl Key {
    pub const ALL: [Key; 6] = [
        Key::Up,
        Key::Down,
        Key::Right,
        Key::Left,
        Key::Ok,
        Key::Back,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Key::Up => "up",
            Key::Down => "down",
            Key::Right => "right",
            Key::Left => "left",
            Key::Ok => "ok",
            Key::Back => "back",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Key {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Key::ALL
            .iter()
            .copied()
            .find(|key| key.name().eq_ignore_ascii_case(s))
            .ok_or(CoreError::UnknownKey)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Key {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.name());
    }
}

/// Phase of a key interaction as reported by the input service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Key went down
    Press,
    /// Key went up
    Release,
    /// Press and release within the short-press window
    Short,
    /// Key held past the long-press threshold
    Long,
    /// Auto-repeat while held
    Repeat,
}

/// One event delivered by the input service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub kind: InputKind,
}

impl InputEvent {
    pub const fn new(key: Key, kind: InputKind) -> Self {
        Self { key, kind }
    }

    pub const fn press(key: Key) -> Self {
        Self::new(key, InputKind::Press)
    }

    pub const fn release(key: Key) -> Self {
        Self::new(key, InputKind::Release)
    }

    pub const fn is_press(&self) -> bool {
        matches!(self.kind, InputKind::Press)
    }
}

/// Application-level command derived from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Confirm,
    Next,
    Previous,
    Back,
}

impl Command {
    /// Maps a raw input event to a command.
    ///
    /// Only press edges produce commands; `Up` and `Down` are unused.
    pub const fn from_input(event: InputEvent) -> Option<Self> {
        if !event.is_press() {
            return None;
        }
        match event.key {
            Key::Ok => Some(Command::Confirm),
            Key::Right => Some(Command::Next),
            Key::Left => Some(Command::Previous),
            Key::Back => Some(Command::Back),
            Key::Up | Key::Down => None,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Command {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Command::Confirm => defmt::write!(fmt, "Confirm"),
            Command::Next => defmt::write!(fmt, "Next"),
            Command::Previous => defmt::write!(fmt, "Previous"),
            Command::Back => defmt::write!(fmt, "Back"),
        }
    }
}

/// Whether the loop keeps running after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

impl Control {
    pub const fn is_exit(self) -> bool {
        matches!(self, Control::Exit)
    }
}
