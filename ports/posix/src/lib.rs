//! Host port for the beacon applications.
//!
//! Supplies what the device firmware would: an input service feeding the
//! runtime queue ([`keyboard`] or [`script`]), a screen ([`display`]) and
//! simulated pins from `beacon_hal::sim`.

pub mod display;
pub mod keyboard;
pub mod script;

pub use display::{HostScreen, LogDisplay, TerminalDisplay};
pub use script::ScriptedInput;

/// Pin labels used for the two host channels
pub const PIN_LABELS: [&str; 2] = ["PB2", "PC3"];
