#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![forbid(unsafe_code)]

//! # Beacon Core
//!
//! Domain logic for two handheld GPIO applications sharing one runtime:
//!
//! - [`PoliceLight`] cycles blink patterns on the red and blue channels.
//! - [`Flashlight`] toggles each channel on its own.
//!
//! Everything here is hardware independent. Pins are reached through the
//! [`OutputPin`](beacon_hal::OutputPin) capability wrapped in an [`Outputs`]
//! bank, time is an explicit [`Tick`] argument, and screens are plain
//! [`Frame`] values.

use core::fmt;

pub mod app;
pub mod events;
pub mod flashlight;
pub mod frame;
pub mod outputs;
pub mod pattern;
pub mod police;
pub mod time;

pub use app::Application;
pub use events::*;
pub use flashlight::Flashlight;
pub use frame::{BlinkIndicator, Frame, Indicator};
pub use outputs::{Channel, Levels, Outputs};
pub use pattern::{Pattern, PatternEngine, PATTERN_COUNT};
pub use police::PoliceLight;
pub use time::*;

#[cfg(test)]
mod tests;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type used throughout the core crate
pub type CoreResult<T> = Result<T, CoreError>;

/// Error types for core operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// Key name not recognised
    UnknownKey,
    /// Pattern index outside `0..PATTERN_COUNT`
    PatternOutOfRange(usize),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::UnknownKey => write!(f, "Unknown key name"),
            CoreError::PatternOutOfRange(index) => {
                write!(f, "Pattern index {} out of range", index)
            }
        }
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for CoreError {}

#[cfg(feature = "defmt")]
impl defmt::Format for CoreError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            CoreError::UnknownKey => defmt::write!(fmt, "UnknownKey"),
            CoreError::PatternOutOfRange(index) => {
                defmt::write!(fmt, "PatternOutOfRange({})", index)
            }
        }
    }
}
