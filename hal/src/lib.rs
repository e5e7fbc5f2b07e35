//! Hardware Abstraction Layer (HAL) for the beacon applications
//!
//! The applications only ever drive two binary outputs, so this crate keeps a
//! single capability: an output pin that can be configured and written. Pin
//! levels are never read back.
//!
//! With the `std` feature enabled the [`sim`] module provides simulated pins
//! that record their configuration and last written level.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod error;
pub mod gpio;

#[cfg(any(test, feature = "std"))]
pub mod sim;

// Re-export commonly used types
pub use error::{HalError, HalResult};
pub use gpio::{Level, OutputConfig, OutputPin, PinMode, Pull, Speed};
