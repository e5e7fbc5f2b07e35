//! # beacon-rt
//!
//! Hosted runtime for the beacon applications. One consumer thread runs a
//! cooperative poll loop:
//!
//! 1. wait up to the poll timeout for one input event and apply it under the
//!    state lock,
//! 2. re-evaluate the outputs under the same lock (a separate critical
//!    section),
//! 3. build a frame and hand it to the [`Screen`].
//!
//! ## Module Overview
//! - [`queue`]  – bounded blocking input queue and its producer handle.
//! - [`sync`]   – lock pool and the state mutex allocated from it.
//! - [`clock`]  – millisecond time sources.
//! - [`config`] – runtime configuration and builder.
//! - [`runner`] – the poll loop itself.

pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod queue;
pub mod runner;
pub mod sync;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{RuntimeConfig, RuntimeConfigBuilder};
pub use display::Screen;
pub use error::{ExitStatus, QueueError, RuntimeError};
pub use queue::{InputQueue, InputSender, MessageQueue, QUEUE_DEPTH};
pub use runner::Runner;
pub use sync::{LockPool, Mutex};

#[cfg(test)]
mod tests;
