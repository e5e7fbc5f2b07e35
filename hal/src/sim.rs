//! Simulated output pins for host runs and tests.
//!
//! A [`SimPin`] behaves like a real push-pull output: writes before the first
//! `configure` are rejected. Every pin hands out [`PinProbe`]s that observe
//! the pin from another owner (the terminal renderer, a test) without being
//! able to drive it.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::{HalError, HalResult};
use crate::gpio::{Level, OutputConfig, OutputPin};

#[derive(Debug, Default)]
struct SimPinState {
    configured: AtomicBool,
    high: AtomicBool,
    configures: AtomicUsize,
    writes: AtomicUsize,
    rising_edges: AtomicUsize,
}

/// Simulated output pin.
#[derive(Debug)]
pub struct SimPin {
    label: String,
    state: Arc<SimPinState>,
}

impl SimPin {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: Arc::new(SimPinState::default()),
        }
    }

    /// Returns a read-only view of this pin.
    pub fn probe(&self) -> PinProbe {
        PinProbe {
            label: self.label.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl OutputPin for SimPin {
    fn configure(&mut self, config: OutputConfig) -> HalResult<()> {
        log::trace!("{}: configure {:?}", self.label, config);
        self.state.configured.store(true, Ordering::SeqCst);
        self.state.configures.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn write(&mut self, level: Level) -> HalResult<()> {
        if !self.state.configured.load(Ordering::SeqCst) {
            return Err(HalError::NotConfigured);
        }
        let was_high = self.state.high.swap(level.is_high(), Ordering::SeqCst);
        if !was_high && level.is_high() {
            self.state.rising_edges.fetch_add(1, Ordering::SeqCst);
        }
        self.state.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Observer handle for a [`SimPin`].
#[derive(Debug, Clone)]
pub struct PinProbe {
    label: String,
    state: Arc<SimPinState>,
}

impl PinProbe {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn level(&self) -> Level {
        Level::from(self.state.high.load(Ordering::SeqCst))
    }

    pub fn is_high(&self) -> bool {
        self.level().is_high()
    }

    pub fn is_configured(&self) -> bool {
        self.state.configured.load(Ordering::SeqCst)
    }

    pub fn configure_count(&self) -> usize {
        self.state.configures.load(Ordering::SeqCst)
    }

    pub fn write_count(&self) -> usize {
        self.state.writes.load(Ordering::SeqCst)
    }

    /// Number of low-to-high transitions seen so far.
    pub fn rising_edges(&self) -> usize {
        self.state.rising_edges.load(Ordering::SeqCst)
    }
}
