//! Millisecond time sources

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Instant;

use beacon_core::{Millis, Tick};

/// Source of the device's millisecond tick.
pub trait Clock: Send {
    fn now(&self) -> Tick;
}

/// Wall-clock ticks counted from construction.
///
/// The count is truncated to 32 bits and wraps like the device counter.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Tick {
        Tick::new(self.origin.elapsed().as_millis() as u32)
    }
}

/// Clock advanced by hand. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    millis: Arc<AtomicU32>,
}

impl ManualClock {
    pub fn new(start: Tick) -> Self {
        Self {
            millis: Arc::new(AtomicU32::new(start.raw())),
        }
    }

    pub fn set(&self, now: Tick) {
        self.millis.store(now.raw(), Ordering::SeqCst);
    }

    pub fn advance(&self, span: Millis) -> Tick {
        let now = self.now().wrapping_add(span);
        self.set(now);
        now
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Tick {
        Tick::new(self.millis.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(Tick::new(u32::MAX));
        let view = clock.clone();
        assert_eq!(clock.advance(Millis::new(2)), Tick::new(1));
        assert_eq!(view.now(), Tick::new(1));
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let first = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(clock.now().elapsed_since(first) >= Millis::new(5));
    }
}
