//! Millisecond time base
//!
//! The device clock is a free-running 32-bit millisecond counter. It wraps
//! after roughly 49.7 days, so elapsed time is always computed with wrapping
//! subtraction.

use core::fmt;

/// Wrapping millisecond timestamp.
///
/// Ticks have no ordering; compare them through [`Tick::elapsed_since`] or
/// [`Tick::has_elapsed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tick(u32);

impl Tick {
    /// Zero tick
    pub const ZERO: Self = Self(0);

    /// Create a tick from a raw millisecond count
    pub const fn new(millis: u32) -> Self {
        Self(millis)
    }

    /// Get the raw millisecond value
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Time elapsed since `previous`, tolerating counter wrap-around
    pub const fn elapsed_since(self, previous: Tick) -> Millis {
        Millis(self.0.wrapping_sub(previous.0))
    }

    /// Returns the tick `span` later, wrapping at `u32::MAX`
    pub const fn wrapping_add(self, span: Millis) -> Tick {
        Tick(self.0.wrapping_add(span.0))
    }

    /// Whether at least `interval` has passed since `since`
    pub const fn has_elapsed(self, since: Tick, interval: Millis) -> bool {
        self.elapsed_since(since).0 >= interval.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick:{}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Tick {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "tick:{}", self.0);
    }
}

/// Span of time in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Millis(u32);

impl Millis {
    pub const fn new(millis: u32) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_handles_wrap() {
        let before = Tick::new(u32::MAX - 99);
        let after = before.wrapping_add(Millis::new(250));
        assert_eq!(after.raw(), 150);
        assert_eq!(after.elapsed_since(before), Millis::new(250));
        assert!(after.has_elapsed(before, Millis::new(250)));
        assert!(!after.has_elapsed(before, Millis::new(251)));
    }

    #[test]
    fn has_elapsed_is_inclusive() {
        let start = Tick::new(1_000);
        assert!(!Tick::new(1_249).has_elapsed(start, Millis::new(250)));
        assert!(Tick::new(1_250).has_elapsed(start, Millis::new(250)));
    }

    #[test]
    fn raw_later_tick_can_be_numerically_smaller() {
        let earlier = Tick::new(u32::MAX - 4);
        let later = Tick::new(5);
        assert!(later.raw() < earlier.raw());
        assert_eq!(later.elapsed_since(earlier), Millis::new(10));
        assert!(later.has_elapsed(earlier, Millis::new(10)));
        assert_eq!(earlier.elapsed_since(later), Millis::new(u32::MAX - 9));
    }
}
