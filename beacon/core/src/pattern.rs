//! Blink patterns and the engine that steps them
//!
//! Each pattern is a pure function of its phase counter (`step`). The engine
//! owns the counter and the timestamp of the last transition; once the
//! pattern's interval has elapsed it advances the counter exactly once and
//! re-anchors the timestamp at `now`, so a late tick never produces a burst of
//! catch-up steps.

use core::fmt;

use crate::outputs::Levels;
use crate::time::{Millis, Tick};
use crate::{CoreError, CoreResult};

/// Number of selectable patterns
pub const PATTERN_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pattern {
    /// Red and blue strictly alternate every 250 ms.
    #[default]
    RedBlue,
    /// Red, gap, blue, gap at 250 ms per phase.
    AltBlink,
    /// Both channels flash together every 500 ms.
    PurpleFlash,
}

impl Pattern {
    pub const ALL: [Pattern; PATTERN_COUNT] =
        [Pattern::RedBlue, Pattern::AltBlink, Pattern::PurpleFlash];

    pub const fn index(self) -> usize {
        match self {
            Pattern::RedBlue => 0,
            Pattern::AltBlink => 1,
            Pattern::PurpleFlash => 2,
        }
    }

    pub fn from_index(index: usize) -> CoreResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(CoreError::PatternOutOfRange(index))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Pattern::RedBlue => "Red/Blue",
            Pattern::AltBlink => "Alt Blink",
            Pattern::PurpleFlash => "Purple Flash",
        }
    }

    /// Time between two steps
    pub const fn interval(self) -> Millis {
        match self {
            Pattern::RedBlue | Pattern::AltBlink => Millis::new(250),
            Pattern::PurpleFlash => Millis::new(500),
        }
    }

    /// Number of distinct steps before the pattern repeats
    pub const fn period(self) -> u8 {
        match self {
            Pattern::RedBlue | Pattern::PurpleFlash => 2,
            Pattern::AltBlink => 4,
        }
    }

    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % PATTERN_COUNT]
    }

    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + PATTERN_COUNT - 1) % PATTERN_COUNT]
    }

    /// Output levels shown while the pattern sits at `step`.
    pub const fn levels(self, step: u8) -> Levels {
        match self {
            Pattern::RedBlue => Levels::new(step == 1, step == 0),
            Pattern::AltBlink => Levels::new(step == 0, step == 2),
            Pattern::PurpleFlash => Levels::new(step == 1, step == 1),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Pattern {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.name());
    }
}

/// Phase tracking for the selected pattern.
#[derive(Debug, Clone)]
pub struct PatternEngine {
    pattern: Pattern,
    step: u8,
    last_transition: Tick,
    levels: Levels,
}

impl PatternEngine {
    pub const fn new(pattern: Pattern, now: Tick) -> Self {
        Self {
            pattern,
            step: 0,
            last_transition: now,
            levels: Levels::OFF,
        }
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn last_transition(&self) -> Tick {
        self.last_transition
    }

    /// Levels most recently produced by [`advance`](Self::advance).
    pub fn levels(&self) -> Levels {
        self.levels
    }

    /// Switches pattern. The phase restarts but the transition timestamp is
    /// kept, so the new pattern's first step lands on the running cadence.
    pub fn select(&mut self, pattern: Pattern) {
        self.pattern = pattern;
        self.step = 0;
        self.levels = Levels::OFF;
    }

    /// Restarts the current pattern from phase zero at `now`.
    pub fn restart(&mut self, now: Tick) {
        self.step = 0;
        self.levels = Levels::OFF;
        self.last_transition = now;
    }

    /// Steps the pattern if its interval has elapsed and returns the levels
    /// to drive. Outputs stay off between a reset and the first step.
    pub fn advance(&mut self, now: Tick) -> Levels {
        if now.has_elapsed(self.last_transition, self.pattern.interval()) {
            self.last_transition = now;
            self.step = (self.step + 1) % self.pattern.period();
            self.levels = self.pattern.levels(self.step);
            log::trace!(
                "{} step {} -> a={} b={}",
                self.pattern,
                self.step,
                self.levels.a,
                self.levels.b
            );
        }
        self.levels
    }
}
