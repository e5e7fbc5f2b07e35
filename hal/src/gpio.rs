//! GPIO output abstraction

use crate::error::HalResult;

/// Output driver modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    /// Output (push-pull)
    OutputPushPull,
}

/// Internal pull resistor selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull {
    None,
}

/// Output slew rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    VeryHigh,
}

/// Complete output configuration applied by [`OutputPin::configure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub mode: PinMode,
    pub pull: Pull,
    pub speed: Speed,
}

impl OutputConfig {
    /// Push-pull, no pull resistor, very high speed.
    ///
    /// This is how both beacon channels are driven.
    pub const PUSH_PULL_FAST: Self = Self {
        mode: PinMode::OutputPushPull,
        pull: Pull::None,
        speed: Speed::VeryHigh,
    };
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::PUSH_PULL_FAST
    }
}

/// GPIO pin levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    /// Low level (0V)
    #[default]
    Low,
    /// High level (VCC)
    High,
}

impl Level {
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

impl From<bool> for Level {
    #[inline]
    fn from(on: bool) -> Self {
        if on {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl From<Level> for bool {
    #[inline]
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

/// Write-only output pin.
///
/// `configure` may be called any number of times; re-applying the same
/// configuration must leave the current level untouched.
pub trait OutputPin: Send {
    /// Configure the pin as a driven output.
    fn configure(&mut self, config: OutputConfig) -> HalResult<()>;

    /// Drive the pin to `level`.
    fn write(&mut self, level: Level) -> HalResult<()>;

    /// Human-readable pin name, e.g. `"PB2"`.
    fn label(&self) -> &str;
}

impl<P: OutputPin + ?Sized> OutputPin for &mut P {
    fn configure(&mut self, config: OutputConfig) -> HalResult<()> {
        (**self).configure(config)
    }

    fn write(&mut self, level: Level) -> HalResult<()> {
        (**self).write(level)
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}
