//! The two-channel output bank

use beacon_hal::{Level, OutputConfig, OutputPin};

/// One of the two driven channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Channel {
    /// Red / PB2
    #[default]
    A,
    /// Blue / PC3
    B,
}

impl Channel {
    pub const ALL: [Channel; 2] = [Channel::A, Channel::B];
    pub const COUNT: usize = 2;

    pub const fn index(self) -> usize {
        match self {
            Channel::A => 0,
            Channel::B => 1,
        }
    }

    /// The other channel; with two channels next and previous coincide.
    pub const fn other(self) -> Channel {
        match self {
            Channel::A => Channel::B,
            Channel::B => Channel::A,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Channel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Channel::A => defmt::write!(fmt, "A"),
            Channel::B => defmt::write!(fmt, "B"),
        }
    }
}

/// Logical levels for both channels, `true` meaning energized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Levels {
    pub a: bool,
    pub b: bool,
}

impl Levels {
    pub const OFF: Levels = Levels { a: false, b: false };

    pub const fn new(a: bool, b: bool) -> Self {
        Self { a, b }
    }

    pub const fn is_off(self) -> bool {
        !self.a && !self.b
    }
}

/// Pin pair driven by an application.
///
/// Pin failures are logged and otherwise ignored: the applications treat
/// output writes as infallible.
pub struct Outputs<P> {
    pins: [P; 2],
}

impl<P: OutputPin> Outputs<P> {
    pub fn new(a: P, b: P) -> Self {
        Self { pins: [a, b] }
    }

    pub fn pin(&self, channel: Channel) -> &P {
        &self.pins[channel.index()]
    }

    /// (Re)configures `channel` as a push-pull output. Idempotent.
    pub fn init(&mut self, channel: Channel) {
        let pin = &mut self.pins[channel.index()];
        if let Err(err) = pin.configure(OutputConfig::PUSH_PULL_FAST) {
            log::warn!("configure {} failed: {}", pin.label(), err);
        }
    }

    pub fn write(&mut self, channel: Channel, on: bool) {
        let pin = &mut self.pins[channel.index()];
        if let Err(err) = pin.write(Level::from(on)) {
            log::warn!("write {} failed: {}", pin.label(), err);
        }
    }

    pub fn drive(&mut self, levels: Levels) {
        self.write(Channel::A, levels.a);
        self.write(Channel::B, levels.b);
    }

    /// Configures both pins and drives them low.
    pub fn force_off(&mut self) {
        for channel in Channel::ALL {
            self.init(channel);
        }
        self.drive(Levels::OFF);
    }
}
