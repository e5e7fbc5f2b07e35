//! Police light: pattern blinker on the red and blue channels

use beacon_hal::OutputPin;

use crate::app::Application;
use crate::events::{Command, Control};
use crate::frame::{BlinkIndicator, Frame, Indicator};
use crate::outputs::{Levels, Outputs};
use crate::pattern::{Pattern, PatternEngine};
use crate::time::Tick;

/// Pattern blinker state.
///
/// While idle, both outputs are forced off on every tick and the pattern is
/// not evaluated. Any change of activation or pattern restarts the phase and
/// clears the outputs before the next evaluation.
#[derive(Debug, Clone)]
pub struct PoliceLight {
    active: bool,
    engine: PatternEngine,
    blink: BlinkIndicator,
}

impl PoliceLight {
    pub const fn new(now: Tick) -> Self {
        Self::with_pattern(Pattern::RedBlue, now)
    }

    pub const fn with_pattern(pattern: Pattern, now: Tick) -> Self {
        Self {
            active: false,
            engine: PatternEngine::new(pattern, now),
            blink: BlinkIndicator::new(now),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pattern(&self) -> Pattern {
        self.engine.pattern()
    }

    pub fn step(&self) -> u8 {
        self.engine.step()
    }

    /// Levels the outputs were last driven to by the pattern.
    pub fn levels(&self) -> Levels {
        if self.active {
            self.engine.levels()
        } else {
            Levels::OFF
        }
    }

    fn select<P: OutputPin>(&mut self, pattern: Pattern, outputs: &mut Outputs<P>) {
        self.engine.select(pattern);
        outputs.force_off();
        log::info!("pattern: {}", pattern);
    }
}

impl Application for PoliceLight {
    const NAME: &'static str = "police-light";

    fn on_start<P: OutputPin>(&mut self, outputs: &mut Outputs<P>, now: Tick) {
        outputs.force_off();
        self.engine.restart(now);
    }

    fn on_command<P: OutputPin>(
        &mut self,
        command: Command,
        outputs: &mut Outputs<P>,
        now: Tick,
    ) -> Control {
        match command {
            Command::Confirm => {
                self.active = !self.active;
                self.engine.restart(now);
                outputs.force_off();
                log::info!(
                    "{} {}",
                    self.engine.pattern(),
                    if self.active { "running" } else { "stopped" }
                );
            }
            Command::Next => self.select(self.engine.pattern().next(), outputs),
            Command::Previous => self.select(self.engine.pattern().previous(), outputs),
            Command::Back => return Control::Exit,
        }
        Control::Continue
    }

    fn on_tick<P: OutputPin>(&mut self, outputs: &mut Outputs<P>, now: Tick) {
        if self.active {
            let levels = self.engine.advance(now);
            outputs.drive(levels);
        } else {
            outputs.force_off();
        }
    }

    fn on_exit<P: OutputPin>(&mut self, outputs: &mut Outputs<P>) {
        outputs.force_off();
    }

    fn frame(&mut self, now: Tick) -> Frame {
        let indicator = if self.active && self.blink.update(now) {
            Indicator::On
        } else {
            Indicator::Off
        };
        let mut frame = Frame::new(self.engine.pattern().name()).with_indicator(indicator);
        frame.push_line(format_args!(
            "{}",
            if self.active { "RUNNING" } else { "IDLE" }
        ));
        frame.push_line(format_args!("<  >  pattern"));
        frame.push_line(format_args!("OK {}", if self.active { "stop" } else { "start" }));
        frame
    }
}
