//! Emergency flashlight: per-channel on/off toggle

use beacon_hal::OutputPin;

use crate::app::Application;
use crate::events::{Command, Control};
use crate::frame::Frame;
use crate::outputs::{Channel, Outputs};
use crate::time::Tick;

/// Pin names shown for each channel
pub const CHANNEL_LABELS: [&str; Channel::COUNT] = ["B2", "C3"];

/// Two independent outputs and a selection cursor.
///
/// Moving the cursor never changes a level. Leaving the application keeps
/// whatever levels were last set.
#[derive(Debug, Clone, Default)]
pub struct Flashlight {
    selected: Channel,
    on: [bool; Channel::COUNT],
}

impl Flashlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Channel {
        self.selected
    }

    pub fn is_on(&self, channel: Channel) -> bool {
        self.on[channel.index()]
    }

    fn toggle<P: OutputPin>(&mut self, outputs: &mut Outputs<P>) {
        let channel = self.selected;
        let on = !self.on[channel.index()];
        self.on[channel.index()] = on;

        outputs.init(channel);
        outputs.write(channel, on);
        log::info!(
            "{} {}",
            CHANNEL_LABELS[channel.index()],
            if on { "on" } else { "off" }
        );
    }
}

impl Application for Flashlight {
    const NAME: &'static str = "flashlight";

    fn on_start<P: OutputPin>(&mut self, outputs: &mut Outputs<P>, _now: Tick) {
        self.on = [false; Channel::COUNT];
        outputs.force_off();
    }

    fn on_command<P: OutputPin>(
        &mut self,
        command: Command,
        outputs: &mut Outputs<P>,
        _now: Tick,
    ) -> Control {
        match command {
            Command::Next | Command::Previous => {
                self.selected = self.selected.other();
            }
            Command::Confirm => self.toggle(outputs),
            Command::Back => return Control::Exit,
        }
        Control::Continue
    }

    fn on_tick<P: OutputPin>(&mut self, _outputs: &mut Outputs<P>, _now: Tick) {}

    fn on_exit<P: OutputPin>(&mut self, _outputs: &mut Outputs<P>) {
        log::info!(
            "leaving outputs as set: {}={} {}={}",
            CHANNEL_LABELS[0],
            self.on[0],
            CHANNEL_LABELS[1],
            self.on[1]
        );
    }

    fn frame(&mut self, _now: Tick) -> Frame {
        let mut frame = Frame::new("Flashlight");
        for channel in Channel::ALL {
            frame.push_line(format_args!(
                "{} {}: {}",
                if channel == self.selected { ">" } else { " " },
                CHANNEL_LABELS[channel.index()],
                if self.is_on(channel) { "ON" } else { "OFF" }
            ));
        }
        frame
    }
}
