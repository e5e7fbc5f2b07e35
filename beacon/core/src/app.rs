//! Application behavior driven by the runtime loop

use beacon_hal::OutputPin;

use crate::events::{Command, Control, InputEvent};
use crate::frame::Frame;
use crate::outputs::Outputs;
use crate::time::Tick;

/// Trait implemented by the device applications.
///
/// The runtime calls these hooks with the state lock held: `on_input` for at
/// most one event per loop iteration, then `on_tick`, then `frame` when it
/// redraws.
pub trait Application: Send + 'static {
    /// Name shown in logs and the host window title
    const NAME: &'static str;

    /// Called once before the loop starts.
    fn on_start<P: OutputPin>(&mut self, outputs: &mut Outputs<P>, now: Tick);

    /// Reacts to a command decoded from a key press.
    fn on_command<P: OutputPin>(
        &mut self,
        command: Command,
        outputs: &mut Outputs<P>,
        now: Tick,
    ) -> Control;

    /// Re-evaluates outputs for the current iteration.
    fn on_tick<P: OutputPin>(&mut self, outputs: &mut Outputs<P>, now: Tick);

    /// Called once after the loop exits.
    fn on_exit<P: OutputPin>(&mut self, outputs: &mut Outputs<P>);

    /// Builds the status screen. May advance cosmetic timers.
    fn frame(&mut self, now: Tick) -> Frame;

    /// Filters raw input down to commands; anything but a press is ignored.
    fn on_input<P: OutputPin>(
        &mut self,
        event: InputEvent,
        outputs: &mut Outputs<P>,
        now: Tick,
    ) -> Control {
        match Command::from_input(event) {
            Some(command) => {
                log::debug!("{}: {:?}", Self::NAME, command);
                self.on_command(command, outputs, now)
            }
            None => Control::Continue,
        }
    }
}
