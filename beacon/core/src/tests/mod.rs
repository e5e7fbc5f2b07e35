//! Scenario tests for the applications, driven through simulated pins.

use beacon_hal::sim::{PinProbe, SimPin};

use crate::outputs::Outputs;

mod flashlight;

fn sim_outputs() -> (Outputs<SimPin>, PinProbe, PinProbe) {
    let a = SimPin::new("PB2");
    let b = SimPin::new("PC3");
    let (probe_a, probe_b) = (a.probe(), b.probe());
    (Outputs::new(a, b), probe_a, probe_b)
}
