//! Loop tests driven through simulated pins and a manual clock.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use beacon_core::{Frame, Outputs};
use beacon_hal::sim::{PinProbe, SimPin};

use crate::config::RuntimeConfig;

mod runner;

fn sim_outputs() -> (Outputs<SimPin>, PinProbe, PinProbe) {
    let a = SimPin::new("PB2");
    let b = SimPin::new("PC3");
    let (probe_a, probe_b) = (a.probe(), b.probe());
    (Outputs::new(a, b), probe_a, probe_b)
}

fn fast_config() -> RuntimeConfig {
    RuntimeConfig::builder()
        .name("test")
        .poll_timeout(Duration::from_millis(5))
        .lock_slots(1)
        .build()
}

#[derive(Clone, Default)]
struct Recorder {
    frames: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn screen(&self) -> impl FnMut(&Frame) + Send + 'static {
        let frames = Arc::clone(&self.frames);
        move |frame: &Frame| frames.lock().unwrap().push(frame.to_string())
    }

    fn last(&self) -> Option<String> {
        self.frames.lock().unwrap().last().cloned()
    }

    fn count(&self) -> usize {
        self.frames.lock().unwrap().len()
    }
}
