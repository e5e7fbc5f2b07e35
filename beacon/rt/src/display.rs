//! Display capability

use beacon_core::Frame;

/// Receives one frame per loop iteration.
pub trait Screen: Send {
    fn draw(&mut self, frame: &Frame);
}

impl<F> Screen for F
where
    F: FnMut(&Frame) + Send,
{
    fn draw(&mut self, frame: &Frame) {
        self(frame)
    }
}
