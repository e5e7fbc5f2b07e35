//! The cooperative poll loop.

use std::sync::Arc;

use beacon_core::{Application, Control, Outputs};
use beacon_hal::OutputPin;

use crate::clock::Clock;
use crate::config::RuntimeConfig;
use crate::display::Screen;
use crate::error::{ExitStatus, RuntimeError};
use crate::queue::{InputQueue, InputSender};
use crate::sync::Mutex;

struct Shared<A, P> {
    app: A,
    outputs: Outputs<P>,
}

/// Owns one application, its outputs and the input queue feeding it.
pub struct Runner<A, P, C, S> {
    config: RuntimeConfig,
    queue: Arc<InputQueue>,
    shared: Mutex<Shared<A, P>>,
    clock: C,
    screen: S,
    iterations: u64,
}

impl<A, P, C, S> Runner<A, P, C, S>
where
    A: Application,
    P: OutputPin,
    C: Clock,
    S: Screen,
{
    /// Allocates the queue and state lock, then runs the start hook.
    ///
    /// Fails without touching the outputs when no lock can be allocated.
    pub fn start(
        config: RuntimeConfig,
        app: A,
        outputs: Outputs<P>,
        clock: C,
        screen: S,
    ) -> Result<Self, RuntimeError> {
        let queue = Arc::new(InputQueue::new());
        let shared = match config.lock_pool.alloc(Shared { app, outputs }) {
            Ok(shared) => shared,
            Err(err) => {
                log::error!("[{}] {}: {}", config.name, A::NAME, err);
                return Err(err);
            }
        };

        {
            let mut state = shared.lock();
            let Shared { app, outputs } = &mut *state;
            app.on_start(outputs, clock.now());
        }
        log::info!(
            "[{}] {} started (poll {:?})",
            config.name,
            A::NAME,
            config.poll_timeout
        );

        Ok(Self {
            config,
            queue,
            shared,
            clock,
            screen,
            iterations: 0,
        })
    }

    /// Producer handle for the input queue.
    pub fn input(&self) -> InputSender {
        InputSender::new(Arc::clone(&self.queue))
    }

    /// One loop iteration: at most one input event, one output
    /// re-evaluation and one redraw.
    pub fn step(&mut self) -> Control {
        self.iterations += 1;
        let event = self.queue.get_timeout(self.config.poll_timeout);

        let control = match event {
            Some(event) => {
                log::trace!("[{}] {:?}", self.config.name, event);
                let mut state = self.shared.lock();
                let Shared { app, outputs } = &mut *state;
                app.on_input(event, outputs, self.clock.now())
            }
            None => Control::Continue,
        };

        {
            let mut state = self.shared.lock();
            let Shared { app, outputs } = &mut *state;
            app.on_tick(outputs, self.clock.now());
        }

        let frame = self.shared.lock().app.frame(self.clock.now());
        self.screen.draw(&frame);

        control
    }

    /// Runs until the application asks to exit, then releases resources.
    pub fn run(mut self) -> ExitStatus {
        while !self.step().is_exit() {}

        self.queue.close();
        {
            let mut state = self.shared.lock();
            let Shared { app, outputs } = &mut *state;
            app.on_exit(outputs);
        }
        log::info!(
            "[{}] {} exited after {} iterations",
            self.config.name,
            A::NAME,
            self.iterations
        );
        ExitStatus::Success
    }

    /// Reads application state under the lock.
    pub fn with_state<R>(&self, f: impl FnOnce(&A) -> R) -> R {
        f(&self.shared.lock().app)
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}
