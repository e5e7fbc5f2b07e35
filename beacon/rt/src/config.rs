//! Runtime configuration.

use std::sync::Arc;
use std::time::Duration;

use crate::sync::{LockPool, DEFAULT_LOCK_SLOTS};

/// Default wait for input before re-evaluating outputs
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Configuration for a [`Runner`](crate::Runner).
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub name: &'static str,
    pub poll_timeout: Duration,
    pub lock_pool: Arc<LockPool>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            name: "beacon",
            poll_timeout: DEFAULT_POLL_TIMEOUT,
            lock_pool: LockPool::new(DEFAULT_LOCK_SLOTS),
        }
    }
}

impl RuntimeConfig {
    /// Creates a new runtime configuration builder.
    pub fn builder() -> RuntimeConfigBuilder {
        RuntimeConfigBuilder::default()
    }
}

/// Builder for ergonomic runtime configuration construction.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfigBuilder {
    config: RuntimeConfig,
}

impl RuntimeConfigBuilder {
    /// Sets the name used in log records.
    pub fn name(mut self, name: &'static str) -> Self {
        self.config.name = name;
        self
    }

    /// Sets how long each iteration waits for input.
    pub fn poll_timeout(mut self, timeout: Duration) -> Self {
        self.config.poll_timeout = timeout;
        self
    }

    /// Shares an existing lock pool with other runtimes.
    pub fn lock_pool(mut self, pool: Arc<LockPool>) -> Self {
        self.config.lock_pool = pool;
        self
    }

    /// Gives this runtime a private pool of `slots` locks.
    pub fn lock_slots(mut self, slots: usize) -> Self {
        self.config.lock_pool = LockPool::new(slots);
        self
    }

    /// Builds the runtime configuration.
    pub fn build(self) -> RuntimeConfig {
        self.config
    }
}
