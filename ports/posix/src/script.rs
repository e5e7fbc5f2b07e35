//! Scripted input source for unattended runs.

use std::str::FromStr;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use beacon_core::{CoreError, Key};
use beacon_rt::InputSender;

/// A list of keys tapped one after another with a fixed delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedInput {
    keys: Vec<Key>,
    step: Duration,
}

impl ScriptedInput {
    pub fn new(keys: Vec<Key>, step: Duration) -> Self {
        Self { keys, step }
    }

    /// Parses a comma separated key list such as `ok,right,back`.
    pub fn parse(script: &str, step: Duration) -> Result<Self, CoreError> {
        let keys = script
            .split(',')
            .filter(|name| !name.trim().is_empty())
            .map(Key::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(keys, step))
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Replays the script on its own thread. Stops early once the queue
    /// is closed.
    pub fn spawn(self, input: InputSender) -> JoinHandle<usize> {
        thread::spawn(move || {
            let mut sent = 0;
            for key in self.keys {
                thread::sleep(self.step);
                if input.tap(key).is_err() {
                    log::debug!("script stopped after {} keys", sent);
                    break;
                }
                log::debug!("script: {}", key);
                sent += 1;
            }
            sent
        })
    }
}
