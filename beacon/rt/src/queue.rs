//! Bounded input queue
//!
//! A fixed-capacity FIFO shared between input producers and the single loop
//! consumer. Producers block while the queue is full; the consumer waits with
//! a timeout. Once closed, the queue rejects producers instead of letting
//! them block forever on a loop that no longer drains.

use std::sync::Arc;
use std::time::{Duration, Instant};

use beacon_core::InputEvent;
use heapless::Deque;
use parking_lot::{Condvar, Mutex};

use crate::error::QueueError;

/// Depth of the input queue
pub const QUEUE_DEPTH: usize = 8;

/// The queue type used by the runner
pub type InputQueue = MessageQueue<InputEvent, QUEUE_DEPTH>;

struct Slots<T, const N: usize> {
    items: Deque<T, N>,
    closed: bool,
}

pub struct MessageQueue<T, const N: usize> {
    slots: Mutex<Slots<T, N>>,
    not_empty: Condvar,
    not_full: Condvar,
}

impl<T, const N: usize> MessageQueue<T, N> {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(Slots {
                items: Deque::new(),
                closed: false,
            }),
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
        }
    }

    /// Appends `item`, waiting without limit for free space.
    pub fn put(&self, item: T) -> Result<(), QueueError> {
        let mut slots = self.slots.lock();
        loop {
            if slots.closed {
                return Err(QueueError::Closed);
            }
            if !slots.items.is_full() {
                break;
            }
            self.not_full.wait(&mut slots);
        }
        // Space was checked above while holding the lock.
        let _ = slots.items.push_back(item);
        drop(slots);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Appends `item` if there is room right now.
    pub fn try_put(&self, item: T) -> Result<(), QueueError> {
        let mut slots = self.slots.lock();
        if slots.closed {
            return Err(QueueError::Closed);
        }
        slots.items.push_back(item).map_err(|_| QueueError::Full)?;
        drop(slots);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Removes the oldest item, waiting up to `timeout` for one to arrive.
    ///
    /// `None` after the timeout is the normal "no input" outcome.
    pub fn get_timeout(&self, timeout: Duration) -> Option<T> {
        let deadline = Instant::now() + timeout;
        let mut slots = self.slots.lock();
        loop {
            if let Some(item) = slots.items.pop_front() {
                drop(slots);
                self.not_full.notify_one();
                return Some(item);
            }
            if slots.closed || self.not_empty.wait_until(&mut slots, deadline).timed_out() {
                let item = slots.items.pop_front();
                if item.is_some() {
                    drop(slots);
                    self.not_full.notify_one();
                }
                return item;
            }
        }
    }

    /// Rejects further producers and wakes any that are blocked.
    pub fn close(&self) {
        self.slots.lock().closed = true;
        self.not_full.notify_all();
        self.not_empty.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.slots.lock().closed
    }

    pub fn len(&self) -> usize {
        self.slots.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.lock().items.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<T, const N: usize> Default for MessageQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable producer handle for the input queue.
#[derive(Clone)]
pub struct InputSender {
    queue: Arc<InputQueue>,
}

impl InputSender {
    pub(crate) fn new(queue: Arc<InputQueue>) -> Self {
        Self { queue }
    }

    /// Posts an event, blocking while the queue is full.
    pub fn send(&self, event: InputEvent) -> Result<(), QueueError> {
        self.queue.put(event)
    }

    /// Posts a press immediately followed by its release, the way the input
    /// service reports a tap.
    pub fn tap(&self, key: beacon_core::Key) -> Result<(), QueueError> {
        self.send(InputEvent::press(key))?;
        self.send(InputEvent::release(key))
    }

    pub fn is_closed(&self) -> bool {
        self.queue.is_closed()
    }
}
