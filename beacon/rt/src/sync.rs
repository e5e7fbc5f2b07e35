//! Lock allocation.
//!
//! On the device, mutexes are kernel objects drawn from a fixed budget, so
//! creating one can fail. [`LockPool`] models that budget: every [`Mutex`]
//! holds one slot for its lifetime and gives it back when dropped.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::RuntimeError;

pub type MutexGuard<'a, T> = parking_lot::MutexGuard<'a, T>;

/// Default number of locks available to a runtime
pub const DEFAULT_LOCK_SLOTS: usize = 4;

/// Fixed budget of lock slots.
pub struct LockPool {
    capacity: usize,
    in_use: AtomicUsize,
}

impl LockPool {
    pub fn new(capacity: usize) -> Arc<Self> {
        Arc::new(Self {
            capacity,
            in_use: AtomicUsize::new(0),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn available(&self) -> usize {
        self.capacity - self.in_use.load(Ordering::SeqCst)
    }

    /// Allocates a mutex protecting `value` from this pool.
    pub fn alloc<T>(self: &Arc<Self>, value: T) -> Result<Mutex<T>, RuntimeError> {
        self.in_use
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |used| {
                (used < self.capacity).then_some(used + 1)
            })
            .map_err(|_| RuntimeError::LockUnavailable {
                capacity: self.capacity,
            })?;

        Ok(Mutex {
            inner: parking_lot::Mutex::new(value),
            _slot: LockSlot {
                pool: Arc::clone(self),
            },
        })
    }
}

impl fmt::Debug for LockPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockPool")
            .field("capacity", &self.capacity)
            .field("in_use", &self.in_use.load(Ordering::SeqCst))
            .finish()
    }
}

struct LockSlot {
    pool: Arc<LockPool>,
}

impl Drop for LockSlot {
    fn drop(&mut self) {
        self.pool.in_use.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Mutex drawn from a [`LockPool`].
pub struct Mutex<T> {
    inner: parking_lot::Mutex<T>,
    _slot: LockSlot,
}

impl<T> Mutex<T> {
    /// Acquires the mutex, blocking until it becomes available.
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.inner.lock()
    }
}
