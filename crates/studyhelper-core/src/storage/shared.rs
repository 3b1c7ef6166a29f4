//! Lock wrapper for hosts that touch a store from more than one thread.
//!
//! One mutex per store serializes load, save and every mutating call, so a
//! save can never observe a half-applied mutation.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to a store behind a single mutex.
#[derive(Debug, Default)]
pub struct Shared<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> Shared<S> {
    pub fn new(store: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Acquire the store.
    ///
    /// A panic on another thread while holding the lock does not make the
    /// store unusable; the poisoned guard is recovered.
    pub fn lock(&self) -> MutexGuard<'_, S> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the store.
    pub fn with<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }
}

impl<S> Clone for Shared<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
