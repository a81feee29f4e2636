//! A plain, non-reentrant mutual exclusion lock.
//!
//! Exposed to scripts as explicit `lock`/`unlock` calls rather than a
//! scope-guarded borrow, so the "currently held" bit lives in a `bool`
//! guarded by its own mutex instead of in a `MutexGuard` kept alive across
//! calls. `parking_lot::Condvar::wait` releases that inner mutex for the
//! duration of the wait, so a blocked `lock()` never holds the bookkeeping
//! mutex while parked.

use crate::countdown::Countdown;
use crate::error::{ThreadError, ThreadResult};
use parking_lot::{Condvar, Mutex};
use std::time::Duration;

pub struct Lock {
    held: Mutex<bool>,
    cv: Condvar,
}

impl Lock {
    pub fn new() -> Self {
        Self { held: Mutex::new(false), cv: Condvar::new() }
    }

    pub fn lock(&self) {
        let mut held = self.held.lock();
        while *held {
            self.cv.wait(&mut held);
        }
        *held = true;
    }

    /// Blocks until the lock is free or `timeout` elapses, whichever is first.
    pub fn lock_timeout(&self, timeout: Duration) -> ThreadResult<()> {
        let countdown = Countdown::new(timeout);
        let mut held = self.held.lock();
        while *held {
            if countdown.expired() {
                tracing::trace!("lock_timeout expired");
                return Err(ThreadError::TimedOut);
            }
            self.cv.wait_for(&mut held, countdown.remaining());
        }
        *held = true;
        Ok(())
    }

    pub fn try_lock(&self) -> ThreadResult<()> {
        let mut held = self.held.lock();
        if *held {
            tracing::trace!("try_lock found the lock busy");
            return Err(ThreadError::Busy);
        }
        *held = true;
        Ok(())
    }

    pub fn unlock(&self) -> ThreadResult<()> {
        let mut held = self.held.lock();
        if !*held {
            tracing::debug!("unlock called on a lock that was not held");
            return Err(ThreadError::InvalidState);
        }
        *held = false;
        self.cv.notify_one();
        Ok(())
    }
}

impl Default for Lock {
    fn default() -> Self {
        Self::new()
    }
}
