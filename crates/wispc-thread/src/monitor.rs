//! A Hoare-style monitor: a lock plus a wait/notify condition.
//!
//! `wait` releases the monitor, blocks until notified (or the timeout
//! elapses), then re-acquires it before returning - the caller always holds
//! the monitor again by the time `wait` gives back control, whether it
//! returns `Ok` or `Err(TimedOut)`.

use crate::countdown::Countdown;
use crate::error::{ThreadError, ThreadResult};
use parking_lot::{Condvar, Mutex};
use std::time::Duration;

pub struct Monitor {
    entered: Mutex<bool>,
    cv: Condvar,
}

impl Monitor {
    pub fn new() -> Self {
        Self { entered: Mutex::new(false), cv: Condvar::new() }
    }

    pub fn enter(&self) {
        let mut entered = self.entered.lock();
        while *entered {
            self.cv.wait(&mut entered);
        }
        *entered = true;
    }

    /// Blocks until the monitor is free or `timeout` elapses, whichever is
    /// first. Distinct from [`Monitor::wait`], which suspends a thread that
    /// already holds the monitor until notified.
    pub fn enter_timeout(&self, timeout: Duration) -> ThreadResult<()> {
        let countdown = Countdown::new(timeout);
        let mut entered = self.entered.lock();
        while *entered {
            if countdown.expired() {
                tracing::trace!("enter_timeout expired");
                return Err(ThreadError::TimedOut);
            }
            self.cv.wait_for(&mut entered, countdown.remaining());
        }
        *entered = true;
        Ok(())
    }

    pub fn try_enter(&self) -> ThreadResult<()> {
        let mut entered = self.entered.lock();
        if *entered {
            return Err(ThreadError::Busy);
        }
        *entered = true;
        Ok(())
    }

    pub fn exit(&self) -> ThreadResult<()> {
        let mut entered = self.entered.lock();
        if !*entered {
            return Err(ThreadError::InvalidState);
        }
        *entered = false;
        self.cv.notify_one();
        Ok(())
    }

    /// Must be called with the monitor entered. Releases it for the
    /// duration of the wait and re-enters it before returning, in both the
    /// notified and timed-out cases.
    pub fn wait(&self, timeout: Option<Duration>) -> ThreadResult<()> {
        let mut entered = self.entered.lock();
        if !*entered {
            return Err(ThreadError::InvalidState);
        }
        *entered = false;
        self.cv.notify_one();

        let timed_out = match timeout {
            Some(d) => self.cv.wait_for(&mut entered, d).timed_out(),
            None => {
                self.cv.wait(&mut entered);
                false
            }
        };

        while *entered {
            self.cv.wait(&mut entered);
        }
        *entered = true;

        if timed_out {
            tracing::trace!("monitor wait expired before notification");
            Err(ThreadError::TimedOut)
        } else {
            Ok(())
        }
    }

    pub fn notify_one(&self) {
        self.cv.notify_one();
    }

    pub fn notify_all(&self) {
        self.cv.notify_all();
    }
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new()
    }
}
