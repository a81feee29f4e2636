//! A reentrant mutual exclusion lock.
//!
//! The owning thread may lock it any number of times; each `lock()` must be
//! matched by an `unlock()` before another thread can take it.

use crate::countdown::Countdown;
use crate::error::{ThreadError, ThreadResult};
use parking_lot::{Condvar, Mutex};
use std::thread::{self, ThreadId};
use std::time::Duration;

struct State {
    owner: Option<ThreadId>,
    depth: usize,
}

pub struct RLock {
    state: Mutex<State>,
    cv: Condvar,
}

impl RLock {
    pub fn new() -> Self {
        Self { state: Mutex::new(State { owner: None, depth: 0 }), cv: Condvar::new() }
    }

    pub fn lock(&self) {
        let me = thread::current().id();
        let mut state = self.state.lock();
        loop {
            match state.owner {
                Some(owner) if owner == me => {
                    state.depth += 1;
                    return;
                }
                None => {
                    state.owner = Some(me);
                    state.depth = 1;
                    return;
                }
                Some(_) => self.cv.wait(&mut state),
            }
        }
    }

    /// Blocks until the rlock is free (or already owned by this thread) or
    /// `timeout` elapses, whichever is first.
    pub fn lock_timeout(&self, timeout: Duration) -> ThreadResult<()> {
        let me = thread::current().id();
        let countdown = Countdown::new(timeout);
        let mut state = self.state.lock();
        loop {
            match state.owner {
                Some(owner) if owner == me => {
                    state.depth += 1;
                    return Ok(());
                }
                None => {
                    state.owner = Some(me);
                    state.depth = 1;
                    return Ok(());
                }
                Some(_) => {
                    if countdown.expired() {
                        tracing::trace!("lock_timeout expired waiting for the rlock");
                        return Err(ThreadError::TimedOut);
                    }
                    self.cv.wait_for(&mut state, countdown.remaining());
                }
            }
        }
    }

    pub fn try_lock(&self) -> ThreadResult<()> {
        let me = thread::current().id();
        let mut state = self.state.lock();
        match state.owner {
            Some(owner) if owner == me => {
                state.depth += 1;
                Ok(())
            }
            None => {
                state.owner = Some(me);
                state.depth = 1;
                Ok(())
            }
            Some(_) => {
                tracing::trace!("try_lock found the rlock held by another thread");
                Err(ThreadError::Busy)
            }
        }
    }

    pub fn unlock(&self) -> ThreadResult<()> {
        let me = thread::current().id();
        let mut state = self.state.lock();
        match state.owner {
            Some(owner) if owner == me => {
                state.depth -= 1;
                if state.depth == 0 {
                    state.owner = None;
                    self.cv.notify_one();
                }
                Ok(())
            }
            _ => {
                tracing::debug!("unlock called by a thread that does not hold the rlock");
                Err(ThreadError::InvalidState)
            }
        }
    }
}

impl Default for RLock {
    fn default() -> Self {
        Self::new()
    }
}
