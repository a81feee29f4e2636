//! A joinable, detachable thread with a cooperative halt flag.
//!
//! Mirrors the spawn/halt/join shape worker threads use elsewhere in this
//! codebase, generalized from a fixed worker loop to an arbitrary closure:
//! the closure receives a [`HaltFlag`] it is expected to poll instead of
//! being forcibly killed, since Rust has no safe thread-kill primitive.

use crate::countdown::Countdown;
use crate::error::{ThreadError, ThreadResult};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

#[derive(Clone)]
pub struct HaltFlag(Arc<AtomicBool>);

impl HaltFlag {
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadState {
    Running,
    Finished,
    Detached,
}

pub struct Thread {
    handle: Mutex<Option<JoinHandle<()>>>,
    halt: Arc<AtomicBool>,
}

impl Thread {
    pub fn spawn<F>(name: Option<&str>, body: F) -> ThreadResult<Self>
    where
        F: FnOnce(HaltFlag) + Send + 'static,
    {
        let halt = Arc::new(AtomicBool::new(false));
        let flag = HaltFlag(halt.clone());
        let mut builder = thread::Builder::new();
        if let Some(name) = name {
            builder = builder.name(name.to_string());
        }
        let handle = builder.spawn(move || body(flag)).map_err(|e| {
            tracing::warn!(error = %e, "failed to spawn thread");
            ThreadError::OutOfMemory
        })?;
        tracing::debug!(name = name.unwrap_or("<unnamed>"), "thread spawned");
        Ok(Self { handle: Mutex::new(Some(handle)), halt })
    }

    pub fn request_halt(&self) {
        tracing::trace!("halt requested");
        self.halt.store(true, Ordering::Release);
    }

    pub fn state(&self) -> ThreadState {
        match self.handle.lock().as_ref() {
            None => ThreadState::Detached,
            Some(h) if h.is_finished() => ThreadState::Finished,
            Some(_) => ThreadState::Running,
        }
    }

    pub fn join(&self) -> ThreadResult<()> {
        let handle = self.handle.lock().take().ok_or(ThreadError::InvalidState)?;
        handle.join().map_err(|_| ThreadError::SyncFailure)
    }

    /// Polls `is_finished` with a short backoff, since `JoinHandle` offers
    /// no native timed join.
    pub fn join_timeout(&self, timeout: Duration) -> ThreadResult<()> {
        let countdown = Countdown::new(timeout);
        loop {
            let mut guard = self.handle.lock();
            match guard.as_ref() {
                None => return Err(ThreadError::InvalidState),
                Some(h) if h.is_finished() => {
                    let handle = guard.take().unwrap();
                    drop(guard);
                    return handle.join().map_err(|_| ThreadError::SyncFailure);
                }
                Some(_) => {}
            }
            drop(guard);
            if countdown.expired() {
                tracing::trace!("join_timeout expired");
                return Err(ThreadError::TimedOut);
            }
            thread::sleep(countdown.remaining().min(Duration::from_millis(1)));
        }
    }

    /// Drops the `JoinHandle`, which detaches the underlying OS thread.
    pub fn detach(&self) -> ThreadResult<()> {
        self.handle.lock().take().map(drop).ok_or(ThreadError::InvalidState)
    }
}
