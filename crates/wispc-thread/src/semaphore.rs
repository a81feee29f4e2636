//! A counting semaphore, built on the same mutex-plus-condvar shape as
//! [`crate::Monitor`]: permits are a count guarded by a condvar instead of a
//! single `bool`.

use crate::countdown::Countdown;
use crate::error::{ThreadError, ThreadResult};
use parking_lot::{Condvar, Mutex};
use std::time::Duration;

pub struct Semaphore {
    permits: Mutex<u64>,
    cv: Condvar,
}

impl Semaphore {
    pub fn new(initial: u64) -> Self {
        Self { permits: Mutex::new(initial), cv: Condvar::new() }
    }

    /// Blocks until at least `n` permits are available, then takes them.
    pub fn acquire(&self, n: u64) {
        let mut permits = self.permits.lock();
        while *permits < n {
            self.cv.wait(&mut permits);
        }
        *permits -= n;
    }

    pub fn try_acquire(&self, n: u64) -> ThreadResult<()> {
        let mut permits = self.permits.lock();
        if *permits < n {
            tracing::trace!("try_acquire found too few permits available");
            return Err(ThreadError::Busy);
        }
        *permits -= n;
        Ok(())
    }

    pub fn acquire_timeout(&self, n: u64, timeout: Duration) -> ThreadResult<()> {
        let countdown = Countdown::new(timeout);
        let mut permits = self.permits.lock();
        while *permits < n {
            if countdown.expired() {
                tracing::trace!("acquire_timeout expired waiting for permits");
                return Err(ThreadError::TimedOut);
            }
            self.cv.wait_for(&mut permits, countdown.remaining());
        }
        *permits -= n;
        Ok(())
    }

    /// Returns `n` permits and wakes every waiter, since a single release of
    /// `n >= 2` permits may be enough to satisfy more than one blocked
    /// acquire.
    pub fn release(&self, n: u64) {
        let mut permits = self.permits.lock();
        *permits += n;
        self.cv.notify_all();
    }

    pub fn available(&self) -> u64 {
        *self.permits.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_and_release_track_the_count() {
        let sem = Semaphore::new(1);
        sem.acquire(1);
        assert_eq!(sem.available(), 0);
        assert_eq!(sem.try_acquire(1), Err(ThreadError::Busy));
        sem.release(1);
        assert_eq!(sem.available(), 1);
    }

    #[test]
    fn acquire_timeout_expires_when_starved() {
        let sem = Semaphore::new(0);
        let result = sem.acquire_timeout(1, Duration::from_millis(10));
        assert_eq!(result, Err(ThreadError::TimedOut));
    }

    #[test]
    fn counted_acquire_and_release_round_trip() {
        let sem = Semaphore::new(5);
        sem.acquire(3);
        assert_eq!(sem.available(), 2);
        assert_eq!(sem.try_acquire(3), Err(ThreadError::Busy));
        sem.release(3);
        sem.acquire(3);
        assert_eq!(sem.available(), 2);
    }

    #[test]
    fn release_wakes_every_waiter_it_can_satisfy() {
        use std::sync::Arc;
        use std::thread;

        let sem = Arc::new(Semaphore::new(0));
        let a = sem.clone();
        let b = sem.clone();
        let ha = thread::spawn(move || a.acquire_timeout(1, Duration::from_secs(2)));
        let hb = thread::spawn(move || b.acquire_timeout(1, Duration::from_secs(2)));
        thread::sleep(Duration::from_millis(10));
        sem.release(2);
        assert_eq!(ha.join().unwrap(), Ok(()));
        assert_eq!(hb.join().unwrap(), Ok(()));
    }
}
