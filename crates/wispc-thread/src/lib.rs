//! wispc-thread - the synchronization primitives scripts see as the
//! `thread` module: a plain lock, a reentrant lock, a counting semaphore, a
//! monitor, joinable threads, and a countdown clock.
//!
//! None of this understands script values; callers pass plain closures and
//! get back `Result`s carrying a [`ThreadError`].

mod countdown;
mod error;
mod lock;
mod monitor;
mod rlock;
mod semaphore;
mod thread;

pub use countdown::Countdown;
pub use error::{ThreadError, ThreadResult};
pub use lock::Lock;
pub use monitor::Monitor;
pub use rlock::RLock;
pub use semaphore::Semaphore;
pub use thread::{HaltFlag, Thread, ThreadState};
