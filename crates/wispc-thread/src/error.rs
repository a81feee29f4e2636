//! Failure kinds surfaced by the synchronization facade.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ThreadError {
    #[error("synchronization primitive failed")]
    SyncFailure,
    #[error("operation timed out")]
    TimedOut,
    #[error("resource busy")]
    Busy,
    #[error("operation not supported on this platform")]
    NotSupported,
    #[error("invalid state for this operation")]
    InvalidState,
    #[error("out of memory")]
    OutOfMemory,
}

pub type ThreadResult<T> = std::result::Result<T, ThreadError>;
