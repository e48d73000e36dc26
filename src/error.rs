//! Public Error type for crate

use super::{PoolStatusError, RandomDeviceError};

/// Public error type for this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Submitting to the random device failed
    #[error(transparent)]
    RandomDevice(#[from] RandomDeviceError),
    /// Reading the pool counters failed
    #[error(transparent)]
    PoolStatus(#[from] PoolStatusError),
}

impl Error {
    /// True when the kernel refused the caller for lack of privilege.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            | Self::RandomDevice(inner) => inner.is_permission_denied(),
            | Self::PoolStatus(_) => false,
        }
    }
}
