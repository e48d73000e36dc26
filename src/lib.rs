//! Feeds a constant, non-random byte string into the Linux entropy pool through `RNDADDENTROPY`.
//!
//! # Warning
//!
//! **This does not provide entropy.** Every submission carries the same 32 bytes
//! ([`PSEUDO_ENTROPY`]) and claims [`CLAIMED_ENTROPY_BITS`] bits of credit for them. Running it
//! makes the kernel believe it has randomness it does not have. It exists to exercise software that
//! watches or depends on entropy accounting, on machines whose random numbers do not matter.
//!
//! Submitting requires `CAP_SYS_ADMIN` (in practice, root) and Linux.

pub mod config;
pub mod error;
pub mod injector;
pub mod pool_info;
pub mod pool_status;
pub mod random_device;

use core::convert::Infallible;

pub use config::Config;
pub use error::Error;
pub use injector::{EntropySink, Injector};
pub use pool_info::{CLAIMED_ENTROPY_BITS, PSEUDO_ENTROPY, PoolInfo};
pub use pool_status::{Error as PoolStatusError, PoolStatus};
pub use random_device::{Error as RandomDeviceError, RandomDevice};

/// Submits the constant pseudo-entropy record to `/dev/random` once.
///
/// # Examples
///
/// ```no_run
/// # use kiss_pseudo_entropy::{inject_once, Error};
/// inject_once()?;
/// # Ok::<(), Error>(())
/// ```
/// # Errors
/// Returns `Error` if:
/// - `/dev/random` cannot be opened for writing
/// - The kernel rejects `RNDADDENTROPY`, usually for lack of privilege
/// - The platform is not Linux
pub fn inject_once() -> Result<(), Error> {
    Injector::for_device(Config::default()).inject_once()
}

/// Submits the constant record to `/dev/random` every millisecond, forever.
///
/// # Errors
/// Returns the first submission error; the function never returns otherwise.
pub fn run() -> Result<Infallible, Error> {
    Injector::for_device(Config::default()).run()
}

/// Current kernel entropy pool counters.
///
/// # Errors
/// Returns `Error` if the procfs counters are missing or malformed.
pub fn pool_status() -> Result<PoolStatus, Error> {
    Ok(PoolStatus::read()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unprivileged callers get an error on the very first call instead of a silent no-op.
    /// Skipped when the tests run as root, where the call would really feed the pool.
    #[cfg(target_os = "linux")]
    #[test]
    fn unprivileged_injection_fails() {
        // SAFETY: geteuid has no preconditions.
        if unsafe { libc::geteuid() } == 0 {
            return;
        }
        assert!(inject_once().is_err(), "unprivileged RNDADDENTROPY succeeded");
    }

    /// Sanity check against the live kernel: entropy never exceeds the pool size.
    ///
    /// Some sandboxes do not expose the counters; nothing to check there.
    #[cfg(target_os = "linux")]
    #[test]
    fn live_pool_status_is_consistent() {
        let proc_dir = std::path::Path::new(pool_status::PROC_RANDOM_DIR);
        if !proc_dir.join("poolsize").exists() || !proc_dir.join("entropy_avail").exists() {
            return;
        }
        let status = pool_status().expect("procfs counters readable");
        assert!(status.available <= status.pool_size, "status {status}");
    }

    #[test]
    fn errors_wrap_module_errors() {
        let err: Error = RandomDeviceError::UnsupportedPlatform.into();
        assert!(matches!(err, Error::RandomDevice(_)));
        assert_eq!(err.to_string(), "RNDADDENTROPY is not available on this platform");
    }
}
