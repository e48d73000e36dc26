//! Fixed settings for the injection loop.
//!
//! Nothing here is read from the command line or the environment. The binary always runs with
//! [`Config::default`]; library callers may build their own for tests.

use core::ffi::c_int;
use std::path::PathBuf;
use std::time::Duration;

use crate::pool_info::{CLAIMED_ENTROPY_BITS, PAYLOAD_LEN, PSEUDO_ENTROPY, PoolInfo};
use crate::pool_status::PROC_RANDOM_DIR;
use crate::random_device::RANDOM_DEVICE_PATH;

/// Pause between submissions
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1);

/// How many submissions pass between pool status reports
pub const DEFAULT_REPORT_EVERY: u64 = 1000;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Random device the records go to
    pub device: PathBuf,
    /// Claimed credit per submission, in bits
    pub entropy_count: c_int,
    /// Bytes submitted every time
    pub payload: [u8; PAYLOAD_LEN],
    /// Sleep after each submission
    pub interval: Duration,
    /// Log the pool status every this many submissions. Zero disables reporting.
    pub report_every: u64,
    /// Where the pool counters live
    pub proc_dir: PathBuf,
}

impl Config {
    /// The record every iteration submits.
    #[must_use]
    pub const fn pool_info(&self) -> PoolInfo {
        PoolInfo::new(self.entropy_count, self.payload)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device: PathBuf::from(RANDOM_DEVICE_PATH),
            entropy_count: CLAIMED_ENTROPY_BITS,
            payload: PSEUDO_ENTROPY,
            interval: DEFAULT_INTERVAL,
            report_every: DEFAULT_REPORT_EVERY,
            proc_dir: PathBuf::from(PROC_RANDOM_DIR),
        }
    }
}
