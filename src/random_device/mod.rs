//! Wrapper around the `RNDADDENTROPY` ioctl on the system random device.
//!
//! Platform Support
//! - Only Linux exposes `RNDADDENTROPY`. Elsewhere every submission fails with
//!   [`Error::UnsupportedPlatform`].

mod error;

use std::path::{Path, PathBuf};

pub use error::Error;

use crate::injector::EntropySink;
use crate::pool_info::PoolInfo;

/// Path to the system's random device
pub const RANDOM_DEVICE_PATH: &str = "/dev/random";

/// `_IOW('R', 0x03, int[2])`: add entropy to the input pool and credit `entropy_count` bits.
pub const RNDADDENTROPY: u32 = 0x4008_5203;

/// A random device that records are submitted to.
///
/// The device is opened afresh for every submission and closed again when the handle drops, so a
/// `RandomDevice` holds nothing but its path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RandomDevice {
    path: PathBuf,
}

impl RandomDevice {
    /// A device at an arbitrary path. Mostly useful for tests.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `/dev/random`
    #[must_use]
    pub fn open_default() -> Self {
        Self::at(RANDOM_DEVICE_PATH)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the device write-only, issues `RNDADDENTROPY` with `info`, and closes it.
    ///
    /// # Errors
    /// - [`Error::Open`] if the device cannot be opened for writing
    /// - [`Error::Ioctl`] if the kernel rejects the request. `EPERM` means the caller lacks
    ///   `CAP_SYS_ADMIN`; `ENOTTY` means the path is not a random device.
    /// - [`Error::UnsupportedPlatform`] on anything but Linux
    #[cfg(target_os = "linux")]
    pub fn submit(&self, info: &PoolInfo) -> Result<(), Error> {
        use std::os::fd::AsRawFd;

        let file = std::fs::OpenOptions::new()
            .write(true)
            .open(&self.path)
            .map_err(|source| Error::Open { path: self.path.clone(), source })?;

        // SAFETY: the descriptor belongs to `file`, which outlives the call. `info` is a repr(C)
        // image of `struct rand_pool_info` whose `buf_size` never exceeds the bytes behind it, so
        // the kernel reads only memory we own. The request does not write through the pointer.
        let rc = unsafe {
            libc::ioctl(file.as_raw_fd(), RNDADDENTROPY as _, core::ptr::from_ref(info))
        };

        // Capture errno before anything else (including the close on drop) can clobber it.
        if rc < 0 {
            return Err(Error::Ioctl {
                path: self.path.clone(),
                source: std::io::Error::last_os_error(),
            });
        }

        Ok(())
    }

    /// `RNDADDENTROPY` is Linux-only.
    ///
    /// # Errors
    /// Always returns [`Error::UnsupportedPlatform`].
    #[cfg(not(target_os = "linux"))]
    pub fn submit(&self, _info: &PoolInfo) -> Result<(), Error> {
        Err(Error::UnsupportedPlatform)
    }
}

impl Default for RandomDevice {
    fn default() -> Self {
        Self::open_default()
    }
}

impl EntropySink for RandomDevice {
    fn add_entropy(&mut self, info: &PoolInfo) -> Result<(), crate::Error> {
        Ok(self.submit(info)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
