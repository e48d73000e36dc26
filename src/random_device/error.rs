use std::io;
use std::path::PathBuf;

/// Errors that can occur when submitting a record to the random device
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Could not open the device for writing
    #[error("could not open {} for writing: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    /// The `RNDADDENTROPY` request was rejected
    #[error("RNDADDENTROPY on {} failed: {source}", path.display())]
    Ioctl { path: PathBuf, source: io::Error },
    /// `RNDADDENTROPY` only exists on Linux
    #[error("RNDADDENTROPY is not available on this platform")]
    UnsupportedPlatform,
}

impl Error {
    /// True when the failure is the kernel refusing an unprivileged caller.
    ///
    /// `RNDADDENTROPY` needs `CAP_SYS_ADMIN`; opening `/dev/random` for writing is usually allowed.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            | Self::Open { source, .. } | Self::Ioctl { source, .. } => {
                source.kind() == io::ErrorKind::PermissionDenied
            }
            | Self::UnsupportedPlatform => false,
        }
    }
}
