//! Kernel entropy pool counters, read from procfs.
//!
//! Used only to report what the injection loop is doing. The counters never influence what gets
//! submitted.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory holding the kernel's random-pool counters
pub const PROC_RANDOM_DIR: &str = "/proc/sys/kernel/random";

/// Currently credited entropy, in bits
const ENTROPY_AVAIL_FILE: &str = "entropy_avail";
/// Pool capacity, in bits
const POOLSIZE_FILE: &str = "poolsize";

/// Errors that can occur when reading the pool counters
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("{} does not hold a bit count: {value:?}", path.display())]
    Parse { path: PathBuf, value: String },
}

/// Snapshot of `entropy_avail` against `poolsize`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PoolStatus {
    pub available: u32,
    pub pool_size: u32,
}

impl PoolStatus {
    /// Reads the counters from [`PROC_RANDOM_DIR`].
    ///
    /// # Errors
    /// See [`PoolStatus::read_from`].
    pub fn read() -> Result<Self, Error> {
        Self::read_from(PROC_RANDOM_DIR)
    }

    /// Reads `entropy_avail` and `poolsize` from `dir`.
    ///
    /// # Errors
    /// - [`Error::Read`] if either file is missing or unreadable
    /// - [`Error::Parse`] if either file does not contain an unsigned integer
    pub fn read_from(dir: impl AsRef<Path>) -> Result<Self, Error> {
        let dir = dir.as_ref();
        Ok(Self {
            available: read_counter(&dir.join(ENTROPY_AVAIL_FILE))?,
            pool_size: read_counter(&dir.join(POOLSIZE_FILE))?,
        })
    }

    /// True once the kernel reports no room for more credit.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.available >= self.pool_size
    }
}

impl fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.available, self.pool_size)
    }
}

fn read_counter(path: &Path) -> Result<u32, Error> {
    let raw = fs::read_to_string(path)
        .map_err(|source| Error::Read { path: path.to_path_buf(), source })?;
    parse_value(&raw).ok_or_else(|| Error::Parse { path: path.to_path_buf(), value: raw })
}

/// Parses a procfs counter such as `"256\n"`.
#[must_use]
pub fn parse_value(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fresh scratch directory standing in for `/proc/sys/kernel/random`.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("kiss-pseudo-entropy-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn parses_counter_with_trailing_newline() {
        assert_eq!(parse_value("256\n"), Some(256));
        assert_eq!(parse_value("  4096 "), Some(4096));
    }

    #[test]
    fn rejects_non_numeric_counter() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("lots"), None);
        assert_eq!(parse_value("-1"), None);
    }

    #[test]
    fn reads_both_counters() {
        let dir = scratch_dir("status-ok");
        fs::write(dir.join(ENTROPY_AVAIL_FILE), "256\n").unwrap();
        fs::write(dir.join(POOLSIZE_FILE), "256\n").unwrap();

        let status = PoolStatus::read_from(&dir).unwrap();
        fs::remove_dir_all(&dir).ok();

        assert_eq!(status, PoolStatus { available: 256, pool_size: 256 });
        assert!(status.is_full());
        assert_eq!(status.to_string(), "256/256");
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = scratch_dir("status-missing");
        fs::write(dir.join(ENTROPY_AVAIL_FILE), "17\n").unwrap();

        let err = PoolStatus::read_from(&dir).unwrap_err();
        fs::remove_dir_all(&dir).ok();

        assert!(matches!(err, Error::Read { ref path, .. } if path.ends_with(POOLSIZE_FILE)));
    }

    #[test]
    fn garbage_is_parse_error() {
        let dir = scratch_dir("status-garbage");
        fs::write(dir.join(ENTROPY_AVAIL_FILE), "plenty\n").unwrap();
        fs::write(dir.join(POOLSIZE_FILE), "256\n").unwrap();

        let err = PoolStatus::read_from(&dir).unwrap_err();
        fs::remove_dir_all(&dir).ok();

        match err {
            | Error::Parse { value, .. } => assert_eq!(value, "plenty\n"),
            | other => panic!("expected parse error, got {other}"),
        }
    }

    #[test]
    fn partial_pool_is_not_full() {
        assert!(!PoolStatus { available: 17, pool_size: 256 }.is_full());
    }
}
