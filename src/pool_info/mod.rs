//! The record handed to the kernel by `RNDADDENTROPY`.
//!
//! Linux declares it as
//!
//! ```c
//! struct rand_pool_info {
//!     int entropy_count;
//!     int buf_size;
//!     __u32 buf[0];
//! };
//! ```
//!
//! The flexible tail is fixed here at [`PAYLOAD_LEN`] bytes, which is all this crate ever submits.

use core::ffi::c_int;
use core::mem::size_of;

/// Number of payload bytes carried by every record.
pub const PAYLOAD_LEN: usize = 32;

/// Entropy credit claimed for each submission, in bits.
///
/// The payload is constant, so the honest figure is zero. The claim is what makes this a test tool.
pub const CLAIMED_ENTROPY_BITS: c_int = 8;

/// The bytes fed to the pool on every iteration.
///
/// This is NOT entropy. It is the first 32 bytes of a fixed ASCII string and never changes.
pub const PSEUDO_ENTROPY: [u8; PAYLOAD_LEN] = *b"3420348024823049823-984230942049";

/// `PAYLOAD_LEN` as the kernel's header type; 32 always fits.
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
const PAYLOAD_LEN_C: c_int = PAYLOAD_LEN as c_int;

/// Size of the encoded record: two `c_int` header fields followed by the payload.
pub const RECORD_LEN: usize = 2 * size_of::<c_int>() + PAYLOAD_LEN;

/// In-memory image of `struct rand_pool_info` with a fixed 32-byte buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PoolInfo {
    /// Claimed entropy in bits
    pub entropy_count: c_int,
    /// Length of `buf` in bytes
    pub buf_size: c_int,
    pub buf: [u8; PAYLOAD_LEN],
}

impl PoolInfo {
    /// Builds a record around `payload`, claiming `entropy_count` bits for it.
    ///
    /// `buf_size` is always the payload length; the kernel reads exactly that many bytes.
    #[must_use]
    pub const fn new(entropy_count: c_int, payload: [u8; PAYLOAD_LEN]) -> Self {
        Self {
            entropy_count,
            buf_size: PAYLOAD_LEN_C,
            buf: payload,
        }
    }

    /// The constant pseudo-entropy record this tool submits.
    #[must_use]
    pub const fn pseudo() -> Self {
        Self::new(CLAIMED_ENTROPY_BITS, PSEUDO_ENTROPY)
    }

    /// The bytes the kernel sees: native-endian header followed by the payload.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; RECORD_LEN] {
        let mut out = [0u8; RECORD_LEN];
        let (count, rest) = out.split_at_mut(size_of::<c_int>());
        let (size, buf) = rest.split_at_mut(size_of::<c_int>());
        count.copy_from_slice(&self.entropy_count.to_ne_bytes());
        size.copy_from_slice(&self.buf_size.to_ne_bytes());
        buf.copy_from_slice(&self.buf);
        out
    }
}

impl Default for PoolInfo {
    fn default() -> Self {
        Self::pseudo()
    }
}
