//! Decode errors.

use thiserror::Error;

/// A structural decoding failure.
///
/// All variants are fatal to the decode call. Malformed input does not
/// become valid by reattempting, so nothing here is retried internally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The supplied length is less than the fixed 236-byte header.
    #[error("The data is too short to build a DHCP header ({required} bytes): length={length}")]
    TooShort {
        /// The fixed header size.
        required: usize,
        /// The length the caller supplied.
        length: usize,
    },
    /// The offset/length pair exceeds the actual buffer.
    #[error("The bounds exceed the buffer: buffer={buffer}, offset={offset}, length={length}")]
    OutOfBounds {
        buffer: usize,
        offset: usize,
        length: usize,
    },
    /// The computed payload length is negative.
    #[error("The length of the payload seems to be wrong: buffer={buffer}, offset={offset}, header={header}")]
    InvalidLength {
        buffer: usize,
        offset: usize,
        header: usize,
    },
}
