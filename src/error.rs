//! Error type for QR encoding.

use core::fmt;

/// Result type for encoding operations.
pub type Result<T> = core::result::Result<T, EncodeError>;

/// Reasons an encode call can be rejected.
///
/// Every variant is reported before anything is drawn into the caller's module buffer, so a
/// failed call leaves that buffer exactly as it was handed in.
///
/// Ways to handle [`EncodeError::DataTooLarge`]:
///
/// - Lower the error correction level if it was greater than [`EccLevel::Low`](crate::EccLevel::Low).
/// - Request a larger version.
/// - Restrict the payload to digits or the alphanumeric set so a denser mode is selected.
/// - Shorten the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Version number outside 1..=40, or not the version a locked encoder was built for.
    InvalidVersion(u8),
    /// Error correction level index outside 0..=3.
    InvalidEccLevel(u8),
    /// The module buffer is shorter than [`buffer_size_bytes`](crate::buffer_size_bytes).
    BufferTooSmall {
        /// Bytes needed for the requested version.
        required: usize,
        /// Bytes the caller supplied.
        actual: usize,
    },
    /// The encoded segment does not fit the data capacity of the version and ECC level.
    DataTooLarge {
        /// Bits needed by the segment, or `None` if the character count overflows its field.
        required_bits: Option<usize>,
        /// Data capacity in bits.
        capacity_bits: usize,
    },
    /// A scratch buffer could not be allocated.
    OutOfMemory,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InvalidVersion(v) => write!(f, "Invalid version: {} (must be 1-40)", v),
            EncodeError::InvalidEccLevel(e) => {
                write!(f, "Invalid error correction level: {} (must be 0-3)", e)
            }
            EncodeError::BufferTooSmall { required, actual } => {
                write!(f, "Module buffer too small: need {} bytes, got {}", required, actual)
            }
            EncodeError::DataTooLarge { required_bits: Some(bits), capacity_bits } => {
                write!(f, "Data length = {} bits, Max capacity = {} bits", bits, capacity_bits)
            }
            EncodeError::DataTooLarge { required_bits: None, capacity_bits } => {
                write!(f, "Segment too long, Max capacity = {} bits", capacity_bits)
            }
            EncodeError::OutOfMemory => write!(f, "Scratch allocation failed"),
        }
    }
}

impl std::error::Error for EncodeError {}
