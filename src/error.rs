//! Error types for the midea-da library.

use thiserror::Error;

/// The main error type for midea-da operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Frame encoding/decoding error.
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    /// Status body is shorter than the fixed status layout.
    #[error("status body too short: need at least {expected} bytes, got {got}")]
    BodyTooShort { expected: usize, got: usize },

    /// Frame was sent by a different appliance family.
    #[error("unexpected device type 0x{got:02x}, expected 0x{expected:02x}")]
    UnexpectedDevice { expected: u8, got: u8 },
}

/// Frame-specific errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    /// Frame too short to contain header, body type and checksum.
    #[error("frame too short: need at least 12 bytes, got {0}")]
    TooShort(usize),

    /// Frame exceeds the single-byte length field.
    #[error("frame too large: {size} bytes exceeds maximum {max}")]
    TooLarge { size: usize, max: usize },

    /// Frame does not start with the sync byte.
    #[error("invalid frame header 0x{0:02x}")]
    InvalidHeader(u8),

    /// Trailing checksum does not match the frame contents.
    #[error("checksum mismatch: expected 0x{expected:02x}, got 0x{got:02x}")]
    Checksum { expected: u8, got: u8 },
}

/// Result type alias for midea-da operations.
pub type Result<T> = std::result::Result<T, Error>;
