//! Plain frame encoding and decoding for the Midea protocol.
//!
//! The wire format wraps each body in a fixed 10-byte header and a
//! trailing checksum:
//! ```text
//! ┌──────┬─────┬─────────────┬──────────┬──────────┬──────────┬───────────┬──────┬──────────┐
//! │ 0xAA │ len │ device_type │ reserved │ protocol │ msg_type │ body_type │ body │ checksum │
//! │  1   │  1  │      1      │    5     │    1     │    1     │     1     │  n   │    1     │
//! └──────┴─────┴─────────────┴──────────┴──────────┴──────────┴───────────┴──────┴──────────┘
//! ```
//!
//! `len` counts everything except the checksum. The checksum is the two's
//! complement of the byte sum of everything after the sync byte.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::FrameError;

/// Frame sync byte.
pub const FRAME_HEADER: u8 = 0xAA;

/// Header length, from the sync byte up to and including the message type.
pub const HEADER_LENGTH: usize = 10;

/// Minimum frame size (header + body type + checksum).
pub const MIN_FRAME_SIZE: usize = HEADER_LENGTH + 2;

/// Maximum frame size without the checksum (bounded by the length byte).
pub const MAX_FRAME_SIZE: usize = u8::MAX as usize;

/// A frame split into its envelope fields and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    /// Device type from the header.
    pub device_type: u8,
    /// Device protocol version from the header.
    pub protocol_version: u8,
    /// Raw message type byte.
    pub message_type: u8,
    /// Body including the leading body type byte.
    pub body: Bytes,
}

/// Computes the frame checksum over `data`.
#[must_use]
pub fn checksum(data: &[u8]) -> u8 {
    data.iter()
        .fold(0u8, |acc, &b| acc.wrapping_add(b))
        .wrapping_neg()
}

/// Encodes a body into a framed message.
///
/// `body` must already start with the body type byte.
///
/// # Errors
///
/// Returns `FrameError::TooLarge` if the frame does not fit the length byte.
pub fn encode(
    device_type: u8,
    protocol_version: u8,
    message_type: u8,
    body: &[u8],
) -> Result<Bytes, FrameError> {
    let length = HEADER_LENGTH + body.len();
    let length_byte = u8::try_from(length).map_err(|_| FrameError::TooLarge {
        size: length,
        max: MAX_FRAME_SIZE,
    })?;

    let mut buf = BytesMut::with_capacity(length + 1);
    buf.put_u8(FRAME_HEADER);
    buf.put_u8(length_byte);
    buf.put_u8(device_type);
    buf.put_bytes(0x00, 5);
    buf.put_u8(protocol_version);
    buf.put_u8(message_type);
    buf.put_slice(body);
    let sum = checksum(&buf[1..]);
    buf.put_u8(sum);

    tracing::trace!("encoded frame {}", hex::encode(&buf));
    Ok(buf.freeze())
}

/// Decodes a complete framed message.
///
/// The length byte is not cross-checked against the buffer; the body runs
/// from the end of the header up to the checksum.
///
/// # Errors
///
/// Returns a `FrameError` if:
/// - The frame is shorter than [`MIN_FRAME_SIZE`]
/// - The first byte is not [`FRAME_HEADER`]
/// - The trailing checksum does not match
pub fn decode(frame: &[u8]) -> Result<RawFrame, FrameError> {
    if frame.len() < MIN_FRAME_SIZE {
        return Err(FrameError::TooShort(frame.len()));
    }

    if frame[0] != FRAME_HEADER {
        return Err(FrameError::InvalidHeader(frame[0]));
    }

    let (content, trailer) = frame.split_at(frame.len() - 1);
    let expected = checksum(&content[1..]);
    if trailer[0] != expected {
        return Err(FrameError::Checksum {
            expected,
            got: trailer[0],
        });
    }

    tracing::trace!("decoded frame {}", hex::encode(frame));

    Ok(RawFrame {
        device_type: content[2],
        protocol_version: content[HEADER_LENGTH - 2],
        message_type: content[HEADER_LENGTH - 1],
        body: Bytes::copy_from_slice(&content[HEADER_LENGTH..]),
    })
}
