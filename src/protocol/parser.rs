//! Status body parsing for the washing machine.
//!
//! The status body has a fixed layout. Offsets count from the body type
//! byte at index 0.

use bytes::Bytes;

use crate::error::{Error, Result};
use crate::protocol::message::MessageType;
use crate::types::Status;

/// Minimum status body length (body type byte included).
pub const STATUS_BODY_LEN: usize = 25;

/// Program parameter bytes replayed by a start command.
const WASHING_DATA: std::ops::Range<usize> = 3..15;

/// Phase markers that mean a cycle is running.
const RUNNING_PHASES: [u8; 2] = [2, 6];

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Returns the high nibble as a lowercase hex digit.
fn high_digit(byte: u8) -> char {
    char::from(HEX_DIGITS[usize::from(byte >> 4)])
}

/// Returns the low nibble as a lowercase hex digit.
fn low_digit(byte: u8) -> char {
    char::from(HEX_DIGITS[usize::from(byte & 0x0F)])
}

/// Reads the program byte's two hex digits as a decimal number.
///
/// Bytes with a digit above 9 have no decimal reading and yield `None`.
fn parse_program(byte: u8) -> Option<u8> {
    let rendered = hex::encode([byte]);
    let program = rendered.parse::<u8>().ok();
    if program.is_none() {
        tracing::warn!("program byte 0x{rendered} has no decimal reading");
    }
    program
}

/// Returns the lowest set progress bit, or 0 if none is set.
fn parse_progress(mask: u8) -> u8 {
    // Bits 1-6, lowest first
    (1..=6).find(|&bit| mask & (1 << bit) != 0).unwrap_or(0)
}

/// Parses a `Status` from a status body.
///
/// Format:
/// ```text
/// [body_type:1] [power:1] [phase:1] [washing_data:12 (program at 4)]
/// [status_mask:1 @16] [remaining_min:1] [remaining_hr:1] ... [error:1 @24]
/// ```
///
/// Inside `washing_data`:
/// ```text
/// @4  program                      @5  rinse_level:4 | wash_level:4
/// @6  dehydration_speed:4 | wash_strength:4
/// @8  softener:4 | detergent:4     @9  wash_time
/// @10 dehydration_time:4 | rinse_count:4
/// @12 soak_time
/// ```
pub fn parse_status(body: &[u8]) -> Result<Status> {
    if body.len() < STATUS_BODY_LEN {
        return Err(Error::BodyTooShort {
            expected: STATUS_BODY_LEN,
            got: body.len(),
        });
    }

    tracing::trace!("parsing status body {}", hex::encode(body));

    let power = body[1] > 0;
    let time_remaining = power.then(|| u16::from(body[17]) + u16::from(body[18]) * 60);

    Ok(Status {
        power,
        start: RUNNING_PHASES.contains(&body[2]),
        error_code: body[24],
        program_code: body[4],
        program: parse_program(body[4]),
        wash_time: body[9],
        soak_time: body[12],
        dehydration_time: high_digit(body[10]),
        rinse_count: low_digit(body[10]),
        dehydration_speed: body[6] >> 4,
        wash_strength: body[6] & 0x0F,
        rinse_level: body[5] >> 4,
        wash_level: low_digit(body[5]),
        softener: body[8] >> 4,
        detergent: body[8] & 0x0F,
        washing_data: Bytes::copy_from_slice(&body[WASHING_DATA]),
        progress: parse_progress(body[16]),
        time_remaining,
    })
}

/// Decodes a status body if the message classification carries one.
///
/// Returns `Ok(None)` without looking at the body when the message type and
/// body type combination has no status layout.
pub fn decode_status(
    body: &[u8],
    message_type: MessageType,
    body_type: u8,
) -> Result<Option<Status>> {
    if !message_type.carries_status(body_type) {
        tracing::debug!(
            "no status layout for {message_type:?} with body type 0x{body_type:02x}"
        );
        return Ok(None);
    }

    parse_status(body).map(Some)
}
