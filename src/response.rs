//! Inbound response frames.

use bytes::Bytes;

use crate::error::{Error, FrameError, Result};
use crate::protocol::{DEVICE_TYPE, MessageType, decode_frame, decode_status};
use crate::types::Status;

/// A frame received from a washing machine.
///
/// Envelope fields are always available; the decoded status is present
/// only for message types that carry the full status layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    protocol_version: u8,
    message_type: u8,
    body_type: u8,
    body: Bytes,
    status: Option<Status>,
}

impl Response {
    /// Parses a complete plain frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame is malformed, was sent by another
    /// appliance family, or claims to carry a status that is too short.
    pub fn parse(frame: &[u8]) -> Result<Self> {
        let raw = decode_frame(frame)?;

        if raw.device_type != DEVICE_TYPE {
            return Err(Error::UnexpectedDevice {
                expected: DEVICE_TYPE,
                got: raw.device_type,
            });
        }

        let Some(&body_type) = raw.body.first() else {
            return Err(FrameError::TooShort(frame.len()).into());
        };

        let status = match MessageType::from_byte(raw.message_type) {
            Some(message_type) => decode_status(&raw.body, message_type, body_type)?,
            None => {
                tracing::debug!("unknown message type 0x{:02x}", raw.message_type);
                None
            }
        };

        Ok(Self {
            protocol_version: raw.protocol_version,
            message_type: raw.message_type,
            body_type,
            body: raw.body,
            status,
        })
    }

    /// Returns the message type, if known.
    #[must_use]
    pub const fn message_type(&self) -> Option<MessageType> {
        MessageType::from_byte(self.message_type)
    }

    /// Returns the raw message type byte.
    #[must_use]
    pub const fn raw_message_type(&self) -> u8 {
        self.message_type
    }

    /// Returns the body type.
    #[must_use]
    pub const fn body_type(&self) -> u8 {
        self.body_type
    }

    /// Returns the device protocol version from the header.
    #[must_use]
    pub const fn protocol_version(&self) -> u8 {
        self.protocol_version
    }

    /// Returns the body, starting with the body type byte.
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Returns the decoded status, if this message carries one.
    #[must_use]
    pub const fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Consumes the response and returns the decoded status.
    #[must_use]
    pub fn into_status(self) -> Option<Status> {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Command, STATUS_BODY_LEN, encode_frame};
    use crate::request::Request;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn status_body(body_type: u8) -> Vec<u8> {
        let mut body = vec![0u8; STATUS_BODY_LEN];
        body[0] = body_type;
        body[1] = 0x01;
        body[2] = 0x06;
        body[3..15].copy_from_slice(&[
            0x01, 0x23, 0x45, 0x34, 0x00, 0x21, 0x0F, 0x12, 0x00, 0x05, 0x00, 0x00,
        ]);
        body[16] = 0b0001_0000;
        body[17] = 25;
        body[18] = 0;
        body[24] = 0;
        body
    }

    #[test]
    fn test_parse_query_reply() {
        init_tracing();
        let frame = encode_frame(0xDA, 0x00, 0x03, &status_body(0x03)).unwrap();
        let response = Response::parse(&frame).unwrap();

        assert_eq!(response.message_type(), Some(MessageType::Query));
        assert_eq!(response.body_type(), 0x03);
        let status = response.status().unwrap();
        assert!(status.power);
        assert!(status.start);
        assert_eq!(status.program, Some(23));
        assert_eq!(status.wash_level, '5');
        assert_eq!(status.rinse_level, 4);
        assert_eq!(status.dehydration_speed, 3);
        assert_eq!(status.wash_strength, 4);
        assert_eq!(status.softener, 2);
        assert_eq!(status.detergent, 1);
        assert_eq!(status.wash_time, 15);
        assert_eq!(status.dehydration_time, '1');
        assert_eq!(status.rinse_count, '2');
        assert_eq!(status.soak_time, 5);
        assert_eq!(status.progress, 4);
        assert_eq!(status.time_remaining, Some(25));
    }

    #[test]
    fn test_status_notification() {
        let frame = encode_frame(0xDA, 0x00, 0x04, &status_body(0x04)).unwrap();
        let response = Response::parse(&frame).unwrap();
        assert!(response.status().is_some());

        let frame = encode_frame(0xDA, 0x00, 0x04, &status_body(0x05)).unwrap();
        let response = Response::parse(&frame).unwrap();
        assert_eq!(response.message_type(), Some(MessageType::Notify1));
        assert_eq!(response.body_type(), 0x05);
        assert!(response.status().is_none());
    }

    #[test]
    fn test_unknown_message_type_keeps_envelope() {
        let frame = encode_frame(0xDA, 0x01, 0x33, &[0x07, 0x01]).unwrap();
        let response = Response::parse(&frame).unwrap();

        assert_eq!(response.message_type(), None);
        assert_eq!(response.raw_message_type(), 0x33);
        assert_eq!(response.protocol_version(), 0x01);
        assert_eq!(response.body_type(), 0x07);
        assert_eq!(&response.body()[..], &[0x07, 0x01]);
        assert_eq!(response.into_status(), None);
    }

    #[test]
    fn test_short_status_body_is_error() {
        let frame = encode_frame(0xDA, 0x00, 0x02, &[0x02, 0x01, 0x00]).unwrap();
        assert_eq!(
            Response::parse(&frame).unwrap_err(),
            Error::BodyTooShort {
                expected: STATUS_BODY_LEN,
                got: 3
            }
        );
    }

    #[test]
    fn test_wrong_device_type() {
        let frame = encode_frame(0xAC, 0x00, 0x03, &status_body(0x03)).unwrap();
        assert_eq!(
            Response::parse(&frame).unwrap_err(),
            Error::UnexpectedDevice {
                expected: 0xDA,
                got: 0xAC
            }
        );
    }

    #[test]
    fn test_replay_washing_data() {
        let frame = encode_frame(0xDA, 0x00, 0x03, &status_body(0x03)).unwrap();
        let status = Response::parse(&frame).unwrap().into_status().unwrap();

        let encoded = status.replay_command().encode();
        assert_eq!(&encoded[..2], &[0xFF, 0x01]);
        assert_eq!(&encoded[2..], &status_body(0x03)[3..15]);

        let request = Request::new(Command::start(status.washing_data.clone()));
        assert_eq!(&request.body()[3..], &status_body(0x03)[3..15]);
    }
}
