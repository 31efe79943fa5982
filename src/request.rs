//! Outbound request frames.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::Result;
use crate::protocol::{Command, DEVICE_TYPE, encode_frame};

/// Default device protocol version written into request headers.
pub const DEFAULT_PROTOCOL_VERSION: u8 = 0x00;

/// A command addressed to a washing machine, ready to be framed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    command: Command,
    protocol_version: u8,
}

impl Request {
    /// Creates a new request with the default protocol version.
    #[must_use]
    pub const fn new(command: Command) -> Self {
        Self {
            command,
            protocol_version: DEFAULT_PROTOCOL_VERSION,
        }
    }

    /// Sets the device protocol version.
    #[must_use]
    pub const fn protocol_version(mut self, version: u8) -> Self {
        self.protocol_version = version;
        self
    }

    /// Returns the wrapped command.
    #[must_use]
    pub const fn command(&self) -> &Command {
        &self.command
    }

    /// Returns the frame body: the body type followed by the command body.
    #[must_use]
    pub fn body(&self) -> Bytes {
        let payload = self.command.encode();
        let mut buf = BytesMut::with_capacity(1 + payload.len());
        buf.put_u8(self.command.body_type());
        buf.put_slice(&payload);
        buf.freeze()
    }

    /// Serializes the request into a complete frame.
    ///
    /// Fails only when a start command carries more washing data than a
    /// frame can hold.
    pub fn serialize(&self) -> Result<Bytes> {
        let frame = encode_frame(
            DEVICE_TYPE,
            self.protocol_version,
            self.command.message_type().into(),
            &self.body(),
        )?;
        tracing::debug!(
            "serialized {:?} request, {} bytes",
            self.command.message_type(),
            frame.len()
        );
        Ok(frame)
    }
}

impl From<Command> for Request {
    fn from(command: Command) -> Self {
        Self::new(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, FrameError};

    #[test]
    fn test_query_request_frame() {
        let frame = Request::new(Command::Query).serialize().unwrap();
        assert_eq!(
            &frame[..],
            &[0xAA, 0x0B, 0xDA, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x03, 0x15]
        );
    }

    #[test]
    fn test_power_request_body() {
        let request = Request::from(Command::power(true));
        assert_eq!(&request.body()[..], &[0x02, 0x01, 0xFF]);
    }

    #[test]
    fn test_protocol_version_in_header() {
        let frame = Request::new(Command::stop())
            .protocol_version(0x02)
            .serialize()
            .unwrap();
        assert_eq!(frame[8], 0x02);
        assert_eq!(frame[9], 0x02); // set
        assert_eq!(&frame[10..13], &[0x02, 0xFF, 0x00]);
    }

    #[test]
    fn test_oversized_washing_data() {
        let err = Request::new(Command::start(vec![0u8; 250]))
            .serialize()
            .unwrap_err();
        assert!(matches!(err, Error::Frame(FrameError::TooLarge { .. })));
    }
}
