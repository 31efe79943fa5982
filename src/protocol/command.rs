//! Commands sent to the washing machine.
//!
//! Each command knows its message type and body type and encodes the
//! bytes that follow the body type in the frame body.

use bytes::{BufMut, Bytes, BytesMut};

use crate::protocol::message::{BODY_TYPE_CONTROL, BODY_TYPE_QUERY, MessageType};

/// Second byte of the power command.
const POWER_TRAILER: u8 = 0xFF;

/// First byte of the start/stop command.
const START_PREFIX: u8 = 0xFF;

/// Commands understood by the washing machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Request the full status.
    Query,
    /// Switch the appliance on or off.
    SetPower {
        /// Target power state.
        power: bool,
    },
    /// Start or stop a wash cycle.
    SetStart {
        /// `true` starts a cycle, `false` stops it.
        start: bool,
        /// Program parameters appended when starting, usually the
        /// `washing_data` of a previously decoded status.
        washing_data: Bytes,
    },
}

impl Command {
    /// Creates a power command.
    #[must_use]
    pub const fn power(power: bool) -> Self {
        Self::SetPower { power }
    }

    /// Creates a command that starts a cycle with the given program bytes.
    #[must_use]
    pub fn start(washing_data: impl Into<Bytes>) -> Self {
        Self::SetStart {
            start: true,
            washing_data: washing_data.into(),
        }
    }

    /// Creates a command that stops the running cycle.
    #[must_use]
    pub const fn stop() -> Self {
        Self::SetStart {
            start: false,
            washing_data: Bytes::new(),
        }
    }

    /// Returns the message type the command is sent with.
    #[must_use]
    pub const fn message_type(&self) -> MessageType {
        match self {
            Self::Query => MessageType::Query,
            Self::SetPower { .. } | Self::SetStart { .. } => MessageType::Set,
        }
    }

    /// Returns the body type the command is sent with.
    #[must_use]
    pub const fn body_type(&self) -> u8 {
        match self {
            Self::Query => BODY_TYPE_QUERY,
            Self::SetPower { .. } | Self::SetStart { .. } => BODY_TYPE_CONTROL,
        }
    }

    /// Encodes the command body (without the leading body type byte).
    ///
    /// Format:
    /// ```text
    /// Query:     (empty)
    /// SetPower:  [power:1] [0xFF]
    /// SetStart:  [0xFF] [start:1] (if start: [washing_data...])
    /// ```
    #[must_use]
    pub fn encode(&self) -> Bytes {
        match self {
            Self::Query => Bytes::new(),
            Self::SetPower { power } => Bytes::copy_from_slice(&[u8::from(*power), POWER_TRAILER]),
            Self::SetStart {
                start: true,
                washing_data,
            } => {
                let mut buf = BytesMut::with_capacity(2 + washing_data.len());
                buf.put_u8(START_PREFIX);
                buf.put_u8(0x01);
                buf.put_slice(washing_data);
                buf.freeze()
            }
            Self::SetStart { start: false, .. } => Bytes::from_static(&[START_PREFIX, 0x00]),
        }
    }
}
