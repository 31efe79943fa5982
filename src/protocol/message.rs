//! Message classification for the Midea framing protocol.
//!
//! The message type is the last header byte of every frame and tells
//! whether the frame is a query, a set, or an unsolicited notification.

/// Device type byte carried by every washing machine frame.
pub const DEVICE_TYPE: u8 = 0xDA;

/// Body type of the status query.
pub const BODY_TYPE_QUERY: u8 = 0x03;

/// Body type shared by the power and start/stop commands.
pub const BODY_TYPE_CONTROL: u8 = 0x02;

/// Body type of a notification that carries the full status layout.
pub const BODY_TYPE_STATUS_NOTIFY: u8 = 0x04;

/// Frame classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MessageType {
    /// Set request, or the reply to one.
    Set = 0x02,
    /// Query request, or the reply to one.
    Query = 0x03,
    /// Asynchronous notification (variant 1).
    Notify1 = 0x04,
    /// Asynchronous notification (variant 2).
    Notify2 = 0x05,
    /// Exception report.
    Exception = 0x06,
    /// Serial number query.
    QuerySn = 0x07,
    /// Exception report (variant 2).
    Exception2 = 0x0A,
    /// Subtype query.
    QuerySubtype = 0xA0,
}

impl MessageType {
    /// All known message types.
    pub const ALL: [Self; 8] = [
        Self::Set,
        Self::Query,
        Self::Notify1,
        Self::Notify2,
        Self::Exception,
        Self::QuerySn,
        Self::Exception2,
        Self::QuerySubtype,
    ];

    /// Attempts to parse a message type from a byte.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x02 => Some(Self::Set),
            0x03 => Some(Self::Query),
            0x04 => Some(Self::Notify1),
            0x05 => Some(Self::Notify2),
            0x06 => Some(Self::Exception),
            0x07 => Some(Self::QuerySn),
            0x0A => Some(Self::Exception2),
            0xA0 => Some(Self::QuerySubtype),
            _ => None,
        }
    }

    /// Returns true if a body of this type carries the full status layout.
    ///
    /// Query and set replies always do; notifications only when tagged
    /// with [`BODY_TYPE_STATUS_NOTIFY`].
    #[must_use]
    pub const fn carries_status(&self, body_type: u8) -> bool {
        match self {
            Self::Query | Self::Set => true,
            Self::Notify1 => body_type == BODY_TYPE_STATUS_NOTIFY,
            _ => false,
        }
    }
}

impl From<MessageType> for u8 {
    fn from(msg: MessageType) -> Self {
        msg as Self
    }
}
