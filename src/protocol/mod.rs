//! Protocol definitions for Midea washing machine communication.
//!
//! This module contains the low-level protocol types including:
//! - Frame encoding/decoding
//! - Message classification and fixed identifiers
//! - Commands
//! - Status body parsing

pub mod command;
pub mod frame;
pub mod message;
pub mod parser;

pub use command::Command;
pub use frame::{
    FRAME_HEADER, HEADER_LENGTH, RawFrame, decode as decode_frame, encode as encode_frame,
};
pub use message::{
    BODY_TYPE_CONTROL, BODY_TYPE_QUERY, BODY_TYPE_STATUS_NOTIFY, DEVICE_TYPE, MessageType,
};
pub use parser::{STATUS_BODY_LEN, decode_status, parse_status};
