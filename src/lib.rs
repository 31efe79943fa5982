//! # midea-da
//!
//! Message encoding and decoding for Midea washing machines (device type `0xDA`).
//!
//! This library builds command bodies and decodes status bodies for the
//! washing machine family of the Midea LAN protocol. It is synchronous and
//! does no I/O: the caller owns the connection and the security layer.
//!
//! ## Features
//!
//! - Closed [`Command`] enum for query, power and start/stop
//! - Fixed-layout [`Status`] decoding with explicit dispatch on message type
//! - Plain frame assembly and checksum validation
//! - Comprehensive error handling
//!
//! ## Quick Start
//!
//! ```
//! use midea_da::{Command, Request, Response};
//!
//! // Ask the appliance for its status
//! let frame = Request::new(Command::Query).serialize()?;
//! assert_eq!(frame[2], 0xDA);
//!
//! // Decode a reply received from the transport
//! let reply = [
//!     0xAA, 0x0B, 0xDA, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x05, 0x07, 0x0F,
//! ];
//! let response = Response::parse(&reply)?;
//! assert!(response.status().is_none());
//! # Ok::<(), midea_da::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`protocol`] - Low-level protocol types (frames, message types, commands, parsing)
//! - [`types`] - Decoded data structures
//! - [`request`] - Outbound [`Request`] frames
//! - [`response`] - Inbound [`Response`] frames

pub mod error;
pub mod protocol;
pub mod request;
pub mod response;
pub mod types;

// Re-exports for convenience
pub use error::{Error, FrameError, Result};
pub use protocol::{Command, MessageType, decode_status, parse_status};
pub use request::Request;
pub use response::Response;
pub use types::Status;
