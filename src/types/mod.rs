//! Data types for decoded washing machine messages.

pub mod status;

pub use status::Status;
