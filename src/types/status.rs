//! Washing machine status snapshot.

use bytes::Bytes;

use crate::protocol::Command;

/// Full status decoded from a query reply, set reply or status notification.
///
/// Some nibble fields are kept as the hex digit character the appliance
/// reports while others are integers. Consumers format or compare against
/// these exact representations, so they are not unified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// Appliance is powered on.
    pub power: bool,
    /// A cycle is running (phase marker 2 or 6).
    pub start: bool,
    /// Error code (0 = none).
    pub error_code: u8,
    /// Raw program byte.
    pub program_code: u8,
    /// Program number: the program byte's hex digits read as a decimal
    /// number. `None` when the byte has a hex digit above 9.
    pub program: Option<u8>,
    /// Wash time in minutes.
    pub wash_time: u8,
    /// Soak time in minutes.
    pub soak_time: u8,
    /// Dehydration time (hex digit).
    pub dehydration_time: char,
    /// Rinse count (hex digit).
    pub rinse_count: char,
    /// Dehydration speed (0-15).
    pub dehydration_speed: u8,
    /// Wash strength (0-15).
    pub wash_strength: u8,
    /// Rinse water level (0-15).
    pub rinse_level: u8,
    /// Wash water level (hex digit).
    pub wash_level: char,
    /// Softener dosage (0-15).
    pub softener: u8,
    /// Detergent dosage (0-15).
    pub detergent: u8,
    /// Program parameter bytes, replayed verbatim by a start command.
    pub washing_data: Bytes,
    /// Current cycle phase (1-6), or 0 when idle.
    pub progress: u8,
    /// Remaining time in minutes, only reported while powered on.
    pub time_remaining: Option<u16>,
}

impl Status {
    /// Builds a command that starts a cycle with the current program.
    #[must_use]
    pub fn replay_command(&self) -> Command {
        Command::start(self.washing_data.clone())
    }
}
