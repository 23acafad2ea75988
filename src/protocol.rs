//! Serial command surface
//!
//! The serial interface carries single-byte commands; there is no framing
//! and no response path. Unknown bytes carry no command and are dropped.

use crate::config::SERIAL_SEND_COMMAND;

/// Command parsed from one received serial byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SerialCommand {
    /// Transmit the start code on the power-line link
    SendStartCode,
}

impl SerialCommand {
    /// Parse one received byte.
    #[must_use]
    pub const fn parse(byte: u8) -> Option<Self> {
        match byte {
            SERIAL_SEND_COMMAND => Some(Self::SendStartCode),
            _ => None,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for SerialCommand {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::SendStartCode => defmt::write!(f, "SendStartCode"),
        }
    }
}
