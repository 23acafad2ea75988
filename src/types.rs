//! Shared types used across the transceiver firmware
//!
//! Domain types for the bit-level link protocol. Everything here is plain
//! data and usable from both the target build and host tests.

/// A single protocol bit on the power-line link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Bit {
    /// No pulse observed during the bit period
    #[default]
    Zero,
    /// At least one pulse observed during the bit period
    One,
}

impl Bit {
    /// Infer the received bit from the number of data-line pulses seen
    /// during one bit period: presence of any pulse reads as a one.
    #[must_use]
    pub const fn from_pulses(pulses: u16) -> Self {
        if pulses > 0 {
            Self::One
        } else {
            Self::Zero
        }
    }

    /// Check whether this is a one bit.
    #[must_use]
    pub const fn is_one(self) -> bool {
        matches!(self, Self::One)
    }

    /// Numeric value of the bit.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

impl From<bool> for Bit {
    fn from(set: bool) -> Self {
        if set {
            Self::One
        } else {
            Self::Zero
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Bit {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.as_u8());
    }
}

/// Link direction state.
///
/// Receiving and Sending are mutually exclusive; either is entered only
/// from Idle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LinkMode {
    /// No frame in flight
    #[default]
    Idle,
    /// Assembling an incoming frame from data-line pulses
    Receiving,
    /// Clocking the start code onto the line
    Sending,
}

impl LinkMode {
    /// Check if no frame is in flight.
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Check if a frame is being assembled.
    #[must_use]
    pub const fn is_receiving(self) -> bool {
        matches!(self, Self::Receiving)
    }

    /// Check if a frame is being transmitted.
    #[must_use]
    pub const fn is_sending(self) -> bool {
        matches!(self, Self::Sending)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for LinkMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Idle => defmt::write!(f, "IDLE"),
            Self::Receiving => defmt::write!(f, "RX"),
            Self::Sending => defmt::write!(f, "TX"),
        }
    }
}
