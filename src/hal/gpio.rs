//! GPIO Abstractions
//!
//! Type-safe wrappers for the transceiver's output pins. All outputs are
//! active low, matching a port that resets with every line driven high.

use embassy_stm32::gpio::Output;

/// Status LED state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LedState {
    /// LED is off
    #[default]
    Off,
    /// LED is on
    On,
}

impl LedState {
    /// Toggle the LED state
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }
}

impl defmt::Format for LedState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Off => defmt::write!(f, "OFF"),
            Self::On => defmt::write!(f, "ON"),
        }
    }
}

/// Toggleable status output (heartbeat / frame progress), active low.
pub struct StatusLed<'d> {
    pin: Output<'d>,
    state: LedState,
}

impl<'d> StatusLed<'d> {
    /// Wrap an output pin created high (LED off).
    #[must_use]
    pub fn new(pin: Output<'d>) -> Self {
        Self {
            pin,
            state: LedState::Off,
        }
    }

    /// Turn the LED on (drive the line low).
    pub fn on(&mut self) {
        self.pin.set_low();
        self.state = LedState::On;
    }

    /// Turn the LED off (release the line high).
    pub fn off(&mut self) {
        self.pin.set_high();
        self.state = LedState::Off;
    }

    /// Toggle the LED.
    pub fn toggle(&mut self) {
        match self.state {
            LedState::Off => self.on(),
            LedState::On => self.off(),
        }
    }

    /// Get current state
    #[must_use]
    pub const fn state(&self) -> LedState {
        self.state
    }
}

/// Recognized-frame output, driven low when a start-code frame arrives.
///
/// The assertion latches; nothing in the protocol clears it.
pub struct RecognizedOutput<'d> {
    pin: Output<'d>,
    asserted: bool,
}

impl<'d> RecognizedOutput<'d> {
    /// Wrap an output pin created high (not asserted).
    #[must_use]
    pub fn new(pin: Output<'d>) -> Self {
        Self {
            pin,
            asserted: false,
        }
    }

    /// Drive the output low.
    pub fn assert(&mut self) {
        self.pin.set_low();
        self.asserted = true;
    }

    /// Release the output high.
    pub fn clear(&mut self) {
        self.pin.set_high();
        self.asserted = false;
    }

    /// Whether the output is currently driven low.
    #[must_use]
    pub const fn is_asserted(&self) -> bool {
        self.asserted
    }
}
