//! Bit timer
//!
//! Fire-and-forget carrier pulse generator. Arming enables both hardware
//! countdown sources at once: the bit-slot source that bounds the burst at
//! roughly 1 ms, and the carrier-toggle source that flips the transmit
//! line at 204.8 kHz within the slot. The slot compare-match is the only
//! thing that stops them; no caller may end a burst early.

use crate::types::Bit;

/// State of the two timing sources backing one bit slot of carrier.
#[derive(Clone, Copy, Debug, Default)]
pub struct BitTimer {
    armed: bool,
    bursts: u32,
}

impl BitTimer {
    /// Create a disarmed timer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            armed: false,
            bursts: 0,
        }
    }

    /// Enable both timing sources for one bit slot of carrier.
    ///
    /// The carrier runs for the full slot regardless of the bit value:
    /// presence is signaled per period, not keyed within it. Arming while
    /// a slot is already active keeps the running slot.
    pub fn arm(&mut self, _bit: Bit) {
        if !self.armed {
            self.armed = true;
            self.bursts = self.bursts.wrapping_add(1);
        }
    }

    /// Slot compare-match: disable both sources, ending the burst.
    pub fn on_period_elapsed(&mut self) {
        self.armed = false;
    }

    /// Whether a carrier burst is currently active.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    /// Number of bursts started (diagnostic counter).
    #[must_use]
    pub const fn bursts(&self) -> u32 {
        self.bursts
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for BitTimer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "BitTimer(armed={}, bursts={})", self.armed, self.bursts);
    }
}
