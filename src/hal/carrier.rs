//! Carrier burst drive
//!
//! Software rendition of the two countdown sources: toggles the transmit
//! pin at the carrier half-period for one bit slot, then leaves the line
//! idle low. A burst self-terminates at slot end; nothing stops it early.

use embassy_stm32::gpio::Output;
use embassy_time::{Duration, Instant, Timer};

use crate::config::{bit_period_us, carrier_half_period_ns};

/// Drives the power-line transmit pin in fixed-length carrier bursts.
pub struct CarrierDriver<'d> {
    pin: Output<'d>,
}

impl<'d> CarrierDriver<'d> {
    /// Wrap the transmit pin (created low, line idle).
    #[must_use]
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }

    /// Emit one bit slot of carrier and return with the line idle low.
    pub async fn burst(&mut self) {
        let half = Duration::from_nanos(u64::from(carrier_half_period_ns()));
        let deadline = Instant::now() + Duration::from_micros(u64::from(bit_period_us()));

        while Instant::now() < deadline {
            self.pin.toggle();
            Timer::after(half).await;
        }
        self.pin.set_low();
    }
}
