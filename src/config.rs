//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the power-line carrier
//! transceiver. The wire code, timing targets for the two countdown
//! sources, and pin mappings are centralized here.

/// Reference clock feeding both countdown sources (3.6864 MHz).
pub const TIMING_CLOCK_HZ: u32 = 3_686_400;

/// Prescaler divisor for the bit-period countdown source.
pub const BIT_PERIOD_PRESCALER: u32 = 64;

/// Compare target for the bit-period countdown source.
///
/// A 1 ms slot at 3.6864 MHz / 64 needs 57.6 counts; 58 is the nearest
/// integer and stretches the slot to 3712 clock cycles.
pub const BIT_PERIOD_COMPARE: u32 = 58;

/// Compare target for the unprescaled carrier-toggle source.
///
/// Toggle-on-match gives `clock / (2 * (compare + 1))` = 204.8 kHz, the
/// closest reachable rate to the 200 kHz carrier target.
pub const CARRIER_COMPARE: u32 = 8;

/// Number of bits in a link frame.
pub const FRAME_BITS: usize = 4;

/// Serial command byte that requests a start-code transmission.
pub const SERIAL_SEND_COMMAND: u8 = b'a';

/// Default stall watchdog limit in bit periods (0 disables the watchdog).
pub const DEFAULT_STALL_LIMIT_TICKS: u32 = 16;

/// Capacity of the hardware event channel feeding the link task.
pub const EVENT_QUEUE_DEPTH: usize = 16;

/// Clock cycles in one bit slot.
#[must_use]
pub const fn bit_period_cycles() -> u32 {
    BIT_PERIOD_COMPARE * BIT_PERIOD_PRESCALER
}

/// Bit slot length in microseconds (just over the 1 ms target).
#[must_use]
pub const fn bit_period_us() -> u32 {
    (bit_period_cycles() as u64 * 1_000_000 / TIMING_CLOCK_HZ as u64) as u32
}

/// Carrier frequency in Hz (204.8 kHz).
#[must_use]
pub const fn carrier_hz() -> u32 {
    TIMING_CLOCK_HZ / (2 * (CARRIER_COMPARE + 1))
}

/// Carrier half-period in nanoseconds, for toggle scheduling.
#[must_use]
pub const fn carrier_half_period_ns() -> u32 {
    1_000_000_000 / (2 * carrier_hz())
}

/// Pin assignments for GPIO
pub mod pins {
    //! GPIO pin assignments matching the schematic

    /// Heartbeat status LED (toggled once per clock edge, active low)
    pub const LED_HEARTBEAT: &str = "PB0";

    /// Frame-progress status LED (toggled once per received bit, active low)
    pub const LED_PROGRESS: &str = "PB1";

    /// Recognized-frame output (driven low on a start-code match)
    pub const RECOGNIZED_OUT: &str = "PB7";

    /// Power-line transmit output (carrier bursts)
    pub const CARRIER_OUT: &str = "PA8";

    /// Clock edge input (one rising edge per bit period)
    pub const CLOCK_IN: &str = "PA0";

    /// Data edge input (pulse-present marker within a bit period)
    pub const DATA_IN: &str = "PA1";

    /// Push-button input (requests a start-code transmission)
    pub const BUTTON_IN: &str = "PA2";

    /// USART1 RX (serial command byte)
    pub const SERIAL_RX: &str = "PA10";
}
