//! Configuration and constants tests
//!
//! Verifies the timing derivations against the hardware targets.
//! Run with: cargo test --no-default-features --features std --test config_tests

use x10_firmware::config::*;

// =============================================================================
// Clock and Countdown Sources
// =============================================================================

#[test]
fn timing_clock_is_3_6864_mhz() {
    assert_eq!(TIMING_CLOCK_HZ, 3_686_400);
}

#[test]
fn bit_slot_is_3712_cycles() {
    assert_eq!(bit_period_cycles(), 3712);
}

#[test]
fn bit_period_just_over_1ms() {
    // 58 counts at clock/64 overshoots the 1 ms target by under 1%.
    let us = bit_period_us();
    assert_eq!(us, 1006);
    assert!(us >= 1000 && us <= 1010);
}

#[test]
fn compare_target_is_nearest_to_1ms() {
    // 57.6 counts would be exact; 58 is the nearest integer.
    let exact = TIMING_CLOCK_HZ as f64 / 1000.0 / BIT_PERIOD_PRESCALER as f64;
    assert!((BIT_PERIOD_COMPARE as f64 - exact).abs() < 0.5);
}

// =============================================================================
// Carrier
// =============================================================================

#[test]
fn carrier_is_204_8_khz() {
    assert_eq!(carrier_hz(), 204_800);
}

#[test]
fn carrier_within_3_percent_of_200khz() {
    let target = 200_000i64;
    let delta = (i64::from(carrier_hz()) - target).abs();
    assert!(delta * 100 / target < 3);
}

#[test]
fn carrier_half_period_matches_rate() {
    assert_eq!(carrier_half_period_ns(), 2441);
}

// =============================================================================
// Protocol Constants
// =============================================================================

#[test]
fn frame_is_four_bits() {
    assert_eq!(FRAME_BITS, 4);
}

#[test]
fn serial_send_command_is_lowercase_a() {
    assert_eq!(SERIAL_SEND_COMMAND, b'a');
}

#[test]
fn stall_watchdog_enabled_by_default() {
    assert!(DEFAULT_STALL_LIMIT_TICKS > 0);
}

#[test]
fn event_queue_holds_a_full_frame_of_events() {
    // Four clock edges plus interleaved data edges and a watchdog tick.
    assert!(EVENT_QUEUE_DEPTH >= 2 * FRAME_BITS + 1);
}
