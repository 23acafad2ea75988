//! Frame type tests
//!
//! Verifies the fixed four-bit frame buffer and the start-code
//! comparison.
//! Run with: cargo test --no-default-features --features std --test frame_tests

use x10_firmware::config::FRAME_BITS;
use x10_firmware::link::frame::Frame;
use x10_firmware::types::Bit;

#[test]
fn frame_is_exactly_four_bits() {
    assert_eq!(FRAME_BITS, 4);
    assert_eq!(Frame::empty().bits().len(), FRAME_BITS);
}

#[test]
fn start_code_is_1110() {
    assert_eq!(Frame::START_CODE.bits().map(Bit::as_u8), [1, 1, 1, 0]);
}

#[test]
fn only_the_start_code_matches() {
    for raw in 0u8..16 {
        let frame = Frame::from([
            (raw >> 3) & 1,
            (raw >> 2) & 1,
            (raw >> 1) & 1,
            raw & 1,
        ]);
        assert_eq!(frame.is_start_code(), raw == 0b1110, "pattern {raw:04b}");
    }
}

#[test]
fn bits_store_in_wire_order() {
    let mut frame = Frame::empty();
    frame.set_bit(0, Bit::One);
    frame.set_bit(3, Bit::One);
    assert_eq!(frame.bits().map(Bit::as_u8), [1, 0, 0, 1]);
}

#[test]
fn positions_past_the_end_are_dropped() {
    let mut frame = Frame::empty();
    frame.set_bit(FRAME_BITS, Bit::One);
    frame.set_bit(usize::MAX, Bit::One);
    assert_eq!(frame, Frame::empty());
    assert_eq!(frame.bit(FRAME_BITS), None);
}

#[test]
fn default_frame_is_empty() {
    assert_eq!(Frame::default(), Frame::empty());
}

#[test]
fn bit_inference_from_pulses() {
    assert_eq!(Bit::from_pulses(0), Bit::Zero);
    assert_eq!(Bit::from_pulses(1), Bit::One);
    assert_eq!(Bit::from_pulses(u16::MAX), Bit::One);
}
