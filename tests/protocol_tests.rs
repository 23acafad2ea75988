//! Serial command parsing tests
//!
//! Run with: cargo test --no-default-features --features std --test protocol_tests

use x10_firmware::config::SERIAL_SEND_COMMAND;
use x10_firmware::protocol::SerialCommand;

#[test]
fn send_command_byte_parses() {
    assert_eq!(
        SerialCommand::parse(b'a'),
        Some(SerialCommand::SendStartCode)
    );
}

#[test]
fn command_byte_matches_config() {
    assert_eq!(SERIAL_SEND_COMMAND, b'a');
}

#[test]
fn parsing_is_case_sensitive() {
    assert_eq!(SerialCommand::parse(b'A'), None);
}

#[test]
fn all_other_bytes_carry_no_command() {
    for byte in 0u8..=255 {
        if byte == SERIAL_SEND_COMMAND {
            continue;
        }
        assert_eq!(SerialCommand::parse(byte), None, "byte {byte:#04x}");
    }
}
