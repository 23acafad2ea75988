//! Link controller
//!
//! The single protocol state machine of the transceiver. Every hardware
//! event (clock edge, data edge, button press, serial byte, watchdog
//! tick) is delivered as a value to [`LinkController::handle`], and the
//! controller answers with the output actions the caller applies to the
//! hardware. Protocol state therefore has exactly one writer and event
//! ordering is preserved without touching real interrupt masks.
//!
//! # Frame cycle
//!
//! A data-line pulse while idle begins a receive; four clock edges later
//! the assembled frame is compared against the start code and the
//! recognized action fires on a match. A button press or the serial send
//! command begins a transmit; four clock edges clock the start code onto
//! the line as carrier bursts, then the receive paths are restored.

use heapless::Vec;

use crate::config::{DEFAULT_STALL_LIMIT_TICKS, FRAME_BITS};
use crate::link::frame::Frame;
use crate::protocol::SerialCommand;
use crate::types::{Bit, LinkMode};

/// Hardware event delivered to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkEvent {
    /// Rising edge on the clock line: one bit period has begun
    ClockEdge,
    /// Rising edge on the data line: a pulse within the current bit period
    DataEdge,
    /// Push-button press
    ButtonPress,
    /// Byte received on the serial interface
    SerialByte(u8),
    /// Periodic liveness tick for the stall watchdog
    WatchdogTick,
}

#[cfg(feature = "embedded")]
impl defmt::Format for LinkEvent {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::ClockEdge => defmt::write!(f, "ClockEdge"),
            Self::DataEdge => defmt::write!(f, "DataEdge"),
            Self::ButtonPress => defmt::write!(f, "ButtonPress"),
            Self::SerialByte(byte) => defmt::write!(f, "SerialByte({:x})", byte),
            Self::WatchdogTick => defmt::write!(f, "WatchdogTick"),
        }
    }
}

/// Output action requested by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkAction {
    /// Toggle the heartbeat status output
    ToggleHeartbeat,
    /// Toggle the frame-progress status output
    ToggleFrameProgress,
    /// Arm the bit timer for one slot of carrier
    TransmitBit(Bit),
    /// A start-code frame was recognized; drive the recognized output low
    FrameRecognized,
    /// Unmask the data-line edge input
    EnableDataEdge,
    /// Mask the data-line edge input
    DisableDataEdge,
    /// Unmask the serial receive input
    EnableSerial,
    /// Mask the serial receive input
    DisableSerial,
}

#[cfg(feature = "embedded")]
impl defmt::Format for LinkAction {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::ToggleHeartbeat => defmt::write!(f, "ToggleHeartbeat"),
            Self::ToggleFrameProgress => defmt::write!(f, "ToggleFrameProgress"),
            Self::TransmitBit(bit) => defmt::write!(f, "TransmitBit({})", bit),
            Self::FrameRecognized => defmt::write!(f, "FrameRecognized"),
            Self::EnableDataEdge => defmt::write!(f, "EnableDataEdge"),
            Self::DisableDataEdge => defmt::write!(f, "DisableDataEdge"),
            Self::EnableSerial => defmt::write!(f, "EnableSerial"),
            Self::DisableSerial => defmt::write!(f, "DisableSerial"),
        }
    }
}

/// Upper bound on actions produced by a single event.
pub const MAX_ACTIONS: usize = 8;

/// Actions produced by one event, in application order.
pub type Actions = Vec<LinkAction, MAX_ACTIONS>;

/// Frame assembler/disassembler driving the per-clock-edge protocol logic.
#[derive(Clone, Debug)]
pub struct LinkController {
    /// Current direction state
    mode: LinkMode,
    /// Frame under assembly or transmission
    frame: Frame,
    /// Bit position within the frame, always in `[0, FRAME_BITS)`
    position: usize,
    /// Data-line pulses seen during the current bit period
    pulses: u16,
    /// Data-edge input unmasked
    data_edge_enabled: bool,
    /// Serial input unmasked
    serial_enabled: bool,
    /// Watchdog ticks spent waiting for a clock edge mid-frame
    stall_ticks: u32,
    /// Watchdog limit in ticks (0 = disabled)
    stall_limit: u32,
}

impl LinkController {
    /// Create an idle controller with both receive paths unmasked.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: LinkMode::Idle,
            frame: Frame::empty(),
            position: 0,
            pulses: 0,
            data_edge_enabled: true,
            serial_enabled: true,
            stall_ticks: 0,
            stall_limit: DEFAULT_STALL_LIMIT_TICKS,
        }
    }

    /// Current direction state.
    #[must_use]
    pub const fn mode(&self) -> LinkMode {
        self.mode
    }

    /// Bit position within the frame in flight.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Pulses accumulated in the current bit period.
    #[must_use]
    pub const fn pulses(&self) -> u16 {
        self.pulses
    }

    /// Check if no frame is in flight.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.mode.is_idle()
    }

    /// Set the stall watchdog limit in ticks (0 disables it).
    pub fn set_stall_limit(&mut self, ticks: u32) {
        self.stall_limit = ticks;
    }

    /// Process one hardware event, returning the actions to apply.
    pub fn handle(&mut self, event: LinkEvent) -> Actions {
        match event {
            LinkEvent::ClockEdge => self.on_clock_edge(),
            LinkEvent::DataEdge => self.on_data_edge(),
            LinkEvent::ButtonPress => self.request_send(),
            LinkEvent::SerialByte(byte) => self.on_serial_byte(byte),
            LinkEvent::WatchdogTick => self.on_watchdog_tick(),
        }
    }

    /// One bit period has begun. Runs in every mode.
    fn on_clock_edge(&mut self) -> Actions {
        let mut actions = Actions::new();
        self.stall_ticks = 0;

        let _ = actions.push(LinkAction::ToggleHeartbeat);
        // Every bit period carries a burst, in both directions.
        let _ = actions.push(LinkAction::TransmitBit(Bit::One));

        match self.mode {
            LinkMode::Receiving => {
                let bit = Bit::from_pulses(self.pulses);
                self.frame.set_bit(self.position, bit);
                self.pulses = 0;
                let _ = actions.push(LinkAction::ToggleFrameProgress);

                self.position += 1;
                if self.position == FRAME_BITS {
                    if self.frame.is_start_code() {
                        let _ = actions.push(LinkAction::FrameRecognized);
                    }
                    self.position = 0;
                    self.mode = LinkMode::Idle;
                }
            }
            LinkMode::Sending => {
                if let Some(bit) = self.frame.bit(self.position) {
                    let _ = actions.push(LinkAction::TransmitBit(bit));
                }

                self.position += 1;
                if self.position == FRAME_BITS {
                    self.position = 0;
                    self.mode = LinkMode::Idle;
                    self.data_edge_enabled = true;
                    self.serial_enabled = true;
                    let _ = actions.push(LinkAction::EnableDataEdge);
                    let _ = actions.push(LinkAction::EnableSerial);
                }
            }
            LinkMode::Idle => {}
        }

        actions
    }

    /// A pulse on the data line marks the current bit period as a one.
    fn on_data_edge(&mut self) -> Actions {
        let actions = Actions::new();
        if !self.data_edge_enabled {
            return actions;
        }

        if self.mode.is_idle() {
            self.mode = LinkMode::Receiving;
            self.stall_ticks = 0;
        }
        self.pulses = self.pulses.saturating_add(1);

        actions
    }

    /// Begin transmitting the start code. Accepted only from Idle; a
    /// request arriving mid-frame is dropped.
    fn request_send(&mut self) -> Actions {
        let mut actions = Actions::new();
        if !self.mode.is_idle() {
            return actions;
        }

        self.mode = LinkMode::Sending;
        self.frame = Frame::START_CODE;
        self.position = 0;
        self.stall_ticks = 0;
        self.serial_enabled = false;
        self.data_edge_enabled = false;
        let _ = actions.push(LinkAction::DisableSerial);
        let _ = actions.push(LinkAction::DisableDataEdge);

        actions
    }

    /// A serial byte arrived; the send command triggers a transmission.
    fn on_serial_byte(&mut self, byte: u8) -> Actions {
        if !self.serial_enabled {
            return Actions::new();
        }

        match SerialCommand::parse(byte) {
            Some(SerialCommand::SendStartCode) => self.request_send(),
            None => Actions::new(),
        }
    }

    /// Liveness tick. A frame waiting on a clock edge that never arrives
    /// is abandoned after the configured number of ticks.
    fn on_watchdog_tick(&mut self) -> Actions {
        let mut actions = Actions::new();
        if self.stall_limit == 0 || self.mode.is_idle() {
            return actions;
        }

        self.stall_ticks += 1;
        if self.stall_ticks >= self.stall_limit {
            self.mode = LinkMode::Idle;
            self.frame = Frame::empty();
            self.position = 0;
            self.pulses = 0;
            self.stall_ticks = 0;
            if !self.data_edge_enabled {
                self.data_edge_enabled = true;
                let _ = actions.push(LinkAction::EnableDataEdge);
            }
            if !self.serial_enabled {
                self.serial_enabled = true;
                let _ = actions.push(LinkAction::EnableSerial);
            }
        }

        actions
    }
}

impl Default for LinkController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for LinkController {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Link({}, pos={})", self.mode, self.position as u32);
    }
}
