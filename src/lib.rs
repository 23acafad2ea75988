//! Power-Line Carrier Transceiver Firmware Library
//!
//! This library provides the core functionality for an STM32G474-based
//! transceiver that exchanges a fixed 4-bit code over a single power-line
//! output, as ~1 ms bursts of ~200 kHz carrier clocked by external edge
//! inputs.
//!
//! # Architecture
//!
//! The firmware is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │  Link Controller  │  Serial Commands  │  Status Outputs      │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     TIMING LAYER                             │
//! │  Bit Timer (one carrier burst per bit slot)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   HAL / DRIVER LAYER                         │
//! │  EXTI edges  │  USART  │  GPIO  │  Carrier drive             │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RTOS / SCHEDULER                          │
//! │           embassy-rs (async/await executor)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Single-writer state**: all protocol mutation happens on one event
//!   consumer, never in interrupt context
//! - **Type-driven design**: custom types enforce invariants at compile time
//! - **No unsafe in application code**
//! - **Functional core, imperative shell**: the link controller performs no
//!   I/O; it returns actions for the shell to apply
//! - **Explicit error handling**: fallible operations return `Result` or
//!   `Option`

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;

/// Hardware Abstraction Layer
///
/// Safe abstractions over the STM32G474 peripherals used by the link.
#[cfg(feature = "embedded")]
pub mod hal;

/// Power-Line Link Logic
///
/// The frame assembler/disassembler state machine and the bit timer.
pub mod link;

/// Serial command surface
///
/// Single-byte command parsing for the serial interface.
pub mod protocol;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::types::*;

    // Common traits
    pub use embedded_hal::digital::OutputPin;

    // Embassy
    pub use embassy_time::{Duration, Instant, Timer};

    // Error handling
    pub use core::result::Result;

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}
