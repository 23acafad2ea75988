//! Power-Line Transceiver Main Application
//!
//! Entry point for the STM32G474-based transceiver firmware. Initializes
//! hardware and spawns one task per hardware event source; every task
//! funnels into the single link task, so protocol state has exactly one
//! writer and event ordering is preserved.

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Level, Output, Pull, Speed};
use embassy_stm32::mode::Async;
use embassy_stm32::usart::{self, UartRx};
use embassy_stm32::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use {defmt_rtt as _, panic_probe as _};

use x10_firmware::hal::carrier::CarrierDriver;
use x10_firmware::hal::gpio::{RecognizedOutput, StatusLed};
use x10_firmware::link::controller::{LinkAction, LinkController, LinkEvent};
use x10_firmware::link::timer::BitTimer;
use x10_firmware::prelude::*;

// Bind interrupt handlers
bind_interrupts!(struct Irqs {
    USART1 => usart::InterruptHandler<peripherals::USART1>;
});

/// Hardware events funneled into the link task.
static EVENTS: Channel<CriticalSectionRawMutex, LinkEvent, EVENT_QUEUE_DEPTH> = Channel::new();

/// Arms the carrier task for one bit slot.
static CARRIER: Signal<CriticalSectionRawMutex, Bit> = Signal::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Power-line transceiver firmware v{}", env!("CARGO_PKG_VERSION"));

    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    // Outputs reset high: status LEDs off, recognized output released.
    let heartbeat = StatusLed::new(Output::new(p.PB0, Level::High, Speed::Low));
    let progress = StatusLed::new(Output::new(p.PB1, Level::High, Speed::Low));
    let recognized = RecognizedOutput::new(Output::new(p.PB7, Level::High, Speed::Low));

    // Transmit line idles low; the carrier task toggles it in bursts.
    let carrier_pin = Output::new(p.PA8, Level::Low, Speed::VeryHigh);

    // Edge inputs, rising edge active.
    let clock_in = ExtiInput::new(p.PA0, p.EXTI0, Pull::Down);
    let data_in = ExtiInput::new(p.PA1, p.EXTI1, Pull::Down);
    let button_in = ExtiInput::new(p.PA2, p.EXTI2, Pull::Down);

    let serial_rx = UartRx::new(
        p.USART1,
        Irqs,
        p.PA10,
        p.DMA1_CH1,
        usart::Config::default(),
    )
    .unwrap();

    info!("USART1 initialized");

    spawner.spawn(clock_edge_task(clock_in)).unwrap();
    spawner.spawn(data_edge_task(data_in)).unwrap();
    spawner.spawn(button_task(button_in)).unwrap();
    spawner.spawn(serial_task(serial_rx)).unwrap();
    spawner.spawn(watchdog_task()).unwrap();
    spawner.spawn(carrier_task(CarrierDriver::new(carrier_pin))).unwrap();
    spawner.spawn(link_task(heartbeat, progress, recognized)).unwrap();

    info!("Tasks spawned, entering idle loop");

    // Main loop does nothing; all work happens in the event tasks.
    loop {
        Timer::after(Duration::from_secs(10)).await;
        debug!("idle");
    }
}

/// Forwards clock-line rising edges, one per bit period.
#[embassy_executor::task]
async fn clock_edge_task(mut input: ExtiInput<'static>) {
    loop {
        input.wait_for_rising_edge().await;
        EVENTS.send(LinkEvent::ClockEdge).await;
    }
}

/// Forwards data-line rising edges (pulse-present markers).
#[embassy_executor::task]
async fn data_edge_task(mut input: ExtiInput<'static>) {
    loop {
        input.wait_for_rising_edge().await;
        EVENTS.send(LinkEvent::DataEdge).await;
    }
}

/// Forwards button presses.
#[embassy_executor::task]
async fn button_task(mut input: ExtiInput<'static>) {
    loop {
        input.wait_for_rising_edge().await;
        info!("button pressed");
        EVENTS.send(LinkEvent::ButtonPress).await;
    }
}

/// Forwards received serial bytes.
#[embassy_executor::task]
async fn serial_task(mut rx: UartRx<'static, Async>) {
    let mut byte = [0u8; 1];
    loop {
        match rx.read(&mut byte).await {
            Ok(()) => EVENTS.send(LinkEvent::SerialByte(byte[0])).await,
            Err(_) => debug!("serial receive error"),
        }
    }
}

/// One liveness tick per bit period keeps the stall watchdog counting in
/// protocol time.
#[embassy_executor::task]
async fn watchdog_task() {
    let period = Duration::from_micros(u64::from(bit_period_us()));
    loop {
        Timer::after(period).await;
        EVENTS.send(LinkEvent::WatchdogTick).await;
    }
}

/// Emits one self-terminating carrier burst per arm request.
#[embassy_executor::task]
async fn carrier_task(mut driver: CarrierDriver<'static>) {
    let mut timer = BitTimer::new();
    loop {
        let bit = CARRIER.wait().await;
        timer.arm(bit);
        driver.burst().await;
        timer.on_period_elapsed();
        // Arm requests that landed inside the finished slot belong to it.
        CARRIER.reset();
    }
}

/// The single consumer of hardware events; applies controller actions to
/// the outputs.
#[embassy_executor::task]
async fn link_task(
    mut heartbeat: StatusLed<'static>,
    mut progress: StatusLed<'static>,
    mut recognized: RecognizedOutput<'static>,
) {
    let mut controller = LinkController::new();
    loop {
        let event = EVENTS.receive().await;
        for action in controller.handle(event) {
            match action {
                LinkAction::ToggleHeartbeat => heartbeat.toggle(),
                LinkAction::ToggleFrameProgress => progress.toggle(),
                LinkAction::TransmitBit(bit) => CARRIER.signal(bit),
                LinkAction::FrameRecognized => {
                    info!("start code recognized");
                    recognized.assert();
                }
                // Input masking is enforced inside the controller; the
                // EXTI and USART paths stay configured and masked events
                // are dropped at the controller boundary.
                LinkAction::EnableDataEdge
                | LinkAction::DisableDataEdge
                | LinkAction::EnableSerial
                | LinkAction::DisableSerial => {
                    debug!("input mask change: {}", action);
                }
            }
        }
    }
}
