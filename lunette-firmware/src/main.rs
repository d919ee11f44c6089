//! Lunette - Round-LCD Smartwatch Firmware
//!
//! Main firmware binary for RP2040 boards with a GC9A01 round LCD and a
//! rotary encoder with push button. Named after the bezel ring framing a
//! watch crystal.
//!
//! All logic lives in lunette-core; this binary wires the peripherals to
//! the core's collaborator traits and runs the tasks.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::Rtc;
use embassy_rp::spi::{self, Spi};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use lunette_core::config::WatchConfig;

mod channels;
mod clock;
mod display;
mod tasks;
mod weather;

// SPI transfer staging buffer for the panel interface (must live forever)
static DISPLAY_BUF: StaticCell<[u8; 1024]> = StaticCell::new();

// RTC lives forever so the UI task can hold a reference
static RTC_CELL: StaticCell<Rtc<'static, RTC>> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lunette firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let cfg = WatchConfig::default();

    // Backlight on before the first frame so boot shows nothing stale
    let _backlight = Output::new(p.PIN_25, Level::High);

    // GC9A01 over SPI1 (SCK=GPIO10, MOSI=GPIO11, CS=GPIO9, DC=GPIO8, RST=GPIO12)
    let mut spi_config = spi::Config::default();
    spi_config.frequency = 62_500_000;
    let spi_bus = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, spi_config);
    let cs = Output::new(p.PIN_9, Level::High);
    let dc = Output::new(p.PIN_8, Level::Low);
    let rst = Output::new(p.PIN_12, Level::Low);

    let display_buf = DISPLAY_BUF.init([0u8; 1024]);
    let panel = match display::Gc9a01Panel::new(spi_bus, cs, dc, rst, display_buf) {
        Ok(panel) => panel,
        Err(e) => {
            error!("Failed to initialize display: {:?}", e);
            core::panic!("display bring-up failed");
        }
    };
    info!("GC9A01 initialized");

    // RTC free-runs from the placeholder epoch until a sync source exists
    let mut rtc = Rtc::new(p.RTC);
    if let Err(e) = rtc.set_datetime(clock::boot_epoch()) {
        warn!("Failed to set RTC: {:?}", Debug2Format(&e));
    }
    let rtc = RTC_CELL.init(rtc);
    info!("RTC initialized");

    // Encoder (CLK=GPIO14, DT=GPIO15) and its push button (GPIO13),
    // all active low with pull-ups
    let enc_clk = Input::new(p.PIN_14, Pull::Up);
    let enc_dt = Input::new(p.PIN_15, Pull::Up);
    let button = Input::new(p.PIN_13, Pull::Up);

    // Spawn tasks
    spawner
        .spawn(tasks::encoder_task(enc_clk, enc_dt, cfg.rotation_debounce_ms))
        .unwrap();
    spawner.spawn(tasks::ui_task(panel, button, rtc, cfg)).unwrap();

    info!("All tasks spawned, watch running");
}
