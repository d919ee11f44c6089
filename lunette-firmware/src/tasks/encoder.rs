//! Encoder decoding task
//!
//! Pin-change driven: sleeps until either encoder line moves, then feeds
//! the decoder one sample. Decoded ticks land in the shared accumulator
//! for the control loop to consume.

use defmt::*;
use embassy_futures::select::select;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use lunette_core::input::QuadratureDecoder;

use crate::channels::ENCODER_TICKS;

#[embassy_executor::task]
pub async fn encoder_task(mut clk: Input<'static>, mut dt: Input<'static>, debounce_ms: u32) {
    info!("Encoder task started");

    let mut decoder = QuadratureDecoder::new(&ENCODER_TICKS, debounce_ms);

    loop {
        select(clk.wait_for_any_edge(), dt.wait_for_any_edge()).await;
        let now_ms = Instant::now().as_millis() as u32;
        decoder.sample(clk.is_high(), dt.is_high(), now_ms);
    }
}
