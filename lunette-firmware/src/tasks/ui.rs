//! Control-loop task
//!
//! One iteration per loop quantum: sample the button, then let the
//! screen controller consume input, advance the live screen, and draw.
//! Display errors are logged and the loop keeps running.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::Rtc;
use embassy_time::{Duration, Instant, Ticker};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use lunette_core::config::WatchConfig;
use lunette_core::input::{ButtonDebouncer, InputSource};
use lunette_core::screen::ScreenController;

use crate::channels::{BUTTON_PRESS, ENCODER_TICKS};
use crate::clock::RtcClock;
use crate::display::Gc9a01Panel;
use crate::weather::OfflineWeather;

#[embassy_executor::task]
pub async fn ui_task(
    mut panel: Gc9a01Panel,
    button: Input<'static>,
    rtc: &'static Rtc<'static, RTC>,
    cfg: WatchConfig,
) {
    info!("UI task started");

    let clock = RtcClock::new(rtc);
    let mut weather = OfflineWeather;
    let mut rng = SmallRng::seed_from_u64(Instant::now().as_ticks());
    let mut controller = ScreenController::new(cfg);
    let mut debouncer = ButtonDebouncer::new(&BUTTON_PRESS, cfg.button_debounce_ms);
    let input = InputSource::new(&ENCODER_TICKS, &BUTTON_PRESS);

    let mut ticker = Ticker::every(Duration::from_millis(cfg.loop_quantum_ms as u64));

    loop {
        ticker.next().await;
        let now_ms = Instant::now().as_millis() as u32;

        debouncer.sample(button.is_low(), now_ms);

        if let Err(e) = controller.poll(
            now_ms,
            &input,
            &mut panel,
            &clock,
            &mut weather,
            &mut rng,
        ) {
            warn!("Display error: {:?}", e);
        }
    }
}
