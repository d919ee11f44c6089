//! RTC-backed wall clock
//!
//! The RP2040 RTC free-runs from the epoch set at boot. A board with a
//! radio would resync it after NTP; without one the watch simply counts
//! from the placeholder epoch.

use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc};

use lunette_core::traits::clock::{WallClock, WallTime};

/// Epoch programmed into the RTC at boot, matching `WallTime::default()`
pub fn boot_epoch() -> DateTime {
    DateTime {
        year: 2000,
        month: 1,
        day: 1,
        day_of_week: DayOfWeek::Saturday,
        hour: 0,
        minute: 0,
        second: 0,
    }
}

pub struct RtcClock {
    rtc: &'static Rtc<'static, RTC>,
}

impl RtcClock {
    pub fn new(rtc: &'static Rtc<'static, RTC>) -> Self {
        Self { rtc }
    }
}

impl WallClock for RtcClock {
    fn now(&self) -> WallTime {
        match self.rtc.now() {
            Ok(dt) => WallTime {
                year: dt.year,
                month: dt.month,
                day: dt.day,
                weekday: weekday_index(dt.day_of_week),
                hour: dt.hour,
                minute: dt.minute,
                second: dt.second,
            },
            // RTC not running yet; the placeholder keeps the face valid
            Err(_) => WallTime::default(),
        }
    }
}

fn weekday_index(day: DayOfWeek) -> u8 {
    match day {
        DayOfWeek::Monday => 0,
        DayOfWeek::Tuesday => 1,
        DayOfWeek::Wednesday => 2,
        DayOfWeek::Thursday => 3,
        DayOfWeek::Friday => 4,
        DayOfWeek::Saturday => 5,
        DayOfWeek::Sunday => 6,
    }
}
