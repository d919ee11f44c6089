//! Wall-clock collaborator trait
//!
//! Calendar time for the clock face only. Debounce and tick timing use
//! the monotonic millisecond counter passed into `poll` instead, so an
//! NTP adjustment can never stretch a debounce window.

/// Calendar date and time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    pub year: u16,
    /// 1-12
    pub month: u8,
    /// 1-31
    pub day: u8,
    /// 0 = Monday .. 6 = Sunday
    pub weekday: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl Default for WallTime {
    /// Pre-sync placeholder: 2000-01-01 was a Saturday
    fn default() -> Self {
        Self {
            year: 2000,
            month: 1,
            day: 1,
            weekday: 5,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }
}

/// Trait for the calendar time source
pub trait WallClock {
    /// Current wall-clock time; a placeholder before first sync
    fn now(&self) -> WallTime;
}
