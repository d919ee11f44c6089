//! Clock face layout
//!
//! Full-screen redraw: time, date, weekday, weather summary, and the
//! game-entry hint. Called on minute edges and on mode changes, so a
//! partial-redraw scheme is not worth the bookkeeping here.

use core::fmt::Write;

use heapless::String;

use crate::traits::clock::WallTime;
use crate::traits::display::{Color, Display, DisplayError};
use crate::traits::weather::WeatherReport;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Longest description the face has room for
const DESCRIPTION_COLS: usize = 8;

/// Redraw the whole clock face
pub fn draw<D: Display>(
    display: &mut D,
    time: &WallTime,
    weather: Option<&WeatherReport>,
) -> Result<(), DisplayError> {
    display.fill(Color::Black)?;

    let mut line: String<24> = String::new();
    let _ = write!(line, "{:02}:{:02}", time.hour, time.minute);
    display.text(&line, 80, 80, Color::White)?;

    line.clear();
    let _ = write!(line, "{}/{:02}/{:02}", time.year, time.month, time.day);
    display.text(&line, 65, 110, Color::Gray)?;

    let weekday = WEEKDAYS.get(time.weekday as usize).copied().unwrap_or("???");
    display.text(weekday, 100, 130, Color::Gray)?;

    match weather {
        Some(report) => {
            display.text(truncate(&report.description, DESCRIPTION_COLS), 70, 160, Color::Yellow)?;

            line.clear();
            let _ = write!(line, "{}~{}C", report.min_temp_c, report.max_temp_c);
            display.text(&line, 70, 180, Color::Orange)?;

            line.clear();
            let _ = write!(line, "Rain:{}%", report.rain_prob_pct);
            display.text(&line, 70, 200, Color::Blue)?;
        }
        None => {
            display.text("No Weather", 70, 160, Color::Gray)?;
        }
    }

    display.text(">>", 210, 110, Color::White)?;
    display.text("Game", 195, 130, Color::Gray)
}

/// Cut a string to at most `cols` characters on a char boundary
fn truncate(s: &str, cols: usize) -> &str {
    match s.char_indices().nth(cols) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate("Cloudy", 8), "Cloudy");
    }

    #[test]
    fn truncate_long_string_cut() {
        assert_eq!(truncate("Thunderstorm", 8), "Thunders");
    }

    #[test]
    fn truncate_exact_length_unchanged() {
        assert_eq!(truncate("Overcast", 8), "Overcast");
    }
}
