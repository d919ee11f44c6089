//! Weather provider for radio-less boards
//!
//! The reference board carries no WiFi module, so the provider reports
//! absence and the face shows its "No Weather" placeholder. A networked
//! board supplies its own `WeatherProvider` in its place.

use lunette_core::traits::weather::{WeatherProvider, WeatherReport};

pub struct OfflineWeather;

impl WeatherProvider for OfflineWeather {
    fn get_weather(&mut self, _location: &str) -> Option<WeatherReport> {
        None
    }
}
