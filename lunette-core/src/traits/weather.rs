//! Weather collaborator trait

use heapless::String;

/// Maximum length of a weather description
pub const MAX_DESCRIPTION_LEN: usize = 24;

/// One forecast entry for the clock face
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeatherReport {
    /// Short condition description ("Cloudy", "Light rain", ...)
    pub description: String<MAX_DESCRIPTION_LEN>,
    /// Probability of precipitation, 0-100
    pub rain_prob_pct: u8,
    /// Forecast minimum temperature (°C)
    pub min_temp_c: i8,
    /// Forecast maximum temperature (°C)
    pub max_temp_c: i8,
}

/// Trait for the weather source
///
/// Implementations rate-limit themselves: calls inside the update
/// interval return the cached report without touching the network.
/// Any fetch/parse/link failure reports absence, never an error - the
/// watch degrades to a "no weather" face.
pub trait WeatherProvider {
    fn get_weather(&mut self, location: &str) -> Option<WeatherReport>;
}
