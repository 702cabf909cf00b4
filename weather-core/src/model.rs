use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::lexicon::{self, Condition};

/// Format of observation timestamps as Open-Meteo returns them (local time).
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// A number shown exactly as the API sent it: `75` stays `75`, `0.0` stays `0.0`.
///
/// Only temperatures get a fixed precision on the card; every other reading
/// keeps its JSON representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(serde_json::Number);

impl Quantity {
    pub fn from_f64(value: f64) -> Option<Self> {
        serde_json::Number::from_f64(value).map(Self)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Conditions at observation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentObservation {
    pub time: NaiveDateTime,
    pub temperature: f64,
    pub apparent_temperature: f64,
    pub relative_humidity: Quantity,
    pub wind_speed: Quantity,
    pub weather_code: i64,
    pub precipitation: Quantity,
    pub cloud_cover: Quantity,
    pub is_day: bool,
}

impl CurrentObservation {
    pub fn condition(&self) -> Condition {
        lexicon::lookup(self.weather_code)
    }
}

/// One day of the daily forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub precipitation_sum: Option<Quantity>,
    pub uv_index_max: Option<Quantity>,
    pub weather_code: Option<i64>,
}

/// Decoded forecast: the current observation, today, and the days after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// e.g. "CST". Empty when the API omits it.
    pub timezone_abbreviation: String,
    pub current: CurrentObservation,
    pub today: DailyForecast,
    pub upcoming: Vec<DailyForecast>,
}

impl ForecastResponse {
    /// Today followed by the upcoming days, in API order.
    pub fn days(&self) -> impl Iterator<Item = &DailyForecast> {
        std::iter::once(&self.today).chain(&self.upcoming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_keeps_json_representation() {
        let values: Vec<Quantity> = serde_json::from_str("[75, 0.0, 12.5, 0.1, -3]").unwrap();
        let shown: Vec<String> = values.iter().map(ToString::to_string).collect();

        assert_eq!(shown, ["75", "0.0", "12.5", "0.1", "-3"]);
    }

    #[test]
    fn quantity_constructors() {
        assert_eq!(Quantity::from(80).to_string(), "80");
        assert_eq!(Quantity::from_f64(2.5).map(|q| q.to_string()).as_deref(), Some("2.5"));
        assert!(Quantity::from_f64(f64::NAN).is_none());
        assert_eq!(Quantity::from(3).as_f64(), Some(3.0));
    }
}
