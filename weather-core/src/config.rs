use serde::{Deserialize, Serialize};

/// Temperature unit requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Query value understood by Open-Meteo.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }

    /// Suffix printed after every temperature on the card.
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wind speed unit requested from the API. Printed verbatim on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindSpeedUnit {
    #[default]
    Kmh,
    Mph,
    Ms,
    Kn,
}

impl WindSpeedUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindSpeedUnit::Kmh => "kmh",
            WindSpeedUnit::Mph => "mph",
            WindSpeedUnit::Ms => "ms",
            WindSpeedUnit::Kn => "kn",
        }
    }

    pub const fn all() -> &'static [WindSpeedUnit] {
        &[WindSpeedUnit::Kmh, WindSpeedUnit::Mph, WindSpeedUnit::Ms, WindSpeedUnit::Kn]
    }
}

impl std::fmt::Display for WindSpeedUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location and units the card is rendered for.
///
/// These are compiled in; there is no config file and no environment lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocationConfig {
    /// Name shown on the "current conditions" line.
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone, e.g. "Asia/Shanghai". Timestamps come back in local time.
    pub timezone: &'static str,
    pub temperature_unit: TemperatureUnit,
    pub wind_speed_unit: WindSpeedUnit,
}

/// The location this tool ships with.
pub const SHENZHEN: LocationConfig = LocationConfig {
    name: "深圳",
    latitude: 22.5431,
    longitude: 114.0579,
    timezone: "Asia/Shanghai",
    temperature_unit: TemperatureUnit::Celsius,
    wind_speed_unit: WindSpeedUnit::Kmh,
};

impl Default for LocationConfig {
    fn default() -> Self {
        SHENZHEN
    }
}
