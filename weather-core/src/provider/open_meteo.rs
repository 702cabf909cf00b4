use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use tracing::{debug, info, instrument};

use crate::{
    config::LocationConfig,
    error::FetchError,
    model::{CurrentObservation, DailyForecast, ForecastResponse, Quantity, TIME_FORMAT},
};

use super::ForecastProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1";
pub const USER_AGENT: &str = "Mozilla/5.0 (GitHub Actions Weather Updater)";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Today plus the three days shown in the table.
pub const FORECAST_DAYS: u8 = 4;

pub const CURRENT_FIELDS: &[&str] = &[
    "temperature_2m",
    "apparent_temperature",
    "relative_humidity_2m",
    "wind_speed_10m",
    "weather_code",
    "precipitation",
    "cloud_cover",
    "is_day",
];

pub const DAILY_FIELDS: &[&str] = &[
    "temperature_2m_max",
    "temperature_2m_min",
    "precipitation_sum",
    "uv_index_max",
    "weather_code",
];

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    base_url: String,
}

impl OpenMeteoProvider {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the provider at another host, e.g. a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Transport)?;

        Ok(Self { http, base_url: base_url.into() })
    }

    fn endpoint(&self) -> String {
        format!("{}/forecast", self.base_url.trim_end_matches('/'))
    }
}

/// Query string for a forecast request, in the order it is sent.
pub fn query_params(location: &LocationConfig) -> Vec<(&'static str, String)> {
    vec![
        ("latitude", location.latitude.to_string()),
        ("longitude", location.longitude.to_string()),
        ("timezone", location.timezone.to_string()),
        ("current", CURRENT_FIELDS.join(",")),
        ("daily", DAILY_FIELDS.join(",")),
        ("temperature_unit", location.temperature_unit.as_str().to_string()),
        ("wind_speed_unit", location.wind_speed_unit.as_str().to_string()),
        ("precipitation_unit", "mm".to_string()),
        ("forecast_days", FORECAST_DAYS.to_string()),
    ]
}

/// Decode a forecast body into the domain model.
pub fn decode_response(body: &str) -> Result<ForecastResponse, FetchError> {
    let parsed: OmResponse = serde_json::from_str(body)?;
    let (today, upcoming) = split_days(parsed.daily)?;

    Ok(ForecastResponse {
        timezone_abbreviation: parsed.timezone_abbreviation,
        current: parsed.current.into(),
        today,
        upcoming,
    })
}

#[derive(Debug, Deserialize)]
struct OmResponse {
    #[serde(default)]
    timezone_abbreviation: String,
    current: OmCurrent,
    daily: OmDaily,
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    #[serde(deserialize_with = "local_time")]
    time: NaiveDateTime,
    temperature_2m: f64,
    apparent_temperature: f64,
    relative_humidity_2m: Quantity,
    wind_speed_10m: Quantity,
    #[serde(default)]
    weather_code: i64,
    precipitation: Quantity,
    cloud_cover: Quantity,
    #[serde(default = "daytime")]
    is_day: u8,
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<NaiveDate>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    #[serde(default)]
    precipitation_sum: Option<Vec<Option<Quantity>>>,
    #[serde(default)]
    uv_index_max: Option<Vec<Option<Quantity>>>,
    #[serde(default)]
    weather_code: Option<Vec<Option<i64>>>,
}

impl From<OmCurrent> for CurrentObservation {
    fn from(c: OmCurrent) -> Self {
        Self {
            time: c.time,
            temperature: c.temperature_2m,
            apparent_temperature: c.apparent_temperature,
            relative_humidity: c.relative_humidity_2m,
            wind_speed: c.wind_speed_10m,
            weather_code: c.weather_code,
            precipitation: c.precipitation,
            cloud_cover: c.cloud_cover,
            is_day: c.is_day != 0,
        }
    }
}

fn split_days(daily: OmDaily) -> Result<(DailyForecast, Vec<DailyForecast>), FetchError> {
    let expected = daily.time.len();
    if expected == 0 {
        return Err(FetchError::NoDays);
    }

    let aligned = |field: &'static str, found: usize| {
        if found == expected {
            Ok(())
        } else {
            Err(FetchError::Misaligned { field, expected, found })
        }
    };

    aligned("temperature_2m_max", daily.temperature_2m_max.len())?;
    aligned("temperature_2m_min", daily.temperature_2m_min.len())?;
    if let Some(values) = &daily.precipitation_sum {
        aligned("precipitation_sum", values.len())?;
    }
    if let Some(values) = &daily.uv_index_max {
        aligned("uv_index_max", values.len())?;
    }
    if let Some(values) = &daily.weather_code {
        aligned("weather_code", values.len())?;
    }

    let mut days = (0..expected).map(|i| DailyForecast {
        date: daily.time[i],
        temperature_min: daily.temperature_2m_min[i],
        temperature_max: daily.temperature_2m_max[i],
        precipitation_sum: optional_at(&daily.precipitation_sum, i),
        uv_index_max: optional_at(&daily.uv_index_max, i),
        weather_code: optional_at(&daily.weather_code, i),
    });

    let today = days.next().ok_or(FetchError::NoDays)?;
    Ok((today, days.collect()))
}

fn optional_at<T: Clone>(values: &Option<Vec<Option<T>>>, index: usize) -> Option<T> {
    values.as_ref().and_then(|v| v.get(index).cloned().flatten())
}

fn daytime() -> u8 {
    1
}

fn local_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp `{raw}`: {e}")))
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    #[instrument(skip(self, location), fields(location = location.name))]
    async fn fetch(&self, location: &LocationConfig) -> Result<ForecastResponse, FetchError> {
        let url = self.endpoint();
        debug!(url = %url, "Fetching forecast");

        let res = self
            .http
            .get(&url)
            .query(&query_params(location))
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::Transport)?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let forecast = decode_response(&body)?;
        info!(
            observed_at = %forecast.current.time,
            days = forecast.upcoming.len() + 1,
            "Fetched forecast"
        );

        Ok(forecast)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
