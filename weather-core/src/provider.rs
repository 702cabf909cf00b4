use std::fmt::Debug;

use async_trait::async_trait;

use crate::{config::LocationConfig, error::FetchError, model::ForecastResponse};

pub mod open_meteo;

pub use open_meteo::OpenMeteoProvider;

/// Source of forecasts. The pipeline only talks to this trait.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Fetch the current observation and the daily forecast for `location`.
    async fn fetch(&self, location: &LocationConfig) -> Result<ForecastResponse, FetchError>;
}
