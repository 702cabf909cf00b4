//! Core library for the `weather-card` refresher.
//!
//! This crate defines:
//! - The compiled-in location and unit settings
//! - The Open-Meteo forecast client behind a provider trait
//! - The WMO code lexicon and the markdown card renderer
//! - Rewriting of the sentinel-delimited card region in a document
//!
//! It is used by `weather-card-cli`, but the pieces are usable on their own:
//! [`render::render`] and [`document::splice`] do no I/O.

pub mod config;
pub mod document;
pub mod error;
pub mod lexicon;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod render;

pub use config::{LocationConfig, SHENZHEN, TemperatureUnit, WindSpeedUnit};
pub use error::{DocumentError, FetchError, RefreshError};
pub use lexicon::Condition;
pub use model::{CurrentObservation, DailyForecast, ForecastResponse, Quantity};
pub use pipeline::{Mode, RefreshOutcome, refresh};
pub use provider::{ForecastProvider, OpenMeteoProvider};
