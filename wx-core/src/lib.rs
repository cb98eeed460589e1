//! Core library for the `wx` CLI.
//!
//! This crate defines:
//! - ZIP code to coordinate lookup against the NWS geocoding service
//! - Fetching and decoding of the NWS DWML forecast document
//! - Forecast and current-conditions text views
//!
//! It is used by `wx-cli`, but the HTTP transport is a trait so the pipeline can
//! be driven by other binaries or by tests without network access.

pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod noaa;
pub mod present;
mod xml;

pub use config::{DEFAULT_ZIP, Endpoints};
pub use error::{ErrorKind, WxError};
pub use fetch::{Fetcher, HttpFetcher};
pub use model::{Coordinates, CurrentConditions, ForecastRow, Place, WeatherDocument};
pub use noaa::NoaaClient;
pub use present::{CurrentPresenter, ForecastPresenter, Presenter, View};
