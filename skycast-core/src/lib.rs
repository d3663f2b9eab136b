//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the weather provider
//! - Shared domain models (coordinates, snapshots)
//! - The resolve-then-fetch pipeline
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod provider;

pub use config::{API_KEY_ENV, Config};
pub use error::ProviderError;
pub use model::{Coordinates, WeatherSnapshot};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
