use crate::{
    error::ProviderError,
    model::{Coordinates, WeatherSnapshot},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A weather backend reachable over HTTP.
///
/// Both operations issue exactly one request. `resolve` distinguishes a miss
/// (the backend could not match the query) from a failure; `current_weather`
/// has no miss case, any valid coordinate pair is answerable.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Look up coordinates for a free-text location query.
    ///
    /// `Ok(None)` means the backend answered but could not match the query.
    async fn resolve(&self, query: &str) -> Result<Option<Coordinates>, ProviderError>;

    /// Fetch current conditions for a coordinate pair, metric units.
    async fn current_weather(
        &self,
        coordinates: &Coordinates,
    ) -> Result<WeatherSnapshot, ProviderError>;
}
