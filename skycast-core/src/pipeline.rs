//! The resolve-then-fetch pipeline.
//!
//! Two stages run strictly in sequence: the location query is resolved to a
//! coordinate pair, then current conditions are fetched for that pair. Each
//! stage issues one request; there is no retry and no batching.

use tracing::{error, info, warn};

use crate::{
    error::ProviderError,
    model::{Coordinates, WeatherSnapshot},
    provider::WeatherProvider,
};

/// Resolve a location query and report current conditions for it.
///
/// Transport failures in either stage are logged and swallowed, and a
/// resolution miss warns and halts gracefully; both yield `Ok(None)`. Only
/// shape-class errors escape to the caller.
pub async fn run(
    provider: &dyn WeatherProvider,
    location: &str,
) -> Result<Option<WeatherSnapshot>, ProviderError> {
    let Some(coordinates) = resolve_coordinates(provider, location).await? else {
        warn!("Could not fetch coordinates. Try again with a valid city or pincode.");
        return Ok(None);
    };

    fetch_current(provider, &coordinates).await
}

async fn resolve_coordinates(
    provider: &dyn WeatherProvider,
    location: &str,
) -> Result<Option<Coordinates>, ProviderError> {
    match provider.resolve(location).await {
        Ok(Some(coordinates)) => {
            info!(
                "Coordinates for {location}: Latitude: {}, Longitude: {}",
                coordinates.lat, coordinates.lon
            );
            Ok(Some(coordinates))
        }
        Ok(None) => {
            warn!("Could not find coordinates for {location}.");
            Ok(None)
        }
        Err(e) if e.is_transport() => {
            error!("Error fetching data for {location}: {e}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

async fn fetch_current(
    provider: &dyn WeatherProvider,
    coordinates: &Coordinates,
) -> Result<Option<WeatherSnapshot>, ProviderError> {
    match provider.current_weather(coordinates).await {
        Ok(snapshot) => {
            for line in snapshot.report_lines() {
                info!("{line}");
            }
            Ok(Some(snapshot))
        }
        Err(e) if e.is_transport() => {
            error!("Error fetching weather data for coordinates {coordinates}: {e}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, Copy)]
    enum Script {
        Hit,
        Miss,
        TransportFail,
        ShapeFail,
    }

    impl Script {
        fn transport_error(endpoint: &'static str) -> ProviderError {
            ProviderError::Status {
                endpoint,
                status: StatusCode::BAD_GATEWAY,
                body: "bad gateway".to_string(),
            }
        }

        fn shape_error(endpoint: &'static str) -> ProviderError {
            ProviderError::MissingField {
                endpoint,
                field: "weather description",
            }
        }
    }

    #[derive(Debug)]
    struct ScriptedProvider {
        resolve: Script,
        weather: Script,
        weather_calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn new(resolve: Script, weather: Script) -> Self {
            Self {
                resolve,
                weather,
                weather_calls: AtomicUsize::new(0),
            }
        }

        fn weather_calls(&self) -> usize {
            self.weather_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WeatherProvider for ScriptedProvider {
        async fn resolve(&self, _query: &str) -> Result<Option<Coordinates>, ProviderError> {
            match self.resolve {
                Script::Hit => Ok(Some(Coordinates { lat: 51.51, lon: -0.13 })),
                Script::Miss => Ok(None),
                Script::TransportFail => Err(Script::transport_error("geocoding")),
                Script::ShapeFail => Err(Script::shape_error("geocoding")),
            }
        }

        async fn current_weather(
            &self,
            _coordinates: &Coordinates,
        ) -> Result<WeatherSnapshot, ProviderError> {
            self.weather_calls.fetch_add(1, Ordering::SeqCst);

            match self.weather {
                Script::Hit | Script::Miss => Ok(WeatherSnapshot {
                    city: "London".to_string(),
                    temperature_c: 15.2,
                    condition: "cloudy".to_string(),
                    humidity_pct: 70,
                    wind_speed_mps: 3.1,
                    pressure_hpa: 1012,
                    sunrise: 1_700_000_000,
                    sunset: 1_700_030_000,
                }),
                Script::TransportFail => Err(Script::transport_error("current weather")),
                Script::ShapeFail => Err(Script::shape_error("current weather")),
            }
        }
    }

    #[tokio::test]
    async fn happy_path_returns_snapshot() {
        let provider = ScriptedProvider::new(Script::Hit, Script::Hit);

        let snapshot = run(&provider, "London")
            .await
            .expect("no error expected")
            .expect("snapshot expected");

        assert_eq!(snapshot.city, "London");
        assert_eq!(provider.weather_calls(), 1);
    }

    #[tokio::test]
    async fn resolution_miss_skips_weather_fetch() {
        let provider = ScriptedProvider::new(Script::Miss, Script::Hit);

        let outcome = run(&provider, "ZZZNOWHERE").await.expect("no error expected");

        assert!(outcome.is_none());
        assert_eq!(provider.weather_calls(), 0);
    }

    #[tokio::test]
    async fn resolve_transport_failure_is_swallowed() {
        let provider = ScriptedProvider::new(Script::TransportFail, Script::Hit);

        let outcome = run(&provider, "London").await.expect("no error expected");

        assert!(outcome.is_none());
        assert_eq!(provider.weather_calls(), 0);
    }

    #[tokio::test]
    async fn fetch_transport_failure_is_swallowed() {
        let provider = ScriptedProvider::new(Script::Hit, Script::TransportFail);

        let outcome = run(&provider, "London").await.expect("no error expected");

        assert!(outcome.is_none());
        assert_eq!(provider.weather_calls(), 1);
    }

    #[tokio::test]
    async fn resolve_shape_failure_propagates() {
        let provider = ScriptedProvider::new(Script::ShapeFail, Script::Hit);

        let err = run(&provider, "London").await.unwrap_err();

        assert!(!err.is_transport());
        assert_eq!(provider.weather_calls(), 0);
    }

    #[tokio::test]
    async fn fetch_shape_failure_propagates() {
        let provider = ScriptedProvider::new(Script::Hit, Script::ShapeFail);

        let err = run(&provider, "London").await.unwrap_err();

        assert!(!err.is_transport());
    }
}
