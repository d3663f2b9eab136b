use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{
    error::ProviderError,
    model::{Coordinates, WeatherSnapshot},
};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoint labels used in error messages.
const GEOCODE: &str = "geocoding";
const CURRENT: &str = "current weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the provider at a different host, e.g. a mock server in tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    /// Issue one GET against the weather endpoint and return the raw body.
    ///
    /// Both operations use the same path; they differ only in query
    /// parameters (`q` vs `lat`/`lon`).
    async fn get_weather_body(
        &self,
        endpoint: &'static str,
        query: &[(&str, &str)],
    ) -> Result<String, ProviderError> {
        let url = format!("{}/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .query(query)
            .send()
            .await
            .map_err(|source| ProviderError::Transport { endpoint, source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| ProviderError::Transport { endpoint, source })?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                endpoint,
                status,
                body: truncate_body(&body),
            });
        }

        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwGeocodeResponse {
    coord: Option<OwCoord>,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn resolve(&self, query: &str) -> Result<Option<Coordinates>, ProviderError> {
        let body = self
            .get_weather_body(GEOCODE, &[("q", query), ("appid", self.api_key.as_str())])
            .await?;

        let parsed: OwGeocodeResponse = serde_json::from_str(&body).map_err(|source| {
            ProviderError::Decode {
                endpoint: GEOCODE,
                source,
            }
        })?;

        Ok(parsed.coord.map(|c| Coordinates { lat: c.lat, lon: c.lon }))
    }

    async fn current_weather(
        &self,
        coordinates: &Coordinates,
    ) -> Result<WeatherSnapshot, ProviderError> {
        let lat = coordinates.lat.to_string();
        let lon = coordinates.lon.to_string();

        let body = self
            .get_weather_body(
                CURRENT,
                &[
                    ("lat", lat.as_str()),
                    ("lon", lon.as_str()),
                    ("appid", self.api_key.as_str()),
                    ("units", "metric"),
                ],
            )
            .await?;

        let parsed: OwCurrentResponse = serde_json::from_str(&body).map_err(|source| {
            ProviderError::Decode {
                endpoint: CURRENT,
                source,
            }
        })?;

        let condition = parsed
            .weather
            .first()
            .map(|w| w.description.clone())
            .ok_or(ProviderError::MissingField {
                endpoint: CURRENT,
                field: "weather description",
            })?;

        Ok(WeatherSnapshot {
            city: parsed.name,
            temperature_c: parsed.main.temp,
            condition,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            pressure_hpa: parsed.main.pressure,
            sunrise: parsed.sys.sunrise,
            sunset: parsed.sys.sunset,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
