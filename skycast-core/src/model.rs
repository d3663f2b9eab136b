use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Latitude/longitude pair produced by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// Current conditions for one location, extracted from a single API
/// response. Lives only long enough to be reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub temperature_c: f64,
    pub condition: String,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub pressure_hpa: u32,
    /// Unix timestamps, as reported by the API.
    pub sunrise: i64,
    pub sunset: i64,
}

impl WeatherSnapshot {
    /// Human-readable report, one line per field.
    pub fn report_lines(&self) -> Vec<String> {
        vec![
            format!("Weather in {}:", self.city),
            format!("Temperature: {}°C", self.temperature_c),
            format!("Weather: {}", self.condition),
            format!("Humidity: {}%", self.humidity_pct),
            format!("Wind Speed: {} m/s", self.wind_speed_mps),
            format!("Pressure: {} hPa", self.pressure_hpa),
            format!("Sunrise: {}", format_timestamp(self.sunrise)),
            format!("Sunset: {}", format_timestamp(self.sunset)),
        ]
    }
}

fn format_timestamp(ts: i64) -> String {
    match DateTime::from_timestamp(ts, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("{ts} (unix)"),
    }
}
