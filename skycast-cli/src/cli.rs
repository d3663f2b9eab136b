use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use skycast_core::{Config, OpenWeatherProvider, pipeline};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Current weather for a location")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the local config file.
    Configure,

    /// Show current weather for a location.
    Show {
        /// City name, area, or postal code. Prompted for when omitted.
        location: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location } => show(location).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(location: Option<String>) -> Result<()> {
    let config = Config::load()?;

    // Credentials are resolved before any network activity; missing key is
    // fatal here.
    let api_key = config.resolve_api_key()?;

    let location = match location {
        Some(location) => location,
        None => inquire::Text::new("Enter the city name, area, or pincode:")
            .prompt()
            .context("Failed to read location")?,
    };

    let location = location.trim().to_string();
    if location.is_empty() {
        bail!("Location must not be empty.");
    }

    let provider = OpenWeatherProvider::new(api_key);
    pipeline::run(&provider, &location).await?;

    Ok(())
}
