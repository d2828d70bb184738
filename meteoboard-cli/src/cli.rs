use std::sync::Arc;

use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use meteoboard_core::{
    CityQuery, Config, FormSurface, HttpWeatherApi, ObservationForm, SearchSurface,
    SubmissionController, SuggestionEngine, ViewSurface, WeatherApi, WeatherViewOrchestrator,
};
use tokio::sync::mpsc;

use crate::surface::TerminalSurface;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteoboard", version, about = "Client for the weather observation service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the full weather view for a city.
    Show {
        /// City name.
        city: String,
    },

    /// Suggest cities matching a name fragment, then look one up.
    Search {
        /// Beginning of a city name, at least two characters.
        fragment: String,
    },

    /// Submit a new weather observation.
    Add {
        #[arg(long)]
        city: Option<String>,

        /// Temperature in °C.
        #[arg(long)]
        temperature: Option<String>,

        /// Relative humidity in percent.
        #[arg(long)]
        humidity: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Set the endpoint root of the weather service.
    Configure {
        #[arg(long)]
        base_url: Option<String>,
    },
}

impl Cli {
    pub async fn run(self, config: Config) -> anyhow::Result<()> {
        let command = match self.command {
            Command::Configure { base_url } => return configure(config, base_url).await,
            command => command,
        };

        let api: Arc<dyn WeatherApi> = Arc::new(HttpWeatherApi::new(config.api.base_url.clone()));
        let surface = Arc::new(TerminalSurface::new());
        let view = Arc::new(WeatherViewOrchestrator::new(
            Arc::clone(&api),
            Arc::clone(&surface) as Arc<dyn ViewSurface>,
        ));

        match command {
            Command::Show { city } => {
                // An empty city is silently ignored, like an empty search box.
                if let Some(query) = CityQuery::new(&city) {
                    view.lookup(&query).await;
                }
            }
            Command::Search { fragment } => {
                search(api, surface, view, &fragment).await?;
            }
            Command::Add {
                city,
                temperature,
                humidity,
                description,
            } => {
                let form = ObservationForm {
                    city: prompt_if_missing(city, "Ville :")?,
                    temperature: prompt_if_missing(temperature, "Température (°C) :")?,
                    humidity: prompt_if_missing(humidity, "Humidité (%) :")?,
                    description: prompt_if_missing(description, "Description :")?,
                };

                let controller = SubmissionController::new(
                    api,
                    Arc::clone(&surface) as Arc<dyn FormSurface>,
                    view,
                );
                controller.submit(&form).await;
            }
            Command::Configure { .. } => unreachable!("handled above"),
        }

        Ok(())
    }
}

fn prompt_if_missing(value: Option<String>, prompt: &str) -> anyhow::Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Text::new(prompt).prompt()?),
    }
}

async fn search(
    api: Arc<dyn WeatherApi>,
    surface: Arc<TerminalSurface>,
    view: Arc<WeatherViewOrchestrator>,
    fragment: &str,
) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut engine = SuggestionEngine::new(
        api,
        Arc::clone(&surface) as Arc<dyn SearchSurface>,
        tx,
    );

    engine.on_input(fragment);
    engine.settled().await;

    let suggestions = surface.take_suggestions();
    if suggestions.is_empty() {
        println!("Aucune suggestion pour « {fragment} ».");
        return Ok(());
    }

    let choice = Select::new("Ville :", suggestions).prompt()?;
    engine.select(&choice);

    if let Some(city) = rx.recv().await {
        view.lookup(&city).await;
    }

    Ok(())
}

async fn configure(mut config: Config, base_url: Option<String>) -> anyhow::Result<()> {
    let base_url = match base_url {
        Some(url) => url,
        None => Text::new("URL de l'API :")
            .with_initial_value(&config.api.base_url)
            .prompt()?,
    };

    let api = HttpWeatherApi::new(base_url.clone());
    if api.is_healthy().await {
        println!("Service joignable sur {base_url}.");
    } else {
        println!("Attention : le service ne répond pas sur {base_url}.");
    }

    config.set_base_url(base_url);
    config.save()?;
    println!(
        "Configuration enregistrée : {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}
