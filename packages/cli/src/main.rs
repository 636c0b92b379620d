#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the weather ion.

mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::sync::mpsc::UnboundedReceiver;
use weather_ion::report::{assemble, validation_result};
use weather_ion::{
    ConfigProgramLoader, DocumentKind, HttpTransport, IonConfig, MemorySink, ProgramLoader,
    TransportEvent, WeatherIon,
};
use weather_ion_extract::{extract_places, extract_weather};

use crate::output::Output;

#[derive(Parser)]
#[command(name = "weather_ion", about = "Gismeteo weather data provider")]
struct Cli {
    /// Configuration file. Built-in defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the weather report for a place
    Weather {
        /// Place name as returned by `validate`
        place: String,
        /// Numeric place id; takes precedence over the name in the URL
        #[arg(long)]
        id: Option<String>,
    },
    /// Search for places matching a name
    Validate {
        /// Full or partial place name
        name: String,
    },
    /// Run the extraction pipeline on a saved document without fetching
    Parse {
        /// Path to a weather page, or a search result page with `--search`
        file: PathBuf,
        /// Treat the document as a place search result
        #[arg(long)]
        search: bool,
        /// Place name used in the report or as the search query
        #[arg(long, default_value = "local")]
        place: String,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let config = IonConfig::load_or_default(cli.config.as_deref())?;
    let output = Output { json: cli.json };

    match cli.command {
        Commands::Weather { place, id } => {
            let mut source = format!("{}|weather|{place}", config.namespace);
            if let Some(id) = id {
                source.push('|');
                source.push_str(&id);
            }

            let ion = fetch(&config, &source).await?;
            output.weather(&source, ion.record(&source), ion.sink().entries(&source))?;
        }
        Commands::Validate { name } => {
            let source = format!("{}|validate|{name}", config.namespace);

            let ion = fetch(&config, &source).await?;
            output.validation(
                &source,
                ion.places(&source).unwrap_or_default(),
                ion.sink()
                    .get(&source, weather_ion::VALIDATE_KEY)
                    .unwrap_or_default(),
            )?;
        }
        Commands::Parse {
            file,
            search,
            place,
        } => {
            let document = std::fs::read(&file)?;
            let loader = ConfigProgramLoader::new(&config);
            log::info!("Parsing {} ({} bytes)", file.display(), document.len());

            if search {
                let engine = loader.load(DocumentKind::Search)?;
                let places = extract_places(engine.as_ref(), &document)?;
                let result = validation_result(&config.namespace, &place, &places);
                output.validation(&file.display().to_string(), &places, &result)?;
            } else {
                let engine = loader.load(DocumentKind::Weather)?;
                let record = extract_weather(engine.as_ref(), &document)?;
                let report = assemble(&place, &record, &config.credits());
                output.weather(&file.display().to_string(), Some(&record), report.fields())?;
            }
        }
        Commands::Config => {
            println!("{}", toml::to_string(&config)?);
        }
    }

    Ok(())
}

/// Issues one request and drives the ion until every fetch has finished.
async fn fetch(
    config: &IonConfig,
    source: &str,
) -> Result<WeatherIon<HttpTransport, MemorySink>, weather_ion::IonError> {
    let (transport, events) = HttpTransport::channel(&config.user_agent)?;
    let mut ion = WeatherIon::new(
        config,
        Box::new(ConfigProgramLoader::new(config)),
        transport,
        MemorySink::new(),
    );

    ion.update_source(source);
    drive(&mut ion, events).await;
    Ok(ion)
}

async fn drive(
    ion: &mut WeatherIon<HttpTransport, MemorySink>,
    mut events: UnboundedReceiver<TransportEvent>,
) {
    while !ion.is_idle() {
        let Some(event) = events.recv().await else {
            log::warn!("Transport closed with fetches outstanding");
            break;
        };
        ion.handle_event(event);
    }
}
