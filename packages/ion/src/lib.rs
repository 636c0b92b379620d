#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Weather data provider.
//!
//! [`WeatherIon`] answers `<namespace>|<action>|<args>` source keys: it
//! starts fetches through a [`Transport`], buffers the bodies per job,
//! parses finished documents with a query engine and publishes flat
//! key/value reports to a [`DataSink`].

pub mod config;
pub mod engine;
pub mod programs;
pub mod report;
pub mod sink;
pub mod source_key;
pub mod tracker;
pub mod transport;

pub use config::{EngineKind, IonConfig};
pub use engine::{VALIDATE_KEY, WeatherIon};
pub use programs::{ConfigProgramLoader, DocumentKind, ProgramLoader};
pub use sink::{DataSink, MemorySink};
pub use tracker::JobId;
pub use transport::{HttpTransport, Transport, TransportEvent};

use weather_ion_extract::QueryError;

/// Errors that can occur while setting up or driving the ion.
#[derive(Debug, thiserror::Error)]
pub enum IonError {
    /// The configuration is unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file is not valid TOML.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A query program could not be loaded or evaluated.
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    /// The HTTP client failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
