#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Streaming extraction of weather documents.
//!
//! A [`QueryEngine`] turns a raw document into a flat stream of
//! enter/text/exit events. Receivers implement [`EventSink`] and build typed
//! records from that stream without holding a parse tree:
//!
//! * [`weather::WeatherReceiver`] produces a [`WeatherRecord`]
//! * [`place_search::PlaceSearchReceiver`] produces [`PlaceCandidate`]s
//!
//! Both are instances of the generic [`dispatch::StackDispatcher`].

pub mod dispatch;
pub mod place_search;
pub mod query;
pub mod selector;
pub mod units;
pub mod weather;
pub mod xml;

use weather_ion_weather_models::{PlaceCandidate, WeatherRecord};

use crate::place_search::PlaceSearchReceiver;
use crate::weather::WeatherReceiver;

/// Errors that can occur while loading or evaluating a query program.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The query program is structurally invalid.
    #[error("Invalid query program: {0}")]
    Program(String),

    /// A CSS selector in the program failed to parse.
    #[error("Selector error: {0}")]
    Selector(String),

    /// A capture pattern in the program failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// The document is not well-formed XML.
    #[error("XML error: {0}")]
    Xml(String),

    /// Reading a program file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The program file is not valid TOML.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Consumer of a markup event stream.
///
/// Implementations never fail: unexpected input is ignored.
pub trait EventSink {
    /// An element named `name` opened.
    fn enter_element(&mut self, name: &str);

    /// Text content of the innermost open element.
    fn text_value(&mut self, value: &str);

    /// The innermost open element closed.
    fn exit_element(&mut self);
}

/// Evaluates a query over a raw document, driving an [`EventSink`].
pub trait QueryEngine: Send + Sync {
    /// Emits the event stream for `document` into `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if the document cannot be evaluated. Events
    /// emitted before the failure have already reached the sink.
    fn evaluate(&self, document: &[u8], sink: &mut dyn EventSink) -> Result<(), QueryError>;
}

/// Runs `engine` over `document` and returns the extracted weather record.
///
/// # Errors
///
/// Returns the engine's [`QueryError`].
pub fn extract_weather(
    engine: &(impl QueryEngine + ?Sized),
    document: &[u8],
) -> Result<WeatherRecord, QueryError> {
    let mut receiver = WeatherReceiver::new();
    engine.evaluate(document, &mut receiver)?;
    Ok(receiver.finish())
}

/// Runs `engine` over `document` and returns the place candidates in
/// document order.
///
/// # Errors
///
/// Returns the engine's [`QueryError`].
pub fn extract_places(
    engine: &(impl QueryEngine + ?Sized),
    document: &[u8],
) -> Result<Vec<PlaceCandidate>, QueryError> {
    let mut receiver = PlaceSearchReceiver::new();
    engine.evaluate(document, &mut receiver)?;
    Ok(receiver.finish())
}
