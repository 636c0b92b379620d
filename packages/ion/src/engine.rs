//! The weather data engine.

use std::collections::BTreeMap;

use chrono::Utc;
use weather_ion_extract::{extract_places, extract_weather};
use weather_ion_weather_models::{PlaceCandidate, WeatherRecord};

use crate::config::IonConfig;
use crate::programs::{DocumentKind, ProgramLoader};
use crate::report::{Credits, WeatherReport, assemble, validation_result};
use crate::sink::DataSink;
use crate::source_key::{SourceAction, SourceKey};
use crate::tracker::{FetchTracker, JobId, PendingFetch};
use crate::transport::{Transport, TransportEvent};

/// Data key holding the result of a place search or a malformed request.
pub const VALIDATE_KEY: &str = "validate";

/// Answers source key requests by fetching, parsing and publishing weather
/// data.
///
/// The engine is driven from one task: the host calls
/// [`update_source`](Self::update_source) and forwards the transport's
/// events to [`on_data`](Self::on_data) and
/// [`on_complete`](Self::on_complete).
pub struct WeatherIon<T, S> {
    config: IonConfig,
    credits: Credits,
    programs: Box<dyn ProgramLoader>,
    transport: T,
    sink: S,
    weather_jobs: FetchTracker,
    search_jobs: FetchTracker,
    records: BTreeMap<String, WeatherRecord>,
    places: BTreeMap<String, Vec<PlaceCandidate>>,
}

impl<T: Transport, S: DataSink> WeatherIon<T, S> {
    /// Creates an idle ion publishing to `sink`.
    #[must_use]
    pub fn new(
        config: &IonConfig,
        programs: Box<dyn ProgramLoader>,
        transport: T,
        sink: S,
    ) -> Self {
        Self {
            config: config.clone(),
            credits: config.credits(),
            programs,
            transport,
            sink,
            weather_jobs: FetchTracker::new("weather"),
            search_jobs: FetchTracker::new("search"),
            records: BTreeMap::new(),
            places: BTreeMap::new(),
        }
    }

    /// Handles a host request for `source`.
    ///
    /// Malformed keys are answered immediately with
    /// `<namespace>|malformed` under [`VALIDATE_KEY`]. Returns `false` only
    /// when the request was dropped because the same source is already
    /// being fetched.
    pub fn update_source(&mut self, source: &str) -> bool {
        let key = match SourceKey::parse(source) {
            Ok(key) => key,
            Err(e) => {
                log::warn!("Malformed source '{source}': {e}");
                let response = format!("{}|malformed", self.config.namespace);
                self.sink.set_data(source, VALIDATE_KEY, &response);
                return true;
            }
        };

        match key.action {
            SourceAction::Validate => {
                let url = self.config.search_page(&key.place);
                self.start(DocumentKind::Search, source, &url)
            }
            SourceAction::Weather => {
                let url = self.config.weather_page(key.place_code());
                self.start(DocumentKind::Weather, source, &url)
            }
        }
    }

    fn start(&mut self, kind: DocumentKind, source: &str, url: &str) -> bool {
        let tracker = match kind {
            DocumentKind::Weather => &mut self.weather_jobs,
            DocumentKind::Search => &mut self.search_jobs,
        };
        let Some(job) = tracker.start(source) else {
            return false;
        };

        if kind == DocumentKind::Weather {
            self.sink.clear_data(source);
        }
        log::debug!("Requesting {kind} data for {source} from {url}");
        self.transport.start(job, url);
        true
    }

    /// Appends a body chunk to whichever fetch owns `job`.
    pub fn on_data(&mut self, job: JobId, chunk: &[u8]) {
        if !self.weather_jobs.on_data(job, chunk) && !self.search_jobs.on_data(job, chunk) {
            log::trace!("Ignoring data for unknown {job}");
        }
    }

    /// Parses and publishes the document of a finished fetch.
    pub fn on_complete(&mut self, job: JobId) {
        if let Some(fetch) = self.weather_jobs.on_complete(job) {
            self.finish_weather(fetch);
        } else if let Some(fetch) = self.search_jobs.on_complete(job) {
            self.finish_search(fetch);
        } else {
            log::trace!("Ignoring completion of unknown {job}");
        }
    }

    /// Dispatches one transport event.
    pub fn handle_event(&mut self, event: TransportEvent) {
        match event {
            TransportEvent::Data { job, chunk } => self.on_data(job, &chunk),
            TransportEvent::Complete { job } => self.on_complete(job),
        }
    }

    fn finish_weather(&mut self, fetch: PendingFetch) {
        let PendingFetch {
            source_key, buffer, ..
        } = fetch;

        match self.parse_weather(&buffer) {
            Some(mut record) => {
                record.fetched_at = Some(Utc::now());
                self.records.insert(source_key.clone(), record);
            }
            None if self.records.contains_key(&source_key) => {
                log::debug!("Republishing previous weather for {source_key}");
            }
            None => return,
        }

        if let Some(report) = self.report(&source_key) {
            for (key, value) in report.fields() {
                self.sink.set_data(&source_key, key, value);
            }
        }
    }

    /// `None` when no program could be loaded, so the previous record
    /// stays in place.
    fn parse_weather(&self, document: &[u8]) -> Option<WeatherRecord> {
        let engine = match self.programs.load(DocumentKind::Weather) {
            Ok(engine) => engine,
            Err(e) => {
                log::warn!("Weather query program unavailable: {e}");
                return None;
            }
        };

        Some(
            extract_weather(engine.as_ref(), document).unwrap_or_else(|e| {
                log::warn!("Weather document could not be parsed: {e}");
                WeatherRecord::default()
            }),
        )
    }

    fn finish_search(&mut self, fetch: PendingFetch) {
        let PendingFetch {
            source_key, buffer, ..
        } = fetch;

        let candidates = match self.programs.load(DocumentKind::Search) {
            Ok(engine) => extract_places(engine.as_ref(), &buffer).unwrap_or_else(|e| {
                log::warn!("Place search result could not be parsed: {e}");
                Vec::new()
            }),
            Err(e) => {
                log::warn!("Search query program unavailable: {e}");
                Vec::new()
            }
        };

        let query = SourceKey::parse(&source_key)
            .map(|key| key.place)
            .unwrap_or_default();
        let response = validation_result(&self.config.namespace, &query, &candidates);
        log::debug!(
            "Found {} place(s) for '{query}' ({source_key})",
            candidates.len()
        );

        self.places.insert(source_key.clone(), candidates);
        self.sink.set_data(&source_key, VALIDATE_KEY, &response);
    }

    /// The report currently published for `source`.
    #[must_use]
    pub fn report(&self, source: &str) -> Option<WeatherReport> {
        let record = self.records.get(source)?;
        let place = SourceKey::parse(source)
            .map(|key| key.place)
            .unwrap_or_default();
        Some(assemble(&place, record, &self.credits))
    }

    /// Forgets every stored record and place list. Outstanding fetches
    /// still complete and publish.
    pub fn reset(&mut self) {
        log::debug!(
            "Dropping {} record(s) and {} place list(s)",
            self.records.len(),
            self.places.len()
        );
        self.records.clear();
        self.places.clear();
    }

    /// The last parsed record for a weather source.
    #[must_use]
    pub fn record(&self, source: &str) -> Option<&WeatherRecord> {
        self.records.get(source)
    }

    /// The last place search result for a validate source.
    #[must_use]
    pub fn places(&self, source: &str) -> Option<&[PlaceCandidate]> {
        self.places.get(source).map(Vec::as_slice)
    }

    /// Whether any fetch is outstanding.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.weather_jobs.is_empty() && self.search_jobs.is_empty()
    }

    /// The sink reports are published to.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// The transport fetches are started on.
    pub const fn transport(&self) -> &T {
        &self.transport
    }
}
