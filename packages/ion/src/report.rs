//! Turns parsed records into the flat key/value reports hosts consume.

use chrono::SecondsFormat;
use serde::Serialize;
use weather_ion_classify::ClassificationTable;
use weather_ion_weather_models::{
    ConditionCategory, ForecastEntry, PlaceCandidate, UnitId, WeatherRecord,
};

/// Rendered in forecast lines for values the document did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Precipitation placeholder: the source never reports a probability.
pub const PRECIPITATION_UNKNOWN: &str = "N/U";

/// Separator between fields of forecast lines and validation strings.
const FIELD_SEPARATOR: &str = "|";

/// Attribution published with every report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credits {
    /// Attribution text.
    pub credit: String,
    /// Link the attribution points at.
    pub credit_url: String,
}

/// Ordered key/value pairs published for one weather source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeatherReport {
    fields: Vec<(String, String)>,
}

impl WeatherReport {
    fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.push((key.into(), value.into()));
    }

    /// Value published under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All fields in publication order.
    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Number of published fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether nothing is published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builds the report for `place` from a parsed record.
///
/// Every current-conditions key is always present; values the document
/// did not provide are published as empty strings.
#[must_use]
pub fn assemble(place: &str, record: &WeatherRecord, credits: &Credits) -> WeatherReport {
    let table = ClassificationTable::global();
    let mut report = WeatherReport::default();

    let raw_condition = record.condition.as_deref().unwrap_or_default();
    let (description, category) = match table.resolve_condition(raw_condition) {
        Some(resolved) => (resolved.description, resolved.category),
        None => {
            if !raw_condition.is_empty() {
                log::debug!("Unknown condition '{raw_condition}' for {place}");
            }
            (raw_condition.trim().to_owned(), ConditionCategory::NotAvailable)
        }
    };

    report.push("Place", place);
    report.push("Observation Period", value_or_empty(record.date.as_ref()));
    report.push("Current Conditions", description);
    report.push("Condition Icon", category.icon_name());

    report.push("Temperature", value_or_empty(record.temperature.as_ref()));
    report.push("Temperature Unit", UnitId::Celsius.to_string());
    report.push(
        "Water Temperature",
        value_or_empty(record.water_temperature.as_ref()),
    );
    report.push("Pressure", value_or_empty(record.pressure.as_ref()));
    report.push("Pressure Unit", UnitId::MillimetersOfMercury.to_string());
    report.push("Humidity", value_or_empty(record.humidity.as_ref()));
    report.push("Humidity Unit", UnitId::Percent.to_string());
    report.push("Wind Speed", value_or_empty(record.wind_speed.as_ref()));
    report.push("Wind Speed Unit", UnitId::MetersPerSecond.to_string());

    let wind = record.wind_direction.as_deref().unwrap_or_default();
    report.push(
        "Wind Direction",
        table.wind_direction(wind).unwrap_or_else(|| wind.trim()),
    );

    for (i, entry) in record.forecasts.iter().enumerate() {
        report.push(format!("Short Forecast Day {i}"), forecast_line(entry));
    }
    report.push("Total Weather Days", record.forecasts.len().to_string());

    report.push("Credit", credits.credit.as_str());
    report.push("Credit Url", credits.credit_url.as_str());
    if let Some(fetched_at) = record.fetched_at {
        report.push(
            "Updated",
            fetched_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        );
    }

    report
}

fn value_or_empty(value: Option<&String>) -> &str {
    value.map_or("", String::as_str)
}

/// Renders one forecast day as `day|icon|description|high|low|N/U`.
#[must_use]
pub fn forecast_line(entry: &ForecastEntry) -> String {
    let table = ClassificationTable::global();

    let day = entry
        .day
        .as_deref()
        .map(|token| table.day_name(token).unwrap_or(token))
        .unwrap_or(NOT_AVAILABLE);

    let code = entry.icon_code.as_deref().unwrap_or_default();
    let icon = table
        .icon_category(code)
        .unwrap_or(ConditionCategory::NotAvailable)
        .icon_name();
    let description = table.icon_description(code).unwrap_or_default();

    [
        day,
        icon,
        description,
        entry.temperature_high.as_deref().unwrap_or(NOT_AVAILABLE),
        entry.temperature_low.as_deref().unwrap_or(NOT_AVAILABLE),
        PRECIPITATION_UNKNOWN,
    ]
    .join(FIELD_SEPARATOR)
}

/// Builds the `validate` response for a place search.
///
/// Candidates without a numeric id are published with id `0`.
#[must_use]
pub fn validation_result(namespace: &str, query: &str, candidates: &[PlaceCandidate]) -> String {
    let mut tokens = vec![namespace.to_owned()];

    match candidates {
        [] => {
            tokens.extend(["invalid", "single", query].map(str::to_owned));
        }
        [single] => {
            tokens.extend(["valid", "single"].map(str::to_owned));
            push_candidate(&mut tokens, single);
        }
        many => {
            tokens.extend(["valid", "multiple"].map(str::to_owned));
            for candidate in many {
                push_candidate(&mut tokens, candidate);
            }
        }
    }

    tokens.join(FIELD_SEPARATOR)
}

fn push_candidate(tokens: &mut Vec<String>, candidate: &PlaceCandidate) {
    tokens.push("place".to_owned());
    tokens.push(candidate.name.clone());
    tokens.push("extra".to_owned());
    tokens.push(candidate.id.unwrap_or(0).to_string());
}
