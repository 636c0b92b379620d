//! Weather document extraction.
//!
//! Text values are written to the current-conditions fields until the first
//! `forecast` element opens. From then on every value goes to the most
//! recently opened forecast entry, so documents are expected to list current
//! conditions before any forecast.

use weather_ion_weather_models::{ForecastEntry, UnitId, WeatherRecord};

use crate::dispatch::{Extraction, StackDispatcher};
use crate::units::{split_range, strip_unit};

/// Element that opens a new forecast entry.
pub const FORECAST_ELEMENT: &str = "forecast";

/// Event sink producing a [`WeatherRecord`].
pub type WeatherReceiver = StackDispatcher<WeatherExtraction>;

/// Weather fields addressable by element name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherField {
    Date,
    Condition,
    Temperature,
    Pressure,
    WindDirection,
    WindSpeed,
    Humidity,
    WaterTemperature,
    Day,
    Icon,
}

/// Extraction state for a weather document.
#[derive(Debug, Default)]
pub struct WeatherExtraction {
    record: WeatherRecord,
}

impl WeatherExtraction {
    /// The record built so far.
    #[must_use]
    pub const fn record(&self) -> &WeatherRecord {
        &self.record
    }
}

impl Extraction for WeatherExtraction {
    type Field = WeatherField;
    type Output = WeatherRecord;

    const ROUTES: &'static [(&'static str, WeatherField)] = &[
        ("date", WeatherField::Date),
        ("condition", WeatherField::Condition),
        ("temperature", WeatherField::Temperature),
        ("pressure", WeatherField::Pressure),
        ("windDirection", WeatherField::WindDirection),
        ("windSpeed", WeatherField::WindSpeed),
        ("humidity", WeatherField::Humidity),
        ("waterTemperature", WeatherField::WaterTemperature),
        ("day", WeatherField::Day),
        ("icon", WeatherField::Icon),
    ];

    fn open(&mut self, name: &str) {
        if name == FORECAST_ELEMENT {
            self.record.forecasts.push(ForecastEntry::default());
        }
    }

    fn assign(&mut self, field: WeatherField, value: &str) {
        if let Some(entry) = self.record.forecasts.last_mut() {
            assign_forecast(entry, field, value);
        } else {
            assign_current(&mut self.record, field, value);
        }
    }

    fn finish(self) -> WeatherRecord {
        self.record
    }
}

fn assign_current(record: &mut WeatherRecord, field: WeatherField, value: &str) {
    let slot = match field {
        WeatherField::Date => &mut record.date,
        WeatherField::Condition => &mut record.condition,
        WeatherField::Temperature => {
            record.temperature = Some(strip_unit(value, UnitId::Celsius).to_owned());
            return;
        }
        WeatherField::Pressure => {
            record.pressure = Some(strip_unit(value, UnitId::MillimetersOfMercury).to_owned());
            return;
        }
        WeatherField::WindDirection => &mut record.wind_direction,
        WeatherField::WindSpeed => {
            record.wind_speed = Some(strip_unit(value, UnitId::MetersPerSecond).to_owned());
            return;
        }
        WeatherField::Humidity => {
            record.humidity = Some(strip_unit(value, UnitId::Percent).to_owned());
            return;
        }
        WeatherField::WaterTemperature => {
            record.water_temperature = Some(strip_unit(value, UnitId::Celsius).to_owned());
            return;
        }
        WeatherField::Day | WeatherField::Icon => {
            log::trace!("Ignoring {field:?} outside of a forecast: {value}");
            return;
        }
    };
    *slot = Some(value.to_owned());
}

fn assign_forecast(entry: &mut ForecastEntry, field: WeatherField, value: &str) {
    match field {
        WeatherField::Day => entry.day = Some(value.to_owned()),
        WeatherField::Icon => entry.icon_code = Some(value.to_owned()),
        WeatherField::Temperature => match split_range(value) {
            Some((high, low)) => {
                entry.temperature_high = Some(high);
                entry.temperature_low = Some(low);
            }
            None => log::debug!("Malformed forecast temperature range: {value}"),
        },
        other => log::trace!("Dropping {other:?} inside a forecast entry: {value}"),
    }
}
