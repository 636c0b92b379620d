//! Result printing.

use serde::Serialize;
use weather_ion_weather_models::{PlaceCandidate, WeatherRecord};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WeatherOutput<'a> {
    source: &'a str,
    record: Option<&'a WeatherRecord>,
    report: Vec<Field<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationOutput<'a> {
    source: &'a str,
    places: &'a [PlaceCandidate],
    validate: &'a str,
}

#[derive(Serialize)]
struct Field<'a> {
    key: &'a str,
    value: &'a str,
}

/// Prints results either as aligned text or as JSON.
pub struct Output {
    pub json: bool,
}

impl Output {
    pub fn weather(
        &self,
        source: &str,
        record: Option<&WeatherRecord>,
        fields: &[(String, String)],
    ) -> Result<(), serde_json::Error> {
        if self.json {
            let report = fields
                .iter()
                .map(|(key, value)| Field { key, value })
                .collect();
            return print_json(&WeatherOutput {
                source,
                record,
                report,
            });
        }

        if fields.is_empty() {
            println!("No weather data for {source}");
            return Ok(());
        }

        let width = fields.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
        for (key, value) in fields {
            println!("{key:<width$}  {value}");
        }
        Ok(())
    }

    pub fn validation(
        &self,
        source: &str,
        places: &[PlaceCandidate],
        validate: &str,
    ) -> Result<(), serde_json::Error> {
        if self.json {
            return print_json(&ValidationOutput {
                source,
                places,
                validate,
            });
        }

        println!("{validate}");
        for place in places {
            match place.id {
                Some(id) => println!("  {id:>8}  {}", place.name),
                None => println!("  {:>8}  {}", "-", place.name),
            }
        }
        Ok(())
    }
}

fn print_json(value: &impl Serialize) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
