//! Query program resolution.
//!
//! Programs are resolved on every parse, so an edited program file takes
//! effect on the next completed fetch.

use std::path::PathBuf;

use strum_macros::{AsRefStr, Display};
use weather_ion_extract::query::QueryProgram;
use weather_ion_extract::selector::SelectorEngine;
use weather_ion_extract::xml::XmlEngine;
use weather_ion_extract::{QueryEngine, QueryError};

use crate::config::{EngineKind, IonConfig};

/// Embedded selector program for weather pages.
pub const WEATHER_PROGRAM: &str = include_str!("../queries/weather.toml");

/// Embedded selector program for place search pages.
pub const SEARCH_PROGRAM: &str = include_str!("../queries/search.toml");

/// Kind of document a fetch returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum DocumentKind {
    Weather,
    Search,
}

/// Supplies a ready-to-run [`QueryEngine`] for each document kind.
pub trait ProgramLoader: Send + Sync {
    /// Resolves the engine for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if the program is unavailable or invalid.
    fn load(&self, kind: DocumentKind) -> Result<Box<dyn QueryEngine>, QueryError>;
}

/// [`ProgramLoader`] driven by [`IonConfig`]: program files when
/// configured, the embedded programs otherwise.
#[derive(Debug, Clone, Default)]
pub struct ConfigProgramLoader {
    engine: EngineKind,
    weather_query: Option<PathBuf>,
    search_query: Option<PathBuf>,
}

impl ConfigProgramLoader {
    /// Uses the engine and program files named by `config`.
    #[must_use]
    pub fn new(config: &IonConfig) -> Self {
        Self {
            engine: config.engine,
            weather_query: config.weather_query.clone(),
            search_query: config.search_query.clone(),
        }
    }

    fn program(&self, kind: DocumentKind) -> Result<QueryProgram, QueryError> {
        let (path, embedded) = match kind {
            DocumentKind::Weather => (self.weather_query.as_deref(), WEATHER_PROGRAM),
            DocumentKind::Search => (self.search_query.as_deref(), SEARCH_PROGRAM),
        };
        match path {
            Some(path) => QueryProgram::load(path),
            None => QueryProgram::parse(embedded),
        }
    }
}

impl ProgramLoader for ConfigProgramLoader {
    fn load(&self, kind: DocumentKind) -> Result<Box<dyn QueryEngine>, QueryError> {
        match self.engine {
            EngineKind::Xml => Ok(Box::new(XmlEngine)),
            EngineKind::Selector => Ok(Box::new(SelectorEngine::new(&self.program(kind)?)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use weather_ion_extract::{extract_places, extract_weather};

    use super::*;

    #[test]
    fn embedded_programs_compile() {
        let loader = ConfigProgramLoader::default();
        assert!(loader.load(DocumentKind::Weather).is_ok());
        assert!(loader.load(DocumentKind::Search).is_ok());
    }

    #[test]
    fn embedded_weather_program_reads_a_weather_page() {
        let page = r#"<html><body>
            <div id="weather">
              <div class="section higher">
                <div class="wicon"><img class="png" src="//st.gismeteo.ru/static/images/icons/new/c3.r1.png"></div>
                <div class="temp"><dd class="value m_temp c">+3<span class="meas">°C</span></dd></div>
                <dl class="cloudness"><dt>Пасмурно, небольшой дождь</dt></dl>
                <div class="wicon wind"><dl><dt>СЗ</dt><dd><span class="value m_wind ms">4</span> м/с</dd></dl></div>
                <div class="wicon barp"><span class="value m_press torr">745</span></div>
                <div class="wicon hum">93<span class="unit">%</span></div>
                <div class="wicon water"><dd class="value m_temp c">+8°C</dd></div>
              </div>
              <div class="local-date">19 октября, 12:00</div>
            </div>
            <table class="wsection wdata"><tbody>
              <tr class="wrow forecast">
                <th>пн</th>
                <td class="clicon"><img class="png" src="//st.gismeteo.ru/static/images/icons/new/d.sun.c2.png"></td>
                <td class="temp">+5°..-2°</td>
              </tr>
            </tbody></table>
            </body></html>"#;

        let engine = ConfigProgramLoader::default()
            .load(DocumentKind::Weather)
            .unwrap();
        let record = extract_weather(engine.as_ref(), page.as_bytes()).unwrap();

        assert_eq!(record.date.as_deref(), Some("19 октября, 12:00"));
        assert_eq!(record.condition.as_deref(), Some("c3.r1"));
        assert_eq!(record.temperature.as_deref(), Some("+3"));
        assert_eq!(record.wind_direction.as_deref(), Some("СЗ"));
        assert_eq!(record.wind_speed.as_deref(), Some("4"));
        assert_eq!(record.pressure.as_deref(), Some("745"));
        assert_eq!(record.humidity.as_deref(), Some("93"));
        assert_eq!(record.water_temperature.as_deref(), Some("+8"));
        assert_eq!(record.forecasts.len(), 1);
        assert_eq!(record.forecasts[0].day.as_deref(), Some("пн"));
        assert_eq!(record.forecasts[0].icon_code.as_deref(), Some("d.sun.c2"));
        assert_eq!(record.forecasts[0].temperature_high.as_deref(), Some("+5"));
        assert_eq!(record.forecasts[0].temperature_low.as_deref(), Some("-2"));
    }

    #[test]
    fn embedded_search_program_reads_a_result_list() {
        let page = r#"<html><body>
            <div class="catalog_block"><ul class="catalog_list">
              <li class="catalog_item"><a href="/city/daily/4368/">Москва</a></li>
              <li class="catalog_item"><a href="/city/daily/11941/">Московский</a></li>
            </ul></div>
            </body></html>"#;

        let engine = ConfigProgramLoader::default()
            .load(DocumentKind::Search)
            .unwrap();
        let places = extract_places(engine.as_ref(), page.as_bytes()).unwrap();

        assert_eq!(places.len(), 2);
        assert_eq!(places[0].name, "Москва");
        assert_eq!(places[1].id, Some(11941));
    }

    #[test]
    fn missing_program_file_is_an_error() {
        let loader = ConfigProgramLoader::new(&IonConfig {
            weather_query: Some(PathBuf::from("/nonexistent/weather.toml")),
            ..IonConfig::default()
        });
        assert!(matches!(
            loader.load(DocumentKind::Weather),
            Err(QueryError::Io(_))
        ));
        assert!(loader.load(DocumentKind::Search).is_ok());
    }

    #[test]
    fn xml_engine_needs_no_program() {
        let loader = ConfigProgramLoader::new(&IonConfig {
            engine: EngineKind::Xml,
            weather_query: Some(PathBuf::from("/nonexistent/weather.toml")),
            ..IonConfig::default()
        });
        assert!(loader.load(DocumentKind::Weather).is_ok());
    }
}
