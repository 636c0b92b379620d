//! CSS selector query engine.
//!
//! Evaluates a [`QueryProgram`] against an HTML page with `scraper` and
//! replays the matches as element events.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::query::{ElementRule, QueryProgram};
use crate::{EventSink, QueryEngine, QueryError};

/// Query engine backed by compiled CSS selectors.
#[derive(Debug)]
pub struct SelectorEngine {
    rules: Vec<CompiledRule>,
}

#[derive(Debug)]
struct CompiledRule {
    name: String,
    selector: Selector,
    attribute: Option<String>,
    capture: Option<Regex>,
    children: Vec<CompiledRule>,
}

impl SelectorEngine {
    /// Compiles every selector and capture pattern of `program`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Selector`] for an invalid CSS selector and
    /// [`QueryError::Pattern`] for an invalid capture regex.
    pub fn new(program: &QueryProgram) -> Result<Self, QueryError> {
        Ok(Self {
            rules: compile_rules(&program.elements)?,
        })
    }

    /// Parses and compiles a TOML program in one step.
    ///
    /// # Errors
    ///
    /// Returns any error of [`QueryProgram::parse`] or [`SelectorEngine::new`].
    pub fn from_toml(source: &str) -> Result<Self, QueryError> {
        Self::new(&QueryProgram::parse(source)?)
    }
}

fn compile_rules(rules: &[ElementRule]) -> Result<Vec<CompiledRule>, QueryError> {
    rules
        .iter()
        .map(|rule| -> Result<CompiledRule, QueryError> {
            Ok(CompiledRule {
                name: rule.name.clone(),
                selector: parse_selector(&rule.selector)?,
                attribute: rule.attribute.clone(),
                capture: rule.capture.as_deref().map(Regex::new).transpose()?,
                children: compile_rules(&rule.children)?,
            })
        })
        .collect()
}

/// Parses a CSS selector string, returning a [`QueryError`] on failure.
fn parse_selector(selector: &str) -> Result<Selector, QueryError> {
    Selector::parse(selector)
        .map_err(|e| QueryError::Selector(format!("invalid CSS selector '{selector}': {e}")))
}

impl CompiledRule {
    fn value_of(&self, node: ElementRef<'_>) -> Option<String> {
        let raw = match &self.attribute {
            Some(attribute) => node.value().attr(attribute)?.to_owned(),
            None => node.text().collect::<String>(),
        };
        let raw = raw.split_whitespace().collect::<Vec<_>>().join(" ");

        match &self.capture {
            Some(pattern) => pattern
                .captures(&raw)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_owned()),
            None => Some(raw),
        }
    }
}

fn emit_rules(rules: &[CompiledRule], scope: ElementRef<'_>, sink: &mut dyn EventSink) {
    for rule in rules {
        for node in scope.select(&rule.selector) {
            sink.enter_element(&rule.name);
            if rule.children.is_empty() {
                if let Some(value) = rule.value_of(node) {
                    sink.text_value(&value);
                }
            } else {
                emit_rules(&rule.children, node, sink);
            }
            sink.exit_element();
        }
    }
}

impl QueryEngine for SelectorEngine {
    fn evaluate(&self, document: &[u8], sink: &mut dyn EventSink) -> Result<(), QueryError> {
        let body = String::from_utf8_lossy(document);
        let html = Html::parse_document(&body);
        emit_rules(&self.rules, html.root_element(), sink);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::WeatherReceiver;
    use crate::{extract_places, extract_weather};

    const PAGE: &str = r#"
        <html><body>
          <div class="now">
            <span class="date">19 октября, 12:00</span>
            <span class="cond">Пасмурно</span>
            <span class="temp">+3<i>°C</i></span>
            <span class="wind"><abbr title="Северо-западный">СЗ</abbr> <b>4 м/с</b></span>
          </div>
          <table class="days">
            <tr class="day"><th>пн</th><td><img src="/i/new/c3.r1.png"></td><td class="t">5°..-2°</td></tr>
            <tr class="day"><th>вт</th><td><img src="/i/new/d.sun.png"></td><td class="t">7°..1°</td></tr>
          </table>
        </body></html>
    "#;

    const PROGRAM: &str = r#"
        [[element]]
        name = "date"
        selector = ".now .date"

        [[element]]
        name = "condition"
        selector = ".now .cond"

        [[element]]
        name = "temperature"
        selector = ".now .temp"

        [[element]]
        name = "windDirection"
        selector = ".now .wind abbr"

        [[element]]
        name = "windSpeed"
        selector = ".now .wind b"

        [[element]]
        name = "forecast"
        selector = "tr.day"

          [[element.element]]
          name = "day"
          selector = "th"

          [[element.element]]
          name = "icon"
          selector = "img"
          attribute = "src"
          capture = '([^/]+)\.png$'

          [[element.element]]
          name = "temperature"
          selector = "td.t"
    "#;

    #[test]
    fn extracts_weather_from_html() {
        let engine = SelectorEngine::from_toml(PROGRAM).unwrap();
        let record = extract_weather(&engine, PAGE.as_bytes()).unwrap();

        assert_eq!(record.date.as_deref(), Some("19 октября, 12:00"));
        assert_eq!(record.condition.as_deref(), Some("Пасмурно"));
        assert_eq!(record.temperature.as_deref(), Some("+3"));
        assert_eq!(record.wind_direction.as_deref(), Some("СЗ"));
        assert_eq!(record.wind_speed.as_deref(), Some("4"));

        assert_eq!(record.forecasts.len(), 2);
        assert_eq!(record.forecasts[0].day.as_deref(), Some("пн"));
        assert_eq!(record.forecasts[0].icon_code.as_deref(), Some("c3.r1"));
        assert_eq!(record.forecasts[0].temperature_high.as_deref(), Some("5"));
        assert_eq!(record.forecasts[1].icon_code.as_deref(), Some("d.sun"));
        assert_eq!(record.forecasts[1].temperature_low.as_deref(), Some("1"));
    }

    #[test]
    fn empty_page_yields_empty_record() {
        let engine = SelectorEngine::from_toml(PROGRAM).unwrap();
        let record = extract_weather(&engine, b"").unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn extracts_places_from_html() {
        let engine = SelectorEngine::from_toml(
            r#"
            [[element]]
            name = "place"
            selector = "ul.results li"

              [[element.element]]
              name = "name"
              selector = "a"

              [[element.element]]
              name = "link"
              selector = "a"
              attribute = "href"
            "#,
        )
        .unwrap();
        let page = r#"<ul class="results">
            <li><a href="/city/daily/4368/">Москва</a></li>
            <li><a href="/city/daily/11941/">Московский</a></li>
            <li><a href="/news/">Новости</a></li>
        </ul>"#;

        let places = extract_places(&engine, page.as_bytes()).unwrap();
        assert_eq!(places.len(), 3);
        assert_eq!(places[0].name, "Москва");
        assert_eq!(places[0].id, Some(4368));
        assert_eq!(places[1].id, Some(11941));
        assert_eq!(places[2].id, None);
    }

    #[test]
    fn capture_without_match_emits_no_text() {
        let engine = SelectorEngine::from_toml(
            r#"
            [[element]]
            name = "condition"
            selector = "img"
            attribute = "src"
            capture = '([^/]+)\.png$'
            "#,
        )
        .unwrap();
        let mut sink = WeatherReceiver::new();
        engine
            .evaluate(br#"<img src="/i/c3.gif">"#, &mut sink)
            .unwrap();
        assert_eq!(sink.finish().condition, None);
    }

    #[test]
    fn rejects_invalid_selector() {
        let err = SelectorEngine::from_toml(
            r#"
            [[element]]
            name = "date"
            selector = "!!"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, QueryError::Selector(_)));
    }

    #[test]
    fn rejects_invalid_capture() {
        let err = SelectorEngine::from_toml(
            r#"
            [[element]]
            name = "date"
            selector = "span"
            capture = "(unclosed"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, QueryError::Pattern(_)));
    }
}
