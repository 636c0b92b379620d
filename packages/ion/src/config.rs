//! Ion configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes. The shipped `config/default.toml` spells out all defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::IonError;
use crate::report::Credits;
use crate::source_key::SOURCE_DELIMITER;

/// The shipped configuration with every default spelled out.
pub const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Which query engine parses fetched documents.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EngineKind {
    /// CSS selector programs over HTML pages.
    #[default]
    Selector,
    /// Documents that already use the receiver's element names.
    Xml,
}

/// Runtime configuration of a [`crate::WeatherIon`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IonConfig {
    /// First token of every source key.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Weather page prefix; the place id or name and `/` are appended.
    #[serde(default = "default_weather_url")]
    pub weather_url: String,
    /// Place search prefix; the form-encoded query is appended.
    #[serde(default = "default_search_url")]
    pub search_url: String,
    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Attribution published with every report.
    #[serde(default = "default_credit")]
    pub credit: String,
    /// Attribution link published with every report.
    #[serde(default = "default_credit_url")]
    pub credit_url: String,
    /// Query engine used for both document kinds.
    #[serde(default)]
    pub engine: EngineKind,
    /// Weather query program file. The embedded program is used if unset.
    #[serde(default)]
    pub weather_query: Option<PathBuf>,
    /// Place search query program file. The embedded program is used if
    /// unset.
    #[serde(default)]
    pub search_query: Option<PathBuf>,
}

fn default_namespace() -> String {
    "gismeteo".to_owned()
}

fn default_weather_url() -> String {
    "https://www.gismeteo.ru/city/hourly/".to_owned()
}

fn default_search_url() -> String {
    "https://www.gismeteo.ru/city/?gis=".to_owned()
}

fn default_user_agent() -> String {
    concat!("weather_ion/", env!("CARGO_PKG_VERSION")).to_owned()
}

fn default_credit() -> String {
    "Source: Gismeteo.ru".to_owned()
}

fn default_credit_url() -> String {
    "https://www.gismeteo.ru/".to_owned()
}

impl Default for IonConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            weather_url: default_weather_url(),
            search_url: default_search_url(),
            user_agent: default_user_agent(),
            credit: default_credit(),
            credit_url: default_credit_url(),
            engine: EngineKind::default(),
            weather_query: None,
            search_query: None,
        }
    }
}

impl IonConfig {
    /// Parses and validates a TOML configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IonError::Toml`] for invalid TOML and [`IonError::Config`]
    /// if a value is unusable.
    pub fn parse(source: &str) -> Result<Self, IonError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration file.
    ///
    /// Relative query program paths are resolved against the file's
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`IonError::Io`] if the file cannot be read, otherwise the
    /// errors of [`IonConfig::parse`].
    pub fn load(path: &Path) -> Result<Self, IonError> {
        log::debug!("Loading config {}", path.display());
        let source = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&source)?;

        if let Some(dir) = path.parent() {
            for query in [&mut config.weather_query, &mut config.search_query]
                .into_iter()
                .flatten()
            {
                if query.is_relative() {
                    *query = dir.join(&*query);
                }
            }
        }

        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// See [`IonConfig::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, IonError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    fn validate(&self) -> Result<(), IonError> {
        if self.namespace.is_empty() || self.namespace.contains(SOURCE_DELIMITER) {
            return Err(IonError::Config(format!(
                "namespace must be non-empty and must not contain '{SOURCE_DELIMITER}'"
            )));
        }
        for (key, url) in [
            ("weather_url", &self.weather_url),
            ("search_url", &self.search_url),
        ] {
            if url.trim().is_empty() {
                return Err(IonError::Config(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }

    /// Attribution published with every report.
    #[must_use]
    pub fn credits(&self) -> Credits {
        Credits {
            credit: self.credit.clone(),
            credit_url: self.credit_url.clone(),
        }
    }

    /// URL of the weather page for a place id or name.
    #[must_use]
    pub fn weather_page(&self, place_code: &str) -> String {
        format!("{}{place_code}/", self.weather_url)
    }

    /// URL of the place search for `query`.
    ///
    /// The query is form-encoded so names containing `#`, `&` or spaces
    /// reach the server whole.
    #[must_use]
    pub fn search_page(&self, query: &str) -> String {
        let query: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        format!("{}{query}", self.search_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_config_matches_defaults() {
        assert_eq!(IonConfig::parse(DEFAULT_CONFIG).unwrap(), IonConfig::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = IonConfig::parse(
            r#"
            namespace = "gm"
            engine = "xml"
            "#,
        )
        .unwrap();
        assert_eq!(config.namespace, "gm");
        assert_eq!(config.engine, EngineKind::Xml);
        assert_eq!(config.weather_url, default_weather_url());
    }

    #[test]
    fn rejects_unusable_values() {
        assert!(matches!(
            IonConfig::parse(r#"namespace = "a|b""#),
            Err(IonError::Config(_))
        ));
        assert!(matches!(
            IonConfig::parse(r#"search_url = " ""#),
            Err(IonError::Config(_))
        ));
        assert!(matches!(
            IonConfig::parse(r#"engine = "regex""#),
            Err(IonError::Toml(_))
        ));
    }

    #[test]
    fn builds_page_urls() {
        let config = IonConfig::default();
        assert_eq!(
            config.weather_page("4368"),
            "https://www.gismeteo.ru/city/hourly/4368/"
        );
        assert_eq!(
            config.search_page("Москва"),
            "https://www.gismeteo.ru/city/?gis=%D0%9C%D0%BE%D1%81%D0%BA%D0%B2%D0%B0"
        );
    }

    #[test]
    fn search_query_survives_reserved_characters() {
        let page = IonConfig::default().search_page("Ростов#на&Дону+Юг Запад");
        let url = reqwest::Url::parse(&page).unwrap();

        assert_eq!(url.fragment(), None);
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![("gis".to_owned(), "Ростов#на&Дону+Юг Запад".to_owned())]
        );
    }
}
