//! Source key parsing.
//!
//! Hosts address the ion with `|`-separated keys:
//!
//! * `<namespace>|validate|<place name>` searches for matching places
//! * `<namespace>|weather|<place name>[|<place id>]` fetches weather

use strum_macros::{AsRefStr, Display, EnumString};

/// Separator between source key tokens.
pub const SOURCE_DELIMITER: char = '|';

/// Minimum number of tokens in a well-formed key.
const MIN_TOKENS: usize = 3;

/// Action requested by a source key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum SourceAction {
    /// Search for places matching a name.
    Validate,
    /// Fetch weather for a place.
    Weather,
}

/// A parsed source key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceKey {
    /// Namespace token (the ion name).
    pub namespace: String,
    /// Requested action.
    pub action: SourceAction,
    /// Place name as typed by the user or returned by validation.
    pub place: String,
    /// Place id returned by validation, if the host passed it along.
    pub place_id: Option<String>,
}

/// Why a source key was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedSource {
    /// Fewer than three tokens.
    #[error("expected at least {MIN_TOKENS} tokens, found {0}")]
    TooFewTokens(usize),

    /// The action token is neither `validate` nor `weather`.
    #[error("unknown action '{0}'")]
    UnknownAction(String),

    /// The place token is empty.
    #[error("empty place name")]
    EmptyPlace,
}

impl SourceKey {
    /// Parses a source key.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedSource`] if the key has fewer than three tokens,
    /// an unknown action, or an empty place name.
    pub fn parse(source: &str) -> Result<Self, MalformedSource> {
        let tokens: Vec<&str> = source.split(SOURCE_DELIMITER).collect();
        if tokens.len() < MIN_TOKENS {
            return Err(MalformedSource::TooFewTokens(tokens.len()));
        }

        let action = tokens[1]
            .parse::<SourceAction>()
            .map_err(|_| MalformedSource::UnknownAction(tokens[1].to_owned()))?;

        let place = tokens[2].trim();
        if place.is_empty() {
            return Err(MalformedSource::EmptyPlace);
        }

        let place_id = tokens
            .get(3)
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .map(str::to_owned);

        Ok(Self {
            namespace: tokens[0].to_owned(),
            action,
            place: place.to_owned(),
            place_id,
        })
    }

    /// The token used to build the fetch URL: the place id when known,
    /// otherwise the place name.
    #[must_use]
    pub fn place_code(&self) -> &str {
        self.place_id.as_deref().unwrap_or(&self.place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_validate_key() {
        let key = SourceKey::parse("gismeteo|validate|Москва").unwrap();
        assert_eq!(key.namespace, "gismeteo");
        assert_eq!(key.action, SourceAction::Validate);
        assert_eq!(key.place, "Москва");
        assert_eq!(key.place_id, None);
        assert_eq!(key.place_code(), "Москва");
    }

    #[test]
    fn weather_key_prefers_place_id() {
        let key = SourceKey::parse("gismeteo|weather|Москва|4368").unwrap();
        assert_eq!(key.action, SourceAction::Weather);
        assert_eq!(key.place_code(), "4368");

        let key = SourceKey::parse("gismeteo|weather|4368|").unwrap();
        assert_eq!(key.place_id, None);
        assert_eq!(key.place_code(), "4368");
    }

    #[test]
    fn rejects_short_keys() {
        assert_eq!(
            SourceKey::parse("ns|validate"),
            Err(MalformedSource::TooFewTokens(2))
        );
        assert_eq!(SourceKey::parse(""), Err(MalformedSource::TooFewTokens(1)));
    }

    #[test]
    fn rejects_unknown_actions_and_empty_places() {
        assert_eq!(
            SourceKey::parse("ns|forecast|Москва"),
            Err(MalformedSource::UnknownAction("forecast".to_string()))
        );
        assert_eq!(
            SourceKey::parse("ns|weather| "),
            Err(MalformedSource::EmptyPlace)
        );
    }
}
