#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Condition classification tables.
//!
//! Resolves composite icon codes (`d.sun.c2.r1.st`), free-text condition
//! phrases, wind direction tokens and weekday tokens into the canonical
//! [`ConditionCategory`] taxonomy and display strings.
//!
//! The tables are declared as literal data in [`tables`] and loaded once
//! into a process-wide [`ClassificationTable`]. Lookups are exact matches;
//! a miss returns `None` and callers decide how to render it.

pub mod tables;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use weather_ion_weather_models::ConditionCategory;

/// Image extensions accepted on icon codes.
const ICON_EXTENSIONS: &[&str] = &[".png", ".gif", ".svg"];

static TABLE: LazyLock<ClassificationTable> = LazyLock::new(ClassificationTable::build);

/// A condition resolved to a category and a display description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCondition {
    /// Normalized category.
    pub category: ConditionCategory,
    /// Human-readable description.
    pub description: String,
}

/// Immutable lookup maps built from [`tables`].
#[derive(Debug)]
pub struct ClassificationTable {
    raw_conditions: BTreeMap<&'static str, ConditionCategory>,
    icon_categories: BTreeMap<&'static str, ConditionCategory>,
    icon_descriptions: BTreeMap<&'static str, &'static str>,
    /// Lowercased icon description to category, first table entry wins.
    description_categories: BTreeMap<String, ConditionCategory>,
    wind_directions: BTreeMap<&'static str, &'static str>,
    day_names: BTreeMap<&'static str, &'static str>,
}

impl ClassificationTable {
    /// Returns the shared table, building it on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        &TABLE
    }

    fn build() -> Self {
        let mut description_categories = BTreeMap::new();
        for (_, category, description) in tables::ICON_CODES {
            description_categories
                .entry(description.to_lowercase())
                .or_insert(*category);
        }

        let table = Self {
            raw_conditions: tables::RAW_CONDITIONS.iter().copied().collect(),
            icon_categories: tables::ICON_CODES
                .iter()
                .map(|(code, category, _)| (*code, *category))
                .collect(),
            icon_descriptions: tables::ICON_CODES
                .iter()
                .map(|(code, _, description)| (*code, *description))
                .collect(),
            description_categories,
            wind_directions: tables::WIND_DIRECTIONS.iter().copied().collect(),
            day_names: tables::DAY_NAMES.iter().copied().collect(),
        };

        log::debug!(
            "Built classification table: {} icon codes, {} condition phrases",
            table.icon_categories.len(),
            table.raw_conditions.len()
        );

        table
    }

    /// Looks up the category of a composite icon code.
    #[must_use]
    pub fn icon_category(&self, code: &str) -> Option<ConditionCategory> {
        self.icon_categories.get(icon_key(code)).copied()
    }

    /// Looks up the description of a composite icon code.
    #[must_use]
    pub fn icon_description(&self, code: &str) -> Option<&'static str> {
        self.icon_descriptions.get(icon_key(code)).copied()
    }

    /// Looks up the category of a free-text condition phrase.
    #[must_use]
    pub fn condition_category(&self, raw: &str) -> Option<ConditionCategory> {
        let key = raw.trim().to_lowercase();
        self.raw_conditions
            .get(key.as_str())
            .or_else(|| self.description_categories.get(&key))
            .copied()
    }

    /// Maps a wind direction token to a compass direction.
    #[must_use]
    pub fn wind_direction(&self, token: &str) -> Option<&'static str> {
        self.wind_directions.get(token.trim()).copied()
    }

    /// Maps a weekday token to its long name.
    #[must_use]
    pub fn day_name(&self, token: &str) -> Option<&'static str> {
        let key = token.trim().to_lowercase();
        self.day_names.get(key.as_str()).copied()
    }

    /// Resolves a raw current-condition value, which may be either an icon
    /// code or a phrase.
    ///
    /// Icon codes take precedence. Phrases keep their original text as the
    /// description. Returns `None` when neither layer knows the value.
    #[must_use]
    pub fn resolve_condition(&self, raw: &str) -> Option<ResolvedCondition> {
        if let (Some(category), Some(description)) =
            (self.icon_category(raw), self.icon_description(raw))
        {
            return Some(ResolvedCondition {
                category,
                description: description.to_owned(),
            });
        }

        self.condition_category(raw)
            .map(|category| ResolvedCondition {
                category,
                description: raw.trim().to_owned(),
            })
    }
}

/// Strips a leading path and a known image extension from an icon code.
fn icon_key(code: &str) -> &str {
    let code = code.trim();
    let file = code.rsplit('/').next().unwrap_or(code);
    ICON_EXTENSIONS
        .iter()
        .find_map(|ext| file.strip_suffix(ext))
        .unwrap_or(file)
}

/// Looks up the category of a composite icon code in the global table.
#[must_use]
pub fn icon_category(code: &str) -> Option<ConditionCategory> {
    ClassificationTable::global().icon_category(code)
}

/// Looks up the description of a composite icon code in the global table.
#[must_use]
pub fn icon_description(code: &str) -> Option<&'static str> {
    ClassificationTable::global().icon_description(code)
}

/// Looks up a free-text condition phrase in the global table.
#[must_use]
pub fn condition_category(raw: &str) -> Option<ConditionCategory> {
    ClassificationTable::global().condition_category(raw)
}

/// Maps a wind direction token using the global table.
#[must_use]
pub fn wind_direction(token: &str) -> Option<&'static str> {
    ClassificationTable::global().wind_direction(token)
}

/// Maps a weekday token using the global table.
#[must_use]
pub fn day_name(token: &str) -> Option<&'static str> {
    ClassificationTable::global().day_name(token)
}

/// Resolves a current-condition value using the global table.
#[must_use]
pub fn resolve_condition(raw: &str) -> Option<ResolvedCondition> {
    ClassificationTable::global().resolve_condition(raw)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn every_listed_icon_code_resolves() {
        for (code, category, description) in tables::ICON_CODES {
            assert_eq!(icon_category(code), Some(*category), "{code}");
            assert_eq!(icon_description(code), Some(*description), "{code}");
            // Repeated lookups return the same answer.
            assert_eq!(icon_category(code), icon_category(code));
        }
    }

    #[test]
    fn icon_codes_are_unique() {
        let codes: BTreeSet<&str> = tables::ICON_CODES.iter().map(|(c, _, _)| *c).collect();
        assert_eq!(codes.len(), tables::ICON_CODES.len());
    }

    #[test]
    fn sky_only_codes() {
        assert_eq!(icon_category("d.sun"), Some(ConditionCategory::ClearDay));
        assert_eq!(icon_category("n.moon.c1"), Some(ConditionCategory::FewCloudsNight));
        assert_eq!(icon_category("c3"), Some(ConditionCategory::Overcast));
    }

    #[test]
    fn thunderstorm_flag_wins_over_light_precipitation() {
        assert_eq!(icon_category("c3.r1"), Some(ConditionCategory::LightRain));
        assert_eq!(icon_category("c3.r1.st"), Some(ConditionCategory::Thunderstorm));
        assert_eq!(
            icon_category("d.sun.c2.s1.st"),
            Some(ConditionCategory::ChanceThunderstormDay)
        );
        for (code, category, _) in tables::ICON_CODES {
            if code.ends_with(".st") {
                assert!(category.is_thunderstorm(), "{code} should be a thunderstorm");
            }
        }
    }

    #[test]
    fn clear_and_few_clouds_take_precipitation_and_thunderstorms() {
        assert_eq!(icon_category("d.sun.st"), Some(ConditionCategory::ChanceThunderstormDay));
        assert_eq!(icon_category("n.moon.st"), Some(ConditionCategory::ChanceThunderstormNight));
        assert_eq!(
            icon_category("d.sun.c1.st"),
            Some(ConditionCategory::ChanceThunderstormDay)
        );
        assert_eq!(icon_category("d.sun.c1.r1"), Some(ConditionCategory::ChanceShowersDay));
        assert_eq!(icon_category("n.moon.c1.s2"), Some(ConditionCategory::ChanceSnowNight));
        assert_eq!(icon_category("d.sun.r1"), Some(ConditionCategory::ChanceShowersDay));
        assert_eq!(icon_category("n.moon.rs3"), Some(ConditionCategory::RainSnow));
        assert_eq!(
            icon_category("d.sun.c1.r2.st"),
            Some(ConditionCategory::ChanceThunderstormDay)
        );
        assert_eq!(icon_description("d.sun.c1.st"), Some("Малооблачно, гроза"));
    }

    #[test]
    fn precipitation_steps_on_overcast() {
        assert_eq!(icon_category("c3.r2"), Some(ConditionCategory::Rain));
        assert_eq!(icon_category("c3.r3"), Some(ConditionCategory::Showers));
        assert_eq!(icon_category("c3.s1"), Some(ConditionCategory::Flurries));
        assert_eq!(icon_category("c3.s3"), Some(ConditionCategory::Snow));
        assert_eq!(icon_category("c3.rs2"), Some(ConditionCategory::RainSnow));
    }

    #[test]
    fn icon_paths_and_extensions_are_ignored() {
        assert_eq!(
            icon_category("/static/images/icons/new/d.sun.c2.r1.png"),
            Some(ConditionCategory::ChanceShowersDay)
        );
        assert_eq!(icon_description("c3.gif"), Some("Пасмурно"));
    }

    #[test]
    fn unknown_icon_code_is_absent() {
        assert_eq!(icon_category("c4"), None);
        assert_eq!(icon_category("c3.r4"), None);
        assert_eq!(icon_category("d.sun.c3"), None);
        assert_eq!(icon_description(""), None);
    }

    #[test]
    fn condition_phrases_are_case_insensitive() {
        assert_eq!(condition_category("Пасмурно"), Some(ConditionCategory::Overcast));
        assert_eq!(condition_category("  ЛИВЕНЬ "), Some(ConditionCategory::Showers));
        assert_eq!(condition_category("метеоритный дождь"), None);
    }

    #[test]
    fn condition_phrases_fall_back_to_icon_descriptions() {
        assert_eq!(
            condition_category("Пасмурно, дождь, гроза"),
            Some(ConditionCategory::Thunderstorm)
        );
    }

    #[test]
    fn resolve_prefers_icon_codes() {
        let resolved = resolve_condition("c3.s2").unwrap();
        assert_eq!(resolved.category, ConditionCategory::LightSnow);
        assert_eq!(resolved.description, "Пасмурно, снег");

        let resolved = resolve_condition("Туман").unwrap();
        assert_eq!(resolved.category, ConditionCategory::Mist);
        assert_eq!(resolved.description, "Туман");

        assert_eq!(resolve_condition("???"), None);
    }

    #[test]
    fn wind_tokens() {
        assert_eq!(wind_direction("СЗ"), Some("NW"));
        assert_eq!(wind_direction("Ю"), Some("S"));
        assert_eq!(wind_direction(""), Some("VR"));
        assert_eq!(wind_direction("штиль"), Some("VR"));
        assert_eq!(wind_direction("NNW"), None);
    }

    #[test]
    fn day_tokens() {
        assert_eq!(day_name("пн"), Some("Monday"));
        assert_eq!(day_name("Вс"), Some("Sunday"));
        assert_eq!(day_name("суббота"), Some("Saturday"));
        assert_eq!(day_name("mon"), None);
        let short: BTreeSet<&str> = ["пн", "вт", "ср", "чт", "пт", "сб", "вс"]
            .iter()
            .filter_map(|d| day_name(d))
            .collect();
        assert_eq!(short.len(), 7);
    }
}
