//! Unit suffix normalization.
//!
//! Source documents append localized unit suffixes to numeric values
//! (`12°C`, `745 мм рт. ст.`, `3 м/с`, `81%`). These helpers remove exactly
//! one known suffix and leave the rest of the value alone.

use weather_ion_weather_models::UnitId;

/// Separator between the high and low halves of a temperature range.
pub const RANGE_SEPARATOR: &str = "..";

// Latin `C` and Cyrillic `С` are both used after the degree mark.
const CELSIUS_SUFFIXES: &[&str] = &[" °C", "°C", " °\u{421}", "°\u{421}", " °", "°"];
const PRESSURE_SUFFIXES: &[&str] = &[" мм рт. ст.", "мм рт. ст.", " mmHg", "mmHg"];
const WIND_SPEED_SUFFIXES: &[&str] = &[" м/с", "м/с", " m/s", "m/s"];
const PERCENT_SUFFIXES: &[&str] = &[" %", "%"];

/// Returns the recognized suffixes for a unit, longest spelling first.
#[must_use]
pub const fn suffixes(unit: UnitId) -> &'static [&'static str] {
    match unit {
        UnitId::Celsius => CELSIUS_SUFFIXES,
        UnitId::MillimetersOfMercury => PRESSURE_SUFFIXES,
        UnitId::MetersPerSecond => WIND_SPEED_SUFFIXES,
        UnitId::Percent => PERCENT_SUFFIXES,
    }
}

/// Strips one trailing unit suffix from `raw`.
///
/// Returns `raw` unchanged when it does not end in a known suffix.
#[must_use]
pub fn strip_unit(raw: &str, unit: UnitId) -> &str {
    suffixes(unit)
        .iter()
        .find_map(|suffix| raw.strip_suffix(suffix))
        .unwrap_or(raw)
}

/// Splits a `"H..L"` temperature range into its high and low halves with
/// the degree mark removed from each.
///
/// Returns `None` unless the value contains exactly one separator and both
/// halves are non-empty. A half that begins or ends with `.` means the
/// separator was written with extra dots and is rejected as well.
#[must_use]
pub fn split_range(raw: &str) -> Option<(String, String)> {
    let mut parts = raw.split(RANGE_SEPARATOR);
    let (Some(high), Some(low), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };

    let (high, low) = (high.trim(), low.trim());
    if [high, low]
        .iter()
        .any(|half| half.starts_with('.') || half.ends_with('.'))
    {
        return None;
    }

    let high = strip_unit(high, UnitId::Celsius);
    let low = strip_unit(low, UnitId::Celsius);
    if high.is_empty() || low.is_empty() {
        return None;
    }

    Some((high.to_owned(), low.to_owned()))
}
