//! Place search extraction.

use std::sync::LazyLock;

use regex::Regex;
use weather_ion_weather_models::PlaceCandidate;

use crate::dispatch::{Extraction, StackDispatcher};

/// Element that wraps one search result.
pub const PLACE_ELEMENT: &str = "place";

/// Matches the numeric place id inside a daily forecast link.
static PLACE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/city/daily/(\d+)/").expect("valid regex"));

/// Event sink producing the list of [`PlaceCandidate`]s in document order.
pub type PlaceSearchReceiver = StackDispatcher<PlaceSearchExtraction>;

/// Place fields addressable by element name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceField {
    Name,
    Link,
}

/// Extraction state for a place search document.
#[derive(Debug, Default)]
pub struct PlaceSearchExtraction {
    current: Option<PlaceCandidate>,
    places: Vec<PlaceCandidate>,
}

impl Extraction for PlaceSearchExtraction {
    type Field = PlaceField;
    type Output = Vec<PlaceCandidate>;

    const ROUTES: &'static [(&'static str, PlaceField)] =
        &[("name", PlaceField::Name), ("link", PlaceField::Link)];

    fn open(&mut self, name: &str) {
        if name == PLACE_ELEMENT {
            self.current = Some(PlaceCandidate::default());
        }
    }

    fn assign(&mut self, field: PlaceField, value: &str) {
        let Some(candidate) = self.current.as_mut() else {
            log::trace!("Ignoring {field:?} outside of a place: {value}");
            return;
        };

        match field {
            PlaceField::Name => value.clone_into(&mut candidate.name),
            PlaceField::Link => {
                value.clone_into(&mut candidate.link);
                candidate.id = extract_place_id(value);
            }
        }
    }

    fn close(&mut self, name: &str) {
        if name == PLACE_ELEMENT
            && let Some(candidate) = self.current.take()
        {
            self.places.push(candidate);
        }
    }

    fn finish(self) -> Vec<PlaceCandidate> {
        self.places
    }
}

/// Extracts the numeric place id from a `/city/daily/<id>/` link.
#[must_use]
pub fn extract_place_id(link: &str) -> Option<u64> {
    PLACE_ID_RE
        .captures(link)
        .and_then(|caps| caps.get(1))
        .and_then(|id| id.as_str().parse().ok())
}
