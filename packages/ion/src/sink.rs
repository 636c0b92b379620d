//! Host-facing key/value data store.

use std::collections::BTreeMap;

/// Receives the data the engine publishes for each source key.
pub trait DataSink {
    /// Drops everything published for `source`.
    fn clear_data(&mut self, source: &str);

    /// Publishes `value` under `key` for `source`, replacing any previous
    /// value of that key.
    fn set_data(&mut self, source: &str, key: &str, value: &str);
}

/// In-memory [`DataSink`] that keeps keys in publication order.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    sources: BTreeMap<String, Vec<(String, String)>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `key` for `source`.
    #[must_use]
    pub fn get(&self, source: &str, key: &str) -> Option<&str> {
        self.entries(source)
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Everything published for `source`, in publication order.
    #[must_use]
    pub fn entries(&self, source: &str) -> &[(String, String)] {
        self.sources.get(source).map_or(&[], Vec::as_slice)
    }

    /// Source keys with at least one published value.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }
}

impl DataSink for MemorySink {
    fn clear_data(&mut self, source: &str) {
        self.sources.remove(source);
    }

    fn set_data(&mut self, source: &str, key: &str, value: &str) {
        let entries = self.sources.entry(source.to_owned()).or_default();
        if let Some(entry) = entries.iter_mut().find(|(k, _)| k == key) {
            value.clone_into(&mut entry.1);
        } else {
            entries.push((key.to_owned(), value.to_owned()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_publication_order_and_replaces_in_place() {
        let mut sink = MemorySink::new();
        sink.set_data("s", "b", "1");
        sink.set_data("s", "a", "2");
        sink.set_data("s", "b", "3");

        assert_eq!(
            sink.entries("s"),
            &[
                ("b".to_string(), "3".to_string()),
                ("a".to_string(), "2".to_string()),
            ]
        );
        assert_eq!(sink.get("s", "a"), Some("2"));
    }

    #[test]
    fn clear_only_touches_one_source() {
        let mut sink = MemorySink::new();
        sink.set_data("s", "k", "v");
        sink.set_data("t", "k", "v");
        sink.clear_data("s");

        assert!(sink.entries("s").is_empty());
        assert_eq!(sink.get("t", "k"), Some("v"));
        assert_eq!(sink.sources().collect::<Vec<_>>(), vec!["t"]);
    }
}
