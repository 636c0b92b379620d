//! In-flight fetch tracking.
//!
//! A [`FetchTracker`] maps job ids to the source key that requested them and
//! the bytes received so far. It refuses a second fetch for a source key
//! while one is pending, and hands the buffer over exactly once when the
//! job completes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_JOB: AtomicU64 = AtomicU64::new(1);

/// Opaque handle of one transport operation. Unique for the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JobId(u64);

impl JobId {
    fn next() -> Self {
        Self(NEXT_JOB.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric id.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "job#{}", self.0)
    }
}

/// An outstanding fetch and the data received so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    /// Transport job handle.
    pub job: JobId,
    /// Source key that requested the fetch.
    pub source_key: String,
    /// Body bytes in arrival order.
    pub buffer: Vec<u8>,
}

/// Registry of outstanding fetches for one kind of document.
#[derive(Debug)]
pub struct FetchTracker {
    label: &'static str,
    pending: HashMap<JobId, PendingFetch>,
}

impl FetchTracker {
    /// Creates an empty tracker. `label` only appears in log output.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            pending: HashMap::new(),
        }
    }

    /// Whether a fetch for `source_key` is outstanding.
    #[must_use]
    pub fn is_pending(&self, source_key: &str) -> bool {
        self.pending
            .values()
            .any(|fetch| fetch.source_key == source_key)
    }

    /// Registers a new fetch for `source_key`.
    ///
    /// Returns `None` without side effects if one is already pending.
    pub fn start(&mut self, source_key: &str) -> Option<JobId> {
        if self.is_pending(source_key) {
            log::debug!("[{}] Already fetching {source_key}", self.label);
            return None;
        }

        let job = JobId::next();
        self.pending.insert(
            job,
            PendingFetch {
                job,
                source_key: source_key.to_owned(),
                buffer: Vec::new(),
            },
        );
        log::debug!("[{}] Started {job} for {source_key}", self.label);
        Some(job)
    }

    /// Appends a chunk to a pending fetch.
    ///
    /// Returns `false` if `job` is not tracked here. Empty chunks are
    /// accepted and ignored.
    pub fn on_data(&mut self, job: JobId, chunk: &[u8]) -> bool {
        let Some(fetch) = self.pending.get_mut(&job) else {
            return false;
        };
        if !chunk.is_empty() {
            fetch.buffer.extend_from_slice(chunk);
        }
        true
    }

    /// Removes a finished fetch and returns it with its buffer.
    pub fn on_complete(&mut self, job: JobId) -> Option<PendingFetch> {
        let fetch = self.pending.remove(&job)?;
        log::debug!(
            "[{}] Finished {job} for {} ({} bytes)",
            self.label,
            fetch.source_key,
            fetch.buffer.len()
        );
        Some(fetch)
    }

    /// Number of outstanding fetches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no fetch is outstanding.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Forgets every outstanding fetch.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_start_is_dropped() {
        let mut tracker = FetchTracker::new("weather");
        let job = tracker.start("A").unwrap();
        assert_eq!(tracker.start("A"), None);
        assert_eq!(tracker.len(), 1);

        assert!(tracker.on_data(job, b"foo"));
        let fetch = tracker.on_complete(job).unwrap();
        assert_eq!(fetch.source_key, "A");
        assert_eq!(fetch.buffer, b"foo");
        assert!(tracker.is_empty());

        let again = tracker.start("A").unwrap();
        assert_ne!(again, job);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn different_sources_run_side_by_side() {
        let mut tracker = FetchTracker::new("weather");
        let a = tracker.start("A").unwrap();
        let b = tracker.start("B").unwrap();
        tracker.on_data(a, b"1");
        tracker.on_data(b, b"2");
        tracker.on_data(a, b"3");
        assert_eq!(tracker.on_complete(a).unwrap().buffer, b"13");
        assert_eq!(tracker.on_complete(b).unwrap().buffer, b"2");
    }

    #[test]
    fn unknown_and_stale_jobs_are_ignored() {
        let mut tracker = FetchTracker::new("search");
        let job = tracker.start("A").unwrap();
        tracker.on_complete(job).unwrap();

        assert!(!tracker.on_data(job, b"late"));
        assert_eq!(tracker.on_complete(job), None);
    }

    #[test]
    fn empty_chunks_do_not_change_the_buffer() {
        let mut tracker = FetchTracker::new("weather");
        let job = tracker.start("A").unwrap();
        assert!(tracker.on_data(job, b""));
        assert!(tracker.on_complete(job).unwrap().buffer.is_empty());
    }

    #[test]
    fn clear_forgets_everything() {
        let mut tracker = FetchTracker::new("weather");
        tracker.start("A").unwrap();
        tracker.clear();
        assert!(!tracker.is_pending("A"));
    }
}
