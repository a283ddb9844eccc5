//! Test fixture loader for tortus golden datasets.
//!
//! Provides typed deserialization of the fixture JSON files and a manually
//! driven clock for deterministic ledger timestamps.

use std::path::PathBuf;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::DeserializeOwned;
use tortus_core::{Clock, Ledger, SourceTable};

pub const SAMPLE_REVIEWS: &str = "sample_project/movie_reviews.json";
pub const SAMPLE_ANNOTATIONS: &str = "sample_project/movie_reviews_annotations.json";

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Baked in at compile time, so it resolves from any crate's tests.
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// The sample movie reviews: columns `review_id` and `reviews`.
pub fn sample_reviews() -> SourceTable {
    load_fixture(SAMPLE_REVIEWS)
}

/// Annotations of four sample reviews from an earlier session.
pub fn sample_annotations() -> Ledger {
    load_fixture(SAMPLE_ANNOTATIONS)
}

/// `n` rows of distinct text in a single `text` column.
pub fn distinct_texts(n: usize) -> SourceTable {
    SourceTable::from_texts("text", (0..n).map(|i| format!("text number {i}")))
}

/// Clock that only moves when told to, optionally ticking on every read.
#[derive(Debug)]
pub struct ManualClock {
    seconds: AtomicI64,
    tick: i64,
}

impl ManualClock {
    /// Clock frozen at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            seconds: AtomicI64::new(start.timestamp()),
            tick: 0,
        }
    }

    /// Clock that advances `tick` after every read, so consecutive
    /// timestamps are distinct.
    pub fn ticking(start: DateTime<Utc>, tick: Duration) -> Self {
        Self {
            seconds: AtomicI64::new(start.timestamp()),
            tick: tick.num_seconds(),
        }
    }

    /// Clock starting at 2024-01-01T00:00:00Z.
    pub fn deterministic() -> Self {
        Self::new(Self::epoch())
    }

    pub fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .expect("valid fixture epoch")
    }

    pub fn advance(&self, by: Duration) {
        self.seconds.fetch_add(by.num_seconds(), Ordering::Relaxed);
    }

    /// Current reading without ticking.
    pub fn peek(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.seconds.load(Ordering::Relaxed), 0)
            .single()
            .expect("timestamp in range")
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let seconds = self.seconds.fetch_add(self.tick, Ordering::Relaxed);
        Utc.timestamp_opt(seconds, 0)
            .single()
            .expect("timestamp in range")
    }
}
