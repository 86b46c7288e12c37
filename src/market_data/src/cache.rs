//! File-backed cache for fetched daily series.
//!
//! An explicit collaborator owned by the invocation surface, never by the
//! engine: entries are keyed by the requested symbols and inclusive date
//! range, carry their fetch timestamp and expire after a configurable TTL.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use pivot_engine::models::bar::DailySeries;

use crate::errors::Error;
use crate::models::request::DailyBarsRequest;

/// Serialized wrapper stored on disk alongside the fetch timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    fetched_at: DateTime<Utc>,
    request: DailyBarsRequest,
    data: Vec<DailySeries>,
}

pub struct FetchCache {
    dir: PathBuf,
    ttl: Duration,
}

impl FetchCache {
    pub const DEFAULT_TTL_SECS: u64 = 3600;

    pub fn new(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            dir: dir.into(),
            ttl,
        }
    }

    /// The fallback cache directory: an application subfolder of the OS
    /// temporary directory.
    pub fn default_dir() -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push("pivot_analyzer");
        dir
    }

    /// Returns the cached series for `request` when a fresh entry exists.
    ///
    /// A missing, unreadable or expired entry is a miss, never an error:
    /// the caller falls through to the provider and overwrites it.
    pub fn lookup(&self, request: &DailyBarsRequest) -> Option<Vec<DailySeries>> {
        let path = self.entry_path(request);
        let raw = fs::read_to_string(&path).ok()?;
        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(err) => {
                debug!("ignoring unreadable cache entry {}: {err}", path.display());
                return None;
            }
        };

        let age = Utc::now().signed_duration_since(entry.fetched_at);
        if age < chrono::Duration::zero() || age.num_seconds() as u64 >= self.ttl.as_secs() {
            debug!("cache entry {} expired", path.display());
            return None;
        }
        Some(entry.data)
    }

    /// Persists a fetch result for later lookups.
    pub fn store(&self, request: &DailyBarsRequest, data: &[DailySeries]) -> Result<(), Error> {
        fs::create_dir_all(&self.dir)?;
        let entry = CacheEntry {
            fetched_at: Utc::now(),
            request: request.clone(),
            data: data.to_vec(),
        };
        fs::write(self.entry_path(request), serde_json::to_string(&entry)?)?;
        Ok(())
    }

    fn entry_path(&self, request: &DailyBarsRequest) -> PathBuf {
        self.dir.join(format!("{}.json", cache_key(request)))
    }
}

/// Filename-safe key: symbols joined with `-`, then the inclusive range.
fn cache_key(request: &DailyBarsRequest) -> String {
    format!(
        "{}_{}_{}",
        request.symbols.join("-"),
        request.start,
        request.end
    )
}
