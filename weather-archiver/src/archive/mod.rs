//! Fetch-and-archive task: one weather read, one snapshot write

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::bucket::SnapshotStore;
use crate::types::WorkerError;
use crate::weather::WeatherSource;

/// Key prefix under which snapshots are archived
const KEY_PREFIX: &str = "weather/";

/// Derives the object key for a snapshot of `location` taken at `at`
///
/// Keys are second-precision; two snapshots of the same location within
/// the same second produce the same key and the later write wins.
#[must_use]
pub fn object_key(location: &str, at: DateTime<Utc>) -> String {
    format!(
        "{KEY_PREFIX}weather_{location}_{}.json",
        at.format("%Y%m%d_%H%M%S")
    )
}

/// Host-facing result of one successful invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResult {
    /// HTTP-style status code, always 200 on the success path
    pub status_code: u16,
    /// Human-readable message naming the written object and bucket
    pub body: String,
}

impl InvocationResult {
    /// Builds the success descriptor for an archived snapshot
    #[must_use]
    pub fn uploaded(key: &str, bucket: &str) -> Self {
        Self {
            status_code: 200,
            body: format!("Uploaded {key} to {bucket}"),
        }
    }
}

/// Single-invocation task that archives one weather snapshot
///
/// Strictly sequential: fetch the current conditions, serialize the
/// document, write it to the store, return the success descriptor. A
/// fetch failure performs no write; a write failure performs no cleanup.
pub struct FetchArchiveTask<S, B> {
    source: S,
    store: B,
    location: String,
}

impl<S, B> FetchArchiveTask<S, B>
where
    S: WeatherSource,
    B: SnapshotStore,
{
    /// Creates a new task over a weather source and a snapshot store
    pub const fn new(source: S, store: B, location: String) -> Self {
        Self {
            source,
            store,
            location,
        }
    }

    /// Runs one invocation, keyed by the `invoked_at` timestamp
    ///
    /// # Errors
    ///
    /// Returns `WorkerError::Fetch` if the upstream read fails and
    /// `WorkerError::Store` if the snapshot write fails
    pub async fn run(&self, invoked_at: DateTime<Utc>) -> Result<InvocationResult, WorkerError> {
        let observation = self.source.fetch_current(&self.location).await?;
        let body = observation.to_json_bytes()?;

        let key = object_key(&self.location, invoked_at);
        self.store.put_snapshot(&key, body).await?;

        let result = InvocationResult::uploaded(&key, self.store.bucket_name());
        info!("{}", result.body);
        Ok(result)
    }
}
