//! S3 bucket operations for snapshot storage

mod client;
mod error;

use async_trait::async_trait;

pub use client::BucketClient;
pub use error::{BucketError, BucketResult};

/// Destination store for archived weather snapshots
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Name of the destination bucket
    fn bucket_name(&self) -> &str;

    /// Writes `body` at `key`, creating or overwriting the object
    ///
    /// # Errors
    ///
    /// Returns `BucketError` if the storage write fails
    async fn put_snapshot(&self, key: &str, body: Vec<u8>) -> BucketResult<()>;
}
