//! S3 bucket client for snapshot writes

use async_trait::async_trait;
use aws_sdk_s3::{primitives::ByteStream, Client};
use tracing::{debug, error, info};

use super::{BucketResult, SnapshotStore};

/// S3 client wrapper bound to a single destination bucket
pub struct BucketClient {
    client: Client,
    bucket_name: String,
}

impl BucketClient {
    /// Creates a new bucket client
    ///
    /// # Arguments
    ///
    /// * `client` - Pre-configured S3 client
    /// * `bucket_name` - Destination bucket for snapshot writes
    #[must_use]
    pub fn new(client: Client, bucket_name: String) -> Self {
        info!("Initialized S3 bucket client for bucket: {}", bucket_name);

        Self {
            client,
            bucket_name,
        }
    }
}

#[async_trait]
impl SnapshotStore for BucketClient {
    fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    async fn put_snapshot(&self, key: &str, body: Vec<u8>) -> BucketResult<()> {
        debug!(
            "Writing snapshot to bucket {} at key {} ({} bytes)",
            self.bucket_name,
            key,
            body.len()
        );

        self.client
            .put_object()
            .bucket(&self.bucket_name)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| {
                error!("Failed to write snapshot at {}: {}", key, e);
                e
            })?;

        debug!("Wrote snapshot at key: {}", key);
        Ok(())
    }
}
