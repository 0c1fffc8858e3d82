//! Weather snapshot archiver
//!
//! Fetches current conditions from the weatherapi.com API and archives the
//! raw JSON document to an S3 bucket, keyed by location and UTC timestamp.

#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

pub mod archive;
pub mod bucket;
pub mod types;
pub mod weather;
