//! Data tooling for the student roster page: fetch the student list,
//! mirror the images and describe the CDN layout.

pub mod error;
pub mod http;
pub mod images;
pub mod manifest;
pub mod schaledb;

#[cfg(test)]
mod tests;

pub use error::{SyncError, SyncResult};
pub use http::HttpClient;
