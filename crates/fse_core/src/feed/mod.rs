//! Aircraft and assignment data from the FSEconomy feed.
//!
//! [`JobFeed`] is the seam the search runs against. [`FseDataClient`]
//! (feature `http`) implements it over the public XML endpoint; tests use the
//! in-memory feed from `test_helpers`.

#[cfg(feature = "http")]
mod client;
mod error;
mod parser;
mod response;


#[cfg(feature = "http")]
pub use client::{FseDataClient, DEFAULT_BASE_URL};
pub use error::FeedError;

use crate::matching::{AircraftRecord, JobAssignment};

/// Source of aircraft rosters and job assignments.
pub trait JobFeed {
    /// Aircraft of one make/model. `encoded_type` already has spaces
    /// replaced by `%20`.
    fn aircraft_by_type(&self, encoded_type: &str) -> Result<Vec<AircraftRecord>, FeedError>;

    /// Assignments departing from any of the dash-joined airport identifiers.
    fn jobs_from(&self, icaos: &str) -> Result<Vec<JobAssignment>, FeedError>;
}
