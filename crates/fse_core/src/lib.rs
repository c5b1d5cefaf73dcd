//! Finds the best-paying FSEconomy assignments for a fleet of one aircraft
//! type.
//!
//! - [`airport`]: static airport directory and coordinate parsing
//! - [`geodesic`]: haversine distance and kilometre → nautical mile conversion
//! - [`matching`]: roster/assignment join with country allow-lists
//! - [`ranking`]: pay ordering, limit and distance annotation
//! - [`feed`]: FSEconomy data feed client and XML parsing
//! - [`search`]: the end-to-end run over a feed
//! - [`config`]: `config.json` model

pub mod airport;
pub mod config;
pub mod feed;
pub mod geodesic;
pub mod matching;
pub mod ranking;
pub mod search;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use airport::{AirportDirectory, AirportRecord};
pub use config::{OutputStyle, SearchConfig};
pub use matching::{AircraftRecord, JobAssignment, MatchedJob};
pub use ranking::RankedJob;
pub use search::{JobSearch, SearchError, SearchReport};
