pub mod allow_list;
pub mod matcher;
pub mod types;


pub use allow_list::{CountryAllowList, JobFilter, WILDCARD};
pub use matcher::match_jobs;
pub use types::{AircraftRecord, JobAssignment, MatchedJob, IN_FLIGHT, UNASSIGNED_AIRCRAFT};

/// Dash-joined identifiers of every aircraft that is on the ground, in roster
/// order. This is the origin list for the assignment query.
pub fn origin_icaos(aircraft: &[AircraftRecord]) -> String {
    aircraft
        .iter()
        .filter(|plane| !plane.is_airborne())
        .map(|plane| plane.location.as_str())
        .collect::<Vec<_>>()
        .join("-")
}
