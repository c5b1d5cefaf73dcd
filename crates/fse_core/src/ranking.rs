//! Pay-ordered ranking of matched jobs and distance annotation of the winners.

use crate::airport::{
    parse_coordinates, AirportDirectory, AirportRecord, Coordinates, MalformedRecord,
};
use crate::geodesic::km_to_nautical_miles;
use crate::matching::MatchedJob;

/// A ranked job ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedJob {
    pub job: MatchedJob,
    pub distance_nm: i64,
    /// `ident, name, country, type` of the origin airport.
    pub origin_description: String,
}

/// Sort by pay, highest first, and keep at most `limit` jobs.
///
/// The sort is stable: jobs with equal pay keep the order in which the matcher
/// emitted them.
pub fn rank_jobs(mut matches: Vec<MatchedJob>, limit: usize) -> Vec<MatchedJob> {
    matches.sort_by(|a, b| b.pay.cmp(&a.pay));
    matches.truncate(limit);
    matches
}

/// Attach route length and origin description to already-truncated results.
pub fn annotate(ranked: Vec<MatchedJob>, directory: &AirportDirectory) -> Vec<RankedJob> {
    ranked
        .into_iter()
        .map(|job| {
            let origin = directory.lookup(&job.origin);
            let destination = directory.lookup(&job.destination);
            RankedJob {
                distance_nm: distance_nm_between(origin, destination),
                origin_description: origin.description(),
                job,
            }
        })
        .collect()
}

/// Ranking followed by annotation; distances are only computed for the jobs
/// that survive the limit.
pub fn rank_and_annotate(
    matches: Vec<MatchedJob>,
    limit: usize,
    directory: &AirportDirectory,
) -> Vec<RankedJob> {
    annotate(rank_jobs(matches, limit), directory)
}

/// Great-circle distance in nautical miles between two airports.
pub fn distance_nm_between(origin: &AirportRecord, destination: &AirportRecord) -> i64 {
    let from = position_of(origin);
    let to = position_of(destination);
    km_to_nautical_miles(from.distance_km(&to))
}

fn position_of(airport: &AirportRecord) -> Coordinates {
    match strict_position(airport) {
        Ok(coords) => coords,
        Err(err) => {
            tracing::warn!(
                ident = %airport.ident,
                error = %err,
                "Using zero for unparsable airport coordinates"
            );
            parse_coordinates(&airport.coordinates)
        }
    }
}

/// Unknown airports sit at `(0, 0)` without counting as malformed.
fn strict_position(airport: &AirportRecord) -> Result<Coordinates, MalformedRecord> {
    if airport.is_unknown() {
        return Ok(Coordinates::default());
    }
    Coordinates::try_parse(&airport.coordinates)
}
