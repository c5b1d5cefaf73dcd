use crate::airport::AirportDirectory;

use super::allow_list::JobFilter;
use super::types::{AircraftRecord, JobAssignment, MatchedJob};

/// Joins the aircraft roster against assignments and keeps the jobs whose
/// origin and destination countries pass the filter.
///
/// # Algorithm Behavior
///
/// 1. Assignments bound to no aircraft are skipped
/// 2. Every roster entry whose serial number equals the assignment's aircraft
///    id yields one candidate; duplicate serials therefore yield duplicate jobs
/// 3. Origin and destination are resolved through `directory` and checked
///    against `filter`
/// 4. Output follows assignment order, then roster order
/// 5. Scanning stops as soon as `cap` jobs have been admitted
pub fn match_jobs(
    aircraft: &[AircraftRecord],
    assignments: &[JobAssignment],
    directory: &AirportDirectory,
    filter: &JobFilter,
    cap: Option<usize>,
) -> Vec<MatchedJob> {
    let cap = cap.unwrap_or(usize::MAX);
    let mut matched = Vec::new();
    if cap == 0 {
        return matched;
    }

    let mut rejected = 0usize;
    'assignments: for assignment in assignments.iter().filter(|a| !a.is_unassigned()) {
        let candidates = aircraft
            .iter()
            .filter(|plane| plane.serial_number == assignment.aircraft_id)
            .count();
        if candidates == 0 {
            continue;
        }

        let origin = directory.lookup(&assignment.location);
        let destination = directory.lookup(&assignment.to_icao);
        if !filter.admits(&origin.iso_country, &destination.iso_country) {
            rejected += candidates;
            continue;
        }

        for _ in 0..candidates {
            matched.push(MatchedJob::from(assignment));
            if matched.len() >= cap {
                tracing::debug!(cap, "Match cap reached; remaining assignments not scanned");
                break 'assignments;
            }
        }
    }

    tracing::debug!(
        assignments = assignments.len(),
        matched = matched.len(),
        rejected,
        "Matched assignments against roster"
    );
    matched
}
