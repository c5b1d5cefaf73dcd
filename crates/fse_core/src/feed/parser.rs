use crate::matching::{AircraftRecord, JobAssignment};

use super::error::FeedError;
use super::response::{AircraftItems, IcaoJobsFrom};

const ERROR_OPEN: &str = "<Error>";
const ERROR_CLOSE: &str = "</Error>";

pub(super) fn parse_aircraft(body: &str) -> Result<Vec<AircraftRecord>, FeedError> {
    reject_error_document(body)?;
    let items: AircraftItems = quick_xml::de::from_str(body)?;
    Ok(items.aircraft.into_iter().map(AircraftRecord::from).collect())
}

pub(super) fn parse_assignments(body: &str) -> Result<Vec<JobAssignment>, FeedError> {
    reject_error_document(body)?;
    let jobs: IcaoJobsFrom = quick_xml::de::from_str(body)?;
    Ok(jobs
        .assignments
        .into_iter()
        .map(JobAssignment::from)
        .collect())
}

/// The feed reports bad keys and rate limiting as `<Error>message</Error>`
/// with a success status.
fn reject_error_document(body: &str) -> Result<(), FeedError> {
    let Some(open) = body.find(ERROR_OPEN) else {
        return Ok(());
    };
    let start = open + ERROR_OPEN.len();
    let message = match body[start..].find(ERROR_CLOSE) {
        Some(len) => body[start..start + len].trim(),
        None => body[start..].trim(),
    };
    Err(FeedError::Api(message.to_string()))
}
