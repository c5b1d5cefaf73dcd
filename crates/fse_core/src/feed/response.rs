use serde::Deserialize;

use crate::airport::MalformedRecord;
use crate::matching::{AircraftRecord, JobAssignment};

#[derive(Deserialize)]
pub(super) struct AircraftItems {
    #[serde(rename = "Aircraft", default)]
    pub(super) aircraft: Vec<AircraftXml>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub(super) struct AircraftXml {
    pub(super) serial_number: String,
    pub(super) location: String,
    pub(super) needs_repair: String,
}

#[derive(Deserialize)]
pub(super) struct IcaoJobsFrom {
    #[serde(rename = "Assignment", default)]
    pub(super) assignments: Vec<AssignmentXml>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub(super) struct AssignmentXml {
    pub(super) location: String,
    pub(super) to_icao: String,
    #[serde(rename = "Type")]
    pub(super) kind: String,
    pub(super) aircraft_id: String,
    pub(super) commodity: String,
    pub(super) pay: String,
    pub(super) expires: String,
    pub(super) expire_date_time: String,
}

impl From<AircraftXml> for AircraftRecord {
    fn from(raw: AircraftXml) -> Self {
        Self {
            needs_repair: repair_flag(&raw.needs_repair),
            serial_number: raw.serial_number.trim().to_string(),
            location: raw.location.trim().to_string(),
        }
    }
}

impl From<AssignmentXml> for JobAssignment {
    fn from(raw: AssignmentXml) -> Self {
        Self {
            location: raw.location.trim().to_string(),
            to_icao: raw.to_icao.trim().to_string(),
            kind: raw.kind,
            commodity: raw.commodity,
            aircraft_id: raw.aircraft_id.trim().to_string(),
            pay: lenient_pay(&raw.pay),
            expires: raw.expires,
            expire_date_time: raw.expire_date_time,
        }
    }
}

/// Missing or unreadable pay counts as zero so the rest of the document
/// still ranks.
fn lenient_pay(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(pay) => pay,
        Err(_) => {
            let err = MalformedRecord {
                field: "Pay",
                value: raw.to_string(),
            };
            tracing::warn!(error = %err, "Treating assignment pay as 0");
            0.0
        }
    }
}

/// Non-zero numbers and `true`/`yes` count as needing repair.
fn repair_flag(raw: &str) -> bool {
    let raw = raw.trim();
    match raw.parse::<i64>() {
        Ok(value) => value != 0,
        Err(_) => raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("yes"),
    }
}
