/// Location reported for an aircraft that is currently flying.
pub const IN_FLIGHT: &str = "In Flight";

/// Aircraft identifier carried by assignments not tied to any aircraft.
pub const UNASSIGNED_AIRCRAFT: &str = "0";

/// One aircraft from the inventory feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AircraftRecord {
    pub serial_number: String,
    /// Airport identifier, or [`IN_FLIGHT`].
    pub location: String,
    pub needs_repair: bool,
}

impl AircraftRecord {
    pub fn is_airborne(&self) -> bool {
        self.location == IN_FLIGHT
    }
}

/// One job offer from the assignment feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobAssignment {
    /// Origin airport identifier.
    pub location: String,
    pub to_icao: String,
    pub kind: String,
    pub commodity: String,
    /// Serial number of the aircraft the job is bound to, or [`UNASSIGNED_AIRCRAFT`].
    pub aircraft_id: String,
    pub pay: f64,
    /// Human readable, e.g. `"2 days"`.
    pub expires: String,
    pub expire_date_time: String,
}

impl JobAssignment {
    pub fn is_unassigned(&self) -> bool {
        self.aircraft_id == UNASSIGNED_AIRCRAFT
    }
}

/// An assignment that passed eligibility filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedJob {
    pub origin: String,
    pub destination: String,
    /// Whole currency units; fractions are truncated.
    pub pay: i64,
    pub expires: String,
}

impl From<&JobAssignment> for MatchedJob {
    fn from(assignment: &JobAssignment) -> Self {
        Self {
            origin: assignment.location.clone(),
            destination: assignment.to_icao.clone(),
            pay: assignment.pay as i64,
            expires: assignment.expires.clone(),
        }
    }
}
