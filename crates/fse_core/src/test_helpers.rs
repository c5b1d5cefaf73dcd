//! Test helpers for common test setup and utilities.
//!
//! Record builders, a small airport directory and an in-memory [`JobFeed`]
//! shared by unit tests, integration tests and benches.

use std::cell::RefCell;

use crate::airport::{AirportDirectory, AirportRecord};
use crate::feed::{FeedError, JobFeed};
use crate::matching::{AircraftRecord, JobAssignment};

pub fn aircraft(serial_number: &str, location: &str) -> AircraftRecord {
    AircraftRecord {
        serial_number: serial_number.to_string(),
        location: location.to_string(),
        needs_repair: false,
    }
}

pub fn assignment(
    origin: &str,
    destination: &str,
    aircraft_id: &str,
    pay: f64,
    expires: &str,
) -> JobAssignment {
    JobAssignment {
        location: origin.to_string(),
        to_icao: destination.to_string(),
        kind: "Trip-Only".to_string(),
        commodity: "Passengers".to_string(),
        aircraft_id: aircraft_id.to_string(),
        pay,
        expires: expires.to_string(),
        expire_date_time: String::new(),
    }
}

pub fn airport(ident: &str, name: &str, country: &str, lat: f64, lon: f64) -> AirportRecord {
    AirportRecord {
        ident: ident.to_string(),
        name: name.to_string(),
        iso_country: country.to_string(),
        kind: "large_airport".to_string(),
        coordinates: format!("{lat}, {lon}"),
        ..Default::default()
    }
}

/// KJFK, KLAX, KORD (US), LFPG (FR), EGLL (GB) and EDDF (DE).
pub fn sample_directory() -> AirportDirectory {
    AirportDirectory::from_records(vec![
        airport("KJFK", "John F Kennedy International Airport", "US", 40.64, -73.78),
        airport("KLAX", "Los Angeles International Airport", "US", 33.94, -118.41),
        airport("KORD", "Chicago O'Hare International Airport", "US", 41.9786, -87.9048),
        airport("LFPG", "Charles de Gaulle International Airport", "FR", 49.0097, 2.54778),
        airport("EGLL", "London Heathrow Airport", "GB", 51.4775, -0.461389),
        airport("EDDF", "Frankfurt am Main Airport", "DE", 50.0333, 8.57056),
    ])
}

/// In-memory feed that records the queries it receives.
#[derive(Debug, Default)]
pub struct StaticFeed {
    pub aircraft: Vec<AircraftRecord>,
    pub assignments: Vec<JobAssignment>,
    pub fail_with: Option<String>,
    aircraft_queries: RefCell<Vec<String>>,
    assignment_queries: RefCell<Vec<String>>,
}

impl StaticFeed {
    pub fn new(aircraft: Vec<AircraftRecord>, assignments: Vec<JobAssignment>) -> Self {
        Self {
            aircraft,
            assignments,
            ..Default::default()
        }
    }

    /// A feed whose every query fails with `FeedError::Api(message)`.
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn aircraft_queries(&self) -> Vec<String> {
        self.aircraft_queries.borrow().clone()
    }

    pub fn assignment_queries(&self) -> Vec<String> {
        self.assignment_queries.borrow().clone()
    }

    fn check(&self) -> Result<(), FeedError> {
        match &self.fail_with {
            Some(message) => Err(FeedError::Api(message.clone())),
            None => Ok(()),
        }
    }
}

impl JobFeed for StaticFeed {
    fn aircraft_by_type(&self, encoded_type: &str) -> Result<Vec<AircraftRecord>, FeedError> {
        self.aircraft_queries
            .borrow_mut()
            .push(encoded_type.to_string());
        self.check()?;
        Ok(self.aircraft.clone())
    }

    fn jobs_from(&self, icaos: &str) -> Result<Vec<JobAssignment>, FeedError> {
        self.assignment_queries.borrow_mut().push(icaos.to_string());
        self.check()?;
        Ok(self.assignments.clone())
    }
}
