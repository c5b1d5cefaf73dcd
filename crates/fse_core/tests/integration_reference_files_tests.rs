use std::fs;

use fse_core::airport::{AirportDirectory, DirectoryError};
use fse_core::config::{ConfigError, OutputStyle, SearchConfig};
use fse_core::search::JobSearch;
use fse_core::test_helpers::{aircraft, assignment, StaticFeed};

const AIRPORTS: &str = r#"[
  {"ident": "EGLL", "type": "large_airport", "name": "London Heathrow Airport",
   "elevation_ft": "83", "iso_country": "GB", "iso_region": "GB-ENG",
   "iata_code": "LHR", "coordinates": "51.4775, -0.461389"},
  {"ident": "LFPG", "type": "large_airport", "name": "Charles de Gaulle International Airport",
   "elevation_ft": "392", "iso_country": "FR", "iso_region": "FR-J",
   "iata_code": "CDG", "coordinates": "49.0097, 2.54778"},
  {"ident": "EGKK", "type": "large_airport", "name": "London Gatwick Airport",
   "elevation_ft": "202", "iso_country": "GB", "iso_region": "GB-ENG",
   "iata_code": "LGW", "coordinates": "51.148102, -0.190278"}
]"#;

const CONFIG: &str = r#"{
  "userkey": "TESTKEY",
  "aircrafttype": "Airbus A320",
  "terminal": "bash",
  "from": ["GB"],
  "to": ["FR"],
  "searchlimit": 10
}"#;

#[test]
fn search_with_files_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let airports_path = dir.path().join("airport-codes_json.json");
    let config_path = dir.path().join("config.json");
    fs::write(&airports_path, AIRPORTS).expect("write airports");
    fs::write(&config_path, CONFIG).expect("write config");

    let directory = AirportDirectory::from_path(&airports_path).expect("airports");
    let config = SearchConfig::from_path(&config_path).expect("config");
    assert_eq!(config.output_style, OutputStyle::Decorated);

    let feed = StaticFeed::new(
        vec![aircraft("320", "EGLL"), aircraft("321", "EGKK")],
        vec![
            assignment("EGLL", "LFPG", "320", 1_250.0, "4 hours"),
            assignment("EGKK", "LFPG", "321", 2_400.0, "1 day"),
            assignment("EGLL", "EGKK", "320", 9_000.0, "1 day"),
        ],
    );

    let report = JobSearch::new(&config, &feed, &directory).run().expect("search");
    assert_eq!(feed.aircraft_queries(), vec!["Airbus%20A320"]);
    assert_eq!(feed.assignment_queries(), vec!["EGLL-EGKK"]);

    assert_eq!(report.jobs.len(), 2);
    assert_eq!(report.jobs[0].job.origin, "EGKK");
    assert_eq!(report.jobs[0].job.pay, 2_400);
    assert_eq!(
        report.jobs[0].origin_description,
        "EGKK, London Gatwick Airport, GB, large_airport"
    );
    assert_eq!(report.jobs[1].job.origin, "EGLL");
    // Heathrow to Charles de Gaulle: 347 km
    assert_eq!(report.jobs[1].distance_nm, 187);
}

#[test]
fn missing_reference_files_are_reported() {
    let dir = tempfile::tempdir().expect("temp dir");

    assert!(matches!(
        AirportDirectory::from_path(dir.path().join("airport-codes_json.json")),
        Err(DirectoryError::Io { .. })
    ));
    assert!(matches!(
        SearchConfig::from_path(dir.path().join("config.json")),
        Err(ConfigError::Io { .. })
    ));
}
