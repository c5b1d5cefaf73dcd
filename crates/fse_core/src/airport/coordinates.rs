use std::fmt;

/// Latitude/longitude in degrees, parsed from an airport's coordinate string.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// A coordinate string or numeric feed field that could not be parsed in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    pub field: &'static str,
    pub value: String,
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed {}: {:?}", self.field, self.value)
    }
}

impl std::error::Error for MalformedRecord {}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Strict parse: both parts must be present and numeric.
    pub fn try_parse(raw: &str) -> Result<Self, MalformedRecord> {
        let mut parts = raw.split(',');
        let lat = parse_part(parts.next());
        let lon = parse_part(parts.next());
        match (lat, lon) {
            (Some(lat), Some(lon)) => Ok(Self { lat, lon }),
            _ => Err(MalformedRecord {
                field: "coordinates",
                value: raw.to_string(),
            }),
        }
    }

    pub fn distance_km(&self, other: &Coordinates) -> i64 {
        crate::geodesic::distance_km(self.lat, self.lon, other.lat, other.lon)
    }
}

/// Tolerant parse: splits on the first comma, trims each side, and leaves any
/// part that is missing or non-numeric at `0.0`.
pub fn parse_coordinates(raw: &str) -> Coordinates {
    let mut parts = raw.split(',');
    Coordinates {
        lat: parse_part(parts.next()).unwrap_or_default(),
        lon: parse_part(parts.next()).unwrap_or_default(),
    }
}

fn parse_part(part: Option<&str>) -> Option<f64> {
    part.and_then(|p| p.trim().parse::<f64>().ok())
}
