//! Static airport reference data: records, coordinate parsing and the
//! identifier-keyed directory used by matching and ranking.

mod coordinates;
mod directory;


use serde::{Deserialize, Deserializer};

pub use coordinates::{parse_coordinates, Coordinates, MalformedRecord};
pub use directory::{AirportDirectory, DirectoryError, AIRPORT_DATA_FILE};

/// One airport from the reference table.
///
/// An unknown identifier resolves to `AirportRecord::default()` (all fields
/// empty), which parses to the `(0.0, 0.0)` coordinate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AirportRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub ident: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub iso_country: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub iso_region: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub iata_code: String,
    /// Raw elevation as supplied; see [`AirportRecord::elevation_ft`].
    #[serde(default, rename = "elevation_ft", deserialize_with = "lenient_string")]
    pub elevation_raw: String,
    #[serde(default, rename = "type", deserialize_with = "lenient_string")]
    pub kind: String,
    /// `"lat, lon"` as supplied by the reference table.
    #[serde(default, deserialize_with = "lenient_string")]
    pub coordinates: String,
}

impl AirportRecord {
    pub fn is_unknown(&self) -> bool {
        self.ident.is_empty()
    }

    pub fn elevation_ft(&self) -> Option<i32> {
        let raw = self.elevation_raw.trim();
        raw.parse::<i32>()
            .ok()
            .or_else(|| raw.parse::<f64>().ok().map(|ft| ft as i32))
    }

    /// Tolerant coordinate pair; malformed parts become `0.0`.
    pub fn position(&self) -> Coordinates {
        parse_coordinates(&self.coordinates)
    }

    /// `ident, name, country, type` as shown next to each ranked job.
    pub fn description(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.ident, self.name, self.iso_country, self.kind
        )
    }
}

/// Accepts strings, numbers, booleans or `null` so that one odd row does not
/// reject the whole reference file.
fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(de)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}
