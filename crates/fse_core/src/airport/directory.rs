use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::AirportRecord;

/// Default file name of the airport reference table.
pub const AIRPORT_DATA_FILE: &str = "airport-codes_json.json";

#[derive(Debug)]
pub enum DirectoryError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::Io { path, source } => {
                write!(f, "cannot read airport data {}: {}", path.display(), source)
            }
            DirectoryError::Json(err) => write!(f, "invalid airport data: {err}"),
        }
    }
}

impl std::error::Error for DirectoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectoryError::Io { source, .. } => Some(source),
            DirectoryError::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(err: serde_json::Error) -> Self {
        DirectoryError::Json(err)
    }
}

/// Read-only airport lookup keyed by identifier.
///
/// Records keep their source order. When an identifier occurs more than once
/// the first occurrence is the one returned. Rows without an identifier are
/// kept but never returned by a lookup.
#[derive(Debug, Default)]
pub struct AirportDirectory {
    records: Vec<AirportRecord>,
    by_ident: HashMap<String, usize>,
    unknown: AirportRecord,
}

impl AirportDirectory {
    pub fn from_records(records: Vec<AirportRecord>) -> Self {
        let mut by_ident = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            if record.is_unknown() {
                continue;
            }
            by_ident.entry(record.ident.clone()).or_insert(idx);
        }
        Self {
            records,
            by_ident,
            unknown: AirportRecord::default(),
        }
    }

    /// Parse a JSON array of airport objects.
    pub fn from_json_slice(raw: &[u8]) -> Result<Self, DirectoryError> {
        let records: Vec<AirportRecord> = serde_json::from_slice(raw)?;
        let directory = Self::from_records(records);
        if directory.by_ident.len() < directory.records.len() {
            tracing::debug!(
                records = directory.records.len(),
                unique = directory.by_ident.len(),
                "Airport data has duplicate or missing identifiers; first occurrence wins"
            );
        }
        Ok(directory)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let directory = Self::from_json_slice(&raw)?;
        tracing::info!(
            path = %path.display(),
            count = directory.len(),
            "Loaded airport directory"
        );
        Ok(directory)
    }

    pub fn get(&self, ident: &str) -> Option<&AirportRecord> {
        self.by_ident.get(ident).map(|&idx| &self.records[idx])
    }

    /// Like [`get`](Self::get), but an unknown identifier yields an empty
    /// record instead of `None`.
    pub fn lookup(&self, ident: &str) -> &AirportRecord {
        self.get(ident).unwrap_or(&self.unknown)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AirportRecord> {
        self.records.iter()
    }
}
