use serde::Deserialize;

/// Token that admits every country.
pub const WILDCARD: &str = "all";

/// Set of ISO country codes a job may start or end in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<String>")]
pub enum CountryAllowList {
    #[default]
    Any,
    Only(Vec<String>),
}

impl CountryAllowList {
    /// An empty list or one containing [`WILDCARD`] admits everything.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let codes: Vec<String> = codes.into_iter().map(Into::into).collect();
        if codes.is_empty() || codes.iter().any(|code| code == WILDCARD) {
            CountryAllowList::Any
        } else {
            CountryAllowList::Only(codes)
        }
    }

    pub fn admits(&self, country: &str) -> bool {
        match self {
            CountryAllowList::Any => true,
            CountryAllowList::Only(codes) => codes.iter().any(|code| code == country),
        }
    }
}

impl From<Vec<String>> for CountryAllowList {
    fn from(codes: Vec<String>) -> Self {
        Self::from_codes(codes)
    }
}

/// Origin and destination allow-lists applied together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub origin: CountryAllowList,
    pub destination: CountryAllowList,
}

impl JobFilter {
    pub fn new(origin: CountryAllowList, destination: CountryAllowList) -> Self {
        Self {
            origin,
            destination,
        }
    }

    pub fn admits(&self, origin_country: &str, destination_country: &str) -> bool {
        self.origin.admits(origin_country) && self.destination.admits(destination_country)
    }
}
