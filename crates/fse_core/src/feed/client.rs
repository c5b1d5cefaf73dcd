use reqwest::{blocking::Client, Url};
use std::time::Duration;
use url::form_urlencoded::byte_serialize;

use super::error::FeedError;
use super::parser::{parse_aircraft, parse_assignments};
use super::JobFeed;
use crate::matching::{AircraftRecord, JobAssignment};

pub const DEFAULT_BASE_URL: &str = "https://server.fseconomy.net";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the FSEconomy XML data feed.
#[derive(Debug, Clone)]
pub struct FseDataClient {
    client: Client,
    base_url: String,
    user_key: String,
}

impl FseDataClient {
    pub fn new(user_key: &str) -> Result<Self, FeedError> {
        Self::with_base_url(DEFAULT_BASE_URL, user_key)
    }

    /// Client for an alternative feed host (e.g. a local mirror).
    pub fn with_base_url(base_url: &str, user_key: &str) -> Result<Self, FeedError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_key: user_key.to_string(),
        })
    }

    pub(super) fn query_url(&self, query: &str) -> Result<Url, FeedError> {
        let user_key: String = byte_serialize(self.user_key.as_bytes()).collect();
        let raw = format!(
            "{}/data?userkey={}&format=xml&{}",
            self.base_url, user_key, query
        );
        Url::parse(&raw).map_err(|err| FeedError::Api(format!("failed to build feed URL: {err}")))
    }

    fn fetch(&self, query: &str) -> Result<String, FeedError> {
        let url = self.query_url(query)?;
        tracing::debug!(query, "Querying FSEconomy data feed");

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }
        Ok(response.text()?)
    }
}

impl JobFeed for FseDataClient {
    fn aircraft_by_type(&self, encoded_type: &str) -> Result<Vec<AircraftRecord>, FeedError> {
        let body = self.fetch(&format!(
            "query=aircraft&search=makemodel&makemodel={encoded_type}"
        ))?;
        parse_aircraft(&body)
    }

    fn jobs_from(&self, icaos: &str) -> Result<Vec<JobAssignment>, FeedError> {
        let body = self.fetch(&format!("query=icao&search=jobsfrom&icaos={icaos}"))?;
        parse_assignments(&body)
    }
}
