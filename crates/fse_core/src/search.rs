//! End-to-end job search: roster → assignments → match → rank → annotate.

use std::fmt;

use crate::airport::AirportDirectory;
use crate::config::SearchConfig;
use crate::feed::{FeedError, JobFeed};
use crate::matching::{match_jobs, origin_icaos};
use crate::ranking::{rank_and_annotate, RankedJob};

/// Fatal search failures. Nothing is printed for a failed run.
#[derive(Debug)]
pub enum SearchError {
    DataUnavailable {
        resource: &'static str,
        source: FeedError,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::DataUnavailable { resource, source } => {
                write!(f, "{resource} unavailable: {source}")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::DataUnavailable { source, .. } => Some(source),
        }
    }
}

/// Outcome of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub aircraft_type: String,
    pub aircraft_count: usize,
    pub jobs: Vec<RankedJob>,
}

/// One search over a feed, using an already loaded airport directory.
pub struct JobSearch<'a> {
    config: &'a SearchConfig,
    feed: &'a dyn JobFeed,
    directory: &'a AirportDirectory,
}

impl<'a> JobSearch<'a> {
    pub fn new(
        config: &'a SearchConfig,
        feed: &'a dyn JobFeed,
        directory: &'a AirportDirectory,
    ) -> Self {
        Self {
            config,
            feed,
            directory,
        }
    }

    pub fn run(&self) -> Result<SearchReport, SearchError> {
        let aircraft = self
            .feed
            .aircraft_by_type(&self.config.encoded_aircraft_type())
            .map_err(|source| SearchError::DataUnavailable {
                resource: "aircraft inventory",
                source,
            })?;
        tracing::info!(
            aircraft = aircraft.len(),
            aircraft_type = %self.config.aircraft_type,
            "Fetched aircraft roster"
        );

        let mut report = SearchReport {
            aircraft_type: self.config.aircraft_type.clone(),
            aircraft_count: aircraft.len(),
            jobs: Vec::new(),
        };

        let icaos = origin_icaos(&aircraft);
        if icaos.is_empty() {
            tracing::info!("No aircraft on the ground; skipping assignment query");
            return Ok(report);
        }

        let assignments = self
            .feed
            .jobs_from(&icaos)
            .map_err(|source| SearchError::DataUnavailable {
                resource: "job assignments",
                source,
            })?;
        tracing::info!(assignments = assignments.len(), "Fetched assignments");

        let matched = match_jobs(
            &aircraft,
            &assignments,
            self.directory,
            &self.config.job_filter(),
            self.config.effective_match_cap(),
        );
        report.jobs = rank_and_annotate(matched, self.config.search_limit, self.directory);
        tracing::info!(jobs = report.jobs.len(), "Ranked jobs");

        Ok(report)
    }
}
