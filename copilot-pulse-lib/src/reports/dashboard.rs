use crate::metrics::{AdoptionClassification, MetricsSummary, classify};
use chrono::{DateTime, Local};
use serde::Serialize;
use strum::Display;

/// Where the figures on a dashboard came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DataSource {
    /// Fetched from the GitHub API
    Live,

    /// Generated locally because live data could not be fetched
    Synthetic,
}

/// A summary and its adoption classification, ready for reporting.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub enterprise: String,
    pub generated_at: DateTime<Local>,
    pub source: DataSource,
    pub summary: MetricsSummary,
    pub adoption: AdoptionClassification,
}

impl Dashboard {
    #[must_use]
    pub fn new(enterprise: impl Into<String>, generated_at: DateTime<Local>, source: DataSource, summary: MetricsSummary) -> Self {
        let adoption = classify(summary.active_users, summary.total_seats);

        Self {
            enterprise: enterprise.into(),
            generated_at,
            source,
            summary,
            adoption,
        }
    }
}
