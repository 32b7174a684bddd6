use super::client::Client;
use super::seats::{SeatRoster, SeatsPage};
use super::usage::{MetricsDay, UsageDay};
use super::FetchError;
use crate::metrics::{MetricsSummary, derive_summary};
use core::time::Duration;
use futures::future::try_join;

const LOG_TARGET: &str = "     fetch";
const SEATS_PAGE_SIZE: u32 = 100;
const MAX_SEAT_PAGES: u32 = 500;

/// Everything needed to reach the Copilot endpoints of one enterprise
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub token: Option<String>,
    pub enterprise: String,
    pub api_base_url: String,
    pub api_version: String,
    pub request_timeout: Duration,
}

/// Reads Copilot usage and seat data for an enterprise
#[derive(Debug, Clone)]
pub struct Fetcher {
    settings: FetchSettings,
}

impl Fetcher {
    #[must_use]
    pub const fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn enterprise(&self) -> &str {
        &self.settings.enterprise
    }

    /// Fetch usage history and seat assignments concurrently and summarize them.
    ///
    /// Fails without touching the network if the token is absent or blank. Both reads must
    /// succeed; there is no partial result.
    pub async fn fetch_metrics(&self) -> Result<MetricsSummary, FetchError> {
        let (usage, roster) = self.fetch_raw().await?;

        log::info!(
            target: LOG_TARGET,
            "Fetched {} usage day(s) and {} of {} seat(s) for '{}'",
            usage.len(),
            roster.seats.len(),
            roster.total_seats,
            self.settings.enterprise
        );

        Ok(derive_summary(&usage, &roster))
    }

    /// Fetch the unsummarized usage history and seat roster.
    pub async fn fetch_raw(&self) -> Result<(Vec<UsageDay>, SeatRoster), FetchError> {
        let token = self
            .settings
            .token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(FetchError::MissingCredential)?;

        let client = Client::new(
            token,
            &self.settings.api_base_url,
            &self.settings.api_version,
            self.settings.request_timeout,
        )?;

        try_join(self.fetch_usage(&client), self.fetch_seats(&client)).await
    }

    async fn fetch_usage(&self, client: &Client) -> Result<Vec<UsageDay>, FetchError> {
        let path = format!("/enterprises/{}/copilot/metrics", self.settings.enterprise);
        let days: Vec<MetricsDay> = client.get_json(&path, &[]).await?;

        let mut usage: Vec<UsageDay> = days.into_iter().map(UsageDay::from).collect();
        usage.sort_by_key(|day| day.date);

        log::debug!(
            target: LOG_TARGET,
            "Received {} usage day(s), {} of {} suggested line(s) accepted",
            usage.len(),
            usage.iter().map(|day| day.lines_accepted).fold(0, u64::saturating_add),
            usage.iter().map(|day| day.lines_suggested).fold(0, u64::saturating_add)
        );
        Ok(usage)
    }

    async fn fetch_seats(&self, client: &Client) -> Result<SeatRoster, FetchError> {
        let path = format!("/enterprises/{}/copilot/billing/seats", self.settings.enterprise);
        let mut roster = SeatRoster::default();

        for page in 1..=MAX_SEAT_PAGES {
            let batch: SeatsPage = client.get_json(&path, &[("per_page", SEATS_PAGE_SIZE), ("page", page)]).await?;

            let received = batch.seats.len();
            roster.total_seats = batch.total_seats;
            roster.seats.extend(batch.seats);

            log::debug!(
                target: LOG_TARGET,
                "Seat page {page}: {received} seat(s), {} of {} collected",
                roster.seats.len(),
                roster.total_seats
            );

            if received == 0 || roster.seats.len() as u64 >= roster.total_seats {
                return Ok(roster);
            }
        }

        log::warn!(
            target: LOG_TARGET,
            "Stopped after {MAX_SEAT_PAGES} seat pages with {} of {} seat(s) collected",
            roster.seats.len(),
            roster.total_seats
        );
        Ok(roster)
    }
}
