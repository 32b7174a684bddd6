use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// The user a seat is assigned to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Assignee {
    pub login: String,
    pub id: u64,
}

/// The team through which a seat was granted
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssigningTeam {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

/// One Copilot license assignment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeatAssignment {
    pub assignee: Assignee,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pending_cancellation_date: Option<NaiveDate>,
    #[serde(default)]
    pub last_activity_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_activity_editor: Option<String>,
    #[serde(default)]
    pub assigning_team: Option<AssigningTeam>,
}

/// One page of the `copilot/billing/seats` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SeatsPage {
    pub total_seats: u64,
    #[serde(default)]
    pub seats: Vec<SeatAssignment>,
}

/// All seat assignments collected for an enterprise
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatRoster {
    pub total_seats: u64,
    pub seats: Vec<SeatAssignment>,
}
