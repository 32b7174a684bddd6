//! Data collection from the GitHub Copilot REST API
//!
//! This module is responsible for reading the raw facts the dashboard is built from:
//! the daily usage history of an enterprise and its list of Copilot seat assignments.
//!
//! # Implementation Model
//!
//! The [`Fetcher`] issues the two reads concurrently against
//! `{api_base_url}/enterprises/{enterprise}/copilot/...` and only succeeds when both do.
//! Usage days arrive in GitHub's nested per-editor/per-model/per-language shape and are
//! flattened into [`UsageDay`] records. The seats endpoint is paged, so the seat read
//! keeps requesting pages until the advertised `total_seats` have been collected.
//!
//! Failures are reported as a typed [`FetchError`]. The fetcher never substitutes
//! synthetic data itself; whether a failed fetch is surfaced or papered over is a policy
//! decision made by the caller.

mod client;
mod fetch_error;
mod fetcher;
mod seats;
mod usage;

pub use client::{Client, RateLimitInfo};
pub use fetch_error::FetchError;
pub use fetcher::{FetchSettings, Fetcher};
pub use seats::{Assignee, AssigningTeam, SeatAssignment, SeatRoster, SeatsPage};
pub use usage::UsageDay;
