//! Summary statistics derived from Copilot usage and seat facts
//!
//! This module turns the raw facts gathered by [`crate::facts`] into the small view
//! model the dashboard renders. Everything here is pure: the same inputs always give
//! the same output and nothing performs I/O.
//!
//! # Implementation Model
//!
//! - [`derive_summary`] looks at the trailing [`WINDOW_DAYS`] usage days and the seat
//!   roster and produces a [`MetricsSummary`]: acceptance rate, active users, the usage
//!   trend between the two halves of the window, and a per-day acceptance series.
//! - [`classify`] maps active users over total seats to an [`AdoptionClassification`],
//!   bucketing the ratio into an ordered [`AdoptionStatus`] tier.
//! - [`generate_fallback`] builds a synthetic summary of the same shape from an injected
//!   random source, for callers that choose to render something when live data is
//!   unavailable.
//!
//! Percentages are rounded to whole numbers. Acceptance rates and adoption ratios are
//! clamped to 0..=100; the trend is a signed, unbounded percentage.

mod adoption;
mod fallback;
mod summary;

pub use adoption::{AdoptionClassification, AdoptionStatus, MODERATE_THRESHOLD, STRONG_THRESHOLD, classify};
pub use fallback::{
    FALLBACK_ACCEPTANCE_RATE, FALLBACK_ACTIVE_USERS, FALLBACK_RATE_BAND, FALLBACK_TOTAL_SEATS, FALLBACK_USAGE_TREND, generate_fallback,
};
pub use summary::{DailyRate, MetricsSummary, WINDOW_DAYS, day_label, derive_summary};
