use super::summary::{DailyRate, MetricsSummary, WINDOW_DAYS, day_label};
use chrono::{Days, NaiveDate};
use core::ops::Range;
use rand::Rng;

pub const FALLBACK_TOTAL_SEATS: u64 = 200;
pub const FALLBACK_ACTIVE_USERS: u64 = 127;
pub const FALLBACK_ACCEPTANCE_RATE: u32 = 32;
pub const FALLBACK_USAGE_TREND: i64 = 8;

/// Range the synthetic daily acceptance rates are drawn from
pub const FALLBACK_RATE_BAND: Range<u32> = 25..45;

/// Build a synthetic summary covering the [`WINDOW_DAYS`] days ending on `today`.
///
/// Seat, user, rate, and trend figures are fixed; only the daily series is random.
pub fn generate_fallback<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> MetricsSummary {
    let daily_acceptance_rates = (0..WINDOW_DAYS as u64)
        .rev()
        .map(|days_back| DailyRate {
            label: day_label(today - Days::new(days_back)),
            rate: rng.gen_range(FALLBACK_RATE_BAND),
        })
        .collect();

    MetricsSummary {
        total_seats: FALLBACK_TOTAL_SEATS,
        active_users: FALLBACK_ACTIVE_USERS,
        acceptance_rate: FALLBACK_ACCEPTANCE_RATE,
        usage_trend: FALLBACK_USAGE_TREND,
        daily_acceptance_rates,
    }
}
