use crate::facts::{SeatAssignment, SeatRoster, UsageDay};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

/// Number of trailing usage days a summary covers
pub const WINDOW_DAYS: usize = 7;

/// Acceptance rate of a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRate {
    pub label: String,
    pub rate: u32,
}

/// The numbers shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSummary {
    pub total_seats: u64,
    pub active_users: u64,
    pub acceptance_rate: u32,
    pub usage_trend: i64,

    /// Chronological, most recent day last
    pub daily_acceptance_rates: Vec<DailyRate>,
}

/// Summarize the trailing [`WINDOW_DAYS`] of `usage_days` together with the seat roster.
///
/// `usage_days` must be in chronological order.
#[must_use]
pub fn derive_summary(usage_days: &[UsageDay], roster: &SeatRoster) -> MetricsSummary {
    let window = &usage_days[usage_days.len().saturating_sub(WINDOW_DAYS)..];

    let suggestions = saturating_total(window.iter().map(|day| day.suggestions));
    let acceptances = saturating_total(window.iter().map(|day| day.acceptances));

    MetricsSummary {
        total_seats: roster.total_seats,
        active_users: count_active_users(&roster.seats),
        acceptance_rate: percentage(acceptances, suggestions),
        usage_trend: usage_trend(window),
        daily_acceptance_rates: window
            .iter()
            .map(|day| DailyRate {
                label: day_label(day.date),
                rate: percentage(day.acceptances, day.suggestions),
            })
            .collect(),
    }
}

/// Label used for a day in the acceptance series, e.g. `Mon Oct 13`
#[must_use]
pub fn day_label(date: NaiveDate) -> String {
    date.format("%a %b %-d").to_string()
}

/// Distinct assignees who have used Copilot at least once
fn count_active_users(seats: &[SeatAssignment]) -> u64 {
    let active: HashSet<&str> = seats
        .iter()
        .filter(|seat| seat.last_activity_at.is_some())
        .map(|seat| seat.assignee.login.as_str())
        .collect();

    active.len() as u64
}

/// Relative change in active users between the first and last halves of the window.
///
/// Both halves hold the same number of days, so comparing their totals is the same as
/// comparing their means. The middle day of an odd-length window belongs to neither.
#[expect(clippy::cast_precision_loss, reason = "user counts are far below 2^52")]
#[expect(clippy::cast_possible_truncation, reason = "rounded percentage fits in i64")]
fn usage_trend(window: &[UsageDay]) -> i64 {
    let half = window.len() / 2;
    if half == 0 {
        return 0;
    }

    let first = saturating_total(window.iter().take(half).map(|day| day.active_users));
    let second = saturating_total(window.iter().skip(window.len() - half).map(|day| day.active_users));
    if first == 0 {
        return 0;
    }

    let change = (second as f64 - first as f64) / first as f64;
    (100.0 * change).round() as i64
}

/// Sum of counts reported by the API, pinned at `u64::MAX` instead of overflowing
fn saturating_total(values: impl Iterator<Item = u64>) -> u64 {
    values.fold(0, u64::saturating_add)
}

/// `part / whole` as a rounded percentage clamped to 0..=100, or 0 when `whole` is 0
#[expect(clippy::cast_precision_loss, reason = "acceptable for percentages")]
#[expect(clippy::cast_possible_truncation, reason = "value is clamped to 0..=100")]
#[expect(clippy::cast_sign_loss, reason = "value is clamped to 0..=100")]
pub(super) fn percentage(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }

    let pct = (100.0 * part as f64 / whole as f64).round();
    pct.clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::Assignee;
    use chrono::{DateTime, Days, Utc};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn day(offset: u64, suggestions: u64, acceptances: u64, active_users: u64) -> UsageDay {
        UsageDay {
            date: start() + Days::new(offset),
            suggestions,
            acceptances,
            lines_suggested: suggestions.saturating_mul(2),
            lines_accepted: acceptances.saturating_mul(2),
            active_users,
        }
    }

    fn days_with_active_users(active: &[u64]) -> Vec<UsageDay> {
        active.iter().zip(0..).map(|(&users, offset)| day(offset, 100, 30, users)).collect()
    }

    fn seat(login: &str, active: bool) -> SeatAssignment {
        let created_at: DateTime<Utc> = "2024-01-01T00:00:00Z".parse().unwrap();
        SeatAssignment {
            assignee: Assignee { login: login.to_string(), id: 1 },
            created_at,
            updated_at: Some(created_at),
            pending_cancellation_date: None,
            last_activity_at: active.then_some(created_at),
            last_activity_editor: active.then(|| "vscode".to_string()),
            assigning_team: None,
        }
    }

    fn roster(total_seats: u64, seats: Vec<SeatAssignment>) -> SeatRoster {
        SeatRoster { total_seats, seats }
    }

    #[test]
    fn test_empty_usage() {
        let summary = derive_summary(&[], &roster(10, vec![seat("a", true)]));
        assert_eq!(summary.acceptance_rate, 0);
        assert_eq!(summary.usage_trend, 0);
        assert!(summary.daily_acceptance_rates.is_empty());
        assert_eq!(summary.total_seats, 10);
        assert_eq!(summary.active_users, 1);
    }

    #[test]
    fn test_uniform_acceptance() {
        let usage: Vec<_> = (0..7).map(|i| day(i, 100, 30, 10)).collect();
        let summary = derive_summary(&usage, &SeatRoster::default());

        assert_eq!(summary.acceptance_rate, 30);
        assert_eq!(summary.daily_acceptance_rates.len(), 7);
        assert!(summary.daily_acceptance_rates.iter().all(|d| d.rate == 30));
    }

    #[test]
    fn test_window_uses_last_seven_days() {
        let mut usage: Vec<_> = (0..3).map(|i| day(i, 100, 100, 10)).collect();
        usage.extend((3..10).map(|i| day(i, 100, 20, 10)));

        let summary = derive_summary(&usage, &SeatRoster::default());

        assert_eq!(summary.acceptance_rate, 20);
        assert_eq!(summary.daily_acceptance_rates.len(), 7);
        assert_eq!(summary.daily_acceptance_rates[0].label, day_label(start() + Days::new(3)));
        assert_eq!(summary.daily_acceptance_rates[6].label, day_label(start() + Days::new(9)));
    }

    #[test]
    fn test_fewer_than_seven_days_uses_all() {
        let usage: Vec<_> = (0..3).map(|i| day(i, 200, 50, 10)).collect();
        let summary = derive_summary(&usage, &SeatRoster::default());

        assert_eq!(summary.daily_acceptance_rates.len(), 3);
        assert_eq!(summary.acceptance_rate, 25);
    }

    #[test]
    fn test_acceptance_rate_is_aggregate_not_mean_of_days() {
        let usage = vec![day(0, 100, 10, 1), day(1, 300, 270, 1)];
        let summary = derive_summary(&usage, &SeatRoster::default());

        assert_eq!(summary.acceptance_rate, 70);
        assert_eq!(summary.daily_acceptance_rates[0].rate, 10);
        assert_eq!(summary.daily_acceptance_rates[1].rate, 90);
    }

    #[test]
    fn test_day_without_suggestions_has_zero_rate() {
        let usage = vec![day(0, 0, 0, 1), day(1, 100, 40, 1)];
        let summary = derive_summary(&usage, &SeatRoster::default());

        assert_eq!(summary.daily_acceptance_rates[0].rate, 0);
        assert_eq!(summary.daily_acceptance_rates[1].rate, 40);
        assert_eq!(summary.acceptance_rate, 40);
    }

    #[test]
    fn test_acceptance_rate_is_clamped() {
        let usage = vec![day(0, 10, 25, 1)];
        let summary = derive_summary(&usage, &SeatRoster::default());

        assert_eq!(summary.acceptance_rate, 100);
        assert_eq!(summary.daily_acceptance_rates[0].rate, 100);
    }

    #[test]
    fn test_trend_increase() {
        let usage = days_with_active_users(&[50, 50, 50, 999, 75, 75, 75]);
        assert_eq!(derive_summary(&usage, &SeatRoster::default()).usage_trend, 50);
    }

    #[test]
    fn test_trend_decrease() {
        let usage = days_with_active_users(&[100, 100, 100, 0, 80, 80, 80]);
        assert_eq!(derive_summary(&usage, &SeatRoster::default()).usage_trend, -20);
    }

    #[test]
    fn test_trend_rounds() {
        let usage = days_with_active_users(&[30, 30, 30, 30, 40, 40, 40]);
        assert_eq!(derive_summary(&usage, &SeatRoster::default()).usage_trend, 33);
    }

    #[test]
    fn test_trend_zero_when_first_half_inactive() {
        let usage = days_with_active_users(&[0, 0, 0, 5, 10, 10, 10]);
        assert_eq!(derive_summary(&usage, &SeatRoster::default()).usage_trend, 0);
    }

    #[test]
    fn test_trend_single_day() {
        let usage = days_with_active_users(&[42]);
        assert_eq!(derive_summary(&usage, &SeatRoster::default()).usage_trend, 0);
    }

    #[test]
    fn test_trend_is_unbounded() {
        let usage = days_with_active_users(&[1, 1, 1, 1, 10, 10, 10]);
        assert_eq!(derive_summary(&usage, &SeatRoster::default()).usage_trend, 900);
    }

    #[test]
    fn test_active_users_are_distinct_and_active() {
        let seats = vec![seat("alice", true), seat("bob", false), seat("alice", true), seat("carol", true)];
        let summary = derive_summary(&[], &roster(4, seats));

        assert_eq!(summary.active_users, 2);
        assert_eq!(summary.total_seats, 4);
    }

    #[test]
    fn test_huge_counts_saturate_instead_of_overflowing() {
        let usage: Vec<_> = (0..4).map(|offset| day(offset, u64::MAX, u64::MAX, u64::MAX)).collect();
        let summary = derive_summary(&usage, &SeatRoster::default());

        assert_eq!(summary.acceptance_rate, 100);
        assert_eq!(summary.usage_trend, 0);
        assert!(summary.daily_acceptance_rates.iter().all(|d| d.rate == 100));
    }

    #[test]
    fn test_derive_is_idempotent() {
        let usage = days_with_active_users(&[5, 6, 7, 8, 9, 10, 11, 12]);
        let seats = roster(3, vec![seat("a", true), seat("b", false)]);

        assert_eq!(derive_summary(&usage, &seats), derive_summary(&usage, &seats));
    }

    #[test]
    fn test_day_label() {
        let date = NaiveDate::from_ymd_opt(2024, 10, 7).unwrap();
        assert_eq!(day_label(date), "Mon Oct 7");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(5, 1), 100);
    }
}
