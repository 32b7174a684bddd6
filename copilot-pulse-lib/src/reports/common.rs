//! Common utilities shared across report generators.

/// Direction marker and magnitude for a signed trend, e.g. `▲ 8%` or `▼ 12%`.
pub fn format_trend(trend: i64) -> String {
    let arrow = if trend >= 0 { '▲' } else { '▼' };
    format!("{arrow} {}%", trend.unsigned_abs())
}

/// Width, in cells, of a full bar in the acceptance chart.
pub const BAR_WIDTH: usize = 30;

/// Horizontal bar for a percentage, padded to [`BAR_WIDTH`].
pub fn format_bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * BAR_WIDTH) / 100;
    format!("{}{}", "█".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}
