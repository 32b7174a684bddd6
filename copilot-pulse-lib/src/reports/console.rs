use super::{Dashboard, DataSource, common};
use crate::Result;
use crate::metrics::{AdoptionStatus, WINDOW_DAYS};
use core::fmt::Write;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

/// Which parts of the dashboard to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[expect(clippy::struct_excessive_bools, reason = "one flag per independent section")]
pub struct ConsoleOutputMode {
    pub cards: bool,
    pub chart: bool,
    pub assessment: bool,
}

impl ConsoleOutputMode {
    #[must_use]
    pub const fn full() -> Self {
        Self {
            cards: true,
            chart: true,
            assessment: true,
        }
    }
}

const INDENT: usize = 2;

pub fn generate<W: Write>(dashboard: &Dashboard, use_colors: bool, mode: &ConsoleOutputMode, writer: &mut W) -> Result<()> {
    let title = format!("Copilot Pulse: {}", dashboard.enterprise);
    if use_colors {
        writeln!(writer, "{}", title.bold())?;
    } else {
        writeln!(writer, "{title}")?;
    }
    writeln!(writer, "Generated {}", dashboard.generated_at.format("%Y-%m-%d %H:%M"))?;

    if dashboard.source == DataSource::Synthetic {
        let notice = "Live data could not be fetched; showing synthetic sample data";
        if use_colors {
            writeln!(writer, "{}", notice.yellow())?;
        } else {
            writeln!(writer, "{notice}")?;
        }
    }

    if mode.cards {
        writeln!(writer)?;
        write_cards(dashboard, use_colors, writer)?;
    }

    if mode.chart {
        writeln!(writer)?;
        write_chart(dashboard, use_colors, writer)?;
    }

    if mode.assessment {
        writeln!(writer)?;
        write_assessment(dashboard, use_colors, writer)?;
    }

    Ok(())
}

fn write_cards<W: Write>(dashboard: &Dashboard, use_colors: bool, writer: &mut W) -> Result<()> {
    let summary = &dashboard.summary;
    let trend_label = format!("{WINDOW_DAYS}-day trend");
    let trend = common::format_trend(summary.usage_trend);
    let trend = match (use_colors, summary.usage_trend >= 0) {
        (false, _) => trend,
        (true, true) => trend.green().to_string(),
        (true, false) => trend.red().to_string(),
    };

    let cards = [
        ("Active users", summary.active_users.to_string()),
        ("Total seats", summary.total_seats.to_string()),
        ("Acceptance rate", format!("{}%", summary.acceptance_rate)),
        (trend_label.as_str(), trend),
    ];

    let width = cards.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, value) in cards {
        writeln!(writer, "{:INDENT$}{name:<width$} : {value}", "")?;
    }

    Ok(())
}

fn write_chart<W: Write>(dashboard: &Dashboard, use_colors: bool, writer: &mut W) -> Result<()> {
    let heading = format!("Daily acceptance rate (last {WINDOW_DAYS} days)");
    if use_colors {
        writeln!(writer, "{}", heading.bold())?;
    } else {
        writeln!(writer, "{heading}")?;
    }

    let days = &dashboard.summary.daily_acceptance_rates;
    if days.is_empty() {
        writeln!(writer, "{:INDENT$}No usage data", "")?;
        return Ok(());
    }

    let width = days.iter().map(|day| day.label.chars().count()).max().unwrap_or(0);
    for day in days {
        let bar = common::format_bar(day.rate);
        let bar = if use_colors { bar.cyan().to_string() } else { bar };
        writeln!(writer, "{:INDENT$}{:<width$} │{bar}│ {:>3}%", "", day.label, day.rate)?;
    }

    Ok(())
}

fn write_assessment<W: Write>(dashboard: &Dashboard, use_colors: bool, writer: &mut W) -> Result<()> {
    if use_colors {
        writeln!(writer, "{}", "Adoption assessment".bold())?;
    } else {
        writeln!(writer, "Adoption assessment")?;
    }

    let status = dashboard.adoption.status;
    let status_str = status.to_string();
    let colored_status = if use_colors {
        match status {
            AdoptionStatus::Strong => status_str.green().bold().to_string(),
            AdoptionStatus::Moderate => status_str.yellow().bold().to_string(),
            AdoptionStatus::Underutilized => status_str.red().bold().to_string(),
        }
    } else {
        status_str
    };
    writeln!(writer, "{:INDENT$}{colored_status}  {}% utilization rate", "", dashboard.adoption.ratio)?;

    let term_width = get_terminal_width();
    let recommendation = format!("Recommendation: {}", status.recommendation());
    for text in [status.description(), recommendation.as_str()] {
        for line in wrap_text(text, term_width.saturating_sub(INDENT), INDENT) {
            writeln!(writer, "{:INDENT$}{line}", "")?;
        }
    }

    Ok(())
}

/// Get the terminal width, defaulting to 80 if not detectable
fn get_terminal_width() -> usize {
    terminal_size().map_or(80, |(Width(w), _)| w as usize)
}

/// Word-wrap text to fit within a given width.
///
/// Continuation lines are returned without indentation; callers prefix every line
/// with the same indent.
fn wrap_text(text: &str, width: usize, indent: usize) -> Vec<String> {
    if width <= indent {
        // Not enough space, return single line
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        let separator_len = usize::from(!current_line.is_empty());
        if !current_line.is_empty() && current_line.len() + separator_len + word.len() > width {
            lines.push(core::mem::take(&mut current_line));
        }

        if !current_line.is_empty() {
            current_line.push(' ');
        }
        current_line.push_str(word);
    }

    if !current_line.is_empty() || lines.is_empty() {
        lines.push(current_line);
    }

    lines
}
