use super::Dashboard;
use crate::Result;
use core::fmt::Write;
use serde_json::json;

pub fn generate<W: Write>(dashboard: &Dashboard, writer: &mut W) -> Result<()> {
    let summary = &dashboard.summary;

    let output = json!({
        "enterprise": dashboard.enterprise,
        "generated_at": dashboard.generated_at.to_rfc3339(),
        "source": dashboard.source,
        "summary": {
            "total_seats": summary.total_seats,
            "active_users": summary.active_users,
            "acceptance_rate": summary.acceptance_rate,
            "usage_trend": summary.usage_trend,
            "daily_acceptance_rates": summary.daily_acceptance_rates,
        },
        "adoption": dashboard.adoption,
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
