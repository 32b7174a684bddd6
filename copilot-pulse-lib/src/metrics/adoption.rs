use super::summary::percentage;
use serde::Serialize;
use strum::Display;

/// Adoption ratio at or above which seats are considered well used
pub const STRONG_THRESHOLD: u32 = 70;

/// Adoption ratio at or above which seats are considered moderately used
pub const MODERATE_THRESHOLD: u32 = 40;

/// How well purchased seats are being used, from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
pub enum AdoptionStatus {
    Underutilized,
    Moderate,
    Strong,
}

impl AdoptionStatus {
    /// One-sentence assessment shown next to the status
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Strong => "Your team is leveraging Copilot effectively. Most seats are actively being used.",
            Self::Moderate => "There's room to improve Copilot adoption across your organization.",
            Self::Underutilized => "Copilot seats are significantly underutilized. Many licenses are not being used.",
        }
    }

    /// Suggested next step for this status
    #[must_use]
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Strong => "Continue monitoring and share best practices across teams.",
            Self::Moderate => "Consider additional training sessions and identifying adoption blockers.",
            Self::Underutilized => "Review seat assignments and implement an adoption campaign.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdoptionClassification {
    /// Active users as a rounded percentage of total seats (0..=100)
    pub ratio: u32,
    pub status: AdoptionStatus,
}

/// Classify seat adoption. Defined for every input, including zero seats.
#[must_use]
pub fn classify(active_users: u64, total_seats: u64) -> AdoptionClassification {
    let ratio = percentage(active_users, total_seats);

    let status = if ratio >= STRONG_THRESHOLD {
        AdoptionStatus::Strong
    } else if ratio >= MODERATE_THRESHOLD {
        AdoptionStatus::Moderate
    } else {
        AdoptionStatus::Underutilized
    };

    AdoptionClassification { ratio, status }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seats() {
        for active in [0, 1, 500] {
            let c = classify(active, 0);
            assert_eq!(c.ratio, 0);
            assert_eq!(c.status, AdoptionStatus::Underutilized);
        }
    }

    #[test]
    fn test_strong_boundary() {
        let c = classify(140, 200);
        assert_eq!(c.ratio, 70);
        assert_eq!(c.status, AdoptionStatus::Strong);

        let c = classify(69, 100);
        assert_eq!(c.ratio, 69);
        assert_eq!(c.status, AdoptionStatus::Moderate);
    }

    #[test]
    fn test_moderate_boundary() {
        let c = classify(40, 100);
        assert_eq!(c.ratio, 40);
        assert_eq!(c.status, AdoptionStatus::Moderate);

        let c = classify(39, 100);
        assert_eq!(c.ratio, 39);
        assert_eq!(c.status, AdoptionStatus::Underutilized);
    }

    #[test]
    fn test_ratio_rounds() {
        // 127 / 200 = 63.5%
        let c = classify(127, 200);
        assert_eq!(c.ratio, 64);
        assert_eq!(c.status, AdoptionStatus::Moderate);

        // 139 / 200 = 69.5% rounds up into the strong tier
        assert_eq!(classify(139, 200).status, AdoptionStatus::Strong);
    }

    #[test]
    fn test_ratio_is_clamped() {
        let c = classify(250, 200);
        assert_eq!(c.ratio, 100);
        assert_eq!(c.status, AdoptionStatus::Strong);
    }

    #[test]
    fn test_status_ordering() {
        assert!(AdoptionStatus::Underutilized < AdoptionStatus::Moderate);
        assert!(AdoptionStatus::Moderate < AdoptionStatus::Strong);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(AdoptionStatus::Strong.to_string(), "Strong");
        assert_eq!(AdoptionStatus::Moderate.to_string(), "Moderate");
        assert_eq!(AdoptionStatus::Underutilized.to_string(), "Underutilized");
    }

    #[test]
    fn test_every_status_has_text() {
        for status in [AdoptionStatus::Underutilized, AdoptionStatus::Moderate, AdoptionStatus::Strong] {
            assert!(!status.description().is_empty());
            assert!(!status.recommendation().is_empty());
        }
    }
}
