//! Stored energy-saving recommendations.

use std::fmt;

use energy_data::RiskLevel;
use serde::{Deserialize, Serialize};

/// Presentation category of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    /// Waste that should be stopped now.
    Critical,
    /// Waste worth flagging.
    Warning,
    /// Equipment or process improvement.
    Improvement,
    /// Setpoint or schedule tuning.
    Optimization,
}

impl RecommendationKind {
    /// All kinds in display order.
    pub const ALL: [Self; 4] = [
        Self::Critical,
        Self::Warning,
        Self::Improvement,
        Self::Optimization,
    ];

    /// Returns the wire label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Improvement => "improvement",
            Self::Optimization => "optimization",
        }
    }

    /// Look up a kind by its wire label.
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == label)
    }
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A room-level action expected to save energy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Stable identifier.
    pub id: u32,
    /// Room display name.
    pub room: String,
    /// Owning block.
    pub block: String,
    /// Observed problem.
    pub issue: String,
    /// Evidence behind the finding.
    pub insight: String,
    /// Suggested action.
    pub recommendation: String,
    /// Expected saving, e.g. `12%`.
    pub savings: String,
    /// Urgency.
    pub priority: RiskLevel,
    /// Presentation category.
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case("critical", Some(RecommendationKind::Critical))]
    #[case("optimization", Some(RecommendationKind::Optimization))]
    #[case("Critical", None)]
    #[case("", None)]
    fn parse_matches_wire_labels(
        #[case] label: &str,
        #[case] expected: Option<RecommendationKind>,
    ) {
        assert_eq!(RecommendationKind::parse(label), expected);
    }

    #[rstest]
    fn kind_serializes_under_type() {
        let recommendation = Recommendation {
            id: 1,
            room: "Comp Lab".to_owned(),
            block: "Block B".to_owned(),
            issue: "Lights ON in vacant room".to_owned(),
            insight: "No occupancy for 30 minutes".to_owned(),
            recommendation: "Turn off lights automatically".to_owned(),
            savings: "12%".to_owned(),
            priority: RiskLevel::High,
            kind: RecommendationKind::Critical,
        };

        let value = serde_json::to_value(&recommendation).expect("serialize");

        assert_eq!(value["type"], json!("critical"));
        assert_eq!(value["priority"], json!("High"));
        assert!(value.get("kind").is_none());
    }
}
