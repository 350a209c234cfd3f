//! Recommendations derived from a day's waste events.
//!
//! Used when no live analysis is available: each waste event becomes an
//! actionable card, and days without waste get two generic suggestions.

use energy_data::{DayRecord, RiskLevel};
use serde::Serialize;

/// An actionable suggestion shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    /// Identifier, stable for a given record.
    pub id: String,
    /// Short title.
    pub title: String,
    /// One sentence explanation.
    pub description: String,
    /// Urgency.
    pub priority: RiskLevel,
    /// Expected saving, e.g. `15%`.
    pub savings: String,
    /// Call-to-action label.
    pub action: String,
}

/// Expected saving for acting on a waste event of the given risk.
pub fn savings_for(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Critical => "25%",
        RiskLevel::High => "15%",
        RiskLevel::Medium | RiskLevel::Low => "5%",
    }
}

/// Turn the waste events of `record` into insights.
///
/// # Examples
/// ```
/// use backend::domain::derive_insights;
/// use energy_data::{DateKey, DayGenerator};
///
/// let date = DateKey::parse("2026-10-19").expect("valid date");
/// let record = DayGenerator::seeded(7).generate(&date);
///
/// let insights = derive_insights(&record);
/// assert_eq!(insights.len(), record.waste_events.len());
/// ```
pub fn derive_insights(record: &DayRecord) -> Vec<Insight> {
    if record.waste_events.is_empty() {
        return fallback_insights();
    }
    record
        .waste_events
        .iter()
        .enumerate()
        .map(|(index, event)| Insight {
            id: format!("{}-waste-{index}", record.date),
            title: event.issue.clone(),
            description: event.details.clone(),
            priority: event.risk,
            savings: savings_for(event.risk).to_owned(),
            action: "View Details".to_owned(),
        })
        .collect()
}

fn fallback_insights() -> Vec<Insight> {
    vec![
        Insight {
            id: "fallback-1".to_owned(),
            title: "Optimize HVAC Schedule".to_owned(),
            description: "Cooling systems are running during low-occupancy hours.".to_owned(),
            priority: RiskLevel::High,
            savings: "15%".to_owned(),
            action: "Adjust Schedule".to_owned(),
        },
        Insight {
            id: "fallback-2".to_owned(),
            title: "Detect Phantom Load".to_owned(),
            description: "Baseload power stays high at night, likely from computers in standby."
                .to_owned(),
            priority: RiskLevel::Medium,
            savings: "8%".to_owned(),
            action: "Enable Auto-Sleep".to_owned(),
        },
    ]
}
