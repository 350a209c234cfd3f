//! Usage breakdown and heatmap synthesis.
//!
//! These fields are never persisted, so they are generated both for
//! synthetic days and for days read back from the store.

use rand::Rng;

use crate::campus::{HEATMAP_ROOMS, USAGE_CATEGORIES};
use crate::record::{HeatmapRow, UsageShare};
use crate::scenario::Scenario;

const VARIANCE_MIN: i32 = -3;
const VARIANCE_MAX: i32 = 2;

/// Productive, idle and wastage percentages with small random variance.
///
/// Wastage absorbs whatever the first two leave of 100; every value is
/// clamped at zero so the three only sum to 100 when no clamp applied.
pub(crate) fn usage_breakdown<R: Rng + ?Sized>(scenario: Scenario, rng: &mut R) -> Vec<UsageShare> {
    let [productive_base, idle_base, _] = scenario.profile().usage_split;
    let productive = productive_base + rng.random_range(VARIANCE_MIN..=VARIANCE_MAX);
    let idle = idle_base + rng.random_range(VARIANCE_MIN..=VARIANCE_MAX);
    let wastage = 100 - productive - idle;

    USAGE_CATEGORIES
        .iter()
        .zip([productive, idle, wastage])
        .map(|(&(name, color), value)| UsageShare {
            name: name.to_owned(),
            value: value.max(0),
            color: color.to_owned(),
        })
        .collect()
}

/// One row of hourly intensities per heatmap room.
pub(crate) fn heatmap<R: Rng + ?Sized>(scenario: Scenario, rng: &mut R) -> Vec<HeatmapRow> {
    HEATMAP_ROOMS
        .iter()
        .map(|room| {
            let ceiling = heatmap_ceiling(room, scenario);
            HeatmapRow {
                room: (*room).to_owned(),
                hours: std::array::from_fn(|_| (rng.random::<f64>() * ceiling).floor() as u8),
            }
        })
        .collect()
}

/// Exclusive upper bound of a room's hourly intensity.
fn heatmap_ceiling(room: &str, scenario: Scenario) -> f64 {
    match (room, scenario) {
        ("101", Scenario::Weekend) => 30.0,
        ("101", _) | ("102", Scenario::HighLoad) => 100.0,
        ("102", _) => 80.0,
        ("Lab", Scenario::Leakage) => 90.0,
        ("Lab", _) => 60.0,
        ("301", _) => 90.0,
        _ => 40.0,
    }
}
