//! Operating scenarios and their per-scenario generation parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date_key::DateKey;
use crate::error::ParseLabelError;

/// Upper bound on the EVENT slice carved out of the weekday draw.
pub const MAX_EVENT_PROBABILITY: f64 = 0.70;

/// Weekday draws above this threshold select [`Scenario::HighLoad`].
const HIGH_LOAD_THRESHOLD: f64 = 0.85;

/// Weekday draws above this threshold (and not high load) select
/// [`Scenario::Leakage`].
const LEAKAGE_THRESHOLD: f64 = 0.70;

/// Campus operating mode that drives every generated figure for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Scenario {
    /// Standard weekday operation.
    Normal,
    /// Heatwave or otherwise high demand.
    HighLoad,
    /// Weekend or holiday.
    Weekend,
    /// Equipment malfunction leaking energy.
    Leakage,
    /// Campus festival or similar event.
    Event,
}

/// Fixed generation parameters for one scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioProfile {
    /// Baseline daily consumption in kWh before jitter.
    pub base: f64,
    /// Trend baseline per sample time, before jitter.
    pub trend_curve: [f64; 7],
    /// Share of the daily total per block, in campus block order.
    pub block_fractions: [f64; 5],
    /// Productive, idle and wastage percentages before variance.
    pub usage_split: [i32; 3],
}

const STANDARD_CURVE: [f64; 7] = [120.0, 80.0, 450.0, 980.0, 850.0, 600.0, 300.0];
const STANDARD_BLOCKS: [f64; 5] = [0.30, 0.20, 0.15, 0.20, 0.15];
const STANDARD_SPLIT: [i32; 3] = [65, 20, 15];

const NORMAL: ScenarioProfile = ScenarioProfile {
    base: 12_000.0,
    trend_curve: STANDARD_CURVE,
    block_fractions: STANDARD_BLOCKS,
    usage_split: STANDARD_SPLIT,
};

const HIGH_LOAD: ScenarioProfile = ScenarioProfile {
    base: 22_000.0,
    trend_curve: [200.0, 180.0, 800.0, 1600.0, 1500.0, 1100.0, 600.0],
    block_fractions: STANDARD_BLOCKS,
    usage_split: [50, 15, 35],
};

const WEEKEND: ScenarioProfile = ScenarioProfile {
    base: 6_000.0,
    trend_curve: [60.0, 50.0, 80.0, 120.0, 110.0, 150.0, 180.0],
    block_fractions: [0.10, 0.20, 0.15, 0.40, 0.35],
    usage_split: [30, 60, 10],
};

const LEAKAGE: ScenarioProfile = ScenarioProfile {
    base: 15_000.0,
    trend_curve: STANDARD_CURVE,
    block_fractions: STANDARD_BLOCKS,
    usage_split: [60, 10, 30],
};

const EVENT: ScenarioProfile = ScenarioProfile {
    base: 18_000.0,
    trend_curve: STANDARD_CURVE,
    block_fractions: STANDARD_BLOCKS,
    usage_split: STANDARD_SPLIT,
};

impl Scenario {
    /// All scenarios in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Normal,
        Self::HighLoad,
        Self::Weekend,
        Self::Leakage,
        Self::Event,
    ];

    /// Returns the wire label, e.g. `"HIGH_LOAD"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::HighLoad => "HIGH_LOAD",
            Self::Weekend => "WEEKEND",
            Self::Leakage => "LEAKAGE",
            Self::Event => "EVENT",
        }
    }

    /// Returns the generation parameters for this scenario.
    #[must_use]
    pub const fn profile(self) -> &'static ScenarioProfile {
        match self {
            Self::Normal => &NORMAL,
            Self::HighLoad => &HIGH_LOAD,
            Self::Weekend => &WEEKEND,
            Self::Leakage => &LEAKAGE,
            Self::Event => &EVENT,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.as_str() == s)
            .ok_or_else(|| ParseLabelError::new("scenario", s))
    }
}

/// Picks the scenario for `date` from a uniform draw `r` in `[0, 1)`.
///
/// Weekends always map to [`Scenario::Weekend`]. Weekday draws above 0.85
/// are high load, above 0.70 leakage, and the `event_probability` slice just
/// below 0.70 is an event; everything else is normal. With the default
/// probability of zero EVENT is never chosen.
///
/// ```
/// use energy_data::{DateKey, Scenario, select_scenario};
///
/// let monday = DateKey::parse("2026-10-19").expect("valid date");
/// assert_eq!(select_scenario(&monday, 0.9, 0.0), Scenario::HighLoad);
/// assert_eq!(select_scenario(&monday, 0.65, 0.1), Scenario::Event);
/// assert_eq!(select_scenario(&monday, 0.65, 0.0), Scenario::Normal);
/// ```
#[must_use]
pub fn select_scenario(date: &DateKey, r: f64, event_probability: f64) -> Scenario {
    if date.is_weekend() {
        Scenario::Weekend
    } else if r > HIGH_LOAD_THRESHOLD {
        Scenario::HighLoad
    } else if r > LEAKAGE_THRESHOLD {
        Scenario::Leakage
    } else if event_probability > 0.0 && r > LEAKAGE_THRESHOLD - event_probability {
        Scenario::Event
    } else {
        Scenario::Normal
    }
}
