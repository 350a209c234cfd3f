//! The unified per-day record returned to dashboards.
//!
//! Field names serialize in camelCase so the JSON matches what chart
//! components already consume.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::campus::{CampusRoom, HEATMAP_SLOTS};
use crate::date_key::DateKey;
use crate::error::ParseLabelError;
use crate::scenario::Scenario;

/// One calendar day of campus energy data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    /// Day this record describes.
    pub date: DateKey,
    /// Operating scenario for the day.
    pub scenario: Scenario,
    /// Total consumption in kWh.
    pub total_consumption: f64,
    /// Intraday consumption samples.
    pub trends: Vec<TrendPoint>,
    /// Consumption per campus block.
    pub blocks: Vec<BlockConsumption>,
    /// Room snapshots.
    pub rooms: Vec<RoomSnapshot>,
    /// Productive, idle and wastage percentages.
    pub usage_breakdown: Vec<UsageShare>,
    /// Hourly occupancy intensity per sampled room.
    pub heatmap: Vec<HeatmapRow>,
    /// Waste findings for the day.
    pub waste_events: Vec<WasteEvent>,
}

/// Consumption sampled at a time of day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Sample time as `HH:MM`.
    pub time: String,
    /// Energy in kWh.
    pub energy: f64,
}

/// Consumption attributed to one block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockConsumption {
    /// Block name.
    pub block: String,
    /// Consumption in kWh.
    pub consumption: f64,
}

/// Occupancy state of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    /// People are present.
    Occupied,
    /// Nobody is present.
    Vacant,
}

impl RoomStatus {
    /// Returns the wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Occupied => "occupied",
            Self::Vacant => "vacant",
        }
    }
}

impl FromStr for RoomStatus {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "occupied" => Ok(Self::Occupied),
            "vacant" => Ok(Self::Vacant),
            other => Err(ParseLabelError::new("room status", other)),
        }
    }
}

/// Point-in-time reading for a single room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    /// Room identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Owning block.
    pub block: String,
    /// Occupancy.
    pub status: RoomStatus,
    /// Whether the lights are on.
    pub lights: bool,
    /// Whether the fans are on.
    pub fans: bool,
    /// Current draw in whole watts.
    pub power: f64,
    /// Energy over an eight hour day in kWh, one decimal place.
    pub energy: f64,
    /// Set when an empty room has lights or fans running.
    pub warning: bool,
}

/// Hours a snapshot's draw is projected over when estimating energy.
const PROJECTED_HOURS: f64 = 8.0;

impl RoomSnapshot {
    /// Builds a snapshot from a raw draw, deriving power, energy and warning.
    #[must_use]
    pub fn from_reading(
        room: &CampusRoom,
        status: RoomStatus,
        lights: bool,
        fans: bool,
        raw_power: f64,
    ) -> Self {
        Self {
            id: room.id,
            name: room.name.to_owned(),
            block: room.block.to_owned(),
            status,
            lights,
            fans,
            power: raw_power.floor(),
            energy: round_tenths(raw_power / 1000.0 * PROJECTED_HOURS),
            warning: is_wasting(status, lights, fans),
        }
    }

    /// Recomputes `warning` from the other fields.
    pub fn refresh_warning(&mut self) {
        self.warning = is_wasting(self.status, self.lights, self.fans);
    }
}

/// Returns `true` when an unoccupied room has lights or fans on.
#[must_use]
pub fn is_wasting(status: RoomStatus, lights: bool, fans: bool) -> bool {
    status == RoomStatus::Vacant && (lights || fans)
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One slice of the usage breakdown chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageShare {
    /// Category name.
    pub name: String,
    /// Percentage, never negative.
    pub value: i32,
    /// Chart colour.
    pub color: String,
}

/// Hourly occupancy intensity for one room, 0 to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapRow {
    /// Room label.
    pub room: String,
    /// One value per hourly slot.
    pub hours: [u8; HEATMAP_SLOTS],
}

/// Severity of a waste finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Minor.
    Low,
    /// Worth scheduling.
    Medium,
    /// Needs attention soon.
    High,
    /// Needs attention now.
    Critical,
}

impl RiskLevel {
    /// All levels from least to most severe.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Returns the wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseLabelError::new("risk level", s))
    }
}

/// A detected source of wasted energy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteEvent {
    /// Short title.
    pub issue: String,
    /// Severity.
    pub risk: RiskLevel,
    /// Free-text explanation.
    pub details: String,
}
