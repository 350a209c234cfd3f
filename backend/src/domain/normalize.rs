//! Mapping between store rows and domain records.
//!
//! The store splits a day across `daily_stats`, `hourly_trends`,
//! `block_consumption` and `waste_events`, names columns in snake_case
//! (`block_name`, `total_consumption`) and stores times as `HH:MM:SS`. This
//! module is the only place that knows those conventions; reads and writes
//! both go through it.

use chrono::NaiveTime;
use energy_data::campus::BLOCKS;
use energy_data::{
    BlockConsumption, DateKey, DayRecord, DerivedFields, ParseLabelError, RiskLevel,
    RoomSnapshot, RoomStatus, Scenario, TrendPoint, WasteEvent,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ClassSession, Recommendation, RecommendationKind};

const RECORD_TIME_FORMAT: &str = "%H:%M";
const STORE_TIME_FORMAT: &str = "%H:%M:%S";

/// A `daily_stats` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStatsRow {
    /// Day key.
    pub date: DateKey,
    /// Scenario label, e.g. `HIGH_LOAD`.
    pub scenario: Option<String>,
    /// Total consumption in kWh.
    pub total_consumption: Option<f64>,
}

/// An `hourly_trends` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyTrendRow {
    /// Day key.
    pub date: DateKey,
    /// Sample time as `HH:MM:SS`.
    pub time: String,
    /// Energy in kWh.
    pub energy: f64,
}

/// A `block_consumption` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockConsumptionRow {
    /// Day key.
    pub date: DateKey,
    /// Block name.
    pub block_name: String,
    /// Consumption in kWh.
    pub consumption: f64,
}

/// A `waste_events` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteEventRow {
    /// Day key.
    pub date: DateKey,
    /// Short title.
    pub issue: String,
    /// Risk label.
    pub risk: String,
    /// Free-text explanation.
    pub details: String,
}

/// A `room_status` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomStatusRow {
    /// Room identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Owning block.
    pub block_name: String,
    /// `occupied` or `vacant`.
    pub status: String,
    /// Whether the lights are on.
    pub lights: bool,
    /// Whether the fans are on.
    pub fans: bool,
    /// Current draw in watts.
    pub power: f64,
    /// Projected energy in kWh.
    pub energy: f64,
    /// Stored warning flag; recomputed on read.
    #[serde(default)]
    pub warning: Option<bool>,
}

/// A `recommendations` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRow {
    /// Identifier.
    pub id: u32,
    /// Room display name.
    pub room: String,
    /// Owning block.
    pub block_name: String,
    /// Observed problem.
    pub issue: String,
    /// Evidence behind the finding.
    pub insight: String,
    /// Suggested action.
    pub recommendation: String,
    /// Expected saving.
    pub savings: String,
    /// Priority label.
    pub priority: String,
    /// Category label.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A `class_schedule` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassScheduleRow {
    /// Room the class is held in.
    pub room_id: u32,
    /// Course or subject name.
    pub subject: String,
    /// ISO weekday number, Monday = 1 through Sunday = 7.
    pub day_of_week: u32,
    /// Start as `HH:MM:SS`.
    pub start_time: String,
    /// End as `HH:MM:SS`.
    pub end_time: String,
}

/// Every row the store holds for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDay {
    /// The `daily_stats` row.
    pub stats: DailyStatsRow,
    /// Intraday samples.
    pub trends: Vec<HourlyTrendRow>,
    /// Per-block totals.
    pub blocks: Vec<BlockConsumptionRow>,
    /// Waste findings.
    pub waste_events: Vec<WasteEventRow>,
}

/// Reasons stored rows cannot form a usable record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    /// Total consumption is null or zero.
    #[error("total consumption for {date} is missing")]
    MissingTotal {
        /// Affected day.
        date: DateKey,
    },
    /// Total consumption is negative, NaN or infinite.
    #[error("total consumption {value} for {date} is not a valid reading")]
    InvalidTotal {
        /// Affected day.
        date: DateKey,
        /// Stored value.
        value: f64,
    },
    /// Scenario column is null.
    #[error("scenario for {date} is missing")]
    MissingScenario {
        /// Affected day.
        date: DateKey,
    },
    /// A label column holds an unknown value.
    #[error("unknown {kind} label '{value}'")]
    UnknownLabel {
        /// Label family, e.g. `scenario`.
        kind: &'static str,
        /// Stored value.
        value: String,
    },
    /// A time column is not `HH:MM` or `HH:MM:SS`.
    #[error("invalid time of day '{value}'")]
    InvalidTime {
        /// Stored value.
        value: String,
    },
}

impl From<ParseLabelError> for NormalizeError {
    fn from(err: ParseLabelError) -> Self {
        Self::UnknownLabel {
            kind: err.kind(),
            value: err.value().to_owned(),
        }
    }
}

/// The stored part of a day record, validated.
///
/// Rooms, usage breakdown and heatmap are not stored; supply them through
/// [`LiveDay::into_record`].
#[derive(Debug, Clone, PartialEq)]
pub struct LiveDay {
    /// Day key.
    pub date: DateKey,
    /// Parsed scenario.
    pub scenario: Scenario,
    /// Total consumption in kWh.
    pub total_consumption: f64,
    /// Samples ordered by time.
    pub trends: Vec<TrendPoint>,
    /// Blocks in campus order.
    pub blocks: Vec<BlockConsumption>,
    /// Waste findings in stored order.
    pub waste_events: Vec<WasteEvent>,
}

impl LiveDay {
    /// Complete the record with synthesised fields.
    pub fn into_record(self, derived: DerivedFields) -> DayRecord {
        DayRecord {
            date: self.date,
            scenario: self.scenario,
            total_consumption: self.total_consumption,
            trends: self.trends,
            blocks: self.blocks,
            rooms: derived.rooms,
            usage_breakdown: derived.usage_breakdown,
            heatmap: derived.heatmap,
            waste_events: self.waste_events,
        }
    }
}

/// Validate stored rows and convert them to record fields.
///
/// # Errors
///
/// Returns [`NormalizeError`] when the total is null, zero or invalid, the
/// scenario is missing or unknown, a trend time is malformed, or a waste
/// risk label is unknown.
pub fn live_day(stored: &StoredDay) -> Result<LiveDay, NormalizeError> {
    let date = stored.stats.date;
    let total_consumption = match stored.stats.total_consumption {
        None => return Err(NormalizeError::MissingTotal { date }),
        Some(value) if value == 0.0 => return Err(NormalizeError::MissingTotal { date }),
        Some(value) if !value.is_finite() || value < 0.0 => {
            return Err(NormalizeError::InvalidTotal { date, value });
        }
        Some(value) => value,
    };
    let scenario: Scenario = stored
        .stats
        .scenario
        .as_deref()
        .ok_or(NormalizeError::MissingScenario { date })?
        .parse()?;

    let mut timed = stored
        .trends
        .iter()
        .map(|row| parse_time_of_day(&row.time).map(|time| (time, row.energy)))
        .collect::<Result<Vec<_>, _>>()?;
    timed.sort_by_key(|(time, _)| *time);
    let trends = timed
        .into_iter()
        .map(|(time, energy)| TrendPoint {
            time: time.format(RECORD_TIME_FORMAT).to_string(),
            energy,
        })
        .collect();

    let mut blocks: Vec<BlockConsumption> = stored
        .blocks
        .iter()
        .map(|row| BlockConsumption {
            block: row.block_name.clone(),
            consumption: row.consumption,
        })
        .collect();
    blocks.sort_by_key(|block| block_position(&block.block));

    let waste_events = stored
        .waste_events
        .iter()
        .map(|row| -> Result<WasteEvent, NormalizeError> {
            Ok(WasteEvent {
                issue: row.issue.clone(),
                risk: row.risk.parse::<RiskLevel>()?,
                details: row.details.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LiveDay {
        date,
        scenario,
        total_consumption,
        trends,
        blocks,
        waste_events,
    })
}

/// Split a record into the rows the store holds.
///
/// # Examples
/// ```
/// use backend::domain::stored_day;
/// use energy_data::{DateKey, DayGenerator};
///
/// let date = DateKey::parse("2026-10-19").expect("valid date");
/// let rows = stored_day(&DayGenerator::seeded(1).generate(&date));
/// assert_eq!(rows.trends[0].time, "00:00:00");
/// assert_eq!(rows.blocks[0].block_name, "Block A");
/// ```
pub fn stored_day(record: &DayRecord) -> StoredDay {
    let date = record.date;
    StoredDay {
        stats: DailyStatsRow {
            date,
            scenario: Some(record.scenario.as_str().to_owned()),
            total_consumption: Some(record.total_consumption),
        },
        trends: record
            .trends
            .iter()
            .map(|point| HourlyTrendRow {
                date,
                time: store_time(&point.time),
                energy: point.energy,
            })
            .collect(),
        blocks: record
            .blocks
            .iter()
            .map(|block| BlockConsumptionRow {
                date,
                block_name: block.block.clone(),
                consumption: block.consumption,
            })
            .collect(),
        waste_events: record
            .waste_events
            .iter()
            .map(|event| WasteEventRow {
                date,
                issue: event.issue.clone(),
                risk: event.risk.as_str().to_owned(),
                details: event.details.clone(),
            })
            .collect(),
    }
}

/// Convert a `room_status` row, recomputing the warning flag.
///
/// # Errors
///
/// Returns [`NormalizeError::UnknownLabel`] for an unknown status.
pub fn room_snapshot(row: &RoomStatusRow) -> Result<RoomSnapshot, NormalizeError> {
    let mut room = RoomSnapshot {
        id: row.id,
        name: row.name.clone(),
        block: row.block_name.clone(),
        status: row.status.parse::<RoomStatus>()?,
        lights: row.lights,
        fans: row.fans,
        power: row.power,
        energy: row.energy,
        warning: false,
    };
    room.refresh_warning();
    Ok(room)
}

/// Convert a room snapshot to its `room_status` row.
pub fn room_row(room: &RoomSnapshot) -> RoomStatusRow {
    RoomStatusRow {
        id: room.id,
        name: room.name.clone(),
        block_name: room.block.clone(),
        status: room.status.as_str().to_owned(),
        lights: room.lights,
        fans: room.fans,
        power: room.power,
        energy: room.energy,
        warning: Some(room.warning),
    }
}

/// Convert a `recommendations` row.
///
/// # Errors
///
/// Returns [`NormalizeError::UnknownLabel`] for an unknown priority or type.
pub fn recommendation(row: &RecommendationRow) -> Result<Recommendation, NormalizeError> {
    let kind =
        RecommendationKind::parse(&row.kind).ok_or_else(|| NormalizeError::UnknownLabel {
            kind: "recommendation type",
            value: row.kind.clone(),
        })?;
    Ok(Recommendation {
        id: row.id,
        room: row.room.clone(),
        block: row.block_name.clone(),
        issue: row.issue.clone(),
        insight: row.insight.clone(),
        recommendation: row.recommendation.clone(),
        savings: row.savings.clone(),
        priority: row.priority.parse::<RiskLevel>()?,
        kind,
    })
}

/// Convert a recommendation to its `recommendations` row.
pub fn recommendation_row(recommendation: &Recommendation) -> RecommendationRow {
    RecommendationRow {
        id: recommendation.id,
        room: recommendation.room.clone(),
        block_name: recommendation.block.clone(),
        issue: recommendation.issue.clone(),
        insight: recommendation.insight.clone(),
        recommendation: recommendation.recommendation.clone(),
        savings: recommendation.savings.clone(),
        priority: recommendation.priority.as_str().to_owned(),
        kind: recommendation.kind.as_str().to_owned(),
    }
}

/// Convert a `class_schedule` row.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidTime`] for a malformed start or end.
pub fn class_session(row: &ClassScheduleRow) -> Result<ClassSession, NormalizeError> {
    Ok(ClassSession {
        room_id: row.room_id,
        subject: row.subject.clone(),
        start: parse_time_of_day(&row.start_time)?,
        end: parse_time_of_day(&row.end_time)?,
    })
}

/// Parse `HH:MM:SS` or `HH:MM`.
pub(crate) fn parse_time_of_day(value: &str) -> Result<NaiveTime, NormalizeError> {
    NaiveTime::parse_from_str(value, STORE_TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, RECORD_TIME_FORMAT))
        .map_err(|_| NormalizeError::InvalidTime {
            value: value.to_owned(),
        })
}

/// Widen a record time to the store's `HH:MM:SS`, leaving unparseable
/// values untouched.
fn store_time(value: &str) -> String {
    parse_time_of_day(value).map_or_else(
        |_| value.to_owned(),
        |time| time.format(STORE_TIME_FORMAT).to_string(),
    )
}

fn block_position(name: &str) -> usize {
    BLOCKS
        .iter()
        .position(|block| *block == name)
        .unwrap_or(BLOCKS.len())
}

#[cfg(test)]
mod tests {
    use energy_data::DayGenerator;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn record() -> DayRecord {
        let date = DateKey::parse("2026-10-21").expect("valid date");
        DayGenerator::seeded(3).generate(&date)
    }

    #[fixture]
    fn stored(record: DayRecord) -> StoredDay {
        stored_day(&record)
    }

    #[rstest]
    fn stored_rows_use_store_conventions(stored: StoredDay) {
        let times: Vec<&str> = stored.trends.iter().map(|row| row.time.as_str()).collect();
        assert_eq!(
            times,
            vec!["00:00:00", "04:00:00", "08:00:00", "12:00:00", "16:00:00", "20:00:00", "23:59:00"]
        );
        assert_eq!(stored.blocks.len(), 5);
        assert!(stored.trends.iter().all(|row| row.date == stored.stats.date));
    }

    #[rstest]
    fn live_day_restores_stored_fields(record: DayRecord, stored: StoredDay) {
        let live = live_day(&stored).expect("usable rows");

        assert_eq!(live.scenario, record.scenario);
        assert_eq!(live.total_consumption, record.total_consumption);
        assert_eq!(live.trends, record.trends);
        assert_eq!(live.blocks, record.blocks);
        assert_eq!(live.waste_events, record.waste_events);
    }

    #[rstest]
    fn live_day_orders_shuffled_rows(record: DayRecord, mut stored: StoredDay) {
        stored.trends.reverse();
        stored.blocks.reverse();

        let live = live_day(&stored).expect("usable rows");

        assert_eq!(live.trends, record.trends);
        assert_eq!(live.blocks, record.blocks);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(0.0))]
    fn null_or_zero_totals_are_missing(mut stored: StoredDay, #[case] total: Option<f64>) {
        stored.stats.total_consumption = total;

        let err = live_day(&stored).expect_err("unusable rows");

        assert!(matches!(err, NormalizeError::MissingTotal { .. }));
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(-5.0)]
    fn invalid_totals_are_rejected(mut stored: StoredDay, #[case] total: f64) {
        stored.stats.total_consumption = Some(total);

        let err = live_day(&stored).expect_err("unusable rows");

        assert!(matches!(err, NormalizeError::InvalidTotal { .. }));
    }

    #[rstest]
    fn unknown_scenarios_are_rejected(mut stored: StoredDay) {
        stored.stats.scenario = Some("HOLIDAY".to_owned());

        let err = live_day(&stored).expect_err("unusable rows");

        assert_eq!(
            err,
            NormalizeError::UnknownLabel {
                kind: "scenario",
                value: "HOLIDAY".to_owned(),
            }
        );
    }

    #[rstest]
    fn missing_scenarios_are_rejected(mut stored: StoredDay) {
        stored.stats.scenario = None;

        assert!(matches!(
            live_day(&stored),
            Err(NormalizeError::MissingScenario { .. })
        ));
    }

    #[rstest]
    fn malformed_trend_times_are_rejected(mut stored: StoredDay) {
        stored.trends[0].time = "midnight".to_owned();

        assert_eq!(
            live_day(&stored),
            Err(NormalizeError::InvalidTime {
                value: "midnight".to_owned()
            })
        );
    }

    #[rstest]
    fn empty_child_rows_are_usable(mut stored: StoredDay) {
        stored.trends.clear();
        stored.blocks.clear();
        stored.waste_events.clear();

        let live = live_day(&stored).expect("usable rows");

        assert!(live.trends.is_empty());
        assert!(live.waste_events.is_empty());
    }

    #[rstest]
    fn room_rows_recompute_the_warning() {
        let row = RoomStatusRow {
            id: 302,
            name: "Room 302".to_owned(),
            block_name: "Boys Hostel".to_owned(),
            status: "vacant".to_owned(),
            lights: false,
            fans: true,
            power: 60.0,
            energy: 1.2,
            warning: None,
        };

        let room = room_snapshot(&row).expect("valid row");

        assert!(room.warning);
        assert_eq!(room.block, "Boys Hostel");
        assert_eq!(room_row(&room).warning, Some(true));
    }

    #[rstest]
    fn unknown_room_status_is_rejected() {
        let row = RoomStatusRow {
            id: 101,
            name: "Lec Hall 101".to_owned(),
            block_name: "Block A".to_owned(),
            status: "closed".to_owned(),
            lights: false,
            fans: false,
            power: 0.0,
            energy: 0.0,
            warning: None,
        };

        assert!(matches!(
            room_snapshot(&row),
            Err(NormalizeError::UnknownLabel { kind: "room status", .. })
        ));
    }

    #[rstest]
    fn recommendation_rows_map_type_and_priority() {
        let row = RecommendationRow {
            id: 2,
            room: "Room 302".to_owned(),
            block_name: "Boys Hostel".to_owned(),
            issue: "Fan ON in vacant room".to_owned(),
            insight: "Room vacant since 9 AM".to_owned(),
            recommendation: "Remote fan cutoff".to_owned(),
            savings: "5%".to_owned(),
            priority: "Medium".to_owned(),
            kind: "warning".to_owned(),
        };

        let converted = recommendation(&row).expect("valid row");

        assert_eq!(converted.priority, RiskLevel::Medium);
        assert_eq!(converted.kind, RecommendationKind::Warning);
        assert_eq!(recommendation_row(&converted), row);
    }

    #[rstest]
    #[case("09:00:00", 9, 0)]
    #[case("14:30", 14, 30)]
    fn class_times_accept_both_formats(
        #[case] value: &str,
        #[case] hour: u32,
        #[case] minute: u32,
    ) {
        let row = ClassScheduleRow {
            room_id: 101,
            subject: "Physics".to_owned(),
            day_of_week: 1,
            start_time: value.to_owned(),
            end_time: "23:00:00".to_owned(),
        };

        let session = class_session(&row).expect("valid row");

        assert_eq!(session.start, NaiveTime::from_hms_opt(hour, minute, 0).expect("time"));
    }
}
