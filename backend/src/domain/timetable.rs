//! Cross-checks room power draw against the class timetable.
//!
//! A room drawing more than [`ANOMALY_POWER_THRESHOLD_WATTS`] while none of
//! its classes is in session is reported together with the nearest class of
//! the day, so facilities staff can tell a late finish from a forgotten
//! projector.

use chrono::NaiveTime;
use energy_data::RoomSnapshot;
use serde::Serialize;

/// Draw above which an idle room is considered anomalous.
pub const ANOMALY_POWER_THRESHOLD_WATTS: f64 = 50.0;

/// One scheduled class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSession {
    /// Room the class is held in.
    pub room_id: u32,
    /// Course or subject name.
    pub subject: String,
    /// Inclusive start.
    pub start: NaiveTime,
    /// Exclusive end.
    pub end: NaiveTime,
}

impl ClassSession {
    /// Returns `true` when `now` falls within `[start, end)`.
    pub fn is_in_session(&self, now: NaiveTime) -> bool {
        self.start <= now && now < self.end
    }
}

/// Nearest class to an anomaly, for context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleContext {
    /// The latest class that already ended today.
    PreviousClass {
        /// Subject of that class.
        subject: String,
        /// When it ended.
        ended_at: NaiveTime,
    },
    /// The next class starting later today.
    NextClass {
        /// Subject of that class.
        subject: String,
        /// When it starts.
        starts_at: NaiveTime,
    },
    /// The room has no classes today.
    NoClassToday,
}

impl ScheduleContext {
    /// One-line description for notifications.
    pub fn describe(&self) -> String {
        match self {
            Self::PreviousClass { subject, ended_at } => {
                format!("last class {subject} ended at {}", ended_at.format("%H:%M"))
            }
            Self::NextClass { subject, starts_at } => {
                format!("next class {subject} starts at {}", starts_at.format("%H:%M"))
            }
            Self::NoClassToday => "no class scheduled today".to_owned(),
        }
    }
}

/// A room drawing power outside its timetable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleAnomaly {
    /// Room identifier.
    pub room_id: u32,
    /// Room display name.
    pub room_name: String,
    /// Owning block.
    pub block: String,
    /// Current draw in watts.
    pub power: f64,
    /// Nearest class today.
    pub context: ScheduleContext,
    /// Human-readable summary.
    pub message: String,
}

/// Flag every room above the power threshold with no class in session.
///
/// `sessions` holds the timetable for the current weekday; rooms keep their
/// input order.
///
/// # Examples
/// ```
/// use backend::domain::{ClassSession, ScheduleContext, find_schedule_anomalies};
/// use chrono::NaiveTime;
/// use energy_data::{RoomSnapshot, RoomStatus, campus::ROOMS};
///
/// let room = RoomSnapshot::from_reading(&ROOMS[0], RoomStatus::Vacant, true, false, 120.0);
/// let session = ClassSession {
///     room_id: room.id,
///     subject: "Physics".to_owned(),
///     start: NaiveTime::from_hms_opt(9, 0, 0).expect("valid time"),
///     end: NaiveTime::from_hms_opt(10, 0, 0).expect("valid time"),
/// };
/// let now = NaiveTime::from_hms_opt(10, 30, 0).expect("valid time");
///
/// let anomalies = find_schedule_anomalies(&[room], &[session], now);
/// assert_eq!(anomalies.len(), 1);
/// assert!(matches!(anomalies[0].context, ScheduleContext::PreviousClass { .. }));
/// ```
pub fn find_schedule_anomalies(
    rooms: &[RoomSnapshot],
    sessions: &[ClassSession],
    now: NaiveTime,
) -> Vec<ScheduleAnomaly> {
    rooms
        .iter()
        .filter(|room| room.power > ANOMALY_POWER_THRESHOLD_WATTS)
        .filter_map(|room| {
            let classes: Vec<&ClassSession> = sessions
                .iter()
                .filter(|session| session.room_id == room.id)
                .collect();
            if classes.iter().any(|session| session.is_in_session(now)) {
                return None;
            }
            let context = context_for(&classes, now);
            let message = format!(
                "{} is drawing {} W outside class hours; {}",
                room.name,
                room.power,
                context.describe()
            );
            Some(ScheduleAnomaly {
                room_id: room.id,
                room_name: room.name.clone(),
                block: room.block.clone(),
                power: room.power,
                context,
                message,
            })
        })
        .collect()
}

fn context_for(classes: &[&ClassSession], now: NaiveTime) -> ScheduleContext {
    let previous = classes
        .iter()
        .filter(|session| session.end <= now)
        .max_by_key(|session| session.end);
    if let Some(session) = previous {
        return ScheduleContext::PreviousClass {
            subject: session.subject.clone(),
            ended_at: session.end,
        };
    }
    classes
        .iter()
        .filter(|session| session.start > now)
        .min_by_key(|session| session.start)
        .map_or(ScheduleContext::NoClassToday, |session| {
            ScheduleContext::NextClass {
                subject: session.subject.clone(),
                starts_at: session.start,
            }
        })
}
