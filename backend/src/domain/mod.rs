//! Domain services and types for the energy dashboard.
//!
//! Purpose: resolve campus energy data from the store with a generated
//! fallback, derive insights and schedule anomalies, and seed the store.
//! Nothing here depends on HTTP or a particular store client.
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic error payload.
//! - DayDataResolver: store-first day resolution with generated fallback.
//! - EnergyDataSeeder: writes a generated window to the store.
//! - StoredDay and the other row types: the store layout, with conversions
//!   to and from records.

pub mod error;
pub mod ports;

mod catalogue;
mod day_resolver;
mod energy_seeding;
mod insights;
mod normalize;
mod recommendation;
mod timetable;

pub use self::catalogue::{default_recommendations, default_rooms};
pub use self::day_resolver::{DayDataResolver, DaySource, FallbackReason, ResolvedDay};
pub use self::energy_seeding::{EnergyDataSeeder, EnergySeedOutcome};
pub use self::error::{Error, ErrorCode};
pub use self::insights::{Insight, derive_insights, savings_for};
pub use self::normalize::{
    BlockConsumptionRow, ClassScheduleRow, DailyStatsRow, HourlyTrendRow, LiveDay,
    NormalizeError, RecommendationRow, RoomStatusRow, StoredDay, WasteEventRow, class_session,
    live_day, recommendation, recommendation_row, room_row, room_snapshot, stored_day,
};
pub use self::recommendation::{Recommendation, RecommendationKind};
pub use self::timetable::{
    ANOMALY_POWER_THRESHOLD_WATTS, ClassSession, ScheduleAnomaly, ScheduleContext,
    find_schedule_anomalies,
};
