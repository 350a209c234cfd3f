//! Driving port for dashboard reads.
//!
//! Inbound adapters depend on this trait instead of the resolver type so
//! handlers can be tested against a mock.

use async_trait::async_trait;
use energy_data::{DateKey, DayRecord, RoomSnapshot};

use crate::domain::{Insight, Recommendation, ResolvedDay, ScheduleAnomaly};

/// Use-case port for everything the dashboard reads.
///
/// None of these calls fail: storage problems are absorbed into generated
/// fallbacks or empty lists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnergyDashboardQuery: Send + Sync {
    /// Resolve one day and report where it came from.
    async fn day(&self, date: &DateKey) -> ResolvedDay;

    /// Resolve the current local day.
    async fn today(&self) -> ResolvedDay;

    /// Resolve `days` consecutive days ending at `end` (today when `None`),
    /// newest first.
    async fn history(&self, end: Option<DateKey>, days: usize) -> Vec<DayRecord>;

    /// Derive recommendations from the waste events of one day.
    async fn insights(&self, date: &DateKey) -> Vec<Insight>;

    /// Current room snapshots from the store.
    async fn rooms(&self) -> Vec<RoomSnapshot>;

    /// Stored recommendations.
    async fn recommendations(&self) -> Vec<Recommendation>;

    /// Rooms drawing power while no class is in session.
    async fn schedule_anomalies(&self) -> Vec<ScheduleAnomaly>;
}
