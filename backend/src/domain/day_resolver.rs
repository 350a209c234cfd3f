//! Resolves dashboard data from the store, falling back to generated data.
//!
//! Every day-level read returns a complete [`DayRecord`]. When the store is
//! unreachable, has no row for the day, or holds rows that do not form a
//! usable record, the resolver generates the day instead and logs the reason
//! at `warn`. Callers cannot tell the difference unless they ask for a
//! [`ResolvedDay`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Datelike;
use energy_data::{DateKey, DayGenerator, DayRecord, RoomSnapshot};
use mockable::Clock;
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use crate::domain::ports::{EnergyDashboardQuery, EnergyStore, EnergyStoreError};
use crate::domain::{
    Error, Insight, Recommendation, ScheduleAnomaly, class_session, derive_insights,
    find_schedule_anomalies, live_day, recommendation, room_snapshot,
};

/// Why a day was generated instead of read from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// The store could not be reached or failed the query.
    UpstreamUnavailable,
    /// The store has no row for the day.
    MissingRecord,
    /// The stored rows are not a usable record.
    IncompleteRecord,
}

/// Where a resolved day came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySource {
    /// Read from the store.
    Live,
    /// Synthesised by the generator.
    Generated(FallbackReason),
}

impl DaySource {
    /// Returns `true` for data read from the store.
    pub fn is_live(self) -> bool {
        matches!(self, Self::Live)
    }

    /// The fallback reason for generated data.
    pub fn fallback_reason(self) -> Option<FallbackReason> {
        match self {
            Self::Live => None,
            Self::Generated(reason) => Some(reason),
        }
    }
}

/// A resolved day together with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDay {
    /// The complete record.
    pub record: DayRecord,
    /// Where it came from.
    pub source: DaySource,
}

/// Data resolver over an [`EnergyStore`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use backend::domain::DayDataResolver;
/// use backend::domain::ports::FixtureEnergyStore;
/// use energy_data::{DateKey, DayGenerator};
/// use mockable::DefaultClock;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let resolver = DayDataResolver::new(
///     Arc::new(FixtureEnergyStore),
///     DayGenerator::seeded(42),
///     Arc::new(DefaultClock),
/// );
/// let date = DateKey::parse("2099-01-01").expect("valid date");
/// let resolved = resolver.resolve_day_detailed(&date).await;
/// assert!(!resolved.source.is_live());
/// # });
/// ```
#[derive(Clone)]
pub struct DayDataResolver<S: ?Sized> {
    store: Arc<S>,
    generator: DayGenerator,
    clock: Arc<dyn Clock>,
}

impl<S: ?Sized> DayDataResolver<S> {
    /// Create a resolver.
    pub fn new(store: Arc<S>, generator: DayGenerator, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            generator,
            clock,
        }
    }

    /// The current local day according to the clock.
    pub fn today_key(&self) -> DateKey {
        DateKey::from_date(self.clock.local().date_naive())
    }

    fn generated(&self, date: &DateKey, reason: FallbackReason) -> ResolvedDay {
        ResolvedDay {
            record: self.generator.generate(date),
            source: DaySource::Generated(reason),
        }
    }
}

impl<S> DayDataResolver<S>
where
    S: EnergyStore + ?Sized,
{
    /// Resolve `date` and report whether it is live or generated.
    pub async fn resolve_day_detailed(&self, date: &DateKey) -> ResolvedDay {
        let stored = match self.store.find_day(date).await {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                warn!(
                    date = %date,
                    reason = ?FallbackReason::MissingRecord,
                    "no stored day; generating"
                );
                return self.generated(date, FallbackReason::MissingRecord);
            }
            Err(err) => {
                let reason = reason_for(&err);
                warn!(
                    date = %date,
                    reason = ?reason,
                    error = %err,
                    "store read failed; generating"
                );
                return self.generated(date, reason);
            }
        };
        match live_day(&stored) {
            Ok(live) => {
                let derived = self.generator.derived_fields(date, live.scenario);
                ResolvedDay {
                    record: live.into_record(derived),
                    source: DaySource::Live,
                }
            }
            Err(err) => {
                let reason = FallbackReason::IncompleteRecord;
                warn!(
                    date = %date,
                    reason = ?reason,
                    error = %err,
                    "stored day unusable; generating"
                );
                self.generated(date, reason)
            }
        }
    }

    /// Resolve `date` to a complete record.
    pub async fn resolve_day(&self, date: &DateKey) -> DayRecord {
        self.resolve_day_detailed(date).await.record
    }

    /// Resolve a raw `YYYY-MM-DD` key.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] with code `InvalidRequest` when `date` is
    /// malformed. Storage failures never surface here.
    pub async fn resolve_day_str(&self, date: &str) -> Result<DayRecord, Error> {
        let key = DateKey::parse(date).map_err(|err| {
            Error::invalid_request(err.to_string())
                .with_details(json!({ "field": "date", "value": date }))
        })?;
        Ok(self.resolve_day(&key).await)
    }

    /// Resolve the current local day.
    pub async fn current_day(&self) -> DayRecord {
        self.resolve_day(&self.today_key()).await
    }

    /// Resolve `days` consecutive days ending at `end`, newest first.
    pub async fn history(&self, end: DateKey, days: usize) -> Vec<DayRecord> {
        let mut records = Vec::with_capacity(days);
        let mut cursor = Some(end);
        while let Some(date) = cursor {
            if records.len() == days {
                break;
            }
            records.push(self.resolve_day(&date).await);
            cursor = date.days_before(1);
        }
        records
    }

    /// Current room snapshots from the store, or nothing on any failure.
    pub async fn rooms(&self) -> Vec<RoomSnapshot> {
        let rows = match self.store.list_rooms().await {
            Ok(rows) => rows,
            Err(err) => {
                warn!(error = %err, "room status read failed");
                return Vec::new();
            }
        };
        rows.iter()
            .map(room_snapshot)
            .collect::<Result<Vec<_>, _>>()
            .unwrap_or_else(|err| {
                warn!(error = %err, "room status rows unusable");
                Vec::new()
            })
    }

    /// Stored recommendations, or nothing on any failure.
    pub async fn recommendations(&self) -> Vec<Recommendation> {
        let rows = match self.store.list_recommendations().await {
            Ok(rows) => rows,
            Err(err) => {
                warn!(error = %err, "recommendation read failed");
                return Vec::new();
            }
        };
        rows.iter()
            .map(recommendation)
            .collect::<Result<Vec<_>, _>>()
            .unwrap_or_else(|err| {
                warn!(error = %err, "recommendation rows unusable");
                Vec::new()
            })
    }

    /// Rooms drawing power while none of their classes is in session.
    ///
    /// Uses the clock's local weekday and time. Any store failure yields an
    /// empty list.
    pub async fn schedule_anomalies(&self) -> Vec<ScheduleAnomaly> {
        let now = self.clock.local();
        let weekday = now.weekday();
        let rooms = self.rooms().await;
        if rooms.is_empty() {
            return Vec::new();
        }
        let rows = match self.store.list_timetable(weekday).await {
            Ok(rows) => rows,
            Err(err) => {
                warn!(weekday = %weekday, error = %err, "timetable read failed");
                return Vec::new();
            }
        };
        let sessions = match rows.iter().map(class_session).collect::<Result<Vec<_>, _>>() {
            Ok(sessions) => sessions,
            Err(err) => {
                warn!(weekday = %weekday, error = %err, "timetable rows unusable");
                return Vec::new();
            }
        };
        find_schedule_anomalies(&rooms, &sessions, now.time())
    }
}

fn reason_for(err: &EnergyStoreError) -> FallbackReason {
    match err {
        EnergyStoreError::Decode { .. } => FallbackReason::IncompleteRecord,
        EnergyStoreError::Connection { .. }
        | EnergyStoreError::Query { .. }
        | EnergyStoreError::Timeout { .. } => FallbackReason::UpstreamUnavailable,
    }
}

#[async_trait]
impl<S> EnergyDashboardQuery for DayDataResolver<S>
where
    S: EnergyStore + ?Sized,
{
    async fn day(&self, date: &DateKey) -> ResolvedDay {
        self.resolve_day_detailed(date).await
    }

    async fn today(&self) -> ResolvedDay {
        self.resolve_day_detailed(&self.today_key()).await
    }

    async fn history(&self, end: Option<DateKey>, days: usize) -> Vec<DayRecord> {
        let end = end.unwrap_or_else(|| self.today_key());
        DayDataResolver::history(self, end, days).await
    }

    async fn insights(&self, date: &DateKey) -> Vec<Insight> {
        derive_insights(&self.resolve_day(date).await)
    }

    async fn rooms(&self) -> Vec<RoomSnapshot> {
        DayDataResolver::rooms(self).await
    }

    async fn recommendations(&self) -> Vec<Recommendation> {
        DayDataResolver::recommendations(self).await
    }

    async fn schedule_anomalies(&self) -> Vec<ScheduleAnomaly> {
        DayDataResolver::schedule_anomalies(self).await
    }
}
