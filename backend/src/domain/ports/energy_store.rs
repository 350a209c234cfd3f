//! Driven port for reading campus energy data from the remote store.
//!
//! The store holds per-day statistics spread over several tables. Adapters
//! return the raw rows; the domain decides whether they form a usable
//! record.

use async_trait::async_trait;
use chrono::Weekday;
use energy_data::DateKey;

use crate::domain::{ClassScheduleRow, RecommendationRow, RoomStatusRow, StoredDay};

use super::define_port_error;

define_port_error! {
    /// Errors raised by energy store adapters.
    pub enum EnergyStoreError {
        /// The store could not be reached.
        Connection { message: String } => "energy store connection failed: {message}",
        /// The store rejected or failed the query.
        Query { message: String } => "energy store query failed: {message}",
        /// The response body did not match the expected rows.
        Decode { message: String } => "energy store response decode failed: {message}",
        /// The store did not answer in time.
        Timeout { message: String } => "energy store timed out: {message}",
    }
}

/// Port for reading stored energy data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnergyStore: Send + Sync {
    /// Fetch the rows stored for `date`.
    ///
    /// Returns `Ok(None)` when no `daily_stats` row exists for the date.
    /// Trend, block and waste rows are returned as stored; an empty list is
    /// not an error.
    async fn find_day(&self, date: &DateKey) -> Result<Option<StoredDay>, EnergyStoreError>;

    /// Fetch the current room status rows.
    async fn list_rooms(&self) -> Result<Vec<RoomStatusRow>, EnergyStoreError>;

    /// Fetch the stored recommendation rows.
    async fn list_recommendations(&self) -> Result<Vec<RecommendationRow>, EnergyStoreError>;

    /// Fetch the class timetable for one day of the week.
    async fn list_timetable(
        &self,
        weekday: Weekday,
    ) -> Result<Vec<ClassScheduleRow>, EnergyStoreError>;
}

/// Fixture store that holds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureEnergyStore;

#[async_trait]
impl EnergyStore for FixtureEnergyStore {
    async fn find_day(&self, _date: &DateKey) -> Result<Option<StoredDay>, EnergyStoreError> {
        Ok(None)
    }

    async fn list_rooms(&self) -> Result<Vec<RoomStatusRow>, EnergyStoreError> {
        Ok(Vec::new())
    }

    async fn list_recommendations(&self) -> Result<Vec<RecommendationRow>, EnergyStoreError> {
        Ok(Vec::new())
    }

    async fn list_timetable(
        &self,
        _weekday: Weekday,
    ) -> Result<Vec<ClassScheduleRow>, EnergyStoreError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_store_is_empty() {
        let store = FixtureEnergyStore;
        let date = DateKey::parse("2026-10-19").expect("valid date");

        assert!(store.find_day(&date).await.expect("find day").is_none());
        assert!(store.list_rooms().await.expect("rooms").is_empty());
        assert!(
            store
                .list_timetable(Weekday::Mon)
                .await
                .expect("timetable")
                .is_empty()
        );
    }

    #[rstest]
    #[case(EnergyStoreError::connection("refused"), "energy store connection failed: refused")]
    #[case(EnergyStoreError::timeout("10s"), "energy store timed out: 10s")]
    fn errors_render_their_message(#[case] err: EnergyStoreError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }
}
