//! In-memory energy store.
//!
//! Backs local runs without a remote store, and behaviour tests. Writes
//! replace whole tables just as the REST adapter does.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Weekday;
use energy_data::DateKey;
use tokio::sync::RwLock;

use crate::domain::ports::{EnergyStore, EnergyStoreError, EnergyStoreWriter};
use crate::domain::{ClassScheduleRow, RecommendationRow, RoomStatusRow, StoredDay};

#[derive(Debug, Default)]
struct Tables {
    days: BTreeMap<DateKey, StoredDay>,
    rooms: Vec<RoomStatusRow>,
    recommendations: Vec<RecommendationRow>,
    timetable: Vec<ClassScheduleRow>,
}

/// Energy store held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryEnergyStore {
    tables: RwLock<Tables>,
}

impl InMemoryEnergyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the class timetable for every weekday.
    pub async fn replace_timetable(&self, rows: Vec<ClassScheduleRow>) {
        self.tables.write().await.timetable = rows;
    }

    /// Number of stored days.
    pub async fn day_count(&self) -> usize {
        self.tables.read().await.days.len()
    }
}

#[async_trait]
impl EnergyStore for InMemoryEnergyStore {
    async fn find_day(&self, date: &DateKey) -> Result<Option<StoredDay>, EnergyStoreError> {
        Ok(self.tables.read().await.days.get(date).cloned())
    }

    async fn list_rooms(&self) -> Result<Vec<RoomStatusRow>, EnergyStoreError> {
        Ok(self.tables.read().await.rooms.clone())
    }

    async fn list_recommendations(&self) -> Result<Vec<RecommendationRow>, EnergyStoreError> {
        Ok(self.tables.read().await.recommendations.clone())
    }

    async fn list_timetable(
        &self,
        weekday: Weekday,
    ) -> Result<Vec<ClassScheduleRow>, EnergyStoreError> {
        let day = weekday.number_from_monday();
        let mut rows: Vec<ClassScheduleRow> = self
            .tables
            .read()
            .await
            .timetable
            .iter()
            .filter(|row| row.day_of_week == day)
            .cloned()
            .collect();
        rows.sort_by(|left, right| left.start_time.cmp(&right.start_time));
        Ok(rows)
    }
}

#[async_trait]
impl EnergyStoreWriter for InMemoryEnergyStore {
    async fn replace_day(&self, day: &StoredDay) -> Result<(), EnergyStoreError> {
        self.tables
            .write()
            .await
            .days
            .insert(day.stats.date, day.clone());
        Ok(())
    }

    async fn replace_rooms(&self, rooms: &[RoomStatusRow]) -> Result<(), EnergyStoreError> {
        self.tables.write().await.rooms = rooms.to_vec();
        Ok(())
    }

    async fn replace_recommendations(
        &self,
        recommendations: &[RecommendationRow],
    ) -> Result<(), EnergyStoreError> {
        self.tables.write().await.recommendations = recommendations.to_vec();
        Ok(())
    }
}
