//! Driven port for writing campus energy data to the remote store.
//!
//! Used by seeding. Every method replaces what is stored so repeated runs
//! converge on the same contents.

use async_trait::async_trait;

use crate::domain::{RecommendationRow, RoomStatusRow, StoredDay};

use super::EnergyStoreError;

/// Port for replacing stored energy data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnergyStoreWriter: Send + Sync {
    /// Replace every row held for the day in `day.stats.date`.
    async fn replace_day(&self, day: &StoredDay) -> Result<(), EnergyStoreError>;

    /// Replace the room status table.
    async fn replace_rooms(&self, rooms: &[RoomStatusRow]) -> Result<(), EnergyStoreError>;

    /// Replace the recommendation table.
    async fn replace_recommendations(
        &self,
        recommendations: &[RecommendationRow],
    ) -> Result<(), EnergyStoreError>;
}
