//! Store seeding orchestration.
//!
//! Generates a trailing window of days and writes them, along with the
//! static room and recommendation lists, through the writer port. A failed
//! day is logged and counted; the run carries on with the next one.

use std::iter;
use std::sync::Arc;

use energy_data::{DateKey, DayGenerator};
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::ports::EnergyStoreWriter;
use crate::domain::{
    default_recommendations, default_rooms, recommendation_row, room_row, stored_day,
};

/// Counts from one seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnergySeedOutcome {
    /// Days written successfully.
    pub days_written: usize,
    /// Days whose write failed.
    pub days_failed: usize,
    /// Whether the room list was written.
    pub rooms_written: bool,
    /// Whether the recommendation list was written.
    pub recommendations_written: bool,
}

/// Service that writes generated data to the store.
#[derive(Clone)]
pub struct EnergyDataSeeder<W: ?Sized> {
    writer: Arc<W>,
    generator: DayGenerator,
    clock: Arc<dyn Clock>,
}

impl<W: ?Sized> EnergyDataSeeder<W> {
    /// Create a seeder.
    pub fn new(writer: Arc<W>, generator: DayGenerator, clock: Arc<dyn Clock>) -> Self {
        Self {
            writer,
            generator,
            clock,
        }
    }
}

impl<W> EnergyDataSeeder<W>
where
    W: EnergyStoreWriter + ?Sized,
{
    /// Seed `days` days ending today, then the static lists.
    pub async fn seed(&self, days: usize) -> EnergySeedOutcome {
        let today = DateKey::from_date(self.clock.local().date_naive());
        let mut outcome = EnergySeedOutcome::default();

        for date in iter::successors(Some(today), |date| date.days_before(1)).take(days) {
            let rows = stored_day(&self.generator.generate(&date));
            match self.writer.replace_day(&rows).await {
                Ok(()) => outcome.days_written += 1,
                Err(err) => {
                    warn!(date = %date, error = %err, "seeding day failed");
                    outcome.days_failed += 1;
                }
            }
        }

        let rooms: Vec<_> = default_rooms().iter().map(room_row).collect();
        match self.writer.replace_rooms(&rooms).await {
            Ok(()) => outcome.rooms_written = true,
            Err(err) => warn!(error = %err, "seeding room status failed"),
        }

        let recommendations: Vec<_> = default_recommendations()
            .iter()
            .map(recommendation_row)
            .collect();
        match self.writer.replace_recommendations(&recommendations).await {
            Ok(()) => outcome.recommendations_written = true,
            Err(err) => warn!(error = %err, "seeding recommendations failed"),
        }

        info!(
            days_written = outcome.days_written,
            days_failed = outcome.days_failed,
            "energy store seeding finished"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, TimeZone, Utc};
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::{EnergyStoreError, MockEnergyStoreWriter};

    struct FixtureClock;

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0)
                .single()
                .expect("valid fixture timestamp")
        }
    }

    fn seeder(writer: MockEnergyStoreWriter) -> EnergyDataSeeder<MockEnergyStoreWriter> {
        EnergyDataSeeder::new(
            Arc::new(writer),
            DayGenerator::seeded(5),
            Arc::new(FixtureClock),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn seeds_the_window_and_static_lists() {
        let mut writer = MockEnergyStoreWriter::new();
        writer.expect_replace_day().times(3).returning(|_| Ok(()));
        writer
            .expect_replace_rooms()
            .withf(|rooms| rooms.len() == 8)
            .times(1)
            .returning(|_| Ok(()));
        writer
            .expect_replace_recommendations()
            .withf(|recommendations| recommendations.len() == 4)
            .times(1)
            .returning(|_| Ok(()));

        let outcome = seeder(writer).seed(3).await;

        assert_eq!(
            outcome,
            EnergySeedOutcome {
                days_written: 3,
                days_failed: 0,
                rooms_written: true,
                recommendations_written: true,
            }
        );
    }

    #[rstest]
    #[tokio::test]
    async fn failed_days_are_counted_and_skipped() {
        let mut writer = MockEnergyStoreWriter::new();
        let mut calls = 0_usize;
        writer.expect_replace_day().times(4).returning(move |_| {
            calls += 1;
            if calls % 2 == 0 {
                Err(EnergyStoreError::query("duplicate key"))
            } else {
                Ok(())
            }
        });
        writer.expect_replace_rooms().returning(|_| Ok(()));
        writer
            .expect_replace_recommendations()
            .returning(|_| Err(EnergyStoreError::connection("reset")));

        let outcome = seeder(writer).seed(4).await;

        assert_eq!(outcome.days_written, 2);
        assert_eq!(outcome.days_failed, 2);
        assert!(outcome.rooms_written);
        assert!(!outcome.recommendations_written);
    }

    #[rstest]
    #[tokio::test]
    async fn zero_days_writes_only_static_lists() {
        let mut writer = MockEnergyStoreWriter::new();
        writer.expect_replace_day().times(0);
        writer.expect_replace_rooms().times(1).returning(|_| Ok(()));
        writer
            .expect_replace_recommendations()
            .times(1)
            .returning(|_| Ok(()));

        let outcome = seeder(writer).seed(0).await;

        assert_eq!(outcome.days_written, 0);
    }
}
