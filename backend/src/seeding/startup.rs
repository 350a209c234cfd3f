//! Startup seeding orchestration.

use std::sync::Arc;

use energy_data::DayGenerator;
use mockable::DefaultClock;
use thiserror::Error;
use tracing::info;

use crate::domain::ports::EnergyStoreWriter;
use crate::domain::{EnergyDataSeeder, EnergySeedOutcome};
use crate::seeding::config::SeedSettings;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StartupSeedingError {
    /// The seeding window must cover at least one day.
    #[error("seeding window must cover at least one day")]
    EmptyWindow,
}

/// Write generated data to the store on startup when enabled.
///
/// Returns `Ok(None)` when seeding is disabled. Individual day failures do
/// not abort the run; they are counted in the returned outcome.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use backend::outbound::memory::InMemoryEnergyStore;
/// use backend::seeding::{SeedSettings, seed_energy_data_on_startup};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = SeedSettings {
///     enabled: true,
///     days: Some(7),
///     seed: Some(42),
/// };
/// let store = Arc::new(InMemoryEnergyStore::new());
/// let outcome = seed_energy_data_on_startup(&settings, store).await?;
/// assert_eq!(outcome.map(|o| o.days_written), Some(7));
/// # Ok(())
/// # }
/// ```
pub async fn seed_energy_data_on_startup<W>(
    settings: &SeedSettings,
    writer: Arc<W>,
) -> Result<Option<EnergySeedOutcome>, StartupSeedingError>
where
    W: EnergyStoreWriter + ?Sized,
{
    if !settings.enabled {
        info!(reason = "disabled", "energy store seeding skipped");
        return Ok(None);
    }

    let days = settings.days();
    if days == 0 {
        return Err(StartupSeedingError::EmptyWindow);
    }

    let generator = DayGenerator::with_optional_seed(settings.seed);
    let seeder = EnergyDataSeeder::new(writer, generator, Arc::new(DefaultClock));
    let outcome = seeder.seed(days).await;
    info!(
        seed = generator.seed(),
        days_written = outcome.days_written,
        days_failed = outcome.days_failed,
        "energy store seeding applied"
    );
    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::memory::InMemoryEnergyStore;
    use rstest::rstest;

    fn settings(enabled: bool, days: Option<usize>) -> SeedSettings {
        SeedSettings {
            enabled,
            days,
            seed: Some(7),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn disabled_seeding_writes_nothing() {
        let store = Arc::new(InMemoryEnergyStore::new());
        let outcome = seed_energy_data_on_startup(&settings(false, Some(3)), store.clone())
            .await
            .expect("disabled seeding succeeds");
        assert!(outcome.is_none());
        assert_eq!(store.day_count().await, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn enabled_seeding_fills_the_window() {
        let store = Arc::new(InMemoryEnergyStore::new());
        let outcome = seed_energy_data_on_startup(&settings(true, Some(5)), store.clone())
            .await
            .expect("seeding succeeds")
            .expect("seeding ran");
        assert_eq!(outcome.days_written, 5);
        assert_eq!(outcome.days_failed, 0);
        assert!(outcome.rooms_written);
        assert_eq!(store.day_count().await, 5);
    }

    #[rstest]
    #[tokio::test]
    async fn zero_day_window_is_rejected() {
        let store = Arc::new(InMemoryEnergyStore::new());
        let err = seed_energy_data_on_startup(&settings(true, Some(0)), store)
            .await
            .expect_err("empty window");
        assert_eq!(err, StartupSeedingError::EmptyWindow);
    }
}
