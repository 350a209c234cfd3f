//! Seeding configuration loaded via OrthoConfig.

use energy_data::DEFAULT_HISTORY_DAYS;
use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Configuration values controlling store seeding at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ENERGY_SEED")]
pub struct SeedSettings {
    /// Write a generated history window to the store on startup.
    #[ortho_config(default = false)]
    pub enabled: bool,
    /// Number of days to write, ending today.
    pub days: Option<usize>,
    /// Generator seed; random when absent.
    pub seed: Option<u64>,
}

impl SeedSettings {
    /// Return the configured window length, falling back to the default.
    pub fn days(&self) -> usize {
        self.days.unwrap_or(DEFAULT_HISTORY_DAYS)
    }
}
