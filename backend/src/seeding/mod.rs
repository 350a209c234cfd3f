//! Startup wiring for energy store seeding.

mod config;
mod startup;

pub use config::SeedSettings;
pub use startup::{StartupSeedingError, seed_energy_data_on_startup};
