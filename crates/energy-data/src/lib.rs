//! Scenario-driven synthetic energy data for a campus dashboard.
//!
//! This crate produces believable, reproducible [`DayRecord`]s for any
//! calendar date. It serves both as demo data and as the fallback when the
//! live store has nothing usable for a day. It is independent of backend
//! types so the backend can depend on it without cycles.
//!
//! # Overview
//!
//! Each day is assigned a [`Scenario`] (weekends are always
//! [`Scenario::Weekend`]; weekdays are drawn at random), and every field is
//! derived from that scenario's [`ScenarioProfile`]:
//!
//! - Total consumption and a seven point intraday trend
//! - Consumption per campus block
//! - Eight room snapshots with vacancy warnings
//! - Usage breakdown and a five room occupancy heatmap
//! - Scenario-specific waste events
//!
//! # Example
//!
//! ```
//! use energy_data::{DateKey, DayGenerator, Scenario};
//!
//! let generator = DayGenerator::seeded(42);
//! let saturday = DateKey::parse("2026-10-17").expect("valid date");
//! let record = generator.generate(&saturday);
//!
//! assert_eq!(record.scenario, Scenario::Weekend);
//! assert_eq!(record.blocks.len(), 5);
//! assert_eq!(record, generator.generate(&saturday));
//! ```

pub mod campus;
mod date_key;
mod error;
pub mod generate_cli;
mod generator;
mod record;
mod scenario;

pub use date_key::DateKey;
pub use error::{GenerationError, ParseLabelError};
pub use generator::{DEFAULT_HISTORY_DAYS, DayGenerator, DerivedFields, generate_day};
pub use record::{
    BlockConsumption, DayRecord, HeatmapRow, RiskLevel, RoomSnapshot, RoomStatus, TrendPoint,
    UsageShare, WasteEvent, is_wasting,
};
pub use scenario::{MAX_EVENT_PROBABILITY, Scenario, ScenarioProfile, select_scenario};
