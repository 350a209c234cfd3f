//! Scenario-driven day synthesis.
//!
//! A day is built by drawing its scenario, then filling every field from
//! that scenario's profile with bounded random jitter. [`DayGenerator`]
//! derives an independent ChaCha stream per date from its seed, so the same
//! seed and date always yield the same record regardless of the order in
//! which days are requested.

mod derived;
mod rooms;
mod waste;

use std::iter;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::campus::{BLOCKS, TREND_TIMES};
use crate::date_key::DateKey;
use crate::error::GenerationError;
use crate::record::{BlockConsumption, DayRecord, HeatmapRow, RoomSnapshot, TrendPoint, UsageShare};
use crate::scenario::{MAX_EVENT_PROBABILITY, Scenario, ScenarioProfile, select_scenario};

/// Default length of the trailing history window.
pub const DEFAULT_HISTORY_DAYS: usize = 30;

/// Width of the uniform jitter added to a scenario's base total.
const TOTAL_SPREAD: f64 = 2000.0;

/// Jitter ceiling per trend sample, in the order of the sample times.
const TREND_JITTER: [f64; 7] = [50.0, 50.0, 100.0, 200.0, 150.0, 100.0, 50.0];

/// Salt separating the derived-field stream from the full-record stream.
const DERIVED_STREAM: u64 = 0xD1B5_4A32_D192_ED03;

/// Fields that the store never holds and are always synthesised.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedFields {
    /// Room snapshots.
    pub rooms: Vec<RoomSnapshot>,
    /// Usage breakdown.
    pub usage_breakdown: Vec<UsageShare>,
    /// Occupancy heatmap.
    pub heatmap: Vec<HeatmapRow>,
}

/// Generates a day record for `date` using the supplied RNG.
///
/// EVENT is never selected; use [`DayGenerator::with_event_probability`] to
/// enable it.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidDate`] when `date` is not a valid
/// `YYYY-MM-DD` key.
///
/// # Example
///
/// ```
/// use energy_data::{Scenario, generate_day};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let record = generate_day("2026-10-17", &mut rng).expect("valid date");
///
/// assert_eq!(record.scenario, Scenario::Weekend);
/// assert_eq!(record.trends.len(), 7);
/// assert!(generate_day("not-a-date", &mut rng).is_err());
/// ```
pub fn generate_day<R: Rng + ?Sized>(
    date: &str,
    rng: &mut R,
) -> Result<DayRecord, GenerationError> {
    let key = DateKey::parse(date)?;
    Ok(build_record(key, 0.0, rng))
}

fn build_record<R: Rng + ?Sized>(date: DateKey, event_probability: f64, rng: &mut R) -> DayRecord {
    // Always draw, so weekend days consume the same amount of the stream.
    let draw: f64 = rng.random();
    let scenario = select_scenario(&date, draw, event_probability);
    let profile = scenario.profile();

    let total_consumption = (profile.base + rng.random::<f64>() * TOTAL_SPREAD).floor();
    let trends = trends(profile, rng);
    let waste_events = waste::waste_events(scenario, rng);
    let DerivedFields {
        rooms,
        usage_breakdown,
        heatmap,
    } = derive_fields(scenario, rng);

    DayRecord {
        date,
        scenario,
        total_consumption,
        trends,
        blocks: blocks(profile, total_consumption),
        rooms,
        usage_breakdown,
        heatmap,
        waste_events,
    }
}

fn trends<R: Rng + ?Sized>(profile: &ScenarioProfile, rng: &mut R) -> Vec<TrendPoint> {
    TREND_TIMES
        .iter()
        .zip(profile.trend_curve)
        .zip(TREND_JITTER)
        .map(|((time, baseline), jitter)| TrendPoint {
            time: (*time).to_owned(),
            energy: baseline + rng.random::<f64>() * jitter,
        })
        .collect()
}

fn blocks(profile: &ScenarioProfile, total: f64) -> Vec<BlockConsumption> {
    BLOCKS
        .iter()
        .zip(profile.block_fractions)
        .map(|(block, fraction)| BlockConsumption {
            block: (*block).to_owned(),
            consumption: (total * fraction).floor(),
        })
        .collect()
}

fn derive_fields<R: Rng + ?Sized>(scenario: Scenario, rng: &mut R) -> DerivedFields {
    DerivedFields {
        rooms: rooms::generate_rooms(scenario, rng),
        usage_breakdown: derived::usage_breakdown(scenario, rng),
        heatmap: derived::heatmap(scenario, rng),
    }
}

/// Seeded generator producing reproducible records per date.
///
/// # Example
///
/// ```
/// use energy_data::{DateKey, DayGenerator};
///
/// let generator = DayGenerator::seeded(2026);
/// let date = DateKey::parse("2026-10-19").expect("valid date");
///
/// assert_eq!(generator.generate(&date), generator.generate(&date));
///
/// let history = generator.history(date, 30);
/// assert_eq!(history.len(), 30);
/// assert_eq!(history.first().map(|day| day.date), Some(date));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayGenerator {
    seed: u64,
    event_probability: f64,
}

impl DayGenerator {
    /// Creates a generator with a fixed seed and EVENT disabled.
    #[must_use]
    pub const fn seeded(seed: u64) -> Self {
        Self {
            seed,
            event_probability: 0.0,
        }
    }

    /// Creates a generator with a seed drawn from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::seeded(rand::rng().random())
    }

    /// Creates a seeded generator, or an entropy-seeded one for `None`.
    #[must_use]
    pub fn with_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Enables the EVENT scenario with probability `probability` on weekdays.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidEventProbability`] unless
    /// `probability` lies within `[0, 0.7]`.
    pub fn with_event_probability(self, probability: f64) -> Result<Self, GenerationError> {
        if !(0.0..=MAX_EVENT_PROBABILITY).contains(&probability) {
            return Err(GenerationError::InvalidEventProbability { value: probability });
        }
        Ok(Self {
            event_probability: probability,
            ..self
        })
    }

    /// Seed in use.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Configured EVENT probability.
    #[must_use]
    pub const fn event_probability(&self) -> f64 {
        self.event_probability
    }

    /// Generates the record for `date`.
    #[must_use]
    pub fn generate(&self, date: &DateKey) -> DayRecord {
        let mut rng = self.rng_for(date, 0);
        build_record(*date, self.event_probability, &mut rng)
    }

    /// Generates `days` consecutive records ending at `end`, newest first.
    ///
    /// Stops early if the calendar runs out before `days` records.
    #[must_use]
    pub fn history(&self, end: DateKey, days: usize) -> Vec<DayRecord> {
        iter::successors(Some(end), |date| date.days_before(1))
            .take(days)
            .map(|date| self.generate(&date))
            .collect()
    }

    /// Generates rooms, usage breakdown and heatmap for a known scenario.
    ///
    /// Used to complete records read from storage, which only hold totals,
    /// trends, blocks and waste events.
    #[must_use]
    pub fn derived_fields(&self, date: &DateKey, scenario: Scenario) -> DerivedFields {
        let mut rng = self.rng_for(date, DERIVED_STREAM);
        derive_fields(scenario, &mut rng)
    }

    fn rng_for(&self, date: &DateKey, stream: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed ^ date.seed_mix() ^ stream)
    }
}
