//! Behaviour tests for store-first day resolution.
//!
//! Scenarios run the real resolver over the in-memory store, or over a store
//! whose every call fails, to show that callers always receive a day.

use std::sync::Arc;

use async_trait::async_trait;
use backend::domain::ports::{EnergyStore, EnergyStoreError, EnergyStoreWriter};
use backend::domain::{
    ClassScheduleRow, DayDataResolver, ErrorCode, RecommendationRow, ResolvedDay, RoomStatusRow,
    StoredDay, stored_day,
};
use backend::outbound::memory::InMemoryEnergyStore;
use chrono::Weekday;
use energy_data::{DateKey, DayGenerator};
use mockable::DefaultClock;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use tokio::runtime::Runtime;

const RESOLVER_SEED: u64 = 42;

/// Store that rejects every call as if the connection had dropped.
struct UnreachableStore;

#[async_trait]
impl EnergyStore for UnreachableStore {
    async fn find_day(&self, _date: &DateKey) -> Result<Option<StoredDay>, EnergyStoreError> {
        Err(EnergyStoreError::connection("connection refused"))
    }

    async fn list_rooms(&self) -> Result<Vec<RoomStatusRow>, EnergyStoreError> {
        Err(EnergyStoreError::connection("connection refused"))
    }

    async fn list_recommendations(&self) -> Result<Vec<RecommendationRow>, EnergyStoreError> {
        Err(EnergyStoreError::connection("connection refused"))
    }

    async fn list_timetable(
        &self,
        _weekday: Weekday,
    ) -> Result<Vec<ClassScheduleRow>, EnergyStoreError> {
        Err(EnergyStoreError::connection("connection refused"))
    }
}

/// Wrapper for the non-Clone runtime.
#[derive(Clone)]
struct RuntimeHandle(Arc<Runtime>);

#[derive(Default, ScenarioState)]
struct ResolverWorld {
    runtime: Slot<RuntimeHandle>,
    resolver: Slot<Arc<DayDataResolver<dyn EnergyStore>>>,
    stored_total: Slot<f64>,
    resolved: Slot<Vec<ResolvedDay>>,
    rejection: Slot<ErrorCode>,
}

impl ResolverWorld {
    fn runtime(&self) -> Arc<Runtime> {
        self.runtime.get().expect("runtime should be set").0
    }

    fn resolver(&self) -> Arc<DayDataResolver<dyn EnergyStore>> {
        self.resolver.get().expect("store should be configured")
    }

    fn install(&self, store: Arc<dyn EnergyStore>) {
        let resolver = DayDataResolver::new(
            store,
            DayGenerator::seeded(RESOLVER_SEED),
            Arc::new(DefaultClock),
        );
        self.resolver.set(Arc::new(resolver));
    }

    fn last(&self) -> ResolvedDay {
        self.resolved
            .get()
            .and_then(|days| days.last().cloned())
            .expect("a day should be resolved")
    }
}

#[fixture]
fn world() -> ResolverWorld {
    let world = ResolverWorld::default();
    world
        .runtime
        .set(RuntimeHandle(Arc::new(Runtime::new().expect("create runtime"))));
    world
}

fn parse_date(value: &str) -> DateKey {
    DateKey::parse(value).expect("valid date")
}

// ============================================================================
// Given steps
// ============================================================================

#[given("an empty store")]
fn an_empty_store(world: &ResolverWorld) {
    world.install(Arc::new(InMemoryEnergyStore::new()));
}

#[given("a store that always fails")]
fn a_store_that_always_fails(world: &ResolverWorld) {
    world.install(Arc::new(UnreachableStore));
}

#[given("a store holding the generated day \"{date}\" from seed {seed:u64}")]
fn a_store_holding_the_generated_day(world: &ResolverWorld, date: String, seed: u64) {
    let record = DayGenerator::seeded(seed).generate(&parse_date(&date));
    let store = Arc::new(InMemoryEnergyStore::new());
    world
        .runtime()
        .block_on(store.replace_day(&stored_day(&record)))
        .expect("in-memory write succeeds");
    world.stored_total.set(record.total_consumption);
    world.install(store);
}

// ============================================================================
// When steps
// ============================================================================

#[when("the day \"{date}\" is resolved")]
fn the_day_is_resolved(world: &ResolverWorld, date: String) {
    let key = parse_date(&date);
    let resolver = world.resolver();
    let resolved = world
        .runtime()
        .block_on(async { resolver.resolve_day_detailed(&key).await });
    world.resolved.set(vec![resolved]);
}

#[when("the day \"{date}\" is resolved {count:usize} times")]
fn the_day_is_resolved_repeatedly(world: &ResolverWorld, date: String, count: usize) {
    let key = parse_date(&date);
    let resolver = world.resolver();
    let resolved = world.runtime().block_on(async {
        let mut days = Vec::with_capacity(count);
        for _ in 0..count {
            days.push(resolver.resolve_day_detailed(&key).await);
        }
        days
    });
    world.resolved.set(resolved);
}

#[when("the date string \"{value}\" is resolved")]
fn the_date_string_is_resolved(world: &ResolverWorld, value: String) {
    let resolver = world.resolver();
    let result = world
        .runtime()
        .block_on(async { resolver.resolve_day_str(&value).await });
    if let Err(err) = result {
        world.rejection.set(err.code());
    }
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the day is served live")]
fn the_day_is_served_live(world: &ResolverWorld) {
    assert!(world.last().source.is_live());
}

#[then("the total matches the stored day")]
fn the_total_matches_the_stored_day(world: &ResolverWorld) {
    let stored = world.stored_total.get().expect("stored total");
    assert_eq!(world.last().record.total_consumption, stored);
}

#[then("the day is generated because \"{reason}\"")]
fn the_day_is_generated_because(world: &ResolverWorld, reason: String) {
    let source = world.last().source;
    let actual = source.fallback_reason().expect("day should be generated");
    assert_eq!(serde_json::to_value(actual).expect("reason serializes"), reason);
}

#[then("every resolution is generated because \"{reason}\"")]
fn every_resolution_is_generated_because(world: &ResolverWorld, reason: String) {
    let resolved = world.resolved.get().expect("days resolved");
    assert!(!resolved.is_empty());
    for day in resolved {
        let actual = day.source.fallback_reason().expect("day should be generated");
        assert_eq!(serde_json::to_value(actual).expect("reason serializes"), reason);
    }
}

#[then("the record is dated \"{date}\"")]
fn the_record_is_dated(world: &ResolverWorld, date: String) {
    assert_eq!(world.last().record.date.to_string(), date);
}

#[then("the scenario is \"{label}\"")]
fn the_scenario_is(world: &ResolverWorld, label: String) {
    assert_eq!(world.last().record.scenario.as_str(), label);
}

#[then("the total consumption lies within {low:u32} and {high:u32}")]
fn the_total_consumption_lies_within(world: &ResolverWorld, low: u32, high: u32) {
    let total = world.last().record.total_consumption;
    let range = f64::from(low)..f64::from(high);
    assert!(range.contains(&total), "total {total} outside [{low}, {high})");
}

#[then("the request is rejected as invalid")]
fn the_request_is_rejected_as_invalid(world: &ResolverWorld) {
    assert_eq!(world.rejection.get(), Some(ErrorCode::InvalidRequest));
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(path = "tests/features/day_resolver.feature", name = "Stored days are served live")]
fn stored_days_are_served_live(world: ResolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/day_resolver.feature", name = "Missing days are generated")]
fn missing_days_are_generated(world: ResolverWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/day_resolver.feature",
    name = "An unreachable store never surfaces an error"
)]
fn an_unreachable_store_never_surfaces_an_error(world: ResolverWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/day_resolver.feature",
    name = "Weekend fallbacks use the weekend profile"
)]
fn weekend_fallbacks_use_the_weekend_profile(world: ResolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/day_resolver.feature", name = "Malformed dates are rejected")]
fn malformed_dates_are_rejected(world: ResolverWorld) {
    let _ = world;
}
