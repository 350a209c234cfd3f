//! End-to-end tests for the dashboard HTTP surface.
//!
//! The real resolver runs over a seeded in-memory store; days outside the
//! seeded window exercise the generated fallback.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use backend::domain::DayDataResolver;
use backend::inbound::http::api_scope;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryEnergyStore;
use backend::seeding::{SeedSettings, seed_energy_data_on_startup};
use energy_data::DayGenerator;
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::Value;

const SEEDED_DAYS: usize = 5;

async fn seeded_state() -> HttpState {
    let store = Arc::new(InMemoryEnergyStore::new());
    let settings = SeedSettings {
        enabled: true,
        days: Some(SEEDED_DAYS),
        seed: Some(11),
    };
    seed_energy_data_on_startup(&settings, store.clone())
        .await
        .expect("seeding succeeds");
    let resolver = DayDataResolver::new(store, DayGenerator::seeded(42), Arc::new(DefaultClock));
    HttpState::new(Arc::new(resolver))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    let app = test::init_service(
        App::new()
            .app_data(health)
            .app_data(web::Data::new(seeded_state().await))
            .service(api_scope())
            .service(ready)
            .service(live),
    )
    .await;
    let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = response.status();
    let body = test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("response JSON")
    };
    (status, value)
}

#[rstest]
#[actix_web::test]
async fn today_is_served_from_the_seeded_store() {
    let (status, value) = get("/api/v1/days/today").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["source"], "live");
    assert!(value.get("fallbackReason").is_none());
    assert_eq!(value["rooms"].as_array().map(Vec::len), Some(8));
    assert_eq!(value["blocks"].as_array().map(Vec::len), Some(5));
}

#[rstest]
#[actix_web::test]
async fn unseeded_days_fall_back_to_generated_data() {
    let (status, value) = get("/api/v1/days/2099-01-01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["source"], "generated");
    assert_eq!(value["fallbackReason"], "missing_record");
    assert_eq!(value["date"], "2099-01-01");
    assert!(value["totalConsumption"].as_f64().is_some_and(|total| total > 0.0));
}

#[rstest]
#[actix_web::test]
async fn history_lists_days_newest_first() {
    let (status, value) = get("/api/v1/days?days=3").await;

    assert_eq!(status, StatusCode::OK);
    let dates: Vec<&str> = value
        .as_array()
        .expect("history array")
        .iter()
        .filter_map(|day| day["date"].as_str())
        .collect();
    assert_eq!(dates.len(), 3);
    let mut sorted = dates.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
}

#[rstest]
#[actix_web::test]
async fn insights_are_derived_for_any_day() {
    let (status, value) = get("/api/v1/days/2099-01-05/insights").await;

    assert_eq!(status, StatusCode::OK);
    let insights = value.as_array().expect("insight array");
    assert!(!insights.is_empty());
    assert!(insights.iter().all(|insight| insight["title"].is_string()));
}

#[rstest]
#[case("/api/v1/days/not-a-date")]
#[case("/api/v1/days/2026-02-30/insights")]
#[case("/api/v1/days?end=yesterday")]
#[case("/api/v1/days?days=0")]
#[actix_web::test]
async fn malformed_requests_are_rejected(#[case] uri: &str) {
    let (status, value) = get(uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["code"], "invalid_request");
}

#[rstest]
#[actix_web::test]
async fn seeded_campus_lists_are_served() {
    let (rooms_status, rooms) = get("/api/v1/rooms").await;
    let (recs_status, recommendations) = get("/api/v1/recommendations").await;

    assert_eq!(rooms_status, StatusCode::OK);
    assert_eq!(rooms.as_array().map(Vec::len), Some(8));
    assert_eq!(recs_status, StatusCode::OK);
    assert_eq!(recommendations.as_array().map(Vec::len), Some(4));
}

#[rstest]
#[actix_web::test]
async fn anomalies_without_a_timetable_report_no_class() {
    let (status, value) = get("/api/v1/anomalies").await;

    assert_eq!(status, StatusCode::OK);
    for anomaly in value.as_array().expect("anomaly array") {
        assert_eq!(anomaly["context"]["kind"], "no_class_today");
    }
}

#[rstest]
#[case("/health/live")]
#[case("/health/ready")]
#[actix_web::test]
async fn probes_report_ready(#[case] uri: &str) {
    let (status, _) = get(uri).await;
    assert_eq!(status, StatusCode::OK);
}
