//! Campus-wide read endpoints.
//!
//! ```text
//! GET /api/v1/rooms
//! GET /api/v1/recommendations
//! GET /api/v1/anomalies
//! ```
//!
//! Each returns an empty list when the store cannot answer.

use actix_web::{HttpResponse, get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::private_no_cache_header;
use crate::inbound::http::state::HttpState;

/// Current room snapshots.
#[get("/rooms")]
pub async fn list_rooms(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let rooms = state.dashboard.rooms().await;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(rooms))
}

/// Stored recommendations.
#[get("/recommendations")]
pub async fn list_recommendations(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let recommendations = state.dashboard.recommendations().await;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(recommendations))
}

/// Rooms drawing power outside their class timetable.
#[get("/anomalies")]
pub async fn list_anomalies(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let anomalies = state.dashboard.schedule_anomalies().await;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(anomalies))
}
