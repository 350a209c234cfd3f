//! HTTP inbound adapter exposing the dashboard read endpoints.

use actix_web::{HttpRequest, HttpResponse, Scope, web};

use crate::domain::Error;

pub mod cache_control;
pub mod campus;
pub mod days;
pub mod error;
pub mod health;
pub mod state;

pub use error::ApiResult;

/// Build the `/api/v1` scope with every dashboard endpoint.
///
/// `/days/today` is registered ahead of `/days/{date}` so the literal path
/// wins. Unmatched paths under the scope answer with a `not_found` error
/// body.
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .service(days::get_today)
        .service(days::list_days)
        .service(days::get_day_insights)
        .service(days::get_day)
        .service(campus::list_rooms)
        .service(campus::list_recommendations)
        .service(campus::list_anomalies)
        .default_service(web::to(unknown_endpoint))
}

async fn unknown_endpoint(request: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::not_found(format!("no endpoint at {}", request.path())))
}
