//! Day record endpoints.
//!
//! ```text
//! GET /api/v1/days/today
//! GET /api/v1/days?end=YYYY-MM-DD&days=N
//! GET /api/v1/days/{date}
//! GET /api/v1/days/{date}/insights
//! ```
//!
//! Day lookups never fail for storage reasons; the only error is a
//! malformed date or window.

use actix_web::{HttpResponse, get, web};
use energy_data::{DEFAULT_HISTORY_DAYS, DateKey, DayRecord};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{Error, FallbackReason, ResolvedDay};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::private_no_cache_header;
use crate::inbound::http::state::HttpState;

/// Longest history window served in one request.
pub const MAX_HISTORY_DAYS: usize = 366;

/// Response payload for a single day.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayResponse {
    /// `live` or `generated`.
    pub source: &'static str,
    /// Why the day was generated, if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<FallbackReason>,
    /// The record, flattened into the payload.
    #[serde(flatten)]
    pub record: DayRecord,
}

impl From<ResolvedDay> for DayResponse {
    fn from(resolved: ResolvedDay) -> Self {
        let source = if resolved.source.is_live() {
            "live"
        } else {
            "generated"
        };
        Self {
            source,
            fallback_reason: resolved.source.fallback_reason(),
            record: resolved.record,
        }
    }
}

/// Query parameters for the history endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// Last day of the window; defaults to today.
    pub end: Option<String>,
    /// Window length; defaults to 30.
    pub days: Option<usize>,
}

fn parse_date_param(field: &str, value: &str) -> Result<DateKey, Error> {
    DateKey::parse(value).map_err(|err| {
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": field,
            "value": value,
        }))
    })
}

fn validate_days(days: Option<usize>) -> Result<usize, Error> {
    let days = days.unwrap_or(DEFAULT_HISTORY_DAYS);
    if (1..=MAX_HISTORY_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(
            Error::invalid_request(format!("days must be between 1 and {MAX_HISTORY_DAYS}"))
                .with_details(json!({ "field": "days", "value": days })),
        )
    }
}

/// Resolve the current local day.
#[get("/days/today")]
pub async fn get_today(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let resolved = state.dashboard.today().await;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(DayResponse::from(resolved)))
}

/// Resolve a window of days, newest first.
#[get("/days")]
pub async fn list_days(
    state: web::Data<HttpState>,
    query: web::Query<HistoryQuery>,
) -> ApiResult<HttpResponse> {
    let HistoryQuery { end, days } = query.into_inner();
    let days = validate_days(days)?;
    let end = end
        .as_deref()
        .map(|value| parse_date_param("end", value))
        .transpose()?;
    let records = state.dashboard.history(end, days).await;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(records))
}

/// Resolve one day by its `YYYY-MM-DD` key.
#[get("/days/{date}")]
pub async fn get_day(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let date = parse_date_param("date", &path.into_inner())?;
    let resolved = state.dashboard.day(&date).await;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(DayResponse::from(resolved)))
}

/// Recommendations derived from one day's waste events.
#[get("/days/{date}/insights")]
pub async fn get_day_insights(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let date = parse_date_param("date", &path.into_inner())?;
    let insights = state.dashboard.insights(&date).await;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(insights))
}
