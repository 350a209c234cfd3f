//! Reqwest-backed energy store adapter.
//!
//! This adapter owns transport details only: URL and filter construction,
//! API key headers, timeout and HTTP error mapping, and JSON decoding into
//! the domain's row types.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Weekday;
use energy_data::DateKey;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::ports::{EnergyStore, EnergyStoreError, EnergyStoreWriter};
use crate::domain::{
    BlockConsumptionRow, ClassScheduleRow, DailyStatsRow, HourlyTrendRow, RecommendationRow,
    RoomStatusRow, StoredDay, WasteEventRow,
};

const DAILY_STATS: &str = "daily_stats";
const HOURLY_TRENDS: &str = "hourly_trends";
const BLOCK_CONSUMPTION: &str = "block_consumption";
const WASTE_EVENTS: &str = "waste_events";
const ROOM_STATUS: &str = "room_status";
const RECOMMENDATIONS: &str = "recommendations";
const CLASS_SCHEDULE: &str = "class_schedule";

/// Child tables keyed by date, in the order they are cleared.
const DAY_CHILD_TABLES: [&str; 3] = [HOURLY_TRENDS, BLOCK_CONSUMPTION, WASTE_EVENTS];

type Filter = (&'static str, String);

/// Energy store adapter speaking PostgREST query syntax.
pub struct RestEnergyStore {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl RestEnergyStore {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// `base_url` is the REST root, e.g. `https://project.example/rest/v1/`;
    /// a missing trailing slash is added.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        mut base_url: Url,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    fn table_url(&self, table: &str) -> Result<Url, EnergyStoreError> {
        self.base_url.join(table).map_err(|error| {
            EnergyStoreError::query(format!("invalid table URL for {table}: {error}"))
        })
    }

    fn authorise(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("apikey", key.as_str()).bearer_auth(key),
            None => request,
        }
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[Filter],
    ) -> Result<Vec<T>, EnergyStoreError> {
        let request = self
            .client
            .get(self.table_url(table)?)
            .query(&[("select", "*")])
            .query(filters)
            .header(reqwest::header::ACCEPT, "application/json");
        let body = self.execute(table, request).await?;
        parse_rows(table, &body)
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<(), EnergyStoreError> {
        let request = self.client.delete(self.table_url(table)?).query(filters);
        self.execute(table, request).await.map(drop)
    }

    async fn insert<T: Serialize + Sync>(
        &self,
        table: &str,
        rows: &[T],
    ) -> Result<(), EnergyStoreError> {
        if rows.is_empty() {
            return Ok(());
        }
        let request = self
            .client
            .post(self.table_url(table)?)
            .header("Prefer", "return=minimal")
            .json(rows);
        self.execute(table, request).await.map(drop)
    }

    async fn execute(
        &self,
        table: &str,
        request: RequestBuilder,
    ) -> Result<Vec<u8>, EnergyStoreError> {
        let response = self
            .authorise(request)
            .send()
            .await
            .map_err(|error| map_transport_error(table, error))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|error| map_transport_error(table, error))?;
        if !status.is_success() {
            return Err(map_status_error(table, status, body.as_ref()));
        }
        Ok(body.to_vec())
    }
}

fn date_filter(date: &DateKey) -> Filter {
    ("date", format!("eq.{date}"))
}

#[async_trait]
impl EnergyStore for RestEnergyStore {
    async fn find_day(&self, date: &DateKey) -> Result<Option<StoredDay>, EnergyStoreError> {
        let filter = [date_filter(date), ("limit", "1".to_owned())];
        let stats: Vec<DailyStatsRow> = self.select(DAILY_STATS, &filter).await?;
        let Some(stats) = stats.into_iter().next() else {
            return Ok(None);
        };

        let by_date = [date_filter(date)];
        let trends_filter = [date_filter(date), ("order", "time.asc".to_owned())];
        let (trends, blocks, waste_events) = tokio::try_join!(
            self.select::<HourlyTrendRow>(HOURLY_TRENDS, &trends_filter),
            self.select::<BlockConsumptionRow>(BLOCK_CONSUMPTION, &by_date),
            self.select::<WasteEventRow>(WASTE_EVENTS, &by_date),
        )?;

        Ok(Some(StoredDay {
            stats,
            trends,
            blocks,
            waste_events,
        }))
    }

    async fn list_rooms(&self) -> Result<Vec<RoomStatusRow>, EnergyStoreError> {
        self.select(ROOM_STATUS, &[("order", "id.asc".to_owned())])
            .await
    }

    async fn list_recommendations(&self) -> Result<Vec<RecommendationRow>, EnergyStoreError> {
        self.select(RECOMMENDATIONS, &[("order", "id.asc".to_owned())])
            .await
    }

    async fn list_timetable(
        &self,
        weekday: Weekday,
    ) -> Result<Vec<ClassScheduleRow>, EnergyStoreError> {
        let filters = [
            (
                "day_of_week",
                format!("eq.{}", weekday.number_from_monday()),
            ),
            ("order", "start_time.asc".to_owned()),
        ];
        self.select(CLASS_SCHEDULE, &filters).await
    }
}

#[async_trait]
impl EnergyStoreWriter for RestEnergyStore {
    async fn replace_day(&self, day: &StoredDay) -> Result<(), EnergyStoreError> {
        let by_date = [date_filter(&day.stats.date)];
        for table in DAY_CHILD_TABLES {
            self.delete(table, &by_date).await?;
        }
        self.delete(DAILY_STATS, &by_date).await?;

        self.insert(DAILY_STATS, std::slice::from_ref(&day.stats))
            .await?;
        self.insert(HOURLY_TRENDS, &day.trends).await?;
        self.insert(BLOCK_CONSUMPTION, &day.blocks).await?;
        self.insert(WASTE_EVENTS, &day.waste_events).await
    }

    async fn replace_rooms(&self, rooms: &[RoomStatusRow]) -> Result<(), EnergyStoreError> {
        self.delete(ROOM_STATUS, &[every_row()]).await?;
        self.insert(ROOM_STATUS, rooms).await
    }

    async fn replace_recommendations(
        &self,
        recommendations: &[RecommendationRow],
    ) -> Result<(), EnergyStoreError> {
        self.delete(RECOMMENDATIONS, &[every_row()]).await?;
        self.insert(RECOMMENDATIONS, recommendations).await
    }
}

/// PostgREST refuses unfiltered deletes; this filter matches every row.
fn every_row() -> Filter {
    ("id", "not.is.null".to_owned())
}

fn parse_rows<T: DeserializeOwned>(table: &str, body: &[u8]) -> Result<Vec<T>, EnergyStoreError> {
    serde_json::from_slice(body).map_err(|error| {
        debug!(table, %error, "energy store rows failed to decode");
        EnergyStoreError::decode(format!("invalid {table} payload: {error}"))
    })
}

fn map_transport_error(table: &str, error: reqwest::Error) -> EnergyStoreError {
    debug!(table, %error, "energy store transport failed");
    if error.is_timeout() {
        EnergyStoreError::timeout(format!("{table}: {error}"))
    } else {
        EnergyStoreError::connection(format!("{table}: {error}"))
    }
}

fn map_status_error(table: &str, status: StatusCode, body: &[u8]) -> EnergyStoreError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("{table}: status {}", status.as_u16())
    } else {
        format!("{table}: status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            EnergyStoreError::timeout(message)
        }
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE => {
            EnergyStoreError::connection(message)
        }
        _ => EnergyStoreError::query(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
