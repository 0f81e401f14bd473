//! Calendar event API service

use crate::{ClientError, ClientResult, HttpClient};
use shared::ApiResponse;
use shared::models::{Event, EventRequest};

use super::take_data;

const BASE_URL: &str = "/api/event";

/// Calendar event CRUD plus the month-bucketed list
#[derive(Debug, Clone)]
pub struct EventService {
    http: HttpClient,
}

impl EventService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the full event list
    pub async fn get_all(&self) -> ClientResult<Vec<Event>> {
        let response: ApiResponse<Vec<Event>> =
            self.http.get(&format!("{BASE_URL}/getEventList")).await?;
        take_data(response, "event list")
    }

    /// Fetch one month of events
    ///
    /// This endpoint answers with a bare `{ "<date>": [Event, ...] }`
    /// object, no envelope. The buckets are flattened in backend key
    /// order; a bucket whose value is not an event array is skipped
    /// rather than failing the whole fetch.
    pub async fn get_by_year_month(&self, year: i32, month: u32) -> ClientResult<Vec<Event>> {
        let buckets: serde_json::Map<String, serde_json::Value> = self
            .http
            .get(&format!("{BASE_URL}/getEventList/{year}/{month}"))
            .await?;

        let mut events = Vec::new();
        for (date, value) in buckets {
            match serde_json::from_value::<Vec<Event>>(value) {
                Ok(day) => events.extend(day),
                Err(err) => {
                    tracing::warn!(%date, error = %err, "Skipping malformed event bucket");
                }
            }
        }
        Ok(events)
    }

    /// Fetch a single event
    pub async fn get_by_id(&self, idx: i64) -> ClientResult<Event> {
        let response: ApiResponse<Event> = self
            .http
            .get(&format!("{BASE_URL}/getEventDetail/{idx}"))
            .await?;
        take_data(response, "event")
    }

    /// Create an event
    ///
    /// The backend acknowledges without echoing the created row, so on
    /// success the Event is synthesized client-side: a temporary idx
    /// fabricated from the current timestamp, every other field taken
    /// verbatim from the request.
    pub async fn create(&self, request: &EventRequest) -> ClientResult<Event> {
        let response: ApiResponse<Event> = self
            .http
            .post(&format!("{BASE_URL}/createEvent"), request)
            .await?;

        if response.status == 200 || response.status == 202 {
            let idx = chrono::Utc::now().timestamp_millis();
            Ok(request.clone().into_event(idx))
        } else {
            Err(ClientError::Rejected(
                response.message_or("Event creation failed"),
            ))
        }
    }

    /// Update an event
    pub async fn update(&self, idx: i64, request: &EventRequest) -> ClientResult<Event> {
        let response: ApiResponse<Event> = self
            .http
            .put(&format!("{BASE_URL}/updateEvent/{idx}"), request)
            .await?;
        take_data(response, "event")
    }

    /// Delete an event
    pub async fn delete(&self, idx: i64) -> ClientResult<()> {
        self.http
            .delete::<ApiResponse<serde_json::Value>>(&format!("{BASE_URL}/deleteEvent/{idx}"))
            .await?;
        Ok(())
    }
}
