//! Calendar Event Model

use serde::{Deserialize, Serialize};

use super::Keyed;

/// Calendar event (read shape)
///
/// `end_et` keeps the backend's verbatim wire spelling `endEt`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub idx: i64,
    pub member_idx: Option<i64>,
    pub staff_idx: Option<i64>,
    pub goods_idx: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    /// Start date-time string
    pub start_at: Option<String>,
    /// End date-time string
    pub end_et: Option<String>,
    /// 0/1 flag
    pub all_day: i64,
}

/// Create/update payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub member_idx: Option<i64>,
    pub staff_idx: Option<i64>,
    pub goods_idx: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub start_at: Option<String>,
    pub end_et: Option<String>,
    pub all_day: i64,
}

impl EventRequest {
    /// Build the Event the backend acknowledged but did not echo.
    ///
    /// The caller supplies a fresh `idx`; every other field is taken
    /// verbatim from the request.
    pub fn into_event(self, idx: i64) -> Event {
        Event {
            idx,
            member_idx: self.member_idx,
            staff_idx: self.staff_idx,
            goods_idx: self.goods_idx,
            title: self.title,
            description: self.description,
            start_at: self.start_at,
            end_et: self.end_et,
            all_day: self.all_day,
        }
    }
}

impl Keyed for Event {
    fn idx(&self) -> i64 {
        self.idx
    }
}
