//! Purchase Model

use serde::{Deserialize, Serialize};

use super::Keyed;

/// Purchase record (read shape)
///
/// `purchase_type` and `name` are denormalized free text, not foreign
/// keys; `status_name` is the display label for `status`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub idx: i64,
    #[serde(rename = "type")]
    pub purchase_type: String,
    pub name: String,
    pub buyer: String,
    pub cnt: i64,
    pub price: i64,
    pub payment_method: String,
    pub paid_at: String,
    pub status: i64,
    pub phone: String,
    pub status_name: String,
}

/// Create payload (one request row per purchased item)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub member_idx: i64,
    #[serde(rename = "type")]
    pub purchase_type: String,
    pub name: String,
    pub cnt: i64,
    pub price: i64,
    pub payment_method: String,
}

impl Keyed for Purchase {
    fn idx(&self) -> i64 {
        self.idx
    }
}
