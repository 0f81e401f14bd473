//! Purchase API service

use crate::{ClientResult, HttpClient};
use shared::ApiResponse;
use shared::models::{Purchase, PurchaseRequest};

use super::take_data;

const BASE_URL: &str = "/api/purchase";

/// Purchase CRUD plus bulk creation
#[derive(Debug, Clone)]
pub struct PurchaseService {
    http: HttpClient,
}

impl PurchaseService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the full purchase list
    pub async fn get_all(&self) -> ClientResult<Vec<Purchase>> {
        let response: ApiResponse<Vec<Purchase>> = self
            .http
            .get(&format!("{BASE_URL}/getPurchaseList"))
            .await?;
        take_data(response, "purchase list")
    }

    /// Fetch a single purchase
    pub async fn get_by_id(&self, idx: i64) -> ClientResult<Purchase> {
        let response: ApiResponse<Purchase> = self
            .http
            .get(&format!("{BASE_URL}/getPurchaseDetail/{idx}"))
            .await?;
        take_data(response, "purchase")
    }

    /// Create a single purchase; the backend echoes the created row
    pub async fn create(&self, request: &PurchaseRequest) -> ClientResult<Purchase> {
        let response: ApiResponse<Purchase> = self
            .http
            .post(&format!("{BASE_URL}/createPurchase"), request)
            .await?;
        take_data(response, "purchase")
    }

    /// Create several purchases in one all-or-nothing request
    ///
    /// The whole list goes out as a single call; an empty sequence
    /// comes back when the server returns no data.
    pub async fn create_bulk(&self, requests: &[PurchaseRequest]) -> ClientResult<Vec<Purchase>> {
        let response: ApiResponse<Vec<Purchase>> = self
            .http
            .post(&format!("{BASE_URL}/createPurchase"), requests)
            .await?;
        Ok(response.data.unwrap_or_default())
    }

    /// Update a purchase
    pub async fn update(&self, idx: i64, request: &PurchaseRequest) -> ClientResult<Purchase> {
        let response: ApiResponse<Purchase> =
            self.http.put(&format!("{BASE_URL}/{idx}"), request).await?;
        take_data(response, "purchase")
    }

    /// Delete a purchase
    pub async fn delete(&self, idx: i64) -> ClientResult<()> {
        self.http
            .delete::<ApiResponse<serde_json::Value>>(&format!("{BASE_URL}/{idx}"))
            .await?;
        Ok(())
    }
}
