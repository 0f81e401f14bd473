//! Goods API service

use crate::{ClientResult, HttpClient};
use shared::ApiResponse;
use shared::models::{Goods, GoodsRequest, GoodsType};

use super::take_data;

const BASE_URL: &str = "/api/goods";

/// Goods CRUD plus the type lookup list and type filtering
///
/// `create` and `update` return the raw envelope instead of an
/// unwrapped row: this backend's write responses carry `data: null`
/// even on success, so callers must judge the envelope `status`
/// themselves. A weaker contract than the other services, on purpose.
#[derive(Debug, Clone)]
pub struct GoodsService {
    http: HttpClient,
}

impl GoodsService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the full goods list
    pub async fn get_all(&self) -> ClientResult<Vec<Goods>> {
        let response: ApiResponse<Vec<Goods>> =
            self.http.get(&format!("{BASE_URL}/getGoodsList")).await?;
        take_data(response, "goods list")
    }

    /// Fetch a single goods row
    pub async fn get_by_id(&self, idx: i64) -> ClientResult<Goods> {
        let response: ApiResponse<Goods> = self
            .http
            .get(&format!("{BASE_URL}/getGoodsDetail/{idx}"))
            .await?;
        take_data(response, "goods")
    }

    /// Create goods; returns the raw envelope (`data` may be null)
    pub async fn create(&self, request: &GoodsRequest) -> ClientResult<ApiResponse<Goods>> {
        self.http
            .post(&format!("{BASE_URL}/createGoods"), request)
            .await
    }

    /// Update goods; returns the raw envelope (`data` may be null)
    pub async fn update(
        &self,
        idx: i64,
        request: &GoodsRequest,
    ) -> ClientResult<ApiResponse<Goods>> {
        self.http.put(&format!("{BASE_URL}/{idx}"), request).await
    }

    /// Delete goods
    pub async fn delete(&self, idx: i64) -> ClientResult<()> {
        self.http
            .delete::<ApiResponse<serde_json::Value>>(&format!("{BASE_URL}/{idx}"))
            .await?;
        Ok(())
    }

    /// Fetch the goods type lookup list
    ///
    /// The type table is materialized by the goods API; the category
    /// service delegates its read-all here.
    pub async fn get_goods_types(&self) -> ClientResult<Vec<GoodsType>> {
        let response: ApiResponse<Vec<GoodsType>> = self
            .http
            .get(&format!("{BASE_URL}/getGoodsTypeList"))
            .await?;
        take_data(response, "goods type list")
    }

    /// Fetch goods of a given type
    pub async fn get_by_type(&self, goods_type: i64) -> ClientResult<Vec<Goods>> {
        let response: ApiResponse<Vec<Goods>> = self
            .http
            .get(&format!("{BASE_URL}/type/{goods_type}"))
            .await?;
        take_data(response, "goods list")
    }
}
