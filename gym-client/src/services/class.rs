//! Class API service

use crate::{ClientResult, HttpClient};
use shared::ApiResponse;
use shared::models::{Class, ClassRequest, ClassType};

use super::take_data;

const BASE_URL: &str = "/api/class";

/// Class CRUD plus the type lookup list and type filtering
///
/// `create` and `update` return the raw envelope, mirroring the goods
/// service: the store reconciles these writes by refetching and needs
/// the envelope `status` to do it.
#[derive(Debug, Clone)]
pub struct ClassService {
    http: HttpClient,
}

impl ClassService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the full class list
    pub async fn get_all(&self) -> ClientResult<Vec<Class>> {
        let response: ApiResponse<Vec<Class>> =
            self.http.get(&format!("{BASE_URL}/getClassList")).await?;
        take_data(response, "class list")
    }

    /// Fetch a single class
    pub async fn get_by_id(&self, idx: i64) -> ClientResult<Class> {
        let response: ApiResponse<Class> = self
            .http
            .get(&format!("{BASE_URL}/getClassDetail/{idx}"))
            .await?;
        take_data(response, "class")
    }

    /// Create a class; returns the raw envelope (`data` may be null)
    pub async fn create(&self, request: &ClassRequest) -> ClientResult<ApiResponse<Class>> {
        self.http
            .post(&format!("{BASE_URL}/createClass"), request)
            .await
    }

    /// Update a class; returns the raw envelope (`data` may be null)
    pub async fn update(
        &self,
        idx: i64,
        request: &ClassRequest,
    ) -> ClientResult<ApiResponse<Class>> {
        self.http.put(&format!("{BASE_URL}/{idx}"), request).await
    }

    /// Delete a class
    pub async fn delete(&self, idx: i64) -> ClientResult<()> {
        self.http
            .delete::<ApiResponse<serde_json::Value>>(&format!("{BASE_URL}/{idx}"))
            .await?;
        Ok(())
    }

    /// Fetch the class type lookup list
    ///
    /// The type table is materialized by the class API; the category
    /// service delegates its read-all here.
    pub async fn get_class_types(&self) -> ClientResult<Vec<ClassType>> {
        let response: ApiResponse<Vec<ClassType>> = self
            .http
            .get(&format!("{BASE_URL}/getClassTypeList"))
            .await?;
        take_data(response, "class type list")
    }

    /// Fetch classes of a given type
    pub async fn get_by_type(&self, class_type: i64) -> ClientResult<Vec<Class>> {
        let response: ApiResponse<Vec<Class>> = self
            .http
            .get(&format!("{BASE_URL}/type/{class_type}"))
            .await?;
        take_data(response, "class list")
    }
}
