//! Staff API service
//!
//! Staff endpoints live under the member base path on the backend; the
//! paths below are the actual contract, not a typo.

use crate::{ClientResult, HttpClient};
use shared::ApiResponse;
use shared::models::{Staff, StaffGrade, StaffRequest};

use super::take_data;

const BASE_URL: &str = "/api/member";

/// Staff CRUD plus keyword search and the grade lookup list
#[derive(Debug, Clone)]
pub struct StaffService {
    http: HttpClient,
}

impl StaffService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the full staff list
    pub async fn get_all(&self) -> ClientResult<Vec<Staff>> {
        let response: ApiResponse<Vec<Staff>> =
            self.http.get(&format!("{BASE_URL}/getStaffList")).await?;
        take_data(response, "staff list")
    }

    /// Fetch a single staff member
    pub async fn get_by_id(&self, idx: i64) -> ClientResult<Staff> {
        let response: ApiResponse<Staff> = self
            .http
            .get(&format!("{BASE_URL}/getStaffDetail/{idx}"))
            .await?;
        take_data(response, "staff")
    }

    /// Create a staff member
    pub async fn create(&self, request: &StaffRequest) -> ClientResult<Staff> {
        let response: ApiResponse<Staff> = self
            .http
            .post(&format!("{BASE_URL}/createStaff"), request)
            .await?;
        take_data(response, "staff")
    }

    /// Update a staff member
    pub async fn update(&self, idx: i64, request: &StaffRequest) -> ClientResult<Staff> {
        let response: ApiResponse<Staff> = self
            .http
            .put(&format!("{BASE_URL}/staff/{idx}"), request)
            .await?;
        take_data(response, "staff")
    }

    /// Delete a staff member
    pub async fn delete(&self, idx: i64) -> ClientResult<()> {
        self.http
            .delete::<ApiResponse<serde_json::Value>>(&format!("{BASE_URL}/staff/{idx}"))
            .await?;
        Ok(())
    }

    /// Search staff by keyword
    pub async fn search(&self, keyword: &str) -> ClientResult<Vec<Staff>> {
        let response: ApiResponse<Vec<Staff>> = self
            .http
            .get_query(&format!("{BASE_URL}/staff/search"), &[("keyword", keyword)])
            .await?;
        take_data(response, "staff list")
    }

    /// Fetch the staff grade lookup list
    ///
    /// The grade table is materialized by the staff API; the category
    /// service delegates its read-all here.
    pub async fn get_grade_list(&self) -> ClientResult<Vec<StaffGrade>> {
        let response: ApiResponse<Vec<StaffGrade>> = self
            .http
            .get(&format!("{BASE_URL}/getStaffGradeList"))
            .await?;
        take_data(response, "staff grade list")
    }
}
