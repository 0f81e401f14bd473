//! Member API service

use crate::{ClientResult, HttpClient};
use shared::ApiResponse;
use shared::models::{Member, MemberRequest};

use super::take_data;

const BASE_URL: &str = "/api/member";

/// Member CRUD plus keyword search and status filtering
#[derive(Debug, Clone)]
pub struct MemberService {
    http: HttpClient,
}

impl MemberService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the full member list
    pub async fn get_all(&self) -> ClientResult<Vec<Member>> {
        let response: ApiResponse<Vec<Member>> =
            self.http.get(&format!("{BASE_URL}/getMemberList")).await?;
        take_data(response, "member list")
    }

    /// Fetch a single member
    pub async fn get_by_id(&self, idx: i64) -> ClientResult<Member> {
        let response: ApiResponse<Member> = self
            .http
            .get(&format!("{BASE_URL}/getMemberDetail/{idx}"))
            .await?;
        take_data(response, "member")
    }

    /// Create a member; the backend echoes the created row
    pub async fn create(&self, request: &MemberRequest) -> ClientResult<Member> {
        let response: ApiResponse<Member> = self
            .http
            .post(&format!("{BASE_URL}/writeMember"), request)
            .await?;
        take_data(response, "member")
    }

    /// Update a member
    pub async fn update(&self, idx: i64, request: &MemberRequest) -> ClientResult<Member> {
        let response: ApiResponse<Member> =
            self.http.put(&format!("{BASE_URL}/{idx}"), request).await?;
        take_data(response, "member")
    }

    /// Delete a member
    pub async fn delete(&self, idx: i64) -> ClientResult<()> {
        self.http
            .delete::<ApiResponse<serde_json::Value>>(&format!("{BASE_URL}/deleteMember/{idx}"))
            .await?;
        Ok(())
    }

    /// Search members by keyword (name, phone, ...)
    pub async fn search(&self, keyword: &str) -> ClientResult<Vec<Member>> {
        let response: ApiResponse<Vec<Member>> = self
            .http
            .get_query(&format!("{BASE_URL}/search"), &[("keyword", keyword)])
            .await?;
        take_data(response, "member list")
    }

    /// Fetch members in a given status
    pub async fn get_by_status(&self, status: i64) -> ClientResult<Vec<Member>> {
        let response: ApiResponse<Vec<Member>> = self
            .http
            .get(&format!("{BASE_URL}/status/{status}"))
            .await?;
        take_data(response, "member list")
    }
}
