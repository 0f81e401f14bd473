//! Lookup category API services
//!
//! Six parallel services with the same CRUD shape over a flat
//! `{idx, label}` table. Three of the read-alls are NOT independent
//! calls: the staff-grade, goods-type and class-type tables are
//! materialized as side-queries of their owning entity's API, so those
//! services delegate to the owning service. The generic category
//! endpoint exists for them too but is not authoritative; do not
//! "fix" the delegation without confirming backend ownership.

use serde::Serialize;

use crate::{ClientResult, HttpClient};
use shared::ApiResponse;
use shared::models::{ClassType, GoodsType, MemberStatus, Purpose, StaffGrade, VisitPath};

use super::take_data;
use super::{ClassService, GoodsService, StaffService};

const BASE_URL: &str = "/api/common";

/// Wire body for purpose mutations
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurposeRequest {
    pub purpose_name: String,
}

/// Wire body for visit path mutations
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitPathRequest {
    pub visit_path_name: String,
}

/// Wire body for member status mutations
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStatusRequest {
    pub status_name: String,
}

/// Wire body for staff grade mutations
#[derive(Debug, Clone, Serialize)]
pub struct StaffGradeRequest {
    pub name: String,
}

/// Wire body for goods type mutations
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodsTypeRequest {
    pub type_name: String,
}

/// Wire body for class type mutations
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassTypeRequest {
    pub type_name: String,
}

/// Workout purpose lookup service
#[derive(Debug, Clone)]
pub struct PurposeService {
    http: HttpClient,
}

impl PurposeService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn get_all(&self) -> ClientResult<Vec<Purpose>> {
        let response: ApiResponse<Vec<Purpose>> =
            self.http.get(&format!("{BASE_URL}/getPurposeList")).await?;
        take_data(response, "purpose list")
    }

    pub async fn get_by_id(&self, idx: i64) -> ClientResult<Purpose> {
        let response: ApiResponse<Purpose> =
            self.http.get(&format!("{BASE_URL}/getPurpose/{idx}")).await?;
        take_data(response, "purpose")
    }

    /// Mutations return the full envelope; the store judges `status`
    pub async fn create(&self, request: &PurposeRequest) -> ClientResult<ApiResponse<Purpose>> {
        self.http
            .post(&format!("{BASE_URL}/category/createPurpose"), request)
            .await
    }

    pub async fn update(
        &self,
        idx: i64,
        request: &PurposeRequest,
    ) -> ClientResult<ApiResponse<Purpose>> {
        self.http
            .put(&format!("{BASE_URL}/category/updatePurpose/{idx}"), request)
            .await
    }

    pub async fn delete(&self, idx: i64) -> ClientResult<ApiResponse<serde_json::Value>> {
        self.http
            .delete(&format!("{BASE_URL}/category/deletePurpose/{idx}"))
            .await
    }
}

/// Visit path lookup service
#[derive(Debug, Clone)]
pub struct VisitPathService {
    http: HttpClient,
}

impl VisitPathService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn get_all(&self) -> ClientResult<Vec<VisitPath>> {
        let response: ApiResponse<Vec<VisitPath>> = self
            .http
            .get(&format!("{BASE_URL}/getVisitPathList"))
            .await?;
        take_data(response, "visit path list")
    }

    pub async fn get_by_id(&self, idx: i64) -> ClientResult<VisitPath> {
        // Capitalized path segment is the backend's verbatim spelling
        let response: ApiResponse<VisitPath> =
            self.http.get(&format!("{BASE_URL}/VisitPath/{idx}")).await?;
        take_data(response, "visit path")
    }

    pub async fn create(&self, request: &VisitPathRequest) -> ClientResult<ApiResponse<VisitPath>> {
        self.http
            .post(&format!("{BASE_URL}/category/createVisitPath"), request)
            .await
    }

    pub async fn update(
        &self,
        idx: i64,
        request: &VisitPathRequest,
    ) -> ClientResult<ApiResponse<VisitPath>> {
        self.http
            .put(&format!("{BASE_URL}/category/updateVisitPath/{idx}"), request)
            .await
    }

    pub async fn delete(&self, idx: i64) -> ClientResult<ApiResponse<serde_json::Value>> {
        self.http
            .delete(&format!("{BASE_URL}/category/deleteVisitPath/{idx}"))
            .await
    }
}

/// Member status lookup service
#[derive(Debug, Clone)]
pub struct MemberStatusService {
    http: HttpClient,
}

impl MemberStatusService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn get_all(&self) -> ClientResult<Vec<MemberStatus>> {
        let response: ApiResponse<Vec<MemberStatus>> = self
            .http
            .get(&format!("{BASE_URL}/getMemberStatusList"))
            .await?;
        take_data(response, "member status list")
    }

    pub async fn create(
        &self,
        request: &MemberStatusRequest,
    ) -> ClientResult<ApiResponse<MemberStatus>> {
        self.http
            .post(&format!("{BASE_URL}/category/createMemberStatus"), request)
            .await
    }

    pub async fn update(
        &self,
        idx: i64,
        request: &MemberStatusRequest,
    ) -> ClientResult<ApiResponse<MemberStatus>> {
        self.http
            .put(
                &format!("{BASE_URL}/category/updateMemberStatus/{idx}"),
                request,
            )
            .await
    }

    pub async fn delete(&self, idx: i64) -> ClientResult<ApiResponse<serde_json::Value>> {
        self.http
            .delete(&format!("{BASE_URL}/category/deleteMemberStatus/{idx}"))
            .await
    }
}

/// Staff grade lookup service
///
/// Read-all delegates to the staff API's grade list; mutations go
/// through the generic category endpoint.
#[derive(Debug, Clone)]
pub struct StaffGradeService {
    http: HttpClient,
    staff: StaffService,
}

impl StaffGradeService {
    pub fn new(http: HttpClient, staff: StaffService) -> Self {
        Self { http, staff }
    }

    pub async fn get_all(&self) -> ClientResult<Vec<StaffGrade>> {
        self.staff.get_grade_list().await
    }

    pub async fn create(
        &self,
        request: &StaffGradeRequest,
    ) -> ClientResult<ApiResponse<StaffGrade>> {
        self.http
            .post(&format!("{BASE_URL}/category/createStaffGrade"), request)
            .await
    }

    pub async fn update(
        &self,
        idx: i64,
        request: &StaffGradeRequest,
    ) -> ClientResult<ApiResponse<StaffGrade>> {
        self.http
            .put(
                &format!("{BASE_URL}/category/updateStaffGrade/{idx}"),
                request,
            )
            .await
    }

    pub async fn delete(&self, idx: i64) -> ClientResult<ApiResponse<serde_json::Value>> {
        self.http
            .delete(&format!("{BASE_URL}/category/deleteStaffGrade/{idx}"))
            .await
    }
}

/// Goods type lookup service
///
/// Read-all delegates to the goods API's type list.
#[derive(Debug, Clone)]
pub struct GoodsTypeService {
    http: HttpClient,
    goods: GoodsService,
}

impl GoodsTypeService {
    pub fn new(http: HttpClient, goods: GoodsService) -> Self {
        Self { http, goods }
    }

    pub async fn get_all(&self) -> ClientResult<Vec<GoodsType>> {
        self.goods.get_goods_types().await
    }

    pub async fn create(&self, request: &GoodsTypeRequest) -> ClientResult<ApiResponse<GoodsType>> {
        self.http
            .post(&format!("{BASE_URL}/category/createGoodsType"), request)
            .await
    }

    pub async fn update(
        &self,
        idx: i64,
        request: &GoodsTypeRequest,
    ) -> ClientResult<ApiResponse<GoodsType>> {
        self.http
            .put(
                &format!("{BASE_URL}/category/updateGoodsType/{idx}"),
                request,
            )
            .await
    }

    pub async fn delete(&self, idx: i64) -> ClientResult<ApiResponse<serde_json::Value>> {
        self.http
            .delete(&format!("{BASE_URL}/category/deleteGoodsType/{idx}"))
            .await
    }
}

/// Class type lookup service
///
/// Read-all delegates to the class API's type list.
#[derive(Debug, Clone)]
pub struct ClassTypeService {
    http: HttpClient,
    classes: ClassService,
}

impl ClassTypeService {
    pub fn new(http: HttpClient, classes: ClassService) -> Self {
        Self { http, classes }
    }

    pub async fn get_all(&self) -> ClientResult<Vec<ClassType>> {
        self.classes.get_class_types().await
    }

    pub async fn create(&self, request: &ClassTypeRequest) -> ClientResult<ApiResponse<ClassType>> {
        self.http
            .post(&format!("{BASE_URL}/category/createClassType"), request)
            .await
    }

    pub async fn update(
        &self,
        idx: i64,
        request: &ClassTypeRequest,
    ) -> ClientResult<ApiResponse<ClassType>> {
        self.http
            .put(
                &format!("{BASE_URL}/category/updateClassType/{idx}"),
                request,
            )
            .await
    }

    pub async fn delete(&self, idx: i64) -> ClientResult<ApiResponse<serde_json::Value>> {
        self.http
            .delete(&format!("{BASE_URL}/category/deleteClassType/{idx}"))
            .await
    }
}
