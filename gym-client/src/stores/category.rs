//! Lookup category store
//!
//! One store for all six lookup tables. The lists share a single
//! loading flag and error slot: the settings screen treats them as one
//! surface. Every mutation reconciles by refetching the one list it
//! touched, since the generic category endpoint does not echo written
//! rows dependably.

use std::future::Future;

use shared::ApiResponse;
use shared::models::{ClassType, GoodsType, MemberStatus, Purpose, StaffGrade, VisitPath};

use crate::services::{
    ClassTypeRequest, ClassTypeService, GoodsTypeRequest, GoodsTypeService, MemberStatusRequest,
    MemberStatusService, PurposeRequest, PurposeService, StaffGradeRequest, StaffGradeService,
    VisitPathRequest, VisitPathService,
};
use crate::ClientResult;

use super::state::ActionResult;

/// The six lookup services bundled for injection
#[derive(Debug, Clone)]
pub struct CategoryServices {
    pub purpose: PurposeService,
    pub visit_path: VisitPathService,
    pub member_status: MemberStatusService,
    pub staff_grade: StaffGradeService,
    pub goods_type: GoodsTypeService,
    pub class_type: ClassTypeService,
}

/// Owns the six lookup lists
#[derive(Debug)]
pub struct CategoryStore {
    services: CategoryServices,
    pub purposes: Vec<Purpose>,
    pub visit_paths: Vec<VisitPath>,
    pub member_statuses: Vec<MemberStatus>,
    pub staff_grades: Vec<StaffGrade>,
    pub goods_types: Vec<GoodsType>,
    pub class_types: Vec<ClassType>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Await a list fetch into `list`, driving the shared loading/error pair
async fn run_fetch<T, F>(
    loading: &mut bool,
    error: &mut Option<String>,
    list: &mut Vec<T>,
    call: F,
) -> ActionResult<()>
where
    F: Future<Output = ClientResult<Vec<T>>>,
{
    *loading = true;
    *error = None;
    let result = match call.await {
        Ok(rows) => {
            *list = rows;
            ActionResult::done()
        }
        Err(err) => {
            let text = err.to_string();
            tracing::error!(error = %text, "Category fetch failed");
            *error = Some(text.clone());
            ActionResult::failed(text)
        }
    };
    *loading = false;
    result
}

/// Await an envelope-checked mutation, then reconcile `list` by
/// awaiting `refetch`.
///
/// `refetch` is a lazy future: a rejected or failed mutation drops it
/// unawaited, so no reload request goes out.
async fn run_mutation<T, R, M, F>(
    loading: &mut bool,
    error: &mut Option<String>,
    list: &mut Vec<T>,
    mutation: M,
    refetch: F,
    fallback: &str,
) -> ActionResult<()>
where
    M: Future<Output = ClientResult<ApiResponse<R>>>,
    F: Future<Output = ClientResult<Vec<T>>>,
{
    *loading = true;
    *error = None;
    let result = match mutation.await {
        Ok(response) if response.is_success() => {
            let message = response.message;
            if let Err(err) = refetch.await.map(|rows| *list = rows) {
                // The write landed; only the reload failed
                let text = err.to_string();
                tracing::warn!(error = %text, "Category reload failed after write");
                *error = Some(text);
            }
            ActionResult::done_with_message(message)
        }
        Ok(response) => {
            let text = response.message_or(fallback);
            *error = Some(text.clone());
            ActionResult::failed(text)
        }
        Err(err) => {
            let text = err.to_string();
            tracing::error!(error = %text, "Category mutation failed");
            *error = Some(text.clone());
            ActionResult::failed(text)
        }
    };
    *loading = false;
    result
}

/// Fold one branch of the six-way fetch into the store
fn settle<T>(error: &mut Option<String>, list: &mut Vec<T>, outcome: ClientResult<Vec<T>>) -> bool {
    match outcome {
        Ok(rows) => {
            *list = rows;
            true
        }
        Err(err) => {
            let text = err.to_string();
            tracing::error!(error = %text, "Category fetch failed");
            *error = Some(text);
            false
        }
    }
}

impl CategoryStore {
    pub fn new(services: CategoryServices) -> Self {
        Self {
            services,
            purposes: Vec::new(),
            visit_paths: Vec::new(),
            member_statuses: Vec::new(),
            staff_grades: Vec::new(),
            goods_types: Vec::new(),
            class_types: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Fetch all six lists concurrently
    ///
    /// Lists that load keep their rows even when a sibling fails; the
    /// error slot ends up holding the last failure.
    pub async fn fetch_all(&mut self) -> ActionResult<()> {
        self.loading = true;
        self.error = None;

        let (purposes, visit_paths, member_statuses, staff_grades, goods_types, class_types) = tokio::join!(
            self.services.purpose.get_all(),
            self.services.visit_path.get_all(),
            self.services.member_status.get_all(),
            self.services.staff_grade.get_all(),
            self.services.goods_type.get_all(),
            self.services.class_type.get_all(),
        );

        let mut ok = settle(&mut self.error, &mut self.purposes, purposes);
        ok &= settle(&mut self.error, &mut self.visit_paths, visit_paths);
        ok &= settle(&mut self.error, &mut self.member_statuses, member_statuses);
        ok &= settle(&mut self.error, &mut self.staff_grades, staff_grades);
        ok &= settle(&mut self.error, &mut self.goods_types, goods_types);
        ok &= settle(&mut self.error, &mut self.class_types, class_types);

        self.loading = false;
        if ok {
            ActionResult::done()
        } else {
            ActionResult::failed(self.error.clone().unwrap_or_default())
        }
    }

    pub async fn fetch_purposes(&mut self) -> ActionResult<()> {
        run_fetch(
            &mut self.loading,
            &mut self.error,
            &mut self.purposes,
            self.services.purpose.get_all(),
        )
        .await
    }

    pub async fn fetch_visit_paths(&mut self) -> ActionResult<()> {
        run_fetch(
            &mut self.loading,
            &mut self.error,
            &mut self.visit_paths,
            self.services.visit_path.get_all(),
        )
        .await
    }

    pub async fn fetch_member_statuses(&mut self) -> ActionResult<()> {
        run_fetch(
            &mut self.loading,
            &mut self.error,
            &mut self.member_statuses,
            self.services.member_status.get_all(),
        )
        .await
    }

    pub async fn fetch_staff_grades(&mut self) -> ActionResult<()> {
        run_fetch(
            &mut self.loading,
            &mut self.error,
            &mut self.staff_grades,
            self.services.staff_grade.get_all(),
        )
        .await
    }

    pub async fn fetch_goods_types(&mut self) -> ActionResult<()> {
        run_fetch(
            &mut self.loading,
            &mut self.error,
            &mut self.goods_types,
            self.services.goods_type.get_all(),
        )
        .await
    }

    pub async fn fetch_class_types(&mut self) -> ActionResult<()> {
        run_fetch(
            &mut self.loading,
            &mut self.error,
            &mut self.class_types,
            self.services.class_type.get_all(),
        )
        .await
    }

    pub async fn create_purpose(&mut self, purpose_name: &str) -> ActionResult<()> {
        let request = PurposeRequest {
            purpose_name: purpose_name.to_string(),
        };
        run_mutation(
            &mut self.loading,
            &mut self.error,
            &mut self.purposes,
            self.services.purpose.create(&request),
            self.services.purpose.get_all(),
            "Failed to create purpose",
        )
        .await
    }

    pub async fn update_purpose(&mut self, idx: i64, purpose_name: &str) -> ActionResult<()> {
        let request = PurposeRequest {
            purpose_name: purpose_name.to_string(),
        };
        run_mutation(
            &mut self.loading,
            &mut self.error,
            &mut self.purposes,
            self.services.purpose.update(idx, &request),
            self.services.purpose.get_all(),
            "Failed to update purpose",
        )
        .await
    }

    pub async fn delete_purpose(&mut self, idx: i64) -> ActionResult<()> {
        run_mutation(
            &mut self.loading,
            &mut self.error,
            &mut self.purposes,
            self.services.purpose.delete(idx),
            self.services.purpose.get_all(),
            "Failed to delete purpose",
        )
        .await
    }

    pub async fn create_visit_path(&mut self, visit_path_name: &str) -> ActionResult<()> {
        let request = VisitPathRequest {
            visit_path_name: visit_path_name.to_string(),
        };
        run_mutation(
            &mut self.loading,
            &mut self.error,
            &mut self.visit_paths,
            self.services.visit_path.create(&request),
            self.services.visit_path.get_all(),
            "Failed to create visit path",
        )
        .await
    }

    pub async fn update_visit_path(&mut self, idx: i64, visit_path_name: &str) -> ActionResult<()> {
        let request = VisitPathRequest {
            visit_path_name: visit_path_name.to_string(),
        };
        run_mutation(
            &mut self.loading,
            &mut self.error,
            &mut self.visit_paths,
            self.services.visit_path.update(idx, &request),
            self.services.visit_path.get_all(),
            "Failed to update visit path",
        )
        .await
    }

    pub async fn delete_visit_path(&mut self, idx: i64) -> ActionResult<()> {
        run_mutation(
            &mut self.loading,
            &mut self.error,
            &mut self.visit_paths,
            self.services.visit_path.delete(idx),
            self.services.visit_path.get_all(),
            "Failed to delete visit path",
        )
        .await
    }

    pub async fn create_member_status(&mut self, status_name: &str) -> ActionResult<()> {
        let request = MemberStatusRequest {
            status_name: status_name.to_string(),
        };
        run_mutation(
            &mut self.loading,
            &mut self.error,
            &mut self.member_statuses,
            self.services.member_status.create(&request),
            self.services.member_status.get_all(),
            "Failed to create member status",
        )
        .await
    }

    pub async fn update_member_status(&mut self, idx: i64, status_name: &str) -> ActionResult<()> {
        let request = MemberStatusRequest {
            status_name: status_name.to_string(),
        };
        run_mutation(
            &mut self.loading,
            &mut self.error,
            &mut self.member_statuses,
            self.services.member_status.update(idx, &request),
            self.services.member_status.get_all(),
            "Failed to update member status",
        )
        .await
    }

    pub async fn delete_member_status(&mut self, idx: i64) -> ActionResult<()> {
        run_mutation(
            &mut self.loading,
            &mut self.error,
            &mut self.member_statuses,
            self.services.member_status.delete(idx),
            self.services.member_status.get_all(),
            "Failed to delete member status",
        )
        .await
    }

    pub async fn create_staff_grade(&mut self, name: &str) -> ActionResult<()> {
        let request = StaffGradeRequest {
            name: name.to_string(),
        };
        run_mutation(
            &mut self.loading,
            &mut self.error,
            &mut self.staff_grades,
            self.services.staff_grade.create(&request),
            self.services.staff_grade.get_all(),
            "Failed to create staff grade",
        )
        .await
    }

    pub async fn update_staff_grade(&mut self, idx: i64, name: &str) -> ActionResult<()> {
        let request = StaffGradeRequest {
            name: name.to_string(),
        };
        run_mutation(
            &mut self.loading,
            &mut self.error,
            &mut self.staff_grades,
            self.services.staff_grade.update(idx, &request),
            self.services.staff_grade.get_all(),
            "Failed to update staff grade",
        )
        .await
    }

    pub async fn delete_staff_grade(&mut self, idx: i64) -> ActionResult<()> {
        run_mutation(
            &mut self.loading,
            &mut self.error,
            &mut self.staff_grades,
            self.services.staff_grade.delete(idx),
            self.services.staff_grade.get_all(),
            "Failed to delete staff grade",
        )
        .await
    }

    pub async fn create_goods_type(&mut self, type_name: &str) -> ActionResult<()> {
        let request = GoodsTypeRequest {
            type_name: type_name.to_string(),
        };
        run_mutation(
            &mut self.loading,
            &mut self.error,
            &mut self.goods_types,
            self.services.goods_type.create(&request),
            self.services.goods_type.get_all(),
            "Failed to create goods type",
        )
        .await
    }

    pub async fn update_goods_type(&mut self, idx: i64, type_name: &str) -> ActionResult<()> {
        let request = GoodsTypeRequest {
            type_name: type_name.to_string(),
        };
        run_mutation(
            &mut self.loading,
            &mut self.error,
            &mut self.goods_types,
            self.services.goods_type.update(idx, &request),
            self.services.goods_type.get_all(),
            "Failed to update goods type",
        )
        .await
    }

    pub async fn delete_goods_type(&mut self, idx: i64) -> ActionResult<()> {
        run_mutation(
            &mut self.loading,
            &mut self.error,
            &mut self.goods_types,
            self.services.goods_type.delete(idx),
            self.services.goods_type.get_all(),
            "Failed to delete goods type",
        )
        .await
    }

    pub async fn create_class_type(&mut self, type_name: &str) -> ActionResult<()> {
        let request = ClassTypeRequest {
            type_name: type_name.to_string(),
        };
        run_mutation(
            &mut self.loading,
            &mut self.error,
            &mut self.class_types,
            self.services.class_type.create(&request),
            self.services.class_type.get_all(),
            "Failed to create class type",
        )
        .await
    }

    pub async fn update_class_type(&mut self, idx: i64, type_name: &str) -> ActionResult<()> {
        let request = ClassTypeRequest {
            type_name: type_name.to_string(),
        };
        run_mutation(
            &mut self.loading,
            &mut self.error,
            &mut self.class_types,
            self.services.class_type.update(idx, &request),
            self.services.class_type.get_all(),
            "Failed to update class type",
        )
        .await
    }

    pub async fn delete_class_type(&mut self, idx: i64) -> ActionResult<()> {
        run_mutation(
            &mut self.loading,
            &mut self.error,
            &mut self.class_types,
            self.services.class_type.delete(idx),
            self.services.class_type.get_all(),
            "Failed to delete class type",
        )
        .await
    }
}
