//! Lookup category store tests against an in-process backend

mod support;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use gym_client::ApiResponse;
use shared::models::{ClassType, GoodsType, MemberStatus, Purpose, StaffGrade, VisitPath};

fn purpose(idx: i64, label: &str) -> Purpose {
    Purpose {
        idx,
        purpose_name: label.to_string(),
    }
}

/// Routes for all six list reads, the delegated ones under their
/// owning API's path
fn all_list_routes() -> Router {
    Router::new()
        .route(
            "/api/common/getPurposeList",
            get(|| async { Json(ApiResponse::ok(vec![purpose(1, "diet")])) }),
        )
        .route(
            "/api/common/getVisitPathList",
            get(|| async {
                Json(ApiResponse::ok(vec![VisitPath {
                    idx: 1,
                    visit_path_name: "referral".to_string(),
                }]))
            }),
        )
        .route(
            "/api/common/getMemberStatusList",
            get(|| async {
                Json(ApiResponse::ok(vec![MemberStatus {
                    idx: 1,
                    status_name: "active".to_string(),
                }]))
            }),
        )
        .route(
            "/api/member/getStaffGradeList",
            get(|| async {
                Json(ApiResponse::ok(vec![StaffGrade {
                    idx: 1,
                    name: "Trainer".to_string(),
                }]))
            }),
        )
        .route(
            "/api/goods/getGoodsTypeList",
            get(|| async {
                Json(ApiResponse::ok(vec![GoodsType {
                    idx: 1,
                    type_name: "Membership".to_string(),
                }]))
            }),
        )
        .route(
            "/api/class/getClassTypeList",
            get(|| async {
                Json(ApiResponse::ok(vec![ClassType {
                    idx: 1,
                    type_name: "Group".to_string(),
                }]))
            }),
        )
}

#[tokio::test]
async fn test_fetch_all_loads_all_six_lists() {
    let base = support::serve(all_list_routes()).await;
    let mut ctx = support::context(&base);

    let result = ctx.categories.fetch_all().await;

    assert!(result.success);
    assert_eq!(ctx.categories.purposes[0].purpose_name, "diet");
    assert_eq!(ctx.categories.visit_paths[0].visit_path_name, "referral");
    assert_eq!(ctx.categories.member_statuses[0].status_name, "active");
    assert_eq!(ctx.categories.staff_grades[0].name, "Trainer");
    assert_eq!(ctx.categories.goods_types[0].type_name, "Membership");
    assert_eq!(ctx.categories.class_types[0].type_name, "Group");
    assert!(!ctx.categories.loading);
    assert!(ctx.categories.error.is_none());
}

#[tokio::test]
async fn test_fetch_all_keeps_the_lists_that_loaded() {
    // Purposes fail, everything else answers
    let app = Router::new()
        .route(
            "/api/common/getPurposeList",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        )
        .route(
            "/api/common/getVisitPathList",
            get(|| async {
                Json(ApiResponse::ok(vec![VisitPath {
                    idx: 1,
                    visit_path_name: "referral".to_string(),
                }]))
            }),
        )
        .route(
            "/api/common/getMemberStatusList",
            get(|| async { Json(ApiResponse::ok(Vec::<MemberStatus>::new())) }),
        )
        .route(
            "/api/member/getStaffGradeList",
            get(|| async { Json(ApiResponse::ok(Vec::<StaffGrade>::new())) }),
        )
        .route(
            "/api/goods/getGoodsTypeList",
            get(|| async { Json(ApiResponse::ok(Vec::<GoodsType>::new())) }),
        )
        .route(
            "/api/class/getClassTypeList",
            get(|| async { Json(ApiResponse::ok(Vec::<ClassType>::new())) }),
        );
    let base = support::serve(app).await;
    let mut ctx = support::context(&base);

    let result = ctx.categories.fetch_all().await;

    assert!(!result.success);
    assert!(ctx.categories.error.is_some());
    assert!(ctx.categories.purposes.is_empty());
    assert_eq!(ctx.categories.visit_paths.len(), 1);
    assert!(!ctx.categories.loading);
}

#[tokio::test]
async fn test_mutation_success_refetches_the_touched_list() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let counter = fetches.clone();
    let app = Router::new()
        .route(
            "/api/common/getPurposeList",
            get(move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(ApiResponse::ok(vec![purpose(1, "diet"), purpose(2, "bulk")]))
            }),
        )
        .route(
            "/api/common/category/createPurpose",
            post(|| async { Json(ApiResponse::<Purpose>::accepted("Created")) }),
        );
    let base = support::serve(app).await;
    let mut ctx = support::context(&base);

    let result = ctx.categories.create_purpose("bulk").await;

    assert!(result.success);
    assert_eq!(result.message.as_deref(), Some("Created"));
    assert_eq!(ctx.categories.purposes.len(), 2);
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
    assert!(!ctx.categories.loading);
}

#[tokio::test]
async fn test_mutation_rejection_sets_the_error_without_refetching() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let counter = fetches.clone();
    let app = Router::new()
        .route(
            "/api/common/getPurposeList",
            get(move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(ApiResponse::ok(Vec::<Purpose>::new()))
            }),
        )
        .route(
            "/api/common/category/createPurpose",
            post(|| async { Json(ApiResponse::<Purpose>::error(500, "duplicate label")) }),
        );
    let base = support::serve(app).await;
    let mut ctx = support::context(&base);
    ctx.categories.purposes = vec![purpose(1, "diet")];

    let result = ctx.categories.create_purpose("diet").await;

    assert!(!result.success);
    assert_eq!(ctx.categories.error.as_deref(), Some("duplicate label"));
    assert_eq!(ctx.categories.purposes.len(), 1);
    assert_eq!(fetches.load(Ordering::SeqCst), 0);
    assert!(!ctx.categories.loading);
}
