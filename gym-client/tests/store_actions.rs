//! Store action tests against an in-process backend

mod support;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};

use gym_client::stores::Reconcile;
use gym_client::ApiResponse;
use shared::models::{Event, EventRequest, Goods, GoodsRequest, Member, MemberRequest};

fn member(idx: i64, name: &str) -> Member {
    Member {
        idx,
        user_name: name.to_string(),
        phone: "01012345678".to_string(),
        ..Member::default()
    }
}

fn member_request(name: &str) -> MemberRequest {
    MemberRequest {
        user_name: name.to_string(),
        gender: "F".to_string(),
        birth: None,
        age: None,
        phone: "01012345678".to_string(),
        get_utilization: None,
        get_renting: None,
        purpose: None,
        visit_path: None,
        consultant: None,
        address: None,
    }
}

fn goods(idx: i64, name: &str) -> Goods {
    Goods {
        idx,
        goods_name: name.to_string(),
        duration: 30,
        goods_type: 1,
        ..Goods::default()
    }
}

fn goods_request(name: &str) -> GoodsRequest {
    GoodsRequest {
        goods_name: name.to_string(),
        cash: Some(100_000),
        card: None,
        description: None,
        duration: 30,
        goods_type: 1,
        use_count: 0,
        instructor: None,
    }
}

#[tokio::test]
async fn test_member_store_reconciles_writes_locally() {
    let app = Router::new()
        .route(
            "/api/member/getMemberList",
            get(|| async { Json(ApiResponse::ok(vec![member(1, "Kim")])) }),
        )
        .route(
            "/api/member/writeMember",
            post(|| async { Json(ApiResponse::ok(member(2, "Lee"))) }),
        )
        .route(
            "/api/member/{idx}",
            put(|| async { Json(ApiResponse::ok(member(2, "Lee Updated"))) }),
        )
        .route(
            "/api/member/deleteMember/{idx}",
            delete(|| async { Json(ApiResponse::<serde_json::Value>::accepted("deleted")) }),
        );
    let base = support::serve(app).await;
    let mut ctx = support::context(&base);

    let result = ctx.members.fetch_all().await;
    assert!(result.success);
    assert_eq!(ctx.members.state.items.len(), 1);
    assert!(!ctx.members.state.loading);

    let result = ctx.members.create(&member_request("Lee")).await;
    assert!(result.success);
    assert_eq!(ctx.members.state.items.len(), 2);
    assert_eq!(result.data.unwrap().idx, 2);

    let result = ctx.members.update(2, &member_request("Lee Updated")).await;
    assert!(result.success);
    assert_eq!(ctx.members.state.items[1].user_name, "Lee Updated");

    let result = ctx.members.delete(1).await;
    assert!(result.success);
    let ids: Vec<i64> = ctx.members.state.items.iter().map(|m| m.idx).collect();
    assert_eq!(ids, vec![2]);
}

#[tokio::test]
async fn test_member_fetch_failure_leaves_the_collection_untouched() {
    let app = Router::new().route(
        "/api/member/getMemberList",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let base = support::serve(app).await;
    let mut ctx = support::context(&base);
    ctx.members.state.items = vec![member(1, "Kim")];

    let result = ctx.members.fetch_all().await;

    assert!(!result.success);
    assert!(ctx.members.state.error.is_some());
    assert!(!ctx.members.state.loading);
    assert_eq!(ctx.members.state.items.len(), 1);
}

#[tokio::test]
async fn test_delete_of_an_absent_row_is_idempotent() {
    let app = Router::new().route(
        "/api/member/deleteMember/{idx}",
        delete(|| async { Json(ApiResponse::<serde_json::Value>::accepted("deleted")) }),
    );
    let base = support::serve(app).await;
    let mut ctx = support::context(&base);
    ctx.members.state.items = vec![member(1, "Kim")];

    let result = ctx.members.delete(99).await;

    assert!(result.success);
    assert_eq!(ctx.members.state.items.len(), 1);
}

#[tokio::test]
async fn test_goods_create_success_refetches_the_list() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let counter = fetches.clone();
    let app = Router::new()
        .route(
            "/api/goods/getGoodsList",
            get(move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(ApiResponse::ok(vec![goods(1, "1 month"), goods(2, "3 month")]))
            }),
        )
        .route(
            "/api/goods/createGoods",
            // Success without an echoed row
            post(|| async { Json(ApiResponse::<Goods>::accepted("Created")) }),
        );
    let base = support::serve(app).await;
    let mut ctx = support::context(&base);

    let result = ctx.goods.create(&goods_request("3 month")).await;

    assert!(result.success);
    assert_eq!(result.message.as_deref(), Some("Created"));
    assert_eq!(ctx.goods.state.items.len(), 2);
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
    assert!(!ctx.goods.state.loading);
}

#[tokio::test]
async fn test_goods_create_splices_locally_when_the_row_is_echoed() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let counter = fetches.clone();
    let app = Router::new()
        .route(
            "/api/goods/getGoodsList",
            get(move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(ApiResponse::ok(Vec::<Goods>::new()))
            }),
        )
        .route(
            "/api/goods/createGoods",
            post(|| async { Json(ApiResponse::ok_with_message(goods(3, "PT 10"), "Created")) }),
        );
    let base = support::serve(app).await;
    let mut ctx = support::context(&base);
    ctx.goods.reconcile = Reconcile::Local;

    let result = ctx.goods.create(&goods_request("PT 10")).await;

    assert!(result.success);
    assert_eq!(result.message.as_deref(), Some("Created"));
    assert_eq!(result.data.unwrap().idx, 3);
    let ids: Vec<i64> = ctx.goods.state.items.iter().map(|g| g.idx).collect();
    assert_eq!(ids, vec![3]);
    // Echoed row spliced in place, no refetch needed
    assert_eq!(fetches.load(Ordering::SeqCst), 0);
    assert!(!ctx.goods.state.loading);
}

#[tokio::test]
async fn test_goods_update_rejection_skips_the_refetch() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let counter = fetches.clone();
    let app = Router::new()
        .route(
            "/api/goods/getGoodsList",
            get(move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(ApiResponse::ok(Vec::<Goods>::new()))
            }),
        )
        .route(
            "/api/goods/{idx}",
            put(|| async { Json(ApiResponse::<Goods>::error(500, "conflict")) }),
        );
    let base = support::serve(app).await;
    let mut ctx = support::context(&base);
    ctx.goods.state.items = vec![goods(1, "1 month")];

    let result = ctx.goods.update(1, &goods_request("1 month")).await;

    assert!(!result.success);
    assert_eq!(ctx.goods.state.error.as_deref(), Some("conflict"));
    assert_eq!(fetches.load(Ordering::SeqCst), 0);
    // Stale row stays until a successful write or refetch
    assert_eq!(ctx.goods.state.items.len(), 1);
    assert!(!ctx.goods.state.loading);
}

#[tokio::test]
async fn test_event_store_appends_the_synthesized_row() {
    let app = Router::new().route(
        "/api/event/createEvent",
        post(|| async { Json(ApiResponse::<Event>::accepted("Accepted")) }),
    );
    let base = support::serve(app).await;
    let mut ctx = support::context(&base);

    let request = EventRequest {
        member_idx: Some(7),
        staff_idx: None,
        goods_idx: None,
        title: "PT session".to_string(),
        description: None,
        start_at: Some("2025-12-11 10:00".to_string()),
        end_et: Some("2025-12-11 11:00".to_string()),
        all_day: 0,
    };
    let result = ctx.events.create(&request).await;

    assert!(result.success);
    assert_eq!(ctx.events.state.items.len(), 1);
    let appended = &ctx.events.state.items[0];
    assert!(appended.idx > 0);
    assert_eq!(appended.title, "PT session");
}
