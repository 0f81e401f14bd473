//! In-process backend harness for integration tests
//!
//! Each test builds an axum router mimicking the slice of the backend
//! it exercises, serves it on an ephemeral port and points a real
//! client at it.

#![allow(dead_code)]

use axum::Router;
use gym_client::stores::StoreContext;
use gym_client::{ClientConfig, HttpClient, Session};

/// Serve `router` on an ephemeral port, returning the base URL
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("serve test backend");
    });
    format!("http://{addr}")
}

/// An authenticated client against the harness backend
pub fn client(base_url: &str) -> HttpClient {
    HttpClient::new(
        &ClientConfig::new(base_url),
        Session::with_token("test-token"),
    )
}

/// A full store context against the harness backend
pub fn context(base_url: &str) -> StoreContext {
    StoreContext::from_config(
        &ClientConfig::new(base_url),
        Session::with_token("test-token"),
    )
}
