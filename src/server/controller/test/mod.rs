use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::server::{
    router,
    service::notification::{NotificationEvent, NotificationService},
    state::AppState,
};


/// Builds a router over a fresh in-memory database.
///
/// The returned context owns the database connection; tests reach the same
/// connection through `context.db` for direct assertions.
async fn test_app(strict_ownership: bool) -> (TestContext, Router) {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap().clone();

    let notifier = NotificationService::new(reqwest::Client::new(), None);
    let app = router::router().with_state(AppState::new(db, notifier, strict_ownership));

    (test, app)
}

/// Like `test_app`, but events are captured on a channel so tests can
/// assert what was emitted.
async fn test_app_with_events(
    strict_ownership: bool,
) -> (TestContext, Router, UnboundedReceiver<NotificationEvent>) {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap().clone();

    let (notifier, events) = NotificationService::capturing();
    let app = router::router().with_state(AppState::new(db, notifier, strict_ownership));

    (test, app, events)
}

/// Builds a request with the authenticated identity header and an optional
/// JSON body.
fn request(method: &str, uri: &str, user: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(user) = user {
        builder = builder.header("x-user-id", user);
    }

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Reads a response body as JSON.
async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
