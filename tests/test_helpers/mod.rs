//! Shared fixtures for integration tests.

use std::sync::{Arc, Mutex, PoisonError};

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use eyre::WrapErr;
use http_body_util::BodyExt;
use mockable::Clock;
use serde_json::Value;
use todo_service::{
    api,
    todo::{adapters::memory::InMemoryTodoRepository, services::TodoService},
};
use tower::ServiceExt;

/// Clock that advances by one second on every reading.
#[derive(Debug)]
pub struct StepClock {
    next: Mutex<DateTime<Utc>>,
}

impl StepClock {
    /// Starts at 2026-01-01T00:00:00Z.
    pub fn new() -> Self {
        Self {
            next: Mutex::new(
                Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
                    .single()
                    .unwrap_or_default(),
            ),
        }
    }
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StepClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
        let now = *next;
        *next = now + TimeDelta::seconds(1);
        now
    }
}

/// Builds the application router over an empty in-memory store.
pub fn memory_router() -> Router {
    let repository = InMemoryTodoRepository::new(Arc::new(StepClock::new()));
    api::router(TodoService::new(Arc::new(repository)))
}

/// A decoded HTTP response.
#[derive(Debug)]
pub struct JsonResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Sends one request through `router` and decodes the JSON body.
///
/// Empty bodies decode as `Value::Null`.
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> Result<JsonResponse, eyre::Report> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_owned())),
        None => builder.body(Body::empty()),
    }
    .wrap_err("build request")?;

    let response = router
        .clone()
        .oneshot(request)
        .await
        .wrap_err("route request")?;
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .wrap_err("read response body")?
        .to_bytes();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).wrap_err("decode response body")?
    };
    Ok(JsonResponse { status, body })
}
