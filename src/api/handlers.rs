//! Request handlers for the todo routes and service probes.

use super::error::ApiError;
use super::extract::{ApiJson, ApiQuery};
use crate::todo::{
    domain::Todo,
    ports::TodoRepository,
    services::{CreateTodoRequest, ListTodosRequest, TodoService, UpdateTodoRequest},
};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// GET /todos
///
/// # Errors
///
/// Returns an [`ApiError`] for malformed query strings or storage failures.
pub async fn list_todos<R>(
    State(service): State<TodoService<R>>,
    ApiQuery(request): ApiQuery<ListTodosRequest>,
) -> Result<Json<Vec<Todo>>, ApiError>
where
    R: TodoRepository + 'static,
{
    Ok(Json(service.list(request).await?))
}

/// GET /todos/{id}
///
/// # Errors
///
/// Returns an [`ApiError`] for invalid or unknown ids and storage failures.
pub async fn get_todo<R>(
    State(service): State<TodoService<R>>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError>
where
    R: TodoRepository + 'static,
{
    Ok(Json(service.get(&id).await?))
}

/// POST /todos
///
/// # Errors
///
/// Returns an [`ApiError`] for invalid payloads and storage failures.
pub async fn create_todo<R>(
    State(service): State<TodoService<R>>,
    ApiJson(request): ApiJson<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError>
where
    R: TodoRepository + 'static,
{
    let todo = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /todos/{id}
///
/// # Errors
///
/// Returns an [`ApiError`] for invalid ids or payloads, unknown ids, and
/// storage failures.
pub async fn update_todo<R>(
    State(service): State<TodoService<R>>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateTodoRequest>,
) -> Result<Json<Todo>, ApiError>
where
    R: TodoRepository + 'static,
{
    Ok(Json(service.update(&id, request).await?))
}

/// PATCH /todos/{id}/toggle
///
/// # Errors
///
/// Returns an [`ApiError`] for invalid or unknown ids and storage failures.
pub async fn toggle_todo<R>(
    State(service): State<TodoService<R>>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError>
where
    R: TodoRepository + 'static,
{
    Ok(Json(service.toggle(&id).await?))
}

/// DELETE /todos/{id}
///
/// # Errors
///
/// Returns an [`ApiError`] for invalid or unknown ids and storage failures.
pub async fn delete_todo<R>(
    State(service): State<TodoService<R>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    R: TodoRepository + 'static,
{
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Liveness probe body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: String,
    /// RFC 3339 time of the check.
    pub timestamp: String,
}

/// GET /health
#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Readiness probe body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// `"ready"` or `"not ready"`.
    pub status: String,
    /// `"connected"` or `"disconnected"`.
    pub database: String,
    /// RFC 3339 time of the check.
    pub timestamp: String,
}

/// GET /ready
///
/// Answers 503 when storage cannot be reached.
pub async fn readiness<R>(
    State(service): State<TodoService<R>>,
) -> (StatusCode, Json<ReadinessResponse>)
where
    R: TodoRepository + 'static,
{
    let timestamp = Utc::now().to_rfc3339();
    match service.check_ready().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: "ready".to_owned(),
                database: "connected".to_owned(),
                timestamp,
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    status: "not ready".to_owned(),
                    database: "disconnected".to_owned(),
                    timestamp,
                }),
            )
        }
    }
}

/// Endpoint map advertised at the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Liveness probe path.
    pub health: String,
    /// Readiness probe path.
    pub ready: String,
    /// Todo collection path.
    pub todos: String,
}

/// Service descriptor returned at the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service name.
    pub message: String,
    /// Crate version.
    pub version: String,
    /// Available endpoints.
    pub endpoints: Endpoints,
}

/// GET /
#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Todo List API".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        endpoints: Endpoints {
            health: "/health".to_owned(),
            ready: "/ready".to_owned(),
            todos: "/todos".to_owned(),
        },
    })
}

/// Fallback for unmatched routes.
#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
pub async fn route_not_found() -> ApiError {
    ApiError::route_not_found()
}
