//! Route table for the todo service.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | /todos | `list_todos` |
//! | POST | /todos | `create_todo` |
//! | GET | /todos/{id} | `get_todo` |
//! | PUT | /todos/{id} | `update_todo` |
//! | DELETE | /todos/{id} | `delete_todo` |
//! | PATCH | /todos/{id}/toggle | `toggle_todo` |
//! | GET | /health | `health` |
//! | GET | /ready | `readiness` |
//! | GET | / | `service_info` |
//!
//! The todo routes are mounted under both `/todos` and `/api/todos`. Any
//! other method or path answers 404 `{"error":"route not found"}`.

use super::handlers::{
    create_todo, delete_todo, get_todo, health, list_todos, readiness, route_not_found,
    service_info, toggle_todo, update_todo,
};
use crate::todo::{ports::TodoRepository, services::TodoService};
use axum::Router;
use axum::routing::{get, patch};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the application router around `service`.
pub fn router<R>(service: TodoService<R>) -> Router
where
    R: TodoRepository + 'static,
{
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .route("/ready", get(readiness::<R>))
        .nest("/todos", todo_routes::<R>())
        .nest("/api/todos", todo_routes::<R>())
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

fn todo_routes<R>() -> Router<TodoService<R>>
where
    R: TodoRepository + 'static,
{
    Router::new()
        .route("/", get(list_todos::<R>).post(create_todo::<R>))
        .route(
            "/{id}",
            get(get_todo::<R>).put(update_todo::<R>).delete(delete_todo::<R>),
        )
        .route("/{id}/toggle", patch(toggle_todo::<R>))
        .method_not_allowed_fallback(route_not_found)
}
