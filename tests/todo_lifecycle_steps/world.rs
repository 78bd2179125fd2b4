//! Shared world state for todo lifecycle BDD scenarios.

use axum::Router;
use axum::http::Method;
use rstest::fixture;

use crate::test_helpers::{JsonResponse, memory_router, send};

/// Scenario world for todo lifecycle behaviour tests.
pub struct TodoWorld {
    pub router: Router,
    pub current_id: Option<i64>,
    pub last_response: Option<JsonResponse>,
}

impl TodoWorld {
    /// Creates a world around an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            router: memory_router(),
            current_id: None,
            last_response: None,
        }
    }

    /// Sends a request and records the response as the latest outcome.
    pub fn request(
        &mut self,
        method: Method,
        uri: &str,
        body: Option<&str>,
    ) -> Result<&JsonResponse, eyre::Report> {
        let response = run_async(send(&self.router, method, uri, body))?;
        if let Some(id) = response.body.get("id").and_then(serde_json::Value::as_i64) {
            self.current_id = Some(id);
        }
        Ok(&*self.last_response.insert(response))
    }

    /// Returns the path of the todo the scenario is working on.
    pub fn todo_path(&self) -> Result<String, eyre::Report> {
        let id = self
            .current_id
            .ok_or_else(|| eyre::eyre!("missing current todo in scenario world"))?;
        Ok(format!("/todos/{id}"))
    }

    /// Returns the latest response.
    pub fn response(&self) -> Result<&JsonResponse, eyre::Report> {
        self.last_response
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no request has been sent yet"))
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
