//! Given steps for todo lifecycle BDD scenarios.

use super::world::TodoWorld;
use axum::http::{Method, StatusCode};
use rstest_bdd_macros::given;
use serde_json::json;

fn create(world: &mut TodoWorld, body: &serde_json::Value) -> Result<(), eyre::Report> {
    let response = world.request(Method::POST, "/todos", Some(&body.to_string()))?;
    if response.status != StatusCode::CREATED {
        return Err(eyre::eyre!(
            "expected todo creation to succeed, got {} with {}",
            response.status,
            response.body
        ));
    }
    Ok(())
}

#[given("an empty todo service")]
fn empty_service(world: &mut TodoWorld) {
    *world = TodoWorld::new();
}

#[given(r#"a todo titled "{title}" exists"#)]
fn todo_exists(world: &mut TodoWorld, title: String) -> Result<(), eyre::Report> {
    create(world, &json!({ "title": title }))
}

#[given(r#"a todo "{title}" due on "{due_date}" exists"#)]
fn todo_with_due_date_exists(
    world: &mut TodoWorld,
    title: String,
    due_date: String,
) -> Result<(), eyre::Report> {
    create(world, &json!({ "title": title, "due_date": due_date }))
}

#[given(r#"a todo "{title}" with description "{description}" exists"#)]
fn described_todo_exists(
    world: &mut TodoWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    create(world, &json!({ "title": title, "description": description }))
}
