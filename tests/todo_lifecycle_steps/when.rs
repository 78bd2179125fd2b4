//! When steps for todo lifecycle BDD scenarios.

use super::world::TodoWorld;
use axum::http::Method;
use rstest_bdd_macros::when;
use serde_json::json;

#[when(r#"a todo titled "{title}" is created"#)]
fn create_todo(world: &mut TodoWorld, title: String) -> Result<(), eyre::Report> {
    let body = json!({ "title": title }).to_string();
    world.request(Method::POST, "/todos", Some(&body))?;
    Ok(())
}

#[when("the todo is toggled")]
fn toggle_todo(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let path = format!("{}/toggle", world.todo_path()?);
    world.request(Method::PATCH, &path, None)?;
    Ok(())
}

#[when(r#"the todo priority is set to "{priority}""#)]
fn set_priority(world: &mut TodoWorld, priority: String) -> Result<(), eyre::Report> {
    let path = world.todo_path()?;
    let body = json!({ "priority": priority }).to_string();
    world.request(Method::PUT, &path, Some(&body))?;
    Ok(())
}

#[when("the todo due date is cleared")]
fn clear_due_date(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let path = world.todo_path()?;
    world.request(Method::PUT, &path, Some(r#"{"due_date":null}"#))?;
    Ok(())
}

#[when("the todo is deleted")]
fn delete_todo(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let path = world.todo_path()?;
    world.request(Method::DELETE, &path, None)?;
    Ok(())
}

#[when("the todo is fetched")]
fn fetch_todo(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let path = world.todo_path()?;
    world.request(Method::GET, &path, None)?;
    Ok(())
}

#[when(r#"todos are listed with search "{search}""#)]
fn list_with_search(world: &mut TodoWorld, search: String) -> Result<(), eyre::Report> {
    world.request(Method::GET, &format!("/todos?search={search}"), None)?;
    Ok(())
}
