//! Then steps for todo lifecycle BDD scenarios.

use super::world::TodoWorld;
use rstest_bdd_macros::then;
use serde_json::Value;

#[then("the response status is {status:u16}")]
fn response_status_is(world: &TodoWorld, status: u16) -> Result<(), eyre::Report> {
    let response = world.response()?;
    if response.status.as_u16() != status {
        return Err(eyre::eyre!(
            "expected status {status}, got {} with {}",
            response.status,
            response.body
        ));
    }
    Ok(())
}

#[then(r#"the todo title is "{title}""#)]
fn todo_title_is(world: &TodoWorld, title: String) -> Result<(), eyre::Report> {
    let actual = &world.response()?.body["title"];
    if actual.as_str() != Some(title.as_str()) {
        return Err(eyre::eyre!("expected title {title:?}, found {actual}"));
    }
    Ok(())
}

fn completion(world: &TodoWorld) -> Result<bool, eyre::Report> {
    let body = &world.response()?.body;
    body["completed"]
        .as_bool()
        .ok_or_else(|| eyre::eyre!("response has no completion flag: {body}"))
}

#[then("the todo is completed")]
fn todo_is_completed(world: &TodoWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(completion(world)?, "expected the todo to be completed");
    Ok(())
}

#[then("the todo is not completed")]
fn todo_is_not_completed(world: &TodoWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(!completion(world)?, "expected the todo to be open");
    Ok(())
}

#[then("the todo has no due date")]
fn todo_has_no_due_date(world: &TodoWorld) -> Result<(), eyre::Report> {
    let due_date = &world.response()?.body["due_date"];
    eyre::ensure!(*due_date == Value::Null, "expected no due date, found {due_date}");
    Ok(())
}

#[then(r#"the error message mentions "{fragment}""#)]
fn error_mentions(world: &TodoWorld, fragment: String) -> Result<(), eyre::Report> {
    let body = &world.response()?.body;
    let message = body["error"]
        .as_str()
        .ok_or_else(|| eyre::eyre!("response is not an error body: {body}"))?;
    eyre::ensure!(
        message.contains(&fragment),
        "expected error to mention {fragment:?}, got {message:?}"
    );
    Ok(())
}

#[then("{count:usize} todos are returned")]
fn todos_returned(world: &TodoWorld, count: usize) -> Result<(), eyre::Report> {
    let body = &world.response()?.body;
    let actual = body
        .as_array()
        .map(Vec::len)
        .ok_or_else(|| eyre::eyre!("response is not a list: {body}"))?;
    eyre::ensure!(actual == count, "expected {count} todos, got {actual}");
    Ok(())
}
