//! Repository behaviour against a live `PostgreSQL` database.

use crate::postgres::helpers::{PgContext, pg_context, test_pool_settings};
use chrono::{TimeZone, Utc};
use eyre::WrapErr;
use todo_service::todo::{
    adapters::postgres::PoolSettings,
    domain::{NewTodo, Priority, TodoFilter, TodoId, TodoTitle, TodoUpdate},
    ports::{TodoRepository, TodoRepositoryError},
};

fn new_todo(title: &str) -> Result<NewTodo, eyre::Report> {
    Ok(NewTodo::new(TodoTitle::new(title)?))
}

async fn context() -> Result<Option<PgContext>, eyre::Report> {
    pg_context(test_pool_settings()).await
}

#[tokio::test(flavor = "multi_thread")]
async fn create_stores_defaults_and_assigns_ids() -> Result<(), eyre::Report> {
    let Some(ctx) = context().await? else {
        return Ok(());
    };

    let first = ctx.repository.create(&new_todo("Buy milk")?).await?;
    let second = ctx.repository.create(&new_todo("Walk dog")?).await?;

    assert_eq!(first.id().value(), 1);
    assert_eq!(second.id().value(), 2);
    assert!(!first.completed());
    assert_eq!(first.priority(), Priority::Medium);
    assert_eq!(first.created_at(), first.updated_at());
    assert_eq!(
        ctx.repository.find_by_id(first.id()).await?,
        Some(first)
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_rows_report_absence() -> Result<(), eyre::Report> {
    let Some(ctx) = context().await? else {
        return Ok(());
    };
    let id = TodoId::from_persisted(404);

    assert_eq!(ctx.repository.find_by_id(id).await?, None);
    assert_eq!(
        ctx.repository
            .update(id, &TodoUpdate::new().with_completed(true))
            .await?,
        None
    );
    assert_eq!(ctx.repository.update(id, &TodoUpdate::new()).await?, None);
    assert_eq!(ctx.repository.toggle(id).await?, None);
    assert!(!ctx.repository.delete(id).await?);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn partial_update_touches_only_supplied_columns() -> Result<(), eyre::Report> {
    let Some(ctx) = context().await? else {
        return Ok(());
    };
    let due = Utc
        .with_ymd_and_hms(2026, 11, 1, 9, 0, 0)
        .single()
        .ok_or_else(|| eyre::eyre!("valid timestamp"))?;
    let created = ctx
        .repository
        .create(
            &new_todo("Pay rent")?
                .with_description("Before the 5th")
                .with_due_date(due),
        )
        .await?;

    let unchanged = ctx
        .repository
        .update(created.id(), &TodoUpdate::new())
        .await?
        .ok_or_else(|| eyre::eyre!("todo exists"))?;
    assert_eq!(unchanged, created);

    let raised = ctx
        .repository
        .update(created.id(), &TodoUpdate::new().with_priority(Priority::High))
        .await?
        .ok_or_else(|| eyre::eyre!("todo exists"))?;
    assert_eq!(raised.priority(), Priority::High);
    assert_eq!(raised.due_date(), Some(due));
    assert_eq!(raised.description(), Some("Before the 5th"));
    assert!(raised.updated_at() > created.updated_at());

    let cleared = ctx
        .repository
        .update(
            created.id(),
            &TodoUpdate::new().with_due_date(None).with_description(None),
        )
        .await?
        .ok_or_else(|| eyre::eyre!("todo exists"))?;
    assert_eq!(cleared.due_date(), None);
    assert_eq!(cleared.description(), None);
    assert_eq!(cleared.title(), "Pay rent");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn toggle_flips_in_place() -> Result<(), eyre::Report> {
    let Some(ctx) = context().await? else {
        return Ok(());
    };
    let created = ctx.repository.create(&new_todo("Water plants")?).await?;

    let first = ctx
        .repository
        .toggle(created.id())
        .await?
        .ok_or_else(|| eyre::eyre!("todo exists"))?;
    let second = ctx
        .repository
        .toggle(created.id())
        .await?
        .ok_or_else(|| eyre::eyre!("todo exists"))?;

    assert!(first.completed());
    assert!(!second.completed());
    assert!(second.updated_at() > first.updated_at());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn list_filters_orders_and_escapes_search() -> Result<(), eyre::Report> {
    let Some(ctx) = context().await? else {
        return Ok(());
    };
    let sale = ctx
        .repository
        .create(&new_todo("50% off sale")?.with_priority(Priority::High))
        .await?;
    ctx.repository.create(&new_todo("500 things")?).await?;
    ctx.repository
        .create(&new_todo("Walk dog")?.with_description("via the SALE aisle"))
        .await?;
    ctx.repository.toggle(sale.id()).await?;

    let all = ctx.repository.list(&TodoFilter::new()).await?;
    let titles: Vec<&str> = all.iter().map(|todo| todo.title()).collect();
    assert_eq!(titles, ["Walk dog", "500 things", "50% off sale"]);

    let percent = ctx
        .repository
        .list(&TodoFilter::new().with_search("0%"))
        .await?;
    assert_eq!(percent.len(), 1);

    let sale_matches = ctx
        .repository
        .list(&TodoFilter::new().with_search("sale"))
        .await?;
    assert_eq!(sale_matches.len(), 2);

    let done_high = ctx
        .repository
        .list(
            &TodoFilter::new()
                .with_completed(true)
                .with_priority(Priority::High),
        )
        .await?;
    assert_eq!(done_high.len(), 1);

    let hostile = ctx
        .repository
        .list(&TodoFilter::new().with_search("'; DROP TABLE todos; --"))
        .await?;
    assert!(hostile.is_empty());
    assert_eq!(ctx.repository.list(&TodoFilter::new()).await?.len(), 3);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_once() -> Result<(), eyre::Report> {
    let Some(ctx) = context().await? else {
        return Ok(());
    };
    let created = ctx.repository.create(&new_todo("Temporary")?).await?;

    assert!(ctx.repository.delete(created.id()).await?);
    assert!(!ctx.repository.delete(created.id()).await?);
    assert_eq!(ctx.repository.find_by_id(created.id()).await?, None);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn exhausted_pool_is_reported_distinctly() -> Result<(), eyre::Report> {
    let settings = PoolSettings {
        max_connections: 1,
        ..test_pool_settings()
    };
    let Some(ctx) = pg_context(settings).await? else {
        return Ok(());
    };
    assert!(ctx.repository.ping().await.is_ok());

    let pool = ctx.pool.clone();
    let held = tokio::task::spawn_blocking(move || pool.get())
        .await
        .wrap_err("join checkout")?
        .wrap_err("check out the only connection")?;

    let result = ctx.repository.find_by_id(TodoId::from_persisted(1)).await;
    drop(held);

    assert!(matches!(result, Err(TodoRepositoryError::PoolExhausted(_))));
    Ok(())
}
