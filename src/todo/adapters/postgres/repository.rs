//! `PostgreSQL` repository implementation for todo storage.

use super::{
    models::{NewTodoRow, TodoRow},
    pool::TodoPgPool,
    schema::todos,
    statement::{SqlValue, Statement, list_statement, toggle_statement, update_statement},
};
use crate::todo::{
    domain::{NewTodo, PersistedTodoData, Priority, Todo, TodoFilter, TodoId, TodoUpdate},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::sql_types::{BigInt, Bool, Nullable, Text, Timestamptz};

/// SQL creating the `todos` table and its indexes when missing.
pub const CREATE_TODOS_SQL: &str =
    include_str!("../../../../migrations/2026-10-19-000000_create_todos/up.sql");

/// `PostgreSQL`-backed todo repository.
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: TodoPgPool,
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    /// Creates the `todos` table and indexes if they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError`] when no connection is available or
    /// the DDL fails.
    pub async fn ensure_schema(&self) -> TodoRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(CREATE_TODOS_SQL)
                .map_err(TodoRepositoryError::persistence)
        })
        .await
    }

    /// Runs `f` on a pooled connection on the blocking thread pool.
    ///
    /// The connection returns to the pool when `f` finishes, whatever its
    /// outcome.
    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::pool_exhausted)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn list(&self, filter: &TodoFilter) -> TodoRepositoryResult<Vec<Todo>> {
        let statement = list_statement(filter);
        self.run_blocking(move |connection| {
            let rows = bind_statement(statement)
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_todo).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        self.run_blocking(move |connection| find_row(connection, id)?.map(row_to_todo).transpose())
            .await
    }

    async fn create(&self, new_todo: &NewTodo) -> TodoRepositoryResult<Todo> {
        let new_row = to_new_row(new_todo);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(todos::table)
                .values(&new_row)
                .returning(TodoRow::as_returning())
                .get_result::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            row_to_todo(row)
        })
        .await
    }

    async fn update(&self, id: TodoId, update: &TodoUpdate) -> TodoRepositoryResult<Option<Todo>> {
        let statement = update_statement(id, update);
        self.run_blocking(move |connection| {
            let row = match statement {
                Some(statement) => fetch_optional(connection, statement)?,
                None => find_row(connection, id)?,
            };
            row.map(row_to_todo).transpose()
        })
        .await
    }

    async fn toggle(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let statement = toggle_statement(id);
        self.run_blocking(move |connection| {
            fetch_optional(connection, statement)?
                .map(row_to_todo)
                .transpose()
        })
        .await
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(todos::table.find(id.value()))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(affected > 0)
        })
        .await
    }

    async fn ping(&self) -> TodoRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute("SELECT 1")
                .map_err(TodoRepositoryError::persistence)
        })
        .await
    }
}

/// Binds every statement parameter, in order, onto a boxed raw query.
fn bind_statement(statement: Statement) -> BoxedSqlQuery<'static, Pg, SqlQuery> {
    let (sql, params) = statement.into_parts();
    params
        .into_iter()
        .fold(diesel::sql_query(sql).into_boxed::<Pg>(), |query, value| {
            match value {
                SqlValue::Bool(value) => query.bind::<Bool, _>(value),
                SqlValue::BigInt(value) => query.bind::<BigInt, _>(value),
                SqlValue::Text(value) => query.bind::<Text, _>(value),
                SqlValue::NullableText(value) => query.bind::<Nullable<Text>, _>(value),
                SqlValue::NullableTimestamp(value) => {
                    query.bind::<Nullable<Timestamptz>, _>(value)
                }
            }
        })
}

fn fetch_optional(
    connection: &mut PgConnection,
    statement: Statement,
) -> TodoRepositoryResult<Option<TodoRow>> {
    bind_statement(statement)
        .get_result::<TodoRow>(connection)
        .optional()
        .map_err(TodoRepositoryError::persistence)
}

fn find_row(connection: &mut PgConnection, id: TodoId) -> TodoRepositoryResult<Option<TodoRow>> {
    todos::table
        .find(id.value())
        .select(TodoRow::as_select())
        .first::<TodoRow>(connection)
        .optional()
        .map_err(TodoRepositoryError::persistence)
}

fn to_new_row(new_todo: &NewTodo) -> NewTodoRow {
    NewTodoRow {
        title: new_todo.title().as_str().to_owned(),
        description: new_todo.description().map(str::to_owned),
        priority: new_todo.priority().as_str().to_owned(),
        due_date: new_todo.due_date(),
    }
}

fn row_to_todo(row: TodoRow) -> TodoRepositoryResult<Todo> {
    let TodoRow {
        id,
        title,
        description,
        completed,
        priority: persisted_priority,
        due_date,
        created_at,
        updated_at,
    } = row;

    let priority = Priority::try_from(persisted_priority.as_str())
        .map_err(TodoRepositoryError::persistence)?;

    Ok(Todo::from_persisted(PersistedTodoData {
        id: TodoId::from_persisted(id),
        title,
        description,
        completed,
        priority,
        due_date,
        created_at,
        updated_at,
    }))
}
