//! Parameterized SQL construction for dynamic todo queries.
//!
//! Statements are assembled from sparse [`TodoFilter`] and [`TodoUpdate`]
//! specifications. Caller-supplied values never enter the SQL text: each one
//! is pushed onto the parameter list, and its `$n` placeholder is derived
//! from the list length at that moment, so placeholders and values cannot
//! drift apart. Clauses are emitted in a fixed field order.

use crate::todo::domain::{Field, TodoFilter, TodoId, TodoUpdate};
use chrono::{DateTime, Utc};

/// Column list shared by every statement that returns todo rows.
pub const TODO_COLUMNS: &str =
    "id, title, description, completed, priority, due_date, created_at, updated_at";

/// A value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    /// `BOOLEAN` value.
    Bool(bool),
    /// `BIGINT` value.
    BigInt(i64),
    /// Non-null text value.
    Text(String),
    /// Text value that may be SQL `NULL`.
    NullableText(Option<String>),
    /// `TIMESTAMPTZ` value that may be SQL `NULL`.
    NullableTimestamp(Option<DateTime<Utc>>),
}

/// SQL text paired with the values for its placeholders, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    sql: String,
    params: Vec<SqlValue>,
}

impl Statement {
    /// Returns the SQL text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the bound values; element `i` belongs to placeholder `$i+1`.
    #[must_use]
    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// Splits the statement into its SQL text and parameters.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.params)
    }
}

/// Accumulates parameters and hands out their placeholders.
#[derive(Debug, Default)]
struct Params {
    values: Vec<SqlValue>,
}

impl Params {
    fn push(&mut self, value: SqlValue) -> String {
        self.values.push(value);
        format!("${}", self.values.len())
    }
}

/// Builds the listing query for `filter`.
///
/// Predicates are appended in the order completed, priority, search. The
/// search fragment is matched case-insensitively against title or
/// description through one shared placeholder. Results are always ordered
/// by creation time, newest first.
#[must_use]
pub fn list_statement(filter: &TodoFilter) -> Statement {
    let mut params = Params::default();
    let mut sql = format!("SELECT {TODO_COLUMNS} FROM todos WHERE 1=1");

    if let Some(completed) = filter.completed() {
        let placeholder = params.push(SqlValue::Bool(completed));
        sql.push_str(&format!(" AND completed = {placeholder}"));
    }
    if let Some(priority) = filter.priority() {
        let placeholder = params.push(SqlValue::Text(priority.as_str().to_owned()));
        sql.push_str(&format!(" AND priority = {placeholder}"));
    }
    if let Some(fragment) = filter.search() {
        let placeholder = params.push(SqlValue::Text(contains_pattern(fragment)));
        sql.push_str(&format!(
            " AND (title ILIKE {placeholder} OR description ILIKE {placeholder})"
        ));
    }

    sql.push_str(" ORDER BY created_at DESC, id DESC");
    Statement {
        sql,
        params: params.values,
    }
}

/// Builds the partial update of todo `id`.
///
/// Assignments follow the order title, description, completed, priority,
/// due date, and always end with the `updated_at` refresh. The id is the
/// final parameter. Returns `None` when `update` has no present field, in
/// which case no statement should be issued.
#[must_use]
pub fn update_statement(id: TodoId, update: &TodoUpdate) -> Option<Statement> {
    let mut params = Params::default();
    let mut assignments = Vec::new();

    let mut assign = |column: &str, value: Field<SqlValue>| {
        if let Field::Present(value) = value {
            let placeholder = params.push(value);
            assignments.push(format!("{column} = {placeholder}"));
        }
    };
    assign(
        "title",
        update
            .title
            .as_ref()
            .map(|title| SqlValue::Text(title.as_str().to_owned())),
    );
    assign(
        "description",
        update
            .description
            .as_ref()
            .map(|description| SqlValue::NullableText(description.clone())),
    );
    assign(
        "completed",
        update.completed.as_ref().map(|completed| SqlValue::Bool(*completed)),
    );
    assign(
        "priority",
        update
            .priority
            .as_ref()
            .map(|priority| SqlValue::Text(priority.as_str().to_owned())),
    );
    assign(
        "due_date",
        update
            .due_date
            .as_ref()
            .map(|due_date| SqlValue::NullableTimestamp(*due_date)),
    );

    if assignments.is_empty() {
        return None;
    }
    assignments.push("updated_at = CURRENT_TIMESTAMP".to_owned());

    let id_placeholder = params.push(SqlValue::BigInt(id.value()));
    let sql = format!(
        "UPDATE todos SET {} WHERE id = {id_placeholder} RETURNING {TODO_COLUMNS}",
        assignments.join(", ")
    );
    Some(Statement {
        sql,
        params: params.values,
    })
}

/// Builds the atomic completion flip of todo `id`.
#[must_use]
pub fn toggle_statement(id: TodoId) -> Statement {
    let mut params = Params::default();
    let id_placeholder = params.push(SqlValue::BigInt(id.value()));
    Statement {
        sql: format!(
            "UPDATE todos SET completed = NOT completed, updated_at = CURRENT_TIMESTAMP \
             WHERE id = {id_placeholder} RETURNING {TODO_COLUMNS}"
        ),
        params: params.values,
    }
}

/// Wraps a search fragment in `%` wildcards, escaping `LIKE` metacharacters
/// so the fragment matches literally.
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
