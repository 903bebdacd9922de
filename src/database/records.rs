// ABOUTME: Generic record-access operations on (table, field-map) arguments
// ABOUTME: Builds parameterized insert/update/delete/select/count statements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DNX Fitness

//! Generic record access.
//!
//! Every operation translates structured arguments into a parameterized
//! statement, prepares it, binds values positionally in field-map iteration
//! order, and executes. Raw values never reach the SQL text. Statements are
//! prepared explicitly so driver rejections surface as
//! [`DbError::Prepare`](crate::errors::DbError::Prepare) and runtime failures
//! (constraint violations, lost connections) as
//! [`DbError::Execute`](crate::errors::DbError::Execute).
//!
//! Table and column names are interpolated verbatim; they must come from
//! trusted code, not request input.

use super::Database;
use crate::errors::{DbError, DbResult};
use crate::sql::{self, FieldMap, SqlValue};
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::{Column, Executor, Row, Statement, TypeInfo, ValueRef};
use tracing::debug;

impl Database {
    /// Insert a record, returning the generated row id
    ///
    /// # Errors
    ///
    /// Returns [`DbError::EmptyInput`] without issuing a statement if `data`
    /// is empty, [`DbError::Prepare`] or [`DbError::Execute`] on driver
    /// failure
    pub async fn insert(&self, table: &str, data: &FieldMap) -> DbResult<i64> {
        if data.is_empty() {
            return Err(DbError::EmptyInput("insert requires at least one column"));
        }

        let sql = format!(
            "INSERT INTO {table} ({}) VALUES ({})",
            sql::column_list(data),
            sql::placeholder_list(data.len())
        );

        let stmt = self
            .pool()
            .prepare(&sql)
            .await
            .map_err(|e| DbError::prepare(&sql, e))?;

        let result = bind_values(stmt.query(), data.values())
            .execute(self.pool())
            .await
            .map_err(|e| DbError::execute(&sql, e))?;

        debug!(sql = %sql, id = result.last_insert_rowid(), "inserted record");
        Ok(result.last_insert_rowid())
    }

    /// Update records matching an equality filter, returning the affected
    /// row count (0 when nothing matches)
    ///
    /// # Errors
    ///
    /// Returns [`DbError::EmptyInput`] without issuing a statement if either
    /// `data` or `filter` is empty, [`DbError::Prepare`] or
    /// [`DbError::Execute`] on driver failure
    pub async fn update(&self, table: &str, data: &FieldMap, filter: &FieldMap) -> DbResult<u64> {
        if data.is_empty() || filter.is_empty() {
            return Err(DbError::EmptyInput("update requires data and where conditions"));
        }

        let sql = format!(
            "UPDATE {table} SET {} WHERE {}",
            sql::set_clause(data),
            sql::where_clause(filter)
        );

        let stmt = self
            .pool()
            .prepare(&sql)
            .await
            .map_err(|e| DbError::prepare(&sql, e))?;

        // Data values bind first, then filter values
        let result = bind_values(stmt.query(), data.values().chain(filter.values()))
            .execute(self.pool())
            .await
            .map_err(|e| DbError::execute(&sql, e))?;

        debug!(sql = %sql, rows = result.rows_affected(), "updated records");
        Ok(result.rows_affected())
    }

    /// Delete records matching an equality filter, returning the affected
    /// row count
    ///
    /// # Errors
    ///
    /// Returns [`DbError::EmptyInput`] without issuing a statement if
    /// `filter` is empty, [`DbError::Prepare`] or [`DbError::Execute`] on
    /// driver failure
    pub async fn delete(&self, table: &str, filter: &FieldMap) -> DbResult<u64> {
        if filter.is_empty() {
            return Err(DbError::EmptyInput("delete requires where conditions"));
        }

        let sql = format!("DELETE FROM {table} WHERE {}", sql::where_clause(filter));

        let stmt = self
            .pool()
            .prepare(&sql)
            .await
            .map_err(|e| DbError::prepare(&sql, e))?;

        let result = bind_values(stmt.query(), filter.values())
            .execute(self.pool())
            .await
            .map_err(|e| DbError::execute(&sql, e))?;

        debug!(sql = %sql, rows = result.rows_affected(), "deleted records");
        Ok(result.rows_affected())
    }

    /// Fetch a single record by its `id` column; `Ok(None)` when absent
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Prepare`] or [`DbError::Execute`] on driver failure
    pub async fn select_by_id(&self, table: &str, id: i64) -> DbResult<Option<FieldMap>> {
        self.select_by_column(table, "id", id).await
    }

    /// Fetch the first record matching an equality lookup on one column;
    /// `Ok(None)` when absent
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Prepare`] or [`DbError::Execute`] on driver failure
    pub async fn select_by_column(
        &self,
        table: &str,
        column: &str,
        value: impl Into<SqlValue>,
    ) -> DbResult<Option<FieldMap>> {
        let sql = format!("SELECT * FROM {table} WHERE {column} = ?");

        let stmt = self
            .pool()
            .prepare(&sql)
            .await
            .map_err(|e| DbError::prepare(&sql, e))?;

        let value = value.into();
        let row = bind_values(stmt.query(), std::iter::once(&value))
            .fetch_optional(self.pool())
            .await
            .map_err(|e| DbError::execute(&sql, e))?;

        row.as_ref()
            .map(decode_row)
            .transpose()
            .map_err(|e| DbError::execute(&sql, e))
    }

    /// Fetch records with an optional equality-AND filter and optional
    /// limit/offset; an empty filter selects the whole table. The offset is
    /// applied only when a limit is given. No matches is `Ok(vec![])`, never
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Prepare`] or [`DbError::Execute`] on driver failure
    pub async fn select_all(
        &self,
        table: &str,
        filter: &FieldMap,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> DbResult<Vec<FieldMap>> {
        let mut sql = format!("SELECT * FROM {table}");
        if !filter.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&sql::where_clause(filter));
        }
        if limit.is_some() {
            sql.push_str(" LIMIT ?");
            if offset.is_some() {
                sql.push_str(" OFFSET ?");
            }
        }

        let stmt = self
            .pool()
            .prepare(&sql)
            .await
            .map_err(|e| DbError::prepare(&sql, e))?;

        let mut query = bind_values(stmt.query(), filter.values());
        if let Some(limit) = limit {
            query = query.bind(limit);
            if let Some(offset) = offset {
                query = query.bind(offset);
            }
        }

        let rows = query
            .fetch_all(self.pool())
            .await
            .map_err(|e| DbError::execute(&sql, e))?;

        debug!(sql = %sql, rows = rows.len(), "selected records");
        rows.iter()
            .map(decode_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DbError::execute(&sql, e))
    }

    /// Count records matching an optional equality-AND filter; an empty
    /// filter counts the whole table
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Prepare`] or [`DbError::Execute`] on driver failure
    pub async fn count(&self, table: &str, filter: &FieldMap) -> DbResult<i64> {
        let mut sql = format!("SELECT COUNT(*) AS count FROM {table}");
        if !filter.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&sql::where_clause(filter));
        }

        let stmt = self
            .pool()
            .prepare(&sql)
            .await
            .map_err(|e| DbError::prepare(&sql, e))?;

        let row = bind_values(stmt.query(), filter.values())
            .fetch_one(self.pool())
            .await
            .map_err(|e| DbError::execute(&sql, e))?;

        row.try_get("count").map_err(|e| DbError::execute(&sql, e))
    }

    /// Execute a caller-supplied parameterized query and fetch all rows
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Prepare`] or [`DbError::Execute`] on driver failure
    pub async fn query(&self, sql: &str, params: &[SqlValue]) -> DbResult<Vec<FieldMap>> {
        let stmt = self
            .pool()
            .prepare(sql)
            .await
            .map_err(|e| DbError::prepare(sql, e))?;

        let rows = bind_values(stmt.query(), params.iter())
            .fetch_all(self.pool())
            .await
            .map_err(|e| DbError::execute(sql, e))?;

        rows.iter()
            .map(decode_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DbError::execute(sql, e))
    }

    /// Execute a caller-supplied statement that returns no rows (DDL,
    /// pragmas, bulk writes), returning the affected row count. With empty
    /// `params` the statement runs without any binding step.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Prepare`] or [`DbError::Execute`] on driver failure
    pub async fn execute(&self, sql: &str, params: &[SqlValue]) -> DbResult<u64> {
        let stmt = self
            .pool()
            .prepare(sql)
            .await
            .map_err(|e| DbError::prepare(sql, e))?;

        let result = bind_values(stmt.query(), params.iter())
            .execute(self.pool())
            .await
            .map_err(|e| DbError::execute(sql, e))?;

        debug!(sql = %sql, rows = result.rows_affected(), "executed statement");
        Ok(result.rows_affected())
    }
}

/// Bind values positionally; the variant selects the bind type, no tag step
fn bind_values<'q, 'v>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    values: impl Iterator<Item = &'v SqlValue>,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for value in values {
        query = match value {
            SqlValue::Integer(v) => query.bind(*v),
            SqlValue::Float(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.clone()),
            SqlValue::Blob(v) => query.bind(v.clone()),
            SqlValue::Null => query.bind(None::<String>),
        };
    }
    query
}

/// Decode a result row into an ordered field map by declared storage type
fn decode_row(row: &SqliteRow) -> Result<FieldMap, sqlx::Error> {
    let mut fields = FieldMap::new();
    for (idx, column) in row.columns().iter().enumerate() {
        let raw = row.try_get_raw(idx)?;
        let value = if raw.is_null() {
            SqlValue::Null
        } else {
            match raw.type_info().name() {
                "INTEGER" | "BOOLEAN" => SqlValue::Integer(row.try_get(idx)?),
                "REAL" => SqlValue::Float(row.try_get(idx)?),
                "BLOB" => SqlValue::Blob(row.try_get(idx)?),
                _ => SqlValue::Text(row.try_get(idx)?),
            }
        };
        fields.insert(column.name(), value);
    }
    Ok(fields)
}
