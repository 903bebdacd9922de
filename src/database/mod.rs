// ABOUTME: Database handle owning the SQLite connection pool
// ABOUTME: Construction, schema migration fan-out, and pool access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DNX Fitness

//! # Database Management
//!
//! This module provides the database handle for the DNX Fitness data layer.
//! The generic record-access operations live in [`records`]; the site's
//! domain tables (`userdata`, `admindata`, `creators`) get typed operations
//! in their own modules.

pub mod admin;
pub mod creators;
pub mod guestbook;
pub mod records;
pub mod test_utils;

use crate::errors::{DbError, DbResult};
use sqlx::{Pool, Sqlite, SqlitePool};
use tracing::info;

/// Database handle for the fitness site's record storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be opened or a migration
    /// statement fails
    pub async fn new(database_url: &str) -> DbResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .map_err(|e| DbError::Config(format!("failed to connect to {database_url}: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;

        info!(url = %database_url, "database ready");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub async fn migrate(&self) -> DbResult<()> {
        self.migrate_guestbook().await?;
        self.migrate_admin().await?;
        self.migrate_creators().await?;
        Ok(())
    }
}
