// ABOUTME: Test utilities for database operations
// ABOUTME: Provides helper functions for creating isolated in-memory databases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DNX Fitness

use super::Database;
use crate::errors::DbResult;

/// Create a test database instance
///
/// Each call opens its own `sqlite::memory:` database with the full schema
/// migrated, so tests stay isolated from one another.
///
/// # Errors
///
/// Returns an error if database initialization fails
pub async fn create_test_db() -> DbResult<Database> {
    Database::new("sqlite::memory:").await
}
