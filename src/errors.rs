// ABOUTME: Unified error types for the DNX Fitness data layer
// ABOUTME: Distinguishes prepare-time, execute-time, and empty-input failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DNX Fitness

//! Error handling for the data layer.
//!
//! Every database operation returns [`DbResult`]. The failed SQL text travels
//! inside the error variant, so there is no instance-local "last error" or
//! "last query" state to go stale between calls.

use thiserror::Error;

/// Errors produced by the data layer
#[derive(Debug, Error)]
pub enum DbError {
    /// The driver rejected the statement before execution (bad SQL, unknown
    /// table or column)
    #[error("failed to prepare statement `{sql}`: {source}")]
    Prepare {
        /// The statement that failed to prepare
        sql: String,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// The statement prepared but failed during execution (constraint
    /// violation, lost connection, type mismatch)
    #[error("failed to execute statement `{sql}`: {source}")]
    Execute {
        /// The statement that failed to execute
        sql: String,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// A required field map or where map was empty; no statement was issued
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// Configuration problem (bad database URL, missing environment)
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON serialization of row data failed
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Password hashing or verification failed
    #[error("password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl DbError {
    /// Create a prepare failure carrying the offending SQL
    pub fn prepare(sql: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Prepare {
            sql: sql.into(),
            source,
        }
    }

    /// Create an execute failure carrying the offending SQL
    pub fn execute(sql: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Execute {
            sql: sql.into(),
            source,
        }
    }

    /// The SQL text of the failed statement, if this error has one
    #[must_use]
    pub fn sql(&self) -> Option<&str> {
        match self {
            Self::Prepare { sql, .. } | Self::Execute { sql, .. } => Some(sql),
            _ => None,
        }
    }
}

/// Result type alias for data-layer operations
pub type DbResult<T> = Result<T, DbError>;
