// ABOUTME: Main library entry point for the DNX Fitness data layer
// ABOUTME: Generic record access plus the site's guestbook, admin, and roster tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DNX Fitness

#![deny(unsafe_code)]

//! # DNX Fitness Data Layer
//!
//! A small data layer for the DNX Fitness website. The core is a generic
//! record-access helper: parameterized insert, update, delete, select, and
//! count operations on `(table, field-map)` arguments over a SQLite pool.
//! Values bind positionally through typed [`sql::SqlValue`] variants, so raw
//! input never reaches the SQL text.
//!
//! On top of the generic helper sit the site's domain tables: visitor
//! comments (`userdata`), admin credentials (`admindata`, bcrypt-hashed),
//! and the trainer roster (`creators`) with its JSON feed export.
//!
//! ## Example
//!
//! ```rust,no_run
//! use dnx_fitness_db::config::DatabaseConfig;
//! use dnx_fitness_db::database::Database;
//! use dnx_fitness_db::errors::DbResult;
//! use dnx_fitness_db::sql::FieldMap;
//!
//! #[tokio::main]
//! async fn main() -> DbResult<()> {
//!     dnx_fitness_db::logging::init_logging().expect("logging setup");
//!
//!     let config = DatabaseConfig::from_env()?;
//!     let db = Database::new(&config.url.to_connection_string()).await?;
//!
//!     let id = db
//!         .insert(
//!             "userdata",
//!             &FieldMap::from([("user", "alice"), ("email", "a@x.com")]),
//!         )
//!         .await?;
//!     println!("stored comment {id}");
//!     Ok(())
//! }
//! ```

/// Database configuration and connection URL parsing
pub mod config;

/// Database handle, migrations, and record operations
pub mod database;

/// Unified error types for the data layer
pub mod errors;

/// Structured logging setup
pub mod logging;

/// SQL value model, field maps, and clause builders
pub mod sql;

pub use database::Database;
pub use errors::{DbError, DbResult};
pub use sql::{FieldMap, SqlValue};
