// ABOUTME: Admin credential storage for the admindata table
// ABOUTME: Passwords are bcrypt-hashed on insert and verified on login
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DNX Fitness

use super::Database;
use crate::errors::{DbError, DbResult};
use crate::sql::{FieldMap, SqlValue};
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use tracing::info;

impl Database {
    /// Create the admindata table
    pub(super) async fn migrate_admin(&self) -> DbResult<()> {
        self.execute(
            r"
            CREATE TABLE IF NOT EXISTS admindata (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
            &[],
        )
        .await?;

        Ok(())
    }

    /// Store an admin credential with a bcrypt-hashed password, returning
    /// the new row id
    ///
    /// # Errors
    ///
    /// Returns [`DbError::EmptyInput`] if email or password is missing,
    /// [`DbError::Execute`] if the email already exists (unique constraint),
    /// or [`DbError::Hash`] if hashing fails
    pub async fn create_admin_credential(&self, email: &str, password: &str) -> DbResult<i64> {
        if email.is_empty() || password.is_empty() {
            return Err(DbError::EmptyInput("email and password are required"));
        }

        let password_hash = hash(password, DEFAULT_COST)?;
        let data = FieldMap::from([
            ("email", email),
            ("password_hash", password_hash.as_str()),
            ("created_at", Utc::now().to_rfc3339().as_str()),
        ]);

        let id = self.insert("admindata", &data).await?;
        info!(id, email = %email, "admin credential stored");
        Ok(id)
    }

    /// Check a password against the stored hash for an email. Unknown email
    /// and wrong password both report `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails or the stored hash is malformed
    pub async fn verify_admin_credential(&self, email: &str, password: &str) -> DbResult<bool> {
        let Some(row) = self.select_by_column("admindata", "email", email).await? else {
            return Ok(false);
        };

        match row.get("password_hash") {
            Some(SqlValue::Text(stored)) => Ok(verify(password, stored)?),
            _ => Ok(false),
        }
    }
}
