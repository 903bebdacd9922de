// ABOUTME: Guestbook operations for the userdata table
// ABOUTME: Visitor comment submission with required-field validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DNX Fitness

use super::Database;
use crate::errors::{DbError, DbResult};
use crate::sql::FieldMap;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

/// A visitor comment submitted through the site's contact form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestComment {
    /// Visitor name (required)
    pub user: String,
    /// Contact email (required)
    pub email: String,
    /// Optional phone number
    #[serde(default)]
    pub mobile: String,
    /// Free-form comment text
    #[serde(default)]
    pub comments: String,
}

impl Database {
    /// Create the userdata table
    pub(super) async fn migrate_guestbook(&self) -> DbResult<()> {
        self.execute(
            r"
            CREATE TABLE IF NOT EXISTS userdata (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user TEXT NOT NULL,
                email TEXT NOT NULL,
                mobile TEXT NOT NULL DEFAULT '',
                comments TEXT NOT NULL DEFAULT '',
                submitted_at TEXT NOT NULL
            )
            ",
            &[],
        )
        .await?;

        self.execute(
            "CREATE INDEX IF NOT EXISTS idx_userdata_email ON userdata(email)",
            &[],
        )
        .await?;

        Ok(())
    }

    /// Store a visitor comment, returning the new row id
    ///
    /// # Errors
    ///
    /// Returns [`DbError::EmptyInput`] if the name or email is missing,
    /// otherwise the underlying insert error
    pub async fn submit_guest_comment(&self, comment: &GuestComment) -> DbResult<i64> {
        if comment.user.is_empty() || comment.email.is_empty() {
            return Err(DbError::EmptyInput("username and email are required"));
        }

        let data = FieldMap::from([
            ("user", comment.user.as_str()),
            ("email", comment.email.as_str()),
            ("mobile", comment.mobile.as_str()),
            ("comments", comment.comments.as_str()),
            ("submitted_at", Utc::now().to_rfc3339().as_str()),
        ]);

        let id = self.insert("userdata", &data).await?;
        info!(id, email = %comment.email, "guest comment stored");
        Ok(id)
    }

    /// List stored comments, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_guest_comments(&self, limit: Option<i64>) -> DbResult<Vec<FieldMap>> {
        let mut params = Vec::new();
        let mut sql = String::from("SELECT * FROM userdata ORDER BY id DESC");
        if let Some(limit) = limit {
            sql.push_str(" LIMIT ?");
            params.push(limit.into());
        }
        self.query(&sql, &params).await
    }
}
