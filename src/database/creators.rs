// ABOUTME: Trainer roster operations for the creators table
// ABOUTME: Typed listing, by-id lookup, and the JSON feed export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DNX Fitness

use super::Database;
use crate::errors::DbResult;
use crate::sql::FieldMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A trainer profile shown on the site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creator {
    /// Row id
    pub id: i64,
    /// Trainer display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Roll number shown on the roster page
    pub roll: String,
}

impl Creator {
    fn from_row(row: &FieldMap) -> Self {
        Self {
            id: row.get("id").and_then(|v| v.as_i64()).unwrap_or_default(),
            name: field_text(row, "name"),
            email: field_text(row, "email"),
            roll: field_text(row, "roll"),
        }
    }
}

fn field_text(row: &FieldMap, column: &str) -> String {
    row.get(column)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_owned()
}

impl Database {
    /// Create the creators table
    pub(super) async fn migrate_creators(&self) -> DbResult<()> {
        self.execute(
            r"
            CREATE TABLE IF NOT EXISTS creators (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL DEFAULT '',
                roll TEXT NOT NULL DEFAULT ''
            )
            ",
            &[],
        )
        .await?;

        Ok(())
    }

    /// List all trainers
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_creators(&self) -> DbResult<Vec<Creator>> {
        let rows = self.select_all("creators", &FieldMap::new(), None, None).await?;
        Ok(rows.iter().map(Creator::from_row).collect())
    }

    /// Fetch a single trainer by row id; `Ok(None)` when absent
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn select_creator(&self, id: i64) -> DbResult<Option<Creator>> {
        let row = self.select_by_id("creators", id).await?;
        Ok(row.as_ref().map(Creator::from_row))
    }

    /// Dump the trainer table as a JSON array, the payload the site's AJAX
    /// feed serves
    ///
    /// # Errors
    ///
    /// Returns an error if the query or serialization fails
    pub async fn creators_json(&self) -> DbResult<Value> {
        let rows = self.select_all("creators", &FieldMap::new(), None, None).await?;
        Ok(serde_json::to_value(rows)?)
    }
}
