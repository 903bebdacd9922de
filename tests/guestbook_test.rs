// ABOUTME: Integration tests for guestbook comment submission
// ABOUTME: Required-field validation, storage, and listing order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DNX Fitness

#![allow(missing_docs, clippy::unwrap_used)]

use dnx_fitness_db::database::guestbook::GuestComment;
use dnx_fitness_db::database::test_utils::create_test_db;
use dnx_fitness_db::{DbError, FieldMap, SqlValue};

fn comment(user: &str, email: &str) -> GuestComment {
    GuestComment {
        user: user.into(),
        email: email.into(),
        mobile: "555-0100".into(),
        comments: "great gym".into(),
    }
}

#[tokio::test]
async fn submit_stores_comment_with_timestamp() {
    let db = create_test_db().await.unwrap();

    let id = db.submit_guest_comment(&comment("alice", "a@x.com")).await.unwrap();
    assert!(id > 0);

    let row = db.select_by_id("userdata", id).await.unwrap().unwrap();
    assert_eq!(row.get("user"), Some(&SqlValue::Text("alice".into())));
    assert_eq!(row.get("email"), Some(&SqlValue::Text("a@x.com".into())));
    assert_eq!(row.get("mobile"), Some(&SqlValue::Text("555-0100".into())));
    // submitted_at was filled in by the layer
    assert!(row.get("submitted_at").unwrap().as_str().unwrap().contains('T'));
}

#[tokio::test]
async fn submit_requires_user_and_email() {
    let db = create_test_db().await.unwrap();

    let err = db.submit_guest_comment(&comment("", "a@x.com")).await.unwrap_err();
    assert!(matches!(err, DbError::EmptyInput(_)));

    let err = db.submit_guest_comment(&comment("alice", "")).await.unwrap_err();
    assert!(matches!(err, DbError::EmptyInput(_)));

    assert_eq!(db.count("userdata", &FieldMap::new()).await.unwrap(), 0);
}

#[tokio::test]
async fn listing_is_newest_first_and_honors_limit() {
    let db = create_test_db().await.unwrap();

    db.submit_guest_comment(&comment("alice", "a@x.com")).await.unwrap();
    db.submit_guest_comment(&comment("bob", "b@x.com")).await.unwrap();
    db.submit_guest_comment(&comment("carol", "c@x.com")).await.unwrap();

    let rows = db.list_guest_comments(None).await.unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].get("user"), Some(&SqlValue::Text("carol".into())));

    let rows = db.list_guest_comments(Some(2)).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].get("user"), Some(&SqlValue::Text("bob".into())));
}

#[tokio::test]
async fn comment_can_be_amended_through_the_record_helper() {
    let db = create_test_db().await.unwrap();
    db.submit_guest_comment(&comment("alice", "a@x.com")).await.unwrap();

    let affected = db
        .update(
            "userdata",
            &FieldMap::from([("comments", "bye")]),
            &FieldMap::from([("user", "alice")]),
        )
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let row = db
        .select_by_column("userdata", "user", "alice")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.get("comments"), Some(&SqlValue::Text("bye".into())));
}
