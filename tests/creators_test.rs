// ABOUTME: Integration tests for the trainer roster and its JSON feed
// ABOUTME: Typed listing, by-id lookup, and table-to-JSON export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DNX Fitness

#![allow(missing_docs, clippy::unwrap_used)]

use dnx_fitness_db::database::test_utils::create_test_db;
use dnx_fitness_db::FieldMap;

#[tokio::test]
async fn roster_lists_seeded_trainers() {
    let db = create_test_db().await.unwrap();

    db.insert(
        "creators",
        &FieldMap::from([("name", "Dana"), ("email", "dana@dnx.fit"), ("roll", "T-01")]),
    )
    .await
    .unwrap();
    db.insert(
        "creators",
        &FieldMap::from([("name", "Max"), ("email", "max@dnx.fit"), ("roll", "T-02")]),
    )
    .await
    .unwrap();

    let creators = db.list_creators().await.unwrap();
    assert_eq!(creators.len(), 2);
    assert_eq!(creators[0].name, "Dana");
    assert_eq!(creators[1].roll, "T-02");
}

#[tokio::test]
async fn lookup_by_id_hits_and_misses() {
    let db = create_test_db().await.unwrap();

    let id = db
        .insert("creators", &FieldMap::from([("name", "Dana")]))
        .await
        .unwrap();

    let creator = db.select_creator(id).await.unwrap().unwrap();
    assert_eq!(creator.id, id);
    assert_eq!(creator.name, "Dana");
    assert_eq!(creator.email, "");

    assert!(db.select_creator(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn json_export_dumps_the_whole_table() {
    let db = create_test_db().await.unwrap();

    let value = db.creators_json().await.unwrap();
    assert_eq!(value, serde_json::json!([]));

    db.insert(
        "creators",
        &FieldMap::from([("name", "Dana"), ("email", "dana@dnx.fit"), ("roll", "T-01")]),
    )
    .await
    .unwrap();

    let value = db.creators_json().await.unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Dana");
    assert_eq!(rows[0]["email"], "dana@dnx.fit");
    assert_eq!(rows[0]["id"], 1);
}
