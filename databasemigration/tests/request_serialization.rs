/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Wire-level checks on serialized request bodies. Bodies are compared as
//! parsed JSON values so member ordering never matters.

use databasemigration::input::{
    AddTagsToResourceInput, CreateEndpointInput, CreateReplicationTaskInput, DescribeEventsInput,
};
use databasemigration::model::{MigrationTypeValue, Tag};
use databasemigration::operation::{
    AddTagsToResource, CreateEndpoint, CreateReplicationTask, DescribeEvents,
};
use databasemigration::DateTime;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn parse(body: &str) -> Value {
    serde_json::from_str(body).expect("request bodies are valid JSON")
}

#[test]
fn unset_members_are_omitted_entirely() {
    let input = CreateReplicationTaskInput::builder()
        .replication_task_identifier("task-1")
        .migration_type(MigrationTypeValue::FullLoadAndCdc)
        .tags(Tag::builder().key("team").value("dba").build())
        .tags(Tag::builder().key("stage").value("prod").build())
        .build();

    let body = parse(&CreateReplicationTask::request_body(&input).unwrap());

    assert_eq!(
        json!({
            "ReplicationTaskIdentifier": "task-1",
            "MigrationType": "full-load-and-cdc",
            "Tags": [
                {"Key": "team", "Value": "dba"},
                {"Key": "stage", "Value": "prod"}
            ]
        }),
        body
    );

    // Spelled out for the members most likely to regress: never-set members
    // must be absent, not null.
    let object = body.as_object().unwrap();
    for member in ["CdcStartTime", "CdcStartPosition", "CdcStopPosition", "TaskData"] {
        assert!(!object.contains_key(member), "{} leaked into the body", member);
    }
}

#[test]
fn zero_and_unset_serialize_differently() {
    let unset = CreateEndpointInput::builder()
        .endpoint_identifier("ep-1")
        .build();
    let zero = CreateEndpointInput::builder()
        .endpoint_identifier("ep-1")
        .port(0)
        .build();

    let unset_body = parse(&CreateEndpoint::request_body(&unset).unwrap());
    let zero_body = parse(&CreateEndpoint::request_body(&zero).unwrap());

    assert_ne!(unset_body, zero_body);
    assert_eq!(Some(&json!(0)), zero_body.get("Port"));
    assert_eq!(None, unset_body.get("Port"));
}

#[test]
fn present_but_empty_lists_are_written_as_arrays() {
    let input = AddTagsToResourceInput::builder()
        .resource_arn("arn:aws:dms:us-east-1:123456789012:task:ABC")
        .set_tags(Some(Vec::new()))
        .build()
        .unwrap();

    let body = parse(&AddTagsToResource::request_body(&input).unwrap());
    assert_eq!(Some(&json!([])), body.get("Tags"));
}

#[test]
fn timestamps_are_written_as_epoch_seconds() {
    let input = DescribeEventsInput::builder()
        .start_time(DateTime::from_epoch_seconds(1576540098))
        .end_time(DateTime::from_fractional_seconds(1576540098, 0.25))
        .duration(0)
        .build();

    let body = parse(&DescribeEvents::request_body(&input).unwrap());
    assert_eq!(Some(&json!(1576540098)), body.get("StartTime"));
    assert_eq!(Some(&json!(1576540098.25)), body.get("EndTime"));
    assert_eq!(Some(&json!(0)), body.get("Duration"));
}

#[test]
fn strings_are_escaped() {
    let input = CreateEndpointInput::builder()
        .database_name("na\"me\nwith\tescapes")
        .build();
    let body = parse(&CreateEndpoint::request_body(&input).unwrap());
    assert_eq!(
        Some(&json!("na\"me\nwith\tescapes")),
        body.get("DatabaseName")
    );
}
