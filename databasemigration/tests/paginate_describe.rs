/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Drives the pagination loop over scripted response bodies, the way a
//! transport would: each fetch serializes a request carrying the previous
//! marker and parses the next canned response.

use databasemigration::input::DescribeReplicationTasksInput;
use databasemigration::operation::DescribeReplicationTasks;
use databasemigration::paginator::paginate;
use serde_json::Value;

#[test]
fn cursor_chain_ends_after_exactly_three_pages() {
    let responses: [&[u8]; 3] = [
        br#"{"Marker":"page-2","ReplicationTasks":[{"ReplicationTaskIdentifier":"t-1"},{"ReplicationTaskIdentifier":"t-2"}]}"#,
        br#"{"Marker":"page-3","ReplicationTasks":[{"ReplicationTaskIdentifier":"t-3"}]}"#,
        // Terminal page: no marker, and legally empty.
        br#"{"ReplicationTasks":[]}"#,
    ];
    let mut served = 0usize;
    let mut markers_sent = Vec::new();

    let pages: Vec<_> = paginate(|marker: Option<String>| {
        let input = DescribeReplicationTasksInput::builder()
            .set_marker(marker)
            .max_records(2)
            .build();
        let body = DescribeReplicationTasks::request_body(&input).unwrap();
        let body: Value = serde_json::from_str(&body).unwrap();
        markers_sent.push(body.get("Marker").cloned());

        let response = responses[served];
        served += 1;
        DescribeReplicationTasks::parse_response(response)
    })
    .collect::<Result<_, _>>()
    .unwrap();

    assert_eq!(3, pages.len());
    assert_eq!(3, served);
    // First request has no marker at all; the rest echo the prior page's.
    assert_eq!(
        vec![
            None,
            Some(Value::String("page-2".into())),
            Some(Value::String("page-3".into())),
        ],
        markers_sent
    );

    let names: Vec<_> = pages
        .iter()
        .flat_map(|page| page.replication_tasks.as_deref().unwrap_or_default())
        .map(|task| task.replication_task_identifier.as_deref().unwrap())
        .collect();
    assert_eq!(vec!["t-1", "t-2", "t-3"], names);
    assert_eq!(Some(Vec::new()), pages[2].replication_tasks);
}
