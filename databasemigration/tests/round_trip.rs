/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Serialize-then-deserialize identity for the model shapes, covering
//! all-absent, fully populated, and mixed records, including the
//! present-but-empty list state.

use databasemigration::json_deser;
use databasemigration::json_ser;
use databasemigration::model::{
    AuthTypeValue, DmsSslModeValue, Endpoint, KinesisSettings, MessageFormatValue,
    MigrationTypeValue, MongoDbSettings, NestingLevelValue, RefreshSchemasStatus,
    RefreshSchemasStatusTypeValue, ReplicationEndpointTypeValue, ReplicationSubnetGroup,
    ReplicationTask, ReplicationTaskStats, Subnet, Tag,
};
use databasemigration::DateTime;
use dms_json::deserialize::json_token_iter;
use dms_json::serialize::JsonObjectWriter;
use pretty_assertions::assert_eq;

macro_rules! round_trip {
    ($ser:path, $deser:path, $value:expr $(,)?) => {{
        let value = $value;
        let mut body = String::new();
        let mut object = JsonObjectWriter::new(&mut body);
        $ser(&mut object, &value).unwrap();
        object.finish();

        let mut tokens = json_token_iter(body.as_bytes()).peekable();
        let reparsed = $deser(&mut tokens)
            .unwrap()
            .expect("a serialized object is never null");
        assert!(tokens.next().is_none(), "trailing tokens after {}", body);
        assert_eq!(value, reparsed);
    }};
}

#[test]
fn all_absent_records_survive() {
    round_trip!(
        json_ser::serialize_structure_endpoint,
        json_deser::deser_structure_endpoint,
        Endpoint::builder().build(),
    );
    round_trip!(
        json_ser::serialize_structure_replication_task,
        json_deser::deser_structure_replication_task,
        ReplicationTask::builder().build(),
    );
    round_trip!(
        json_ser::serialize_structure_tag,
        json_deser::deser_structure_tag,
        Tag::builder().build(),
    );
}

#[test]
fn fully_populated_endpoint_survives() {
    let endpoint = Endpoint::builder()
        .endpoint_identifier("src-1")
        .endpoint_type(ReplicationEndpointTypeValue::Source)
        .engine_name("mongodb")
        .engine_display_name("MongoDB")
        .username("dms")
        .server_name("db.example.com")
        .port(27017)
        .database_name("app")
        .extra_connection_attributes("replicaSet=rs0")
        .status("active")
        .kms_key_id("arn:aws:kms:us-east-1:123456789012:key/abc")
        .endpoint_arn("arn:aws:dms:us-east-1:123456789012:endpoint:SRC1")
        .certificate_arn("arn:aws:dms:us-east-1:123456789012:cert:C1")
        .ssl_mode(DmsSslModeValue::VerifyCa)
        .external_id("ext-1")
        .mongo_db_settings(
            MongoDbSettings::builder()
                .username("dms")
                .server_name("db.example.com")
                .port(27017)
                .auth_type(AuthTypeValue::Password)
                .nesting_level(NestingLevelValue::None)
                .docs_to_investigate("1000")
                .auth_source("admin")
                .build(),
        )
        .build();

    round_trip!(
        json_ser::serialize_structure_endpoint,
        json_deser::deser_structure_endpoint,
        endpoint,
    );
}

#[test]
fn nested_kinesis_settings_survive() {
    let endpoint = Endpoint::builder()
        .endpoint_identifier("tgt-1")
        .endpoint_type(ReplicationEndpointTypeValue::Target)
        .engine_name("kinesis")
        .kinesis_settings(
            KinesisSettings::builder()
                .stream_arn("arn:aws:kinesis:us-east-1:123456789012:stream/cdc")
                .message_format(MessageFormatValue::JsonUnformatted)
                .include_transaction_details(false)
                .include_partition_value(true)
                .build(),
        )
        .build();

    round_trip!(
        json_ser::serialize_structure_endpoint,
        json_deser::deser_structure_endpoint,
        endpoint,
    );
}

#[test]
fn timestamps_and_counters_survive() {
    let task = ReplicationTask::builder()
        .replication_task_identifier("task-1")
        .migration_type(MigrationTypeValue::Cdc)
        .status("running")
        .replication_task_creation_date(DateTime::from_epoch_seconds(1576540098))
        .replication_task_start_date(DateTime::from_fractional_seconds(1576540100, 0.5))
        .replication_task_stats(
            ReplicationTaskStats::builder()
                .full_load_progress_percent(0)
                .elapsed_time_millis(3_600_000)
                .tables_loaded(12)
                .tables_errored(0)
                .start_date(DateTime::from_epoch_seconds(1576540100))
                .build(),
        )
        .build();

    round_trip!(
        json_ser::serialize_structure_replication_task,
        json_deser::deser_structure_replication_task,
        task,
    );
}

#[test]
fn enum_status_survives() {
    let status = RefreshSchemasStatus::builder()
        .endpoint_arn("arn:aws:dms:us-east-1:123456789012:endpoint:SRC1")
        .status(RefreshSchemasStatusTypeValue::Refreshing)
        .last_refresh_date(DateTime::from_epoch_seconds(1576540098))
        .build();

    round_trip!(
        json_ser::serialize_structure_refresh_schemas_status,
        json_deser::deser_structure_refresh_schemas_status,
        status,
    );
}

#[test]
fn empty_and_missing_lists_stay_distinct() {
    // Present-but-empty list.
    let with_empty = ReplicationSubnetGroup::builder()
        .replication_subnet_group_identifier("group-1")
        .set_subnets(Some(Vec::new()))
        .build();
    round_trip!(
        json_ser::serialize_structure_replication_subnet_group,
        json_deser::deser_structure_replication_subnet_group,
        with_empty,
    );

    // Never-set list.
    let without = ReplicationSubnetGroup::builder()
        .replication_subnet_group_identifier("group-1")
        .build();
    round_trip!(
        json_ser::serialize_structure_replication_subnet_group,
        json_deser::deser_structure_replication_subnet_group,
        without,
    );

    // Populated list with nested objects.
    let with_subnets = ReplicationSubnetGroup::builder()
        .replication_subnet_group_identifier("group-1")
        .subnets(Subnet::builder().subnet_identifier("subnet-a").build())
        .subnets(Subnet::builder().subnet_identifier("subnet-b").build())
        .build();
    round_trip!(
        json_ser::serialize_structure_replication_subnet_group,
        json_deser::deser_structure_replication_subnet_group,
        with_subnets,
    );
}
