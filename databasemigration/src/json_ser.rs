/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! JSON serializers for request and model shapes.
//!
//! A member is written only when it is `Some`, so unset members never reach
//! the wire; members set to a zero value are written like any other value.
//! Timestamps are written as epoch seconds, the protocol's encoding for
//! this service.

use dms_json::serialize::JsonObjectWriter;
use dms_types::date_time::{DateTimeFormatError, Format};
use dms_types::Number;

pub fn serialize_structure_tag(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::Tag,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.key {
        object.key("Key").string(var);
    }
    if let Some(var) = &input.value {
        object.key("Value").string(var);
    }
    Ok(())
}

pub fn serialize_structure_filter(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::Filter,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.name {
        object.key("Name").string(var);
    }
    if let Some(var) = &input.values {
        let mut array = object.key("Values").start_array();
        for item in var {
            array.value().string(item);
        }
        array.finish();
    }
    Ok(())
}

pub fn serialize_structure_availability_zone(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::AvailabilityZone,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.name {
        object.key("Name").string(var);
    }
    Ok(())
}

pub fn serialize_structure_subnet(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::Subnet,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.subnet_identifier {
        object.key("SubnetIdentifier").string(var);
    }
    if let Some(var) = &input.subnet_availability_zone {
        let mut obj = object.key("SubnetAvailabilityZone").start_object();
        serialize_structure_availability_zone(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.subnet_status {
        object.key("SubnetStatus").string(var);
    }
    Ok(())
}

pub fn serialize_structure_replication_subnet_group(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::ReplicationSubnetGroup,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.replication_subnet_group_identifier {
        object.key("ReplicationSubnetGroupIdentifier").string(var);
    }
    if let Some(var) = &input.replication_subnet_group_description {
        object.key("ReplicationSubnetGroupDescription").string(var);
    }
    if let Some(var) = &input.vpc_id {
        object.key("VpcId").string(var);
    }
    if let Some(var) = &input.subnet_group_status {
        object.key("SubnetGroupStatus").string(var);
    }
    if let Some(var) = &input.subnets {
        let mut array = object.key("Subnets").start_array();
        for item in var {
            let mut obj = array.value().start_object();
            serialize_structure_subnet(&mut obj, item)?;
            obj.finish();
        }
        array.finish();
    }
    Ok(())
}

pub fn serialize_structure_connection(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::Connection,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.replication_instance_arn {
        object.key("ReplicationInstanceArn").string(var);
    }
    if let Some(var) = &input.endpoint_arn {
        object.key("EndpointArn").string(var);
    }
    if let Some(var) = &input.status {
        object.key("Status").string(var);
    }
    if let Some(var) = &input.last_failure_message {
        object.key("LastFailureMessage").string(var);
    }
    if let Some(var) = &input.endpoint_identifier {
        object.key("EndpointIdentifier").string(var);
    }
    if let Some(var) = &input.replication_instance_identifier {
        object.key("ReplicationInstanceIdentifier").string(var);
    }
    Ok(())
}

pub fn serialize_structure_account_quota(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::AccountQuota,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.account_quota_name {
        object.key("AccountQuotaName").string(var);
    }
    if let Some(var) = &input.used {
        object.key("Used").number(Number::NegInt(*var));
    }
    if let Some(var) = &input.max {
        object.key("Max").number(Number::NegInt(*var));
    }
    Ok(())
}

pub fn serialize_structure_refresh_schemas_status(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::RefreshSchemasStatus,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.endpoint_arn {
        object.key("EndpointArn").string(var);
    }
    if let Some(var) = &input.replication_instance_arn {
        object.key("ReplicationInstanceArn").string(var);
    }
    if let Some(var) = &input.status {
        object.key("Status").string(var.as_str());
    }
    if let Some(var) = &input.last_refresh_date {
        object
            .key("LastRefreshDate")
            .date_time(var, Format::EpochSeconds)?;
    }
    if let Some(var) = &input.last_failure_message {
        object.key("LastFailureMessage").string(var);
    }
    Ok(())
}

pub fn serialize_structure_replication_task_stats(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::ReplicationTaskStats,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.full_load_progress_percent {
        object
            .key("FullLoadProgressPercent")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.elapsed_time_millis {
        object.key("ElapsedTimeMillis").number(Number::NegInt(*var));
    }
    if let Some(var) = &input.tables_loaded {
        object
            .key("TablesLoaded")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.tables_loading {
        object
            .key("TablesLoading")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.tables_queued {
        object
            .key("TablesQueued")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.tables_errored {
        object
            .key("TablesErrored")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.fresh_start_date {
        object
            .key("FreshStartDate")
            .date_time(var, Format::EpochSeconds)?;
    }
    if let Some(var) = &input.start_date {
        object.key("StartDate").date_time(var, Format::EpochSeconds)?;
    }
    if let Some(var) = &input.stop_date {
        object.key("StopDate").date_time(var, Format::EpochSeconds)?;
    }
    if let Some(var) = &input.full_load_start_date {
        object
            .key("FullLoadStartDate")
            .date_time(var, Format::EpochSeconds)?;
    }
    if let Some(var) = &input.full_load_finish_date {
        object
            .key("FullLoadFinishDate")
            .date_time(var, Format::EpochSeconds)?;
    }
    Ok(())
}

pub fn serialize_structure_replication_task(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::ReplicationTask,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.replication_task_identifier {
        object.key("ReplicationTaskIdentifier").string(var);
    }
    if let Some(var) = &input.source_endpoint_arn {
        object.key("SourceEndpointArn").string(var);
    }
    if let Some(var) = &input.target_endpoint_arn {
        object.key("TargetEndpointArn").string(var);
    }
    if let Some(var) = &input.replication_instance_arn {
        object.key("ReplicationInstanceArn").string(var);
    }
    if let Some(var) = &input.migration_type {
        object.key("MigrationType").string(var.as_str());
    }
    if let Some(var) = &input.table_mappings {
        object.key("TableMappings").string(var);
    }
    if let Some(var) = &input.replication_task_settings {
        object.key("ReplicationTaskSettings").string(var);
    }
    if let Some(var) = &input.status {
        object.key("Status").string(var);
    }
    if let Some(var) = &input.last_failure_message {
        object.key("LastFailureMessage").string(var);
    }
    if let Some(var) = &input.stop_reason {
        object.key("StopReason").string(var);
    }
    if let Some(var) = &input.replication_task_creation_date {
        object
            .key("ReplicationTaskCreationDate")
            .date_time(var, Format::EpochSeconds)?;
    }
    if let Some(var) = &input.replication_task_start_date {
        object
            .key("ReplicationTaskStartDate")
            .date_time(var, Format::EpochSeconds)?;
    }
    if let Some(var) = &input.cdc_start_position {
        object.key("CdcStartPosition").string(var);
    }
    if let Some(var) = &input.cdc_stop_position {
        object.key("CdcStopPosition").string(var);
    }
    if let Some(var) = &input.recovery_checkpoint {
        object.key("RecoveryCheckpoint").string(var);
    }
    if let Some(var) = &input.replication_task_arn {
        object.key("ReplicationTaskArn").string(var);
    }
    if let Some(var) = &input.replication_task_stats {
        let mut obj = object.key("ReplicationTaskStats").start_object();
        serialize_structure_replication_task_stats(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.task_data {
        object.key("TaskData").string(var);
    }
    Ok(())
}

pub fn serialize_structure_event(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::Event,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.source_identifier {
        object.key("SourceIdentifier").string(var);
    }
    if let Some(var) = &input.source_type {
        object.key("SourceType").string(var.as_str());
    }
    if let Some(var) = &input.message {
        object.key("Message").string(var);
    }
    if let Some(var) = &input.event_categories {
        let mut array = object.key("EventCategories").start_array();
        for item in var {
            array.value().string(item);
        }
        array.finish();
    }
    if let Some(var) = &input.date {
        object.key("Date").date_time(var, Format::EpochSeconds)?;
    }
    Ok(())
}

pub fn serialize_structure_dynamo_db_settings(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::DynamoDbSettings,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.service_access_role_arn {
        object.key("ServiceAccessRoleArn").string(var);
    }
    Ok(())
}

pub fn serialize_structure_dms_transfer_settings(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::DmsTransferSettings,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.service_access_role_arn {
        object.key("ServiceAccessRoleArn").string(var);
    }
    if let Some(var) = &input.bucket_name {
        object.key("BucketName").string(var);
    }
    Ok(())
}

pub fn serialize_structure_kafka_settings(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::KafkaSettings,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.broker {
        object.key("Broker").string(var);
    }
    if let Some(var) = &input.topic {
        object.key("Topic").string(var);
    }
    Ok(())
}

pub fn serialize_structure_elasticsearch_settings(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::ElasticsearchSettings,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.service_access_role_arn {
        object.key("ServiceAccessRoleArn").string(var);
    }
    if let Some(var) = &input.endpoint_uri {
        object.key("EndpointUri").string(var);
    }
    if let Some(var) = &input.full_load_error_percentage {
        object
            .key("FullLoadErrorPercentage")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.error_retry_duration {
        object
            .key("ErrorRetryDuration")
            .number(Number::NegInt(i64::from(*var)));
    }
    Ok(())
}

pub fn serialize_structure_kinesis_settings(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::KinesisSettings,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.stream_arn {
        object.key("StreamArn").string(var);
    }
    if let Some(var) = &input.message_format {
        object.key("MessageFormat").string(var.as_str());
    }
    if let Some(var) = &input.service_access_role_arn {
        object.key("ServiceAccessRoleArn").string(var);
    }
    if let Some(var) = &input.include_transaction_details {
        object.key("IncludeTransactionDetails").boolean(*var);
    }
    if let Some(var) = &input.include_partition_value {
        object.key("IncludePartitionValue").boolean(*var);
    }
    if let Some(var) = &input.partition_include_schema_table {
        object.key("PartitionIncludeSchemaTable").boolean(*var);
    }
    if let Some(var) = &input.include_table_alter_operations {
        object.key("IncludeTableAlterOperations").boolean(*var);
    }
    if let Some(var) = &input.include_control_details {
        object.key("IncludeControlDetails").boolean(*var);
    }
    if let Some(var) = &input.include_null_and_empty {
        object.key("IncludeNullAndEmpty").boolean(*var);
    }
    Ok(())
}

pub fn serialize_structure_neptune_settings(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::NeptuneSettings,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.service_access_role_arn {
        object.key("ServiceAccessRoleArn").string(var);
    }
    if let Some(var) = &input.s3_bucket_name {
        object.key("S3BucketName").string(var);
    }
    if let Some(var) = &input.s3_bucket_folder {
        object.key("S3BucketFolder").string(var);
    }
    if let Some(var) = &input.error_retry_duration {
        object
            .key("ErrorRetryDuration")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.max_file_size {
        object
            .key("MaxFileSize")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.max_retry_count {
        object
            .key("MaxRetryCount")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.iam_auth_enabled {
        object.key("IamAuthEnabled").boolean(*var);
    }
    Ok(())
}

pub fn serialize_structure_mongo_db_settings(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::MongoDbSettings,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.username {
        object.key("Username").string(var);
    }
    if let Some(var) = &input.password {
        object.key("Password").string(var);
    }
    if let Some(var) = &input.server_name {
        object.key("ServerName").string(var);
    }
    if let Some(var) = &input.port {
        object.key("Port").number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.database_name {
        object.key("DatabaseName").string(var);
    }
    if let Some(var) = &input.auth_type {
        object.key("AuthType").string(var.as_str());
    }
    if let Some(var) = &input.auth_mechanism {
        object.key("AuthMechanism").string(var.as_str());
    }
    if let Some(var) = &input.nesting_level {
        object.key("NestingLevel").string(var.as_str());
    }
    if let Some(var) = &input.extract_doc_id {
        object.key("ExtractDocId").string(var);
    }
    if let Some(var) = &input.docs_to_investigate {
        object.key("DocsToInvestigate").string(var);
    }
    if let Some(var) = &input.auth_source {
        object.key("AuthSource").string(var);
    }
    if let Some(var) = &input.kms_key_id {
        object.key("KmsKeyId").string(var);
    }
    Ok(())
}

pub fn serialize_structure_s3_settings(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::S3Settings,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.service_access_role_arn {
        object.key("ServiceAccessRoleArn").string(var);
    }
    if let Some(var) = &input.external_table_definition {
        object.key("ExternalTableDefinition").string(var);
    }
    if let Some(var) = &input.csv_row_delimiter {
        object.key("CsvRowDelimiter").string(var);
    }
    if let Some(var) = &input.csv_delimiter {
        object.key("CsvDelimiter").string(var);
    }
    if let Some(var) = &input.bucket_folder {
        object.key("BucketFolder").string(var);
    }
    if let Some(var) = &input.bucket_name {
        object.key("BucketName").string(var);
    }
    if let Some(var) = &input.compression_type {
        object.key("CompressionType").string(var.as_str());
    }
    if let Some(var) = &input.encryption_mode {
        object.key("EncryptionMode").string(var.as_str());
    }
    if let Some(var) = &input.server_side_encryption_kms_key_id {
        object.key("ServerSideEncryptionKmsKeyId").string(var);
    }
    if let Some(var) = &input.data_format {
        object.key("DataFormat").string(var.as_str());
    }
    if let Some(var) = &input.encoding_type {
        object.key("EncodingType").string(var.as_str());
    }
    if let Some(var) = &input.dict_page_size_limit {
        object
            .key("DictPageSizeLimit")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.row_group_length {
        object
            .key("RowGroupLength")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.data_page_size {
        object
            .key("DataPageSize")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.parquet_version {
        object.key("ParquetVersion").string(var.as_str());
    }
    if let Some(var) = &input.enable_statistics {
        object.key("EnableStatistics").boolean(*var);
    }
    if let Some(var) = &input.include_op_for_full_load {
        object.key("IncludeOpForFullLoad").boolean(*var);
    }
    if let Some(var) = &input.cdc_inserts_only {
        object.key("CdcInsertsOnly").boolean(*var);
    }
    if let Some(var) = &input.timestamp_column_name {
        object.key("TimestampColumnName").string(var);
    }
    Ok(())
}

pub fn serialize_structure_redshift_settings(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::RedshiftSettings,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.accept_any_date {
        object.key("AcceptAnyDate").boolean(*var);
    }
    if let Some(var) = &input.after_connect_script {
        object.key("AfterConnectScript").string(var);
    }
    if let Some(var) = &input.bucket_folder {
        object.key("BucketFolder").string(var);
    }
    if let Some(var) = &input.bucket_name {
        object.key("BucketName").string(var);
    }
    if let Some(var) = &input.connection_timeout {
        object
            .key("ConnectionTimeout")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.database_name {
        object.key("DatabaseName").string(var);
    }
    if let Some(var) = &input.empty_as_null {
        object.key("EmptyAsNull").boolean(*var);
    }
    if let Some(var) = &input.encryption_mode {
        object.key("EncryptionMode").string(var.as_str());
    }
    if let Some(var) = &input.file_transfer_upload_streams {
        object
            .key("FileTransferUploadStreams")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.load_timeout {
        object
            .key("LoadTimeout")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.max_file_size {
        object
            .key("MaxFileSize")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.password {
        object.key("Password").string(var);
    }
    if let Some(var) = &input.port {
        object.key("Port").number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.remove_quotes {
        object.key("RemoveQuotes").boolean(*var);
    }
    if let Some(var) = &input.server_name {
        object.key("ServerName").string(var);
    }
    if let Some(var) = &input.service_access_role_arn {
        object.key("ServiceAccessRoleArn").string(var);
    }
    if let Some(var) = &input.server_side_encryption_kms_key_id {
        object.key("ServerSideEncryptionKmsKeyId").string(var);
    }
    if let Some(var) = &input.trim_blanks {
        object.key("TrimBlanks").boolean(*var);
    }
    if let Some(var) = &input.truncate_columns {
        object.key("TruncateColumns").boolean(*var);
    }
    if let Some(var) = &input.username {
        object.key("Username").string(var);
    }
    if let Some(var) = &input.write_buffer_size {
        object
            .key("WriteBufferSize")
            .number(Number::NegInt(i64::from(*var)));
    }
    Ok(())
}

pub fn serialize_structure_endpoint(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::Endpoint,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.endpoint_identifier {
        object.key("EndpointIdentifier").string(var);
    }
    if let Some(var) = &input.endpoint_type {
        object.key("EndpointType").string(var.as_str());
    }
    if let Some(var) = &input.engine_name {
        object.key("EngineName").string(var);
    }
    if let Some(var) = &input.engine_display_name {
        object.key("EngineDisplayName").string(var);
    }
    if let Some(var) = &input.username {
        object.key("Username").string(var);
    }
    if let Some(var) = &input.server_name {
        object.key("ServerName").string(var);
    }
    if let Some(var) = &input.port {
        object.key("Port").number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.database_name {
        object.key("DatabaseName").string(var);
    }
    if let Some(var) = &input.extra_connection_attributes {
        object.key("ExtraConnectionAttributes").string(var);
    }
    if let Some(var) = &input.status {
        object.key("Status").string(var);
    }
    if let Some(var) = &input.kms_key_id {
        object.key("KmsKeyId").string(var);
    }
    if let Some(var) = &input.endpoint_arn {
        object.key("EndpointArn").string(var);
    }
    if let Some(var) = &input.certificate_arn {
        object.key("CertificateArn").string(var);
    }
    if let Some(var) = &input.ssl_mode {
        object.key("SslMode").string(var.as_str());
    }
    if let Some(var) = &input.service_access_role_arn {
        object.key("ServiceAccessRoleArn").string(var);
    }
    if let Some(var) = &input.external_table_definition {
        object.key("ExternalTableDefinition").string(var);
    }
    if let Some(var) = &input.external_id {
        object.key("ExternalId").string(var);
    }
    if let Some(var) = &input.dynamo_db_settings {
        let mut obj = object.key("DynamoDbSettings").start_object();
        serialize_structure_dynamo_db_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.s3_settings {
        let mut obj = object.key("S3Settings").start_object();
        serialize_structure_s3_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.dms_transfer_settings {
        let mut obj = object.key("DmsTransferSettings").start_object();
        serialize_structure_dms_transfer_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.mongo_db_settings {
        let mut obj = object.key("MongoDbSettings").start_object();
        serialize_structure_mongo_db_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.kinesis_settings {
        let mut obj = object.key("KinesisSettings").start_object();
        serialize_structure_kinesis_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.kafka_settings {
        let mut obj = object.key("KafkaSettings").start_object();
        serialize_structure_kafka_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.elasticsearch_settings {
        let mut obj = object.key("ElasticsearchSettings").start_object();
        serialize_structure_elasticsearch_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.neptune_settings {
        let mut obj = object.key("NeptuneSettings").start_object();
        serialize_structure_neptune_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.redshift_settings {
        let mut obj = object.key("RedshiftSettings").start_object();
        serialize_structure_redshift_settings(&mut obj, var)?;
        obj.finish();
    }
    Ok(())
}

pub fn serialize_structure_add_tags_to_resource_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::AddTagsToResourceInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.resource_arn {
        object.key("ResourceArn").string(var);
    }
    if let Some(var) = &input.tags {
        let mut array = object.key("Tags").start_array();
        for item in var {
            let mut obj = array.value().start_object();
            serialize_structure_tag(&mut obj, item)?;
            obj.finish();
        }
        array.finish();
    }
    Ok(())
}

pub fn serialize_structure_create_endpoint_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::CreateEndpointInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.endpoint_identifier {
        object.key("EndpointIdentifier").string(var);
    }
    if let Some(var) = &input.endpoint_type {
        object.key("EndpointType").string(var.as_str());
    }
    if let Some(var) = &input.engine_name {
        object.key("EngineName").string(var);
    }
    if let Some(var) = &input.username {
        object.key("Username").string(var);
    }
    if let Some(var) = &input.password {
        object.key("Password").string(var);
    }
    if let Some(var) = &input.server_name {
        object.key("ServerName").string(var);
    }
    if let Some(var) = &input.port {
        object.key("Port").number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.database_name {
        object.key("DatabaseName").string(var);
    }
    if let Some(var) = &input.extra_connection_attributes {
        object.key("ExtraConnectionAttributes").string(var);
    }
    if let Some(var) = &input.kms_key_id {
        object.key("KmsKeyId").string(var);
    }
    if let Some(var) = &input.tags {
        let mut array = object.key("Tags").start_array();
        for item in var {
            let mut obj = array.value().start_object();
            serialize_structure_tag(&mut obj, item)?;
            obj.finish();
        }
        array.finish();
    }
    if let Some(var) = &input.certificate_arn {
        object.key("CertificateArn").string(var);
    }
    if let Some(var) = &input.ssl_mode {
        object.key("SslMode").string(var.as_str());
    }
    if let Some(var) = &input.service_access_role_arn {
        object.key("ServiceAccessRoleArn").string(var);
    }
    if let Some(var) = &input.external_table_definition {
        object.key("ExternalTableDefinition").string(var);
    }
    if let Some(var) = &input.dynamo_db_settings {
        let mut obj = object.key("DynamoDbSettings").start_object();
        serialize_structure_dynamo_db_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.s3_settings {
        let mut obj = object.key("S3Settings").start_object();
        serialize_structure_s3_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.dms_transfer_settings {
        let mut obj = object.key("DmsTransferSettings").start_object();
        serialize_structure_dms_transfer_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.mongo_db_settings {
        let mut obj = object.key("MongoDbSettings").start_object();
        serialize_structure_mongo_db_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.kinesis_settings {
        let mut obj = object.key("KinesisSettings").start_object();
        serialize_structure_kinesis_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.kafka_settings {
        let mut obj = object.key("KafkaSettings").start_object();
        serialize_structure_kafka_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.elasticsearch_settings {
        let mut obj = object.key("ElasticsearchSettings").start_object();
        serialize_structure_elasticsearch_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.neptune_settings {
        let mut obj = object.key("NeptuneSettings").start_object();
        serialize_structure_neptune_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.redshift_settings {
        let mut obj = object.key("RedshiftSettings").start_object();
        serialize_structure_redshift_settings(&mut obj, var)?;
        obj.finish();
    }
    Ok(())
}

pub fn serialize_structure_create_replication_task_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::CreateReplicationTaskInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.replication_task_identifier {
        object.key("ReplicationTaskIdentifier").string(var);
    }
    if let Some(var) = &input.source_endpoint_arn {
        object.key("SourceEndpointArn").string(var);
    }
    if let Some(var) = &input.target_endpoint_arn {
        object.key("TargetEndpointArn").string(var);
    }
    if let Some(var) = &input.replication_instance_arn {
        object.key("ReplicationInstanceArn").string(var);
    }
    if let Some(var) = &input.migration_type {
        object.key("MigrationType").string(var.as_str());
    }
    if let Some(var) = &input.table_mappings {
        object.key("TableMappings").string(var);
    }
    if let Some(var) = &input.replication_task_settings {
        object.key("ReplicationTaskSettings").string(var);
    }
    if let Some(var) = &input.cdc_start_time {
        object
            .key("CdcStartTime")
            .date_time(var, Format::EpochSeconds)?;
    }
    if let Some(var) = &input.cdc_start_position {
        object.key("CdcStartPosition").string(var);
    }
    if let Some(var) = &input.cdc_stop_position {
        object.key("CdcStopPosition").string(var);
    }
    if let Some(var) = &input.tags {
        let mut array = object.key("Tags").start_array();
        for item in var {
            let mut obj = array.value().start_object();
            serialize_structure_tag(&mut obj, item)?;
            obj.finish();
        }
        array.finish();
    }
    if let Some(var) = &input.task_data {
        object.key("TaskData").string(var);
    }
    Ok(())
}

pub fn serialize_structure_delete_endpoint_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::DeleteEndpointInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.endpoint_arn {
        object.key("EndpointArn").string(var);
    }
    Ok(())
}

pub fn serialize_structure_delete_replication_task_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::DeleteReplicationTaskInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.replication_task_arn {
        object.key("ReplicationTaskArn").string(var);
    }
    Ok(())
}

pub fn serialize_structure_describe_account_attributes_input(
    _object: &mut JsonObjectWriter<'_>,
    _input: &crate::input::DescribeAccountAttributesInput,
) -> Result<(), DateTimeFormatError> {
    Ok(())
}

pub fn serialize_structure_describe_connections_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::DescribeConnectionsInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.filters {
        let mut array = object.key("Filters").start_array();
        for item in var {
            let mut obj = array.value().start_object();
            serialize_structure_filter(&mut obj, item)?;
            obj.finish();
        }
        array.finish();
    }
    if let Some(var) = &input.max_records {
        object
            .key("MaxRecords")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.marker {
        object.key("Marker").string(var);
    }
    Ok(())
}

pub fn serialize_structure_describe_endpoints_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::DescribeEndpointsInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.filters {
        let mut array = object.key("Filters").start_array();
        for item in var {
            let mut obj = array.value().start_object();
            serialize_structure_filter(&mut obj, item)?;
            obj.finish();
        }
        array.finish();
    }
    if let Some(var) = &input.max_records {
        object
            .key("MaxRecords")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.marker {
        object.key("Marker").string(var);
    }
    Ok(())
}

pub fn serialize_structure_describe_events_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::DescribeEventsInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.source_identifier {
        object.key("SourceIdentifier").string(var);
    }
    if let Some(var) = &input.source_type {
        object.key("SourceType").string(var.as_str());
    }
    if let Some(var) = &input.start_time {
        object.key("StartTime").date_time(var, Format::EpochSeconds)?;
    }
    if let Some(var) = &input.end_time {
        object.key("EndTime").date_time(var, Format::EpochSeconds)?;
    }
    if let Some(var) = &input.duration {
        object.key("Duration").number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.event_categories {
        let mut array = object.key("EventCategories").start_array();
        for item in var {
            array.value().string(item);
        }
        array.finish();
    }
    if let Some(var) = &input.filters {
        let mut array = object.key("Filters").start_array();
        for item in var {
            let mut obj = array.value().start_object();
            serialize_structure_filter(&mut obj, item)?;
            obj.finish();
        }
        array.finish();
    }
    if let Some(var) = &input.max_records {
        object
            .key("MaxRecords")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.marker {
        object.key("Marker").string(var);
    }
    Ok(())
}

pub fn serialize_structure_describe_refresh_schemas_status_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::DescribeRefreshSchemasStatusInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.endpoint_arn {
        object.key("EndpointArn").string(var);
    }
    Ok(())
}

pub fn serialize_structure_describe_replication_subnet_groups_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::DescribeReplicationSubnetGroupsInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.filters {
        let mut array = object.key("Filters").start_array();
        for item in var {
            let mut obj = array.value().start_object();
            serialize_structure_filter(&mut obj, item)?;
            obj.finish();
        }
        array.finish();
    }
    if let Some(var) = &input.max_records {
        object
            .key("MaxRecords")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.marker {
        object.key("Marker").string(var);
    }
    Ok(())
}

pub fn serialize_structure_describe_replication_tasks_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::DescribeReplicationTasksInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.filters {
        let mut array = object.key("Filters").start_array();
        for item in var {
            let mut obj = array.value().start_object();
            serialize_structure_filter(&mut obj, item)?;
            obj.finish();
        }
        array.finish();
    }
    if let Some(var) = &input.max_records {
        object
            .key("MaxRecords")
            .number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.marker {
        object.key("Marker").string(var);
    }
    if let Some(var) = &input.without_settings {
        object.key("WithoutSettings").boolean(*var);
    }
    Ok(())
}

pub fn serialize_structure_list_tags_for_resource_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::ListTagsForResourceInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.resource_arn {
        object.key("ResourceArn").string(var);
    }
    Ok(())
}

pub fn serialize_structure_modify_endpoint_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::ModifyEndpointInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.endpoint_arn {
        object.key("EndpointArn").string(var);
    }
    if let Some(var) = &input.endpoint_identifier {
        object.key("EndpointIdentifier").string(var);
    }
    if let Some(var) = &input.endpoint_type {
        object.key("EndpointType").string(var.as_str());
    }
    if let Some(var) = &input.engine_name {
        object.key("EngineName").string(var);
    }
    if let Some(var) = &input.username {
        object.key("Username").string(var);
    }
    if let Some(var) = &input.password {
        object.key("Password").string(var);
    }
    if let Some(var) = &input.server_name {
        object.key("ServerName").string(var);
    }
    if let Some(var) = &input.port {
        object.key("Port").number(Number::NegInt(i64::from(*var)));
    }
    if let Some(var) = &input.database_name {
        object.key("DatabaseName").string(var);
    }
    if let Some(var) = &input.extra_connection_attributes {
        object.key("ExtraConnectionAttributes").string(var);
    }
    if let Some(var) = &input.certificate_arn {
        object.key("CertificateArn").string(var);
    }
    if let Some(var) = &input.ssl_mode {
        object.key("SslMode").string(var.as_str());
    }
    if let Some(var) = &input.service_access_role_arn {
        object.key("ServiceAccessRoleArn").string(var);
    }
    if let Some(var) = &input.external_table_definition {
        object.key("ExternalTableDefinition").string(var);
    }
    if let Some(var) = &input.dynamo_db_settings {
        let mut obj = object.key("DynamoDbSettings").start_object();
        serialize_structure_dynamo_db_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.s3_settings {
        let mut obj = object.key("S3Settings").start_object();
        serialize_structure_s3_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.dms_transfer_settings {
        let mut obj = object.key("DmsTransferSettings").start_object();
        serialize_structure_dms_transfer_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.mongo_db_settings {
        let mut obj = object.key("MongoDbSettings").start_object();
        serialize_structure_mongo_db_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.kinesis_settings {
        let mut obj = object.key("KinesisSettings").start_object();
        serialize_structure_kinesis_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.kafka_settings {
        let mut obj = object.key("KafkaSettings").start_object();
        serialize_structure_kafka_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.elasticsearch_settings {
        let mut obj = object.key("ElasticsearchSettings").start_object();
        serialize_structure_elasticsearch_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.neptune_settings {
        let mut obj = object.key("NeptuneSettings").start_object();
        serialize_structure_neptune_settings(&mut obj, var)?;
        obj.finish();
    }
    if let Some(var) = &input.redshift_settings {
        let mut obj = object.key("RedshiftSettings").start_object();
        serialize_structure_redshift_settings(&mut obj, var)?;
        obj.finish();
    }
    Ok(())
}

pub fn serialize_structure_refresh_schemas_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::RefreshSchemasInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.endpoint_arn {
        object.key("EndpointArn").string(var);
    }
    if let Some(var) = &input.replication_instance_arn {
        object.key("ReplicationInstanceArn").string(var);
    }
    Ok(())
}

pub fn serialize_structure_remove_tags_from_resource_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::RemoveTagsFromResourceInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.resource_arn {
        object.key("ResourceArn").string(var);
    }
    if let Some(var) = &input.tag_keys {
        let mut array = object.key("TagKeys").start_array();
        for item in var {
            array.value().string(item);
        }
        array.finish();
    }
    Ok(())
}

pub fn serialize_structure_start_replication_task_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::StartReplicationTaskInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.replication_task_arn {
        object.key("ReplicationTaskArn").string(var);
    }
    if let Some(var) = &input.start_replication_task_type {
        object.key("StartReplicationTaskType").string(var.as_str());
    }
    if let Some(var) = &input.cdc_start_time {
        object
            .key("CdcStartTime")
            .date_time(var, Format::EpochSeconds)?;
    }
    if let Some(var) = &input.cdc_start_position {
        object.key("CdcStartPosition").string(var);
    }
    if let Some(var) = &input.cdc_stop_position {
        object.key("CdcStopPosition").string(var);
    }
    Ok(())
}

pub fn serialize_structure_stop_replication_task_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::StopReplicationTaskInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.replication_task_arn {
        object.key("ReplicationTaskArn").string(var);
    }
    Ok(())
}

pub fn serialize_structure_test_connection_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::TestConnectionInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var) = &input.replication_instance_arn {
        object.key("ReplicationInstanceArn").string(var);
    }
    if let Some(var) = &input.endpoint_arn {
        object.key("EndpointArn").string(var);
    }
    Ok(())
}
