/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Request shapes, one per operation.
//!
//! Builders for operations that do nothing but reference a resource enforce
//! the identifying ARN at `build()` time; everything else is left for the
//! service to validate.

use crate::model::{
    DmsSslModeValue, DmsTransferSettings, DynamoDbSettings, ElasticsearchSettings, Filter,
    KafkaSettings, KinesisSettings, MigrationTypeValue, MongoDbSettings, NeptuneSettings,
    RedshiftSettings, ReplicationEndpointTypeValue, S3Settings, SourceType,
    StartReplicationTaskTypeValue, Tag,
};
use dms_types::DateTime;

/// Input for the `AddTagsToResource` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct AddTagsToResourceInput {
    /// The ARN of the resource to tag.
    pub resource_arn: Option<String>,
    /// The tags to attach.
    pub tags: Option<Vec<Tag>>,
}

impl AddTagsToResourceInput {
    /// Creates a builder for `AddTagsToResourceInput`.
    pub fn builder() -> add_tags_to_resource_input::Builder {
        add_tags_to_resource_input::Builder::default()
    }
}

/// Builder for [`AddTagsToResourceInput`](crate::input::AddTagsToResourceInput).
pub mod add_tags_to_resource_input {
    use dms_types::error::BuildError;

    /// Builder for [`AddTagsToResourceInput`](crate::input::AddTagsToResourceInput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        resource_arn: Option<String>,
        tags: Option<Vec<crate::model::Tag>>,
    }

    impl Builder {
        pub fn resource_arn(mut self, input: impl Into<String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: Option<String>) -> Self {
            self.resource_arn = input;
            self
        }
        /// Appends a tag to `tags`.
        pub fn tags(mut self, input: crate::model::Tag) -> Self {
            let mut tags = self.tags.unwrap_or_default();
            tags.push(input);
            self.tags = Some(tags);
            self
        }
        pub fn set_tags(mut self, input: Option<Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Builds the input; requires `resource_arn`.
        pub fn build(self) -> Result<crate::input::AddTagsToResourceInput, BuildError> {
            if self.resource_arn.is_none() {
                return Err(BuildError::missing_field(
                    "resource_arn",
                    "it identifies the resource to tag",
                ));
            }
            Ok(crate::input::AddTagsToResourceInput {
                resource_arn: self.resource_arn,
                tags: self.tags,
            })
        }
    }
}

/// Input for the `CreateEndpoint` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateEndpointInput {
    /// The identifier for the new endpoint.
    pub endpoint_identifier: Option<String>,
    /// Whether the endpoint is a source or a target.
    pub endpoint_type: Option<ReplicationEndpointTypeValue>,
    /// The database engine name.
    pub engine_name: Option<String>,
    /// The user name to connect with.
    pub username: Option<String>,
    /// The password to connect with.
    pub password: Option<String>,
    /// The server name.
    pub server_name: Option<String>,
    /// The port.
    pub port: Option<i32>,
    /// The database name.
    pub database_name: Option<String>,
    /// Extra attributes passed to the connection.
    pub extra_connection_attributes: Option<String>,
    /// The KMS key used to encrypt the connection parameters.
    pub kms_key_id: Option<String>,
    /// Tags to attach to the new endpoint.
    pub tags: Option<Vec<Tag>>,
    /// The ARN of the certificate used for SSL.
    pub certificate_arn: Option<String>,
    /// The SSL mode to use.
    pub ssl_mode: Option<DmsSslModeValue>,
    /// The ARN of the service access role, for engines that need one.
    pub service_access_role_arn: Option<String>,
    /// The external table definition document.
    pub external_table_definition: Option<String>,
    /// Settings when the engine is DynamoDB.
    pub dynamo_db_settings: Option<DynamoDbSettings>,
    /// Settings when the engine is S3.
    pub s3_settings: Option<S3Settings>,
    /// Settings for the DMS transfer engine.
    pub dms_transfer_settings: Option<DmsTransferSettings>,
    /// Settings when the engine is MongoDB.
    pub mongo_db_settings: Option<MongoDbSettings>,
    /// Settings when the engine is Kinesis.
    pub kinesis_settings: Option<KinesisSettings>,
    /// Settings when the engine is Kafka.
    pub kafka_settings: Option<KafkaSettings>,
    /// Settings when the engine is Elasticsearch.
    pub elasticsearch_settings: Option<ElasticsearchSettings>,
    /// Settings when the engine is Neptune.
    pub neptune_settings: Option<NeptuneSettings>,
    /// Settings when the engine is Redshift.
    pub redshift_settings: Option<RedshiftSettings>,
}

impl CreateEndpointInput {
    /// Creates a builder for `CreateEndpointInput`.
    pub fn builder() -> create_endpoint_input::Builder {
        create_endpoint_input::Builder::default()
    }
}

/// Builder for [`CreateEndpointInput`](crate::input::CreateEndpointInput).
pub mod create_endpoint_input {
    /// Builder for [`CreateEndpointInput`](crate::input::CreateEndpointInput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        endpoint_identifier: Option<String>,
        endpoint_type: Option<crate::model::ReplicationEndpointTypeValue>,
        engine_name: Option<String>,
        username: Option<String>,
        password: Option<String>,
        server_name: Option<String>,
        port: Option<i32>,
        database_name: Option<String>,
        extra_connection_attributes: Option<String>,
        kms_key_id: Option<String>,
        tags: Option<Vec<crate::model::Tag>>,
        certificate_arn: Option<String>,
        ssl_mode: Option<crate::model::DmsSslModeValue>,
        service_access_role_arn: Option<String>,
        external_table_definition: Option<String>,
        dynamo_db_settings: Option<crate::model::DynamoDbSettings>,
        s3_settings: Option<crate::model::S3Settings>,
        dms_transfer_settings: Option<crate::model::DmsTransferSettings>,
        mongo_db_settings: Option<crate::model::MongoDbSettings>,
        kinesis_settings: Option<crate::model::KinesisSettings>,
        kafka_settings: Option<crate::model::KafkaSettings>,
        elasticsearch_settings: Option<crate::model::ElasticsearchSettings>,
        neptune_settings: Option<crate::model::NeptuneSettings>,
        redshift_settings: Option<crate::model::RedshiftSettings>,
    }

    impl Builder {
        pub fn endpoint_identifier(mut self, input: impl Into<String>) -> Self {
            self.endpoint_identifier = Some(input.into());
            self
        }
        pub fn set_endpoint_identifier(mut self, input: Option<String>) -> Self {
            self.endpoint_identifier = input;
            self
        }
        pub fn endpoint_type(
            mut self,
            input: crate::model::ReplicationEndpointTypeValue,
        ) -> Self {
            self.endpoint_type = Some(input);
            self
        }
        pub fn set_endpoint_type(
            mut self,
            input: Option<crate::model::ReplicationEndpointTypeValue>,
        ) -> Self {
            self.endpoint_type = input;
            self
        }
        pub fn engine_name(mut self, input: impl Into<String>) -> Self {
            self.engine_name = Some(input.into());
            self
        }
        pub fn set_engine_name(mut self, input: Option<String>) -> Self {
            self.engine_name = input;
            self
        }
        pub fn username(mut self, input: impl Into<String>) -> Self {
            self.username = Some(input.into());
            self
        }
        pub fn set_username(mut self, input: Option<String>) -> Self {
            self.username = input;
            self
        }
        pub fn password(mut self, input: impl Into<String>) -> Self {
            self.password = Some(input.into());
            self
        }
        pub fn set_password(mut self, input: Option<String>) -> Self {
            self.password = input;
            self
        }
        pub fn server_name(mut self, input: impl Into<String>) -> Self {
            self.server_name = Some(input.into());
            self
        }
        pub fn set_server_name(mut self, input: Option<String>) -> Self {
            self.server_name = input;
            self
        }
        pub fn port(mut self, input: i32) -> Self {
            self.port = Some(input);
            self
        }
        pub fn set_port(mut self, input: Option<i32>) -> Self {
            self.port = input;
            self
        }
        pub fn database_name(mut self, input: impl Into<String>) -> Self {
            self.database_name = Some(input.into());
            self
        }
        pub fn set_database_name(mut self, input: Option<String>) -> Self {
            self.database_name = input;
            self
        }
        pub fn extra_connection_attributes(mut self, input: impl Into<String>) -> Self {
            self.extra_connection_attributes = Some(input.into());
            self
        }
        pub fn set_extra_connection_attributes(mut self, input: Option<String>) -> Self {
            self.extra_connection_attributes = input;
            self
        }
        pub fn kms_key_id(mut self, input: impl Into<String>) -> Self {
            self.kms_key_id = Some(input.into());
            self
        }
        pub fn set_kms_key_id(mut self, input: Option<String>) -> Self {
            self.kms_key_id = input;
            self
        }
        /// Appends a tag to `tags`.
        pub fn tags(mut self, input: crate::model::Tag) -> Self {
            let mut tags = self.tags.unwrap_or_default();
            tags.push(input);
            self.tags = Some(tags);
            self
        }
        pub fn set_tags(mut self, input: Option<Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        pub fn certificate_arn(mut self, input: impl Into<String>) -> Self {
            self.certificate_arn = Some(input.into());
            self
        }
        pub fn set_certificate_arn(mut self, input: Option<String>) -> Self {
            self.certificate_arn = input;
            self
        }
        pub fn ssl_mode(mut self, input: crate::model::DmsSslModeValue) -> Self {
            self.ssl_mode = Some(input);
            self
        }
        pub fn set_ssl_mode(mut self, input: Option<crate::model::DmsSslModeValue>) -> Self {
            self.ssl_mode = input;
            self
        }
        pub fn service_access_role_arn(mut self, input: impl Into<String>) -> Self {
            self.service_access_role_arn = Some(input.into());
            self
        }
        pub fn set_service_access_role_arn(mut self, input: Option<String>) -> Self {
            self.service_access_role_arn = input;
            self
        }
        pub fn external_table_definition(mut self, input: impl Into<String>) -> Self {
            self.external_table_definition = Some(input.into());
            self
        }
        pub fn set_external_table_definition(mut self, input: Option<String>) -> Self {
            self.external_table_definition = input;
            self
        }
        pub fn dynamo_db_settings(mut self, input: crate::model::DynamoDbSettings) -> Self {
            self.dynamo_db_settings = Some(input);
            self
        }
        pub fn set_dynamo_db_settings(
            mut self,
            input: Option<crate::model::DynamoDbSettings>,
        ) -> Self {
            self.dynamo_db_settings = input;
            self
        }
        pub fn s3_settings(mut self, input: crate::model::S3Settings) -> Self {
            self.s3_settings = Some(input);
            self
        }
        pub fn set_s3_settings(mut self, input: Option<crate::model::S3Settings>) -> Self {
            self.s3_settings = input;
            self
        }
        pub fn dms_transfer_settings(
            mut self,
            input: crate::model::DmsTransferSettings,
        ) -> Self {
            self.dms_transfer_settings = Some(input);
            self
        }
        pub fn set_dms_transfer_settings(
            mut self,
            input: Option<crate::model::DmsTransferSettings>,
        ) -> Self {
            self.dms_transfer_settings = input;
            self
        }
        pub fn mongo_db_settings(mut self, input: crate::model::MongoDbSettings) -> Self {
            self.mongo_db_settings = Some(input);
            self
        }
        pub fn set_mongo_db_settings(
            mut self,
            input: Option<crate::model::MongoDbSettings>,
        ) -> Self {
            self.mongo_db_settings = input;
            self
        }
        pub fn kinesis_settings(mut self, input: crate::model::KinesisSettings) -> Self {
            self.kinesis_settings = Some(input);
            self
        }
        pub fn set_kinesis_settings(
            mut self,
            input: Option<crate::model::KinesisSettings>,
        ) -> Self {
            self.kinesis_settings = input;
            self
        }
        pub fn kafka_settings(mut self, input: crate::model::KafkaSettings) -> Self {
            self.kafka_settings = Some(input);
            self
        }
        pub fn set_kafka_settings(mut self, input: Option<crate::model::KafkaSettings>) -> Self {
            self.kafka_settings = input;
            self
        }
        pub fn elasticsearch_settings(
            mut self,
            input: crate::model::ElasticsearchSettings,
        ) -> Self {
            self.elasticsearch_settings = Some(input);
            self
        }
        pub fn set_elasticsearch_settings(
            mut self,
            input: Option<crate::model::ElasticsearchSettings>,
        ) -> Self {
            self.elasticsearch_settings = input;
            self
        }
        pub fn neptune_settings(mut self, input: crate::model::NeptuneSettings) -> Self {
            self.neptune_settings = Some(input);
            self
        }
        pub fn set_neptune_settings(
            mut self,
            input: Option<crate::model::NeptuneSettings>,
        ) -> Self {
            self.neptune_settings = input;
            self
        }
        pub fn redshift_settings(mut self, input: crate::model::RedshiftSettings) -> Self {
            self.redshift_settings = Some(input);
            self
        }
        pub fn set_redshift_settings(
            mut self,
            input: Option<crate::model::RedshiftSettings>,
        ) -> Self {
            self.redshift_settings = input;
            self
        }
        /// Builds the `CreateEndpointInput`.
        pub fn build(self) -> crate::input::CreateEndpointInput {
            crate::input::CreateEndpointInput {
                endpoint_identifier: self.endpoint_identifier,
                endpoint_type: self.endpoint_type,
                engine_name: self.engine_name,
                username: self.username,
                password: self.password,
                server_name: self.server_name,
                port: self.port,
                database_name: self.database_name,
                extra_connection_attributes: self.extra_connection_attributes,
                kms_key_id: self.kms_key_id,
                tags: self.tags,
                certificate_arn: self.certificate_arn,
                ssl_mode: self.ssl_mode,
                service_access_role_arn: self.service_access_role_arn,
                external_table_definition: self.external_table_definition,
                dynamo_db_settings: self.dynamo_db_settings,
                s3_settings: self.s3_settings,
                dms_transfer_settings: self.dms_transfer_settings,
                mongo_db_settings: self.mongo_db_settings,
                kinesis_settings: self.kinesis_settings,
                kafka_settings: self.kafka_settings,
                elasticsearch_settings: self.elasticsearch_settings,
                neptune_settings: self.neptune_settings,
                redshift_settings: self.redshift_settings,
            }
        }
    }
}

/// Input for the `CreateReplicationTask` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateReplicationTaskInput {
    /// The identifier for the new task.
    pub replication_task_identifier: Option<String>,
    /// The ARN of the source endpoint.
    pub source_endpoint_arn: Option<String>,
    /// The ARN of the target endpoint.
    pub target_endpoint_arn: Option<String>,
    /// The ARN of the replication instance to run on.
    pub replication_instance_arn: Option<String>,
    /// The migration mode.
    pub migration_type: Option<MigrationTypeValue>,
    /// Table mappings, as a JSON document.
    pub table_mappings: Option<String>,
    /// Task settings, as a JSON document.
    pub replication_task_settings: Option<String>,
    /// When CDC should begin.
    pub cdc_start_time: Option<DateTime>,
    /// A native start position for CDC.
    pub cdc_start_position: Option<String>,
    /// A position at which CDC should stop.
    pub cdc_stop_position: Option<String>,
    /// Tags to attach to the new task.
    pub tags: Option<Vec<Tag>>,
    /// Supplemental task metadata, as a JSON document.
    pub task_data: Option<String>,
}

impl CreateReplicationTaskInput {
    /// Creates a builder for `CreateReplicationTaskInput`.
    pub fn builder() -> create_replication_task_input::Builder {
        create_replication_task_input::Builder::default()
    }
}

/// Builder for [`CreateReplicationTaskInput`](crate::input::CreateReplicationTaskInput).
pub mod create_replication_task_input {
    use dms_types::DateTime;

    /// Builder for [`CreateReplicationTaskInput`](crate::input::CreateReplicationTaskInput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        replication_task_identifier: Option<String>,
        source_endpoint_arn: Option<String>,
        target_endpoint_arn: Option<String>,
        replication_instance_arn: Option<String>,
        migration_type: Option<crate::model::MigrationTypeValue>,
        table_mappings: Option<String>,
        replication_task_settings: Option<String>,
        cdc_start_time: Option<DateTime>,
        cdc_start_position: Option<String>,
        cdc_stop_position: Option<String>,
        tags: Option<Vec<crate::model::Tag>>,
        task_data: Option<String>,
    }

    impl Builder {
        pub fn replication_task_identifier(mut self, input: impl Into<String>) -> Self {
            self.replication_task_identifier = Some(input.into());
            self
        }
        pub fn set_replication_task_identifier(mut self, input: Option<String>) -> Self {
            self.replication_task_identifier = input;
            self
        }
        pub fn source_endpoint_arn(mut self, input: impl Into<String>) -> Self {
            self.source_endpoint_arn = Some(input.into());
            self
        }
        pub fn set_source_endpoint_arn(mut self, input: Option<String>) -> Self {
            self.source_endpoint_arn = input;
            self
        }
        pub fn target_endpoint_arn(mut self, input: impl Into<String>) -> Self {
            self.target_endpoint_arn = Some(input.into());
            self
        }
        pub fn set_target_endpoint_arn(mut self, input: Option<String>) -> Self {
            self.target_endpoint_arn = input;
            self
        }
        pub fn replication_instance_arn(mut self, input: impl Into<String>) -> Self {
            self.replication_instance_arn = Some(input.into());
            self
        }
        pub fn set_replication_instance_arn(mut self, input: Option<String>) -> Self {
            self.replication_instance_arn = input;
            self
        }
        pub fn migration_type(mut self, input: crate::model::MigrationTypeValue) -> Self {
            self.migration_type = Some(input);
            self
        }
        pub fn set_migration_type(
            mut self,
            input: Option<crate::model::MigrationTypeValue>,
        ) -> Self {
            self.migration_type = input;
            self
        }
        pub fn table_mappings(mut self, input: impl Into<String>) -> Self {
            self.table_mappings = Some(input.into());
            self
        }
        pub fn set_table_mappings(mut self, input: Option<String>) -> Self {
            self.table_mappings = input;
            self
        }
        pub fn replication_task_settings(mut self, input: impl Into<String>) -> Self {
            self.replication_task_settings = Some(input.into());
            self
        }
        pub fn set_replication_task_settings(mut self, input: Option<String>) -> Self {
            self.replication_task_settings = input;
            self
        }
        pub fn cdc_start_time(mut self, input: DateTime) -> Self {
            self.cdc_start_time = Some(input);
            self
        }
        pub fn set_cdc_start_time(mut self, input: Option<DateTime>) -> Self {
            self.cdc_start_time = input;
            self
        }
        pub fn cdc_start_position(mut self, input: impl Into<String>) -> Self {
            self.cdc_start_position = Some(input.into());
            self
        }
        pub fn set_cdc_start_position(mut self, input: Option<String>) -> Self {
            self.cdc_start_position = input;
            self
        }
        pub fn cdc_stop_position(mut self, input: impl Into<String>) -> Self {
            self.cdc_stop_position = Some(input.into());
            self
        }
        pub fn set_cdc_stop_position(mut self, input: Option<String>) -> Self {
            self.cdc_stop_position = input;
            self
        }
        /// Appends a tag to `tags`.
        pub fn tags(mut self, input: crate::model::Tag) -> Self {
            let mut tags = self.tags.unwrap_or_default();
            tags.push(input);
            self.tags = Some(tags);
            self
        }
        pub fn set_tags(mut self, input: Option<Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        pub fn task_data(mut self, input: impl Into<String>) -> Self {
            self.task_data = Some(input.into());
            self
        }
        pub fn set_task_data(mut self, input: Option<String>) -> Self {
            self.task_data = input;
            self
        }
        /// Builds the `CreateReplicationTaskInput`.
        pub fn build(self) -> crate::input::CreateReplicationTaskInput {
            crate::input::CreateReplicationTaskInput {
                replication_task_identifier: self.replication_task_identifier,
                source_endpoint_arn: self.source_endpoint_arn,
                target_endpoint_arn: self.target_endpoint_arn,
                replication_instance_arn: self.replication_instance_arn,
                migration_type: self.migration_type,
                table_mappings: self.table_mappings,
                replication_task_settings: self.replication_task_settings,
                cdc_start_time: self.cdc_start_time,
                cdc_start_position: self.cdc_start_position,
                cdc_stop_position: self.cdc_stop_position,
                tags: self.tags,
                task_data: self.task_data,
            }
        }
    }
}

/// Input for the `DeleteEndpoint` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteEndpointInput {
    /// The ARN of the endpoint to delete.
    pub endpoint_arn: Option<String>,
}

impl DeleteEndpointInput {
    /// Creates a builder for `DeleteEndpointInput`.
    pub fn builder() -> delete_endpoint_input::Builder {
        delete_endpoint_input::Builder::default()
    }
}

/// Builder for [`DeleteEndpointInput`](crate::input::DeleteEndpointInput).
pub mod delete_endpoint_input {
    use dms_types::error::BuildError;

    /// Builder for [`DeleteEndpointInput`](crate::input::DeleteEndpointInput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        endpoint_arn: Option<String>,
    }

    impl Builder {
        pub fn endpoint_arn(mut self, input: impl Into<String>) -> Self {
            self.endpoint_arn = Some(input.into());
            self
        }
        pub fn set_endpoint_arn(mut self, input: Option<String>) -> Self {
            self.endpoint_arn = input;
            self
        }
        /// Builds the input; requires `endpoint_arn`.
        pub fn build(self) -> Result<crate::input::DeleteEndpointInput, BuildError> {
            if self.endpoint_arn.is_none() {
                return Err(BuildError::missing_field(
                    "endpoint_arn",
                    "it identifies the endpoint to delete",
                ));
            }
            Ok(crate::input::DeleteEndpointInput {
                endpoint_arn: self.endpoint_arn,
            })
        }
    }
}

/// Input for the `DeleteReplicationTask` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteReplicationTaskInput {
    /// The ARN of the task to delete.
    pub replication_task_arn: Option<String>,
}

impl DeleteReplicationTaskInput {
    /// Creates a builder for `DeleteReplicationTaskInput`.
    pub fn builder() -> delete_replication_task_input::Builder {
        delete_replication_task_input::Builder::default()
    }
}

/// Builder for [`DeleteReplicationTaskInput`](crate::input::DeleteReplicationTaskInput).
pub mod delete_replication_task_input {
    use dms_types::error::BuildError;

    /// Builder for [`DeleteReplicationTaskInput`](crate::input::DeleteReplicationTaskInput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        replication_task_arn: Option<String>,
    }

    impl Builder {
        pub fn replication_task_arn(mut self, input: impl Into<String>) -> Self {
            self.replication_task_arn = Some(input.into());
            self
        }
        pub fn set_replication_task_arn(mut self, input: Option<String>) -> Self {
            self.replication_task_arn = input;
            self
        }
        /// Builds the input; requires `replication_task_arn`.
        pub fn build(self) -> Result<crate::input::DeleteReplicationTaskInput, BuildError> {
            if self.replication_task_arn.is_none() {
                return Err(BuildError::missing_field(
                    "replication_task_arn",
                    "it identifies the task to delete",
                ));
            }
            Ok(crate::input::DeleteReplicationTaskInput {
                replication_task_arn: self.replication_task_arn,
            })
        }
    }
}

/// Input for the `DescribeAccountAttributes` operation, which takes no
/// parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct DescribeAccountAttributesInput {}

impl DescribeAccountAttributesInput {
    /// Creates a builder for `DescribeAccountAttributesInput`.
    pub fn builder() -> describe_account_attributes_input::Builder {
        describe_account_attributes_input::Builder::default()
    }
}

/// Builder for [`DescribeAccountAttributesInput`](crate::input::DescribeAccountAttributesInput).
pub mod describe_account_attributes_input {
    /// Builder for [`DescribeAccountAttributesInput`](crate::input::DescribeAccountAttributesInput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {}

    impl Builder {
        /// Builds the `DescribeAccountAttributesInput`.
        pub fn build(self) -> crate::input::DescribeAccountAttributesInput {
            crate::input::DescribeAccountAttributesInput {}
        }
    }
}

/// Input for the `DescribeConnections` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct DescribeConnectionsInput {
    /// Filters applied to the described connections.
    pub filters: Option<Vec<Filter>>,
    /// The maximum number of records per page.
    pub max_records: Option<i32>,
    /// The pagination marker from a previous response.
    pub marker: Option<String>,
}

impl DescribeConnectionsInput {
    /// Creates a builder for `DescribeConnectionsInput`.
    pub fn builder() -> describe_connections_input::Builder {
        describe_connections_input::Builder::default()
    }
}

/// Builder for [`DescribeConnectionsInput`](crate::input::DescribeConnectionsInput).
pub mod describe_connections_input {
    /// Builder for [`DescribeConnectionsInput`](crate::input::DescribeConnectionsInput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        filters: Option<Vec<crate::model::Filter>>,
        max_records: Option<i32>,
        marker: Option<String>,
    }

    impl Builder {
        /// Appends a filter to `filters`.
        pub fn filters(mut self, input: crate::model::Filter) -> Self {
            let mut filters = self.filters.unwrap_or_default();
            filters.push(input);
            self.filters = Some(filters);
            self
        }
        pub fn set_filters(mut self, input: Option<Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
            self
        }
        pub fn max_records(mut self, input: i32) -> Self {
            self.max_records = Some(input);
            self
        }
        pub fn set_max_records(mut self, input: Option<i32>) -> Self {
            self.max_records = input;
            self
        }
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }
        /// Builds the `DescribeConnectionsInput`.
        pub fn build(self) -> crate::input::DescribeConnectionsInput {
            crate::input::DescribeConnectionsInput {
                filters: self.filters,
                max_records: self.max_records,
                marker: self.marker,
            }
        }
    }
}

/// Input for the `DescribeEndpoints` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct DescribeEndpointsInput {
    /// Filters applied to the described endpoints.
    pub filters: Option<Vec<Filter>>,
    /// The maximum number of records per page.
    pub max_records: Option<i32>,
    /// The pagination marker from a previous response.
    pub marker: Option<String>,
}

impl DescribeEndpointsInput {
    /// Creates a builder for `DescribeEndpointsInput`.
    pub fn builder() -> describe_endpoints_input::Builder {
        describe_endpoints_input::Builder::default()
    }
}

/// Builder for [`DescribeEndpointsInput`](crate::input::DescribeEndpointsInput).
pub mod describe_endpoints_input {
    /// Builder for [`DescribeEndpointsInput`](crate::input::DescribeEndpointsInput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        filters: Option<Vec<crate::model::Filter>>,
        max_records: Option<i32>,
        marker: Option<String>,
    }

    impl Builder {
        /// Appends a filter to `filters`.
        pub fn filters(mut self, input: crate::model::Filter) -> Self {
            let mut filters = self.filters.unwrap_or_default();
            filters.push(input);
            self.filters = Some(filters);
            self
        }
        pub fn set_filters(mut self, input: Option<Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
            self
        }
        pub fn max_records(mut self, input: i32) -> Self {
            self.max_records = Some(input);
            self
        }
        pub fn set_max_records(mut self, input: Option<i32>) -> Self {
            self.max_records = input;
            self
        }
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }
        /// Builds the `DescribeEndpointsInput`.
        pub fn build(self) -> crate::input::DescribeEndpointsInput {
            crate::input::DescribeEndpointsInput {
                filters: self.filters,
                max_records: self.max_records,
                marker: self.marker,
            }
        }
    }
}

/// Input for the `DescribeEvents` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct DescribeEventsInput {
    /// The identifier of the source generating the events.
    pub source_identifier: Option<String>,
    /// The kind of source generating the events.
    pub source_type: Option<SourceType>,
    /// The start of the time window.
    pub start_time: Option<DateTime>,
    /// The end of the time window.
    pub end_time: Option<DateTime>,
    /// The duration of the window, in minutes.
    pub duration: Option<i32>,
    /// The categories to filter on.
    pub event_categories: Option<Vec<String>>,
    /// Filters applied to the described events.
    pub filters: Option<Vec<Filter>>,
    /// The maximum number of records per page.
    pub max_records: Option<i32>,
    /// The pagination marker from a previous response.
    pub marker: Option<String>,
}

impl DescribeEventsInput {
    /// Creates a builder for `DescribeEventsInput`.
    pub fn builder() -> describe_events_input::Builder {
        describe_events_input::Builder::default()
    }
}

/// Builder for [`DescribeEventsInput`](crate::input::DescribeEventsInput).
pub mod describe_events_input {
    use dms_types::DateTime;

    /// Builder for [`DescribeEventsInput`](crate::input::DescribeEventsInput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        source_identifier: Option<String>,
        source_type: Option<crate::model::SourceType>,
        start_time: Option<DateTime>,
        end_time: Option<DateTime>,
        duration: Option<i32>,
        event_categories: Option<Vec<String>>,
        filters: Option<Vec<crate::model::Filter>>,
        max_records: Option<i32>,
        marker: Option<String>,
    }

    impl Builder {
        pub fn source_identifier(mut self, input: impl Into<String>) -> Self {
            self.source_identifier = Some(input.into());
            self
        }
        pub fn set_source_identifier(mut self, input: Option<String>) -> Self {
            self.source_identifier = input;
            self
        }
        pub fn source_type(mut self, input: crate::model::SourceType) -> Self {
            self.source_type = Some(input);
            self
        }
        pub fn set_source_type(mut self, input: Option<crate::model::SourceType>) -> Self {
            self.source_type = input;
            self
        }
        pub fn start_time(mut self, input: DateTime) -> Self {
            self.start_time = Some(input);
            self
        }
        pub fn set_start_time(mut self, input: Option<DateTime>) -> Self {
            self.start_time = input;
            self
        }
        pub fn end_time(mut self, input: DateTime) -> Self {
            self.end_time = Some(input);
            self
        }
        pub fn set_end_time(mut self, input: Option<DateTime>) -> Self {
            self.end_time = input;
            self
        }
        pub fn duration(mut self, input: i32) -> Self {
            self.duration = Some(input);
            self
        }
        pub fn set_duration(mut self, input: Option<i32>) -> Self {
            self.duration = input;
            self
        }
        /// Appends a category to `event_categories`.
        pub fn event_categories(mut self, input: impl Into<String>) -> Self {
            let mut categories = self.event_categories.unwrap_or_default();
            categories.push(input.into());
            self.event_categories = Some(categories);
            self
        }
        pub fn set_event_categories(mut self, input: Option<Vec<String>>) -> Self {
            self.event_categories = input;
            self
        }
        /// Appends a filter to `filters`.
        pub fn filters(mut self, input: crate::model::Filter) -> Self {
            let mut filters = self.filters.unwrap_or_default();
            filters.push(input);
            self.filters = Some(filters);
            self
        }
        pub fn set_filters(mut self, input: Option<Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
            self
        }
        pub fn max_records(mut self, input: i32) -> Self {
            self.max_records = Some(input);
            self
        }
        pub fn set_max_records(mut self, input: Option<i32>) -> Self {
            self.max_records = input;
            self
        }
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }
        /// Builds the `DescribeEventsInput`.
        pub fn build(self) -> crate::input::DescribeEventsInput {
            crate::input::DescribeEventsInput {
                source_identifier: self.source_identifier,
                source_type: self.source_type,
                start_time: self.start_time,
                end_time: self.end_time,
                duration: self.duration,
                event_categories: self.event_categories,
                filters: self.filters,
                max_records: self.max_records,
                marker: self.marker,
            }
        }
    }
}

/// Input for the `DescribeRefreshSchemasStatus` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct DescribeRefreshSchemasStatusInput {
    /// The ARN of the endpoint to report on.
    pub endpoint_arn: Option<String>,
}

impl DescribeRefreshSchemasStatusInput {
    /// Creates a builder for `DescribeRefreshSchemasStatusInput`.
    pub fn builder() -> describe_refresh_schemas_status_input::Builder {
        describe_refresh_schemas_status_input::Builder::default()
    }
}

/// Builder for [`DescribeRefreshSchemasStatusInput`](crate::input::DescribeRefreshSchemasStatusInput).
pub mod describe_refresh_schemas_status_input {
    use dms_types::error::BuildError;

    /// Builder for [`DescribeRefreshSchemasStatusInput`](crate::input::DescribeRefreshSchemasStatusInput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        endpoint_arn: Option<String>,
    }

    impl Builder {
        pub fn endpoint_arn(mut self, input: impl Into<String>) -> Self {
            self.endpoint_arn = Some(input.into());
            self
        }
        pub fn set_endpoint_arn(mut self, input: Option<String>) -> Self {
            self.endpoint_arn = input;
            self
        }
        /// Builds the input; requires `endpoint_arn`.
        pub fn build(
            self,
        ) -> Result<crate::input::DescribeRefreshSchemasStatusInput, BuildError> {
            if self.endpoint_arn.is_none() {
                return Err(BuildError::missing_field(
                    "endpoint_arn",
                    "it identifies the endpoint to report on",
                ));
            }
            Ok(crate::input::DescribeRefreshSchemasStatusInput {
                endpoint_arn: self.endpoint_arn,
            })
        }
    }
}

/// Input for the `DescribeReplicationSubnetGroups` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct DescribeReplicationSubnetGroupsInput {
    /// Filters applied to the described subnet groups.
    pub filters: Option<Vec<Filter>>,
    /// The maximum number of records per page.
    pub max_records: Option<i32>,
    /// The pagination marker from a previous response.
    pub marker: Option<String>,
}

impl DescribeReplicationSubnetGroupsInput {
    /// Creates a builder for `DescribeReplicationSubnetGroupsInput`.
    pub fn builder() -> describe_replication_subnet_groups_input::Builder {
        describe_replication_subnet_groups_input::Builder::default()
    }
}

/// Builder for [`DescribeReplicationSubnetGroupsInput`](crate::input::DescribeReplicationSubnetGroupsInput).
pub mod describe_replication_subnet_groups_input {
    /// Builder for [`DescribeReplicationSubnetGroupsInput`](crate::input::DescribeReplicationSubnetGroupsInput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        filters: Option<Vec<crate::model::Filter>>,
        max_records: Option<i32>,
        marker: Option<String>,
    }

    impl Builder {
        /// Appends a filter to `filters`.
        pub fn filters(mut self, input: crate::model::Filter) -> Self {
            let mut filters = self.filters.unwrap_or_default();
            filters.push(input);
            self.filters = Some(filters);
            self
        }
        pub fn set_filters(mut self, input: Option<Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
            self
        }
        pub fn max_records(mut self, input: i32) -> Self {
            self.max_records = Some(input);
            self
        }
        pub fn set_max_records(mut self, input: Option<i32>) -> Self {
            self.max_records = input;
            self
        }
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }
        /// Builds the `DescribeReplicationSubnetGroupsInput`.
        pub fn build(self) -> crate::input::DescribeReplicationSubnetGroupsInput {
            crate::input::DescribeReplicationSubnetGroupsInput {
                filters: self.filters,
                max_records: self.max_records,
                marker: self.marker,
            }
        }
    }
}

/// Input for the `DescribeReplicationTasks` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct DescribeReplicationTasksInput {
    /// Filters applied to the described tasks.
    pub filters: Option<Vec<Filter>>,
    /// The maximum number of records per page.
    pub max_records: Option<i32>,
    /// The pagination marker from a previous response.
    pub marker: Option<String>,
    /// Whether to omit the task settings documents from the response.
    pub without_settings: Option<bool>,
}

impl DescribeReplicationTasksInput {
    /// Creates a builder for `DescribeReplicationTasksInput`.
    pub fn builder() -> describe_replication_tasks_input::Builder {
        describe_replication_tasks_input::Builder::default()
    }
}

/// Builder for [`DescribeReplicationTasksInput`](crate::input::DescribeReplicationTasksInput).
pub mod describe_replication_tasks_input {
    /// Builder for [`DescribeReplicationTasksInput`](crate::input::DescribeReplicationTasksInput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        filters: Option<Vec<crate::model::Filter>>,
        max_records: Option<i32>,
        marker: Option<String>,
        without_settings: Option<bool>,
    }

    impl Builder {
        /// Appends a filter to `filters`.
        pub fn filters(mut self, input: crate::model::Filter) -> Self {
            let mut filters = self.filters.unwrap_or_default();
            filters.push(input);
            self.filters = Some(filters);
            self
        }
        pub fn set_filters(mut self, input: Option<Vec<crate::model::Filter>>) -> Self {
            self.filters = input;
            self
        }
        pub fn max_records(mut self, input: i32) -> Self {
            self.max_records = Some(input);
            self
        }
        pub fn set_max_records(mut self, input: Option<i32>) -> Self {
            self.max_records = input;
            self
        }
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }
        pub fn without_settings(mut self, input: bool) -> Self {
            self.without_settings = Some(input);
            self
        }
        pub fn set_without_settings(mut self, input: Option<bool>) -> Self {
            self.without_settings = input;
            self
        }
        /// Builds the `DescribeReplicationTasksInput`.
        pub fn build(self) -> crate::input::DescribeReplicationTasksInput {
            crate::input::DescribeReplicationTasksInput {
                filters: self.filters,
                max_records: self.max_records,
                marker: self.marker,
                without_settings: self.without_settings,
            }
        }
    }
}

/// Input for the `ListTagsForResource` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct ListTagsForResourceInput {
    /// The ARN of the resource to list tags for.
    pub resource_arn: Option<String>,
}

impl ListTagsForResourceInput {
    /// Creates a builder for `ListTagsForResourceInput`.
    pub fn builder() -> list_tags_for_resource_input::Builder {
        list_tags_for_resource_input::Builder::default()
    }
}

/// Builder for [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput).
pub mod list_tags_for_resource_input {
    use dms_types::error::BuildError;

    /// Builder for [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        resource_arn: Option<String>,
    }

    impl Builder {
        pub fn resource_arn(mut self, input: impl Into<String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: Option<String>) -> Self {
            self.resource_arn = input;
            self
        }
        /// Builds the input; requires `resource_arn`.
        pub fn build(self) -> Result<crate::input::ListTagsForResourceInput, BuildError> {
            if self.resource_arn.is_none() {
                return Err(BuildError::missing_field(
                    "resource_arn",
                    "it identifies the resource to list tags for",
                ));
            }
            Ok(crate::input::ListTagsForResourceInput {
                resource_arn: self.resource_arn,
            })
        }
    }
}

/// Input for the `ModifyEndpoint` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct ModifyEndpointInput {
    /// The ARN of the endpoint to modify.
    pub endpoint_arn: Option<String>,
    /// A new identifier for the endpoint.
    pub endpoint_identifier: Option<String>,
    /// Whether the endpoint is a source or a target.
    pub endpoint_type: Option<ReplicationEndpointTypeValue>,
    /// The database engine name.
    pub engine_name: Option<String>,
    /// The user name to connect with.
    pub username: Option<String>,
    /// The password to connect with.
    pub password: Option<String>,
    /// The server name.
    pub server_name: Option<String>,
    /// The port.
    pub port: Option<i32>,
    /// The database name.
    pub database_name: Option<String>,
    /// Extra attributes passed to the connection.
    pub extra_connection_attributes: Option<String>,
    /// The ARN of the certificate used for SSL.
    pub certificate_arn: Option<String>,
    /// The SSL mode to use.
    pub ssl_mode: Option<DmsSslModeValue>,
    /// The ARN of the service access role.
    pub service_access_role_arn: Option<String>,
    /// The external table definition document.
    pub external_table_definition: Option<String>,
    /// Settings when the engine is DynamoDB.
    pub dynamo_db_settings: Option<DynamoDbSettings>,
    /// Settings when the engine is S3.
    pub s3_settings: Option<S3Settings>,
    /// Settings for the DMS transfer engine.
    pub dms_transfer_settings: Option<DmsTransferSettings>,
    /// Settings when the engine is MongoDB.
    pub mongo_db_settings: Option<MongoDbSettings>,
    /// Settings when the engine is Kinesis.
    pub kinesis_settings: Option<KinesisSettings>,
    /// Settings when the engine is Kafka.
    pub kafka_settings: Option<KafkaSettings>,
    /// Settings when the engine is Elasticsearch.
    pub elasticsearch_settings: Option<ElasticsearchSettings>,
    /// Settings when the engine is Neptune.
    pub neptune_settings: Option<NeptuneSettings>,
    /// Settings when the engine is Redshift.
    pub redshift_settings: Option<RedshiftSettings>,
}

impl ModifyEndpointInput {
    /// Creates a builder for `ModifyEndpointInput`.
    pub fn builder() -> modify_endpoint_input::Builder {
        modify_endpoint_input::Builder::default()
    }
}

/// Builder for [`ModifyEndpointInput`](crate::input::ModifyEndpointInput).
pub mod modify_endpoint_input {
    /// Builder for [`ModifyEndpointInput`](crate::input::ModifyEndpointInput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        endpoint_arn: Option<String>,
        endpoint_identifier: Option<String>,
        endpoint_type: Option<crate::model::ReplicationEndpointTypeValue>,
        engine_name: Option<String>,
        username: Option<String>,
        password: Option<String>,
        server_name: Option<String>,
        port: Option<i32>,
        database_name: Option<String>,
        extra_connection_attributes: Option<String>,
        certificate_arn: Option<String>,
        ssl_mode: Option<crate::model::DmsSslModeValue>,
        service_access_role_arn: Option<String>,
        external_table_definition: Option<String>,
        dynamo_db_settings: Option<crate::model::DynamoDbSettings>,
        s3_settings: Option<crate::model::S3Settings>,
        dms_transfer_settings: Option<crate::model::DmsTransferSettings>,
        mongo_db_settings: Option<crate::model::MongoDbSettings>,
        kinesis_settings: Option<crate::model::KinesisSettings>,
        kafka_settings: Option<crate::model::KafkaSettings>,
        elasticsearch_settings: Option<crate::model::ElasticsearchSettings>,
        neptune_settings: Option<crate::model::NeptuneSettings>,
        redshift_settings: Option<crate::model::RedshiftSettings>,
    }

    impl Builder {
        pub fn endpoint_arn(mut self, input: impl Into<String>) -> Self {
            self.endpoint_arn = Some(input.into());
            self
        }
        pub fn set_endpoint_arn(mut self, input: Option<String>) -> Self {
            self.endpoint_arn = input;
            self
        }
        pub fn endpoint_identifier(mut self, input: impl Into<String>) -> Self {
            self.endpoint_identifier = Some(input.into());
            self
        }
        pub fn set_endpoint_identifier(mut self, input: Option<String>) -> Self {
            self.endpoint_identifier = input;
            self
        }
        pub fn endpoint_type(
            mut self,
            input: crate::model::ReplicationEndpointTypeValue,
        ) -> Self {
            self.endpoint_type = Some(input);
            self
        }
        pub fn set_endpoint_type(
            mut self,
            input: Option<crate::model::ReplicationEndpointTypeValue>,
        ) -> Self {
            self.endpoint_type = input;
            self
        }
        pub fn engine_name(mut self, input: impl Into<String>) -> Self {
            self.engine_name = Some(input.into());
            self
        }
        pub fn set_engine_name(mut self, input: Option<String>) -> Self {
            self.engine_name = input;
            self
        }
        pub fn username(mut self, input: impl Into<String>) -> Self {
            self.username = Some(input.into());
            self
        }
        pub fn set_username(mut self, input: Option<String>) -> Self {
            self.username = input;
            self
        }
        pub fn password(mut self, input: impl Into<String>) -> Self {
            self.password = Some(input.into());
            self
        }
        pub fn set_password(mut self, input: Option<String>) -> Self {
            self.password = input;
            self
        }
        pub fn server_name(mut self, input: impl Into<String>) -> Self {
            self.server_name = Some(input.into());
            self
        }
        pub fn set_server_name(mut self, input: Option<String>) -> Self {
            self.server_name = input;
            self
        }
        pub fn port(mut self, input: i32) -> Self {
            self.port = Some(input);
            self
        }
        pub fn set_port(mut self, input: Option<i32>) -> Self {
            self.port = input;
            self
        }
        pub fn database_name(mut self, input: impl Into<String>) -> Self {
            self.database_name = Some(input.into());
            self
        }
        pub fn set_database_name(mut self, input: Option<String>) -> Self {
            self.database_name = input;
            self
        }
        pub fn extra_connection_attributes(mut self, input: impl Into<String>) -> Self {
            self.extra_connection_attributes = Some(input.into());
            self
        }
        pub fn set_extra_connection_attributes(mut self, input: Option<String>) -> Self {
            self.extra_connection_attributes = input;
            self
        }
        pub fn certificate_arn(mut self, input: impl Into<String>) -> Self {
            self.certificate_arn = Some(input.into());
            self
        }
        pub fn set_certificate_arn(mut self, input: Option<String>) -> Self {
            self.certificate_arn = input;
            self
        }
        pub fn ssl_mode(mut self, input: crate::model::DmsSslModeValue) -> Self {
            self.ssl_mode = Some(input);
            self
        }
        pub fn set_ssl_mode(mut self, input: Option<crate::model::DmsSslModeValue>) -> Self {
            self.ssl_mode = input;
            self
        }
        pub fn service_access_role_arn(mut self, input: impl Into<String>) -> Self {
            self.service_access_role_arn = Some(input.into());
            self
        }
        pub fn set_service_access_role_arn(mut self, input: Option<String>) -> Self {
            self.service_access_role_arn = input;
            self
        }
        pub fn external_table_definition(mut self, input: impl Into<String>) -> Self {
            self.external_table_definition = Some(input.into());
            self
        }
        pub fn set_external_table_definition(mut self, input: Option<String>) -> Self {
            self.external_table_definition = input;
            self
        }
        pub fn dynamo_db_settings(mut self, input: crate::model::DynamoDbSettings) -> Self {
            self.dynamo_db_settings = Some(input);
            self
        }
        pub fn set_dynamo_db_settings(
            mut self,
            input: Option<crate::model::DynamoDbSettings>,
        ) -> Self {
            self.dynamo_db_settings = input;
            self
        }
        pub fn s3_settings(mut self, input: crate::model::S3Settings) -> Self {
            self.s3_settings = Some(input);
            self
        }
        pub fn set_s3_settings(mut self, input: Option<crate::model::S3Settings>) -> Self {
            self.s3_settings = input;
            self
        }
        pub fn dms_transfer_settings(
            mut self,
            input: crate::model::DmsTransferSettings,
        ) -> Self {
            self.dms_transfer_settings = Some(input);
            self
        }
        pub fn set_dms_transfer_settings(
            mut self,
            input: Option<crate::model::DmsTransferSettings>,
        ) -> Self {
            self.dms_transfer_settings = input;
            self
        }
        pub fn mongo_db_settings(mut self, input: crate::model::MongoDbSettings) -> Self {
            self.mongo_db_settings = Some(input);
            self
        }
        pub fn set_mongo_db_settings(
            mut self,
            input: Option<crate::model::MongoDbSettings>,
        ) -> Self {
            self.mongo_db_settings = input;
            self
        }
        pub fn kinesis_settings(mut self, input: crate::model::KinesisSettings) -> Self {
            self.kinesis_settings = Some(input);
            self
        }
        pub fn set_kinesis_settings(
            mut self,
            input: Option<crate::model::KinesisSettings>,
        ) -> Self {
            self.kinesis_settings = input;
            self
        }
        pub fn kafka_settings(mut self, input: crate::model::KafkaSettings) -> Self {
            self.kafka_settings = Some(input);
            self
        }
        pub fn set_kafka_settings(mut self, input: Option<crate::model::KafkaSettings>) -> Self {
            self.kafka_settings = input;
            self
        }
        pub fn elasticsearch_settings(
            mut self,
            input: crate::model::ElasticsearchSettings,
        ) -> Self {
            self.elasticsearch_settings = Some(input);
            self
        }
        pub fn set_elasticsearch_settings(
            mut self,
            input: Option<crate::model::ElasticsearchSettings>,
        ) -> Self {
            self.elasticsearch_settings = input;
            self
        }
        pub fn neptune_settings(mut self, input: crate::model::NeptuneSettings) -> Self {
            self.neptune_settings = Some(input);
            self
        }
        pub fn set_neptune_settings(
            mut self,
            input: Option<crate::model::NeptuneSettings>,
        ) -> Self {
            self.neptune_settings = input;
            self
        }
        pub fn redshift_settings(mut self, input: crate::model::RedshiftSettings) -> Self {
            self.redshift_settings = Some(input);
            self
        }
        pub fn set_redshift_settings(
            mut self,
            input: Option<crate::model::RedshiftSettings>,
        ) -> Self {
            self.redshift_settings = input;
            self
        }
        /// Builds the `ModifyEndpointInput`.
        pub fn build(self) -> crate::input::ModifyEndpointInput {
            crate::input::ModifyEndpointInput {
                endpoint_arn: self.endpoint_arn,
                endpoint_identifier: self.endpoint_identifier,
                endpoint_type: self.endpoint_type,
                engine_name: self.engine_name,
                username: self.username,
                password: self.password,
                server_name: self.server_name,
                port: self.port,
                database_name: self.database_name,
                extra_connection_attributes: self.extra_connection_attributes,
                certificate_arn: self.certificate_arn,
                ssl_mode: self.ssl_mode,
                service_access_role_arn: self.service_access_role_arn,
                external_table_definition: self.external_table_definition,
                dynamo_db_settings: self.dynamo_db_settings,
                s3_settings: self.s3_settings,
                dms_transfer_settings: self.dms_transfer_settings,
                mongo_db_settings: self.mongo_db_settings,
                kinesis_settings: self.kinesis_settings,
                kafka_settings: self.kafka_settings,
                elasticsearch_settings: self.elasticsearch_settings,
                neptune_settings: self.neptune_settings,
                redshift_settings: self.redshift_settings,
            }
        }
    }
}

/// Input for the `RefreshSchemas` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct RefreshSchemasInput {
    /// The ARN of the endpoint whose schemas should be refreshed.
    pub endpoint_arn: Option<String>,
    /// The ARN of the replication instance to run the refresh on.
    pub replication_instance_arn: Option<String>,
}

impl RefreshSchemasInput {
    /// Creates a builder for `RefreshSchemasInput`.
    pub fn builder() -> refresh_schemas_input::Builder {
        refresh_schemas_input::Builder::default()
    }
}

/// Builder for [`RefreshSchemasInput`](crate::input::RefreshSchemasInput).
pub mod refresh_schemas_input {
    use dms_types::error::BuildError;

    /// Builder for [`RefreshSchemasInput`](crate::input::RefreshSchemasInput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        endpoint_arn: Option<String>,
        replication_instance_arn: Option<String>,
    }

    impl Builder {
        pub fn endpoint_arn(mut self, input: impl Into<String>) -> Self {
            self.endpoint_arn = Some(input.into());
            self
        }
        pub fn set_endpoint_arn(mut self, input: Option<String>) -> Self {
            self.endpoint_arn = input;
            self
        }
        pub fn replication_instance_arn(mut self, input: impl Into<String>) -> Self {
            self.replication_instance_arn = Some(input.into());
            self
        }
        pub fn set_replication_instance_arn(mut self, input: Option<String>) -> Self {
            self.replication_instance_arn = input;
            self
        }
        /// Builds the input; requires both ARNs.
        pub fn build(self) -> Result<crate::input::RefreshSchemasInput, BuildError> {
            if self.endpoint_arn.is_none() {
                return Err(BuildError::missing_field(
                    "endpoint_arn",
                    "it identifies the endpoint to refresh",
                ));
            }
            if self.replication_instance_arn.is_none() {
                return Err(BuildError::missing_field(
                    "replication_instance_arn",
                    "it identifies the instance that runs the refresh",
                ));
            }
            Ok(crate::input::RefreshSchemasInput {
                endpoint_arn: self.endpoint_arn,
                replication_instance_arn: self.replication_instance_arn,
            })
        }
    }
}

/// Input for the `RemoveTagsFromResource` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct RemoveTagsFromResourceInput {
    /// The ARN of the resource to remove tags from.
    pub resource_arn: Option<String>,
    /// The keys of the tags to remove.
    pub tag_keys: Option<Vec<String>>,
}

impl RemoveTagsFromResourceInput {
    /// Creates a builder for `RemoveTagsFromResourceInput`.
    pub fn builder() -> remove_tags_from_resource_input::Builder {
        remove_tags_from_resource_input::Builder::default()
    }
}

/// Builder for [`RemoveTagsFromResourceInput`](crate::input::RemoveTagsFromResourceInput).
pub mod remove_tags_from_resource_input {
    use dms_types::error::BuildError;

    /// Builder for [`RemoveTagsFromResourceInput`](crate::input::RemoveTagsFromResourceInput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        resource_arn: Option<String>,
        tag_keys: Option<Vec<String>>,
    }

    impl Builder {
        pub fn resource_arn(mut self, input: impl Into<String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: Option<String>) -> Self {
            self.resource_arn = input;
            self
        }
        /// Appends a key to `tag_keys`.
        pub fn tag_keys(mut self, input: impl Into<String>) -> Self {
            let mut keys = self.tag_keys.unwrap_or_default();
            keys.push(input.into());
            self.tag_keys = Some(keys);
            self
        }
        pub fn set_tag_keys(mut self, input: Option<Vec<String>>) -> Self {
            self.tag_keys = input;
            self
        }
        /// Builds the input; requires `resource_arn`.
        pub fn build(self) -> Result<crate::input::RemoveTagsFromResourceInput, BuildError> {
            if self.resource_arn.is_none() {
                return Err(BuildError::missing_field(
                    "resource_arn",
                    "it identifies the resource to remove tags from",
                ));
            }
            Ok(crate::input::RemoveTagsFromResourceInput {
                resource_arn: self.resource_arn,
                tag_keys: self.tag_keys,
            })
        }
    }
}

/// Input for the `StartReplicationTask` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct StartReplicationTaskInput {
    /// The ARN of the task to start.
    pub replication_task_arn: Option<String>,
    /// How the task should begin processing.
    pub start_replication_task_type: Option<StartReplicationTaskTypeValue>,
    /// When CDC should begin.
    pub cdc_start_time: Option<DateTime>,
    /// A native start position for CDC.
    pub cdc_start_position: Option<String>,
    /// A position at which CDC should stop.
    pub cdc_stop_position: Option<String>,
}

impl StartReplicationTaskInput {
    /// Creates a builder for `StartReplicationTaskInput`.
    pub fn builder() -> start_replication_task_input::Builder {
        start_replication_task_input::Builder::default()
    }
}

/// Builder for [`StartReplicationTaskInput`](crate::input::StartReplicationTaskInput).
pub mod start_replication_task_input {
    use dms_types::error::BuildError;
    use dms_types::DateTime;

    /// Builder for [`StartReplicationTaskInput`](crate::input::StartReplicationTaskInput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        replication_task_arn: Option<String>,
        start_replication_task_type: Option<crate::model::StartReplicationTaskTypeValue>,
        cdc_start_time: Option<DateTime>,
        cdc_start_position: Option<String>,
        cdc_stop_position: Option<String>,
    }

    impl Builder {
        pub fn replication_task_arn(mut self, input: impl Into<String>) -> Self {
            self.replication_task_arn = Some(input.into());
            self
        }
        pub fn set_replication_task_arn(mut self, input: Option<String>) -> Self {
            self.replication_task_arn = input;
            self
        }
        pub fn start_replication_task_type(
            mut self,
            input: crate::model::StartReplicationTaskTypeValue,
        ) -> Self {
            self.start_replication_task_type = Some(input);
            self
        }
        pub fn set_start_replication_task_type(
            mut self,
            input: Option<crate::model::StartReplicationTaskTypeValue>,
        ) -> Self {
            self.start_replication_task_type = input;
            self
        }
        pub fn cdc_start_time(mut self, input: DateTime) -> Self {
            self.cdc_start_time = Some(input);
            self
        }
        pub fn set_cdc_start_time(mut self, input: Option<DateTime>) -> Self {
            self.cdc_start_time = input;
            self
        }
        pub fn cdc_start_position(mut self, input: impl Into<String>) -> Self {
            self.cdc_start_position = Some(input.into());
            self
        }
        pub fn set_cdc_start_position(mut self, input: Option<String>) -> Self {
            self.cdc_start_position = input;
            self
        }
        pub fn cdc_stop_position(mut self, input: impl Into<String>) -> Self {
            self.cdc_stop_position = Some(input.into());
            self
        }
        pub fn set_cdc_stop_position(mut self, input: Option<String>) -> Self {
            self.cdc_stop_position = input;
            self
        }
        /// Builds the input; requires `replication_task_arn`.
        pub fn build(self) -> Result<crate::input::StartReplicationTaskInput, BuildError> {
            if self.replication_task_arn.is_none() {
                return Err(BuildError::missing_field(
                    "replication_task_arn",
                    "it identifies the task to start",
                ));
            }
            Ok(crate::input::StartReplicationTaskInput {
                replication_task_arn: self.replication_task_arn,
                start_replication_task_type: self.start_replication_task_type,
                cdc_start_time: self.cdc_start_time,
                cdc_start_position: self.cdc_start_position,
                cdc_stop_position: self.cdc_stop_position,
            })
        }
    }
}

/// Input for the `StopReplicationTask` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct StopReplicationTaskInput {
    /// The ARN of the task to stop.
    pub replication_task_arn: Option<String>,
}

impl StopReplicationTaskInput {
    /// Creates a builder for `StopReplicationTaskInput`.
    pub fn builder() -> stop_replication_task_input::Builder {
        stop_replication_task_input::Builder::default()
    }
}

/// Builder for [`StopReplicationTaskInput`](crate::input::StopReplicationTaskInput).
pub mod stop_replication_task_input {
    use dms_types::error::BuildError;

    /// Builder for [`StopReplicationTaskInput`](crate::input::StopReplicationTaskInput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        replication_task_arn: Option<String>,
    }

    impl Builder {
        pub fn replication_task_arn(mut self, input: impl Into<String>) -> Self {
            self.replication_task_arn = Some(input.into());
            self
        }
        pub fn set_replication_task_arn(mut self, input: Option<String>) -> Self {
            self.replication_task_arn = input;
            self
        }
        /// Builds the input; requires `replication_task_arn`.
        pub fn build(self) -> Result<crate::input::StopReplicationTaskInput, BuildError> {
            if self.replication_task_arn.is_none() {
                return Err(BuildError::missing_field(
                    "replication_task_arn",
                    "it identifies the task to stop",
                ));
            }
            Ok(crate::input::StopReplicationTaskInput {
                replication_task_arn: self.replication_task_arn,
            })
        }
    }
}

/// Input for the `TestConnection` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct TestConnectionInput {
    /// The ARN of the replication instance to test from.
    pub replication_instance_arn: Option<String>,
    /// The ARN of the endpoint to test against.
    pub endpoint_arn: Option<String>,
}

impl TestConnectionInput {
    /// Creates a builder for `TestConnectionInput`.
    pub fn builder() -> test_connection_input::Builder {
        test_connection_input::Builder::default()
    }
}

/// Builder for [`TestConnectionInput`](crate::input::TestConnectionInput).
pub mod test_connection_input {
    use dms_types::error::BuildError;

    /// Builder for [`TestConnectionInput`](crate::input::TestConnectionInput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        replication_instance_arn: Option<String>,
        endpoint_arn: Option<String>,
    }

    impl Builder {
        pub fn replication_instance_arn(mut self, input: impl Into<String>) -> Self {
            self.replication_instance_arn = Some(input.into());
            self
        }
        pub fn set_replication_instance_arn(mut self, input: Option<String>) -> Self {
            self.replication_instance_arn = input;
            self
        }
        pub fn endpoint_arn(mut self, input: impl Into<String>) -> Self {
            self.endpoint_arn = Some(input.into());
            self
        }
        pub fn set_endpoint_arn(mut self, input: Option<String>) -> Self {
            self.endpoint_arn = input;
            self
        }
        /// Builds the input; requires both ARNs.
        pub fn build(self) -> Result<crate::input::TestConnectionInput, BuildError> {
            if self.replication_instance_arn.is_none() {
                return Err(BuildError::missing_field(
                    "replication_instance_arn",
                    "it identifies the instance to test from",
                ));
            }
            if self.endpoint_arn.is_none() {
                return Err(BuildError::missing_field(
                    "endpoint_arn",
                    "it identifies the endpoint to test against",
                ));
            }
            Ok(crate::input::TestConnectionInput {
                replication_instance_arn: self.replication_instance_arn,
                endpoint_arn: self.endpoint_arn,
            })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::Tag;

    #[test]
    fn tags_accumulate_across_calls() {
        let tag = |key: &str| Tag::builder().key(key).build();
        let input = CreateReplicationTaskInput::builder()
            .tags(tag("a"))
            .tags(tag("b"))
            .tags(tag("c"))
            .build();
        let keys: Vec<_> = input
            .tags
            .as_deref()
            .unwrap()
            .iter()
            .map(|tag| tag.key.as_deref().unwrap())
            .collect();
        assert_eq!(vec!["a", "b", "c"], keys);
    }

    #[test]
    fn resource_reference_builds_require_the_arn() {
        let err = DeleteReplicationTaskInput::builder().build().unwrap_err();
        assert_eq!(Some("replication_task_arn"), err.field());

        assert!(StopReplicationTaskInput::builder()
            .replication_task_arn("arn:aws:dms:us-east-1:123456789012:task:ABC")
            .build()
            .is_ok());

        let err = TestConnectionInput::builder()
            .replication_instance_arn("arn:aws:dms:us-east-1:123456789012:rep:DEF")
            .build()
            .unwrap_err();
        assert_eq!(Some("endpoint_arn"), err.field());
    }

    #[test]
    fn create_inputs_build_partially_specified() {
        // Creation requests stay buildable with any subset of members; the
        // service owns the real validation.
        let input = CreateReplicationTaskInput::builder()
            .replication_task_identifier("task-1")
            .build();
        assert_eq!(Some("task-1"), input.replication_task_identifier.as_deref());
        assert!(input.source_endpoint_arn.is_none());
    }
}
