/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! One descriptor per API operation.
//!
//! Each descriptor carries the operation's `X-Amz-Target` value and the
//! entry points that turn an input into a JSON request body and a response
//! body back into an output. Assembling and sending the HTTP request
//! (signing, retries, endpoints) belongs to the surrounding runtime, not to
//! this crate; requests additionally carry
//! `Content-Type: application/x-amz-json-1.1`.

use dms_json::deserialize::DeserializeError;
use dms_json::serialize::JsonObjectWriter;
use dms_types::date_time::DateTimeFormatError;

macro_rules! operation {
    ($(#[$docs:meta])* $name:ident, $target:literal, $input:ty, $output:ty, $ser:path, $deser:path) => {
        $(#[$docs])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl $name {
            /// The `X-Amz-Target` header value for this operation.
            pub const TARGET: &'static str = $target;

            /// Serializes `input` into this operation's JSON request body.
            ///
            /// Fails only when a timestamp member cannot be rendered.
            pub fn request_body(input: &$input) -> Result<String, DateTimeFormatError> {
                let mut out = String::new();
                let mut object = JsonObjectWriter::new(&mut out);
                $ser(&mut object, input)?;
                object.finish();
                Ok(out)
            }

            /// Parses a successful response body into this operation's output.
            pub fn parse_response(body: &[u8]) -> Result<$output, DeserializeError> {
                $deser(body)
            }

            /// Parses an error response body into the service-wide error type.
            pub fn parse_error(body: &[u8]) -> Result<crate::error::Error, DeserializeError> {
                crate::json_deser::deser_error(body)
            }
        }
    };
}

operation!(
    /// Adds tags to a resource.
    AddTagsToResource,
    "AmazonDMSv20160101.AddTagsToResource",
    crate::input::AddTagsToResourceInput,
    crate::output::AddTagsToResourceOutput,
    crate::json_ser::serialize_structure_add_tags_to_resource_input,
    crate::json_deser::deser_operation_add_tags_to_resource
);

operation!(
    /// Creates a source or target endpoint.
    CreateEndpoint,
    "AmazonDMSv20160101.CreateEndpoint",
    crate::input::CreateEndpointInput,
    crate::output::CreateEndpointOutput,
    crate::json_ser::serialize_structure_create_endpoint_input,
    crate::json_deser::deser_operation_create_endpoint
);

operation!(
    /// Creates a replication task.
    CreateReplicationTask,
    "AmazonDMSv20160101.CreateReplicationTask",
    crate::input::CreateReplicationTaskInput,
    crate::output::CreateReplicationTaskOutput,
    crate::json_ser::serialize_structure_create_replication_task_input,
    crate::json_deser::deser_operation_create_replication_task
);

operation!(
    /// Deletes an endpoint. Its tasks must be deleted first.
    DeleteEndpoint,
    "AmazonDMSv20160101.DeleteEndpoint",
    crate::input::DeleteEndpointInput,
    crate::output::DeleteEndpointOutput,
    crate::json_ser::serialize_structure_delete_endpoint_input,
    crate::json_deser::deser_operation_delete_endpoint
);

operation!(
    /// Deletes a replication task.
    DeleteReplicationTask,
    "AmazonDMSv20160101.DeleteReplicationTask",
    crate::input::DeleteReplicationTaskInput,
    crate::output::DeleteReplicationTaskOutput,
    crate::json_ser::serialize_structure_delete_replication_task_input,
    crate::json_deser::deser_operation_delete_replication_task
);

operation!(
    /// Describes the account's quotas in the current region.
    DescribeAccountAttributes,
    "AmazonDMSv20160101.DescribeAccountAttributes",
    crate::input::DescribeAccountAttributesInput,
    crate::output::DescribeAccountAttributesOutput,
    crate::json_ser::serialize_structure_describe_account_attributes_input,
    crate::json_deser::deser_operation_describe_account_attributes
);

operation!(
    /// Describes connections between replication instances and endpoints.
    DescribeConnections,
    "AmazonDMSv20160101.DescribeConnections",
    crate::input::DescribeConnectionsInput,
    crate::output::DescribeConnectionsOutput,
    crate::json_ser::serialize_structure_describe_connections_input,
    crate::json_deser::deser_operation_describe_connections
);

operation!(
    /// Describes endpoints.
    DescribeEndpoints,
    "AmazonDMSv20160101.DescribeEndpoints",
    crate::input::DescribeEndpointsInput,
    crate::output::DescribeEndpointsOutput,
    crate::json_ser::serialize_structure_describe_endpoints_input,
    crate::json_deser::deser_operation_describe_endpoints
);

operation!(
    /// Describes events for resources in a time window.
    DescribeEvents,
    "AmazonDMSv20160101.DescribeEvents",
    crate::input::DescribeEventsInput,
    crate::output::DescribeEventsOutput,
    crate::json_ser::serialize_structure_describe_events_input,
    crate::json_deser::deser_operation_describe_events
);

operation!(
    /// Describes the status of a schema refresh.
    DescribeRefreshSchemasStatus,
    "AmazonDMSv20160101.DescribeRefreshSchemasStatus",
    crate::input::DescribeRefreshSchemasStatusInput,
    crate::output::DescribeRefreshSchemasStatusOutput,
    crate::json_ser::serialize_structure_describe_refresh_schemas_status_input,
    crate::json_deser::deser_operation_describe_refresh_schemas_status
);

operation!(
    /// Describes replication subnet groups.
    DescribeReplicationSubnetGroups,
    "AmazonDMSv20160101.DescribeReplicationSubnetGroups",
    crate::input::DescribeReplicationSubnetGroupsInput,
    crate::output::DescribeReplicationSubnetGroupsOutput,
    crate::json_ser::serialize_structure_describe_replication_subnet_groups_input,
    crate::json_deser::deser_operation_describe_replication_subnet_groups
);

operation!(
    /// Describes replication tasks.
    DescribeReplicationTasks,
    "AmazonDMSv20160101.DescribeReplicationTasks",
    crate::input::DescribeReplicationTasksInput,
    crate::output::DescribeReplicationTasksOutput,
    crate::json_ser::serialize_structure_describe_replication_tasks_input,
    crate::json_deser::deser_operation_describe_replication_tasks
);

operation!(
    /// Lists the tags on a resource.
    ListTagsForResource,
    "AmazonDMSv20160101.ListTagsForResource",
    crate::input::ListTagsForResourceInput,
    crate::output::ListTagsForResourceOutput,
    crate::json_ser::serialize_structure_list_tags_for_resource_input,
    crate::json_deser::deser_operation_list_tags_for_resource
);

operation!(
    /// Modifies an endpoint.
    ModifyEndpoint,
    "AmazonDMSv20160101.ModifyEndpoint",
    crate::input::ModifyEndpointInput,
    crate::output::ModifyEndpointOutput,
    crate::json_ser::serialize_structure_modify_endpoint_input,
    crate::json_deser::deser_operation_modify_endpoint
);

operation!(
    /// Repopulates the schemas for an endpoint.
    RefreshSchemas,
    "AmazonDMSv20160101.RefreshSchemas",
    crate::input::RefreshSchemasInput,
    crate::output::RefreshSchemasOutput,
    crate::json_ser::serialize_structure_refresh_schemas_input,
    crate::json_deser::deser_operation_refresh_schemas
);

operation!(
    /// Removes tags from a resource.
    RemoveTagsFromResource,
    "AmazonDMSv20160101.RemoveTagsFromResource",
    crate::input::RemoveTagsFromResourceInput,
    crate::output::RemoveTagsFromResourceOutput,
    crate::json_ser::serialize_structure_remove_tags_from_resource_input,
    crate::json_deser::deser_operation_remove_tags_from_resource
);

operation!(
    /// Starts a replication task.
    StartReplicationTask,
    "AmazonDMSv20160101.StartReplicationTask",
    crate::input::StartReplicationTaskInput,
    crate::output::StartReplicationTaskOutput,
    crate::json_ser::serialize_structure_start_replication_task_input,
    crate::json_deser::deser_operation_start_replication_task
);

operation!(
    /// Stops a replication task.
    StopReplicationTask,
    "AmazonDMSv20160101.StopReplicationTask",
    crate::input::StopReplicationTaskInput,
    crate::output::StopReplicationTaskOutput,
    crate::json_ser::serialize_structure_stop_replication_task_input,
    crate::json_deser::deser_operation_stop_replication_task
);

operation!(
    /// Tests the connection between a replication instance and an endpoint.
    TestConnection,
    "AmazonDMSv20160101.TestConnection",
    crate::input::TestConnectionInput,
    crate::output::TestConnectionOutput,
    crate::json_ser::serialize_structure_test_connection_input,
    crate::json_deser::deser_operation_test_connection
);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_input_serializes_as_empty_object() {
        let body = DescribeAccountAttributes::request_body(
            &crate::input::DescribeAccountAttributesInput::builder().build(),
        )
        .unwrap();
        assert_eq!("{}", body);
    }

    #[test]
    fn targets_name_the_service_version() {
        assert_eq!(
            "AmazonDMSv20160101.CreateReplicationTask",
            CreateReplicationTask::TARGET
        );
        assert_eq!(
            "AmazonDMSv20160101.DescribeEndpoints",
            DescribeEndpoints::TARGET
        );
    }
}
