/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Response shapes, one per operation. The describe responses carry an
//! opaque `marker` that feeds the pagination loop in [`crate::paginator`].

use crate::model::{
    AccountQuota, Connection, Endpoint, Event, RefreshSchemasStatus, ReplicationSubnetGroup,
    ReplicationTask, Tag,
};

/// Output of the `AddTagsToResource` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct AddTagsToResourceOutput {}

impl AddTagsToResourceOutput {
    /// Creates a builder for `AddTagsToResourceOutput`.
    pub fn builder() -> add_tags_to_resource_output::Builder {
        add_tags_to_resource_output::Builder::default()
    }
}

/// Builder for [`AddTagsToResourceOutput`](crate::output::AddTagsToResourceOutput).
pub mod add_tags_to_resource_output {
    /// Builder for [`AddTagsToResourceOutput`](crate::output::AddTagsToResourceOutput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {}

    impl Builder {
        /// Builds the `AddTagsToResourceOutput`.
        pub fn build(self) -> crate::output::AddTagsToResourceOutput {
            crate::output::AddTagsToResourceOutput {}
        }
    }
}

/// Output of the `CreateEndpoint` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateEndpointOutput {
    /// The endpoint that was created.
    pub endpoint: Option<Endpoint>,
}

impl CreateEndpointOutput {
    /// Creates a builder for `CreateEndpointOutput`.
    pub fn builder() -> create_endpoint_output::Builder {
        create_endpoint_output::Builder::default()
    }
}

/// Builder for [`CreateEndpointOutput`](crate::output::CreateEndpointOutput).
pub mod create_endpoint_output {
    /// Builder for [`CreateEndpointOutput`](crate::output::CreateEndpointOutput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        endpoint: Option<crate::model::Endpoint>,
    }

    impl Builder {
        pub fn endpoint(mut self, input: crate::model::Endpoint) -> Self {
            self.endpoint = Some(input);
            self
        }
        pub fn set_endpoint(mut self, input: Option<crate::model::Endpoint>) -> Self {
            self.endpoint = input;
            self
        }
        /// Builds the `CreateEndpointOutput`.
        pub fn build(self) -> crate::output::CreateEndpointOutput {
            crate::output::CreateEndpointOutput {
                endpoint: self.endpoint,
            }
        }
    }
}

/// Output of the `CreateReplicationTask` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateReplicationTaskOutput {
    /// The task that was created.
    pub replication_task: Option<ReplicationTask>,
}

impl CreateReplicationTaskOutput {
    /// Creates a builder for `CreateReplicationTaskOutput`.
    pub fn builder() -> create_replication_task_output::Builder {
        create_replication_task_output::Builder::default()
    }
}

/// Builder for [`CreateReplicationTaskOutput`](crate::output::CreateReplicationTaskOutput).
pub mod create_replication_task_output {
    /// Builder for [`CreateReplicationTaskOutput`](crate::output::CreateReplicationTaskOutput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        replication_task: Option<crate::model::ReplicationTask>,
    }

    impl Builder {
        pub fn replication_task(mut self, input: crate::model::ReplicationTask) -> Self {
            self.replication_task = Some(input);
            self
        }
        pub fn set_replication_task(
            mut self,
            input: Option<crate::model::ReplicationTask>,
        ) -> Self {
            self.replication_task = input;
            self
        }
        /// Builds the `CreateReplicationTaskOutput`.
        pub fn build(self) -> crate::output::CreateReplicationTaskOutput {
            crate::output::CreateReplicationTaskOutput {
                replication_task: self.replication_task,
            }
        }
    }
}

/// Output of the `DeleteEndpoint` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteEndpointOutput {
    /// The endpoint that was deleted.
    pub endpoint: Option<Endpoint>,
}

impl DeleteEndpointOutput {
    /// Creates a builder for `DeleteEndpointOutput`.
    pub fn builder() -> delete_endpoint_output::Builder {
        delete_endpoint_output::Builder::default()
    }
}

/// Builder for [`DeleteEndpointOutput`](crate::output::DeleteEndpointOutput).
pub mod delete_endpoint_output {
    /// Builder for [`DeleteEndpointOutput`](crate::output::DeleteEndpointOutput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        endpoint: Option<crate::model::Endpoint>,
    }

    impl Builder {
        pub fn endpoint(mut self, input: crate::model::Endpoint) -> Self {
            self.endpoint = Some(input);
            self
        }
        pub fn set_endpoint(mut self, input: Option<crate::model::Endpoint>) -> Self {
            self.endpoint = input;
            self
        }
        /// Builds the `DeleteEndpointOutput`.
        pub fn build(self) -> crate::output::DeleteEndpointOutput {
            crate::output::DeleteEndpointOutput {
                endpoint: self.endpoint,
            }
        }
    }
}

/// Output of the `DeleteReplicationTask` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteReplicationTaskOutput {
    /// The task that was deleted.
    pub replication_task: Option<ReplicationTask>,
}

impl DeleteReplicationTaskOutput {
    /// Creates a builder for `DeleteReplicationTaskOutput`.
    pub fn builder() -> delete_replication_task_output::Builder {
        delete_replication_task_output::Builder::default()
    }
}

/// Builder for [`DeleteReplicationTaskOutput`](crate::output::DeleteReplicationTaskOutput).
pub mod delete_replication_task_output {
    /// Builder for [`DeleteReplicationTaskOutput`](crate::output::DeleteReplicationTaskOutput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        replication_task: Option<crate::model::ReplicationTask>,
    }

    impl Builder {
        pub fn replication_task(mut self, input: crate::model::ReplicationTask) -> Self {
            self.replication_task = Some(input);
            self
        }
        pub fn set_replication_task(
            mut self,
            input: Option<crate::model::ReplicationTask>,
        ) -> Self {
            self.replication_task = input;
            self
        }
        /// Builds the `DeleteReplicationTaskOutput`.
        pub fn build(self) -> crate::output::DeleteReplicationTaskOutput {
            crate::output::DeleteReplicationTaskOutput {
                replication_task: self.replication_task,
            }
        }
    }
}

/// Output of the `DescribeAccountAttributes` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct DescribeAccountAttributesOutput {
    /// The account quotas for this region.
    pub account_quotas: Option<Vec<AccountQuota>>,
    /// A unique identifier for the account, used in S3 bucket names.
    pub unique_account_identifier: Option<String>,
}

impl DescribeAccountAttributesOutput {
    /// Creates a builder for `DescribeAccountAttributesOutput`.
    pub fn builder() -> describe_account_attributes_output::Builder {
        describe_account_attributes_output::Builder::default()
    }
}

/// Builder for [`DescribeAccountAttributesOutput`](crate::output::DescribeAccountAttributesOutput).
pub mod describe_account_attributes_output {
    /// Builder for [`DescribeAccountAttributesOutput`](crate::output::DescribeAccountAttributesOutput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        account_quotas: Option<Vec<crate::model::AccountQuota>>,
        unique_account_identifier: Option<String>,
    }

    impl Builder {
        /// Appends a quota to `account_quotas`.
        pub fn account_quotas(mut self, input: crate::model::AccountQuota) -> Self {
            let mut quotas = self.account_quotas.unwrap_or_default();
            quotas.push(input);
            self.account_quotas = Some(quotas);
            self
        }
        pub fn set_account_quotas(
            mut self,
            input: Option<Vec<crate::model::AccountQuota>>,
        ) -> Self {
            self.account_quotas = input;
            self
        }
        pub fn unique_account_identifier(mut self, input: impl Into<String>) -> Self {
            self.unique_account_identifier = Some(input.into());
            self
        }
        pub fn set_unique_account_identifier(mut self, input: Option<String>) -> Self {
            self.unique_account_identifier = input;
            self
        }
        /// Builds the `DescribeAccountAttributesOutput`.
        pub fn build(self) -> crate::output::DescribeAccountAttributesOutput {
            crate::output::DescribeAccountAttributesOutput {
                account_quotas: self.account_quotas,
                unique_account_identifier: self.unique_account_identifier,
            }
        }
    }
}

/// Output of the `DescribeConnections` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct DescribeConnectionsOutput {
    /// The marker to pass back for the next page, when more pages exist.
    pub marker: Option<String>,
    /// One page of connections.
    pub connections: Option<Vec<Connection>>,
}

impl DescribeConnectionsOutput {
    /// Creates a builder for `DescribeConnectionsOutput`.
    pub fn builder() -> describe_connections_output::Builder {
        describe_connections_output::Builder::default()
    }
}

/// Builder for [`DescribeConnectionsOutput`](crate::output::DescribeConnectionsOutput).
pub mod describe_connections_output {
    /// Builder for [`DescribeConnectionsOutput`](crate::output::DescribeConnectionsOutput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        marker: Option<String>,
        connections: Option<Vec<crate::model::Connection>>,
    }

    impl Builder {
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }
        /// Appends a connection to `connections`.
        pub fn connections(mut self, input: crate::model::Connection) -> Self {
            let mut connections = self.connections.unwrap_or_default();
            connections.push(input);
            self.connections = Some(connections);
            self
        }
        pub fn set_connections(
            mut self,
            input: Option<Vec<crate::model::Connection>>,
        ) -> Self {
            self.connections = input;
            self
        }
        /// Builds the `DescribeConnectionsOutput`.
        pub fn build(self) -> crate::output::DescribeConnectionsOutput {
            crate::output::DescribeConnectionsOutput {
                marker: self.marker,
                connections: self.connections,
            }
        }
    }
}

/// Output of the `DescribeEndpoints` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct DescribeEndpointsOutput {
    /// The marker to pass back for the next page, when more pages exist.
    pub marker: Option<String>,
    /// One page of endpoints.
    pub endpoints: Option<Vec<Endpoint>>,
}

impl DescribeEndpointsOutput {
    /// Creates a builder for `DescribeEndpointsOutput`.
    pub fn builder() -> describe_endpoints_output::Builder {
        describe_endpoints_output::Builder::default()
    }
}

/// Builder for [`DescribeEndpointsOutput`](crate::output::DescribeEndpointsOutput).
pub mod describe_endpoints_output {
    /// Builder for [`DescribeEndpointsOutput`](crate::output::DescribeEndpointsOutput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        marker: Option<String>,
        endpoints: Option<Vec<crate::model::Endpoint>>,
    }

    impl Builder {
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }
        /// Appends an endpoint to `endpoints`.
        pub fn endpoints(mut self, input: crate::model::Endpoint) -> Self {
            let mut endpoints = self.endpoints.unwrap_or_default();
            endpoints.push(input);
            self.endpoints = Some(endpoints);
            self
        }
        pub fn set_endpoints(mut self, input: Option<Vec<crate::model::Endpoint>>) -> Self {
            self.endpoints = input;
            self
        }
        /// Builds the `DescribeEndpointsOutput`.
        pub fn build(self) -> crate::output::DescribeEndpointsOutput {
            crate::output::DescribeEndpointsOutput {
                marker: self.marker,
                endpoints: self.endpoints,
            }
        }
    }
}

/// Output of the `DescribeEvents` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct DescribeEventsOutput {
    /// The marker to pass back for the next page, when more pages exist.
    pub marker: Option<String>,
    /// One page of events.
    pub events: Option<Vec<Event>>,
}

impl DescribeEventsOutput {
    /// Creates a builder for `DescribeEventsOutput`.
    pub fn builder() -> describe_events_output::Builder {
        describe_events_output::Builder::default()
    }
}

/// Builder for [`DescribeEventsOutput`](crate::output::DescribeEventsOutput).
pub mod describe_events_output {
    /// Builder for [`DescribeEventsOutput`](crate::output::DescribeEventsOutput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        marker: Option<String>,
        events: Option<Vec<crate::model::Event>>,
    }

    impl Builder {
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }
        /// Appends an event to `events`.
        pub fn events(mut self, input: crate::model::Event) -> Self {
            let mut events = self.events.unwrap_or_default();
            events.push(input);
            self.events = Some(events);
            self
        }
        pub fn set_events(mut self, input: Option<Vec<crate::model::Event>>) -> Self {
            self.events = input;
            self
        }
        /// Builds the `DescribeEventsOutput`.
        pub fn build(self) -> crate::output::DescribeEventsOutput {
            crate::output::DescribeEventsOutput {
                marker: self.marker,
                events: self.events,
            }
        }
    }
}

/// Output of the `DescribeRefreshSchemasStatus` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct DescribeRefreshSchemasStatusOutput {
    /// The status of the schema refresh.
    pub refresh_schemas_status: Option<RefreshSchemasStatus>,
}

impl DescribeRefreshSchemasStatusOutput {
    /// Creates a builder for `DescribeRefreshSchemasStatusOutput`.
    pub fn builder() -> describe_refresh_schemas_status_output::Builder {
        describe_refresh_schemas_status_output::Builder::default()
    }
}

/// Builder for [`DescribeRefreshSchemasStatusOutput`](crate::output::DescribeRefreshSchemasStatusOutput).
pub mod describe_refresh_schemas_status_output {
    /// Builder for [`DescribeRefreshSchemasStatusOutput`](crate::output::DescribeRefreshSchemasStatusOutput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        refresh_schemas_status: Option<crate::model::RefreshSchemasStatus>,
    }

    impl Builder {
        pub fn refresh_schemas_status(
            mut self,
            input: crate::model::RefreshSchemasStatus,
        ) -> Self {
            self.refresh_schemas_status = Some(input);
            self
        }
        pub fn set_refresh_schemas_status(
            mut self,
            input: Option<crate::model::RefreshSchemasStatus>,
        ) -> Self {
            self.refresh_schemas_status = input;
            self
        }
        /// Builds the `DescribeRefreshSchemasStatusOutput`.
        pub fn build(self) -> crate::output::DescribeRefreshSchemasStatusOutput {
            crate::output::DescribeRefreshSchemasStatusOutput {
                refresh_schemas_status: self.refresh_schemas_status,
            }
        }
    }
}

/// Output of the `DescribeReplicationSubnetGroups` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct DescribeReplicationSubnetGroupsOutput {
    /// The marker to pass back for the next page, when more pages exist.
    pub marker: Option<String>,
    /// One page of subnet groups.
    pub replication_subnet_groups: Option<Vec<ReplicationSubnetGroup>>,
}

impl DescribeReplicationSubnetGroupsOutput {
    /// Creates a builder for `DescribeReplicationSubnetGroupsOutput`.
    pub fn builder() -> describe_replication_subnet_groups_output::Builder {
        describe_replication_subnet_groups_output::Builder::default()
    }
}

/// Builder for [`DescribeReplicationSubnetGroupsOutput`](crate::output::DescribeReplicationSubnetGroupsOutput).
pub mod describe_replication_subnet_groups_output {
    /// Builder for [`DescribeReplicationSubnetGroupsOutput`](crate::output::DescribeReplicationSubnetGroupsOutput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        marker: Option<String>,
        replication_subnet_groups: Option<Vec<crate::model::ReplicationSubnetGroup>>,
    }

    impl Builder {
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }
        /// Appends a subnet group to `replication_subnet_groups`.
        pub fn replication_subnet_groups(
            mut self,
            input: crate::model::ReplicationSubnetGroup,
        ) -> Self {
            let mut groups = self.replication_subnet_groups.unwrap_or_default();
            groups.push(input);
            self.replication_subnet_groups = Some(groups);
            self
        }
        pub fn set_replication_subnet_groups(
            mut self,
            input: Option<Vec<crate::model::ReplicationSubnetGroup>>,
        ) -> Self {
            self.replication_subnet_groups = input;
            self
        }
        /// Builds the `DescribeReplicationSubnetGroupsOutput`.
        pub fn build(self) -> crate::output::DescribeReplicationSubnetGroupsOutput {
            crate::output::DescribeReplicationSubnetGroupsOutput {
                marker: self.marker,
                replication_subnet_groups: self.replication_subnet_groups,
            }
        }
    }
}

/// Output of the `DescribeReplicationTasks` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct DescribeReplicationTasksOutput {
    /// The marker to pass back for the next page, when more pages exist.
    pub marker: Option<String>,
    /// One page of tasks.
    pub replication_tasks: Option<Vec<ReplicationTask>>,
}

impl DescribeReplicationTasksOutput {
    /// Creates a builder for `DescribeReplicationTasksOutput`.
    pub fn builder() -> describe_replication_tasks_output::Builder {
        describe_replication_tasks_output::Builder::default()
    }
}

/// Builder for [`DescribeReplicationTasksOutput`](crate::output::DescribeReplicationTasksOutput).
pub mod describe_replication_tasks_output {
    /// Builder for [`DescribeReplicationTasksOutput`](crate::output::DescribeReplicationTasksOutput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        marker: Option<String>,
        replication_tasks: Option<Vec<crate::model::ReplicationTask>>,
    }

    impl Builder {
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }
        /// Appends a task to `replication_tasks`.
        pub fn replication_tasks(mut self, input: crate::model::ReplicationTask) -> Self {
            let mut tasks = self.replication_tasks.unwrap_or_default();
            tasks.push(input);
            self.replication_tasks = Some(tasks);
            self
        }
        pub fn set_replication_tasks(
            mut self,
            input: Option<Vec<crate::model::ReplicationTask>>,
        ) -> Self {
            self.replication_tasks = input;
            self
        }
        /// Builds the `DescribeReplicationTasksOutput`.
        pub fn build(self) -> crate::output::DescribeReplicationTasksOutput {
            crate::output::DescribeReplicationTasksOutput {
                marker: self.marker,
                replication_tasks: self.replication_tasks,
            }
        }
    }
}

/// Output of the `ListTagsForResource` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct ListTagsForResourceOutput {
    /// The tags on the resource.
    pub tag_list: Option<Vec<Tag>>,
}

impl ListTagsForResourceOutput {
    /// Creates a builder for `ListTagsForResourceOutput`.
    pub fn builder() -> list_tags_for_resource_output::Builder {
        list_tags_for_resource_output::Builder::default()
    }
}

/// Builder for [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput).
pub mod list_tags_for_resource_output {
    /// Builder for [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        tag_list: Option<Vec<crate::model::Tag>>,
    }

    impl Builder {
        /// Appends a tag to `tag_list`.
        pub fn tag_list(mut self, input: crate::model::Tag) -> Self {
            let mut tags = self.tag_list.unwrap_or_default();
            tags.push(input);
            self.tag_list = Some(tags);
            self
        }
        pub fn set_tag_list(mut self, input: Option<Vec<crate::model::Tag>>) -> Self {
            self.tag_list = input;
            self
        }
        /// Builds the `ListTagsForResourceOutput`.
        pub fn build(self) -> crate::output::ListTagsForResourceOutput {
            crate::output::ListTagsForResourceOutput {
                tag_list: self.tag_list,
            }
        }
    }
}

/// Output of the `ModifyEndpoint` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct ModifyEndpointOutput {
    /// The endpoint after modification.
    pub endpoint: Option<Endpoint>,
}

impl ModifyEndpointOutput {
    /// Creates a builder for `ModifyEndpointOutput`.
    pub fn builder() -> modify_endpoint_output::Builder {
        modify_endpoint_output::Builder::default()
    }
}

/// Builder for [`ModifyEndpointOutput`](crate::output::ModifyEndpointOutput).
pub mod modify_endpoint_output {
    /// Builder for [`ModifyEndpointOutput`](crate::output::ModifyEndpointOutput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        endpoint: Option<crate::model::Endpoint>,
    }

    impl Builder {
        pub fn endpoint(mut self, input: crate::model::Endpoint) -> Self {
            self.endpoint = Some(input);
            self
        }
        pub fn set_endpoint(mut self, input: Option<crate::model::Endpoint>) -> Self {
            self.endpoint = input;
            self
        }
        /// Builds the `ModifyEndpointOutput`.
        pub fn build(self) -> crate::output::ModifyEndpointOutput {
            crate::output::ModifyEndpointOutput {
                endpoint: self.endpoint,
            }
        }
    }
}

/// Output of the `RefreshSchemas` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct RefreshSchemasOutput {
    /// The status of the refresh that was started.
    pub refresh_schemas_status: Option<RefreshSchemasStatus>,
}

impl RefreshSchemasOutput {
    /// Creates a builder for `RefreshSchemasOutput`.
    pub fn builder() -> refresh_schemas_output::Builder {
        refresh_schemas_output::Builder::default()
    }
}

/// Builder for [`RefreshSchemasOutput`](crate::output::RefreshSchemasOutput).
pub mod refresh_schemas_output {
    /// Builder for [`RefreshSchemasOutput`](crate::output::RefreshSchemasOutput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        refresh_schemas_status: Option<crate::model::RefreshSchemasStatus>,
    }

    impl Builder {
        pub fn refresh_schemas_status(
            mut self,
            input: crate::model::RefreshSchemasStatus,
        ) -> Self {
            self.refresh_schemas_status = Some(input);
            self
        }
        pub fn set_refresh_schemas_status(
            mut self,
            input: Option<crate::model::RefreshSchemasStatus>,
        ) -> Self {
            self.refresh_schemas_status = input;
            self
        }
        /// Builds the `RefreshSchemasOutput`.
        pub fn build(self) -> crate::output::RefreshSchemasOutput {
            crate::output::RefreshSchemasOutput {
                refresh_schemas_status: self.refresh_schemas_status,
            }
        }
    }
}

/// Output of the `RemoveTagsFromResource` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct RemoveTagsFromResourceOutput {}

impl RemoveTagsFromResourceOutput {
    /// Creates a builder for `RemoveTagsFromResourceOutput`.
    pub fn builder() -> remove_tags_from_resource_output::Builder {
        remove_tags_from_resource_output::Builder::default()
    }
}

/// Builder for [`RemoveTagsFromResourceOutput`](crate::output::RemoveTagsFromResourceOutput).
pub mod remove_tags_from_resource_output {
    /// Builder for [`RemoveTagsFromResourceOutput`](crate::output::RemoveTagsFromResourceOutput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {}

    impl Builder {
        /// Builds the `RemoveTagsFromResourceOutput`.
        pub fn build(self) -> crate::output::RemoveTagsFromResourceOutput {
            crate::output::RemoveTagsFromResourceOutput {}
        }
    }
}

/// Output of the `StartReplicationTask` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct StartReplicationTaskOutput {
    /// The task that was started.
    pub replication_task: Option<ReplicationTask>,
}

impl StartReplicationTaskOutput {
    /// Creates a builder for `StartReplicationTaskOutput`.
    pub fn builder() -> start_replication_task_output::Builder {
        start_replication_task_output::Builder::default()
    }
}

/// Builder for [`StartReplicationTaskOutput`](crate::output::StartReplicationTaskOutput).
pub mod start_replication_task_output {
    /// Builder for [`StartReplicationTaskOutput`](crate::output::StartReplicationTaskOutput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        replication_task: Option<crate::model::ReplicationTask>,
    }

    impl Builder {
        pub fn replication_task(mut self, input: crate::model::ReplicationTask) -> Self {
            self.replication_task = Some(input);
            self
        }
        pub fn set_replication_task(
            mut self,
            input: Option<crate::model::ReplicationTask>,
        ) -> Self {
            self.replication_task = input;
            self
        }
        /// Builds the `StartReplicationTaskOutput`.
        pub fn build(self) -> crate::output::StartReplicationTaskOutput {
            crate::output::StartReplicationTaskOutput {
                replication_task: self.replication_task,
            }
        }
    }
}

/// Output of the `StopReplicationTask` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct StopReplicationTaskOutput {
    /// The task that was stopped.
    pub replication_task: Option<ReplicationTask>,
}

impl StopReplicationTaskOutput {
    /// Creates a builder for `StopReplicationTaskOutput`.
    pub fn builder() -> stop_replication_task_output::Builder {
        stop_replication_task_output::Builder::default()
    }
}

/// Builder for [`StopReplicationTaskOutput`](crate::output::StopReplicationTaskOutput).
pub mod stop_replication_task_output {
    /// Builder for [`StopReplicationTaskOutput`](crate::output::StopReplicationTaskOutput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        replication_task: Option<crate::model::ReplicationTask>,
    }

    impl Builder {
        pub fn replication_task(mut self, input: crate::model::ReplicationTask) -> Self {
            self.replication_task = Some(input);
            self
        }
        pub fn set_replication_task(
            mut self,
            input: Option<crate::model::ReplicationTask>,
        ) -> Self {
            self.replication_task = input;
            self
        }
        /// Builds the `StopReplicationTaskOutput`.
        pub fn build(self) -> crate::output::StopReplicationTaskOutput {
            crate::output::StopReplicationTaskOutput {
                replication_task: self.replication_task,
            }
        }
    }
}

/// Output of the `TestConnection` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct TestConnectionOutput {
    /// The connection that is being tested.
    pub connection: Option<Connection>,
}

impl TestConnectionOutput {
    /// Creates a builder for `TestConnectionOutput`.
    pub fn builder() -> test_connection_output::Builder {
        test_connection_output::Builder::default()
    }
}

/// Builder for [`TestConnectionOutput`](crate::output::TestConnectionOutput).
pub mod test_connection_output {
    /// Builder for [`TestConnectionOutput`](crate::output::TestConnectionOutput).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        connection: Option<crate::model::Connection>,
    }

    impl Builder {
        pub fn connection(mut self, input: crate::model::Connection) -> Self {
            self.connection = Some(input);
            self
        }
        pub fn set_connection(mut self, input: Option<crate::model::Connection>) -> Self {
            self.connection = input;
            self
        }
        /// Builds the `TestConnectionOutput`.
        pub fn build(self) -> crate::output::TestConnectionOutput {
            crate::output::TestConnectionOutput {
                connection: self.connection,
            }
        }
    }
}
