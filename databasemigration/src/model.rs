/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Data types for the resources managed by the service: endpoints, tasks,
//! connections, and the engine-specific settings objects that hang off them.

use dms_types::error::InvalidEnumValue;
use dms_types::DateTime;
use std::str::FromStr;

/// A user-defined key-value pair attached to a resource.
#[derive(Clone, Debug, PartialEq)]
pub struct Tag {
    /// The tag key, 1-128 characters.
    pub key: Option<String>,
    /// The tag value, 0-256 characters.
    pub value: Option<String>,
}

impl Tag {
    /// Creates a builder for `Tag`.
    pub fn builder() -> tag::Builder {
        tag::Builder::default()
    }
}

/// Builder for [`Tag`](crate::model::Tag).
pub mod tag {
    /// Builder for [`Tag`](crate::model::Tag).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        key: Option<String>,
        value: Option<String>,
    }

    impl Builder {
        /// Sets the tag key.
        pub fn key(mut self, input: impl Into<String>) -> Self {
            self.key = Some(input.into());
            self
        }
        /// Sets or clears the tag key.
        pub fn set_key(mut self, input: Option<String>) -> Self {
            self.key = input;
            self
        }
        /// Sets the tag value.
        pub fn value(mut self, input: impl Into<String>) -> Self {
            self.value = Some(input.into());
            self
        }
        /// Sets or clears the tag value.
        pub fn set_value(mut self, input: Option<String>) -> Self {
            self.value = input;
            self
        }
        /// Builds the `Tag`.
        pub fn build(self) -> crate::model::Tag {
            crate::model::Tag {
                key: self.key,
                value: self.value,
            }
        }
    }
}

/// A name/values filter applied to a describe operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    /// The name of the filter.
    pub name: Option<String>,
    /// One or more values to match.
    pub values: Option<Vec<String>>,
}

impl Filter {
    /// Creates a builder for `Filter`.
    pub fn builder() -> filter::Builder {
        filter::Builder::default()
    }
}

/// Builder for [`Filter`](crate::model::Filter).
pub mod filter {
    /// Builder for [`Filter`](crate::model::Filter).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        name: Option<String>,
        values: Option<Vec<String>>,
    }

    impl Builder {
        /// Sets the filter name.
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }
        /// Sets or clears the filter name.
        pub fn set_name(mut self, input: Option<String>) -> Self {
            self.name = input;
            self
        }
        /// Appends a value to `values`.
        pub fn values(mut self, input: impl Into<String>) -> Self {
            let mut values = self.values.unwrap_or_default();
            values.push(input.into());
            self.values = Some(values);
            self
        }
        /// Sets or clears the whole `values` list.
        pub fn set_values(mut self, input: Option<Vec<String>>) -> Self {
            self.values = input;
            self
        }
        /// Builds the `Filter`.
        pub fn build(self) -> crate::model::Filter {
            crate::model::Filter {
                name: self.name,
                values: self.values,
            }
        }
    }
}

/// An Availability Zone a subnet belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct AvailabilityZone {
    /// The name of the Availability Zone.
    pub name: Option<String>,
}

impl AvailabilityZone {
    /// Creates a builder for `AvailabilityZone`.
    pub fn builder() -> availability_zone::Builder {
        availability_zone::Builder::default()
    }
}

/// Builder for [`AvailabilityZone`](crate::model::AvailabilityZone).
pub mod availability_zone {
    /// Builder for [`AvailabilityZone`](crate::model::AvailabilityZone).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        name: Option<String>,
    }

    impl Builder {
        /// Sets the zone name.
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }
        /// Sets or clears the zone name.
        pub fn set_name(mut self, input: Option<String>) -> Self {
            self.name = input;
            self
        }
        /// Builds the `AvailabilityZone`.
        pub fn build(self) -> crate::model::AvailabilityZone {
            crate::model::AvailabilityZone { name: self.name }
        }
    }
}

/// A subnet within a replication subnet group.
#[derive(Clone, Debug, PartialEq)]
pub struct Subnet {
    /// The subnet identifier.
    pub subnet_identifier: Option<String>,
    /// The Availability Zone of the subnet.
    pub subnet_availability_zone: Option<AvailabilityZone>,
    /// The status of the subnet.
    pub subnet_status: Option<String>,
}

impl Subnet {
    /// Creates a builder for `Subnet`.
    pub fn builder() -> subnet::Builder {
        subnet::Builder::default()
    }
}

/// Builder for [`Subnet`](crate::model::Subnet).
pub mod subnet {
    /// Builder for [`Subnet`](crate::model::Subnet).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        subnet_identifier: Option<String>,
        subnet_availability_zone: Option<crate::model::AvailabilityZone>,
        subnet_status: Option<String>,
    }

    impl Builder {
        /// Sets the subnet identifier.
        pub fn subnet_identifier(mut self, input: impl Into<String>) -> Self {
            self.subnet_identifier = Some(input.into());
            self
        }
        /// Sets or clears the subnet identifier.
        pub fn set_subnet_identifier(mut self, input: Option<String>) -> Self {
            self.subnet_identifier = input;
            self
        }
        /// Sets the subnet's Availability Zone.
        pub fn subnet_availability_zone(mut self, input: crate::model::AvailabilityZone) -> Self {
            self.subnet_availability_zone = Some(input);
            self
        }
        /// Sets or clears the subnet's Availability Zone.
        pub fn set_subnet_availability_zone(
            mut self,
            input: Option<crate::model::AvailabilityZone>,
        ) -> Self {
            self.subnet_availability_zone = input;
            self
        }
        /// Sets the subnet status.
        pub fn subnet_status(mut self, input: impl Into<String>) -> Self {
            self.subnet_status = Some(input.into());
            self
        }
        /// Sets or clears the subnet status.
        pub fn set_subnet_status(mut self, input: Option<String>) -> Self {
            self.subnet_status = input;
            self
        }
        /// Builds the `Subnet`.
        pub fn build(self) -> crate::model::Subnet {
            crate::model::Subnet {
                subnet_identifier: self.subnet_identifier,
                subnet_availability_zone: self.subnet_availability_zone,
                subnet_status: self.subnet_status,
            }
        }
    }
}

/// A group of subnets a replication instance can be launched into.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplicationSubnetGroup {
    /// The identifier of the subnet group.
    pub replication_subnet_group_identifier: Option<String>,
    /// The description of the subnet group.
    pub replication_subnet_group_description: Option<String>,
    /// The ID of the VPC the subnets belong to.
    pub vpc_id: Option<String>,
    /// The status of the subnet group.
    pub subnet_group_status: Option<String>,
    /// The subnets in the group.
    pub subnets: Option<Vec<Subnet>>,
}

impl ReplicationSubnetGroup {
    /// Creates a builder for `ReplicationSubnetGroup`.
    pub fn builder() -> replication_subnet_group::Builder {
        replication_subnet_group::Builder::default()
    }
}

/// Builder for [`ReplicationSubnetGroup`](crate::model::ReplicationSubnetGroup).
pub mod replication_subnet_group {
    /// Builder for [`ReplicationSubnetGroup`](crate::model::ReplicationSubnetGroup).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        replication_subnet_group_identifier: Option<String>,
        replication_subnet_group_description: Option<String>,
        vpc_id: Option<String>,
        subnet_group_status: Option<String>,
        subnets: Option<Vec<crate::model::Subnet>>,
    }

    impl Builder {
        /// Sets the subnet group identifier.
        pub fn replication_subnet_group_identifier(mut self, input: impl Into<String>) -> Self {
            self.replication_subnet_group_identifier = Some(input.into());
            self
        }
        /// Sets or clears the subnet group identifier.
        pub fn set_replication_subnet_group_identifier(mut self, input: Option<String>) -> Self {
            self.replication_subnet_group_identifier = input;
            self
        }
        /// Sets the subnet group description.
        pub fn replication_subnet_group_description(mut self, input: impl Into<String>) -> Self {
            self.replication_subnet_group_description = Some(input.into());
            self
        }
        /// Sets or clears the subnet group description.
        pub fn set_replication_subnet_group_description(mut self, input: Option<String>) -> Self {
            self.replication_subnet_group_description = input;
            self
        }
        /// Sets the VPC ID.
        pub fn vpc_id(mut self, input: impl Into<String>) -> Self {
            self.vpc_id = Some(input.into());
            self
        }
        /// Sets or clears the VPC ID.
        pub fn set_vpc_id(mut self, input: Option<String>) -> Self {
            self.vpc_id = input;
            self
        }
        /// Sets the subnet group status.
        pub fn subnet_group_status(mut self, input: impl Into<String>) -> Self {
            self.subnet_group_status = Some(input.into());
            self
        }
        /// Sets or clears the subnet group status.
        pub fn set_subnet_group_status(mut self, input: Option<String>) -> Self {
            self.subnet_group_status = input;
            self
        }
        /// Appends a subnet to `subnets`.
        pub fn subnets(mut self, input: crate::model::Subnet) -> Self {
            let mut subnets = self.subnets.unwrap_or_default();
            subnets.push(input);
            self.subnets = Some(subnets);
            self
        }
        /// Sets or clears the whole `subnets` list.
        pub fn set_subnets(mut self, input: Option<Vec<crate::model::Subnet>>) -> Self {
            self.subnets = input;
            self
        }
        /// Builds the `ReplicationSubnetGroup`.
        pub fn build(self) -> crate::model::ReplicationSubnetGroup {
            crate::model::ReplicationSubnetGroup {
                replication_subnet_group_identifier: self.replication_subnet_group_identifier,
                replication_subnet_group_description: self.replication_subnet_group_description,
                vpc_id: self.vpc_id,
                subnet_group_status: self.subnet_group_status,
                subnets: self.subnets,
            }
        }
    }
}

/// The outcome of a connection test between a replication instance and an
/// endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    /// The ARN of the replication instance.
    pub replication_instance_arn: Option<String>,
    /// The ARN of the endpoint.
    pub endpoint_arn: Option<String>,
    /// The connection status: `successful`, `testing`, `failed`, or `deleting`.
    pub status: Option<String>,
    /// The error message from the last failed test, if any.
    pub last_failure_message: Option<String>,
    /// The identifier of the endpoint.
    pub endpoint_identifier: Option<String>,
    /// The identifier of the replication instance.
    pub replication_instance_identifier: Option<String>,
}

impl Connection {
    /// Creates a builder for `Connection`.
    pub fn builder() -> connection::Builder {
        connection::Builder::default()
    }
}

/// Builder for [`Connection`](crate::model::Connection).
pub mod connection {
    /// Builder for [`Connection`](crate::model::Connection).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        replication_instance_arn: Option<String>,
        endpoint_arn: Option<String>,
        status: Option<String>,
        last_failure_message: Option<String>,
        endpoint_identifier: Option<String>,
        replication_instance_identifier: Option<String>,
    }

    impl Builder {
        /// Sets the replication instance ARN.
        pub fn replication_instance_arn(mut self, input: impl Into<String>) -> Self {
            self.replication_instance_arn = Some(input.into());
            self
        }
        /// Sets or clears the replication instance ARN.
        pub fn set_replication_instance_arn(mut self, input: Option<String>) -> Self {
            self.replication_instance_arn = input;
            self
        }
        /// Sets the endpoint ARN.
        pub fn endpoint_arn(mut self, input: impl Into<String>) -> Self {
            self.endpoint_arn = Some(input.into());
            self
        }
        /// Sets or clears the endpoint ARN.
        pub fn set_endpoint_arn(mut self, input: Option<String>) -> Self {
            self.endpoint_arn = input;
            self
        }
        /// Sets the connection status.
        pub fn status(mut self, input: impl Into<String>) -> Self {
            self.status = Some(input.into());
            self
        }
        /// Sets or clears the connection status.
        pub fn set_status(mut self, input: Option<String>) -> Self {
            self.status = input;
            self
        }
        /// Sets the last failure message.
        pub fn last_failure_message(mut self, input: impl Into<String>) -> Self {
            self.last_failure_message = Some(input.into());
            self
        }
        /// Sets or clears the last failure message.
        pub fn set_last_failure_message(mut self, input: Option<String>) -> Self {
            self.last_failure_message = input;
            self
        }
        /// Sets the endpoint identifier.
        pub fn endpoint_identifier(mut self, input: impl Into<String>) -> Self {
            self.endpoint_identifier = Some(input.into());
            self
        }
        /// Sets or clears the endpoint identifier.
        pub fn set_endpoint_identifier(mut self, input: Option<String>) -> Self {
            self.endpoint_identifier = input;
            self
        }
        /// Sets the replication instance identifier.
        pub fn replication_instance_identifier(mut self, input: impl Into<String>) -> Self {
            self.replication_instance_identifier = Some(input.into());
            self
        }
        /// Sets or clears the replication instance identifier.
        pub fn set_replication_instance_identifier(mut self, input: Option<String>) -> Self {
            self.replication_instance_identifier = input;
            self
        }
        /// Builds the `Connection`.
        pub fn build(self) -> crate::model::Connection {
            crate::model::Connection {
                replication_instance_arn: self.replication_instance_arn,
                endpoint_arn: self.endpoint_arn,
                status: self.status,
                last_failure_message: self.last_failure_message,
                endpoint_identifier: self.endpoint_identifier,
                replication_instance_identifier: self.replication_instance_identifier,
            }
        }
    }
}

/// A quota for this account in the current region.
#[derive(Clone, Debug, PartialEq)]
pub struct AccountQuota {
    /// The name of the quota.
    pub account_quota_name: Option<String>,
    /// The amount currently used toward the quota maximum.
    pub used: Option<i64>,
    /// The maximum allowed value for the quota.
    pub max: Option<i64>,
}

impl AccountQuota {
    /// Creates a builder for `AccountQuota`.
    pub fn builder() -> account_quota::Builder {
        account_quota::Builder::default()
    }
}

/// Builder for [`AccountQuota`](crate::model::AccountQuota).
pub mod account_quota {
    /// Builder for [`AccountQuota`](crate::model::AccountQuota).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        account_quota_name: Option<String>,
        used: Option<i64>,
        max: Option<i64>,
    }

    impl Builder {
        /// Sets the quota name.
        pub fn account_quota_name(mut self, input: impl Into<String>) -> Self {
            self.account_quota_name = Some(input.into());
            self
        }
        /// Sets or clears the quota name.
        pub fn set_account_quota_name(mut self, input: Option<String>) -> Self {
            self.account_quota_name = input;
            self
        }
        /// Sets the used amount.
        pub fn used(mut self, input: i64) -> Self {
            self.used = Some(input);
            self
        }
        /// Sets or clears the used amount.
        pub fn set_used(mut self, input: Option<i64>) -> Self {
            self.used = input;
            self
        }
        /// Sets the quota maximum.
        pub fn max(mut self, input: i64) -> Self {
            self.max = Some(input);
            self
        }
        /// Sets or clears the quota maximum.
        pub fn set_max(mut self, input: Option<i64>) -> Self {
            self.max = input;
            self
        }
        /// Builds the `AccountQuota`.
        pub fn build(self) -> crate::model::AccountQuota {
            crate::model::AccountQuota {
                account_quota_name: self.account_quota_name,
                used: self.used,
                max: self.max,
            }
        }
    }
}

/// The state of a schema refresh requested for an endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct RefreshSchemasStatus {
    /// The ARN of the endpoint being refreshed.
    pub endpoint_arn: Option<String>,
    /// The ARN of the replication instance performing the refresh.
    pub replication_instance_arn: Option<String>,
    /// The current refresh status.
    pub status: Option<RefreshSchemasStatusTypeValue>,
    /// When the schemas were last refreshed.
    pub last_refresh_date: Option<DateTime>,
    /// The error message from the last failed refresh, if any.
    pub last_failure_message: Option<String>,
}

impl RefreshSchemasStatus {
    /// Creates a builder for `RefreshSchemasStatus`.
    pub fn builder() -> refresh_schemas_status::Builder {
        refresh_schemas_status::Builder::default()
    }
}

/// Builder for [`RefreshSchemasStatus`](crate::model::RefreshSchemasStatus).
pub mod refresh_schemas_status {
    use dms_types::DateTime;

    /// Builder for [`RefreshSchemasStatus`](crate::model::RefreshSchemasStatus).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        endpoint_arn: Option<String>,
        replication_instance_arn: Option<String>,
        status: Option<crate::model::RefreshSchemasStatusTypeValue>,
        last_refresh_date: Option<DateTime>,
        last_failure_message: Option<String>,
    }

    impl Builder {
        /// Sets the endpoint ARN.
        pub fn endpoint_arn(mut self, input: impl Into<String>) -> Self {
            self.endpoint_arn = Some(input.into());
            self
        }
        /// Sets or clears the endpoint ARN.
        pub fn set_endpoint_arn(mut self, input: Option<String>) -> Self {
            self.endpoint_arn = input;
            self
        }
        /// Sets the replication instance ARN.
        pub fn replication_instance_arn(mut self, input: impl Into<String>) -> Self {
            self.replication_instance_arn = Some(input.into());
            self
        }
        /// Sets or clears the replication instance ARN.
        pub fn set_replication_instance_arn(mut self, input: Option<String>) -> Self {
            self.replication_instance_arn = input;
            self
        }
        /// Sets the refresh status.
        pub fn status(mut self, input: crate::model::RefreshSchemasStatusTypeValue) -> Self {
            self.status = Some(input);
            self
        }
        /// Sets or clears the refresh status.
        pub fn set_status(
            mut self,
            input: Option<crate::model::RefreshSchemasStatusTypeValue>,
        ) -> Self {
            self.status = input;
            self
        }
        /// Sets the last refresh date.
        pub fn last_refresh_date(mut self, input: DateTime) -> Self {
            self.last_refresh_date = Some(input);
            self
        }
        /// Sets or clears the last refresh date.
        pub fn set_last_refresh_date(mut self, input: Option<DateTime>) -> Self {
            self.last_refresh_date = input;
            self
        }
        /// Sets the last failure message.
        pub fn last_failure_message(mut self, input: impl Into<String>) -> Self {
            self.last_failure_message = Some(input.into());
            self
        }
        /// Sets or clears the last failure message.
        pub fn set_last_failure_message(mut self, input: Option<String>) -> Self {
            self.last_failure_message = input;
            self
        }
        /// Builds the `RefreshSchemasStatus`.
        pub fn build(self) -> crate::model::RefreshSchemasStatus {
            crate::model::RefreshSchemasStatus {
                endpoint_arn: self.endpoint_arn,
                replication_instance_arn: self.replication_instance_arn,
                status: self.status,
                last_refresh_date: self.last_refresh_date,
                last_failure_message: self.last_failure_message,
            }
        }
    }
}

/// Progress counters for a replication task.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplicationTaskStats {
    /// The percent complete of the task's full-load phase.
    pub full_load_progress_percent: Option<i32>,
    /// Elapsed run time, in milliseconds.
    pub elapsed_time_millis: Option<i64>,
    /// The number of tables loaded.
    pub tables_loaded: Option<i32>,
    /// The number of tables currently loading.
    pub tables_loading: Option<i32>,
    /// The number of tables queued.
    pub tables_queued: Option<i32>,
    /// The number of tables that errored.
    pub tables_errored: Option<i32>,
    /// When the task last had a fresh start.
    pub fresh_start_date: Option<DateTime>,
    /// When the task was started.
    pub start_date: Option<DateTime>,
    /// When the task was stopped.
    pub stop_date: Option<DateTime>,
    /// When the full-load phase began.
    pub full_load_start_date: Option<DateTime>,
    /// When the full-load phase completed.
    pub full_load_finish_date: Option<DateTime>,
}

impl ReplicationTaskStats {
    /// Creates a builder for `ReplicationTaskStats`.
    pub fn builder() -> replication_task_stats::Builder {
        replication_task_stats::Builder::default()
    }
}

/// Builder for [`ReplicationTaskStats`](crate::model::ReplicationTaskStats).
pub mod replication_task_stats {
    use dms_types::DateTime;

    /// Builder for [`ReplicationTaskStats`](crate::model::ReplicationTaskStats).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        full_load_progress_percent: Option<i32>,
        elapsed_time_millis: Option<i64>,
        tables_loaded: Option<i32>,
        tables_loading: Option<i32>,
        tables_queued: Option<i32>,
        tables_errored: Option<i32>,
        fresh_start_date: Option<DateTime>,
        start_date: Option<DateTime>,
        stop_date: Option<DateTime>,
        full_load_start_date: Option<DateTime>,
        full_load_finish_date: Option<DateTime>,
    }

    impl Builder {
        /// Sets the full-load progress percentage.
        pub fn full_load_progress_percent(mut self, input: i32) -> Self {
            self.full_load_progress_percent = Some(input);
            self
        }
        /// Sets or clears the full-load progress percentage.
        pub fn set_full_load_progress_percent(mut self, input: Option<i32>) -> Self {
            self.full_load_progress_percent = input;
            self
        }
        /// Sets the elapsed run time in milliseconds.
        pub fn elapsed_time_millis(mut self, input: i64) -> Self {
            self.elapsed_time_millis = Some(input);
            self
        }
        /// Sets or clears the elapsed run time.
        pub fn set_elapsed_time_millis(mut self, input: Option<i64>) -> Self {
            self.elapsed_time_millis = input;
            self
        }
        /// Sets the number of tables loaded.
        pub fn tables_loaded(mut self, input: i32) -> Self {
            self.tables_loaded = Some(input);
            self
        }
        /// Sets or clears the number of tables loaded.
        pub fn set_tables_loaded(mut self, input: Option<i32>) -> Self {
            self.tables_loaded = input;
            self
        }
        /// Sets the number of tables loading.
        pub fn tables_loading(mut self, input: i32) -> Self {
            self.tables_loading = Some(input);
            self
        }
        /// Sets or clears the number of tables loading.
        pub fn set_tables_loading(mut self, input: Option<i32>) -> Self {
            self.tables_loading = input;
            self
        }
        /// Sets the number of tables queued.
        pub fn tables_queued(mut self, input: i32) -> Self {
            self.tables_queued = Some(input);
            self
        }
        /// Sets or clears the number of tables queued.
        pub fn set_tables_queued(mut self, input: Option<i32>) -> Self {
            self.tables_queued = input;
            self
        }
        /// Sets the number of tables that errored.
        pub fn tables_errored(mut self, input: i32) -> Self {
            self.tables_errored = Some(input);
            self
        }
        /// Sets or clears the number of tables that errored.
        pub fn set_tables_errored(mut self, input: Option<i32>) -> Self {
            self.tables_errored = input;
            self
        }
        /// Sets the fresh start date.
        pub fn fresh_start_date(mut self, input: DateTime) -> Self {
            self.fresh_start_date = Some(input);
            self
        }
        /// Sets or clears the fresh start date.
        pub fn set_fresh_start_date(mut self, input: Option<DateTime>) -> Self {
            self.fresh_start_date = input;
            self
        }
        /// Sets the start date.
        pub fn start_date(mut self, input: DateTime) -> Self {
            self.start_date = Some(input);
            self
        }
        /// Sets or clears the start date.
        pub fn set_start_date(mut self, input: Option<DateTime>) -> Self {
            self.start_date = input;
            self
        }
        /// Sets the stop date.
        pub fn stop_date(mut self, input: DateTime) -> Self {
            self.stop_date = Some(input);
            self
        }
        /// Sets or clears the stop date.
        pub fn set_stop_date(mut self, input: Option<DateTime>) -> Self {
            self.stop_date = input;
            self
        }
        /// Sets the full-load start date.
        pub fn full_load_start_date(mut self, input: DateTime) -> Self {
            self.full_load_start_date = Some(input);
            self
        }
        /// Sets or clears the full-load start date.
        pub fn set_full_load_start_date(mut self, input: Option<DateTime>) -> Self {
            self.full_load_start_date = input;
            self
        }
        /// Sets the full-load finish date.
        pub fn full_load_finish_date(mut self, input: DateTime) -> Self {
            self.full_load_finish_date = Some(input);
            self
        }
        /// Sets or clears the full-load finish date.
        pub fn set_full_load_finish_date(mut self, input: Option<DateTime>) -> Self {
            self.full_load_finish_date = input;
            self
        }
        /// Builds the `ReplicationTaskStats`.
        pub fn build(self) -> crate::model::ReplicationTaskStats {
            crate::model::ReplicationTaskStats {
                full_load_progress_percent: self.full_load_progress_percent,
                elapsed_time_millis: self.elapsed_time_millis,
                tables_loaded: self.tables_loaded,
                tables_loading: self.tables_loading,
                tables_queued: self.tables_queued,
                tables_errored: self.tables_errored,
                fresh_start_date: self.fresh_start_date,
                start_date: self.start_date,
                stop_date: self.stop_date,
                full_load_start_date: self.full_load_start_date,
                full_load_finish_date: self.full_load_finish_date,
            }
        }
    }
}

/// A replication task, which moves data between a source and a target
/// endpoint using a replication instance.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplicationTask {
    /// The user-assigned task identifier.
    pub replication_task_identifier: Option<String>,
    /// The ARN of the source endpoint.
    pub source_endpoint_arn: Option<String>,
    /// The ARN of the target endpoint.
    pub target_endpoint_arn: Option<String>,
    /// The ARN of the replication instance.
    pub replication_instance_arn: Option<String>,
    /// The migration mode of the task.
    pub migration_type: Option<MigrationTypeValue>,
    /// Table mappings, as a JSON document.
    pub table_mappings: Option<String>,
    /// Task settings, as a JSON document.
    pub replication_task_settings: Option<String>,
    /// The task status.
    pub status: Option<String>,
    /// The error message from the last failure, if any.
    pub last_failure_message: Option<String>,
    /// The reason the task was stopped, if stopped.
    pub stop_reason: Option<String>,
    /// When the task was created.
    pub replication_task_creation_date: Option<DateTime>,
    /// When the task was started.
    pub replication_task_start_date: Option<DateTime>,
    /// The CDC start position the task was created with.
    pub cdc_start_position: Option<String>,
    /// The CDC stop position the task was created with.
    pub cdc_stop_position: Option<String>,
    /// The checkpoint to recover an interrupted CDC run from.
    pub recovery_checkpoint: Option<String>,
    /// The ARN of the task.
    pub replication_task_arn: Option<String>,
    /// Progress counters for the task.
    pub replication_task_stats: Option<ReplicationTaskStats>,
    /// Supplemental task metadata, as a JSON document.
    pub task_data: Option<String>,
}

impl ReplicationTask {
    /// Creates a builder for `ReplicationTask`.
    pub fn builder() -> replication_task::Builder {
        replication_task::Builder::default()
    }
}

/// Builder for [`ReplicationTask`](crate::model::ReplicationTask).
pub mod replication_task {
    use dms_types::DateTime;

    /// Builder for [`ReplicationTask`](crate::model::ReplicationTask).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        replication_task_identifier: Option<String>,
        source_endpoint_arn: Option<String>,
        target_endpoint_arn: Option<String>,
        replication_instance_arn: Option<String>,
        migration_type: Option<crate::model::MigrationTypeValue>,
        table_mappings: Option<String>,
        replication_task_settings: Option<String>,
        status: Option<String>,
        last_failure_message: Option<String>,
        stop_reason: Option<String>,
        replication_task_creation_date: Option<DateTime>,
        replication_task_start_date: Option<DateTime>,
        cdc_start_position: Option<String>,
        cdc_stop_position: Option<String>,
        recovery_checkpoint: Option<String>,
        replication_task_arn: Option<String>,
        replication_task_stats: Option<crate::model::ReplicationTaskStats>,
        task_data: Option<String>,
    }

    impl Builder {
        /// Sets the task identifier.
        pub fn replication_task_identifier(mut self, input: impl Into<String>) -> Self {
            self.replication_task_identifier = Some(input.into());
            self
        }
        /// Sets or clears the task identifier.
        pub fn set_replication_task_identifier(mut self, input: Option<String>) -> Self {
            self.replication_task_identifier = input;
            self
        }
        /// Sets the source endpoint ARN.
        pub fn source_endpoint_arn(mut self, input: impl Into<String>) -> Self {
            self.source_endpoint_arn = Some(input.into());
            self
        }
        /// Sets or clears the source endpoint ARN.
        pub fn set_source_endpoint_arn(mut self, input: Option<String>) -> Self {
            self.source_endpoint_arn = input;
            self
        }
        /// Sets the target endpoint ARN.
        pub fn target_endpoint_arn(mut self, input: impl Into<String>) -> Self {
            self.target_endpoint_arn = Some(input.into());
            self
        }
        /// Sets or clears the target endpoint ARN.
        pub fn set_target_endpoint_arn(mut self, input: Option<String>) -> Self {
            self.target_endpoint_arn = input;
            self
        }
        /// Sets the replication instance ARN.
        pub fn replication_instance_arn(mut self, input: impl Into<String>) -> Self {
            self.replication_instance_arn = Some(input.into());
            self
        }
        /// Sets or clears the replication instance ARN.
        pub fn set_replication_instance_arn(mut self, input: Option<String>) -> Self {
            self.replication_instance_arn = input;
            self
        }
        /// Sets the migration type.
        pub fn migration_type(mut self, input: crate::model::MigrationTypeValue) -> Self {
            self.migration_type = Some(input);
            self
        }
        /// Sets or clears the migration type.
        pub fn set_migration_type(
            mut self,
            input: Option<crate::model::MigrationTypeValue>,
        ) -> Self {
            self.migration_type = input;
            self
        }
        /// Sets the table mappings document.
        pub fn table_mappings(mut self, input: impl Into<String>) -> Self {
            self.table_mappings = Some(input.into());
            self
        }
        /// Sets or clears the table mappings document.
        pub fn set_table_mappings(mut self, input: Option<String>) -> Self {
            self.table_mappings = input;
            self
        }
        /// Sets the task settings document.
        pub fn replication_task_settings(mut self, input: impl Into<String>) -> Self {
            self.replication_task_settings = Some(input.into());
            self
        }
        /// Sets or clears the task settings document.
        pub fn set_replication_task_settings(mut self, input: Option<String>) -> Self {
            self.replication_task_settings = input;
            self
        }
        /// Sets the task status.
        pub fn status(mut self, input: impl Into<String>) -> Self {
            self.status = Some(input.into());
            self
        }
        /// Sets or clears the task status.
        pub fn set_status(mut self, input: Option<String>) -> Self {
            self.status = input;
            self
        }
        /// Sets the last failure message.
        pub fn last_failure_message(mut self, input: impl Into<String>) -> Self {
            self.last_failure_message = Some(input.into());
            self
        }
        /// Sets or clears the last failure message.
        pub fn set_last_failure_message(mut self, input: Option<String>) -> Self {
            self.last_failure_message = input;
            self
        }
        /// Sets the stop reason.
        pub fn stop_reason(mut self, input: impl Into<String>) -> Self {
            self.stop_reason = Some(input.into());
            self
        }
        /// Sets or clears the stop reason.
        pub fn set_stop_reason(mut self, input: Option<String>) -> Self {
            self.stop_reason = input;
            self
        }
        /// Sets the task creation date.
        pub fn replication_task_creation_date(mut self, input: DateTime) -> Self {
            self.replication_task_creation_date = Some(input);
            self
        }
        /// Sets or clears the task creation date.
        pub fn set_replication_task_creation_date(mut self, input: Option<DateTime>) -> Self {
            self.replication_task_creation_date = input;
            self
        }
        /// Sets the task start date.
        pub fn replication_task_start_date(mut self, input: DateTime) -> Self {
            self.replication_task_start_date = Some(input);
            self
        }
        /// Sets or clears the task start date.
        pub fn set_replication_task_start_date(mut self, input: Option<DateTime>) -> Self {
            self.replication_task_start_date = input;
            self
        }
        /// Sets the CDC start position.
        pub fn cdc_start_position(mut self, input: impl Into<String>) -> Self {
            self.cdc_start_position = Some(input.into());
            self
        }
        /// Sets or clears the CDC start position.
        pub fn set_cdc_start_position(mut self, input: Option<String>) -> Self {
            self.cdc_start_position = input;
            self
        }
        /// Sets the CDC stop position.
        pub fn cdc_stop_position(mut self, input: impl Into<String>) -> Self {
            self.cdc_stop_position = Some(input.into());
            self
        }
        /// Sets or clears the CDC stop position.
        pub fn set_cdc_stop_position(mut self, input: Option<String>) -> Self {
            self.cdc_stop_position = input;
            self
        }
        /// Sets the recovery checkpoint.
        pub fn recovery_checkpoint(mut self, input: impl Into<String>) -> Self {
            self.recovery_checkpoint = Some(input.into());
            self
        }
        /// Sets or clears the recovery checkpoint.
        pub fn set_recovery_checkpoint(mut self, input: Option<String>) -> Self {
            self.recovery_checkpoint = input;
            self
        }
        /// Sets the task ARN.
        pub fn replication_task_arn(mut self, input: impl Into<String>) -> Self {
            self.replication_task_arn = Some(input.into());
            self
        }
        /// Sets or clears the task ARN.
        pub fn set_replication_task_arn(mut self, input: Option<String>) -> Self {
            self.replication_task_arn = input;
            self
        }
        /// Sets the task statistics.
        pub fn replication_task_stats(
            mut self,
            input: crate::model::ReplicationTaskStats,
        ) -> Self {
            self.replication_task_stats = Some(input);
            self
        }
        /// Sets or clears the task statistics.
        pub fn set_replication_task_stats(
            mut self,
            input: Option<crate::model::ReplicationTaskStats>,
        ) -> Self {
            self.replication_task_stats = input;
            self
        }
        /// Sets the supplemental task metadata document.
        pub fn task_data(mut self, input: impl Into<String>) -> Self {
            self.task_data = Some(input.into());
            self
        }
        /// Sets or clears the supplemental task metadata document.
        pub fn set_task_data(mut self, input: Option<String>) -> Self {
            self.task_data = input;
            self
        }
        /// Builds the `ReplicationTask`.
        pub fn build(self) -> crate::model::ReplicationTask {
            crate::model::ReplicationTask {
                replication_task_identifier: self.replication_task_identifier,
                source_endpoint_arn: self.source_endpoint_arn,
                target_endpoint_arn: self.target_endpoint_arn,
                replication_instance_arn: self.replication_instance_arn,
                migration_type: self.migration_type,
                table_mappings: self.table_mappings,
                replication_task_settings: self.replication_task_settings,
                status: self.status,
                last_failure_message: self.last_failure_message,
                stop_reason: self.stop_reason,
                replication_task_creation_date: self.replication_task_creation_date,
                replication_task_start_date: self.replication_task_start_date,
                cdc_start_position: self.cdc_start_position,
                cdc_stop_position: self.cdc_stop_position,
                recovery_checkpoint: self.recovery_checkpoint,
                replication_task_arn: self.replication_task_arn,
                replication_task_stats: self.replication_task_stats,
                task_data: self.task_data,
            }
        }
    }
}

/// A notification event associated with a resource.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    /// The identifier of the source the event applies to.
    pub source_identifier: Option<String>,
    /// The kind of source the event applies to.
    pub source_type: Option<SourceType>,
    /// The event message.
    pub message: Option<String>,
    /// The categories the event belongs to.
    pub event_categories: Option<Vec<String>>,
    /// When the event occurred.
    pub date: Option<DateTime>,
}

impl Event {
    /// Creates a builder for `Event`.
    pub fn builder() -> event::Builder {
        event::Builder::default()
    }
}

/// Builder for [`Event`](crate::model::Event).
pub mod event {
    use dms_types::DateTime;

    /// Builder for [`Event`](crate::model::Event).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        source_identifier: Option<String>,
        source_type: Option<crate::model::SourceType>,
        message: Option<String>,
        event_categories: Option<Vec<String>>,
        date: Option<DateTime>,
    }

    impl Builder {
        /// Sets the source identifier.
        pub fn source_identifier(mut self, input: impl Into<String>) -> Self {
            self.source_identifier = Some(input.into());
            self
        }
        /// Sets or clears the source identifier.
        pub fn set_source_identifier(mut self, input: Option<String>) -> Self {
            self.source_identifier = input;
            self
        }
        /// Sets the source type.
        pub fn source_type(mut self, input: crate::model::SourceType) -> Self {
            self.source_type = Some(input);
            self
        }
        /// Sets or clears the source type.
        pub fn set_source_type(mut self, input: Option<crate::model::SourceType>) -> Self {
            self.source_type = input;
            self
        }
        /// Sets the event message.
        pub fn message(mut self, input: impl Into<String>) -> Self {
            self.message = Some(input.into());
            self
        }
        /// Sets or clears the event message.
        pub fn set_message(mut self, input: Option<String>) -> Self {
            self.message = input;
            self
        }
        /// Appends a category to `event_categories`.
        pub fn event_categories(mut self, input: impl Into<String>) -> Self {
            let mut categories = self.event_categories.unwrap_or_default();
            categories.push(input.into());
            self.event_categories = Some(categories);
            self
        }
        /// Sets or clears the whole `event_categories` list.
        pub fn set_event_categories(mut self, input: Option<Vec<String>>) -> Self {
            self.event_categories = input;
            self
        }
        /// Sets the event date.
        pub fn date(mut self, input: DateTime) -> Self {
            self.date = Some(input);
            self
        }
        /// Sets or clears the event date.
        pub fn set_date(mut self, input: Option<DateTime>) -> Self {
            self.date = input;
            self
        }
        /// Builds the `Event`.
        pub fn build(self) -> crate::model::Event {
            crate::model::Event {
                source_identifier: self.source_identifier,
                source_type: self.source_type,
                message: self.message,
                event_categories: self.event_categories,
                date: self.date,
            }
        }
    }
}

/// Settings for a DynamoDB target endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct DynamoDbSettings {
    /// The ARN of the role used to access the target table.
    pub service_access_role_arn: Option<String>,
}

impl DynamoDbSettings {
    /// Creates a builder for `DynamoDbSettings`.
    pub fn builder() -> dynamo_db_settings::Builder {
        dynamo_db_settings::Builder::default()
    }
}

/// Builder for [`DynamoDbSettings`](crate::model::DynamoDbSettings).
pub mod dynamo_db_settings {
    /// Builder for [`DynamoDbSettings`](crate::model::DynamoDbSettings).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        service_access_role_arn: Option<String>,
    }

    impl Builder {
        pub fn service_access_role_arn(mut self, input: impl Into<String>) -> Self {
            self.service_access_role_arn = Some(input.into());
            self
        }
        pub fn set_service_access_role_arn(mut self, input: Option<String>) -> Self {
            self.service_access_role_arn = input;
            self
        }
        /// Builds the `DynamoDbSettings`.
        pub fn build(self) -> crate::model::DynamoDbSettings {
            crate::model::DynamoDbSettings {
                service_access_role_arn: self.service_access_role_arn,
            }
        }
    }
}

/// Settings for endpoints that stage data through S3 with the DMS transfer
/// engine.
#[derive(Clone, Debug, PartialEq)]
pub struct DmsTransferSettings {
    /// The ARN of the role used to access the bucket.
    pub service_access_role_arn: Option<String>,
    /// The name of the staging bucket.
    pub bucket_name: Option<String>,
}

impl DmsTransferSettings {
    /// Creates a builder for `DmsTransferSettings`.
    pub fn builder() -> dms_transfer_settings::Builder {
        dms_transfer_settings::Builder::default()
    }
}

/// Builder for [`DmsTransferSettings`](crate::model::DmsTransferSettings).
pub mod dms_transfer_settings {
    /// Builder for [`DmsTransferSettings`](crate::model::DmsTransferSettings).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        service_access_role_arn: Option<String>,
        bucket_name: Option<String>,
    }

    impl Builder {
        pub fn service_access_role_arn(mut self, input: impl Into<String>) -> Self {
            self.service_access_role_arn = Some(input.into());
            self
        }
        pub fn set_service_access_role_arn(mut self, input: Option<String>) -> Self {
            self.service_access_role_arn = input;
            self
        }
        pub fn bucket_name(mut self, input: impl Into<String>) -> Self {
            self.bucket_name = Some(input.into());
            self
        }
        pub fn set_bucket_name(mut self, input: Option<String>) -> Self {
            self.bucket_name = input;
            self
        }
        /// Builds the `DmsTransferSettings`.
        pub fn build(self) -> crate::model::DmsTransferSettings {
            crate::model::DmsTransferSettings {
                service_access_role_arn: self.service_access_role_arn,
                bucket_name: self.bucket_name,
            }
        }
    }
}

/// Settings for an Apache Kafka target endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct KafkaSettings {
    /// The broker location, as `hostname:port`.
    pub broker: Option<String>,
    /// The topic to publish to. Defaults to `kafka-default-topic` when unset.
    pub topic: Option<String>,
}

impl KafkaSettings {
    /// Creates a builder for `KafkaSettings`.
    pub fn builder() -> kafka_settings::Builder {
        kafka_settings::Builder::default()
    }
}

/// Builder for [`KafkaSettings`](crate::model::KafkaSettings).
pub mod kafka_settings {
    /// Builder for [`KafkaSettings`](crate::model::KafkaSettings).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        broker: Option<String>,
        topic: Option<String>,
    }

    impl Builder {
        pub fn broker(mut self, input: impl Into<String>) -> Self {
            self.broker = Some(input.into());
            self
        }
        pub fn set_broker(mut self, input: Option<String>) -> Self {
            self.broker = input;
            self
        }
        pub fn topic(mut self, input: impl Into<String>) -> Self {
            self.topic = Some(input.into());
            self
        }
        pub fn set_topic(mut self, input: Option<String>) -> Self {
            self.topic = input;
            self
        }
        /// Builds the `KafkaSettings`.
        pub fn build(self) -> crate::model::KafkaSettings {
            crate::model::KafkaSettings {
                broker: self.broker,
                topic: self.topic,
            }
        }
    }
}

/// Settings for an Elasticsearch target endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct ElasticsearchSettings {
    /// The ARN of the role used to access the domain.
    pub service_access_role_arn: Option<String>,
    /// The endpoint URI of the domain.
    pub endpoint_uri: Option<String>,
    /// The maximum percentage of records that can fail during a full load
    /// before the task fails.
    pub full_load_error_percentage: Option<i32>,
    /// The maximum seconds to retry a failed API call.
    pub error_retry_duration: Option<i32>,
}

impl ElasticsearchSettings {
    /// Creates a builder for `ElasticsearchSettings`.
    pub fn builder() -> elasticsearch_settings::Builder {
        elasticsearch_settings::Builder::default()
    }
}

/// Builder for [`ElasticsearchSettings`](crate::model::ElasticsearchSettings).
pub mod elasticsearch_settings {
    /// Builder for [`ElasticsearchSettings`](crate::model::ElasticsearchSettings).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        service_access_role_arn: Option<String>,
        endpoint_uri: Option<String>,
        full_load_error_percentage: Option<i32>,
        error_retry_duration: Option<i32>,
    }

    impl Builder {
        pub fn service_access_role_arn(mut self, input: impl Into<String>) -> Self {
            self.service_access_role_arn = Some(input.into());
            self
        }
        pub fn set_service_access_role_arn(mut self, input: Option<String>) -> Self {
            self.service_access_role_arn = input;
            self
        }
        pub fn endpoint_uri(mut self, input: impl Into<String>) -> Self {
            self.endpoint_uri = Some(input.into());
            self
        }
        pub fn set_endpoint_uri(mut self, input: Option<String>) -> Self {
            self.endpoint_uri = input;
            self
        }
        pub fn full_load_error_percentage(mut self, input: i32) -> Self {
            self.full_load_error_percentage = Some(input);
            self
        }
        pub fn set_full_load_error_percentage(mut self, input: Option<i32>) -> Self {
            self.full_load_error_percentage = input;
            self
        }
        pub fn error_retry_duration(mut self, input: i32) -> Self {
            self.error_retry_duration = Some(input);
            self
        }
        pub fn set_error_retry_duration(mut self, input: Option<i32>) -> Self {
            self.error_retry_duration = input;
            self
        }
        /// Builds the `ElasticsearchSettings`.
        pub fn build(self) -> crate::model::ElasticsearchSettings {
            crate::model::ElasticsearchSettings {
                service_access_role_arn: self.service_access_role_arn,
                endpoint_uri: self.endpoint_uri,
                full_load_error_percentage: self.full_load_error_percentage,
                error_retry_duration: self.error_retry_duration,
            }
        }
    }
}

/// Settings for an Amazon Kinesis Data Streams target endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct KinesisSettings {
    /// The ARN of the stream to publish to.
    pub stream_arn: Option<String>,
    /// The format of the records published to the stream.
    pub message_format: Option<MessageFormatValue>,
    /// The ARN of the role used to access the stream.
    pub service_access_role_arn: Option<String>,
    /// Whether to include transaction details in the output.
    pub include_transaction_details: Option<bool>,
    /// Whether to include the partition value in the output.
    pub include_partition_value: Option<bool>,
    /// Whether to prefix the partition value with schema and table names.
    pub partition_include_schema_table: Option<bool>,
    /// Whether to include DDL operations in the output.
    pub include_table_alter_operations: Option<bool>,
    /// Whether to include control details in the output.
    pub include_control_details: Option<bool>,
    /// Whether to include NULL and empty columns in the output.
    pub include_null_and_empty: Option<bool>,
}

impl KinesisSettings {
    /// Creates a builder for `KinesisSettings`.
    pub fn builder() -> kinesis_settings::Builder {
        kinesis_settings::Builder::default()
    }
}

/// Builder for [`KinesisSettings`](crate::model::KinesisSettings).
pub mod kinesis_settings {
    /// Builder for [`KinesisSettings`](crate::model::KinesisSettings).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        stream_arn: Option<String>,
        message_format: Option<crate::model::MessageFormatValue>,
        service_access_role_arn: Option<String>,
        include_transaction_details: Option<bool>,
        include_partition_value: Option<bool>,
        partition_include_schema_table: Option<bool>,
        include_table_alter_operations: Option<bool>,
        include_control_details: Option<bool>,
        include_null_and_empty: Option<bool>,
    }

    impl Builder {
        pub fn stream_arn(mut self, input: impl Into<String>) -> Self {
            self.stream_arn = Some(input.into());
            self
        }
        pub fn set_stream_arn(mut self, input: Option<String>) -> Self {
            self.stream_arn = input;
            self
        }
        pub fn message_format(mut self, input: crate::model::MessageFormatValue) -> Self {
            self.message_format = Some(input);
            self
        }
        pub fn set_message_format(
            mut self,
            input: Option<crate::model::MessageFormatValue>,
        ) -> Self {
            self.message_format = input;
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
        pub fn include_transaction_details(mut self, input: bool) -> Self {
            self.include_transaction_details = Some(input);
            self
        }
        pub fn set_include_transaction_details(mut self, input: Option<bool>) -> Self {
            self.include_transaction_details = input;
            self
        }
        pub fn include_partition_value(mut self, input: bool) -> Self {
            self.include_partition_value = Some(input);
            self
        }
        pub fn set_include_partition_value(mut self, input: Option<bool>) -> Self {
            self.include_partition_value = input;
            self
        }
        pub fn partition_include_schema_table(mut self, input: bool) -> Self {
            self.partition_include_schema_table = Some(input);
            self
        }
        pub fn set_partition_include_schema_table(mut self, input: Option<bool>) -> Self {
            self.partition_include_schema_table = input;
            self
        }
        pub fn include_table_alter_operations(mut self, input: bool) -> Self {
            self.include_table_alter_operations = Some(input);
            self
        }
        pub fn set_include_table_alter_operations(mut self, input: Option<bool>) -> Self {
            self.include_table_alter_operations = input;
            self
        }
        pub fn include_control_details(mut self, input: bool) -> Self {
            self.include_control_details = Some(input);
            self
        }
        pub fn set_include_control_details(mut self, input: Option<bool>) -> Self {
            self.include_control_details = input;
            self
        }
        pub fn include_null_and_empty(mut self, input: bool) -> Self {
            self.include_null_and_empty = Some(input);
            self
        }
        pub fn set_include_null_and_empty(mut self, input: Option<bool>) -> Self {
            self.include_null_and_empty = input;
            self
        }
        /// Builds the `KinesisSettings`.
        pub fn build(self) -> crate::model::KinesisSettings {
            crate::model::KinesisSettings {
                stream_arn: self.stream_arn,
                message_format: self.message_format,
                service_access_role_arn: self.service_access_role_arn,
                include_transaction_details: self.include_transaction_details,
                include_partition_value: self.include_partition_value,
                partition_include_schema_table: self.partition_include_schema_table,
                include_table_alter_operations: self.include_table_alter_operations,
                include_control_details: self.include_control_details,
                include_null_and_empty: self.include_null_and_empty,
            }
        }
    }
}

/// Settings for an Amazon Neptune target endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct NeptuneSettings {
    /// The ARN of the role used to access the Neptune cluster.
    pub service_access_role_arn: Option<String>,
    /// The bucket migrated graph data is staged in.
    pub s3_bucket_name: Option<String>,
    /// The folder within the staging bucket.
    pub s3_bucket_folder: Option<String>,
    /// The seconds to wait between bulk-load retries.
    pub error_retry_duration: Option<i32>,
    /// The maximum megabytes of staged graph data per file.
    pub max_file_size: Option<i32>,
    /// The number of times to retry a failed bulk load.
    pub max_retry_count: Option<i32>,
    /// Whether IAM authorization is enabled on the cluster.
    pub iam_auth_enabled: Option<bool>,
}

impl NeptuneSettings {
    /// Creates a builder for `NeptuneSettings`.
    pub fn builder() -> neptune_settings::Builder {
        neptune_settings::Builder::default()
    }
}

/// Builder for [`NeptuneSettings`](crate::model::NeptuneSettings).
pub mod neptune_settings {
    /// Builder for [`NeptuneSettings`](crate::model::NeptuneSettings).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        service_access_role_arn: Option<String>,
        s3_bucket_name: Option<String>,
        s3_bucket_folder: Option<String>,
        error_retry_duration: Option<i32>,
        max_file_size: Option<i32>,
        max_retry_count: Option<i32>,
        iam_auth_enabled: Option<bool>,
    }

    impl Builder {
        pub fn service_access_role_arn(mut self, input: impl Into<String>) -> Self {
            self.service_access_role_arn = Some(input.into());
            self
        }
        pub fn set_service_access_role_arn(mut self, input: Option<String>) -> Self {
            self.service_access_role_arn = input;
            self
        }
        pub fn s3_bucket_name(mut self, input: impl Into<String>) -> Self {
            self.s3_bucket_name = Some(input.into());
            self
        }
        pub fn set_s3_bucket_name(mut self, input: Option<String>) -> Self {
            self.s3_bucket_name = input;
            self
        }
        pub fn s3_bucket_folder(mut self, input: impl Into<String>) -> Self {
            self.s3_bucket_folder = Some(input.into());
            self
        }
        pub fn set_s3_bucket_folder(mut self, input: Option<String>) -> Self {
            self.s3_bucket_folder = input;
            self
        }
        pub fn error_retry_duration(mut self, input: i32) -> Self {
            self.error_retry_duration = Some(input);
            self
        }
        pub fn set_error_retry_duration(mut self, input: Option<i32>) -> Self {
            self.error_retry_duration = input;
            self
        }
        pub fn max_file_size(mut self, input: i32) -> Self {
            self.max_file_size = Some(input);
            self
        }
        pub fn set_max_file_size(mut self, input: Option<i32>) -> Self {
            self.max_file_size = input;
            self
        }
        pub fn max_retry_count(mut self, input: i32) -> Self {
            self.max_retry_count = Some(input);
            self
        }
        pub fn set_max_retry_count(mut self, input: Option<i32>) -> Self {
            self.max_retry_count = input;
            self
        }
        pub fn iam_auth_enabled(mut self, input: bool) -> Self {
            self.iam_auth_enabled = Some(input);
            self
        }
        pub fn set_iam_auth_enabled(mut self, input: Option<bool>) -> Self {
            self.iam_auth_enabled = input;
            self
        }
        /// Builds the `NeptuneSettings`.
        pub fn build(self) -> crate::model::NeptuneSettings {
            crate::model::NeptuneSettings {
                service_access_role_arn: self.service_access_role_arn,
                s3_bucket_name: self.s3_bucket_name,
                s3_bucket_folder: self.s3_bucket_folder,
                error_retry_duration: self.error_retry_duration,
                max_file_size: self.max_file_size,
                max_retry_count: self.max_retry_count,
                iam_auth_enabled: self.iam_auth_enabled,
            }
        }
    }
}

/// Settings for a MongoDB source endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct MongoDbSettings {
    /// The user name to authenticate with.
    pub username: Option<String>,
    /// The password to authenticate with.
    pub password: Option<String>,
    /// The server name.
    pub server_name: Option<String>,
    /// The port.
    pub port: Option<i32>,
    /// The database name.
    pub database_name: Option<String>,
    /// The authentication type; when `No`, user name and password are unused.
    pub auth_type: Option<AuthTypeValue>,
    /// The authentication mechanism.
    pub auth_mechanism: Option<AuthMechanismValue>,
    /// The document mode: `None` for document mode, `One` for table mode.
    pub nesting_level: Option<NestingLevelValue>,
    /// In document mode, `"true"` to extract `_id` as a separate column.
    pub extract_doc_id: Option<String>,
    /// In table mode, the number of documents scanned to build the table
    /// definition.
    pub docs_to_investigate: Option<String>,
    /// The authentication database name.
    pub auth_source: Option<String>,
    /// The KMS key used to encrypt the connection parameters.
    pub kms_key_id: Option<String>,
}

impl MongoDbSettings {
    /// Creates a builder for `MongoDbSettings`.
    pub fn builder() -> mongo_db_settings::Builder {
        mongo_db_settings::Builder::default()
    }
}

/// Builder for [`MongoDbSettings`](crate::model::MongoDbSettings).
pub mod mongo_db_settings {
    /// Builder for [`MongoDbSettings`](crate::model::MongoDbSettings).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        username: Option<String>,
        password: Option<String>,
        server_name: Option<String>,
        port: Option<i32>,
        database_name: Option<String>,
        auth_type: Option<crate::model::AuthTypeValue>,
        auth_mechanism: Option<crate::model::AuthMechanismValue>,
        nesting_level: Option<crate::model::NestingLevelValue>,
        extract_doc_id: Option<String>,
        docs_to_investigate: Option<String>,
        auth_source: Option<String>,
        kms_key_id: Option<String>,
    }

    impl Builder {
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
        pub fn auth_type(mut self, input: crate::model::AuthTypeValue) -> Self {
            self.auth_type = Some(input);
            self
        }
        pub fn set_auth_type(mut self, input: Option<crate::model::AuthTypeValue>) -> Self {
            self.auth_type = input;
            self
        }
        pub fn auth_mechanism(mut self, input: crate::model::AuthMechanismValue) -> Self {
            self.auth_mechanism = Some(input);
            self
        }
        pub fn set_auth_mechanism(
            mut self,
            input: Option<crate::model::AuthMechanismValue>,
        ) -> Self {
            self.auth_mechanism = input;
            self
        }
        pub fn nesting_level(mut self, input: crate::model::NestingLevelValue) -> Self {
            self.nesting_level = Some(input);
            self
        }
        pub fn set_nesting_level(
            mut self,
            input: Option<crate::model::NestingLevelValue>,
        ) -> Self {
            self.nesting_level = input;
            self
        }
        pub fn extract_doc_id(mut self, input: impl Into<String>) -> Self {
            self.extract_doc_id = Some(input.into());
            self
        }
        pub fn set_extract_doc_id(mut self, input: Option<String>) -> Self {
            self.extract_doc_id = input;
            self
        }
        pub fn docs_to_investigate(mut self, input: impl Into<String>) -> Self {
            self.docs_to_investigate = Some(input.into());
            self
        }
        pub fn set_docs_to_investigate(mut self, input: Option<String>) -> Self {
            self.docs_to_investigate = input;
            self
        }
        pub fn auth_source(mut self, input: impl Into<String>) -> Self {
            self.auth_source = Some(input.into());
            self
        }
        pub fn set_auth_source(mut self, input: Option<String>) -> Self {
            self.auth_source = input;
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
        /// Builds the `MongoDbSettings`.
        pub fn build(self) -> crate::model::MongoDbSettings {
            crate::model::MongoDbSettings {
                username: self.username,
                password: self.password,
                server_name: self.server_name,
                port: self.port,
                database_name: self.database_name,
                auth_type: self.auth_type,
                auth_mechanism: self.auth_mechanism,
                nesting_level: self.nesting_level,
                extract_doc_id: self.extract_doc_id,
                docs_to_investigate: self.docs_to_investigate,
                auth_source: self.auth_source,
                kms_key_id: self.kms_key_id,
            }
        }
    }
}

/// Settings for an S3 source or target endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct S3Settings {
    /// The ARN of the role used to access the bucket.
    pub service_access_role_arn: Option<String>,
    /// The external table definition document.
    pub external_table_definition: Option<String>,
    /// The row delimiter for CSV output. Defaults to newline.
    pub csv_row_delimiter: Option<String>,
    /// The column delimiter for CSV output. Defaults to comma.
    pub csv_delimiter: Option<String>,
    /// The folder within the bucket.
    pub bucket_folder: Option<String>,
    /// The bucket name.
    pub bucket_name: Option<String>,
    /// The compression applied to target files.
    pub compression_type: Option<CompressionTypeValue>,
    /// The server-side encryption mode for target files.
    pub encryption_mode: Option<EncryptionModeValue>,
    /// The KMS key used with `SseKms` encryption.
    pub server_side_encryption_kms_key_id: Option<String>,
    /// The output format of target files.
    pub data_format: Option<DataFormatValue>,
    /// The Parquet encoding type.
    pub encoding_type: Option<EncodingTypeValue>,
    /// The maximum Parquet dictionary page size, in bytes.
    pub dict_page_size_limit: Option<i32>,
    /// The number of rows in a Parquet row group.
    pub row_group_length: Option<i32>,
    /// The Parquet data page size, in bytes.
    pub data_page_size: Option<i32>,
    /// The Parquet format version.
    pub parquet_version: Option<ParquetVersionValue>,
    /// Whether to write statistics into Parquet pages.
    pub enable_statistics: Option<bool>,
    /// Whether full-load rows carry an `I` operation column.
    pub include_op_for_full_load: Option<bool>,
    /// Whether CDC output records only INSERT operations.
    pub cdc_inserts_only: Option<bool>,
    /// The name of a timestamp column to add to target files.
    pub timestamp_column_name: Option<String>,
}

impl S3Settings {
    /// Creates a builder for `S3Settings`.
    pub fn builder() -> s3_settings::Builder {
        s3_settings::Builder::default()
    }
}

/// Builder for [`S3Settings`](crate::model::S3Settings).
pub mod s3_settings {
    /// Builder for [`S3Settings`](crate::model::S3Settings).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        service_access_role_arn: Option<String>,
        external_table_definition: Option<String>,
        csv_row_delimiter: Option<String>,
        csv_delimiter: Option<String>,
        bucket_folder: Option<String>,
        bucket_name: Option<String>,
        compression_type: Option<crate::model::CompressionTypeValue>,
        encryption_mode: Option<crate::model::EncryptionModeValue>,
        server_side_encryption_kms_key_id: Option<String>,
        data_format: Option<crate::model::DataFormatValue>,
        encoding_type: Option<crate::model::EncodingTypeValue>,
        dict_page_size_limit: Option<i32>,
        row_group_length: Option<i32>,
        data_page_size: Option<i32>,
        parquet_version: Option<crate::model::ParquetVersionValue>,
        enable_statistics: Option<bool>,
        include_op_for_full_load: Option<bool>,
        cdc_inserts_only: Option<bool>,
        timestamp_column_name: Option<String>,
    }

    impl Builder {
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
        pub fn csv_row_delimiter(mut self, input: impl Into<String>) -> Self {
            self.csv_row_delimiter = Some(input.into());
            self
        }
        pub fn set_csv_row_delimiter(mut self, input: Option<String>) -> Self {
            self.csv_row_delimiter = input;
            self
        }
        pub fn csv_delimiter(mut self, input: impl Into<String>) -> Self {
            self.csv_delimiter = Some(input.into());
            self
        }
        pub fn set_csv_delimiter(mut self, input: Option<String>) -> Self {
            self.csv_delimiter = input;
            self
        }
        pub fn bucket_folder(mut self, input: impl Into<String>) -> Self {
            self.bucket_folder = Some(input.into());
            self
        }
        pub fn set_bucket_folder(mut self, input: Option<String>) -> Self {
            self.bucket_folder = input;
            self
        }
        pub fn bucket_name(mut self, input: impl Into<String>) -> Self {
            self.bucket_name = Some(input.into());
            self
        }
        pub fn set_bucket_name(mut self, input: Option<String>) -> Self {
            self.bucket_name = input;
            self
        }
        pub fn compression_type(mut self, input: crate::model::CompressionTypeValue) -> Self {
            self.compression_type = Some(input);
            self
        }
        pub fn set_compression_type(
            mut self,
            input: Option<crate::model::CompressionTypeValue>,
        ) -> Self {
            self.compression_type = input;
            self
        }
        pub fn encryption_mode(mut self, input: crate::model::EncryptionModeValue) -> Self {
            self.encryption_mode = Some(input);
            self
        }
        pub fn set_encryption_mode(
            mut self,
            input: Option<crate::model::EncryptionModeValue>,
        ) -> Self {
            self.encryption_mode = input;
            self
        }
        pub fn server_side_encryption_kms_key_id(mut self, input: impl Into<String>) -> Self {
            self.server_side_encryption_kms_key_id = Some(input.into());
            self
        }
        pub fn set_server_side_encryption_kms_key_id(mut self, input: Option<String>) -> Self {
            self.server_side_encryption_kms_key_id = input;
            self
        }
        pub fn data_format(mut self, input: crate::model::DataFormatValue) -> Self {
            self.data_format = Some(input);
            self
        }
        pub fn set_data_format(mut self, input: Option<crate::model::DataFormatValue>) -> Self {
            self.data_format = input;
            self
        }
        pub fn encoding_type(mut self, input: crate::model::EncodingTypeValue) -> Self {
            self.encoding_type = Some(input);
            self
        }
        pub fn set_encoding_type(
            mut self,
            input: Option<crate::model::EncodingTypeValue>,
        ) -> Self {
            self.encoding_type = input;
            self
        }
        pub fn dict_page_size_limit(mut self, input: i32) -> Self {
            self.dict_page_size_limit = Some(input);
            self
        }
        pub fn set_dict_page_size_limit(mut self, input: Option<i32>) -> Self {
            self.dict_page_size_limit = input;
            self
        }
        pub fn row_group_length(mut self, input: i32) -> Self {
            self.row_group_length = Some(input);
            self
        }
        pub fn set_row_group_length(mut self, input: Option<i32>) -> Self {
            self.row_group_length = input;
            self
        }
        pub fn data_page_size(mut self, input: i32) -> Self {
            self.data_page_size = Some(input);
            self
        }
        pub fn set_data_page_size(mut self, input: Option<i32>) -> Self {
            self.data_page_size = input;
            self
        }
        pub fn parquet_version(mut self, input: crate::model::ParquetVersionValue) -> Self {
            self.parquet_version = Some(input);
            self
        }
        pub fn set_parquet_version(
            mut self,
            input: Option<crate::model::ParquetVersionValue>,
        ) -> Self {
            self.parquet_version = input;
            self
        }
        pub fn enable_statistics(mut self, input: bool) -> Self {
            self.enable_statistics = Some(input);
            self
        }
        pub fn set_enable_statistics(mut self, input: Option<bool>) -> Self {
            self.enable_statistics = input;
            self
        }
        pub fn include_op_for_full_load(mut self, input: bool) -> Self {
            self.include_op_for_full_load = Some(input);
            self
        }
        pub fn set_include_op_for_full_load(mut self, input: Option<bool>) -> Self {
            self.include_op_for_full_load = input;
            self
        }
        pub fn cdc_inserts_only(mut self, input: bool) -> Self {
            self.cdc_inserts_only = Some(input);
            self
        }
        pub fn set_cdc_inserts_only(mut self, input: Option<bool>) -> Self {
            self.cdc_inserts_only = input;
            self
        }
        pub fn timestamp_column_name(mut self, input: impl Into<String>) -> Self {
            self.timestamp_column_name = Some(input.into());
            self
        }
        pub fn set_timestamp_column_name(mut self, input: Option<String>) -> Self {
            self.timestamp_column_name = input;
            self
        }
        /// Builds the `S3Settings`.
        pub fn build(self) -> crate::model::S3Settings {
            crate::model::S3Settings {
                service_access_role_arn: self.service_access_role_arn,
                external_table_definition: self.external_table_definition,
                csv_row_delimiter: self.csv_row_delimiter,
                csv_delimiter: self.csv_delimiter,
                bucket_folder: self.bucket_folder,
                bucket_name: self.bucket_name,
                compression_type: self.compression_type,
                encryption_mode: self.encryption_mode,
                server_side_encryption_kms_key_id: self.server_side_encryption_kms_key_id,
                data_format: self.data_format,
                encoding_type: self.encoding_type,
                dict_page_size_limit: self.dict_page_size_limit,
                row_group_length: self.row_group_length,
                data_page_size: self.data_page_size,
                parquet_version: self.parquet_version,
                enable_statistics: self.enable_statistics,
                include_op_for_full_load: self.include_op_for_full_load,
                cdc_inserts_only: self.cdc_inserts_only,
                timestamp_column_name: self.timestamp_column_name,
            }
        }
    }
}

/// Settings for an Amazon Redshift target endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct RedshiftSettings {
    /// Whether to accept any date format during loads.
    pub accept_any_date: Option<bool>,
    /// SQL to run after every connection is opened.
    pub after_connect_script: Option<String>,
    /// The folder within the intermediate bucket.
    pub bucket_folder: Option<String>,
    /// The intermediate bucket name.
    pub bucket_name: Option<String>,
    /// The connection timeout, in seconds.
    pub connection_timeout: Option<i32>,
    /// The database name.
    pub database_name: Option<String>,
    /// Whether to write empty CHAR/VARCHAR values as NULL.
    pub empty_as_null: Option<bool>,
    /// The encryption mode for intermediate files.
    pub encryption_mode: Option<EncryptionModeValue>,
    /// The number of threads used to upload a single file.
    pub file_transfer_upload_streams: Option<i32>,
    /// The load timeout, in seconds.
    pub load_timeout: Option<i32>,
    /// The maximum megabytes per intermediate file.
    pub max_file_size: Option<i32>,
    /// The password to authenticate with.
    pub password: Option<String>,
    /// The port.
    pub port: Option<i32>,
    /// Whether to strip surrounding quotes during loads.
    pub remove_quotes: Option<bool>,
    /// The server name.
    pub server_name: Option<String>,
    /// The ARN of the role used to access the cluster.
    pub service_access_role_arn: Option<String>,
    /// The KMS key used with `SseKms` encryption.
    pub server_side_encryption_kms_key_id: Option<String>,
    /// Whether to trim trailing blanks from VARCHAR values.
    pub trim_blanks: Option<bool>,
    /// Whether to truncate oversized column data during loads.
    pub truncate_columns: Option<bool>,
    /// The user name to authenticate with.
    pub username: Option<String>,
    /// The write buffer size, in kilobytes.
    pub write_buffer_size: Option<i32>,
}

impl RedshiftSettings {
    /// Creates a builder for `RedshiftSettings`.
    pub fn builder() -> redshift_settings::Builder {
        redshift_settings::Builder::default()
    }
}

/// Builder for [`RedshiftSettings`](crate::model::RedshiftSettings).
pub mod redshift_settings {
    /// Builder for [`RedshiftSettings`](crate::model::RedshiftSettings).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        accept_any_date: Option<bool>,
        after_connect_script: Option<String>,
        bucket_folder: Option<String>,
        bucket_name: Option<String>,
        connection_timeout: Option<i32>,
        database_name: Option<String>,
        empty_as_null: Option<bool>,
        encryption_mode: Option<crate::model::EncryptionModeValue>,
        file_transfer_upload_streams: Option<i32>,
        load_timeout: Option<i32>,
        max_file_size: Option<i32>,
        password: Option<String>,
        port: Option<i32>,
        remove_quotes: Option<bool>,
        server_name: Option<String>,
        service_access_role_arn: Option<String>,
        server_side_encryption_kms_key_id: Option<String>,
        trim_blanks: Option<bool>,
        truncate_columns: Option<bool>,
        username: Option<String>,
        write_buffer_size: Option<i32>,
    }

    impl Builder {
        pub fn accept_any_date(mut self, input: bool) -> Self {
            self.accept_any_date = Some(input);
            self
        }
        pub fn set_accept_any_date(mut self, input: Option<bool>) -> Self {
            self.accept_any_date = input;
            self
        }
        pub fn after_connect_script(mut self, input: impl Into<String>) -> Self {
            self.after_connect_script = Some(input.into());
            self
        }
        pub fn set_after_connect_script(mut self, input: Option<String>) -> Self {
            self.after_connect_script = input;
            self
        }
        pub fn bucket_folder(mut self, input: impl Into<String>) -> Self {
            self.bucket_folder = Some(input.into());
            self
        }
        pub fn set_bucket_folder(mut self, input: Option<String>) -> Self {
            self.bucket_folder = input;
            self
        }
        pub fn bucket_name(mut self, input: impl Into<String>) -> Self {
            self.bucket_name = Some(input.into());
            self
        }
        pub fn set_bucket_name(mut self, input: Option<String>) -> Self {
            self.bucket_name = input;
            self
        }
        pub fn connection_timeout(mut self, input: i32) -> Self {
            self.connection_timeout = Some(input);
            self
        }
        pub fn set_connection_timeout(mut self, input: Option<i32>) -> Self {
            self.connection_timeout = input;
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
        pub fn empty_as_null(mut self, input: bool) -> Self {
            self.empty_as_null = Some(input);
            self
        }
        pub fn set_empty_as_null(mut self, input: Option<bool>) -> Self {
            self.empty_as_null = input;
            self
        }
        pub fn encryption_mode(mut self, input: crate::model::EncryptionModeValue) -> Self {
            self.encryption_mode = Some(input);
            self
        }
        pub fn set_encryption_mode(
            mut self,
            input: Option<crate::model::EncryptionModeValue>,
        ) -> Self {
            self.encryption_mode = input;
            self
        }
        pub fn file_transfer_upload_streams(mut self, input: i32) -> Self {
            self.file_transfer_upload_streams = Some(input);
            self
        }
        pub fn set_file_transfer_upload_streams(mut self, input: Option<i32>) -> Self {
            self.file_transfer_upload_streams = input;
            self
        }
        pub fn load_timeout(mut self, input: i32) -> Self {
            self.load_timeout = Some(input);
            self
        }
        pub fn set_load_timeout(mut self, input: Option<i32>) -> Self {
            self.load_timeout = input;
            self
        }
        pub fn max_file_size(mut self, input: i32) -> Self {
            self.max_file_size = Some(input);
            self
        }
        pub fn set_max_file_size(mut self, input: Option<i32>) -> Self {
            self.max_file_size = input;
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
        pub fn port(mut self, input: i32) -> Self {
            self.port = Some(input);
            self
        }
        pub fn set_port(mut self, input: Option<i32>) -> Self {
            self.port = input;
            self
        }
        pub fn remove_quotes(mut self, input: bool) -> Self {
            self.remove_quotes = Some(input);
            self
        }
        pub fn set_remove_quotes(mut self, input: Option<bool>) -> Self {
            self.remove_quotes = input;
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
        pub fn service_access_role_arn(mut self, input: impl Into<String>) -> Self {
            self.service_access_role_arn = Some(input.into());
            self
        }
        pub fn set_service_access_role_arn(mut self, input: Option<String>) -> Self {
            self.service_access_role_arn = input;
            self
        }
        pub fn server_side_encryption_kms_key_id(mut self, input: impl Into<String>) -> Self {
            self.server_side_encryption_kms_key_id = Some(input.into());
            self
        }
        pub fn set_server_side_encryption_kms_key_id(mut self, input: Option<String>) -> Self {
            self.server_side_encryption_kms_key_id = input;
            self
        }
        pub fn trim_blanks(mut self, input: bool) -> Self {
            self.trim_blanks = Some(input);
            self
        }
        pub fn set_trim_blanks(mut self, input: Option<bool>) -> Self {
            self.trim_blanks = input;
            self
        }
        pub fn truncate_columns(mut self, input: bool) -> Self {
            self.truncate_columns = Some(input);
            self
        }
        pub fn set_truncate_columns(mut self, input: Option<bool>) -> Self {
            self.truncate_columns = input;
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
        pub fn write_buffer_size(mut self, input: i32) -> Self {
            self.write_buffer_size = Some(input);
            self
        }
        pub fn set_write_buffer_size(mut self, input: Option<i32>) -> Self {
            self.write_buffer_size = input;
            self
        }
        /// Builds the `RedshiftSettings`.
        pub fn build(self) -> crate::model::RedshiftSettings {
            crate::model::RedshiftSettings {
                accept_any_date: self.accept_any_date,
                after_connect_script: self.after_connect_script,
                bucket_folder: self.bucket_folder,
                bucket_name: self.bucket_name,
                connection_timeout: self.connection_timeout,
                database_name: self.database_name,
                empty_as_null: self.empty_as_null,
                encryption_mode: self.encryption_mode,
                file_transfer_upload_streams: self.file_transfer_upload_streams,
                load_timeout: self.load_timeout,
                max_file_size: self.max_file_size,
                password: self.password,
                port: self.port,
                remove_quotes: self.remove_quotes,
                server_name: self.server_name,
                service_access_role_arn: self.service_access_role_arn,
                server_side_encryption_kms_key_id: self.server_side_encryption_kms_key_id,
                trim_blanks: self.trim_blanks,
                truncate_columns: self.truncate_columns,
                username: self.username,
                write_buffer_size: self.write_buffer_size,
            }
        }
    }
}

/// A source or target endpoint, as described by the service.
///
/// At most one of the engine-specific settings objects is populated,
/// matching `engine_name`.
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoint {
    /// The user-assigned endpoint identifier.
    pub endpoint_identifier: Option<String>,
    /// Whether this is a source or target endpoint.
    pub endpoint_type: Option<ReplicationEndpointTypeValue>,
    /// The database engine name, e.g. `mysql`, `postgres`, `kinesis`.
    pub engine_name: Option<String>,
    /// The human-readable form of `engine_name`.
    pub engine_display_name: Option<String>,
    /// The user name used to connect.
    pub username: Option<String>,
    /// The server name.
    pub server_name: Option<String>,
    /// The port.
    pub port: Option<i32>,
    /// The database name.
    pub database_name: Option<String>,
    /// Extra attributes passed to the connection.
    pub extra_connection_attributes: Option<String>,
    /// The endpoint status.
    pub status: Option<String>,
    /// The KMS key used to encrypt the connection parameters.
    pub kms_key_id: Option<String>,
    /// The ARN of the endpoint.
    pub endpoint_arn: Option<String>,
    /// The ARN of the certificate used for SSL.
    pub certificate_arn: Option<String>,
    /// The SSL mode in use.
    pub ssl_mode: Option<DmsSslModeValue>,
    /// The ARN of the service access role, for engines that need one.
    pub service_access_role_arn: Option<String>,
    /// The external table definition document.
    pub external_table_definition: Option<String>,
    /// An identifier correlating this endpoint with its tasks.
    pub external_id: Option<String>,
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

impl Endpoint {
    /// Creates a builder for `Endpoint`.
    pub fn builder() -> endpoint::Builder {
        endpoint::Builder::default()
    }
}

/// Builder for [`Endpoint`](crate::model::Endpoint).
pub mod endpoint {
    /// Builder for [`Endpoint`](crate::model::Endpoint).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        endpoint_identifier: Option<String>,
        endpoint_type: Option<crate::model::ReplicationEndpointTypeValue>,
        engine_name: Option<String>,
        engine_display_name: Option<String>,
        username: Option<String>,
        server_name: Option<String>,
        port: Option<i32>,
        database_name: Option<String>,
        extra_connection_attributes: Option<String>,
        status: Option<String>,
        kms_key_id: Option<String>,
        endpoint_arn: Option<String>,
        certificate_arn: Option<String>,
        ssl_mode: Option<crate::model::DmsSslModeValue>,
        service_access_role_arn: Option<String>,
        external_table_definition: Option<String>,
        external_id: Option<String>,
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
        pub fn engine_display_name(mut self, input: impl Into<String>) -> Self {
            self.engine_display_name = Some(input.into());
            self
        }
        pub fn set_engine_display_name(mut self, input: Option<String>) -> Self {
            self.engine_display_name = input;
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
        pub fn status(mut self, input: impl Into<String>) -> Self {
            self.status = Some(input.into());
            self
        }
        pub fn set_status(mut self, input: Option<String>) -> Self {
            self.status = input;
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
        pub fn endpoint_arn(mut self, input: impl Into<String>) -> Self {
            self.endpoint_arn = Some(input.into());
            self
        }
        pub fn set_endpoint_arn(mut self, input: Option<String>) -> Self {
            self.endpoint_arn = input;
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
        pub fn external_id(mut self, input: impl Into<String>) -> Self {
            self.external_id = Some(input.into());
            self
        }
        pub fn set_external_id(mut self, input: Option<String>) -> Self {
            self.external_id = input;
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
        /// Builds the `Endpoint`.
        pub fn build(self) -> crate::model::Endpoint {
            crate::model::Endpoint {
                endpoint_identifier: self.endpoint_identifier,
                endpoint_type: self.endpoint_type,
                engine_name: self.engine_name,
                engine_display_name: self.engine_display_name,
                username: self.username,
                server_name: self.server_name,
                port: self.port,
                database_name: self.database_name,
                extra_connection_attributes: self.extra_connection_attributes,
                status: self.status,
                kms_key_id: self.kms_key_id,
                endpoint_arn: self.endpoint_arn,
                certificate_arn: self.certificate_arn,
                ssl_mode: self.ssl_mode,
                service_access_role_arn: self.service_access_role_arn,
                external_table_definition: self.external_table_definition,
                external_id: self.external_id,
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

/// The migration mode of a replication task.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum MigrationTypeValue {
    /// `cdc`
    Cdc,
    /// `full-load`
    FullLoad,
    /// `full-load-and-cdc`
    FullLoadAndCdc,
}

impl MigrationTypeValue {
    /// The wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            MigrationTypeValue::Cdc => "cdc",
            MigrationTypeValue::FullLoad => "full-load",
            MigrationTypeValue::FullLoadAndCdc => "full-load-and-cdc",
        }
    }
    /// Every known wire literal.
    pub fn values() -> &'static [&'static str] {
        &["cdc", "full-load", "full-load-and-cdc"]
    }
}

impl FromStr for MigrationTypeValue {
    type Err = InvalidEnumValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cdc" => Ok(MigrationTypeValue::Cdc),
            "full-load" => Ok(MigrationTypeValue::FullLoad),
            "full-load-and-cdc" => Ok(MigrationTypeValue::FullLoadAndCdc),
            other => Err(InvalidEnumValue::new("MigrationTypeValue", other)),
        }
    }
}

/// Whether an endpoint is the source or the target of replication.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ReplicationEndpointTypeValue {
    /// `source`
    Source,
    /// `target`
    Target,
}

impl ReplicationEndpointTypeValue {
    /// The wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplicationEndpointTypeValue::Source => "source",
            ReplicationEndpointTypeValue::Target => "target",
        }
    }
    /// Every known wire literal.
    pub fn values() -> &'static [&'static str] {
        &["source", "target"]
    }
}

impl FromStr for ReplicationEndpointTypeValue {
    type Err = InvalidEnumValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "source" => Ok(ReplicationEndpointTypeValue::Source),
            "target" => Ok(ReplicationEndpointTypeValue::Target),
            other => Err(InvalidEnumValue::new("ReplicationEndpointTypeValue", other)),
        }
    }
}

/// The SSL mode used to connect to an endpoint.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DmsSslModeValue {
    /// `none`
    None,
    /// `require`
    Require,
    /// `verify-ca`
    VerifyCa,
    /// `verify-full`
    VerifyFull,
}

impl DmsSslModeValue {
    /// The wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            DmsSslModeValue::None => "none",
            DmsSslModeValue::Require => "require",
            DmsSslModeValue::VerifyCa => "verify-ca",
            DmsSslModeValue::VerifyFull => "verify-full",
        }
    }
    /// Every known wire literal.
    pub fn values() -> &'static [&'static str] {
        &["none", "require", "verify-ca", "verify-full"]
    }
}

impl FromStr for DmsSslModeValue {
    type Err = InvalidEnumValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(DmsSslModeValue::None),
            "require" => Ok(DmsSslModeValue::Require),
            "verify-ca" => Ok(DmsSslModeValue::VerifyCa),
            "verify-full" => Ok(DmsSslModeValue::VerifyFull),
            other => Err(InvalidEnumValue::new("DmsSslModeValue", other)),
        }
    }
}

/// The MongoDB authentication type.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AuthTypeValue {
    /// `no`
    No,
    /// `password`
    Password,
}

impl AuthTypeValue {
    /// The wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthTypeValue::No => "no",
            AuthTypeValue::Password => "password",
        }
    }
    /// Every known wire literal.
    pub fn values() -> &'static [&'static str] {
        &["no", "password"]
    }
}

impl FromStr for AuthTypeValue {
    type Err = InvalidEnumValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no" => Ok(AuthTypeValue::No),
            "password" => Ok(AuthTypeValue::Password),
            other => Err(InvalidEnumValue::new("AuthTypeValue", other)),
        }
    }
}

/// The MongoDB authentication mechanism.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AuthMechanismValue {
    /// `default`
    Default,
    /// `mongodb_cr`
    MongodbCr,
    /// `scram_sha_1`
    ScramSha1,
}

impl AuthMechanismValue {
    /// The wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMechanismValue::Default => "default",
            AuthMechanismValue::MongodbCr => "mongodb_cr",
            AuthMechanismValue::ScramSha1 => "scram_sha_1",
        }
    }
    /// Every known wire literal.
    pub fn values() -> &'static [&'static str] {
        &["default", "mongodb_cr", "scram_sha_1"]
    }
}

impl FromStr for AuthMechanismValue {
    type Err = InvalidEnumValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(AuthMechanismValue::Default),
            "mongodb_cr" => Ok(AuthMechanismValue::MongodbCr),
            "scram_sha_1" => Ok(AuthMechanismValue::ScramSha1),
            other => Err(InvalidEnumValue::new("AuthMechanismValue", other)),
        }
    }
}

/// The MongoDB document nesting mode.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NestingLevelValue {
    /// `none`
    None,
    /// `one`
    One,
}

impl NestingLevelValue {
    /// The wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            NestingLevelValue::None => "none",
            NestingLevelValue::One => "one",
        }
    }
    /// Every known wire literal.
    pub fn values() -> &'static [&'static str] {
        &["none", "one"]
    }
}

impl FromStr for NestingLevelValue {
    type Err = InvalidEnumValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(NestingLevelValue::None),
            "one" => Ok(NestingLevelValue::One),
            other => Err(InvalidEnumValue::new("NestingLevelValue", other)),
        }
    }
}

/// The record format published to a stream.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum MessageFormatValue {
    /// `json`
    Json,
    /// `json-unformatted`
    JsonUnformatted,
}

impl MessageFormatValue {
    /// The wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageFormatValue::Json => "json",
            MessageFormatValue::JsonUnformatted => "json-unformatted",
        }
    }
    /// Every known wire literal.
    pub fn values() -> &'static [&'static str] {
        &["json", "json-unformatted"]
    }
}

impl FromStr for MessageFormatValue {
    type Err = InvalidEnumValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(MessageFormatValue::Json),
            "json-unformatted" => Ok(MessageFormatValue::JsonUnformatted),
            other => Err(InvalidEnumValue::new("MessageFormatValue", other)),
        }
    }
}

/// The compression applied to files written to S3.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum CompressionTypeValue {
    /// `gzip`
    Gzip,
    /// `none`
    None,
}

impl CompressionTypeValue {
    /// The wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompressionTypeValue::Gzip => "gzip",
            CompressionTypeValue::None => "none",
        }
    }
    /// Every known wire literal.
    pub fn values() -> &'static [&'static str] {
        &["gzip", "none"]
    }
}

impl FromStr for CompressionTypeValue {
    type Err = InvalidEnumValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gzip" => Ok(CompressionTypeValue::Gzip),
            "none" => Ok(CompressionTypeValue::None),
            other => Err(InvalidEnumValue::new("CompressionTypeValue", other)),
        }
    }
}

/// The server-side encryption mode for files written to S3.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum EncryptionModeValue {
    /// `sse-kms`
    SseKms,
    /// `sse-s3`
    SseS3,
}

impl EncryptionModeValue {
    /// The wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            EncryptionModeValue::SseKms => "sse-kms",
            EncryptionModeValue::SseS3 => "sse-s3",
        }
    }
    /// Every known wire literal.
    pub fn values() -> &'static [&'static str] {
        &["sse-kms", "sse-s3"]
    }
}

impl FromStr for EncryptionModeValue {
    type Err = InvalidEnumValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sse-kms" => Ok(EncryptionModeValue::SseKms),
            "sse-s3" => Ok(EncryptionModeValue::SseS3),
            other => Err(InvalidEnumValue::new("EncryptionModeValue", other)),
        }
    }
}

/// The output format of files written to S3.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DataFormatValue {
    /// `csv`
    Csv,
    /// `parquet`
    Parquet,
}

impl DataFormatValue {
    /// The wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataFormatValue::Csv => "csv",
            DataFormatValue::Parquet => "parquet",
        }
    }
    /// Every known wire literal.
    pub fn values() -> &'static [&'static str] {
        &["csv", "parquet"]
    }
}

impl FromStr for DataFormatValue {
    type Err = InvalidEnumValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(DataFormatValue::Csv),
            "parquet" => Ok(DataFormatValue::Parquet),
            other => Err(InvalidEnumValue::new("DataFormatValue", other)),
        }
    }
}

/// The Parquet encoding type.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum EncodingTypeValue {
    /// `plain`
    Plain,
    /// `plain-dictionary`
    PlainDictionary,
    /// `rle-dictionary`
    RleDictionary,
}

impl EncodingTypeValue {
    /// The wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingTypeValue::Plain => "plain",
            EncodingTypeValue::PlainDictionary => "plain-dictionary",
            EncodingTypeValue::RleDictionary => "rle-dictionary",
        }
    }
    /// Every known wire literal.
    pub fn values() -> &'static [&'static str] {
        &["plain", "plain-dictionary", "rle-dictionary"]
    }
}

impl FromStr for EncodingTypeValue {
    type Err = InvalidEnumValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(EncodingTypeValue::Plain),
            "plain-dictionary" => Ok(EncodingTypeValue::PlainDictionary),
            "rle-dictionary" => Ok(EncodingTypeValue::RleDictionary),
            other => Err(InvalidEnumValue::new("EncodingTypeValue", other)),
        }
    }
}

/// The Parquet format version.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ParquetVersionValue {
    /// `parquet-1-0`
    Parquet10,
    /// `parquet-2-0`
    Parquet20,
}

impl ParquetVersionValue {
    /// The wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParquetVersionValue::Parquet10 => "parquet-1-0",
            ParquetVersionValue::Parquet20 => "parquet-2-0",
        }
    }
    /// Every known wire literal.
    pub fn values() -> &'static [&'static str] {
        &["parquet-1-0", "parquet-2-0"]
    }
}

impl FromStr for ParquetVersionValue {
    type Err = InvalidEnumValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parquet-1-0" => Ok(ParquetVersionValue::Parquet10),
            "parquet-2-0" => Ok(ParquetVersionValue::Parquet20),
            other => Err(InvalidEnumValue::new("ParquetVersionValue", other)),
        }
    }
}

/// How a replication task should begin processing.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum StartReplicationTaskTypeValue {
    /// `reload-target`
    ReloadTarget,
    /// `resume-processing`
    ResumeProcessing,
    /// `start-replication`
    StartReplication,
}

impl StartReplicationTaskTypeValue {
    /// The wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            StartReplicationTaskTypeValue::ReloadTarget => "reload-target",
            StartReplicationTaskTypeValue::ResumeProcessing => "resume-processing",
            StartReplicationTaskTypeValue::StartReplication => "start-replication",
        }
    }
    /// Every known wire literal.
    pub fn values() -> &'static [&'static str] {
        &["reload-target", "resume-processing", "start-replication"]
    }
}

impl FromStr for StartReplicationTaskTypeValue {
    type Err = InvalidEnumValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reload-target" => Ok(StartReplicationTaskTypeValue::ReloadTarget),
            "resume-processing" => Ok(StartReplicationTaskTypeValue::ResumeProcessing),
            "start-replication" => Ok(StartReplicationTaskTypeValue::StartReplication),
            other => Err(InvalidEnumValue::new("StartReplicationTaskTypeValue", other)),
        }
    }
}

/// The state of a schema refresh.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum RefreshSchemasStatusTypeValue {
    /// `failed`
    Failed,
    /// `refreshing`
    Refreshing,
    /// `successful`
    Successful,
}

impl RefreshSchemasStatusTypeValue {
    /// The wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            RefreshSchemasStatusTypeValue::Failed => "failed",
            RefreshSchemasStatusTypeValue::Refreshing => "refreshing",
            RefreshSchemasStatusTypeValue::Successful => "successful",
        }
    }
    /// Every known wire literal.
    pub fn values() -> &'static [&'static str] {
        &["failed", "refreshing", "successful"]
    }
}

impl FromStr for RefreshSchemasStatusTypeValue {
    type Err = InvalidEnumValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "failed" => Ok(RefreshSchemasStatusTypeValue::Failed),
            "refreshing" => Ok(RefreshSchemasStatusTypeValue::Refreshing),
            "successful" => Ok(RefreshSchemasStatusTypeValue::Successful),
            other => Err(InvalidEnumValue::new("RefreshSchemasStatusTypeValue", other)),
        }
    }
}

/// The kind of resource an event applies to.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SourceType {
    /// `replication-instance`
    ReplicationInstance,
}

impl SourceType {
    /// The wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::ReplicationInstance => "replication-instance",
        }
    }
    /// Every known wire literal.
    pub fn values() -> &'static [&'static str] {
        &["replication-instance"]
    }
}

impl FromStr for SourceType {
    type Err = InvalidEnumValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "replication-instance" => Ok(SourceType::ReplicationInstance),
            other => Err(InvalidEnumValue::new("SourceType", other)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn list_builders_append_across_calls() {
        let group = ReplicationSubnetGroup::builder()
            .subnets(Subnet::builder().subnet_identifier("subnet-1").build())
            .subnets(Subnet::builder().subnet_identifier("subnet-2").build())
            .subnets(Subnet::builder().subnet_identifier("subnet-3").build())
            .build();
        let identifiers: Vec<_> = group
            .subnets
            .as_deref()
            .unwrap()
            .iter()
            .map(|subnet| subnet.subnet_identifier.as_deref().unwrap())
            .collect();
        assert_eq!(vec!["subnet-1", "subnet-2", "subnet-3"], identifiers);
    }

    #[test]
    fn set_list_replaces_accumulated_values() {
        let filter = Filter::builder()
            .values("a")
            .values("b")
            .set_values(Some(vec!["c".to_string()]))
            .build();
        assert_eq!(Some(vec!["c".to_string()]), filter.values);
    }

    #[test]
    fn nested_equality_is_structural() {
        let settings = || {
            KinesisSettings::builder()
                .stream_arn("arn:aws:kinesis:us-east-1:123456789012:stream/s")
                .message_format(MessageFormatValue::Json)
                .include_transaction_details(true)
                .build()
        };
        let endpoint = |kinesis: KinesisSettings| {
            Endpoint::builder()
                .endpoint_identifier("ep-1")
                .engine_name("kinesis")
                .kinesis_settings(kinesis)
                .build()
        };
        assert_eq!(endpoint(settings()), endpoint(settings()));

        let mut changed = settings();
        changed.include_transaction_details = Some(false);
        assert_ne!(endpoint(settings()), endpoint(changed));
    }

    #[test]
    fn enum_literals_round_trip() {
        for value in MigrationTypeValue::values() {
            assert_eq!(*value, value.parse::<MigrationTypeValue>().unwrap().as_str());
        }
        for value in DmsSslModeValue::values() {
            assert_eq!(*value, value.parse::<DmsSslModeValue>().unwrap().as_str());
        }
        for value in RefreshSchemasStatusTypeValue::values() {
            assert_eq!(
                *value,
                value.parse::<RefreshSchemasStatusTypeValue>().unwrap().as_str()
            );
        }
    }

    #[test]
    fn enum_parse_rejects_unknown_and_empty() {
        let err = "not-a-real-value".parse::<MigrationTypeValue>().unwrap_err();
        assert!(err.to_string().contains("not-a-real-value"));
        assert_eq!("not-a-real-value", err.value());

        let err = "".parse::<MigrationTypeValue>().unwrap_err();
        assert_eq!("", err.value());

        // Literals from a sibling enum are not accepted either.
        assert!("source".parse::<MigrationTypeValue>().is_err());
    }
}
