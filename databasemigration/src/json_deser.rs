/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! JSON deserializers for response and model shapes.
//!
//! Members the client does not know are skipped structurally, so new service
//! fields never break older clients. Enum-typed members are parsed strictly:
//! a string outside the known set is an error, not a silent default.

use dms_json::deserialize::{
    expect_bool_or_null, expect_number_or_null, expect_start_object, expect_string_or_null,
    expect_timestamp_or_null, json_token_iter, skip_value, DeserializeError, Token,
};
use dms_types::date_time::Format;
use dms_types::error::InvalidEnumValue;
use dms_types::DateTime;
use std::borrow::Cow;
use std::iter::Peekable;
use std::str::FromStr;

fn or_empty_doc(data: &[u8]) -> &[u8] {
    if data.is_empty() {
        b"{}"
    } else {
        data
    }
}

fn deser_string<'a, I>(tokens: &mut Peekable<I>) -> Result<Option<String>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    Ok(expect_string_or_null(tokens.next())?
        .map(|value| value.to_unescaped().map(Cow::into_owned))
        .transpose()?)
}

fn deser_enum<'a, I, T>(tokens: &mut Peekable<I>) -> Result<Option<T>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
    T: FromStr<Err = InvalidEnumValue>,
{
    expect_string_or_null(tokens.next())?
        .map(|value| {
            value.to_unescaped().and_then(|unescaped| {
                unescaped
                    .parse::<T>()
                    .map_err(|err| DeserializeError::custom(err.to_string()))
            })
        })
        .transpose()
}

fn deser_i32<'a, I>(tokens: &mut Peekable<I>) -> Result<Option<i32>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    Ok(expect_number_or_null(tokens.next())?
        .map(i32::try_from)
        .transpose()?)
}

fn deser_i64<'a, I>(tokens: &mut Peekable<I>) -> Result<Option<i64>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    Ok(expect_number_or_null(tokens.next())?
        .map(i64::try_from)
        .transpose()?)
}

fn deser_bool<'a, I>(tokens: &mut Peekable<I>) -> Result<Option<bool>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    expect_bool_or_null(tokens.next())
}

fn deser_timestamp<'a, I>(tokens: &mut Peekable<I>) -> Result<Option<DateTime>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    expect_timestamp_or_null(tokens.next(), Format::EpochSeconds)
}

fn unexpected_member(token: Option<Token<'_>>) -> DeserializeError {
    DeserializeError::custom(format!(
        "expected object key or end object, found: {:?}",
        token
    ))
}

fn deser_list_string<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<Vec<String>>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        if let Some(value) = deser_string(tokens)? {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(DeserializeError::custom("expected start array or null")),
    }
}

/// Expands to a list deserializer delegating each element to a structure
/// deserializer. One definition serves every modeled list shape.
macro_rules! deser_list_of {
    ($fn_name:ident, $deser_item:ident, $item:ty) => {
        pub fn $fn_name<'a, I>(
            tokens: &mut Peekable<I>,
        ) -> Result<Option<Vec<$item>>, DeserializeError>
        where
            I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
        {
            match tokens.next().transpose()? {
                Some(Token::ValueNull { .. }) => Ok(None),
                Some(Token::StartArray { .. }) => {
                    let mut items = Vec::new();
                    loop {
                        match tokens.peek() {
                            Some(Ok(Token::EndArray { .. })) => {
                                tokens.next().transpose()?;
                                break;
                            }
                            _ => {
                                if let Some(value) = $deser_item(tokens)? {
                                    items.push(value);
                                }
                            }
                        }
                    }
                    Ok(Some(items))
                }
                _ => Err(DeserializeError::custom("expected start array or null")),
            }
        }
    };
}

pub fn deser_structure_tag<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::Tag>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::Tag::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "Key" => builder = builder.set_key(deser_string(tokens)?),
                        "Value" => builder = builder.set_value(deser_string(tokens)?),
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

pub fn deser_structure_filter<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::Filter>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::Filter::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "Name" => builder = builder.set_name(deser_string(tokens)?),
                        "Values" => builder = builder.set_values(deser_list_string(tokens)?),
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

pub fn deser_structure_availability_zone<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::AvailabilityZone>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::AvailabilityZone::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "Name" => builder = builder.set_name(deser_string(tokens)?),
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

pub fn deser_structure_subnet<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::Subnet>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::Subnet::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "SubnetIdentifier" => {
                            builder = builder.set_subnet_identifier(deser_string(tokens)?)
                        }
                        "SubnetAvailabilityZone" => {
                            builder = builder.set_subnet_availability_zone(
                                deser_structure_availability_zone(tokens)?,
                            )
                        }
                        "SubnetStatus" => {
                            builder = builder.set_subnet_status(deser_string(tokens)?)
                        }
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

deser_list_of!(deser_list_subnet, deser_structure_subnet, crate::model::Subnet);

pub fn deser_structure_replication_subnet_group<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::ReplicationSubnetGroup>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::ReplicationSubnetGroup::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "ReplicationSubnetGroupIdentifier" => {
                            builder = builder
                                .set_replication_subnet_group_identifier(deser_string(tokens)?)
                        }
                        "ReplicationSubnetGroupDescription" => {
                            builder = builder
                                .set_replication_subnet_group_description(deser_string(tokens)?)
                        }
                        "VpcId" => builder = builder.set_vpc_id(deser_string(tokens)?),
                        "SubnetGroupStatus" => {
                            builder = builder.set_subnet_group_status(deser_string(tokens)?)
                        }
                        "Subnets" => builder = builder.set_subnets(deser_list_subnet(tokens)?),
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

pub fn deser_structure_connection<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::Connection>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::Connection::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "ReplicationInstanceArn" => {
                            builder = builder.set_replication_instance_arn(deser_string(tokens)?)
                        }
                        "EndpointArn" => builder = builder.set_endpoint_arn(deser_string(tokens)?),
                        "Status" => builder = builder.set_status(deser_string(tokens)?),
                        "LastFailureMessage" => {
                            builder = builder.set_last_failure_message(deser_string(tokens)?)
                        }
                        "EndpointIdentifier" => {
                            builder = builder.set_endpoint_identifier(deser_string(tokens)?)
                        }
                        "ReplicationInstanceIdentifier" => {
                            builder =
                                builder.set_replication_instance_identifier(deser_string(tokens)?)
                        }
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

pub fn deser_structure_account_quota<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::AccountQuota>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::AccountQuota::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "AccountQuotaName" => {
                            builder = builder.set_account_quota_name(deser_string(tokens)?)
                        }
                        "Used" => builder = builder.set_used(deser_i64(tokens)?),
                        "Max" => builder = builder.set_max(deser_i64(tokens)?),
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

pub fn deser_structure_refresh_schemas_status<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::RefreshSchemasStatus>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::RefreshSchemasStatus::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "EndpointArn" => builder = builder.set_endpoint_arn(deser_string(tokens)?),
                        "ReplicationInstanceArn" => {
                            builder = builder.set_replication_instance_arn(deser_string(tokens)?)
                        }
                        "Status" => builder = builder.set_status(deser_enum(tokens)?),
                        "LastRefreshDate" => {
                            builder = builder.set_last_refresh_date(deser_timestamp(tokens)?)
                        }
                        "LastFailureMessage" => {
                            builder = builder.set_last_failure_message(deser_string(tokens)?)
                        }
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

pub fn deser_structure_replication_task_stats<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::ReplicationTaskStats>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::ReplicationTaskStats::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "FullLoadProgressPercent" => {
                            builder = builder.set_full_load_progress_percent(deser_i32(tokens)?)
                        }
                        "ElapsedTimeMillis" => {
                            builder = builder.set_elapsed_time_millis(deser_i64(tokens)?)
                        }
                        "TablesLoaded" => builder = builder.set_tables_loaded(deser_i32(tokens)?),
                        "TablesLoading" => {
                            builder = builder.set_tables_loading(deser_i32(tokens)?)
                        }
                        "TablesQueued" => builder = builder.set_tables_queued(deser_i32(tokens)?),
                        "TablesErrored" => {
                            builder = builder.set_tables_errored(deser_i32(tokens)?)
                        }
                        "FreshStartDate" => {
                            builder = builder.set_fresh_start_date(deser_timestamp(tokens)?)
                        }
                        "StartDate" => builder = builder.set_start_date(deser_timestamp(tokens)?),
                        "StopDate" => builder = builder.set_stop_date(deser_timestamp(tokens)?),
                        "FullLoadStartDate" => {
                            builder = builder.set_full_load_start_date(deser_timestamp(tokens)?)
                        }
                        "FullLoadFinishDate" => {
                            builder = builder.set_full_load_finish_date(deser_timestamp(tokens)?)
                        }
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

pub fn deser_structure_replication_task<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::ReplicationTask>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::ReplicationTask::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "ReplicationTaskIdentifier" => {
                            builder = builder.set_replication_task_identifier(deser_string(tokens)?)
                        }
                        "SourceEndpointArn" => {
                            builder = builder.set_source_endpoint_arn(deser_string(tokens)?)
                        }
                        "TargetEndpointArn" => {
                            builder = builder.set_target_endpoint_arn(deser_string(tokens)?)
                        }
                        "ReplicationInstanceArn" => {
                            builder = builder.set_replication_instance_arn(deser_string(tokens)?)
                        }
                        "MigrationType" => builder = builder.set_migration_type(deser_enum(tokens)?),
                        "TableMappings" => builder = builder.set_table_mappings(deser_string(tokens)?),
                        "ReplicationTaskSettings" => {
                            builder = builder.set_replication_task_settings(deser_string(tokens)?)
                        }
                        "Status" => builder = builder.set_status(deser_string(tokens)?),
                        "LastFailureMessage" => {
                            builder = builder.set_last_failure_message(deser_string(tokens)?)
                        }
                        "StopReason" => builder = builder.set_stop_reason(deser_string(tokens)?),
                        "ReplicationTaskCreationDate" => {
                            builder =
                                builder.set_replication_task_creation_date(deser_timestamp(tokens)?)
                        }
                        "ReplicationTaskStartDate" => {
                            builder =
                                builder.set_replication_task_start_date(deser_timestamp(tokens)?)
                        }
                        "CdcStartPosition" => {
                            builder = builder.set_cdc_start_position(deser_string(tokens)?)
                        }
                        "CdcStopPosition" => {
                            builder = builder.set_cdc_stop_position(deser_string(tokens)?)
                        }
                        "RecoveryCheckpoint" => {
                            builder = builder.set_recovery_checkpoint(deser_string(tokens)?)
                        }
                        "ReplicationTaskArn" => {
                            builder = builder.set_replication_task_arn(deser_string(tokens)?)
                        }
                        "ReplicationTaskStats" => {
                            builder = builder.set_replication_task_stats(
                                deser_structure_replication_task_stats(tokens)?,
                            )
                        }
                        "TaskData" => builder = builder.set_task_data(deser_string(tokens)?),
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

pub fn deser_structure_event<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::Event>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::Event::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "SourceIdentifier" => {
                            builder = builder.set_source_identifier(deser_string(tokens)?)
                        }
                        "SourceType" => builder = builder.set_source_type(deser_enum(tokens)?),
                        "Message" => builder = builder.set_message(deser_string(tokens)?),
                        "EventCategories" => {
                            builder = builder.set_event_categories(deser_list_string(tokens)?)
                        }
                        "Date" => builder = builder.set_date(deser_timestamp(tokens)?),
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

pub fn deser_structure_dynamo_db_settings<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::DynamoDbSettings>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::DynamoDbSettings::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "ServiceAccessRoleArn" => {
                            builder = builder.set_service_access_role_arn(deser_string(tokens)?)
                        }
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

pub fn deser_structure_dms_transfer_settings<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::DmsTransferSettings>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::DmsTransferSettings::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "ServiceAccessRoleArn" => {
                            builder = builder.set_service_access_role_arn(deser_string(tokens)?)
                        }
                        "BucketName" => builder = builder.set_bucket_name(deser_string(tokens)?),
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

pub fn deser_structure_kafka_settings<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::KafkaSettings>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::KafkaSettings::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "Broker" => builder = builder.set_broker(deser_string(tokens)?),
                        "Topic" => builder = builder.set_topic(deser_string(tokens)?),
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

pub fn deser_structure_elasticsearch_settings<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::ElasticsearchSettings>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::ElasticsearchSettings::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "ServiceAccessRoleArn" => {
                            builder = builder.set_service_access_role_arn(deser_string(tokens)?)
                        }
                        "EndpointUri" => builder = builder.set_endpoint_uri(deser_string(tokens)?),
                        "FullLoadErrorPercentage" => {
                            builder = builder.set_full_load_error_percentage(deser_i32(tokens)?)
                        }
                        "ErrorRetryDuration" => {
                            builder = builder.set_error_retry_duration(deser_i32(tokens)?)
                        }
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

pub fn deser_structure_kinesis_settings<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::KinesisSettings>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::KinesisSettings::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "StreamArn" => builder = builder.set_stream_arn(deser_string(tokens)?),
                        "MessageFormat" => {
                            builder = builder.set_message_format(deser_enum(tokens)?)
                        }
                        "ServiceAccessRoleArn" => {
                            builder = builder.set_service_access_role_arn(deser_string(tokens)?)
                        }
                        "IncludeTransactionDetails" => {
                            builder = builder.set_include_transaction_details(deser_bool(tokens)?)
                        }
                        "IncludePartitionValue" => {
                            builder = builder.set_include_partition_value(deser_bool(tokens)?)
                        }
                        "PartitionIncludeSchemaTable" => {
                            builder =
                                builder.set_partition_include_schema_table(deser_bool(tokens)?)
                        }
                        "IncludeTableAlterOperations" => {
                            builder =
                                builder.set_include_table_alter_operations(deser_bool(tokens)?)
                        }
                        "IncludeControlDetails" => {
                            builder = builder.set_include_control_details(deser_bool(tokens)?)
                        }
                        "IncludeNullAndEmpty" => {
                            builder = builder.set_include_null_and_empty(deser_bool(tokens)?)
                        }
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

pub fn deser_structure_neptune_settings<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::NeptuneSettings>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::NeptuneSettings::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "ServiceAccessRoleArn" => {
                            builder = builder.set_service_access_role_arn(deser_string(tokens)?)
                        }
                        "S3BucketName" => {
                            builder = builder.set_s3_bucket_name(deser_string(tokens)?)
                        }
                        "S3BucketFolder" => {
                            builder = builder.set_s3_bucket_folder(deser_string(tokens)?)
                        }
                        "ErrorRetryDuration" => {
                            builder = builder.set_error_retry_duration(deser_i32(tokens)?)
                        }
                        "MaxFileSize" => builder = builder.set_max_file_size(deser_i32(tokens)?),
                        "MaxRetryCount" => {
                            builder = builder.set_max_retry_count(deser_i32(tokens)?)
                        }
                        "IamAuthEnabled" => {
                            builder = builder.set_iam_auth_enabled(deser_bool(tokens)?)
                        }
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

pub fn deser_structure_mongo_db_settings<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::MongoDbSettings>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::MongoDbSettings::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "Username" => builder = builder.set_username(deser_string(tokens)?),
                        "Password" => builder = builder.set_password(deser_string(tokens)?),
                        "ServerName" => builder = builder.set_server_name(deser_string(tokens)?),
                        "Port" => builder = builder.set_port(deser_i32(tokens)?),
                        "DatabaseName" => {
                            builder = builder.set_database_name(deser_string(tokens)?)
                        }
                        "AuthType" => builder = builder.set_auth_type(deser_enum(tokens)?),
                        "AuthMechanism" => {
                            builder = builder.set_auth_mechanism(deser_enum(tokens)?)
                        }
                        "NestingLevel" => builder = builder.set_nesting_level(deser_enum(tokens)?),
                        "ExtractDocId" => {
                            builder = builder.set_extract_doc_id(deser_string(tokens)?)
                        }
                        "DocsToInvestigate" => {
                            builder = builder.set_docs_to_investigate(deser_string(tokens)?)
                        }
                        "AuthSource" => builder = builder.set_auth_source(deser_string(tokens)?),
                        "KmsKeyId" => builder = builder.set_kms_key_id(deser_string(tokens)?),
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

pub fn deser_structure_s3_settings<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::S3Settings>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::S3Settings::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "ServiceAccessRoleArn" => {
                            builder = builder.set_service_access_role_arn(deser_string(tokens)?)
                        }
                        "ExternalTableDefinition" => {
                            builder = builder.set_external_table_definition(deser_string(tokens)?)
                        }
                        "CsvRowDelimiter" => {
                            builder = builder.set_csv_row_delimiter(deser_string(tokens)?)
                        }
                        "CsvDelimiter" => {
                            builder = builder.set_csv_delimiter(deser_string(tokens)?)
                        }
                        "BucketFolder" => {
                            builder = builder.set_bucket_folder(deser_string(tokens)?)
                        }
                        "BucketName" => builder = builder.set_bucket_name(deser_string(tokens)?),
                        "CompressionType" => {
                            builder = builder.set_compression_type(deser_enum(tokens)?)
                        }
                        "EncryptionMode" => {
                            builder = builder.set_encryption_mode(deser_enum(tokens)?)
                        }
                        "ServerSideEncryptionKmsKeyId" => {
                            builder =
                                builder.set_server_side_encryption_kms_key_id(deser_string(tokens)?)
                        }
                        "DataFormat" => builder = builder.set_data_format(deser_enum(tokens)?),
                        "EncodingType" => builder = builder.set_encoding_type(deser_enum(tokens)?),
                        "DictPageSizeLimit" => {
                            builder = builder.set_dict_page_size_limit(deser_i32(tokens)?)
                        }
                        "RowGroupLength" => {
                            builder = builder.set_row_group_length(deser_i32(tokens)?)
                        }
                        "DataPageSize" => builder = builder.set_data_page_size(deser_i32(tokens)?),
                        "ParquetVersion" => {
                            builder = builder.set_parquet_version(deser_enum(tokens)?)
                        }
                        "EnableStatistics" => {
                            builder = builder.set_enable_statistics(deser_bool(tokens)?)
                        }
                        "IncludeOpForFullLoad" => {
                            builder = builder.set_include_op_for_full_load(deser_bool(tokens)?)
                        }
                        "CdcInsertsOnly" => {
                            builder = builder.set_cdc_inserts_only(deser_bool(tokens)?)
                        }
                        "TimestampColumnName" => {
                            builder = builder.set_timestamp_column_name(deser_string(tokens)?)
                        }
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

pub fn deser_structure_redshift_settings<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::RedshiftSettings>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::RedshiftSettings::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "AcceptAnyDate" => {
                            builder = builder.set_accept_any_date(deser_bool(tokens)?)
                        }
                        "AfterConnectScript" => {
                            builder = builder.set_after_connect_script(deser_string(tokens)?)
                        }
                        "BucketFolder" => {
                            builder = builder.set_bucket_folder(deser_string(tokens)?)
                        }
                        "BucketName" => builder = builder.set_bucket_name(deser_string(tokens)?),
                        "ConnectionTimeout" => {
                            builder = builder.set_connection_timeout(deser_i32(tokens)?)
                        }
                        "DatabaseName" => {
                            builder = builder.set_database_name(deser_string(tokens)?)
                        }
                        "EmptyAsNull" => builder = builder.set_empty_as_null(deser_bool(tokens)?),
                        "EncryptionMode" => {
                            builder = builder.set_encryption_mode(deser_enum(tokens)?)
                        }
                        "FileTransferUploadStreams" => {
                            builder = builder.set_file_transfer_upload_streams(deser_i32(tokens)?)
                        }
                        "LoadTimeout" => builder = builder.set_load_timeout(deser_i32(tokens)?),
                        "MaxFileSize" => builder = builder.set_max_file_size(deser_i32(tokens)?),
                        "Password" => builder = builder.set_password(deser_string(tokens)?),
                        "Port" => builder = builder.set_port(deser_i32(tokens)?),
                        "RemoveQuotes" => builder = builder.set_remove_quotes(deser_bool(tokens)?),
                        "ServerName" => builder = builder.set_server_name(deser_string(tokens)?),
                        "ServiceAccessRoleArn" => {
                            builder = builder.set_service_access_role_arn(deser_string(tokens)?)
                        }
                        "ServerSideEncryptionKmsKeyId" => {
                            builder =
                                builder.set_server_side_encryption_kms_key_id(deser_string(tokens)?)
                        }
                        "TrimBlanks" => builder = builder.set_trim_blanks(deser_bool(tokens)?),
                        "TruncateColumns" => {
                            builder = builder.set_truncate_columns(deser_bool(tokens)?)
                        }
                        "Username" => builder = builder.set_username(deser_string(tokens)?),
                        "WriteBufferSize" => {
                            builder = builder.set_write_buffer_size(deser_i32(tokens)?)
                        }
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

pub fn deser_structure_endpoint<'a, I>(
    tokens: &mut Peekable<I>,
) -> Result<Option<crate::model::Endpoint>, DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::StartObject { .. }) => {
            let mut builder = crate::model::Endpoint::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(Token::EndObject { .. }) => break,
                    Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                        "EndpointIdentifier" => {
                            builder = builder.set_endpoint_identifier(deser_string(tokens)?)
                        }
                        "EndpointType" => builder = builder.set_endpoint_type(deser_enum(tokens)?),
                        "EngineName" => builder = builder.set_engine_name(deser_string(tokens)?),
                        "EngineDisplayName" => {
                            builder = builder.set_engine_display_name(deser_string(tokens)?)
                        }
                        "Username" => builder = builder.set_username(deser_string(tokens)?),
                        "ServerName" => builder = builder.set_server_name(deser_string(tokens)?),
                        "Port" => builder = builder.set_port(deser_i32(tokens)?),
                        "DatabaseName" => {
                            builder = builder.set_database_name(deser_string(tokens)?)
                        }
                        "ExtraConnectionAttributes" => {
                            builder =
                                builder.set_extra_connection_attributes(deser_string(tokens)?)
                        }
                        "Status" => builder = builder.set_status(deser_string(tokens)?),
                        "KmsKeyId" => builder = builder.set_kms_key_id(deser_string(tokens)?),
                        "EndpointArn" => builder = builder.set_endpoint_arn(deser_string(tokens)?),
                        "CertificateArn" => {
                            builder = builder.set_certificate_arn(deser_string(tokens)?)
                        }
                        "SslMode" => builder = builder.set_ssl_mode(deser_enum(tokens)?),
                        "ServiceAccessRoleArn" => {
                            builder = builder.set_service_access_role_arn(deser_string(tokens)?)
                        }
                        "ExternalTableDefinition" => {
                            builder = builder.set_external_table_definition(deser_string(tokens)?)
                        }
                        "ExternalId" => builder = builder.set_external_id(deser_string(tokens)?),
                        "DynamoDbSettings" => {
                            builder = builder
                                .set_dynamo_db_settings(deser_structure_dynamo_db_settings(tokens)?)
                        }
                        "S3Settings" => {
                            builder = builder.set_s3_settings(deser_structure_s3_settings(tokens)?)
                        }
                        "DmsTransferSettings" => {
                            builder = builder.set_dms_transfer_settings(
                                deser_structure_dms_transfer_settings(tokens)?,
                            )
                        }
                        "MongoDbSettings" => {
                            builder = builder
                                .set_mongo_db_settings(deser_structure_mongo_db_settings(tokens)?)
                        }
                        "KinesisSettings" => {
                            builder = builder
                                .set_kinesis_settings(deser_structure_kinesis_settings(tokens)?)
                        }
                        "KafkaSettings" => {
                            builder =
                                builder.set_kafka_settings(deser_structure_kafka_settings(tokens)?)
                        }
                        "ElasticsearchSettings" => {
                            builder = builder.set_elasticsearch_settings(
                                deser_structure_elasticsearch_settings(tokens)?,
                            )
                        }
                        "NeptuneSettings" => {
                            builder = builder
                                .set_neptune_settings(deser_structure_neptune_settings(tokens)?)
                        }
                        "RedshiftSettings" => {
                            builder = builder
                                .set_redshift_settings(deser_structure_redshift_settings(tokens)?)
                        }
                        _ => skip_value(tokens)?,
                    },
                    other => return Err(unexpected_member(other)),
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(DeserializeError::custom("expected start object or null")),
    }
}

deser_list_of!(deser_list_tag, deser_structure_tag, crate::model::Tag);
deser_list_of!(
    deser_list_account_quota,
    deser_structure_account_quota,
    crate::model::AccountQuota
);
deser_list_of!(
    deser_list_connection,
    deser_structure_connection,
    crate::model::Connection
);
deser_list_of!(
    deser_list_endpoint,
    deser_structure_endpoint,
    crate::model::Endpoint
);
deser_list_of!(deser_list_event, deser_structure_event, crate::model::Event);
deser_list_of!(
    deser_list_replication_subnet_group,
    deser_structure_replication_subnet_group,
    crate::model::ReplicationSubnetGroup
);
deser_list_of!(
    deser_list_replication_task,
    deser_structure_replication_task,
    crate::model::ReplicationTask
);

pub fn deser_operation_add_tags_to_resource(
    body: &[u8],
) -> Result<crate::output::AddTagsToResourceOutput, DeserializeError> {
    let mut tokens_owned = json_token_iter(or_empty_doc(body)).peekable();
    let tokens = &mut tokens_owned;
    expect_start_object(tokens.next())?;
    let builder = crate::output::AddTagsToResourceOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { .. }) => skip_value(tokens)?,
            other => return Err(unexpected_member(other)),
        }
    }
    expect_end_of_document(tokens)?;
    Ok(builder.build())
}

pub fn deser_operation_create_endpoint(
    body: &[u8],
) -> Result<crate::output::CreateEndpointOutput, DeserializeError> {
    let mut tokens_owned = json_token_iter(or_empty_doc(body)).peekable();
    let tokens = &mut tokens_owned;
    expect_start_object(tokens.next())?;
    let mut builder = crate::output::CreateEndpointOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "Endpoint" => builder = builder.set_endpoint(deser_structure_endpoint(tokens)?),
                _ => skip_value(tokens)?,
            },
            other => return Err(unexpected_member(other)),
        }
    }
    expect_end_of_document(tokens)?;
    Ok(builder.build())
}

pub fn deser_operation_create_replication_task(
    body: &[u8],
) -> Result<crate::output::CreateReplicationTaskOutput, DeserializeError> {
    let mut tokens_owned = json_token_iter(or_empty_doc(body)).peekable();
    let tokens = &mut tokens_owned;
    expect_start_object(tokens.next())?;
    let mut builder = crate::output::CreateReplicationTaskOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "ReplicationTask" => {
                    builder =
                        builder.set_replication_task(deser_structure_replication_task(tokens)?)
                }
                _ => skip_value(tokens)?,
            },
            other => return Err(unexpected_member(other)),
        }
    }
    expect_end_of_document(tokens)?;
    Ok(builder.build())
}

pub fn deser_operation_delete_endpoint(
    body: &[u8],
) -> Result<crate::output::DeleteEndpointOutput, DeserializeError> {
    let mut tokens_owned = json_token_iter(or_empty_doc(body)).peekable();
    let tokens = &mut tokens_owned;
    expect_start_object(tokens.next())?;
    let mut builder = crate::output::DeleteEndpointOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "Endpoint" => builder = builder.set_endpoint(deser_structure_endpoint(tokens)?),
                _ => skip_value(tokens)?,
            },
            other => return Err(unexpected_member(other)),
        }
    }
    expect_end_of_document(tokens)?;
    Ok(builder.build())
}

pub fn deser_operation_delete_replication_task(
    body: &[u8],
) -> Result<crate::output::DeleteReplicationTaskOutput, DeserializeError> {
    let mut tokens_owned = json_token_iter(or_empty_doc(body)).peekable();
    let tokens = &mut tokens_owned;
    expect_start_object(tokens.next())?;
    let mut builder = crate::output::DeleteReplicationTaskOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "ReplicationTask" => {
                    builder =
                        builder.set_replication_task(deser_structure_replication_task(tokens)?)
                }
                _ => skip_value(tokens)?,
            },
            other => return Err(unexpected_member(other)),
        }
    }
    expect_end_of_document(tokens)?;
    Ok(builder.build())
}

pub fn deser_operation_describe_account_attributes(
    body: &[u8],
) -> Result<crate::output::DescribeAccountAttributesOutput, DeserializeError> {
    let mut tokens_owned = json_token_iter(or_empty_doc(body)).peekable();
    let tokens = &mut tokens_owned;
    expect_start_object(tokens.next())?;
    let mut builder = crate::output::DescribeAccountAttributesOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "AccountQuotas" => {
                    builder = builder.set_account_quotas(deser_list_account_quota(tokens)?)
                }
                "UniqueAccountIdentifier" => {
                    builder = builder.set_unique_account_identifier(deser_string(tokens)?)
                }
                _ => skip_value(tokens)?,
            },
            other => return Err(unexpected_member(other)),
        }
    }
    expect_end_of_document(tokens)?;
    Ok(builder.build())
}

pub fn deser_operation_describe_connections(
    body: &[u8],
) -> Result<crate::output::DescribeConnectionsOutput, DeserializeError> {
    let mut tokens_owned = json_token_iter(or_empty_doc(body)).peekable();
    let tokens = &mut tokens_owned;
    expect_start_object(tokens.next())?;
    let mut builder = crate::output::DescribeConnectionsOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "Marker" => builder = builder.set_marker(deser_string(tokens)?),
                "Connections" => builder = builder.set_connections(deser_list_connection(tokens)?),
                _ => skip_value(tokens)?,
            },
            other => return Err(unexpected_member(other)),
        }
    }
    expect_end_of_document(tokens)?;
    Ok(builder.build())
}

pub fn deser_operation_describe_endpoints(
    body: &[u8],
) -> Result<crate::output::DescribeEndpointsOutput, DeserializeError> {
    let mut tokens_owned = json_token_iter(or_empty_doc(body)).peekable();
    let tokens = &mut tokens_owned;
    expect_start_object(tokens.next())?;
    let mut builder = crate::output::DescribeEndpointsOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "Marker" => builder = builder.set_marker(deser_string(tokens)?),
                "Endpoints" => builder = builder.set_endpoints(deser_list_endpoint(tokens)?),
                _ => skip_value(tokens)?,
            },
            other => return Err(unexpected_member(other)),
        }
    }
    expect_end_of_document(tokens)?;
    Ok(builder.build())
}

pub fn deser_operation_describe_events(
    body: &[u8],
) -> Result<crate::output::DescribeEventsOutput, DeserializeError> {
    let mut tokens_owned = json_token_iter(or_empty_doc(body)).peekable();
    let tokens = &mut tokens_owned;
    expect_start_object(tokens.next())?;
    let mut builder = crate::output::DescribeEventsOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "Marker" => builder = builder.set_marker(deser_string(tokens)?),
                "Events" => builder = builder.set_events(deser_list_event(tokens)?),
                _ => skip_value(tokens)?,
            },
            other => return Err(unexpected_member(other)),
        }
    }
    expect_end_of_document(tokens)?;
    Ok(builder.build())
}

pub fn deser_operation_describe_refresh_schemas_status(
    body: &[u8],
) -> Result<crate::output::DescribeRefreshSchemasStatusOutput, DeserializeError> {
    let mut tokens_owned = json_token_iter(or_empty_doc(body)).peekable();
    let tokens = &mut tokens_owned;
    expect_start_object(tokens.next())?;
    let mut builder = crate::output::DescribeRefreshSchemasStatusOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "RefreshSchemasStatus" => {
                    builder = builder
                        .set_refresh_schemas_status(deser_structure_refresh_schemas_status(tokens)?)
                }
                _ => skip_value(tokens)?,
            },
            other => return Err(unexpected_member(other)),
        }
    }
    expect_end_of_document(tokens)?;
    Ok(builder.build())
}

pub fn deser_operation_describe_replication_subnet_groups(
    body: &[u8],
) -> Result<crate::output::DescribeReplicationSubnetGroupsOutput, DeserializeError> {
    let mut tokens_owned = json_token_iter(or_empty_doc(body)).peekable();
    let tokens = &mut tokens_owned;
    expect_start_object(tokens.next())?;
    let mut builder = crate::output::DescribeReplicationSubnetGroupsOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "Marker" => builder = builder.set_marker(deser_string(tokens)?),
                "ReplicationSubnetGroups" => {
                    builder = builder.set_replication_subnet_groups(
                        deser_list_replication_subnet_group(tokens)?,
                    )
                }
                _ => skip_value(tokens)?,
            },
            other => return Err(unexpected_member(other)),
        }
    }
    expect_end_of_document(tokens)?;
    Ok(builder.build())
}

pub fn deser_operation_describe_replication_tasks(
    body: &[u8],
) -> Result<crate::output::DescribeReplicationTasksOutput, DeserializeError> {
    let mut tokens_owned = json_token_iter(or_empty_doc(body)).peekable();
    let tokens = &mut tokens_owned;
    expect_start_object(tokens.next())?;
    let mut builder = crate::output::DescribeReplicationTasksOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "Marker" => builder = builder.set_marker(deser_string(tokens)?),
                "ReplicationTasks" => {
                    builder = builder.set_replication_tasks(deser_list_replication_task(tokens)?)
                }
                _ => skip_value(tokens)?,
            },
            other => return Err(unexpected_member(other)),
        }
    }
    expect_end_of_document(tokens)?;
    Ok(builder.build())
}

pub fn deser_operation_list_tags_for_resource(
    body: &[u8],
) -> Result<crate::output::ListTagsForResourceOutput, DeserializeError> {
    let mut tokens_owned = json_token_iter(or_empty_doc(body)).peekable();
    let tokens = &mut tokens_owned;
    expect_start_object(tokens.next())?;
    let mut builder = crate::output::ListTagsForResourceOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "TagList" => builder = builder.set_tag_list(deser_list_tag(tokens)?),
                _ => skip_value(tokens)?,
            },
            other => return Err(unexpected_member(other)),
        }
    }
    expect_end_of_document(tokens)?;
    Ok(builder.build())
}

pub fn deser_operation_modify_endpoint(
    body: &[u8],
) -> Result<crate::output::ModifyEndpointOutput, DeserializeError> {
    let mut tokens_owned = json_token_iter(or_empty_doc(body)).peekable();
    let tokens = &mut tokens_owned;
    expect_start_object(tokens.next())?;
    let mut builder = crate::output::ModifyEndpointOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "Endpoint" => builder = builder.set_endpoint(deser_structure_endpoint(tokens)?),
                _ => skip_value(tokens)?,
            },
            other => return Err(unexpected_member(other)),
        }
    }
    expect_end_of_document(tokens)?;
    Ok(builder.build())
}

pub fn deser_operation_refresh_schemas(
    body: &[u8],
) -> Result<crate::output::RefreshSchemasOutput, DeserializeError> {
    let mut tokens_owned = json_token_iter(or_empty_doc(body)).peekable();
    let tokens = &mut tokens_owned;
    expect_start_object(tokens.next())?;
    let mut builder = crate::output::RefreshSchemasOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "RefreshSchemasStatus" => {
                    builder = builder
                        .set_refresh_schemas_status(deser_structure_refresh_schemas_status(tokens)?)
                }
                _ => skip_value(tokens)?,
            },
            other => return Err(unexpected_member(other)),
        }
    }
    expect_end_of_document(tokens)?;
    Ok(builder.build())
}

pub fn deser_operation_remove_tags_from_resource(
    body: &[u8],
) -> Result<crate::output::RemoveTagsFromResourceOutput, DeserializeError> {
    let mut tokens_owned = json_token_iter(or_empty_doc(body)).peekable();
    let tokens = &mut tokens_owned;
    expect_start_object(tokens.next())?;
    let builder = crate::output::RemoveTagsFromResourceOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { .. }) => skip_value(tokens)?,
            other => return Err(unexpected_member(other)),
        }
    }
    expect_end_of_document(tokens)?;
    Ok(builder.build())
}

pub fn deser_operation_start_replication_task(
    body: &[u8],
) -> Result<crate::output::StartReplicationTaskOutput, DeserializeError> {
    let mut tokens_owned = json_token_iter(or_empty_doc(body)).peekable();
    let tokens = &mut tokens_owned;
    expect_start_object(tokens.next())?;
    let mut builder = crate::output::StartReplicationTaskOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "ReplicationTask" => {
                    builder =
                        builder.set_replication_task(deser_structure_replication_task(tokens)?)
                }
                _ => skip_value(tokens)?,
            },
            other => return Err(unexpected_member(other)),
        }
    }
    expect_end_of_document(tokens)?;
    Ok(builder.build())
}

pub fn deser_operation_stop_replication_task(
    body: &[u8],
) -> Result<crate::output::StopReplicationTaskOutput, DeserializeError> {
    let mut tokens_owned = json_token_iter(or_empty_doc(body)).peekable();
    let tokens = &mut tokens_owned;
    expect_start_object(tokens.next())?;
    let mut builder = crate::output::StopReplicationTaskOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "ReplicationTask" => {
                    builder =
                        builder.set_replication_task(deser_structure_replication_task(tokens)?)
                }
                _ => skip_value(tokens)?,
            },
            other => return Err(unexpected_member(other)),
        }
    }
    expect_end_of_document(tokens)?;
    Ok(builder.build())
}

pub fn deser_operation_test_connection(
    body: &[u8],
) -> Result<crate::output::TestConnectionOutput, DeserializeError> {
    let mut tokens_owned = json_token_iter(or_empty_doc(body)).peekable();
    let tokens = &mut tokens_owned;
    expect_start_object(tokens.next())?;
    let mut builder = crate::output::TestConnectionOutput::builder();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "Connection" => {
                    builder = builder.set_connection(deser_structure_connection(tokens)?)
                }
                _ => skip_value(tokens)?,
            },
            other => return Err(unexpected_member(other)),
        }
    }
    expect_end_of_document(tokens)?;
    Ok(builder.build())
}

/// Parses an error response body into the service-wide error type.
///
/// The error code arrives as `__type` (or `code`), possibly decorated as
/// `namespace#Code` or `Code:http-uri`; both decorations are stripped before
/// matching against the modeled faults.
pub fn deser_error(body: &[u8]) -> Result<crate::error::Error, DeserializeError> {
    use crate::error::{
        AccessDeniedFault, Error, ErrorMetadata, InvalidResourceStateFault,
        KmsKeyNotAccessibleFault, ResourceAlreadyExistsFault, ResourceNotFoundFault,
        ResourceQuotaExceededFault,
    };

    let mut tokens_owned = json_token_iter(or_empty_doc(body)).peekable();
    let tokens = &mut tokens_owned;
    expect_start_object(tokens.next())?;
    let mut code: Option<String> = None;
    let mut message: Option<String> = None;
    let mut resource_arn: Option<String> = None;
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "__type" | "code" => code = deser_string(tokens)?,
                "message" | "Message" => message = deser_string(tokens)?,
                "resourceArn" | "ResourceArn" => resource_arn = deser_string(tokens)?,
                _ => skip_value(tokens)?,
            },
            other => return Err(unexpected_member(other)),
        }
    }
    expect_end_of_document(tokens)?;

    let sanitized = code.as_deref().map(sanitize_error_code);
    Ok(match sanitized {
        Some(AccessDeniedFault::CODE) => {
            Error::AccessDeniedFault(AccessDeniedFault { message })
        }
        Some(InvalidResourceStateFault::CODE) => {
            Error::InvalidResourceStateFault(InvalidResourceStateFault { message })
        }
        Some(KmsKeyNotAccessibleFault::CODE) => {
            Error::KmsKeyNotAccessibleFault(KmsKeyNotAccessibleFault { message })
        }
        Some(ResourceAlreadyExistsFault::CODE) => {
            Error::ResourceAlreadyExistsFault(ResourceAlreadyExistsFault {
                message,
                resource_arn,
            })
        }
        Some(ResourceNotFoundFault::CODE) => {
            Error::ResourceNotFoundFault(ResourceNotFoundFault { message })
        }
        Some(ResourceQuotaExceededFault::CODE) => {
            Error::ResourceQuotaExceededFault(ResourceQuotaExceededFault { message })
        }
        _ => {
            let mut meta = ErrorMetadata::builder();
            if let Some(code) = sanitized {
                meta = meta.code(code);
            }
            if let Some(message) = message {
                meta = meta.message(message);
            }
            Error::Unhandled(meta.build())
        }
    })
}

fn sanitize_error_code(code: &str) -> &str {
    let code = match code.rsplit_once('#') {
        Some((_, suffix)) => suffix,
        None => code,
    };
    match code.split_once(':') {
        Some((prefix, _)) => prefix,
        None => code,
    }
}

fn expect_end_of_document<'a, I>(tokens: &mut Peekable<I>) -> Result<(), DeserializeError>
where
    I: Iterator<Item = Result<Token<'a>, DeserializeError>>,
{
    if tokens.next().is_some() {
        return Err(DeserializeError::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unknown_members_are_skipped() {
        let body = br#"{"Marker":"m-1","SomethingNew":{"Deep":[1,2,{"a":null}]},"TagList":[]}"#;
        let output = deser_operation_list_tags_for_resource(body).unwrap();
        assert_eq!(Some(Vec::new()), output.tag_list);
    }

    #[test]
    fn empty_body_reads_as_empty_object() {
        let output = deser_operation_add_tags_to_resource(b"").unwrap();
        assert_eq!(crate::output::AddTagsToResourceOutput::builder().build(), output);
    }

    #[test]
    fn absent_and_empty_lists_stay_distinct() {
        let output = deser_operation_describe_connections(br#"{"Marker":"m"}"#).unwrap();
        assert_eq!(None, output.connections);

        let output =
            deser_operation_describe_connections(br#"{"Marker":"m","Connections":[]}"#).unwrap();
        assert_eq!(Some(Vec::new()), output.connections);
    }

    #[test]
    fn enum_members_parse_strictly() {
        let body = br#"{"ReplicationTask":{"MigrationType":"full-load-and-cdc"}}"#;
        let output = deser_operation_create_replication_task(body).unwrap();
        assert_eq!(
            Some(crate::model::MigrationTypeValue::FullLoadAndCdc),
            output.replication_task.unwrap().migration_type
        );

        let body = br#"{"ReplicationTask":{"MigrationType":"teleport"}}"#;
        let err = deser_operation_create_replication_task(body).unwrap_err();
        assert!(err.to_string().contains("teleport"));
    }

    #[test]
    fn error_codes_are_sanitized() {
        let body =
            br#"{"__type":"com.amazonaws.dms#ResourceNotFoundFault","message":"no such task"}"#;
        let err = deser_error(body).unwrap();
        assert_eq!(Some("ResourceNotFoundFault"), err.code());
        assert_eq!(Some("no such task"), err.message());

        let body = br#"{"__type":"ThrottlingException:http://internal.uri/","message":"slow down"}"#;
        let err = deser_error(body).unwrap();
        assert_eq!(Some("ThrottlingException"), err.code());
        assert!(matches!(err, crate::error::Error::Unhandled(_)));
    }
}
