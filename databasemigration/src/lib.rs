/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Record layer for the AWS Database Migration Service control-plane API.
//!
//! The service migrates databases between widely used commercial and
//! open-source engines, either as a one-time load or as continuous change
//! data capture; this crate models the requests, responses, and resource
//! descriptions of its control plane and their AWS JSON 1.1 wire encoding.
//!
//! What lives here:
//!
//! - [`model`]: resource descriptions (endpoints, tasks, connections, the
//!   engine-specific settings objects) and the closed enumerations they use.
//! - [`input`] / [`output`]: one request/response pair per operation, built
//!   through nested builders.
//! - [`operation`]: per-operation descriptors tying inputs to serialized
//!   request bodies and response bodies to outputs.
//! - [`error`]: modeled service faults and the service-wide error type.
//! - [`paginator`]: a generic loop over `Marker`-paged describe calls.
//!
//! HTTP transport, request signing, endpoint resolution, and retries are
//! deliberately not part of this crate; it produces and consumes bodies for
//! a runtime that handles those concerns.
//!
//! Unset members never appear in serialized requests, members set to zero
//! values always do, and present-but-empty lists stay distinct from absent
//! ones in both directions.

pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;
pub mod paginator;

#[doc(hidden)]
pub mod json_deser;
#[doc(hidden)]
pub mod json_ser;

pub use dms_types::DateTime;
