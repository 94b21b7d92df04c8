/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! JSON wire support for the Database Migration Service record layer: a
//! push-style writer that only emits what it is given (unset members are
//! simply never written), and a token-streaming reader that preserves the
//! distinction between absent, null, and empty members.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod deserialize;
mod escape;
pub mod serialize;
