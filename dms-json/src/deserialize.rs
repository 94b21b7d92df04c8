/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Token-streaming JSON reader.

mod error;
mod token;

pub use error::DeserializeError;
pub use token::{
    expect_bool_or_null, expect_number_or_null, expect_start_array, expect_start_object,
    expect_string_or_null, expect_timestamp_or_null, json_token_iter, skip_value, EscapedStr,
    JsonTokenIterator, Offset, Token,
};
