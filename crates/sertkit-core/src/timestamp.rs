// Dweve SERTKIT - SERT Results Extraction Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Format-tolerant timestamp parsing.
//!
//! The benchmark tool is inconsistent across its own output versions: some
//! emit interval timestamps with fractional seconds, some without. Parsing
//! tries an ordered list of accepted layouts and fails only when none match.

use chrono::{DateTime, FixedOffset};

use crate::error::{SertError, SertResult};

/// Accepted timestamp layouts, tried in order: fractional seconds first,
/// whole seconds second.
pub const ACCEPTED_TIMESTAMP_FORMATS: [&str; 2] =
    ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M:%S%:z"];

/// Parse a measurement timestamp in either accepted layout.
///
/// # Errors
///
/// Returns a `TimestampFormat` error naming the offending text when neither
/// layout matches.
pub fn parse_timestamp(text: &str) -> SertResult<DateTime<FixedOffset>> {
    for format in ACCEPTED_TIMESTAMP_FORMATS {
        if let Ok(instant) = DateTime::parse_from_str(text, format) {
            return Ok(instant);
        }
    }
    Err(SertError::timestamp_format(format!(
        "no accepted format matches timestamp '{}'",
        text
    )))
}
