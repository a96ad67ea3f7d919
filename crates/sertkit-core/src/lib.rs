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

//! Core data model for SERT benchmark result extraction.
//!
//! This crate provides the flat record types produced by the extractors in
//! `sertkit-xml`, the shared error type, the format-tolerant timestamp
//! parser, and the conflict-raising deep merge used to combine result
//! mappings from multiple documents.
//!
//! The record types are plain `Serialize` views: they are constructed once
//! per input document and carry no behavior beyond field access. Numeric
//! fields use `Option` so that a metric category absent from the source is
//! absent from the output as well, never defaulted to zero.

mod error;
mod merge;
mod record;
mod timestamp;

pub use error::{SertError, SertErrorKind, SertResult};
pub use merge::merge;
pub use record::{
    EnvironmentRecord, IntervalRecord, ReportBundle, RunConfiguration, SummaryRecord,
    CALIBRATION_LOADLEVEL, OVERALL_WORKLOAD,
};
pub use timestamp::{parse_timestamp, ACCEPTED_TIMESTAMP_FORMATS};
