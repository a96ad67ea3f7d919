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

//! Flat record types produced by the extractors.
//!
//! Field names serialize with the hyphenated spelling used by downstream
//! tabular tooling (`temp-min`, `watts-avg`, `norm-score`). Optional fields
//! are omitted from the JSON output entirely when absent.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Sentinel load level for records emitted from a calibration phase.
pub const CALIBRATION_LOADLEVEL: &str = "calibration";

/// Sentinel workload name for the overall efficiency rollup.
pub const OVERALL_WORKLOAD: &str = "All";

/// One observation per measurement interval or calibration event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalRecord {
    pub workload: String,
    pub worklet: String,
    /// Named load level, or [`CALIBRATION_LOADLEVEL`].
    pub loadlevel: String,
    /// Transaction rate or performance score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<FixedOffset>>,
    #[serde(rename = "temp-min", skip_serializing_if = "Option::is_none")]
    pub temp_min: Option<f64>,
    #[serde(rename = "temp-max", skip_serializing_if = "Option::is_none")]
    pub temp_max: Option<f64>,
    #[serde(rename = "temp-avg", skip_serializing_if = "Option::is_none")]
    pub temp_avg: Option<f64>,
    #[serde(rename = "watts-min", skip_serializing_if = "Option::is_none")]
    pub watts_min: Option<f64>,
    #[serde(rename = "watts-max", skip_serializing_if = "Option::is_none")]
    pub watts_max: Option<f64>,
    #[serde(rename = "watts-avg", skip_serializing_if = "Option::is_none")]
    pub watts_avg: Option<f64>,
}

impl IntervalRecord {
    /// Create a record with identifiers only; metric fields start absent.
    pub fn new(
        workload: impl Into<String>,
        worklet: impl Into<String>,
        loadlevel: impl Into<String>,
    ) -> Self {
        Self {
            workload: workload.into(),
            worklet: worklet.into(),
            loadlevel: loadlevel.into(),
            score: None,
            start: None,
            end: None,
            temp_min: None,
            temp_max: None,
            temp_avg: None,
            watts_min: None,
            watts_max: None,
            watts_avg: None,
        }
    }

    /// True for records emitted from a calibration phase.
    pub fn is_calibration(&self) -> bool {
        self.loadlevel == CALIBRATION_LOADLEVEL
    }
}

/// One aggregate score row: per load level, per worklet rollup, per workload
/// rollup, or the final overall rollup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    pub workload: String,
    /// Absent for workload-only rollups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worklet: Option<String>,
    /// Absent for worklet and workload rollups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loadlevel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(rename = "norm-score", skip_serializing_if = "Option::is_none")]
    pub norm_score: Option<f64>,
    #[serde(rename = "watts-avg", skip_serializing_if = "Option::is_none")]
    pub watts_avg: Option<f64>,
    #[serde(rename = "ref-score", skip_serializing_if = "Option::is_none")]
    pub ref_score: Option<f64>,
    #[serde(rename = "efficiency-score", skip_serializing_if = "Option::is_none")]
    pub efficiency_score: Option<f64>,
}

impl SummaryRecord {
    /// Create a rollup record carrying only the workload identifier.
    pub fn workload_rollup(workload: impl Into<String>) -> Self {
        Self {
            workload: workload.into(),
            worklet: None,
            loadlevel: None,
            score: None,
            norm_score: None,
            watts_avg: None,
            ref_score: None,
            efficiency_score: None,
        }
    }
}

/// Hardware and host metadata for the system under test.
///
/// Both field groups are independently optional: hardware fields come from
/// the namespaced test-environment subtree, host fields from a `host`
/// element under the run-data root. Either may be absent from a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnvironmentRecord {
    // Hardware group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimm_size_mb: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psu: Option<f64>,
    /// Internal reference id from the test information block.
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
    // Host group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_cores: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_cores: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numa_nodes: Option<u32>,
}

impl EnvironmentRecord {
    /// True when no field in either group was extracted.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Run configuration summary from the auxiliary query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jvm: Option<String>,
}

/// The three top-level outputs of one document extraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportBundle {
    pub results: Vec<IntervalRecord>,
    pub summary: Vec<SummaryRecord>,
    pub environment: EnvironmentRecord,
}
