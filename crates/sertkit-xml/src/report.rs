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

//! Orchestration of a full document extraction.
//!
//! Sequences walker → summary → environment and fails fast on the first
//! error; a bundle is never partially populated.

use sertkit_core::{ReportBundle, SertResult};
use std::path::Path;

use crate::environment::extract_environment;
use crate::loader::{load_document, parse_document};
use crate::summary::extract_summary;
use crate::walker::extract_results;

/// Extract the three top-level outputs from a results document.
pub fn extract_report(xml: &str) -> SertResult<ReportBundle> {
    let doc = parse_document(xml)?;
    let results = extract_results(&doc)?;
    let summary = extract_summary(&doc)?;
    let environment = extract_environment(&doc)?;
    Ok(ReportBundle {
        results,
        summary,
        environment,
    })
}

/// Load a results document from disk and extract it.
pub fn extract_report_from_file(path: impl AsRef<Path>) -> SertResult<ReportBundle> {
    let text = load_document(path)?;
    extract_report(&text)
}
