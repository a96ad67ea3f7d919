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

//! Summary-section extraction.
//!
//! The summary subtree reports aggregate scores at three granularities
//! (load level, worklet, workload) plus one overall rollup. Reported values
//! are preserved as-is; the extractor never re-verifies the rollup
//! arithmetic. Per-load-level efficiency is derived from normalized
//! performance and average watts when the source does not supply it.

use roxmltree::{Document, Node};
use sertkit_core::{SertError, SertResult, SummaryRecord, OVERALL_WORKLOAD};

use crate::tree::{child, children, find_path, optional_f64_child, require_attribute, require_f64};

/// Unit-scaling convention of the benchmark. Published efficiency scores are
/// reported per kilounit, so this constant must stay exact.
pub const EFFICIENCY_SCALE: f64 = 1000.0;

fn derive_efficiency(norm_score: f64, watts_avg: f64) -> f64 {
    EFFICIENCY_SCALE * norm_score / watts_avg
}

/// Flatten the summary section into records, in document order: each
/// workload's load-level rows and worklet rollups, then the workload rollup,
/// then one final overall record under the sentinel workload name
/// [`OVERALL_WORKLOAD`].
///
/// # Errors
///
/// Returns a `MissingElement` error when the document has no summary
/// section, and `InvalidValue` for unparseable numeric text.
pub fn extract_summary(doc: &Document<'_>) -> SertResult<Vec<SummaryRecord>> {
    let root = doc.root_element();
    let summary_el = find_path(root, &["run-data", "summary"])
        .ok_or_else(|| SertError::missing_element("element 'run-data/summary' not found"))?;

    let mut records = Vec::new();
    for workload in children(summary_el, "workload") {
        let workload_name = require_attribute(workload, "name")?;

        for worklet in children(workload, "worklet") {
            let worklet_name = require_attribute(worklet, "name")?;

            for load in children(worklet, "loadLevel") {
                records.push(extract_load_level(load, &workload_name, &worklet_name)?);
            }

            // Worklet rollup: efficiency comes straight from the reported score.
            let mut rollup = SummaryRecord::workload_rollup(workload_name.as_str());
            rollup.worklet = Some(worklet_name);
            rollup.ref_score = optional_f64_child(worklet, "reference-performance")?;
            rollup.efficiency_score = optional_f64_child(worklet, "score")?;
            records.push(rollup);
        }

        let mut rollup = SummaryRecord::workload_rollup(workload_name.as_str());
        rollup.efficiency_score = optional_f64_child(workload, "score")?;
        records.push(rollup);
    }

    // Overall rollup from the summary section's own score.
    if let Some(score_el) = child(summary_el, "score") {
        let mut overall = SummaryRecord::workload_rollup(OVERALL_WORKLOAD);
        overall.efficiency_score = Some(require_f64(score_el)?);
        records.push(overall);
    }

    Ok(records)
}

fn extract_load_level(load: Node, workload: &str, worklet: &str) -> SertResult<SummaryRecord> {
    let mut record = SummaryRecord::workload_rollup(workload);
    record.worklet = Some(worklet.to_string());
    record.loadlevel = Some(require_attribute(load, "name")?);
    record.score = optional_f64_child(load, "score")?;
    record.norm_score = optional_f64_child(load, "normalized-performance")?;
    record.watts_avg = optional_f64_child(load, "average-watts")?;
    record.efficiency_score = optional_f64_child(load, "efficiency-score")?;

    if record.efficiency_score.is_none() {
        if let (Some(norm), Some(watts)) = (record.norm_score, record.watts_avg) {
            record.efficiency_score = Some(derive_efficiency(norm, watts));
        }
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sertkit_core::SertErrorKind;

    fn extract(xml: &str) -> SertResult<Vec<SummaryRecord>> {
        let doc = roxmltree::Document::parse(xml).unwrap();
        extract_summary(&doc)
    }

    const SUMMARY: &str = r#"<results><run-data>
      <summary>
        <score>11.5</score>
        <workload name="CPU">
          <score>12.0</score>
          <worklet name="Compress">
            <score>12.4</score>
            <reference-performance>1500.0</reference-performance>
            <loadLevel name="100%">
              <score>1480.0</score>
              <normalized-performance>0.99</normalized-performance>
              <average-watts>180.0</average-watts>
            </loadLevel>
            <loadLevel name="50%">
              <score>745.0</score>
              <normalized-performance>0.5</normalized-performance>
              <average-watts>100.0</average-watts>
              <efficiency-score>5.1</efficiency-score>
            </loadLevel>
          </worklet>
        </workload>
      </summary>
    </run-data></results>"#;

    #[test]
    fn test_granularities_in_document_order() {
        let records = extract(SUMMARY).unwrap();
        assert_eq!(records.len(), 5);
        // load levels first, then worklet rollup, workload rollup, overall
        assert_eq!(records[0].loadlevel.as_deref(), Some("100%"));
        assert_eq!(records[1].loadlevel.as_deref(), Some("50%"));
        assert!(records[2].loadlevel.is_none());
        assert_eq!(records[2].worklet.as_deref(), Some("Compress"));
        assert!(records[3].worklet.is_none());
        assert_eq!(records[3].workload, "CPU");
        assert_eq!(records[4].workload, OVERALL_WORKLOAD);
        assert_eq!(records[4].efficiency_score, Some(11.5));
    }

    #[test]
    fn test_load_level_efficiency_derived() {
        let records = extract(SUMMARY).unwrap();
        // 1000 * 0.99 / 180.0
        assert_eq!(records[0].efficiency_score, Some(5.5));
    }

    #[test]
    fn test_source_provided_efficiency_wins() {
        let records = extract(SUMMARY).unwrap();
        assert_eq!(records[1].efficiency_score, Some(5.1));
    }

    #[test]
    fn test_worklet_rollup_fields() {
        let records = extract(SUMMARY).unwrap();
        assert_eq!(records[2].ref_score, Some(1500.0));
        assert_eq!(records[2].efficiency_score, Some(12.4));
        assert_eq!(records[3].efficiency_score, Some(12.0));
    }

    #[test]
    fn test_derivation_constant_exact() {
        assert_eq!(derive_efficiency(2.0, 4.0), 500.0);
    }

    #[test]
    fn test_efficiency_absent_without_inputs() {
        let records = extract(
            r#"<results><run-data><summary>
              <workload name="CPU"><worklet name="Compress">
                <loadLevel name="25%"><score>370.0</score></loadLevel>
              </worklet></workload>
            </summary></run-data></results>"#,
        )
        .unwrap();
        assert!(records[0].efficiency_score.is_none());
    }

    #[test]
    fn test_missing_summary_section_is_error() {
        let err = extract("<results><run-data/></results>").unwrap_err();
        assert_eq!(err.kind, SertErrorKind::MissingElement);
    }

    #[test]
    fn test_overall_record_requires_summary_score() {
        let records = extract(
            r#"<results><run-data><summary>
              <workload name="CPU"><score>12.0</score></workload>
            </summary></run-data></results>"#,
        )
        .unwrap();
        assert!(records.iter().all(|r| r.workload != OVERALL_WORKLOAD));
    }
}
