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

//! Workload → worklet → phase → interval traversal.

use roxmltree::{Document, Node};
use sertkit_core::{IntervalRecord, SertResult, CALIBRATION_LOADLEVEL};

use crate::metrics::extract_metrics;
use crate::tree::{children, find_path, require_attribute, require_child, require_f64};

/// Extract one record per measurement interval or calibration event, in
/// document order.
///
/// Measurement phases emit a record per interval; calibration phases emit
/// exactly one record with the calibration sentinel load level. Phase types
/// other than these two are skipped, not errors, so newer documents with
/// unrecognized phases still extract.
pub fn extract_results(doc: &Document<'_>) -> SertResult<Vec<IntervalRecord>> {
    let root = doc.root_element();
    let run_data = require_child(root, "run-data")?;

    let mut records = Vec::new();
    for workload in children(run_data, "workload") {
        let workload_name = require_attribute(workload, "name")?;
        for worklet in children(workload, "worklet") {
            let worklet_name = require_attribute(worklet, "name")?;
            for phase in worklet.descendants().filter(|n| n.has_tag_name("phase")) {
                match phase.attribute("type") {
                    Some("measurement") => {
                        extract_measurement_phase(
                            phase,
                            &workload_name,
                            &worklet_name,
                            &mut records,
                        )?;
                    }
                    Some("calibration") => {
                        records.push(extract_calibration_phase(
                            phase,
                            &workload_name,
                            &worklet_name,
                        )?);
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(records)
}

fn extract_measurement_phase(
    phase: Node,
    workload: &str,
    worklet: &str,
    records: &mut Vec<IntervalRecord>,
) -> SertResult<()> {
    for sequence in children(phase, "sequence") {
        for interval in children(sequence, "interval") {
            let loadlevel = require_attribute(interval, "name")?;
            let result_el = require_child(interval, "result")?;

            let mut record = IntervalRecord::new(workload, worklet, loadlevel);
            record.score = Some(require_f64(require_child(result_el, "score")?)?);
            extract_metrics(result_el, &mut record)?;
            records.push(record);
        }
    }
    Ok(())
}

fn extract_calibration_phase(
    phase: Node,
    workload: &str,
    worklet: &str,
) -> SertResult<IntervalRecord> {
    let tps = find_path(phase, &["calibrationResult", "transactionsPerSecond"]).ok_or_else(
        || {
            sertkit_core::SertError::missing_element(format!(
                "calibrationResult/transactionsPerSecond not found in calibration phase of worklet '{}'",
                worklet
            ))
        },
    )?;

    let mut record = IntervalRecord::new(workload, worklet, CALIBRATION_LOADLEVEL);
    record.score = Some(require_f64(tps)?);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sertkit_core::SertErrorKind;

    fn extract(xml: &str) -> SertResult<Vec<IntervalRecord>> {
        let doc = roxmltree::Document::parse(xml).unwrap();
        extract_results(&doc)
    }

    const TWO_PHASE_WORKLET: &str = r#"<results><run-data>
      <workload name="CPU">
        <worklet name="Compress">
          <phase type="calibration">
            <calibrationResult><transactionsPerSecond>1200.0</transactionsPerSecond></calibrationResult>
          </phase>
          <phase type="measurement">
            <sequence>
              <interval name="100%"><result><score>1195.0</score></result></interval>
              <interval name="75%"><result><score>900.0</score></result></interval>
            </sequence>
          </phase>
        </worklet>
      </workload>
    </run-data></results>"#;

    #[test]
    fn test_document_order_and_context_tags() {
        let records = extract(TWO_PHASE_WORKLET).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].loadlevel, CALIBRATION_LOADLEVEL);
        assert_eq!(records[0].score, Some(1200.0));
        assert_eq!(records[1].loadlevel, "100%");
        assert_eq!(records[2].loadlevel, "75%");
        for record in &records {
            assert_eq!(record.workload, "CPU");
            assert_eq!(record.worklet, "Compress");
        }
    }

    #[test]
    fn test_calibration_record_omits_interval_bounds() {
        let records = extract(TWO_PHASE_WORKLET).unwrap();
        assert!(records[0].start.is_none());
        assert!(records[0].end.is_none());
    }

    #[test]
    fn test_unrecognized_phase_type_skipped() {
        let records = extract(
            r#"<results><run-data>
              <workload name="CPU"><worklet name="Compress">
                <phase type="warmup"><sequence><interval name="10%">
                  <result><score>1.0</score></result>
                </interval></sequence></phase>
              </worklet></workload>
            </run-data></results>"#,
        )
        .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_repeated_load_levels_preserved() {
        let records = extract(
            r#"<results><run-data>
              <workload name="CPU"><worklet name="Compress">
                <phase type="measurement"><sequence>
                  <interval name="50%"><result><score>1.0</score></result></interval>
                  <interval name="50%"><result><score>2.0</score></result></interval>
                </sequence></phase>
              </worklet></workload>
            </run-data></results>"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].loadlevel, records[1].loadlevel);
        assert_ne!(records[0].score, records[1].score);
    }

    #[test]
    fn test_missing_score_is_error() {
        let err = extract(
            r#"<results><run-data>
              <workload name="CPU"><worklet name="Compress">
                <phase type="measurement"><sequence>
                  <interval name="50%"><result/></interval>
                </sequence></phase>
              </worklet></workload>
            </run-data></results>"#,
        )
        .unwrap_err();
        assert_eq!(err.kind, SertErrorKind::MissingElement);
        assert!(err.message.contains("score"));
    }

    #[test]
    fn test_missing_workload_name_is_error() {
        let err = extract(
            r#"<results><run-data><workload><worklet name="w"/></workload></run-data></results>"#,
        )
        .unwrap_err();
        assert_eq!(err.kind, SertErrorKind::MissingElement);
    }

    #[test]
    fn test_missing_run_data_is_error() {
        let err = extract("<results/>").unwrap_err();
        assert_eq!(err.kind, SertErrorKind::MissingElement);
    }

    #[test]
    fn test_empty_run_data_yields_no_records() {
        let records = extract("<results><run-data/></results>").unwrap();
        assert!(records.is_empty());
    }
}
