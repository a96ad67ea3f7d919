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

//! Per-interval metric extraction.
//!
//! A measurement result nests zero or more providers under its metrics
//! block; each provider reports one category (timing, temperature-sensor,
//! power-analyzer). Categories absent from the input stay absent from the
//! record.

use roxmltree::Node;
use sertkit_core::{parse_timestamp, IntervalRecord, SertResult};

use crate::tree::{child, require_child, require_f64, require_text};

/// Fill the metric fields of `record` from an interval's result element.
///
/// Absent providers leave their fields untouched. A timing provider with a
/// missing or malformed instant is an error; so is unparseable numeric text
/// in a temperature or power reading.
pub(crate) fn extract_metrics(result_el: Node, record: &mut IntervalRecord) -> SertResult<()> {
    let Some(metrics_el) = child(result_el, "metrics") else {
        return Ok(());
    };

    for provider in metrics_el
        .descendants()
        .filter(|n| n.has_tag_name("provider"))
    {
        for category in provider.children().filter(|n| n.is_element()) {
            match category.tag_name().name() {
                "timing" => {
                    let interval = require_child(category, "interval")?;
                    let started = require_text(require_child(interval, "started")?)?;
                    let ending = require_text(require_child(interval, "ending")?)?;
                    record.start = Some(parse_timestamp(&started)?);
                    record.end = Some(parse_timestamp(&ending)?);
                }
                "temperature-sensor" => {
                    let measurement = require_child(category, "measurement")?;
                    let temperature = require_child(measurement, "temperature")?;
                    record.temp_min = Some(require_f64(require_child(temperature, "minimum")?)?);
                    record.temp_max = Some(require_f64(require_child(temperature, "maximum")?)?);
                    record.temp_avg = Some(require_f64(require_child(temperature, "average")?)?);
                }
                "power-analyzer" => {
                    let measurement = require_child(category, "measurement")?;
                    let watts = require_child(measurement, "watts")?;
                    record.watts_min = Some(require_f64(require_child(watts, "minimum")?)?);
                    record.watts_max = Some(require_f64(require_child(watts, "maximum")?)?);
                    record.watts_avg = Some(require_f64(require_child(watts, "average")?)?);
                }
                _ => {}
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sertkit_core::SertErrorKind;

    fn extract(xml: &str) -> SertResult<IntervalRecord> {
        let doc = roxmltree::Document::parse(xml).unwrap();
        let mut record = IntervalRecord::new("CPU", "Compress", "100%");
        extract_metrics(doc.root_element(), &mut record)?;
        Ok(record)
    }

    #[test]
    fn test_all_three_providers() {
        let record = extract(
            r#"<result>
              <metrics>
                <provider id="p1">
                  <timing><interval>
                    <started>2022-01-01T10:00:00.000+00:00</started>
                    <ending>2022-01-01T10:02:00+00:00</ending>
                  </interval></timing>
                </provider>
                <provider id="p2">
                  <temperature-sensor><measurement><temperature>
                    <minimum>21.0</minimum><maximum>23.5</maximum><average>22.1</average>
                  </temperature></measurement></temperature-sensor>
                </provider>
                <provider id="p3">
                  <power-analyzer><measurement><watts>
                    <minimum>110.0</minimum><maximum>140.0</maximum><average>126.3</average>
                  </watts></measurement></power-analyzer>
                </provider>
              </metrics>
            </result>"#,
        )
        .unwrap();

        assert!(record.start.is_some());
        assert!(record.end.is_some());
        assert_eq!(record.temp_min, Some(21.0));
        assert_eq!(record.temp_avg, Some(22.1));
        assert_eq!(record.watts_max, Some(140.0));
        assert_eq!(record.watts_avg, Some(126.3));
    }

    #[test]
    fn test_absent_categories_stay_absent() {
        let record = extract(
            r#"<result><metrics>
              <provider id="p3">
                <power-analyzer><measurement><watts>
                  <minimum>110.0</minimum><maximum>140.0</maximum><average>126.3</average>
                </watts></measurement></power-analyzer>
              </provider>
            </metrics></result>"#,
        )
        .unwrap();

        assert!(record.start.is_none());
        assert!(record.temp_min.is_none());
        assert_eq!(record.watts_min, Some(110.0));
    }

    #[test]
    fn test_missing_metrics_block_is_not_an_error() {
        let record = extract("<result><score>1.0</score></result>").unwrap();
        assert!(record.watts_avg.is_none());
    }

    #[test]
    fn test_unknown_provider_category_ignored() {
        let record = extract(
            r#"<result><metrics>
              <provider id="px"><humidity-sensor><value>40</value></humidity-sensor></provider>
            </metrics></result>"#,
        )
        .unwrap();
        assert!(record.temp_min.is_none());
    }

    #[test]
    fn test_bad_timestamp_fails() {
        let err = extract(
            r#"<result><metrics><provider id="p1">
              <timing><interval>
                <started>2022-01-01</started>
                <ending>2022-01-01T10:02:00+00:00</ending>
              </interval></timing>
            </provider></metrics></result>"#,
        )
        .unwrap_err();
        assert_eq!(err.kind, SertErrorKind::TimestampFormat);
    }

    #[test]
    fn test_timing_missing_instant_fails() {
        let err = extract(
            r#"<result><metrics><provider id="p1">
              <timing><interval><started>2022-01-01T10:00:00+00:00</started></interval></timing>
            </provider></metrics></result>"#,
        )
        .unwrap_err();
        assert_eq!(err.kind, SertErrorKind::MissingElement);
    }

    #[test]
    fn test_non_numeric_watts_fails() {
        let err = extract(
            r#"<result><metrics><provider id="p3">
              <power-analyzer><measurement><watts>
                <minimum>low</minimum><maximum>140.0</maximum><average>126.3</average>
              </watts></measurement></power-analyzer>
            </provider></metrics></result>"#,
        )
        .unwrap_err();
        assert_eq!(err.kind, SertErrorKind::InvalidValue);
    }
}
