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

//! Auxiliary read-only queries, usable without running the full extraction.

use roxmltree::Document;
use sertkit_core::{RunConfiguration, SertError, SertResult};

use crate::tree::{
    child, child_ns, find_path, find_path_ns, require_child, require_text, text_of, NS_CHAUFFEUR,
    NS_ENVIRONMENT,
};

/// The overall test's start and end timestamps, as the raw strings reported
/// by the suite-level timing provider.
///
/// # Errors
///
/// Returns a `MissingElement` error when the suite-level timing provider or
/// either of its instants is absent.
pub fn test_period(doc: &Document<'_>) -> SertResult<(String, String)> {
    let root = doc.root_element();
    let metrics = find_path(root, &["run-data", "metrics"])
        .ok_or_else(|| SertError::missing_element("element 'run-data/metrics' not found"))?;

    for provider in metrics.descendants().filter(|n| n.has_tag_name("provider")) {
        if provider.attribute("id") == Some("timing") {
            let suite = find_path(provider, &["timing", "suite"]).ok_or_else(|| {
                SertError::missing_element("element 'timing/suite' not found in timing provider")
            })?;
            let starting = require_text(require_child(suite, "starting")?)?;
            let ending = require_text(require_child(suite, "ending")?)?;
            return Ok((starting, ending));
        }
    }

    Err(SertError::missing_element(
        "no provider with id 'timing' under 'run-data/metrics'",
    ))
}

/// Client id, operating system name, and JVM version, each optional.
pub fn run_configuration(doc: &Document<'_>) -> RunConfiguration {
    let root = doc.root_element();
    let mut conf = RunConfiguration::default();

    if let Some(run_data) = child(root, "run-data") {
        conf.client = find_path_ns(run_data, NS_CHAUFFEUR, &["configuration", "suite"])
            .and_then(|suite| child_ns(suite, NS_CHAUFFEUR, "client-configuration"))
            .and_then(|client| client.attribute("id").map(str::to_string));
    }

    if let Some(test_env) = child_ns(root, NS_ENVIRONMENT, "TestEnvironment") {
        let software_path = ["SystemUnderTest", "Node", "Software"];
        if let Some(software) = find_path_ns(test_env, NS_ENVIRONMENT, &software_path) {
            conf.os = find_path_ns(software, NS_ENVIRONMENT, &["OperatingSystem", "Name"])
                .and_then(text_of);
            conf.jvm =
                find_path_ns(software, NS_ENVIRONMENT, &["JVM", "Version"]).and_then(text_of);
        }
    }

    conf
}

#[cfg(test)]
mod tests {
    use super::*;
    use sertkit_core::SertErrorKind;

    fn parse(xml: &str) -> roxmltree::Document<'_> {
        roxmltree::Document::parse(xml).unwrap()
    }

    const PERIOD_DOC: &str = r#"<results><run-data>
      <metrics>
        <provider id="power">
          <power-analyzer/>
        </provider>
        <provider id="timing">
          <timing><suite>
            <starting>2017-01-10T09:00:00.000-05:00</starting>
            <ending>2017-01-10T14:08:06.745-05:00</ending>
          </suite></timing>
        </provider>
      </metrics>
    </run-data></results>"#;

    #[test]
    fn test_period_returns_raw_strings() {
        let doc = parse(PERIOD_DOC);
        let (start, end) = test_period(&doc).unwrap();
        assert_eq!(start, "2017-01-10T09:00:00.000-05:00");
        assert_eq!(end, "2017-01-10T14:08:06.745-05:00");
    }

    #[test]
    fn test_period_missing_timing_provider() {
        let doc = parse("<results><run-data><metrics/></run-data></results>");
        let err = test_period(&doc).unwrap_err();
        assert_eq!(err.kind, SertErrorKind::MissingElement);
        assert!(err.message.contains("timing"));
    }

    #[test]
    fn test_run_configuration_all_fields() {
        let doc = parse(
            r#"<results xmlns:pow="http://spec.org/power_chauffeur"
                        xmlns:env="http://spec.org/test-environment">
              <run-data>
                <pow:configuration><pow:suite>
                  <pow:client-configuration id="client-7"/>
                </pow:suite></pow:configuration>
              </run-data>
              <env:TestEnvironment><env:SystemUnderTest><env:Node><env:Software>
                <env:OperatingSystem><env:Name>AcmeOS 12</env:Name></env:OperatingSystem>
                <env:JVM><env:Version>17.0.2</env:Version></env:JVM>
              </env:Software></env:Node></env:SystemUnderTest></env:TestEnvironment>
            </results>"#,
        );
        let conf = run_configuration(&doc);
        assert_eq!(conf.client.as_deref(), Some("client-7"));
        assert_eq!(conf.os.as_deref(), Some("AcmeOS 12"));
        assert_eq!(conf.jvm.as_deref(), Some("17.0.2"));
    }

    #[test]
    fn test_run_configuration_all_optional() {
        let doc = parse("<results><run-data/></results>");
        let conf = run_configuration(&doc);
        assert!(conf.client.is_none());
        assert!(conf.os.is_none());
        assert!(conf.jvm.is_none());
    }
}
