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

//! CLI command implementations.

use sertkit_xml::{extract_report_from_file, load_document, parse_document};
use std::fs;
use std::io::{self, Write};

/// Extract a results document and write the report bundle as UTF-8 JSON.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, the document is malformed or
/// incomplete, or the output cannot be written.
pub fn extract(file: &str, output: Option<&str>, pretty: bool) -> Result<(), String> {
    let bundle = extract_report_from_file(file).map_err(|e| e.to_string())?;

    let json = if pretty {
        serde_json::to_string_pretty(&bundle)
    } else {
        serde_json::to_string(&bundle)
    }
    .map_err(|e| format!("JSON serialization error: {}", e))?;

    write_output(&json, output)
}

/// Print the overall test period as two labeled raw timestamps.
pub fn period(file: &str) -> Result<(), String> {
    let text = load_document(file).map_err(|e| e.to_string())?;
    let doc = parse_document(&text).map_err(|e| e.to_string())?;
    let (starting, ending) = sertkit_xml::test_period(&doc).map_err(|e| e.to_string())?;

    write_output(&format!("starting: {}\nending: {}\n", starting, ending), None)
}

/// Print the run configuration mapping as JSON.
pub fn config(file: &str) -> Result<(), String> {
    let text = load_document(file).map_err(|e| e.to_string())?;
    let doc = parse_document(&text).map_err(|e| e.to_string())?;
    let conf = sertkit_xml::run_configuration(&doc);

    let json = serde_json::to_string_pretty(&conf)
        .map_err(|e| format!("JSON serialization error: {}", e))?;
    write_output(&json, None)
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), String> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| format!("Failed to write '{}': {}", p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| format!("Failed to write to stdout: {}", e)),
    }
}
