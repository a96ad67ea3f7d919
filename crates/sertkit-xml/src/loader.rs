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

//! Document loading and parsing.
//!
//! `roxmltree` documents borrow their input text, so reading the file and
//! parsing the tree are two steps; callers keep the text alive for the
//! lifetime of the tree.

use roxmltree::Document;
use sertkit_core::{SertError, SertResult};
use std::fs;
use std::path::Path;

/// Read a results document from disk.
///
/// # Errors
///
/// Returns a `MalformedInput` error when the file cannot be read.
pub fn load_document(path: impl AsRef<Path>) -> SertResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| {
        SertError::malformed_input(format!("cannot read '{}': {}", path.display(), e))
    })
}

/// Parse document text into an element tree.
///
/// # Errors
///
/// Returns a `MalformedInput` error when the text is not well-formed XML.
pub fn parse_document(xml: &str) -> SertResult<Document<'_>> {
    Document::parse(xml)
        .map_err(|e| SertError::malformed_input(format!("XML parse error: {}", e)))
}
