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

//! Conflict-raising deep merge over JSON mappings.
//!
//! The benchmark format has shown real version-to-version key collisions
//! that must not be silently resolved one way, so overlap is only accepted
//! when both sides are sub-mappings (merged recursively) or the leaf values
//! are equal. Any other collision fails with the full dotted key path.
//!
//! The merge is pure: it returns a new mapping and never mutates an input.

use serde_json::Value;

use crate::error::{SertError, SertResult};

/// Deep-merge `b` into `a`, returning the combined mapping.
///
/// # Errors
///
/// Returns a `MergeConflict` error carrying the dotted key path when the two
/// mappings disagree on a leaf value or on the shape of a shared key.
pub fn merge(a: &Value, b: &Value) -> SertResult<Value> {
    merge_at(a, b, &mut Vec::new())
}

fn merge_at(a: &Value, b: &Value, path: &mut Vec<String>) -> SertResult<Value> {
    match (a, b) {
        (Value::Object(map_a), Value::Object(map_b)) => {
            let mut merged = map_a.clone();
            for (key, value_b) in map_b {
                match map_a.get(key) {
                    None => {
                        merged.insert(key.clone(), value_b.clone());
                    }
                    Some(value_a) => {
                        path.push(key.clone());
                        let combined = merge_at(value_a, value_b, path)?;
                        path.pop();
                        merged.insert(key.clone(), combined);
                    }
                }
            }
            Ok(Value::Object(merged))
        }
        (value_a, value_b) if value_a == value_b => Ok(value_a.clone()),
        _ => Err(SertError::merge_conflict(path.join("."))),
    }
}
