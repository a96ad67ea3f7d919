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

//! Hardware and host metadata extraction.
//!
//! Some result documents omit full environment capture, so absence of the
//! test-environment subtree, the host element, or any individual field is
//! valid: the extractor returns whatever partial record the document
//! supports. Presence is tested as found/not-found, never by inspecting an
//! element's children.

use roxmltree::{Document, Node};
use sertkit_core::{EnvironmentRecord, SertResult};

use crate::tree::{
    child, child_ns, find_path, find_path_ns, require_f64, require_u32, text_of, NS_ENVIRONMENT,
};

/// Extract the environment record; both field groups are independently
/// optional and an empty document yields an empty record.
///
/// # Errors
///
/// Returns `InvalidValue` only when a present integer field has
/// unparseable text.
pub fn extract_environment(doc: &Document<'_>) -> SertResult<EnvironmentRecord> {
    let root = doc.root_element();
    let mut env = EnvironmentRecord::default();

    if let Some(test_env) = child_ns(root, NS_ENVIRONMENT, "TestEnvironment") {
        extract_hardware(test_env, &mut env)?;
    }

    if let Some(host) = find_path(root, &["run-data", "host"]) {
        extract_host(host, &mut env)?;
    }

    Ok(env)
}

fn extract_hardware(test_env: Node, env: &mut EnvironmentRecord) -> SertResult<()> {
    let Some(hardware) =
        find_path_ns(test_env, NS_ENVIRONMENT, &["SystemUnderTest", "Node", "Hardware"])
    else {
        return Ok(());
    };

    env.vendor = child_ns(hardware, NS_ENVIRONMENT, "Vendor").and_then(text_of);
    env.model = child_ns(hardware, NS_ENVIRONMENT, "Model").and_then(text_of);
    env.cpu = find_path_ns(hardware, NS_ENVIRONMENT, &["Cpu", "Name"]).and_then(text_of);
    env.dimms = find_path_ns(hardware, NS_ENVIRONMENT, &["Memory", "Dimms", "Quantity"])
        .map(require_u32)
        .transpose()?;
    env.dimm_size_mb = find_path_ns(hardware, NS_ENVIRONMENT, &["Memory", "Dimms", "DimmSizeMB"])
        .map(require_u32)
        .transpose()?;
    env.psu = find_path_ns(
        hardware,
        NS_ENVIRONMENT,
        &["PowerSupplies", "PowerSupply", "RatingInWatts"],
    )
    .map(require_f64)
    .transpose()?;
    env.ref_id = find_path_ns(test_env, NS_ENVIRONMENT, &["TestInformation", "InternalReference"])
        .and_then(text_of);

    Ok(())
}

fn extract_host(host: Node, env: &mut EnvironmentRecord) -> SertResult<()> {
    env.hostname = child(host, "hostname").and_then(text_of);
    env.logical_cores = child(host, "logicalCores").map(require_u32).transpose()?;
    env.physical_cores = child(host, "physicalCores").map(require_u32).transpose()?;
    env.numa_nodes = child(host, "numaNodes").map(require_u32).transpose()?;
    Ok(())
}
