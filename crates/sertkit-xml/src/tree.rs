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

//! Lookup helpers over `roxmltree` nodes.
//!
//! Element presence is always reported as an `Option` and tested explicitly;
//! a found-but-childless element is still found. Namespaced subtrees use the
//! constant URI table below, resolved once instead of inlined per access.

use roxmltree::Node;
use sertkit_core::{SertError, SertResult};

/// Namespace of the test-environment subtree.
pub(crate) const NS_ENVIRONMENT: &str = "http://spec.org/test-environment";

/// Namespace of the power-chauffeur run configuration subtree.
pub(crate) const NS_CHAUFFEUR: &str = "http://spec.org/power_chauffeur";

/// First direct child element with the given un-namespaced name.
pub(crate) fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.has_tag_name(name))
}

/// First direct child element with the given namespaced name.
pub(crate) fn child_ns<'a, 'input>(
    node: Node<'a, 'input>,
    ns: &str,
    name: &str,
) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.has_tag_name((ns, name)))
}

/// Walk a chain of direct-child element names.
pub(crate) fn find_path<'a, 'input>(
    node: Node<'a, 'input>,
    path: &[&str],
) -> Option<Node<'a, 'input>> {
    path.iter().try_fold(node, |current, name| child(current, name))
}

/// Walk a chain of direct-child element names within one namespace.
pub(crate) fn find_path_ns<'a, 'input>(
    node: Node<'a, 'input>,
    ns: &str,
    path: &[&str],
) -> Option<Node<'a, 'input>> {
    path.iter()
        .try_fold(node, |current, name| child_ns(current, ns, name))
}

/// Direct child elements with the given un-namespaced name, in document order.
pub(crate) fn children<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |n| n.is_element() && n.has_tag_name(name))
}

/// Direct child element that the schema requires to be present.
pub(crate) fn require_child<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
) -> SertResult<Node<'a, 'input>> {
    child(node, name).ok_or_else(|| {
        SertError::missing_element(format!(
            "element '{}' not found under '{}'",
            name,
            node.tag_name().name()
        ))
    })
}

/// Attribute that the schema requires to be present and non-empty.
pub(crate) fn require_attribute(node: Node, name: &str) -> SertResult<String> {
    match node.attribute(name) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(SertError::missing_element(format!(
            "attribute '{}' not found on '{}'",
            name,
            node.tag_name().name()
        ))),
    }
}

/// Trimmed text content, `None` when missing or whitespace-only.
pub(crate) fn text_of(node: Node) -> Option<String> {
    node.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Text content that the schema requires to be present.
pub(crate) fn require_text(node: Node) -> SertResult<String> {
    text_of(node).ok_or_else(|| {
        SertError::missing_element(format!(
            "element '{}' has no text content",
            node.tag_name().name()
        ))
    })
}

/// Parse an element's text as a float.
pub(crate) fn require_f64(node: Node) -> SertResult<f64> {
    let text = require_text(node)?;
    text.parse::<f64>().map_err(|_| {
        SertError::invalid_value(format!(
            "'{}' is not a valid number in element '{}'",
            text,
            node.tag_name().name()
        ))
    })
}

/// Parse an element's text as an unsigned integer.
pub(crate) fn require_u32(node: Node) -> SertResult<u32> {
    let text = require_text(node)?;
    text.parse::<u32>().map_err(|_| {
        SertError::invalid_value(format!(
            "'{}' is not a valid integer in element '{}'",
            text,
            node.tag_name().name()
        ))
    })
}

/// Float from an optional direct child: absent element yields `None`,
/// unparseable text is still an error.
pub(crate) fn optional_f64_child(node: Node, name: &str) -> SertResult<Option<f64>> {
    child(node, name).map(require_f64).transpose()
}
