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

//! Error types for SERT result extraction.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SertErrorKind {
    /// Input is unreadable or not well-formed XML.
    MalformedInput,
    /// A required element or attribute is absent.
    MissingElement,
    /// No accepted timestamp format matched.
    TimestampFormat,
    /// Two merged mappings disagree on a leaf value.
    MergeConflict,
    /// Text that cannot be parsed as the documented numeric type.
    InvalidValue,
    /// Output file operations failed.
    IO,
}

impl fmt::Display for SertErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput => write!(f, "MalformedInputError"),
            Self::MissingElement => write!(f, "MissingElementError"),
            Self::TimestampFormat => write!(f, "TimestampFormatError"),
            Self::MergeConflict => write!(f, "MergeConflictError"),
            Self::InvalidValue => write!(f, "InvalidValueError"),
            Self::IO => write!(f, "IOError"),
        }
    }
}

/// An error that occurred during SERT result extraction.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct SertError {
    /// The kind of error.
    pub kind: SertErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Dotted element or key path where the error occurred, when known
    /// (e.g., the conflicting key of a failed merge).
    pub path: Option<String>,
}

impl SertError {
    /// Create a new error.
    pub fn new(kind: SertErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: None,
        }
    }

    /// Attach a dotted path locating the error within the document or mapping.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    // Convenience constructors for each error kind
    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self::new(SertErrorKind::MalformedInput, message)
    }

    pub fn missing_element(message: impl Into<String>) -> Self {
        Self::new(SertErrorKind::MissingElement, message)
    }

    pub fn timestamp_format(message: impl Into<String>) -> Self {
        Self::new(SertErrorKind::TimestampFormat, message)
    }

    /// A merge conflict at the given dotted key path.
    pub fn merge_conflict(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(
            SertErrorKind::MergeConflict,
            format!("conflict at '{}'", path),
        )
        .with_path(path)
    }

    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::new(SertErrorKind::InvalidValue, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(SertErrorKind::IO, message)
    }
}

/// Result type for SERT extraction operations.
pub type SertResult<T> = Result<T, SertError>;
