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

//! Extraction of SERT benchmark results from XML documents.
//!
//! This crate walks a parsed results document and reshapes it into the flat
//! record types from `sertkit-core`:
//!
//! - [`extract_results`] traverses workload → worklet → phase → interval and
//!   emits one [`IntervalRecord`](sertkit_core::IntervalRecord) per
//!   measurement interval or calibration event, in document order.
//! - [`extract_summary`] flattens the per-load-level, worklet, and workload
//!   aggregate scores, deriving the efficiency score where the source does
//!   not supply one.
//! - [`extract_environment`] pulls hardware and host metadata; both groups
//!   are independently optional and absence is never an error.
//! - [`extract_report`] sequences the three and fails fast on any error.
//! - [`test_period`] and [`run_configuration`] are small read-only queries
//!   usable without running the full extraction.
//!
//! # Example
//!
//! ```rust
//! use sertkit_xml::extract_report;
//!
//! let xml = r#"<results>
//!   <run-data>
//!     <workload name="CPU">
//!       <worklet name="Compress">
//!         <phase type="measurement">
//!           <sequence>
//!             <interval name="100%">
//!               <result><score>998.5</score><metrics/></result>
//!             </interval>
//!           </sequence>
//!         </phase>
//!       </worklet>
//!     </workload>
//!     <summary>
//!       <workload name="CPU">
//!         <score>11.2</score>
//!       </workload>
//!     </summary>
//!   </run-data>
//! </results>"#;
//!
//! let bundle = extract_report(xml)?;
//! assert_eq!(bundle.results.len(), 1);
//! assert_eq!(bundle.results[0].loadlevel, "100%");
//! # Ok::<(), sertkit_core::SertError>(())
//! ```

mod environment;
mod loader;
mod metrics;
mod query;
mod report;
mod summary;
mod tree;
mod walker;

pub use environment::extract_environment;
pub use loader::{load_document, parse_document};
pub use query::{run_configuration, test_period};
pub use report::{extract_report, extract_report_from_file};
pub use summary::{extract_summary, EFFICIENCY_SCALE};
pub use walker::extract_results;
