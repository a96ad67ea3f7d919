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

//! SERTKIT Command Line Interface

use clap::Parser;
use sertkit_cli::cli::Commands;
use std::process::ExitCode;

/// SERTKIT - SERT benchmark results extraction toolkit
///
/// Extracts flat tabular records from SERT XML results documents:
/// per-interval measurements, summary efficiency scores, and test
/// environment metadata, written out as JSON.
///
/// # Examples
///
/// ```bash
/// # Extract a full report to JSON
/// sertkit extract results.xml --output out.json --pretty
///
/// # Print the overall test period
/// sertkit period results.xml
///
/// # Print the run configuration
/// sertkit config results.xml
/// ```
#[derive(Parser)]
#[command(name = "sertkit")]
#[command(author, version, about = "SERTKIT - SERT benchmark results extraction toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
