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

//! CLI command definitions and argument parsing.

use clap::Subcommand;

use crate::commands;

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Extract a results document into flat JSON records
    ///
    /// Produces the full report bundle: per-interval result records, the
    /// flattened summary scores, and the environment mapping.
    Extract {
        /// Input SERT results XML file
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty print JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the overall test start and end timestamps
    Period {
        /// Input SERT results XML file
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Print the run configuration (client id, OS, JVM) as JSON
    Config {
        /// Input SERT results XML file
        #[arg(value_name = "FILE")]
        file: String,
    },
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns an error message when file I/O, extraction, or output
    /// writing fails.
    pub fn execute(self) -> Result<(), String> {
        match self {
            Commands::Extract {
                file,
                output,
                pretty,
            } => commands::extract(&file, output.as_deref(), pretty),
            Commands::Period { file } => commands::period(&file),
            Commands::Config { file } => commands::config(&file),
        }
    }
}
