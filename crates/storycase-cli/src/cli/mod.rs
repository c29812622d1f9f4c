// Dweve StoryCase - User Story Test Case Generator
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
//!
//! Commands are grouped by category and flattened into a single top-level
//! subcommand list:
//!
//! - [`core`]: story commands (generate, presets)
//! - [`utility`]: utility commands (completion)

mod core;
mod utility;

use crate::error::CliError;
use clap::{Parser, Subcommand};

pub use core::CoreCommands;
pub use utility::UtilityCommands;

/// StoryCase - turn user stories into manual test cases
///
/// # Examples
///
/// ```bash
/// # Generate standard test cases from a file
/// storycase generate stories.txt
///
/// # Checklist format from stdin, saved to a file
/// cat stories.txt | storycase generate - --format simple -o checklist.txt
///
/// # Try a built-in example
/// storycase generate --preset login --emit json
/// ```
#[derive(Parser)]
#[command(name = "storycase")]
#[command(author, version, about = "StoryCase - turn user stories into manual test cases", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
///
/// ```text
/// Commands
/// ├── Core (generate, presets)
/// └── Utility (completion)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Story commands - flattened to appear at top level
    #[command(flatten)]
    Core(CoreCommands),

    // Utility commands - flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if input cannot be read, contains no stories, or output
    /// cannot be written.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
