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

//! Story commands: test case generation and example presets.

use crate::commands::{self, ConfigOverrides, Emit, StorySource};
use crate::error::CliError;
use clap::Subcommand;
use storycase_core::{DetailLevel, Preset, SetupMode, TestFormat};

/// Story commands.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Generate test cases from user stories
    ///
    /// Reads one user story per line (blank lines are skipped) and prints
    /// positive, negative and edge-case scenarios for each. Explicit flags
    /// override values loaded with --config.
    Generate {
        /// Story file path ('-' reads stdin)
        #[arg(
            value_name = "FILE",
            required_unless_present = "preset",
            conflicts_with = "preset"
        )]
        file: Option<String>,

        /// Use a built-in example instead of a file (login, cart, profile, payment)
        #[arg(short, long, value_name = "NAME")]
        preset: Option<Preset>,

        /// Output layout (standard, detailed, simple)
        #[arg(short, long)]
        format: Option<TestFormat>,

        /// Detail level (basic, standard, comprehensive)
        #[arg(short, long)]
        detail: Option<DetailLevel>,

        /// Skip positive scenarios
        #[arg(long)]
        no_positive: bool,

        /// Skip negative scenarios
        #[arg(long)]
        no_negative: bool,

        /// Skip edge-case scenarios
        #[arg(long)]
        no_edge: bool,

        /// Times each scenario generator runs per story
        #[arg(short = 'n', long, value_name = "COUNT")]
        count: Option<u32>,

        /// Keep setup and teardown steps (yes, no)
        #[arg(long, value_name = "yes|no")]
        setup: Option<SetupMode>,

        /// Output encoding
        #[arg(short, long, value_enum, default_value_t = Emit::Text)]
        emit: Emit,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// JSON generation config used as the base settings
        #[arg(short, long, value_name = "PATH")]
        config: Option<String>,
    },

    /// List the built-in example stories
    ///
    /// Without a name, lists every preset with its story titles. With a
    /// name, prints that preset's raw stories.
    Presets {
        /// Preset to print (login, cart, profile, payment)
        #[arg(value_name = "NAME")]
        name: Option<Preset>,
    },
}

impl CoreCommands {
    /// Execute the story command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Generate {
                file,
                preset,
                format,
                detail,
                no_positive,
                no_negative,
                no_edge,
                count,
                setup,
                emit,
                output,
                config,
            } => {
                let source = StorySource::from_args(file, preset)?;
                let overrides = ConfigOverrides {
                    format,
                    detail,
                    no_positive,
                    no_negative,
                    no_edge,
                    count,
                    setup,
                };
                commands::generate(
                    &source,
                    config.as_deref(),
                    &overrides,
                    emit,
                    output.as_deref(),
                )
            }
            CoreCommands::Presets { name } => commands::presets(name),
        }
    }
}
