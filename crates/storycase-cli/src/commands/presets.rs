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

//! Presets command - list or print the built-in example stories

use super::write_output;
use crate::error::CliError;
use colored::Colorize;
use storycase_core::{extract_title, story_lines, Preset};

/// List all presets, or print one preset's stories.
///
/// With a name, the raw story text is written to stdout so it can be piped
/// straight into `storycase generate -`.
///
/// # Examples
///
/// ```no_run
/// use storycase_cli::commands::presets;
/// use storycase_core::Preset;
///
/// # fn main() -> Result<(), storycase_cli::error::CliError> {
/// presets(None)?;
/// presets(Some(Preset::Payment))?;
/// # Ok(())
/// # }
/// ```
pub fn presets(name: Option<Preset>) -> Result<(), CliError> {
    match name {
        Some(preset) => write_output(&format!("{}\n", preset.stories()), None),
        None => {
            for preset in Preset::ALL {
                println!("{}", preset.name().green().bold());
                for line in story_lines(preset.stories()) {
                    println!("  - {}", extract_title(line));
                }
            }
            Ok(())
        }
    }
}
