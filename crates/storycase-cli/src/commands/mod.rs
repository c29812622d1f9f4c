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

//! CLI command implementations

mod completion;
mod generate;
mod presets;

pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use generate::{generate, load_config, ConfigOverrides, Emit, StorySource};
pub use presets::presets;

use crate::error::CliError;
use std::fs;
use std::io::{self, Read, Write};

/// Default maximum input size (10 MB).
/// Can be overridden via the `STORYCASE_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Path that selects stdin for input.
pub const STDIN_PATH: &str = "-";

/// Maximum input size from the environment, or [`DEFAULT_MAX_FILE_SIZE`] if
/// the variable is unset or not a number.
fn get_max_file_size() -> u64 {
    std::env::var("STORYCASE_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// A path of `-` reads stdin instead. Both sources are bounded by the
/// configured maximum size.
///
/// # Errors
///
/// Returns `Err` if:
/// - The file metadata cannot be accessed
/// - The input exceeds the maximum allowed size
/// - The input cannot be read or is not valid UTF-8
///
/// # Examples
///
/// ```no_run
/// use storycase_cli::commands::read_file;
///
/// # fn main() -> Result<(), storycase_cli::error::CliError> {
/// let stories = read_file("stories.txt")?;
/// assert!(!stories.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: &str) -> Result<String, CliError> {
    let max_file_size = get_max_file_size();

    if path == STDIN_PATH {
        let mut content = String::new();
        io::stdin()
            .take(max_file_size + 1)
            .read_to_string(&mut content)
            .map_err(|e| CliError::io_error(path, e))?;
        let actual = content.len() as u64;
        if actual > max_file_size {
            return Err(CliError::file_too_large(path, actual, max_file_size));
        }
        return Ok(content);
    }

    // Check file size first to avoid reading oversized files
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(
            path,
            metadata.len(),
            max_file_size,
        ));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file or stdout.
///
/// # Errors
///
/// Returns `Err` if writing to the file or to stdout fails.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}
