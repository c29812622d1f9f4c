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

//! Structured error types for the StoryCase CLI.
//!
//! All commands return `Result<(), CliError>`; `main` prints the error and
//! exits with a failure code.

use std::io;
use std::path::PathBuf;
use storycase_core::{ConfigError, GenerateError};
use thiserror::Error;

/// The main error type for StoryCase CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use storycase_cli::error::CliError;
///
/// fn read_stories(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error (`-` for stdin, `<stdout>` for stdout)
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Input exceeds the configured size limit (`STORYCASE_MAX_FILE_SIZE`).
    #[error(
        "File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB). \
         Set STORYCASE_MAX_FILE_SIZE (in bytes) to raise the limit."
    )]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual size in bytes
        actual: u64,
        /// The maximum allowed size in bytes
        max: u64,
        /// The maximum allowed size in MB (for display)
        max_mb: u64,
    },

    /// Generation was refused, e.g. because the input holds no stories.
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// A configuration value could not be parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JSON serialization/deserialization error.
    ///
    /// Covers both `--config` files and `--emit json` output.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use storycase_cli::error::CliError;
    ///
    /// let err = CliError::file_too_large("stories.txt", 20_000_000, 10 * 1024 * 1024);
    /// assert!(err.to_string().contains("10 MB"));
    /// ```
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}
