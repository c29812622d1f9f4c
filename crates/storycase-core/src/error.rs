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

//! Error types for test case generation
//!
//! Generation itself is total over non-empty input: every story line that
//! matches nothing falls back to the generic templates. The only failure is
//! input that contains no story at all. Configuration values parsed from
//! text (CLI flags, config files) have their own error type.

use thiserror::Error;

/// Errors returned by the assembler.
///
/// # Examples
///
/// ```
/// use storycase_core::{generate_test_cases, GenerateConfig, GenerateError};
///
/// let result = generate_test_cases("   \n\t", &GenerateConfig::default());
/// assert_eq!(result.unwrap_err(), GenerateError::EmptyInput);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The raw input was empty or contained only whitespace.
    ///
    /// Callers are expected to surface this as a blocking message and
    /// produce no output.
    #[error("Please enter at least one user story or requirement.")]
    EmptyInput,
}

/// Errors produced when parsing configuration values from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A value did not name any known variant.
    #[error("Unknown {field} '{value}' (expected one of: {expected})")]
    UnknownValue {
        /// The configuration field being parsed
        field: &'static str,
        /// The rejected value
        value: String,
        /// Comma-separated list of accepted values
        expected: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn unknown(field: &'static str, value: &str, expected: &'static str) -> Self {
        Self::UnknownValue {
            field,
            value: value.to_string(),
            expected,
        }
    }
}

/// Result alias for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_message() {
        assert_eq!(
            GenerateError::EmptyInput.to_string(),
            "Please enter at least one user story or requirement."
        );
    }

    #[test]
    fn test_unknown_value_display() {
        let err = ConfigError::unknown("format", "fancy", "standard, detailed, simple");
        let msg = err.to_string();
        assert!(msg.contains("format"));
        assert!(msg.contains("'fancy'"));
        assert!(msg.contains("standard, detailed, simple"));
    }
}
