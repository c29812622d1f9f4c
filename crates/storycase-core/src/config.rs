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

//! Generation configuration
//!
//! The configuration bundle mirrors the controls of the story form: output
//! format, detail level, which scenario types to include, how many times to
//! repeat each generator, and whether setup/teardown lists are populated.
//!
//! Two parsing modes exist for the enum values. [`std::str::FromStr`] is
//! strict and is used for CLI flags. The `from_form_value` constructors are
//! lenient and reproduce how the browser form interprets its select values.

use crate::error::ConfigError;
use crate::model::TestType;
use std::fmt;
use std::str::FromStr;

/// Output layout selected for rendering.
///
/// Generators receive the format but do not use it; only the renderers do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TestFormat {
    /// Test case with steps, expected result and combined setup/teardown
    #[default]
    Standard,
    /// Numbered scenarios with preconditions and postconditions
    Detailed,
    /// Checklist of scenario names and descriptions
    Simple,
}

impl TestFormat {
    /// All formats.
    pub const ALL: [TestFormat; 3] = [TestFormat::Standard, TestFormat::Detailed, TestFormat::Simple];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Detailed => "detailed",
            Self::Simple => "simple",
        }
    }
}

impl fmt::Display for TestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "detailed" => Ok(Self::Detailed),
            "simple" => Ok(Self::Simple),
            _ => Err(ConfigError::unknown("format", s, "standard, detailed, simple")),
        }
    }
}

/// How much detail generators produce.
///
/// Only [`DetailLevel::Basic`] changes generator output: it suppresses
/// optional variant records. The other levels behave identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DetailLevel {
    Basic,
    #[default]
    Standard,
    Comprehensive,
}

impl DetailLevel {
    /// Interpret a form select value: `"basic"` is basic, anything else is not.
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "basic" => Self::Basic,
            "comprehensive" => Self::Comprehensive,
            _ => Self::Standard,
        }
    }

    pub fn is_basic(&self) -> bool {
        matches!(self, Self::Basic)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Comprehensive => "comprehensive",
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetailLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "standard" => Ok(Self::Standard),
            "comprehensive" => Ok(Self::Comprehensive),
            _ => Err(ConfigError::unknown(
                "detail level",
                s,
                "basic, standard, comprehensive",
            )),
        }
    }
}

/// Whether template setup/teardown lists are kept on generated records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SetupMode {
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "yes"))]
    Include,
    #[cfg_attr(feature = "serde", serde(alias = "no"))]
    Exclude,
}

impl SetupMode {
    /// Interpret a form select value: only `"yes"` includes setup.
    pub fn from_form_value(value: &str) -> Self {
        if value == "yes" {
            Self::Include
        } else {
            Self::Exclude
        }
    }

    pub fn is_included(&self) -> bool {
        matches!(self, Self::Include)
    }
}

impl fmt::Display for SetupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Include => f.write_str("yes"),
            Self::Exclude => f.write_str("no"),
        }
    }
}

impl FromStr for SetupMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "include" => Ok(Self::Include),
            "no" | "exclude" => Ok(Self::Exclude),
            _ => Err(ConfigError::unknown("setup mode", s, "yes, no")),
        }
    }
}

/// Configuration for a generation run.
///
/// # Examples
///
/// ```
/// use storycase_core::{DetailLevel, GenerateConfig, SetupMode, TestType};
///
/// let config = GenerateConfig::default()
///     .with_detail(DetailLevel::Basic)
///     .with_negative(false)
///     .with_repetitions(2)
///     .with_setup(SetupMode::Exclude);
///
/// assert_eq!(config.enabled_types(), vec![TestType::Positive, TestType::Edge]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenerateConfig {
    /// Output layout (passed through to generators, used by renderers)
    pub format: TestFormat,
    /// Detail level
    pub detail: DetailLevel,
    /// Generate positive scenarios
    pub include_positive: bool,
    /// Generate negative scenarios
    pub include_negative: bool,
    /// Generate edge-case scenarios
    pub include_edge_cases: bool,
    /// Number of times each enabled generator runs per story line.
    ///
    /// Every repetition produces identical records. No upper bound is
    /// enforced.
    pub repetitions: u32,
    /// Setup/teardown handling
    pub setup: SetupMode,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            format: TestFormat::Standard,
            detail: DetailLevel::Standard,
            include_positive: true,
            include_negative: true,
            include_edge_cases: true,
            repetitions: 1,
            setup: SetupMode::Include,
        }
    }
}

impl GenerateConfig {
    pub fn with_format(mut self, format: TestFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_detail(mut self, detail: DetailLevel) -> Self {
        self.detail = detail;
        self
    }

    pub fn with_positive(mut self, enabled: bool) -> Self {
        self.include_positive = enabled;
        self
    }

    pub fn with_negative(mut self, enabled: bool) -> Self {
        self.include_negative = enabled;
        self
    }

    pub fn with_edge_cases(mut self, enabled: bool) -> Self {
        self.include_edge_cases = enabled;
        self
    }

    pub fn with_repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn with_setup(mut self, setup: SetupMode) -> Self {
        self.setup = setup;
        self
    }

    /// Whether scenarios of the given type are generated.
    pub fn is_enabled(&self, test_type: TestType) -> bool {
        match test_type {
            TestType::Positive => self.include_positive,
            TestType::Negative => self.include_negative,
            TestType::Edge => self.include_edge_cases,
        }
    }

    /// Enabled test types in generation order.
    pub fn enabled_types(&self) -> Vec<TestType> {
        TestType::ALL
            .into_iter()
            .filter(|t| self.is_enabled(*t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("standard".parse::<TestFormat>(), Ok(TestFormat::Standard));
        assert_eq!("Detailed".parse::<TestFormat>(), Ok(TestFormat::Detailed));
        assert_eq!(" simple ".parse::<TestFormat>(), Ok(TestFormat::Simple));
        assert!("html".parse::<TestFormat>().is_err());
    }

    #[test]
    fn test_format_display_round_trips() {
        for format in TestFormat::ALL {
            assert_eq!(format.to_string().parse::<TestFormat>(), Ok(format));
        }
    }

    #[test]
    fn test_detail_strict_parse_rejects_unknown() {
        let err = "verbose".parse::<DetailLevel>().unwrap_err();
        assert!(err.to_string().contains("detail level"));
    }

    #[test]
    fn test_detail_from_form_value_is_lenient() {
        assert_eq!(DetailLevel::from_form_value("basic"), DetailLevel::Basic);
        assert_eq!(
            DetailLevel::from_form_value("comprehensive"),
            DetailLevel::Comprehensive
        );
        assert!(!DetailLevel::from_form_value("anything").is_basic());
        // The form compares exactly, so a capitalised value is not basic.
        assert!(!DetailLevel::from_form_value("Basic").is_basic());
    }

    #[test]
    fn test_setup_mode_from_form_value() {
        assert_eq!(SetupMode::from_form_value("yes"), SetupMode::Include);
        assert_eq!(SetupMode::from_form_value("no"), SetupMode::Exclude);
        assert_eq!(SetupMode::from_form_value("YES"), SetupMode::Exclude);
        assert_eq!(SetupMode::from_form_value(""), SetupMode::Exclude);
    }

    #[test]
    fn test_setup_mode_from_str() {
        assert_eq!("yes".parse::<SetupMode>(), Ok(SetupMode::Include));
        assert_eq!("Exclude".parse::<SetupMode>(), Ok(SetupMode::Exclude));
        assert!("maybe".parse::<SetupMode>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = GenerateConfig::default();
        assert_eq!(config.format, TestFormat::Standard);
        assert!(!config.detail.is_basic());
        assert_eq!(config.repetitions, 1);
        assert!(config.setup.is_included());
        assert_eq!(config.enabled_types(), TestType::ALL.to_vec());
    }

    #[test]
    fn test_enabled_types_preserve_order() {
        let config = GenerateConfig::default().with_positive(false);
        assert_eq!(config.enabled_types(), vec![TestType::Negative, TestType::Edge]);

        let none = config.with_negative(false).with_edge_cases(false);
        assert!(none.enabled_types().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: GenerateConfig =
            serde_json::from_str(r#"{"format": "simple", "repetitions": 3}"#).unwrap();
        assert_eq!(config.format, TestFormat::Simple);
        assert_eq!(config.repetitions, 3);
        assert!(config.include_negative);
        assert_eq!(config.setup, SetupMode::Include);
    }
}
