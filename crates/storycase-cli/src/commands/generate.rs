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

//! Generate command - user stories to formatted test cases

use super::{read_file, write_output};
use crate::error::CliError;
use clap::ValueEnum;
use colored::Colorize;
use storycase_core::{
    generate_test_cases, DetailLevel, GenerateConfig, Preset, SetupMode, TestCase, TestFormat,
};
use storycase_render::{render_html, render_text};
use tracing::debug;

/// Where the story lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorySource {
    /// A file path, or `-` for stdin
    File(String),
    /// One of the built-in example texts
    Preset(Preset),
}

impl StorySource {
    /// Pick the single story source from the CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidInput`] unless exactly one of `file` and
    /// `preset` is given.
    pub fn from_args(file: Option<String>, preset: Option<Preset>) -> Result<Self, CliError> {
        match (file, preset) {
            (Some(file), None) => Ok(Self::File(file)),
            (None, Some(preset)) => Ok(Self::Preset(preset)),
            (Some(_), Some(_)) => Err(CliError::invalid_input(
                "give either a story file or --preset, not both",
            )),
            (None, None) => Err(CliError::invalid_input(
                "no stories given (pass a FILE, '-' for stdin, or --preset NAME)",
            )),
        }
    }

    fn read(&self) -> Result<String, CliError> {
        match self {
            Self::File(path) => read_file(path),
            Self::Preset(preset) => Ok(preset.stories().to_string()),
        }
    }
}

/// Output encoding of the generate command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Emit {
    /// Plain text, as copied from the browser form
    #[default]
    Text,
    /// HTML fragment using the form's CSS classes
    Html,
    /// The assembled test cases as pretty JSON
    Json,
}

/// Command-line settings layered over the base configuration.
///
/// `None` and `false` leave the base value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub format: Option<TestFormat>,
    pub detail: Option<DetailLevel>,
    pub no_positive: bool,
    pub no_negative: bool,
    pub no_edge: bool,
    pub count: Option<u32>,
    pub setup: Option<SetupMode>,
}

impl ConfigOverrides {
    /// Apply these overrides on top of `config`.
    pub fn apply(&self, mut config: GenerateConfig) -> GenerateConfig {
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(detail) = self.detail {
            config.detail = detail;
        }
        if self.no_positive {
            config.include_positive = false;
        }
        if self.no_negative {
            config.include_negative = false;
        }
        if self.no_edge {
            config.include_edge_cases = false;
        }
        if let Some(count) = self.count {
            config.repetitions = count;
        }
        if let Some(setup) = self.setup {
            config.setup = setup;
        }
        config
    }
}

/// Load a JSON [`GenerateConfig`]. Missing fields take their defaults.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or is not a valid config.
pub fn load_config(path: &str) -> Result<GenerateConfig, CliError> {
    let content = read_file(path)?;
    let config: GenerateConfig = serde_json::from_str(&content)?;
    debug!(path, ?config, "loaded generation config");
    Ok(config)
}

/// Generate test cases from stories and emit them.
///
/// # Arguments
///
/// * `source` - Story file, stdin, or preset
/// * `config_path` - Optional JSON config file used as the base configuration
/// * `overrides` - Flag values applied over the base configuration
/// * `emit` - Output encoding
/// * `output` - Output file path (defaults to stdout)
///
/// # Errors
///
/// Returns `Err` if:
/// - The input or config file cannot be read
/// - The input contains no stories
/// - The output cannot be written
///
/// # Examples
///
/// ```no_run
/// use storycase_cli::commands::{generate, ConfigOverrides, Emit, StorySource};
/// use storycase_core::Preset;
///
/// # fn main() -> Result<(), storycase_cli::error::CliError> {
/// generate(
///     &StorySource::Preset(Preset::Login),
///     None,
///     &ConfigOverrides::default(),
///     Emit::Text,
///     Some("login-cases.txt"),
/// )?;
/// # Ok(())
/// # }
/// ```
pub fn generate(
    source: &StorySource,
    config_path: Option<&str>,
    overrides: &ConfigOverrides,
    emit: Emit,
    output: Option<&str>,
) -> Result<(), CliError> {
    let base = match config_path {
        Some(path) => load_config(path)?,
        None => GenerateConfig::default(),
    };
    let config = overrides.apply(base);
    let stories = source.read()?;

    let cases = generate_test_cases(&stories, &config)?;
    let content = emit_cases(&cases, config.format, emit)?;
    write_output(&content, output)?;

    if let Some(path) = output {
        let scenarios: usize = cases.iter().map(|c| c.tests.len()).sum();
        eprintln!(
            "{} {} test case(s), {} scenario(s) written to {}",
            "✓".green().bold(),
            cases.len(),
            scenarios,
            path
        );
    }
    Ok(())
}

fn emit_cases(cases: &[TestCase], format: TestFormat, emit: Emit) -> Result<String, CliError> {
    let mut content = match emit {
        Emit::Text => render_text(cases, format),
        Emit::Html => render_html(cases, format),
        Emit::Json => serde_json::to_string_pretty(cases)?,
    };
    if !content.ends_with('\n') {
        content.push('\n');
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_requires_exactly_one() {
        assert!(matches!(
            StorySource::from_args(None, None),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            StorySource::from_args(Some("a.txt".to_string()), Some(Preset::Cart)),
            Err(CliError::InvalidInput(_))
        ));
        assert_eq!(
            StorySource::from_args(None, Some(Preset::Cart)).unwrap(),
            StorySource::Preset(Preset::Cart)
        );
    }

    #[test]
    fn test_overrides_leave_unset_values() {
        let base = GenerateConfig::default()
            .with_format(TestFormat::Detailed)
            .with_repetitions(3);
        let overrides = ConfigOverrides {
            no_edge: true,
            setup: Some(SetupMode::Exclude),
            ..Default::default()
        };

        let config = overrides.apply(base);
        assert_eq!(config.format, TestFormat::Detailed);
        assert_eq!(config.repetitions, 3);
        assert!(config.include_positive);
        assert!(!config.include_edge_cases);
        assert_eq!(config.setup, SetupMode::Exclude);
    }

    #[test]
    fn test_overrides_replace_values() {
        let overrides = ConfigOverrides {
            format: Some(TestFormat::Simple),
            detail: Some(DetailLevel::Basic),
            no_positive: true,
            no_negative: true,
            count: Some(0),
            ..Default::default()
        };

        let config = overrides.apply(GenerateConfig::default());
        assert_eq!(config.format, TestFormat::Simple);
        assert_eq!(config.detail, DetailLevel::Basic);
        assert_eq!(config.enabled_types(), vec![storycase_core::TestType::Edge]);
        assert_eq!(config.repetitions, 0);
    }

    #[test]
    fn test_emit_json_is_parseable() {
        let cases = generate_test_cases("Add a product to the cart", &GenerateConfig::default())
            .unwrap();
        let json = emit_cases(&cases, TestFormat::Standard, Emit::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["tests"][0]["type"], "positive");
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_emit_empty_text() {
        let text = emit_cases(&[], TestFormat::Simple, Emit::Text).unwrap();
        assert_eq!(text, "No test cases generated. Please check your input.\n");
    }
}
