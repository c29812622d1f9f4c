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

//! Test case assembler

use crate::config::GenerateConfig;
use crate::error::{GenerateError, Result};
use crate::generators::{default_generators, GenerationContext, Generator};
use crate::model::TestCase;
use crate::title::extract_title;
use tracing::{debug, info, warn};

/// Split raw input into story lines, dropping blank ones.
///
/// Lines are returned verbatim (not trimmed).
pub fn story_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines().filter(|line| !line.trim().is_empty())
}

/// Runs generators over every story line of an input.
pub struct Assembler {
    config: GenerateConfig,
    generators: Vec<Box<dyn Generator>>,
}

impl Assembler {
    /// Create an assembler with the built-in generators
    pub fn new(config: GenerateConfig) -> Self {
        Self {
            config,
            generators: default_generators(),
        }
    }

    /// Create an assembler with custom generators
    pub fn with_generators(config: GenerateConfig, generators: Vec<Box<dyn Generator>>) -> Self {
        Self { config, generators }
    }

    /// Add a custom generator after the existing ones of the same test type
    pub fn add_generator(&mut self, generator: Box<dyn Generator>) {
        self.generators.push(generator);
    }

    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Build one test case per non-blank story line.
    ///
    /// Records are grouped by test type (positive, negative, edge) whatever
    /// order the generators were added in. A generator runs only when its
    /// test type is enabled. Each runs `repetitions` times per line, and
    /// finishes all repetitions before the next generator starts.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EmptyInput`] when `raw` is empty or
    /// whitespace-only.
    pub fn assemble(&self, raw: &str) -> Result<Vec<TestCase>> {
        if raw.trim().is_empty() {
            warn!("rejecting empty story input");
            return Err(GenerateError::EmptyInput);
        }

        let types = self.config.enabled_types();

        let mut cases = Vec::new();
        for (id, line) in (1u32..).zip(story_lines(raw)) {
            let mut case = TestCase::new(id, extract_title(line), line);

            for test_type in &types {
                for generator in self.generators.iter().filter(|g| g.test_type() == *test_type) {
                    for repetition in 0..self.config.repetitions {
                        let ctx = GenerationContext {
                            format: self.config.format,
                            detail: self.config.detail,
                            repetition,
                            setup: self.config.setup,
                        };
                        case.tests.extend(generator.generate(line, &ctx));
                    }
                }
            }

            debug!(
                id = case.id,
                title = %case.title,
                records = case.tests.len(),
                "assembled test case"
            );
            cases.push(case);
        }

        info!(
            cases = cases.len(),
            records = cases.iter().map(|c| c.tests.len()).sum::<usize>(),
            "generation complete"
        );
        Ok(cases)
    }
}

/// Generate test cases from raw story text with the built-in generators.
///
/// # Examples
///
/// ```
/// use storycase_core::{generate_test_cases, GenerateConfig};
///
/// let stories = "As a customer, I want to add items to my shopping cart so that I can buy them.\n\n\
///                As a customer, I want to pay by card so that I can check out.";
/// let cases = generate_test_cases(stories, &GenerateConfig::default()).unwrap();
///
/// assert_eq!(cases.len(), 2);
/// assert_eq!(cases[0].id, 1);
/// assert_eq!(cases[0].title, "add items to my shopping cart");
/// assert_eq!(cases[1].id, 2);
/// ```
pub fn generate_test_cases(raw: &str, config: &GenerateConfig) -> Result<Vec<TestCase>> {
    Assembler::new(config.clone()).assemble(raw)
}
