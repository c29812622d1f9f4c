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

//! Scenario generators
//!
//! Each generator inspects a story line for known keywords and emits the
//! matching template records for its test type. Matching is cumulative: a
//! line that mentions several categories gets records for each of them, in
//! the order login, cart, profile.

use crate::category::{Category, KeywordMatches};
use crate::config::{DetailLevel, SetupMode, TestFormat};
use crate::model::{TestRecord, TestType};
use crate::templates::{self, RecordTemplate};

/// Per-invocation inputs handed to a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationContext {
    /// Selected output format (not used by the built-in generators)
    pub format: TestFormat,
    /// Detail level
    pub detail: DetailLevel,
    /// Zero-based repetition index (not used by the built-in generators)
    pub repetition: u32,
    /// Setup/teardown handling
    pub setup: SetupMode,
}

impl Default for GenerationContext {
    fn default() -> Self {
        Self {
            format: TestFormat::default(),
            detail: DetailLevel::default(),
            repetition: 0,
            setup: SetupMode::default(),
        }
    }
}

/// Trait for scenario generators
pub trait Generator: Send + Sync {
    /// Generator identifier
    fn id(&self) -> &str;

    /// Type of every record this generator emits
    fn test_type(&self) -> TestType;

    /// Generate records for one story line
    fn generate(&self, story: &str, ctx: &GenerationContext) -> Vec<TestRecord>;
}

fn emit(records: &mut Vec<TestRecord>, template: &RecordTemplate, test_type: TestType, setup: SetupMode) {
    records.push(template.instantiate(test_type, setup));
}

/// Generator: happy-path scenarios
pub struct PositiveGenerator;

impl Generator for PositiveGenerator {
    fn id(&self) -> &str {
        "positive"
    }

    fn test_type(&self) -> TestType {
        TestType::Positive
    }

    fn generate(&self, story: &str, ctx: &GenerationContext) -> Vec<TestRecord> {
        let matches = KeywordMatches::scan(story);
        let test_type = self.test_type();
        let mut records = Vec::new();

        for category in matches.categories() {
            match category {
                Category::Login => {
                    emit(&mut records, &templates::POSITIVE_LOGIN, test_type, ctx.setup);
                    if !ctx.detail.is_basic() {
                        emit(&mut records, &templates::POSITIVE_LOGIN_REMEMBER_ME, test_type, ctx.setup);
                    }
                }
                Category::Cart => emit(&mut records, &templates::POSITIVE_CART, test_type, ctx.setup),
                Category::Profile => emit(&mut records, &templates::POSITIVE_PROFILE, test_type, ctx.setup),
            }
        }

        if records.is_empty() {
            emit(&mut records, &templates::POSITIVE_GENERIC, test_type, ctx.setup);
        }

        records
    }
}

/// Generator: scenarios expected to fail
///
/// There is no profile-specific negative scenario; profile stories fall
/// back to the generic record unless another category also matched.
pub struct NegativeGenerator;

impl Generator for NegativeGenerator {
    fn id(&self) -> &str {
        "negative"
    }

    fn test_type(&self) -> TestType {
        TestType::Negative
    }

    fn generate(&self, story: &str, ctx: &GenerationContext) -> Vec<TestRecord> {
        let matches = KeywordMatches::scan(story);
        let test_type = self.test_type();
        let mut records = Vec::new();

        if matches.contains(Category::Login) {
            emit(&mut records, &templates::NEGATIVE_LOGIN, test_type, ctx.setup);
            if matches.mentions_attempt() {
                emit(&mut records, &templates::NEGATIVE_LOGIN_LOCKOUT, test_type, ctx.setup);
            }
        }

        if matches.contains(Category::Cart) {
            emit(&mut records, &templates::NEGATIVE_CART, test_type, ctx.setup);
        }

        if records.is_empty() {
            emit(&mut records, &templates::NEGATIVE_GENERIC, test_type, ctx.setup);
        }

        records
    }
}

/// Generator: boundary scenarios
///
/// Has no generic fallback, so a story matching no category yields nothing.
pub struct EdgeGenerator;

impl Generator for EdgeGenerator {
    fn id(&self) -> &str {
        "edge"
    }

    fn test_type(&self) -> TestType {
        TestType::Edge
    }

    fn generate(&self, story: &str, ctx: &GenerationContext) -> Vec<TestRecord> {
        let test_type = self.test_type();
        KeywordMatches::scan(story)
            .categories()
            .into_iter()
            .map(|category| {
                let template = match category {
                    Category::Login => &templates::EDGE_LOGIN,
                    Category::Cart => &templates::EDGE_CART,
                    Category::Profile => &templates::EDGE_PROFILE,
                };
                template.instantiate(test_type, ctx.setup)
            })
            .collect()
    }
}

/// Built-in generators in generation order: positive, negative, edge.
pub fn default_generators() -> Vec<Box<dyn Generator>> {
    vec![
        Box::new(PositiveGenerator),
        Box::new(NegativeGenerator),
        Box::new(EdgeGenerator),
    ]
}
