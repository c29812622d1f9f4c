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

//! StoryCase core: user story to manual test case generation.
//!
//! Converts free-text user story lines into templated manual test cases
//! (steps, expected results, setup and teardown). Each story line is matched
//! against a small fixed set of keyword categories (login, cart, profile) and
//! the matching scenario templates are copied into the result. Lines that
//! match nothing degrade to generic scenarios.
//!
//! ## Quick Start
//!
//! ```rust
//! use storycase_core::{generate_test_cases, GenerateConfig, TestType};
//!
//! let stories = "As a user, I want to be able to login with my email and password so that I can access my account.";
//! let cases = generate_test_cases(stories, &GenerateConfig::default()).unwrap();
//!
//! assert_eq!(cases.len(), 1);
//! assert_eq!(cases[0].title, "be able to login with my email and password");
//! assert_eq!(cases[0].count_by_type(TestType::Positive), 2);
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use storycase_core::{generate_test_cases, DetailLevel, GenerateConfig, SetupMode};
//!
//! let config = GenerateConfig::default()
//!     .with_detail(DetailLevel::Basic)
//!     .with_edge_cases(false)
//!     .with_setup(SetupMode::Exclude);
//!
//! let cases = generate_test_cases("Add a product to the cart", &config).unwrap();
//! assert!(cases[0].tests.iter().all(|t| t.setup.is_empty()));
//! ```
//!
//! ## Custom Generators
//!
//! ```rust
//! use storycase_core::{Assembler, GenerateConfig, GenerationContext, Generator, TestRecord, TestType};
//!
//! struct AccessibilityGenerator;
//!
//! impl Generator for AccessibilityGenerator {
//!     fn id(&self) -> &str { "accessibility" }
//!     fn test_type(&self) -> TestType { TestType::Edge }
//!     fn generate(&self, _story: &str, _ctx: &GenerationContext) -> Vec<TestRecord> {
//!         vec![]
//!     }
//! }
//!
//! let mut assembler = Assembler::new(GenerateConfig::default());
//! assembler.add_generator(Box::new(AccessibilityGenerator));
//! let cases = assembler.assemble("Pay by card").unwrap();
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for the model and
//!   configuration types.

mod assembler;
mod category;
mod config;
mod error;
mod generators;
mod model;
mod presets;
pub mod templates;
mod title;

pub use assembler::{generate_test_cases, story_lines, Assembler};
pub use category::{Category, KeywordMatches};
pub use config::{DetailLevel, GenerateConfig, SetupMode, TestFormat};
pub use error::{ConfigError, GenerateError, Result};
pub use generators::{
    default_generators, EdgeGenerator, GenerationContext, Generator, NegativeGenerator,
    PositiveGenerator,
};
pub use model::{TestCase, TestRecord, TestType};
pub use presets::Preset;
pub use title::extract_title;

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
