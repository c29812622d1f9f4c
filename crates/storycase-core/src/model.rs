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

//! Test case data model

use std::fmt;

/// Kind of generated scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TestType {
    /// Happy-path scenario
    Positive,
    /// Scenario expected to fail gracefully
    Negative,
    /// Boundary or unusual-input scenario
    Edge,
}

impl TestType {
    /// All test types in generation order.
    pub const ALL: [TestType; 3] = [TestType::Positive, TestType::Negative, TestType::Edge];

    /// Lowercase name used in rendered output and CSS classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Edge => "edge",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generated scenario.
///
/// Records are built in full from a fixed template and never change
/// afterwards. They have no identity beyond their position in the owning
/// [`TestCase`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestRecord {
    /// Scenario name
    pub name: String,
    /// Scenario kind
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub test_type: TestType,
    /// What the scenario verifies
    pub description: String,
    /// Ordered manual test steps
    pub steps: Vec<String>,
    /// Expected result
    pub expected: String,
    /// Preconditions (empty when setup is excluded)
    pub setup: Vec<String>,
    /// Cleanup steps (empty when setup is excluded)
    pub teardown: Vec<String>,
}

/// All scenarios generated for a single user story line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestCase {
    /// Sequential id, starting at 1
    pub id: u32,
    /// Short title derived from the story
    pub title: String,
    /// The originating story line, verbatim
    pub description: String,
    /// Scenarios in generation order
    pub tests: Vec<TestRecord>,
}

impl TestCase {
    /// Create a test case with no scenarios yet.
    pub fn new(id: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            tests: Vec::new(),
        }
    }

    /// Number of scenarios of the given type.
    pub fn count_by_type(&self, test_type: TestType) -> usize {
        self.tests
            .iter()
            .filter(|t| t.test_type == test_type)
            .count()
    }

    /// Whether no scenarios were generated for this story.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}
