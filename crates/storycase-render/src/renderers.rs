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

//! Output format renderers

use crate::layout::{Block, Layout, ListItem, ListStyle};
use storycase_core::{TestCase, TestFormat, TestRecord};

/// Turns a test case into a [`Layout`] for one output format.
pub trait Renderer: Send + Sync {
    /// Format this renderer produces
    fn format(&self) -> TestFormat;

    /// Lay out a single test case
    fn render(&self, case: &TestCase) -> Layout;
}

/// Renderer for the given format.
pub fn renderer_for(format: TestFormat) -> &'static dyn Renderer {
    match format {
        TestFormat::Standard => &StandardRenderer,
        TestFormat::Detailed => &DetailedRenderer,
        TestFormat::Simple => &SimpleRenderer,
    }
}

/// Full record listing: description, numbered steps, expected result and
/// setup/teardown lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRenderer;

impl Renderer for StandardRenderer {
    fn format(&self) -> TestFormat {
        TestFormat::Standard
    }

    fn render(&self, case: &TestCase) -> Layout {
        let mut layout = Layout::new();
        layout.push(Block::Heading(format!(
            "Test Case {}: {}",
            case.id, case.title
        )));
        layout.push(Block::field("User Story", &case.description));

        for record in &case.tests {
            let mut blocks = vec![
                Block::field("Description", &record.description),
                Block::list("Test Steps", ListStyle::Numbered, &record.steps),
                Block::field("Expected Result", &record.expected),
            ];
            if !record.setup.is_empty() {
                blocks.push(Block::meta("Setup", record.setup.join("; ")));
            }
            if !record.teardown.is_empty() {
                blocks.push(Block::meta("Teardown", record.teardown.join("; ")));
            }
            layout.push(scenario(record.name.clone(), record, false, blocks));
        }

        layout.push(Block::CopyAction {
            label: "Copy Test Case".to_string(),
        });
        layout
    }
}

/// Scenario-style layout with objectives, pre/postconditions and a
/// step-labelled procedure.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailedRenderer;

impl Renderer for DetailedRenderer {
    fn format(&self) -> TestFormat {
        TestFormat::Detailed
    }

    fn render(&self, case: &TestCase) -> Layout {
        let mut layout = Layout::new();
        layout.push(Block::Heading(format!(
            "Test Scenario {}: {}",
            case.id, case.title
        )));
        layout.push(Block::field("Related User Story", &case.description));

        for (n, record) in (1..).zip(&case.tests) {
            let preconditions = if record.setup.is_empty() {
                Block::list("Preconditions", ListStyle::Plain, ["None"])
            } else {
                Block::list("Preconditions", ListStyle::Plain, &record.setup)
            };
            let procedure = Block::List {
                title: "Test Procedure".to_string(),
                items: (1..)
                    .zip(&record.steps)
                    .map(|(step, text)| ListItem::labeled(format!("Step {}", step), text))
                    .collect(),
                style: ListStyle::Labeled,
            };

            let mut blocks = vec![
                Block::field("Objective", &record.description),
                preconditions,
                procedure,
                Block::field("Expected Outcome", &record.expected),
            ];
            if !record.teardown.is_empty() {
                blocks.push(Block::list(
                    "Postconditions",
                    ListStyle::Plain,
                    &record.teardown,
                ));
            }

            let title = format!("Scenario {}.{}: {}", case.id, n, record.name);
            layout.push(scenario(title, record, false, blocks));
        }

        layout.push(Block::CopyAction {
            label: "Copy Test Scenario".to_string(),
        });
        layout
    }
}

/// Checkbox list of record names with their descriptions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl Renderer for SimpleRenderer {
    fn format(&self) -> TestFormat {
        TestFormat::Simple
    }

    fn render(&self, case: &TestCase) -> Layout {
        let mut layout = Layout::new();
        layout.push(Block::Heading(format!("{} - Test Checklist", case.title)));
        layout.push(Block::field("Based on", &case.description));

        for record in &case.tests {
            let blocks = vec![Block::Text(record.description.clone())];
            layout.push(scenario(record.name.clone(), record, true, blocks));
        }

        layout.push(Block::CopyAction {
            label: "Copy Checklist".to_string(),
        });
        layout
    }
}

fn scenario(title: String, record: &TestRecord, checkbox: bool, blocks: Vec<Block>) -> Block {
    Block::Scenario {
        title,
        test_type: record.test_type,
        checkbox,
        blocks,
    }
}
