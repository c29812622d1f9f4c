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

//! Plain-text backend
//!
//! This is the text a copy action transfers, so copy actions themselves are
//! not emitted.

use crate::layout::{Block, Layout, ListStyle};
use std::fmt::{self, Write};

const INDENT: usize = 2;

impl Layout {
    /// Render as indented plain text.
    ///
    /// # Examples
    ///
    /// ```
    /// use storycase_render::{Block, Layout};
    ///
    /// let mut layout = Layout::new();
    /// layout.push(Block::Heading("Test Case 1: login".to_string()));
    /// layout.push(Block::field("User Story", "I want to login"));
    ///
    /// assert_eq!(layout.to_text(), "Test Case 1: login\nUser Story: I want to login\n");
    /// ```
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = write_blocks(&mut out, &self.blocks, 0);
        out
    }
}

fn write_blocks(out: &mut String, blocks: &[Block], depth: usize) -> fmt::Result {
    let pad = " ".repeat(depth);
    for block in blocks {
        match block {
            Block::Heading(text) | Block::Text(text) => writeln!(out, "{}{}", pad, text)?,
            Block::Field { label, value } | Block::Meta { label, value } => writeln!(out, "{}{}: {}", pad, label, value)?,
            Block::List {
                title,
                items,
                style,
            } => {
                writeln!(out, "{}{}:", pad, title)?;
                let item_pad = " ".repeat(depth + INDENT);
                for (index, item) in items.iter().enumerate() {
                    match (style, &item.label) {
                        (ListStyle::Numbered, _) => {
                            writeln!(out, "{}{}. {}", item_pad, index + 1, item.text)?
                        }
                        (ListStyle::Labeled, Some(label)) => {
                            writeln!(out, "{}{}: {}", item_pad, label, item.text)?
                        }
                        _ => writeln!(out, "{}{}", item_pad, item.text)?,
                    }
                }
            }
            Block::Scenario {
                title,
                test_type,
                checkbox,
                blocks,
            } => {
                let marker = if *checkbox { "[ ] " } else { "" };
                writeln!(out, "\n{}{}{} [{}]", pad, marker, title, test_type)?;
                write_blocks(out, blocks, depth + INDENT)?;
            }
            Block::CopyAction { .. } => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::layout::{Block, Layout, ListItem, ListStyle};
    use storycase_core::TestType;

    #[test]
    fn test_numbered_list() {
        let layout = Layout {
            blocks: vec![Block::list("Test Steps", ListStyle::Numbered, ["a", "b"])],
        };
        assert_eq!(layout.to_text(), "Test Steps:\n  1. a\n  2. b\n");
    }

    #[test]
    fn test_labeled_list() {
        let layout = Layout {
            blocks: vec![Block::List {
                title: "Test Procedure".to_string(),
                items: vec![ListItem::labeled("Step 1", "open page")],
                style: ListStyle::Labeled,
            }],
        };
        assert_eq!(layout.to_text(), "Test Procedure:\n  Step 1: open page\n");
    }

    #[test]
    fn test_scenario_is_indented_with_checkbox() {
        let layout = Layout {
            blocks: vec![Block::Scenario {
                title: "Empty credentials".to_string(),
                test_type: TestType::Edge,
                checkbox: true,
                blocks: vec![Block::Text("Verify behavior".to_string())],
            }],
        };
        assert_eq!(
            layout.to_text(),
            "\n[ ] Empty credentials [edge]\n  Verify behavior\n"
        );
    }

    #[test]
    fn test_meta_renders_like_field() {
        let layout = Layout {
            blocks: vec![Block::meta("Setup", "Seed the catalog")],
        };
        assert_eq!(layout.to_text(), "Setup: Seed the catalog\n");
    }

    #[test]
    fn test_copy_action_is_not_emitted() {
        let layout = Layout {
            blocks: vec![Block::CopyAction {
                label: "Copy Checklist".to_string(),
            }],
        };
        assert_eq!(layout.to_text(), "");
    }
}
