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

//! Structured layout model
//!
//! Renderers produce a [`Layout`] rather than a string so that the same
//! rendering can be emitted as plain text (terminal, clipboard) or as an
//! HTML fragment (browser form).

use storycase_core::TestType;

/// How list items are marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    /// One item per line, no marker
    Plain,
    /// `1.`, `2.`, ...
    Numbered,
    /// Each item carries its own label (e.g. `Step 3`)
    Labeled,
}

/// A list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub label: Option<String>,
    pub text: String,
}

impl ListItem {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            label: None,
            text: text.into(),
        }
    }

    pub fn labeled(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            text: text.into(),
        }
    }
}

/// A layout building block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Section heading
    Heading(String),
    /// `Label: value` line
    Field { label: String, value: String },
    /// Setup or teardown note, a `Label: value` line set apart from the body
    Meta { label: String, value: String },
    /// Free paragraph
    Text(String),
    /// Titled list
    List {
        title: String,
        items: Vec<ListItem>,
        style: ListStyle,
    },
    /// One generated scenario, tagged with its type
    Scenario {
        title: String,
        test_type: TestType,
        /// Render an unchecked checkbox before the title
        checkbox: bool,
        blocks: Vec<Block>,
    },
    /// Control that copies the rendered text of the enclosing test case
    CopyAction { label: String },
}

impl Block {
    pub fn field(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Field {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn meta(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Meta {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn list<I, T>(title: impl Into<String>, style: ListStyle, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::List {
            title: title.into(),
            items: items.into_iter().map(ListItem::plain).collect(),
            style,
        }
    }
}

/// Rendered form of a single test case.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    pub blocks: Vec<Block>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Scenario blocks, in order.
    pub fn scenarios(&self) -> impl Iterator<Item = &Block> {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Scenario { .. }))
    }

    /// Label of the trailing copy action, if any.
    pub fn copy_label(&self) -> Option<&str> {
        match self.blocks.last() {
            Some(Block::CopyAction { label }) => Some(label),
            _ => None,
        }
    }
}
