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

//! HTML fragment backend
//!
//! Emits the markup and CSS classes the story form's stylesheet expects
//! (`test-scenario`, `test-id`, `test-type`, `test-details`, `test-step`,
//! `test-meta`, `meta-item`, `copy-btn`). All text content is escaped.

use crate::layout::{Block, Layout, ListStyle};

impl Layout {
    /// Render as an HTML fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// use storycase_render::{Block, Layout};
    ///
    /// let mut layout = Layout::new();
    /// layout.push(Block::field("User Story", "<b>login</b>"));
    ///
    /// assert_eq!(
    ///     layout.to_html(),
    ///     "<p><strong>User Story:</strong> &lt;b&gt;login&lt;/b&gt;</p>"
    /// );
    /// ```
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_blocks(&mut out, &self.blocks);
        out
    }
}

fn write_blocks(out: &mut String, blocks: &[Block]) {
    for block in blocks {
        match block {
            Block::Heading(text) => {
                out.push_str("<h3>");
                out.push_str(&escape(text));
                out.push_str("</h3>");
            }
            Block::Field { label, value } => {
                out.push_str("<p><strong>");
                out.push_str(&escape(label));
                out.push_str(":</strong> ");
                out.push_str(&escape(value));
                out.push_str("</p>");
            }
            Block::Meta { label, value } => {
                out.push_str("<div class=\"test-meta\"><div class=\"meta-item\"><strong>");
                out.push_str(&escape(label));
                out.push_str(":</strong> ");
                out.push_str(&escape(value));
                out.push_str("</div></div>");
            }
            Block::Text(text) => {
                out.push_str("<p>");
                out.push_str(&escape(text));
                out.push_str("</p>");
            }
            Block::List {
                title,
                items,
                style,
            } => {
                out.push_str("<div class=\"test-details\"><p><strong>");
                out.push_str(&escape(title));
                out.push_str(":</strong></p>");
                for (index, item) in items.iter().enumerate() {
                    out.push_str("<div class=\"test-step\">");
                    match (style, &item.label) {
                        (ListStyle::Numbered, _) => {
                            out.push_str(&format!("{}. ", index + 1));
                        }
                        (ListStyle::Labeled, Some(label)) => {
                            out.push_str("<strong>");
                            out.push_str(&escape(label));
                            out.push_str(":</strong> ");
                        }
                        _ => {}
                    }
                    out.push_str(&escape(&item.text));
                    out.push_str("</div>");
                }
                out.push_str("</div>");
            }
            Block::Scenario {
                title,
                test_type,
                checkbox,
                blocks,
            } => {
                out.push_str("<div class=\"test-scenario\"><p>");
                if *checkbox {
                    out.push_str("<input type=\"checkbox\"> ");
                }
                out.push_str("<span class=\"test-id\">");
                out.push_str(&escape(title));
                out.push_str("</span> <span class=\"test-type ");
                out.push_str(test_type.as_str());
                out.push_str("\">");
                out.push_str(test_type.as_str());
                out.push_str("</span></p>");
                write_blocks(out, blocks);
                out.push_str("</div>");
            }
            Block::CopyAction { label } => {
                out.push_str("<button class=\"copy-btn\">");
                out.push_str(&escape(label));
                out.push_str("</button>");
            }
        }
    }
}

/// Escape text for use in HTML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
