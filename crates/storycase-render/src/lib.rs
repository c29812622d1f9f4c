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

//! StoryCase render: presentation formats for generated test cases.
//!
//! Each [`TestFormat`] has a [`Renderer`] that lays a [`TestCase`] out as a
//! structured [`Layout`]. A layout can then be emitted as plain text (what a
//! copy action transfers) or as an HTML fragment for the browser form.
//!
//! ```rust
//! use storycase_core::{generate_test_cases, GenerateConfig, TestFormat};
//! use storycase_render::render_text;
//!
//! let cases = generate_test_cases("Add a product to the cart", &GenerateConfig::default()).unwrap();
//! let text = render_text(&cases, TestFormat::Simple);
//!
//! assert!(text.starts_with("Add a product to the cart - Test Checklist"));
//! assert!(text.contains("[ ] Add valid item to shopping cart [positive]"));
//! ```

mod html;
mod layout;
mod renderers;
mod text;

pub use html::escape;
pub use layout::{Block, Layout, ListItem, ListStyle};
pub use renderers::{renderer_for, DetailedRenderer, Renderer, SimpleRenderer, StandardRenderer};

use storycase_core::{TestCase, TestFormat};

/// Shown instead of an empty result.
pub const NO_CASES_MESSAGE: &str = "No test cases generated. Please check your input.";

/// Lay out one test case in the given format.
pub fn render(case: &TestCase, format: TestFormat) -> Layout {
    renderer_for(format).render(case)
}

/// Render all cases as plain text, separated by a blank line.
pub fn render_text(cases: &[TestCase], format: TestFormat) -> String {
    if cases.is_empty() {
        return NO_CASES_MESSAGE.to_string();
    }
    let renderer = renderer_for(format);
    cases
        .iter()
        .map(|case| renderer.render(case).to_text())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render all cases as HTML, each wrapped in a `test-case` container.
pub fn render_html(cases: &[TestCase], format: TestFormat) -> String {
    if cases.is_empty() {
        return format!("<p>{}</p>", NO_CASES_MESSAGE);
    }
    let renderer = renderer_for(format);
    let mut out = String::new();
    for case in cases {
        out.push_str("<div class=\"test-case\">");
        out.push_str(&renderer.render(case).to_html());
        out.push_str("</div>");
    }
    out
}
