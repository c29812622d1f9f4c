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

//! Format tests for storycase-render
//!
//! Exact text output for the three formats, plus pure-function properties.

use proptest::prelude::*;
use storycase_core::{generate_test_cases, GenerateConfig, SetupMode, TestFormat};
use storycase_render::{render_html, render_text};

const CART_STORY: &str = "As a shopper, I want to add items to my cart so that I can buy them.";

fn cart_edge_only() -> GenerateConfig {
    GenerateConfig::default()
        .with_positive(false)
        .with_negative(false)
}

// =============================================================================
// Exact Output Tests
// =============================================================================

#[test]
fn test_standard_text() {
    let cases = generate_test_cases(CART_STORY, &cart_edge_only()).unwrap();
    let text = render_text(&cases, TestFormat::Standard);

    assert_eq!(
        text,
        "Test Case 1: add items to my cart\n\
         User Story: As a shopper, I want to add items to my cart so that I can buy them.\n\
         \n\
         Add out-of-stock item to cart [edge]\n\
         \x20 Description: Verify behavior when attempting to add an out-of-stock item\n\
         \x20 Test Steps:\n\
         \x20   1. Navigate to a product that is out of stock\n\
         \x20   2. Attempt to add the product to the cart\n\
         \x20 Expected Result: System should prevent adding out-of-stock items with appropriate message\n\
         \x20 Setup: Ensure an out-of-stock product exists in catalog\n"
    );
}

#[test]
fn test_simple_text() {
    let cases = generate_test_cases(CART_STORY, &cart_edge_only()).unwrap();
    let text = render_text(&cases, TestFormat::Simple);

    assert_eq!(
        text,
        "add items to my cart - Test Checklist\n\
         Based on: As a shopper, I want to add items to my cart so that I can buy them.\n\
         \n\
         [ ] Add out-of-stock item to cart [edge]\n\
         \x20 Verify behavior when attempting to add an out-of-stock item\n"
    );
}

#[test]
fn test_detailed_text_without_setup() {
    let config = cart_edge_only().with_setup(SetupMode::Exclude);
    let cases = generate_test_cases(CART_STORY, &config).unwrap();
    let text = render_text(&cases, TestFormat::Detailed);

    assert!(text.starts_with("Test Scenario 1: add items to my cart\n"));
    assert!(text.contains("Scenario 1.1: Add out-of-stock item to cart [edge]"));
    assert!(text.contains("  Preconditions:\n    None\n"));
    assert!(text.contains("    Step 2: Attempt to add the product to the cart\n"));
    assert!(!text.contains("Postconditions"));
}

#[test]
fn test_html_escapes_story_text() {
    let cases =
        generate_test_cases("Show <b>bold</b> & 'quoted' names", &GenerateConfig::default())
            .unwrap();
    let html = render_html(&cases, TestFormat::Standard);

    assert!(html.contains("Show &lt;b&gt;bold&lt;/b&gt; &amp; &#39;quoted&#39; names"));
    assert!(!html.contains("<b>bold</b>"));
}

#[test]
fn test_html_type_classes() {
    let cases = generate_test_cases(CART_STORY, &GenerateConfig::default()).unwrap();
    let html = render_html(&cases, TestFormat::Standard);

    assert!(html.contains("<span class=\"test-type positive\">positive</span>"));
    assert!(html.contains("<span class=\"test-type negative\">negative</span>"));
    assert!(html.contains("<span class=\"test-type edge\">edge</span>"));
}

#[test]
fn test_html_setup_and_teardown_use_meta_classes() {
    let cases = generate_test_cases(CART_STORY, &cart_edge_only()).unwrap();
    let html = render_html(&cases, TestFormat::Standard);

    assert!(html.contains(
        "<div class=\"test-meta\"><div class=\"meta-item\"><strong>Setup:</strong> \
         Ensure an out-of-stock product exists in catalog</div></div>"
    ));
    // Out-of-stock edge case has no teardown.
    assert!(!html.contains("Teardown"));
    assert!(!html.contains("<p><strong>Setup:</strong>"));

    let bare = cart_edge_only().with_setup(SetupMode::Exclude);
    let cases = generate_test_cases(CART_STORY, &bare).unwrap();
    assert!(!render_html(&cases, TestFormat::Standard).contains("test-meta"));
}

// =============================================================================
// Property Tests
// =============================================================================

fn any_format() -> impl Strategy<Value = TestFormat> {
    prop::sample::select(TestFormat::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_rendering_is_idempotent(
        stories in "[a-zA-Z ,<>&']{1,40}(\n[a-zA-Z ,]{1,40}){0,3}",
        format in any_format(),
    ) {
        prop_assume!(!stories.trim().is_empty());
        let cases = generate_test_cases(&stories, &GenerateConfig::default()).unwrap();

        prop_assert_eq!(render_text(&cases, format), render_text(&cases, format));
        prop_assert_eq!(render_html(&cases, format), render_html(&cases, format));
    }

    #[test]
    fn prop_one_copy_button_per_case(
        stories in "[a-z ]{1,30}(\n[a-z ]{1,30}){0,4}",
        format in any_format(),
    ) {
        prop_assume!(!stories.trim().is_empty());
        let cases = generate_test_cases(&stories, &GenerateConfig::default()).unwrap();
        let html = render_html(&cases, format);

        prop_assert_eq!(html.matches("class=\"copy-btn\"").count(), cases.len());
    }
}
