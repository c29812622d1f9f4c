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

//! Generation over the built-in example presets

use storycase_core::{generate_test_cases, DetailLevel, GenerateConfig, Preset, SetupMode, TestType};

fn names(case: &storycase_core::TestCase) -> Vec<&str> {
    case.tests.iter().map(|t| t.name.as_str()).collect()
}

#[test]
fn test_login_preset_full_run() {
    let cases = generate_test_cases(Preset::Login.stories(), &GenerateConfig::default()).unwrap();
    assert_eq!(cases.len(), 2);

    assert_eq!(cases[0].title, "be able to login with my email and password");
    assert_eq!(
        names(&cases[0]),
        vec![
            "Valid login with correct credentials",
            "Login with remember me option",
            "Login with incorrect credentials",
            "Login with empty credentials",
        ]
    );

    // No "so that" or "I want to" clause, so the title is the whole line.
    assert_eq!(cases[1].title, cases[1].description);
    assert_eq!(
        names(&cases[1]),
        vec![
            "Valid login with correct credentials",
            "Login with remember me option",
            "Login with incorrect credentials",
            "Login after multiple failed attempts",
            "Login with empty credentials",
        ]
    );
}

#[test]
fn test_cart_preset_remove_story_falls_back() {
    let cases = generate_test_cases(Preset::Cart.stories(), &GenerateConfig::default()).unwrap();

    assert_eq!(cases[0].title, "add items to my shopping cart");
    assert_eq!(
        names(&cases[0]),
        vec![
            "Add valid item to shopping cart",
            "Add invalid item to shopping cart",
            "Add out-of-stock item to cart",
        ]
    );

    // "remove items from my shopping cart" never says "add".
    assert_eq!(
        names(&cases[1]),
        vec![
            "Successful operation with valid inputs",
            "Operation failure with invalid inputs",
        ]
    );
}

#[test]
fn test_profile_preset_negative_uses_generic() {
    let config = GenerateConfig::default().with_detail(DetailLevel::Basic);
    let cases = generate_test_cases(Preset::Profile.stories(), &config).unwrap();

    for case in &cases {
        assert_eq!(
            names(case),
            vec![
                "Update profile information",
                "Operation failure with invalid inputs",
                "Update profile with extremely long values",
            ]
        );
    }
}

#[test]
fn test_payment_preset_exercises_only_fallbacks() {
    let cases = generate_test_cases(Preset::Payment.stories(), &GenerateConfig::default()).unwrap();

    for case in &cases {
        assert_eq!(case.count_by_type(TestType::Positive), 1);
        assert_eq!(case.count_by_type(TestType::Negative), 1);
        assert_eq!(case.count_by_type(TestType::Edge), 0);
    }
    assert_eq!(cases[0].title, "pay for my order using a credit card");
    assert_eq!(
        cases[1].title,
        "receive a confirmation email after successful payment"
    );
}

#[test]
fn test_setup_lists_follow_templates_when_included() {
    let cases = generate_test_cases(Preset::Cart.stories(), &GenerateConfig::default()).unwrap();
    let cart = &cases[0].tests;

    // positive cart: setup and teardown
    assert_eq!(cart[0].setup.len(), 2);
    assert_eq!(cart[0].teardown.len(), 1);
    // negative cart: setup only
    assert_eq!(cart[1].setup.len(), 1);
    assert!(cart[1].teardown.is_empty());
    // edge cart: setup only
    assert_eq!(cart[2].setup.len(), 1);
    assert!(cart[2].teardown.is_empty());

    let excluded = GenerateConfig::default().with_setup(SetupMode::Exclude);
    let cases = generate_test_cases(Preset::Cart.stories(), &excluded).unwrap();
    assert!(cases[0].tests.iter().all(|t| t.setup.is_empty() && t.teardown.is_empty()));
}
