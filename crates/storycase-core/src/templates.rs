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

//! Static scenario templates
//!
//! Every generated record is a copy of one of these templates. The texts
//! never depend on the story line beyond the category that matched it.

use crate::config::SetupMode;
use crate::model::{TestRecord, TestType};

/// Fixed text for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub steps: &'static [&'static str],
    pub expected: &'static str,
    pub setup: &'static [&'static str],
    pub teardown: &'static [&'static str],
}

impl RecordTemplate {
    /// Build a record of the given type from this template.
    ///
    /// Setup and teardown are copied only when `setup` is
    /// [`SetupMode::Include`]; otherwise both lists are empty.
    pub fn instantiate(&self, test_type: TestType, setup: SetupMode) -> TestRecord {
        let (setup, teardown) = if setup.is_included() {
            (to_owned_list(self.setup), to_owned_list(self.teardown))
        } else {
            (Vec::new(), Vec::new())
        };

        TestRecord {
            name: self.name.to_string(),
            test_type,
            description: self.description.to_string(),
            steps: to_owned_list(self.steps),
            expected: self.expected.to_string(),
            setup,
            teardown,
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ==================== Positive ====================

pub static POSITIVE_LOGIN: RecordTemplate = RecordTemplate {
    name: "Valid login with correct credentials",
    description: "Verify that a user can successfully login with valid credentials",
    steps: &[
        "Navigate to the login page",
        "Enter a valid email address",
        "Enter the correct password",
        "Click the login button",
        "Verify that the user is redirected to the dashboard",
        "Verify that the user session is established",
    ],
    expected: "User should be successfully logged in and redirected to the dashboard",
    setup: &[
        "Ensure test user account exists with known credentials",
        "Clear any existing user sessions",
    ],
    teardown: &[
        "Logout the user after test completion",
        "Clear test data if created during test",
    ],
};

pub static POSITIVE_LOGIN_REMEMBER_ME: RecordTemplate = RecordTemplate {
    name: "Login with remember me option",
    description: "Verify that login persists when 'Remember Me' is selected",
    steps: &[
        "Navigate to the login page",
        "Enter valid credentials",
        "Check the 'Remember Me' checkbox",
        "Click the login button",
        "Close and reopen the browser",
        "Navigate to the application URL",
    ],
    expected: "User should remain logged in without needing to re-enter credentials",
    setup: &[
        "Ensure test user account exists",
        "Clear browser cookies and cache before test",
    ],
    teardown: &["Logout and clear cookies after test"],
};

pub static POSITIVE_CART: RecordTemplate = RecordTemplate {
    name: "Add valid item to shopping cart",
    description: "Verify that a user can add a valid product to the shopping cart",
    steps: &[
        "Navigate to the product catalog",
        "Select a product that is in stock",
        "Click the 'Add to Cart' button",
        "Verify that the cart icon updates with the item count",
        "Navigate to the shopping cart page",
        "Verify the product is listed in the cart",
    ],
    expected: "Product should be successfully added to the cart with correct details",
    setup: &[
        "Ensure test products are available in the catalog",
        "Clear the shopping cart before test",
    ],
    teardown: &["Remove items from cart after test completion"],
};

pub static POSITIVE_PROFILE: RecordTemplate = RecordTemplate {
    name: "Update profile information",
    description: "Verify that a user can update their profile information",
    steps: &[
        "Login to the application",
        "Navigate to the profile settings page",
        "Update the name field with a new value",
        "Update the email field with a valid email",
        "Click the 'Save Changes' button",
        "Verify success message is displayed",
        "Logout and login again to verify changes persist",
    ],
    expected: "Profile information should be updated successfully and persist after logout/login",
    setup: &[
        "Ensure test user account exists",
        "Note original profile values for restoration",
    ],
    teardown: &["Restore original profile values after test"],
};

pub static POSITIVE_GENERIC: RecordTemplate = RecordTemplate {
    name: "Successful operation with valid inputs",
    description: "Verify that the functionality works correctly with valid inputs",
    steps: &[
        "Navigate to the relevant page/feature",
        "Provide valid input data",
        "Execute the operation",
        "Verify the operation completes successfully",
        "Verify the expected outcome is achieved",
    ],
    expected: "Operation should complete successfully with expected results",
    setup: &["Prepare test environment with necessary data"],
    teardown: &["Clean up test data after completion"],
};

// ==================== Negative ====================

pub static NEGATIVE_LOGIN: RecordTemplate = RecordTemplate {
    name: "Login with incorrect credentials",
    description: "Verify that login fails with incorrect credentials",
    steps: &[
        "Navigate to the login page",
        "Enter a valid email address",
        "Enter an incorrect password",
        "Click the login button",
    ],
    expected: "Login should fail with appropriate error message",
    setup: &["Ensure test user account exists"],
    teardown: &["Clear any error states after test"],
};

pub static NEGATIVE_LOGIN_LOCKOUT: RecordTemplate = RecordTemplate {
    name: "Login after multiple failed attempts",
    description: "Verify that account gets locked after multiple failed login attempts",
    steps: &[
        "Navigate to the login page",
        "Enter a valid email address",
        "Enter incorrect password 5 times consecutively",
        "Attempt to login with correct credentials on the 6th attempt",
    ],
    expected: "Account should be temporarily locked after 5 failed attempts",
    setup: &["Ensure test user account exists and is not locked"],
    teardown: &["Reset account lock status after test"],
};

pub static NEGATIVE_CART: RecordTemplate = RecordTemplate {
    name: "Add invalid item to shopping cart",
    description: "Verify that invalid items cannot be added to the cart",
    steps: &[
        "Navigate to the product catalog",
        "Attempt to add a product that doesn't exist (via URL manipulation)",
        "Verify the system response",
    ],
    expected: "System should reject the request with appropriate error message",
    setup: &["Ensure test environment is properly configured"],
    teardown: &[],
};

pub static NEGATIVE_GENERIC: RecordTemplate = RecordTemplate {
    name: "Operation failure with invalid inputs",
    description: "Verify that the functionality fails gracefully with invalid inputs",
    steps: &[
        "Navigate to the relevant page/feature",
        "Provide invalid or malformed input data",
        "Execute the operation",
        "Verify the operation fails appropriately",
    ],
    expected: "Operation should fail with clear error message, not crash",
    setup: &["Prepare test environment"],
    teardown: &["Clean up any error states"],
};

// ==================== Edge ====================

pub static EDGE_LOGIN: RecordTemplate = RecordTemplate {
    name: "Login with empty credentials",
    description: "Verify behavior when login is attempted with empty fields",
    steps: &[
        "Navigate to the login page",
        "Leave both email and password fields empty",
        "Click the login button",
    ],
    expected: "System should display appropriate validation messages",
    setup: &[],
    teardown: &[],
};

pub static EDGE_CART: RecordTemplate = RecordTemplate {
    name: "Add out-of-stock item to cart",
    description: "Verify behavior when attempting to add an out-of-stock item",
    steps: &[
        "Navigate to a product that is out of stock",
        "Attempt to add the product to the cart",
    ],
    expected: "System should prevent adding out-of-stock items with appropriate message",
    setup: &["Ensure an out-of-stock product exists in catalog"],
    teardown: &[],
};

pub static EDGE_PROFILE: RecordTemplate = RecordTemplate {
    name: "Update profile with extremely long values",
    description: "Verify behavior when profile fields contain maximum allowed characters",
    steps: &[
        "Login to the application",
        "Navigate to profile settings",
        "Enter the maximum allowed characters in each field",
        "Save the changes",
    ],
    expected: "System should accept and properly handle maximum length inputs",
    setup: &["Ensure test user account exists"],
    teardown: &["Restore original profile values"],
};
