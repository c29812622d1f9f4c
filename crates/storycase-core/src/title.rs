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

//! Title extraction from user story lines

const BENEFIT_MARKER: &str = " so that ";
const WANT_MARKER: &str = " I want to ";
const ROLE_OPENING: &str = "As a ";
const ROLE_CLOSING: &str = ", I want to ";

/// Derive a short display title from a story line.
///
/// Stories of the form `As a <role>, I want to <goal> so that <benefit>`
/// yield `<goal>`. Lines with only an `I want to` clause yield the text that
/// follows it. Anything else is returned unchanged.
///
/// # Examples
///
/// ```
/// use storycase_core::extract_title;
///
/// assert_eq!(
///     extract_title("As a customer, I want to add items to my cart so that I can buy them."),
///     "add items to my cart"
/// );
/// assert_eq!(extract_title("Then I want to  export reports "), "export reports");
/// assert_eq!(extract_title("Payment via credit card"), "Payment via credit card");
/// ```
pub fn extract_title(line: &str) -> String {
    if let Some((goal, _)) = line.split_once(BENEFIT_MARKER) {
        return strip_role_prefix(goal).trim().to_string();
    }

    if let Some((_, rest)) = line.split_once(WANT_MARKER) {
        // The clause ends at a repeated marker, if any.
        let clause = match rest.find(WANT_MARKER) {
            Some(end) => &rest[..end],
            None => rest,
        };
        return clause.trim().to_string();
    }

    line.to_string()
}

/// Remove a leading `As a <role>, I want to ` where the role is one or more
/// characters up to the first comma. Matching is case-sensitive.
fn strip_role_prefix(text: &str) -> &str {
    let Some(after_opening) = text.strip_prefix(ROLE_OPENING) else {
        return text;
    };
    match after_opening.find(',') {
        Some(comma) if comma > 0 => after_opening[comma..]
            .strip_prefix(ROLE_CLOSING)
            .unwrap_or(text),
        _ => text,
    }
}
