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

//! Keyword categories and story matching

use std::fmt;

/// A keyword category recognised in story lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Story mentions "login"
    Login,
    /// Story mentions both "add" and "cart"
    Cart,
    /// Story mentions "profile"
    Profile,
}

impl Category {
    /// All categories in the fixed match order.
    pub const ALL: [Category; 3] = [Category::Login, Category::Cart, Category::Profile];

    /// Test a lowercased story line against this category.
    pub fn matches_lowered(&self, lowered: &str) -> bool {
        match self {
            Self::Login => lowered.contains("login"),
            Self::Cart => lowered.contains("add") && lowered.contains("cart"),
            Self::Profile => lowered.contains("profile"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Cart => "cart",
            Self::Profile => "profile",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword matches for a single story line, computed once.
///
/// # Examples
///
/// ```
/// use storycase_core::{Category, KeywordMatches};
///
/// let matches = KeywordMatches::scan("Prevent LOGIN after failed attempts");
/// assert!(matches.contains(Category::Login));
/// assert!(matches.mentions_attempt());
/// assert_eq!(matches.categories(), vec![Category::Login]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeywordMatches {
    login: bool,
    cart: bool,
    profile: bool,
    attempt: bool,
}

impl KeywordMatches {
    /// Scan a story line. Matching is case-insensitive.
    pub fn scan(story: &str) -> Self {
        let lowered = story.to_lowercase();
        Self {
            login: Category::Login.matches_lowered(&lowered),
            cart: Category::Cart.matches_lowered(&lowered),
            profile: Category::Profile.matches_lowered(&lowered),
            attempt: lowered.contains("attempt"),
        }
    }

    pub fn contains(&self, category: Category) -> bool {
        match category {
            Category::Login => self.login,
            Category::Cart => self.cart,
            Category::Profile => self.profile,
        }
    }

    /// Whether the line mentions "attempt" (drives the lockout variant).
    pub fn mentions_attempt(&self) -> bool {
        self.attempt
    }

    /// Matched categories in match order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.contains(*c))
            .collect()
    }

    /// Whether no category matched.
    pub fn is_empty(&self) -> bool {
        !(self.login || self.cart || self.profile)
    }
}
