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

//! Example story presets

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Built-in example story texts.
///
/// The payment preset matches no keyword category and only exercises the
/// generic fallback records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Preset {
    Login,
    Cart,
    Profile,
    Payment,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Login, Preset::Cart, Preset::Profile, Preset::Payment];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Cart => "cart",
            Self::Profile => "profile",
            Self::Payment => "payment",
        }
    }

    /// The preset's story lines, newline-separated.
    pub fn stories(&self) -> &'static str {
        match self {
            Self::Login => concat!(
                "As a user, I want to be able to login with my email and password so that I can access my account.\n",
                "As a user, I want the system to prevent login after multiple failed attempts to enhance security."
            ),
            Self::Cart => concat!(
                "As a customer, I want to add items to my shopping cart so that I can purchase them later.\n",
                "As a customer, I want to remove items from my shopping cart so that I can update my order before purchasing."
            ),
            Self::Profile => concat!(
                "As a user, I want to update my profile information including name, email, and password so that I can keep my account details current.\n",
                "As a user, I want to upload a profile picture so that others can recognize me in the system."
            ),
            Self::Payment => concat!(
                "As a customer, I want to pay for my order using a credit card so that I can complete my purchase.\n",
                "As a customer, I want to receive a confirmation email after successful payment so that I have proof of purchase."
            ),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::unknown("preset", s, "login, cart, profile, payment"))
    }
}
