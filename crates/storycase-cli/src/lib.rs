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

//! StoryCase CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **generate**: Turn user stories (file, stdin or preset) into test cases,
//!   emitted as text, HTML or JSON
//! - **presets**: List the built-in example stories or print one of them
//! - **completion**: Generate shell completion scripts (bash, zsh, fish, powershell, elvish)
//!
//! # Examples
//!
//! ```no_run
//! use storycase_cli::commands::{generate, ConfigOverrides, Emit, StorySource};
//! use storycase_core::TestFormat;
//!
//! # fn main() -> Result<(), storycase_cli::error::CliError> {
//! let overrides = ConfigOverrides {
//!     format: Some(TestFormat::Detailed),
//!     no_edge: true,
//!     ..Default::default()
//! };
//! generate(
//!     &StorySource::File("stories.txt".to_string()),
//!     None,
//!     &overrides,
//!     Emit::Html,
//!     Some("cases.html"),
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! - `STORYCASE_MAX_FILE_SIZE`: maximum input size in bytes (default 10 MB)
//! - `RUST_LOG`: log filter; logs go to stderr (default `storycase=warn`)

pub mod cli;
pub mod commands;
pub mod error;
