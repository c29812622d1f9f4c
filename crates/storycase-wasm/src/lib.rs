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

//! StoryCase WebAssembly Bindings
//!
//! Exposes test case generation to the browser form. The host page owns the
//! DOM, notifications and clipboard; this crate only turns form values and
//! story text into data or rendered strings.
//!
//! # Usage (JavaScript)
//!
//! ```typescript
//! import init, { generate, renderHtml, renderText, presets } from 'storycase-wasm';
//!
//! await init();
//!
//! const options = {
//!     testFormat: 'standard',
//!     testDetail: 'standard',
//!     positiveTests: true,
//!     negativeTests: true,
//!     edgeCases: false,
//!     testCount: '1',
//!     includeSetup: 'yes',
//! };
//!
//! try {
//!     container.innerHTML = renderHtml(textarea.value, options);
//!     clipboardText = renderText(textarea.value, options);
//! } catch (e) {
//!     alert(e.message); // "Please enter at least one user story or requirement."
//! }
//!
//! textarea.value = presets().login;
//! ```

use serde::Deserialize;
use storycase_core::{
    generate_test_cases, DetailLevel, GenerateConfig, GenerateError, Preset, SetupMode, TestCase,
    TestFormat,
};
use storycase_render::{render_html, render_text};
use wasm_bindgen::prelude::*;

// TypeScript shape of the options object accepted by every generation export
#[wasm_bindgen(typescript_custom_section)]
const TS_FORM_OPTIONS: &'static str = r#"
/**
 * Raw values of the story form's controls.
 */
export interface FormOptions {
    testFormat?: 'standard' | 'detailed' | 'simple';
    testDetail?: 'basic' | 'standard' | 'comprehensive';
    positiveTests?: boolean;
    negativeTests?: boolean;
    edgeCases?: boolean;
    testCount?: string | number;
    includeSetup?: 'yes' | 'no';
}
"#;

// Initialize panic hook for error handling.
// Debug builds show full panic messages; release builds log a generic one.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    #[cfg(not(debug_assertions))]
    std::panic::set_hook(Box::new(|_| {
        web_sys::console::error_1(&"StoryCase: An internal error occurred".into());
    }));
}

/// StoryCase version constant.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// --- Form Options ---

/// Repetition count as the form delivers it: an input's string value or a
/// number set from script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CountValue {
    Number(f64),
    Text(String),
}

impl CountValue {
    /// Integer value with decimal `parseInt` semantics: leading whitespace and
    /// one `+` sign are skipped, then digits are read up to the first
    /// non-digit. Anything else, including negative values and `0x` hex
    /// prefixes (read as `0`), counts as zero.
    pub fn repetitions(&self) -> u32 {
        match self {
            Self::Number(n) if n.is_finite() && *n >= 1.0 => {
                if *n >= u32::MAX as f64 {
                    u32::MAX
                } else {
                    *n as u32
                }
            }
            Self::Number(_) => 0,
            Self::Text(text) => {
                let trimmed = text.trim_start();
                let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
                let digits: String = unsigned
                    .chars()
                    .take_while(|c| c.is_ascii_digit())
                    .collect();
                digits.parse().unwrap_or(if digits.is_empty() { 0 } else { u32::MAX })
            }
        }
    }
}

/// Values of the story form's controls, in the form's own vocabulary.
///
/// Parsing is lenient: unknown formats fall back to standard, any detail
/// other than `basic` is non-basic, any setup value other than `yes`
/// excludes setup, and a missing checkbox is unchecked.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormOptions {
    pub test_format: Option<String>,
    pub test_detail: Option<String>,
    pub positive_tests: bool,
    pub negative_tests: bool,
    pub edge_cases: bool,
    pub test_count: Option<CountValue>,
    pub include_setup: Option<String>,
}

impl FormOptions {
    /// Generation config for these form values.
    pub fn to_config(&self) -> GenerateConfig {
        let format = self
            .test_format
            .as_deref()
            .and_then(|f| f.parse::<TestFormat>().ok())
            .unwrap_or_default();
        let detail = self
            .test_detail
            .as_deref()
            .map(DetailLevel::from_form_value)
            .unwrap_or_default();
        let setup = self
            .include_setup
            .as_deref()
            .map(SetupMode::from_form_value)
            .unwrap_or(SetupMode::Exclude);
        let repetitions = self
            .test_count
            .as_ref()
            .map(CountValue::repetitions)
            .unwrap_or(0);

        GenerateConfig {
            format,
            detail,
            include_positive: self.positive_tests,
            include_negative: self.negative_tests,
            include_edge_cases: self.edge_cases,
            repetitions,
            setup,
        }
    }
}

/// Generate test cases for the form's input.
///
/// # Errors
///
/// Returns [`GenerateError::EmptyInput`] when the input holds no stories.
pub fn run_form(input: &str, options: &FormOptions) -> Result<Vec<TestCase>, GenerateError> {
    generate_test_cases(input, &options.to_config())
}

/// HTML for the form's input in the selected format.
pub fn form_html(input: &str, options: &FormOptions) -> Result<String, GenerateError> {
    let config = options.to_config();
    let cases = generate_test_cases(input, &config)?;
    Ok(render_html(&cases, config.format))
}

/// Plain text for the form's input in the selected format.
pub fn form_text(input: &str, options: &FormOptions) -> Result<String, GenerateError> {
    let config = options.to_config();
    let cases = generate_test_cases(input, &config)?;
    Ok(render_text(&cases, config.format))
}

fn parse_options(options: JsValue) -> Result<FormOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(FormOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
}

// --- Exports ---

/// Generate test cases as an array of plain objects.
///
/// # Errors
/// Throws with the blocking message when the input holds no stories.
#[wasm_bindgen]
pub fn generate(input: &str, options: JsValue) -> Result<JsValue, JsError> {
    let options = parse_options(options)?;
    let cases = run_form(input, &options).map_err(|e| JsError::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&cases).map_err(|e| JsError::new(&e.to_string()))
}

/// Render test cases as an HTML fragment for the results container.
#[wasm_bindgen(js_name = renderHtml)]
pub fn render_html_export(input: &str, options: JsValue) -> Result<String, JsError> {
    let options = parse_options(options)?;
    form_html(input, &options).map_err(|e| JsError::new(&e.to_string()))
}

/// Render test cases as the plain text a copy action transfers.
#[wasm_bindgen(js_name = renderText)]
pub fn render_text_export(input: &str, options: JsValue) -> Result<String, JsError> {
    let options = parse_options(options)?;
    form_text(input, &options).map_err(|e| JsError::new(&e.to_string()))
}

/// All example presets as an object mapping name to story text.
#[wasm_bindgen]
pub fn presets() -> Result<js_sys::Object, JsValue> {
    let map = js_sys::Object::new();
    for preset in Preset::ALL {
        js_sys::Reflect::set(
            &map,
            &JsValue::from_str(preset.name()),
            &JsValue::from_str(preset.stories()),
        )?;
    }
    Ok(map)
}

/// Story text of one preset.
///
/// # Errors
/// Throws if the name is not a known preset.
#[wasm_bindgen]
pub fn preset(name: &str) -> Result<String, JsError> {
    name.parse::<Preset>()
        .map(|p| p.stories().to_string())
        .map_err(|e| JsError::new(&e.to_string()))
}

// --- WASM Tests (require browser) ---


// --- Native Rust Tests (run with cargo test) ---
