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

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

const LOGIN_STORY: &str =
    "As a user, I want to be able to login with my email and password so that I can access my account.";

fn storycase_cmd() -> Command {
    Command::cargo_bin("storycase").expect("Failed to find storycase binary")
}

fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    storycase_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("StoryCase"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("presets"));
}

#[test]
fn test_version_output() {
    storycase_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("storycase"));
}

#[test]
fn test_no_subcommand_fails() {
    storycase_cmd().assert().failure();
}

// ===== Generate Command Tests =====

#[test]
fn test_generate_standard_from_file() {
    let file = create_temp_file(LOGIN_STORY, ".txt");

    storycase_cmd()
        .arg("generate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Test Case 1: be able to login with my email and password\n",
        ))
        .stdout(predicate::str::contains("Valid login with correct credentials [positive]"))
        .stdout(predicate::str::contains("Login with remember me option [positive]"))
        .stdout(predicate::str::contains("Login with incorrect credentials [negative]"))
        .stdout(predicate::str::contains("Login with empty credentials [edge]"));
}

#[test]
fn test_generate_basic_positive_only() {
    let file = create_temp_file(LOGIN_STORY, ".txt");

    storycase_cmd()
        .args(["generate", "--detail", "basic", "--no-negative", "--no-edge"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid login with correct credentials"))
        .stdout(predicate::str::contains("remember me").not())
        .stdout(predicate::str::contains("[negative]").not());
}

#[test]
fn test_generate_from_stdin() {
    storycase_cmd()
        .args(["generate", "-", "--format", "simple"])
        .write_stdin("Add a product to the cart\n\nPay by card\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Add a product to the cart - Test Checklist"))
        .stdout(predicate::str::contains("Pay by card - Test Checklist"))
        .stdout(predicate::str::contains("[ ] Add valid item to shopping cart [positive]"));
}

#[test]
fn test_generate_empty_input_fails() {
    storycase_cmd()
        .args(["generate", "-"])
        .write_stdin("   \n\t\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Please enter at least one user story or requirement.",
        ));
}

#[test]
fn test_generate_preset_json() {
    let output = storycase_cmd()
        .args(["generate", "--preset", "cart", "--emit", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let cases: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(cases.as_array().unwrap().len(), 2);
    assert_eq!(cases[0]["title"], "add items to my shopping cart");
    assert_eq!(cases[1]["id"], 2);
    assert_eq!(
        cases[1]["tests"][0]["name"],
        "Successful operation with valid inputs"
    );
}

#[test]
fn test_generate_html_output() {
    storycase_cmd()
        .args(["generate", "--preset", "login", "--emit", "html", "-f", "detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<div class=\"test-case\">"))
        .stdout(predicate::str::contains("Test Scenario 1: be able to login"))
        .stdout(predicate::str::contains("<button class=\"copy-btn\">Copy Test Scenario</button>"));
}

#[test]
fn test_generate_to_file_prints_summary() {
    let out = NamedTempFile::new().unwrap();

    storycase_cmd()
        .args(["generate", "--preset", "payment", "-o"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("2 test case(s), 4 scenario(s) written to"));

    let written = fs::read_to_string(out.path()).unwrap();
    assert!(written.contains("Test Case 2: receive a confirmation email after successful payment"));
}

#[test]
fn test_generate_config_file_with_override() {
    let config = create_temp_file(r#"{"format": "simple", "repetitions": 2}"#, ".json");

    storycase_cmd()
        .args(["generate", "--preset", "payment", "--config"])
        .arg(config.path())
        .args(["--no-negative"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Test Checklist"))
        .stdout(predicate::str::contains("[negative]").not())
        .stdout(predicate::str::contains(
            "[ ] Successful operation with valid inputs [positive]\n  Verify that the functionality works correctly with valid inputs\n\n[ ] Successful operation with valid inputs [positive]",
        ));
}

#[test]
fn test_generate_invalid_config_fails() {
    let config = create_temp_file("{ not json", ".json");

    storycase_cmd()
        .args(["generate", "--preset", "login", "--config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON format error"));
}

#[test]
fn test_generate_setup_excluded() {
    storycase_cmd()
        .args(["generate", "--preset", "cart", "--setup", "no"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Setup:").not())
        .stdout(predicate::str::contains("Teardown:").not());
}

#[test]
fn test_generate_zero_count() {
    storycase_cmd()
        .args(["generate", "--preset", "login", "-n", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test Case 1:"))
        .stdout(predicate::str::contains("[positive]").not());
}

#[test]
fn test_generate_unknown_format_rejected() {
    storycase_cmd()
        .args(["generate", "--preset", "login", "--format", "fancy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fancy"));
}

#[test]
fn test_generate_requires_source() {
    storycase_cmd().arg("generate").assert().failure();
}

#[test]
fn test_generate_file_and_preset_conflict() {
    let file = create_temp_file(LOGIN_STORY, ".txt");

    storycase_cmd()
        .arg("generate")
        .arg(file.path())
        .args(["--preset", "login"])
        .assert()
        .failure();
}

#[test]
fn test_generate_missing_file() {
    storycase_cmd()
        .args(["generate", "/nonexistent/stories.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_generate_file_too_large() {
    let file = create_temp_file(LOGIN_STORY, ".txt");

    storycase_cmd()
        .env("STORYCASE_MAX_FILE_SIZE", "10")
        .arg("generate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

// ===== Presets Command Tests =====

#[test]
fn test_presets_list() {
    storycase_cmd()
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("payment"))
        .stdout(predicate::str::contains("  - add items to my shopping cart"));
}

#[test]
fn test_presets_single_pipes_into_generate() {
    let output = storycase_cmd().args(["presets", "profile"]).output().unwrap();
    assert!(output.status.success());
    let stories = String::from_utf8(output.stdout).unwrap();
    assert!(stories.starts_with("As a user, I want to update my profile information"));

    storycase_cmd()
        .args(["generate", "-"])
        .write_stdin(stories)
        .assert()
        .success()
        .stdout(predicate::str::contains("Update profile information [positive]"));
}

#[test]
fn test_presets_unknown_name() {
    storycase_cmd()
        .args(["presets", "shipping"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("shipping"));
}
