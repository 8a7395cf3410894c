//! Functional test harness for revue-check
//!
//! Wraps the binary with the live API settings taken from the environment and
//! refuses to run until the caller confirms that revues may be created.

use std::env;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

/// Warning shown when confirmation is missing
const LIVE_API_WARNING: &str = r#"
The functional suite creates revues on the configured Revue API.
To proceed, set: REVUE_FUNCTIONAL_TESTS_CONFIRM=yes
"#;

/// Runs the binary against the live API configured in the environment
pub struct FunctionalTestContext {
    base_url: Option<String>,
}

impl FunctionalTestContext {
    /// Create a context; panics unless the live run is confirmed.
    pub fn new() -> Self {
        if env::var("REVUE_FUNCTIONAL_TESTS_CONFIRM").as_deref() != Ok("yes") {
            eprintln!("{}", LIVE_API_WARNING);
            panic!("Live API confirmation required. Set REVUE_FUNCTIONAL_TESTS_CONFIRM=yes.");
        }

        Self {
            base_url: env::var("REVUE_BASE_URL").ok(),
        }
    }

    /// Build a command; credentials come from the inherited REVUE_* env.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("revue-check"));
        // Keep a developer's ~/.revue-check/config.yaml out of the run
        cmd.args(["--config", "/nonexistent/revue-check.yaml"]);
        if let Some(ref url) = self.base_url {
            cmd.args(["--base-url", url]);
        }
        cmd.args(args);
        cmd
    }
}

impl Default for FunctionalTestContext {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_status_reports_auth_source() {
    let ctx = FunctionalTestContext::new();

    let mut cmd = ctx.command(&["status"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Base URL"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_negative_paths_against_live_api() {
    let ctx = FunctionalTestContext::new();

    let mut cmd = ctx.command(&[
        "run",
        "--only",
        "create-without-required-fields",
        "--only",
        "edit-non-existing",
        "--only",
        "delete-non-existing",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3 passed"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_full_suite_against_live_api() {
    let ctx = FunctionalTestContext::new();

    let mut cmd = ctx.command(&["run", "--format", "json"]);
    let output = cmd.output().expect("Failed to execute revue-check");
    let stdout = String::from_utf8_lossy(&output.stdout);

    let report: serde_json::Value =
        serde_json::from_str(&stdout).expect("run --format json prints a report");
    let outcomes = report["data"]["outcomes"].as_array().expect("outcomes array");
    assert_eq!(outcomes.len(), 7);
    // Create and list must work for the shared id to be populated
    assert_eq!(outcomes[0]["status"], "passed", "{}", stdout);
    assert_eq!(outcomes[1]["status"], "passed", "{}", stdout);
}
