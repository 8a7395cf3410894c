//! Scenario outcomes, failures and assertion helpers

use serde::Serialize;
use thiserror::Error;

use super::Scenario;
use crate::client::{Decoded, RawResponse, ResponseShape};
use crate::error::{ApiError, Error};

/// Why a single scenario failed
#[derive(Debug, Error)]
pub enum ScenarioFailure {
    #[error("{what}: expected {expected}, got {actual}")]
    Assertion {
        what: &'static str,
        expected: String,
        actual: String,
    },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{0}")]
    Other(String),
}

impl From<Error> for ScenarioFailure {
    fn from(err: Error) -> Self {
        match err {
            Error::Api(api) => ScenarioFailure::Api(api),
            other => ScenarioFailure::Other(other.to_string()),
        }
    }
}

/// Result type for scenario bodies
pub type ScenarioResult = std::result::Result<(), ScenarioFailure>;

/// Assert the response status code
pub fn expect_status(raw: &RawResponse, expected: u16) -> ScenarioResult {
    if raw.status == expected {
        Ok(())
    } else {
        Err(ScenarioFailure::Assertion {
            what: "status code",
            expected: expected.to_string(),
            actual: raw.status.to_string(),
        })
    }
}

/// Assert an optional string field equals `expected`
pub fn expect_eq(what: &'static str, expected: &str, actual: Option<&str>) -> ScenarioResult {
    if actual == Some(expected) {
        Ok(())
    } else {
        Err(ScenarioFailure::Assertion {
            what,
            expected: format!("{:?}", expected),
            actual: describe(actual),
        })
    }
}

/// Assert an optional string field is present and non-empty
pub fn expect_non_empty(what: &'static str, actual: Option<&str>) -> ScenarioResult {
    match actual {
        Some(value) if !value.is_empty() => Ok(()),
        other => Err(ScenarioFailure::Assertion {
            what,
            expected: "a non-empty value".to_string(),
            actual: describe(other),
        }),
    }
}

fn describe(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("{:?}", v),
        None => "nothing".to_string(),
    }
}

/// Extract the `msg` field from a body decoded as `shape`
pub fn message(raw: &RawResponse, shape: ResponseShape) -> Result<Option<String>, ApiError> {
    Ok(match raw.decode(shape)? {
        Decoded::Envelope(envelope) => envelope.msg,
        Decoded::Element(value) => value
            .get("msg")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string),
        Decoded::Records(_) => None,
    })
}

/// Final state of one scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    Failed,
    Skipped,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Passed => write!(f, "PASS"),
            Status::Failed => write!(f, "FAIL"),
            Status::Skipped => write!(f, "SKIP"),
        }
    }
}

/// Outcome of one scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    /// Position in the suite, starting at 1
    pub order: usize,
    /// Scenario name
    pub scenario: &'static str,
    /// Pass, fail or skip
    pub status: Status,
    /// Failure reason, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Wall-clock time spent in the scenario
    pub duration_ms: u128,
}

impl ScenarioOutcome {
    /// Build an outcome from a scenario result
    pub fn from_result(scenario: Scenario, result: ScenarioResult, duration_ms: u128) -> Self {
        let (status, detail) = match result {
            Ok(()) => (Status::Passed, None),
            Err(failure) => (Status::Failed, Some(failure.to_string())),
        };
        Self {
            order: scenario.order(),
            scenario: scenario.name(),
            status,
            detail,
            duration_ms,
        }
    }

    /// Outcome for a scenario that never ran
    pub fn skipped(scenario: Scenario, reason: &str) -> Self {
        Self {
            order: scenario.order(),
            scenario: scenario.name(),
            status: Status::Skipped,
            detail: Some(reason.to_string()),
            duration_ms: 0,
        }
    }
}

/// Outcomes of a whole run, in execution order
#[derive(Debug, Clone, Default, Serialize)]
pub struct SuiteReport {
    pub outcomes: Vec<ScenarioOutcome>,
    /// Last value of the shared revue id when the run ended
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_revue_id: Option<String>,
}

impl SuiteReport {
    fn count(&self, status: Status) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    pub fn passed(&self) -> usize {
        self.count(Status::Passed)
    }

    pub fn failed(&self) -> usize {
        self.count(Status::Failed)
    }

    pub fn skipped(&self) -> usize {
        self.count(Status::Skipped)
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// True when no scenario failed
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}
