//! Ordered end-to-end suite for the Revue API
//!
//! The suite runs a fixed sequence of scenarios against one shared client.
//! Order matters: the first scenarios write the current revue id into
//! [`SuiteContext`] and later ones read it. A failing scenario is recorded and
//! the run moves on to the next one unless fail-fast is requested.

use std::time::Instant;

use crate::client::RevueApi;

pub mod report;
pub mod scenarios;

pub use report::{ScenarioFailure, ScenarioOutcome, Status, SuiteReport};

/// State shared between scenarios for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteContext {
    /// Last known revue id, written by create and list
    pub current_revue_id: Option<String>,
}

/// Scenarios in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Scenario {
    /// Create a revue with title and description
    CreateWithRequiredFields,
    /// List every revue
    ListAll,
    /// Edit the revue remembered from earlier scenarios
    EditUsingSharedState,
    /// Create a throwaway revue
    CreateThrowaway,
    /// Create a revue with empty title and description
    CreateWithoutRequiredFields,
    /// Edit a revue that does not exist
    EditNonExisting,
    /// Delete a revue that does not exist
    DeleteNonExisting,
}

impl Scenario {
    /// Every scenario, in the order the suite runs them
    pub const ALL: [Scenario; 7] = [
        Scenario::CreateWithRequiredFields,
        Scenario::ListAll,
        Scenario::EditUsingSharedState,
        Scenario::CreateThrowaway,
        Scenario::CreateWithoutRequiredFields,
        Scenario::EditNonExisting,
        Scenario::DeleteNonExisting,
    ];

    /// 1-based position in the suite
    pub fn order(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .map_or(0, |i| i + 1)
    }

    /// Kebab-case name used by `--only` and in reports
    pub fn name(self) -> &'static str {
        match self {
            Scenario::CreateWithRequiredFields => "create-with-required-fields",
            Scenario::ListAll => "list-all",
            Scenario::EditUsingSharedState => "edit-using-shared-state",
            Scenario::CreateThrowaway => "create-throwaway",
            Scenario::CreateWithoutRequiredFields => "create-without-required-fields",
            Scenario::EditNonExisting => "edit-non-existing",
            Scenario::DeleteNonExisting => "delete-non-existing",
        }
    }

    /// Request and expectation, for listings
    pub fn summary(self) -> &'static str {
        match self {
            Scenario::CreateWithRequiredFields => {
                "POST /Revue/Create -> 200, revueId set, \"Successfully created!\""
            }
            Scenario::ListAll => "GET /Revue/All -> 200, non-empty list",
            Scenario::EditUsingSharedState => {
                "PUT /Revue/Edit/createdRevueId -> 404, \"Edited successfully\" if body"
            }
            Scenario::CreateThrowaway => "POST /Revue/Create -> \"Successfully created!\"",
            Scenario::CreateWithoutRequiredFields => "POST /Revue/Create (empty) -> 400",
            Scenario::EditNonExisting => {
                "PUT /Revue/Edit/123 -> 404, \"There is no such revue!\" if body"
            }
            Scenario::DeleteNonExisting => {
                "DELETE /Revue/Delete/123 -> 404, \"There is no such revue!\" if body"
            }
        }
    }

    /// Run this scenario's body
    pub async fn execute<C: RevueApi + ?Sized>(
        self,
        client: &C,
        ctx: &mut SuiteContext,
    ) -> report::ScenarioResult {
        match self {
            Scenario::CreateWithRequiredFields => {
                scenarios::create_with_required_fields(client, ctx).await
            }
            Scenario::ListAll => scenarios::list_all(client, ctx).await,
            Scenario::EditUsingSharedState => scenarios::edit_using_shared_state(client, ctx).await,
            Scenario::CreateThrowaway => scenarios::create_throwaway(client, ctx).await,
            Scenario::CreateWithoutRequiredFields => {
                scenarios::create_without_required_fields(client, ctx).await
            }
            Scenario::EditNonExisting => scenarios::edit_non_existing(client, ctx).await,
            Scenario::DeleteNonExisting => scenarios::delete_non_existing(client, ctx).await,
        }
    }
}

/// Which scenarios to run and how to react to failures
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Restrict the run to these scenarios; empty means all
    pub only: Vec<Scenario>,
    /// Skip everything after the first failure
    pub fail_fast: bool,
}

impl RunOptions {
    /// Selected scenarios in suite order, regardless of how `only` was given
    pub fn selection(&self) -> Vec<Scenario> {
        Scenario::ALL
            .into_iter()
            .filter(|s| self.only.is_empty() || self.only.contains(s))
            .collect()
    }
}

/// Run the selected scenarios in order against `client`
pub async fn run<C: RevueApi + ?Sized>(client: &C, options: &RunOptions) -> SuiteReport {
    let mut ctx = SuiteContext::default();
    let mut report = SuiteReport::default();
    let mut stop = false;

    for scenario in options.selection() {
        if stop {
            report
                .outcomes
                .push(ScenarioOutcome::skipped(scenario, "skipped after earlier failure"));
            continue;
        }

        log::info!("[{}] {}", scenario.order(), scenario.name());
        let started = Instant::now();
        let result = scenario.execute(client, &mut ctx).await;
        let outcome = ScenarioOutcome::from_result(scenario, result, started.elapsed().as_millis());

        if let Some(ref detail) = outcome.detail {
            log::warn!("[{}] {} failed: {}", outcome.order, outcome.scenario, detail);
            stop = options.fail_fast;
        }
        report.outcomes.push(outcome);
    }

    report.current_revue_id = ctx.current_revue_id;
    report
}
