//! Run command implementation

use colored::Colorize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::context::RunContext;
use crate::error::{Error, Result};
use crate::output::{json, table};
use crate::suite::{self, RunOptions, Scenario, ScenarioOutcome, Status, SuiteReport};

/// Scenario outcome for table display
#[derive(Tabled)]
struct OutcomeDisplay {
    #[tabled(rename = "#")]
    order: usize,
    #[tabled(rename = "SCENARIO")]
    scenario: &'static str,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "MS")]
    duration_ms: u128,
    #[tabled(rename = "DETAIL")]
    detail: String,
}

impl From<&ScenarioOutcome> for OutcomeDisplay {
    fn from(outcome: &ScenarioOutcome) -> Self {
        Self {
            order: outcome.order,
            scenario: outcome.scenario,
            status: outcome.status.to_string(),
            duration_ms: outcome.duration_ms,
            detail: outcome.detail.clone().unwrap_or_default(),
        }
    }
}

/// Run the ordered suite and report the outcome
pub async fn run(opts: &GlobalOptions, only: Vec<Scenario>, fail_fast: bool) -> Result<()> {
    let ctx = RunContext::new(opts).await?;
    let options = RunOptions { only, fail_fast };
    log::info!(
        "Running {} scenario(s) against {} with {} token",
        options.selection().len(),
        ctx.client.base_url(),
        ctx.token.source
    );

    let report = suite::run(&ctx.client, &options).await;
    // The client is released once, after the last scenario
    drop(ctx.client);

    println!("{}", render(&report, ctx.format)?);

    if report.is_success() {
        Ok(())
    } else {
        Err(Error::SuiteFailed {
            failed: report.failed(),
            total: report.total(),
        })
    }
}

/// Render a report in the requested format
pub fn render(report: &SuiteReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(json::format_json(report)?),
        OutputFormat::Table => {
            let rows: Vec<OutcomeDisplay> =
                report.outcomes.iter().map(OutcomeDisplay::from).collect();
            Ok(table::format_table(&rows))
        }
        OutputFormat::Pretty => Ok(render_pretty(report)),
    }
}

fn render_pretty(report: &SuiteReport) -> String {
    let mut lines = Vec::with_capacity(report.outcomes.len() + 2);

    for outcome in &report.outcomes {
        let marker = match outcome.status {
            Status::Passed => "✓".green(),
            Status::Failed => "✗".red(),
            Status::Skipped => "○".dimmed(),
        };
        let mut line = format!(
            "{} [{}] {} {}",
            marker,
            outcome.order,
            outcome.scenario.bold(),
            format!("({}ms)", outcome.duration_ms).dimmed()
        );
        if let Some(ref detail) = outcome.detail {
            line.push_str(&format!("\n    {}", detail));
        }
        lines.push(line);
    }

    lines.push(String::new());
    let summary = format!(
        "{} passed, {} failed, {} skipped",
        report.passed(),
        report.failed(),
        report.skipped()
    );
    if report.is_success() {
        lines.push(summary.green().to_string());
    } else {
        lines.push(summary.red().to_string());
    }

    lines.join("\n")
}
