//! Scenarios command implementation

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::{json, table};
use crate::suite::Scenario;

/// Scenario listing row
#[derive(Debug, Tabled, Serialize)]
struct ScenarioDisplay {
    #[tabled(rename = "#")]
    order: usize,
    #[tabled(rename = "SCENARIO")]
    name: &'static str,
    #[tabled(rename = "CHECKS")]
    summary: &'static str,
}

impl From<Scenario> for ScenarioDisplay {
    fn from(scenario: Scenario) -> Self {
        Self {
            order: scenario.order(),
            name: scenario.name(),
            summary: scenario.summary(),
        }
    }
}

/// List the suite's scenarios in execution order
pub fn list(format: OutputFormat) -> Result<()> {
    let rows: Vec<ScenarioDisplay> = Scenario::ALL.into_iter().map(ScenarioDisplay::from).collect();

    match format {
        OutputFormat::Json => println!("{}", json::format_json(&rows)?),
        OutputFormat::Table => println!("{}", table::format_table(&rows)),
        OutputFormat::Pretty => {
            for row in rows {
                println!("{}. {}\n   {}", row.order, row.name, row.summary);
            }
        }
    }

    Ok(())
}
