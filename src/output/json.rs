//! JSON output.

use crate::models::SubnetResult;
use crate::processing::BatchOutcome;
use serde_json::json;
use std::error::Error;

pub fn to_json(result: &SubnetResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// One batch outcome as JSON, failures as `{"error": "..."}`.
pub fn outcome_to_json(outcome: &BatchOutcome) -> Result<String, serde_json::Error> {
    match &outcome.result {
        Ok(result) => to_json(result),
        Err(e) => serde_json::to_string(&json!({ "error": e.to_string() })),
    }
}

/// Print a single result object to stdout.
pub fn print_json(result: &SubnetResult) -> Result<(), Box<dyn Error>> {
    println!("{}", to_json(result)?);
    Ok(())
}

/// Print one JSON value per line.
pub fn print_batch_json(outcomes: &[BatchOutcome]) -> Result<(), Box<dyn Error>> {
    for outcome in outcomes {
        println!("{}", outcome_to_json(outcome)?);
    }
    Ok(())
}
