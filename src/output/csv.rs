//! CSV output formatting for batch and single results.

use crate::models::SubnetResult;
use crate::processing::BatchOutcome;

use super::terminal::format_field;

const HEADER: &str = r#"  "line",                            "input",         "network",                                   "first",                                    "last",        "hosts",  "cidr", "error""#;

/// Header plus one row per outcome.
pub fn batch_csv_rows(outcomes: &[BatchOutcome]) -> Vec<String> {
    let mut rows = Vec::with_capacity(outcomes.len() + 1);
    rows.push(HEADER.to_string());
    rows.extend(outcomes.iter().map(csv_row));
    rows
}

/// Header plus the row of a single calculation, numbered as line 1.
pub fn result_csv_rows(input: &str, result: &SubnetResult) -> Vec<String> {
    batch_csv_rows(&[BatchOutcome {
        line: 1,
        input: input.to_string(),
        result: Ok(result.clone()),
    }])
}

/// Print a single result as CSV to stdout.
pub fn print_csv(input: &str, result: &SubnetResult) {
    for row in result_csv_rows(input, result) {
        println!("{row}");
    }
}

/// Print batch outcomes as CSV to stdout.
pub fn print_batch_csv(outcomes: &[BatchOutcome]) {
    log::info!("#Start print_batch_csv() rows={}", outcomes.len());
    for row in batch_csv_rows(outcomes) {
        println!("{row}");
    }
}

fn csv_row(outcome: &BatchOutcome) -> String {
    let (network, first, last, hosts, cidr, error) = match &outcome.result {
        Ok(SubnetResult::V4(subnet)) => (
            subnet.network.to_string(),
            subnet.first_usable.to_string(),
            subnet.last_usable.to_string(),
            subnet.total_hosts.to_string(),
            subnet.cidr.clone(),
            String::new(),
        ),
        Ok(SubnetResult::V6(subnet)) => (
            subnet.network.to_string(),
            subnet.range_start.to_string(),
            subnet.range_end.to_string(),
            subnet.total_hosts.to_string(),
            subnet.prefix.to_string(),
            String::new(),
        ),
        Err(e) => (
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            e.to_string(),
        ),
    };

    format!(
        "{line},{input},{network},{first},{last},{hosts},{cidr},{error}",
        line = format_field(outcome.line, 8),
        input = format_field(&outcome.input, 35),
        network = format_field(network, 41),
        first = format_field(first, 41),
        last = format_field(last, 41),
        hosts = format_field(hosts, 14),
        cidr = format_field(cidr, 7),
        error = format_field(error, 0),
    )
}
