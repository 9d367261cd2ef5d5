//! Terminal output utilities.
//!
//! Provides formatting helpers and colored, human readable result blocks.

use crate::models::{Ipv4Subnet, Ipv6Subnet, SubnetResult};
use crate::processing::BatchOutcome;
use colored::Colorize;
use itertools::Itertools;

const LABEL_WIDTH: usize = 20;

/// Format a value as a quoted, right-aligned field.
///
/// Double quotes inside the value are doubled, so the field stays valid CSV.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string().replace('"', "\"\"");
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn line<T: std::fmt::Display>(label: &str, value: T) -> String {
    let label = format!("{label}:");
    format!(
        "  {label:<width$} {value}",
        label = label.bold(),
        width = LABEL_WIDTH
    )
}

fn render_ipv4(subnet: &Ipv4Subnet) -> String {
    let mut lines = vec![
        format!(
            "{} {} {} ({})",
            "IPv4".on_blue(),
            subnet.address,
            subnet.mask,
            subnet.class
        ),
        line("Network Address", subnet.network.to_string().green()),
        line("Broadcast Address", subnet.broadcast.to_string().green()),
        line("First Usable IP", subnet.first_usable),
        line("Last Usable IP", subnet.last_usable),
        line("Total Hosts", subnet.total_hosts),
        line("CIDR Notation", &subnet.cidr),
        line("Address bits", subnet.address.to_binary().iter().join(".")),
        line("Mask bits", subnet.mask.to_binary().iter().join(".")),
    ];
    lines.extend(
        subnet
            .limitations
            .iter()
            .map(|limitation| line("Note", limitation.to_string().yellow())),
    );
    lines.join("\n")
}

fn render_ipv6(subnet: &Ipv6Subnet) -> String {
    let mut lines = vec![
        format!("{} {} {}", "IPv6".on_blue(), subnet.address, subnet.prefix),
        line("Network", subnet.network.to_string().green()),
        line("Address Range Start", subnet.range_start),
        line("Address Range End", subnet.range_end),
        line("Total Hosts", &subnet.total_hosts),
        line("Mask", subnet.mask),
    ];
    lines.extend(
        subnet
            .limitations
            .iter()
            .map(|limitation| line("Note", limitation.to_string().yellow())),
    );
    lines.join("\n")
}

/// Human readable block for one result.
pub fn render(result: &SubnetResult) -> String {
    match result {
        SubnetResult::V4(subnet) => render_ipv4(subnet),
        SubnetResult::V6(subnet) => render_ipv6(subnet),
    }
}

pub fn print_terminal(result: &SubnetResult) {
    println!("{}", render(result));
}

pub fn print_batch_terminal(outcomes: &[BatchOutcome]) {
    for outcome in outcomes {
        match &outcome.result {
            Ok(result) => println!("{}\n", render(result)),
            Err(e) => println!(
                "{} line {}: '{}' {}\n",
                "ERROR".on_red(),
                outcome.line,
                outcome.input,
                e
            ),
        }
    }
}
