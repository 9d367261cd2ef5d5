//! Calculation options and application configuration.
//!
//! [`CalcOptions`] is handed to the engines by the caller. [`Cli`] carries it
//! together with output and logging settings, taken from command line flags
//! or their `SUBNET_CALC_*` environment variables.

use clap::{Parser, Subcommand};
use std::fmt;
use std::str::FromStr;

pub const ENV_USABLE_RANGE: &str = "SUBNET_CALC_USABLE_RANGE";
pub const ENV_IPV6_NETWORK: &str = "SUBNET_CALC_IPV6_NETWORK";
pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";

/// How first/last usable IPv4 addresses are derived.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum UsableRangeMode {
    /// Step only the last octet, no carry into the others.
    #[default]
    OctetLocal,
    /// Step the whole address as a 32-bit integer.
    Carry,
}

/// How the reported IPv6 `Network` field is masked.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Ipv6NetworkMode {
    /// Groups 1-3 copied from the address, AND applied to groups 4-8.
    #[default]
    LegacyPartialAnd,
    /// AND applied to all 128 bits.
    FullMask,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Terminal,
    Csv,
}

/// Options consumed by the engines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct CalcOptions {
    pub usable_range: UsableRangeMode,
    pub ipv6_network: Ipv6NetworkMode,
}

impl FromStr for UsableRangeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "octet" | "octet-local" => Ok(UsableRangeMode::OctetLocal),
            "carry" => Ok(UsableRangeMode::Carry),
            other => Err(format!("unknown usable range mode '{other}' (octet|carry)")),
        }
    }
}

impl fmt::Display for UsableRangeMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UsableRangeMode::OctetLocal => f.write_str("octet"),
            UsableRangeMode::Carry => f.write_str("carry"),
        }
    }
}

impl FromStr for Ipv6NetworkMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" | "legacy_partial_and" => Ok(Ipv6NetworkMode::LegacyPartialAnd),
            "full" => Ok(Ipv6NetworkMode::FullMask),
            other => Err(format!("unknown IPv6 network mode '{other}' (legacy|full)")),
        }
    }
}

impl fmt::Display for Ipv6NetworkMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Ipv6NetworkMode::LegacyPartialAnd => f.write_str("legacy"),
            Ipv6NetworkMode::FullMask => f.write_str("full"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "terminal" | "text" => Ok(OutputFormat::Terminal),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown output format '{other}' (json|terminal|csv)")),
        }
    }
}

/// Command line, each global option falls back to its environment variable
/// (after `.env` is loaded by `main`) and then to its default.
#[derive(Parser, Debug)]
#[command(name = "subnet-calc")]
#[command(about = "Network, broadcast, usable range and host count for IPv4 and IPv6 subnets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Usable IPv4 range: octet (last octet only) or carry (32-bit)
    #[arg(long, env = ENV_USABLE_RANGE, default_value = "octet", global = true)]
    pub usable_range: UsableRangeMode,

    /// IPv6 network field: legacy (groups 4-8 masked) or full
    #[arg(long, env = ENV_IPV6_NETWORK, default_value = "legacy", global = true)]
    pub ipv6_network: Ipv6NetworkMode,

    /// Output format: json, terminal or csv
    #[arg(short, long, env = ENV_FORMAT, default_value = "json", global = true)]
    pub format: OutputFormat,

    /// log4rs config file; without one only errors are logged, to stderr
    #[arg(long, env = ENV_LOG_CONFIG, global = true)]
    pub log_config: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Dotted-decimal address and mask, e.g. 192.168.1.10 255.255.255.0
    Ipv4 { address: String, mask: String },
    /// Colon-hex address and prefix, e.g. 2001:db8::1 /64
    Ipv6 { address: String, prefix: String },
    /// File with one "<address> <mask|prefix>" per line
    Batch { file: String },
}

impl Cli {
    pub fn options(&self) -> CalcOptions {
        CalcOptions {
            usable_range: self.usable_range,
            ipv6_network: self.ipv6_network,
        }
    }
}
