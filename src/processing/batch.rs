//! Batch evaluation of many independent requests.
//!
//! Input holds one `<address> <mask|prefix>` pair per line. Blank lines and
//! lines starting with `#` are skipped. Each request runs on its own blocking
//! task; results come back in input order.

use crate::config::CalcOptions;
use crate::error::SubnetError;
use crate::models::SubnetResult;
use futures::future::join_all;
use std::error::Error;
use std::path::Path;

/// One line of batch input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    /// 1-based line number in the source.
    pub line: usize,
    pub input: String,
}

impl BatchRequest {
    pub fn evaluate(&self, options: &CalcOptions) -> Result<SubnetResult, SubnetError> {
        let fields: Vec<&str> = self.input.split_whitespace().collect();
        match fields.as_slice() {
            [address, mask_or_prefix] => super::calculate(address, mask_or_prefix, options),
            _ => Err(SubnetError::FieldCount {
                input: self.input.clone(),
                count: fields.len(),
            }),
        }
    }
}

/// Outcome of one [`BatchRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub line: usize,
    pub input: String,
    pub result: Result<SubnetResult, SubnetError>,
}

/// Split batch text into requests.
pub fn parse_batch(input: &str) -> Vec<BatchRequest> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, input)| BatchRequest {
            line,
            input: input.to_string(),
        })
        .collect()
}

/// Read and split a batch file.
pub fn read_batch_file(file: &str) -> Result<Vec<BatchRequest>, Box<dyn Error>> {
    if !Path::new(file).exists() {
        return Err(format!("Batch file does not exist: {file}").into());
    }
    log::info!("Reading batch file: {file}");
    let text =
        std::fs::read_to_string(file).map_err(|e| format!("Error reading batch file {file}: {e}"))?;
    let requests = parse_batch(&text);
    log::info!("# Got request count = {}", requests.len());
    Ok(requests)
}

/// Evaluate every request concurrently.
pub async fn run_batch(
    requests: Vec<BatchRequest>,
    options: CalcOptions,
) -> Result<Vec<BatchOutcome>, Box<dyn Error>> {
    log::info!("#Start run_batch() requests={}", requests.len());

    let tasks = requests.into_iter().map(|request| {
        tokio::task::spawn_blocking(move || {
            let result = request.evaluate(&options);
            if let Err(e) = &result {
                log::warn!("line {}: {e}", request.line);
            }
            BatchOutcome {
                line: request.line,
                input: request.input,
                result,
            }
        })
    });

    join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.map_err(|e| Box::<dyn Error>::from(format!("Batch task failed: {e}"))))
        .collect()
}
