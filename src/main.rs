use clap::Parser;
use std::error::Error;
use subnet_calc::output;
use subnet_calc::processing::{ipv4, ipv6, read_batch_file, run_batch};
use subnet_calc::{init_logging, warn_limitations, Cli, Command, OutputFormat, SubnetError, SubnetResult};

fn describe(e: SubnetError) -> Box<dyn Error> {
    format!("{:?} error: {e}", e.kind()).into()
}

fn emit(input: &str, result: &SubnetResult, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    warn_limitations(result);
    match format {
        OutputFormat::Json => output::print_json(result)?,
        OutputFormat::Terminal => output::print_terminal(result),
        OutputFormat::Csv => output::print_csv(input, result),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let options = cli.options();

    init_logging(cli.log_config.as_deref())?;
    log::info!("#Start main() {:?}", cli.command);
    log::debug!("Options {options:?}, format {:?}", cli.format);

    match &cli.command {
        Command::Ipv4 { address, mask } => {
            let subnet = ipv4::calculate_str(address, mask, &options).map_err(describe)?;
            emit(&format!("{address} {mask}"), &SubnetResult::from(subnet), cli.format)?;
        }
        Command::Ipv6 { address, prefix } => {
            let subnet = ipv6::calculate_str(address, prefix, &options).map_err(describe)?;
            emit(&format!("{address} {prefix}"), &SubnetResult::from(subnet), cli.format)?;
        }
        Command::Batch { file } => {
            let requests = read_batch_file(file)?;
            let outcomes = run_batch(requests, options).await?;
            for result in outcomes.iter().filter_map(|o| o.result.as_ref().ok()) {
                warn_limitations(result);
            }
            match cli.format {
                OutputFormat::Json => output::print_batch_json(&outcomes)?,
                OutputFormat::Terminal => output::print_batch_terminal(&outcomes),
                OutputFormat::Csv => output::print_batch_csv(&outcomes),
            }
        }
    }

    Ok(())
}
