/*
[INPUT]:  CLI arguments, optional YAML configuration file, environment
[OUTPUT]: One executed operator command (or an interactive session) and an exit code
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or exit codes
*/

use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing::{error, info};

use binance_futures_bot::{AppConfig, CredentialError, logging};

mod cli;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Cli::parse();

    let config = match AppConfig::load(args.config.as_deref()) {
        Ok(config) => config.with_overrides(args.log_dir.clone(), args.log_level.clone()),
        Err(err) => {
            eprintln!("{} {err:#}", style("Error:").red().bold());
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match logging::init(&config.logging) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("{} {err:#}", style("Error:").red().bold());
            return ExitCode::FAILURE;
        }
    };

    info!(base_url = %config.base_url, "starting trading bot");

    match cli::run(args, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            if err.downcast_ref::<CredentialError>().is_some() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
