use mt_portal::{Cli, PortalError, PortalResult, build_gate, logger, run};

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> PortalResult<()> {
    let config = mt_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(dir) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(dir).map_err(|e| {
            PortalError::logger(format!("Failed to create log directory {}: {e}", dir.display()))
        })?;
    }
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting mt v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let gate = build_gate(&cli, &config)?;
    let value = run(cli.command, &gate).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{output}");

    Ok(())
}
