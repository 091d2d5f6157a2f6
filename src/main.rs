use deploy_verifier::artifacts::FoundryArtifacts;
use deploy_verifier::cli::Cli;
use deploy_verifier::config::VerifierConfig;
use deploy_verifier::errors::ConfigError;
use deploy_verifier::manifest::read_manifest;
use deploy_verifier::onchain::JsonRpcClientFactory;
use deploy_verifier::registry::ChainRegistry;
use deploy_verifier::verify::Orchestrator;
use deploy_verifier::{logging, output};

use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Exit status when the run could not start.
const CONFIG_ERROR_EXIT: u8 = 2;

/// Main entry point for the verifier
#[tokio::main]
async fn main() -> eyre::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.log_json);

    run(cli).await.or_else(|error| match error.downcast_ref::<ConfigError>() {
        Some(config_error) => {
            output::print_config_error(config_error);
            Ok(ExitCode::from(CONFIG_ERROR_EXIT))
        }
        None => Err(error),
    })
}

async fn run(cli: Cli) -> eyre::Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => VerifierConfig::load(path)?,
        None => VerifierConfig::default(),
    };
    if let Some(concurrency) = cli.concurrency {
        config.concurrency = usize::try_from(concurrency)?;
    }

    let manifest = read_manifest(&cli.manifest, &config)?;
    if !cli.json {
        output::print_banner(&cli.manifest, manifest.chains.len(), &cli.artifacts);
    }

    let rpc_timeout = config.rpc_timeout();
    let orchestrator = Orchestrator::new(
        config,
        ChainRegistry::from_env(),
        Arc::new(JsonRpcClientFactory::new(rpc_timeout)),
        Arc::new(FoundryArtifacts::new(cli.artifacts.clone())),
    );

    let started = Instant::now();
    let report = orchestrator.run(&manifest).await?;
    let elapsed = started.elapsed();
    info!(chains = report.chains.len(), failures = report.failure_count(), ?elapsed, "run complete");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_report(&report, elapsed);
    }

    Ok(if report.has_failures() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
