use crate::constants::DEFAULT_ARTIFACTS_DIR;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the deployment verifier
#[derive(Parser, Debug)]
#[command(
    name = "deploy-verifier",
    about = "Verify a multi-chain token and bridge-adapter deployment against its manifest"
)]
pub struct Cli {
    /// Deployment manifest (JSON) describing the expected state of every chain.
    #[arg(long, env = "DEPLOY_MANIFEST")]
    pub manifest: PathBuf,

    /// Verifier configuration file (JSON). Every field is optional;
    /// omitted values use the built-in defaults.
    #[arg(long, env = "VERIFIER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Foundry build output directory holding the reference artifacts.
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,

    /// Number of chains verified at the same time. Overrides the config file.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub concurrency: Option<u64>,

    /// Print the report as JSON on stdout instead of colored text.
    #[arg(long)]
    pub json: bool,

    /// Enable structured JSON logging instead of human-readable output.
    ///
    /// Logs go to stderr either way; filter them with `RUST_LOG`.
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["deploy-verifier", "--manifest", "deployments.json"]).unwrap();
        assert_eq!(cli.manifest, PathBuf::from("deployments.json"));
        assert_eq!(cli.artifacts, PathBuf::from(DEFAULT_ARTIFACTS_DIR));
        assert!(cli.concurrency.is_none());
        assert!(!cli.json);
        assert!(!cli.log_json);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "deploy-verifier",
            "--manifest",
            "m.json",
            "--config",
            "verifier.json",
            "--artifacts",
            "build/out",
            "--concurrency",
            "2",
            "--json",
            "--log-json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("verifier.json")));
        assert_eq!(cli.artifacts, PathBuf::from("build/out"));
        assert_eq!(cli.concurrency, Some(2));
        assert!(cli.json && cli.log_json);
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let result =
            Cli::try_parse_from(["deploy-verifier", "--manifest", "m.json", "--concurrency", "0"]);
        assert!(result.is_err());
    }
}
