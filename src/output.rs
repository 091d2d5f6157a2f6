//! Colored console output for the deployment verifier.
//!
//! Color scheme: blue+bold headers, cyan values, green passes, red
//! failures and errors, yellow skips, dimmed secondary text.

use crate::errors::ConfigError;
use crate::verify::{ChainReport, CheckOutcome, Outcome, Report};
use colored::Colorize;
use std::path::Path;
use std::time::Duration;

// ── Helpers ────────────────────────────────────────────────────────

/// Format an elapsed run time.
///
/// - Sub-second values → `"500ms"`
/// - Integer seconds → `"12s"`
/// - Fractional seconds → `"1.5s"`
pub fn format_elapsed(d: Duration) -> String {
    let ms = d.as_millis();
    if ms < 1000 {
        format!("{ms}ms")
    } else if ms % 1000 == 0 {
        format!("{}s", d.as_secs())
    } else {
        format!("{:.1}s", d.as_secs_f64())
    }
}

/// One report line: status tag, check name and, for non-passing checks, the detail.
pub fn format_outcome(outcome: &CheckOutcome) -> String {
    match &outcome.outcome {
        Outcome::Pass => format!("  {}   {}", "OK".green().bold(), outcome.check),
        Outcome::Fail { violation } => format!(
            "  {} {}\n         {}",
            "FAIL".red().bold(),
            outcome.check,
            violation.to_string().red()
        ),
        Outcome::Skipped { reason } => format!(
            "  {} {} {}",
            "SKIP".yellow().bold(),
            outcome.check,
            format!("({reason})").dimmed()
        ),
        Outcome::Error { error } => format!(
            "  {}  {}\n         {}",
            "ERR".red().bold(),
            outcome.check,
            error.to_string().yellow()
        ),
    }
}

// ── Banner ─────────────────────────────────────────────────────────

/// Print the startup banner.
pub fn print_banner(manifest: &Path, chains: usize, artifacts: &Path) {
    println!();
    println!("{}", "=== Deployment Verifier ===".blue().bold());
    println!("  Manifest:  {}", manifest.display().to_string().cyan());
    println!("  Chains:    {}", chains.to_string().cyan());
    println!("  Artifacts: {}", artifacts.display().to_string().cyan());
}

// ── Report ─────────────────────────────────────────────────────────

/// Print every check of one chain under a header.
pub fn print_chain_report(chain: &ChainReport) {
    println!();
    let role = if chain.is_origin { "origin" } else { "satellite" };
    println!(
        "{} {} {}",
        chain.network.blue().bold(),
        format!("(chain {})", chain.chain_id).dimmed(),
        format!("[{role}]").dimmed()
    );
    for outcome in &chain.checks {
        println!("{}", format_outcome(outcome));
    }
}

/// Print all chains followed by the summary.
pub fn print_report(report: &Report, elapsed: Duration) {
    for chain in &report.chains {
        print_chain_report(chain);
    }
    print_summary(report, elapsed);
}

/// Print the pass/fail summary line.
pub fn print_summary(report: &Report, elapsed: Duration) {
    let checks: usize = report.chains.iter().map(|c| c.checks.len()).sum();
    let failing: Vec<&str> = report
        .chains
        .iter()
        .filter(|c| c.has_failures())
        .map(|c| c.network.as_str())
        .collect();

    println!();
    if failing.is_empty() {
        println!(
            "{} {} checks on {} chains passed in {}",
            "PASSED".green().bold(),
            checks.to_string().cyan(),
            report.chains.len().to_string().cyan(),
            format_elapsed(elapsed).cyan()
        );
    } else {
        println!(
            "{} {} of {} checks failed in {}",
            "FAILED".red().bold(),
            report.failure_count().to_string().red(),
            checks.to_string().cyan(),
            format_elapsed(elapsed).cyan()
        );
        println!("  {} {}", "Chains:".dimmed(), failing.join(", ").red());
    }
}

/// Print a configuration error that stopped the run.
pub fn print_config_error(error: &ConfigError) {
    eprintln!("{} {}", "ERROR:".red().bold(), error);
    eprintln!("  {}", "No chain was checked.".dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TransportError;
    use crate::verify::Violation;
    use alloy_primitives::Address;

    #[test]
    fn test_format_elapsed_sub_second() {
        assert_eq!(format_elapsed(Duration::from_millis(500)), "500ms");
    }

    #[test]
    fn test_format_elapsed_whole_seconds() {
        assert_eq!(format_elapsed(Duration::from_secs(12)), "12s");
    }

    #[test]
    fn test_format_elapsed_fractional_seconds() {
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.5s");
    }

    #[test]
    fn test_format_outcome_tags() {
        let pass = format_outcome(&CheckOutcome::pass("adapter owner"));
        assert!(pass.contains("OK") && pass.contains("adapter owner"));

        let skipped = format_outcome(&CheckOutcome::skipped("token proxy admin owner", "deployer-owned"));
        assert!(skipped.contains("SKIP") && skipped.contains("deployer-owned"));

        let err = format_outcome(&CheckOutcome::error(
            "token proxy bytecode",
            TransportError::Timeout("eth_getCode".to_string()),
        ));
        assert!(err.contains("ERR") && err.contains("eth_getCode timed out"));
    }

    #[test]
    fn test_format_outcome_shows_violation_detail() {
        let line = format_outcome(&CheckOutcome::fail(
            "adapter owner",
            Violation::OwnershipMismatch {
                label: "adapter".to_string(),
                expected: Address::ZERO,
                found: Address::with_last_byte(1),
            },
        ));
        assert!(line.contains("FAIL"));
        assert!(line.contains("adapter: owner is 0x0000000000000000000000000000000000000001"));
    }
}
