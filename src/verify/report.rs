use super::{Verdict, Violation};
use crate::errors::TransportError;
use serde::Serialize;
use tracing::{debug, warn};

/// Result of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    Fail { violation: Violation },
    Skipped { reason: String },
    Error { error: TransportError },
}

/// A named check and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub check: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl CheckOutcome {
    pub fn pass(check: impl Into<String>) -> Self {
        Self { check: check.into(), outcome: Outcome::Pass }
    }

    pub fn fail(check: impl Into<String>, violation: Violation) -> Self {
        Self { check: check.into(), outcome: Outcome::Fail { violation } }
    }

    pub fn skipped(check: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { check: check.into(), outcome: Outcome::Skipped { reason: reason.into() } }
    }

    pub fn error(check: impl Into<String>, error: TransportError) -> Self {
        Self { check: check.into(), outcome: Outcome::Error { error } }
    }

    /// Violations and transport errors both count as failures.
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, Outcome::Fail { .. } | Outcome::Error { .. })
    }

    pub fn violation(&self) -> Option<&Violation> {
        match &self.outcome {
            Outcome::Fail { violation } => Some(violation),
            _ => None,
        }
    }

    pub fn transport_error(&self) -> Option<&TransportError> {
        match &self.outcome {
            Outcome::Error { error } => Some(error),
            _ => None,
        }
    }
}

/// Ordered check outcomes of one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainReport {
    pub chain_id: u64,
    pub network: String,
    pub is_origin: bool,
    pub checks: Vec<CheckOutcome>,
}

impl ChainReport {
    pub fn new(chain_id: u64, network: impl Into<String>, is_origin: bool) -> Self {
        Self { chain_id, network: network.into(), is_origin, checks: Vec::new() }
    }

    pub fn push(&mut self, outcome: CheckOutcome) {
        self.checks.push(outcome);
    }

    /// Record a check result.
    ///
    /// A transport error is recorded and handed back, so check groups can
    /// stop with `?` once the chain stops answering.
    pub fn record(
        &mut self,
        check: impl Into<String>,
        result: Result<Verdict, TransportError>,
    ) -> Result<(), TransportError> {
        let check = check.into();
        match result {
            Ok(Ok(())) => {
                debug!(target: "verify", chain_id = self.chain_id, %check, "pass");
                self.push(CheckOutcome::pass(check));
            }
            Ok(Err(violation)) => {
                warn!(
                    target: "verify",
                    chain_id = self.chain_id,
                    %check,
                    contract = violation.label(),
                    %violation,
                    "violation"
                );
                self.push(CheckOutcome::fail(check, violation));
            }
            Err(error) => {
                self.push(CheckOutcome::error(check, error.clone()));
                return Err(error);
            }
        }
        Ok(())
    }

    /// Unwrap a read needed by `check`, recording a transport error if it failed.
    pub fn fetch<T>(
        &mut self,
        check: impl Into<String>,
        result: Result<T, TransportError>,
    ) -> Result<T, TransportError> {
        result.map_err(|error| {
            self.push(CheckOutcome::error(check, error.clone()));
            error
        })
    }

    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.checks.iter().filter_map(CheckOutcome::violation)
    }

    pub fn transport_errors(&self) -> impl Iterator<Item = &TransportError> {
        self.checks.iter().filter_map(CheckOutcome::transport_error)
    }

    pub fn failure_count(&self) -> usize {
        self.checks.iter().filter(|c| c.is_failure()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.checks.iter().any(CheckOutcome::is_failure)
    }

    /// Outcome of the first check named `check`.
    pub fn outcome(&self, check: &str) -> Option<&Outcome> {
        self.checks.iter().find(|c| c.check == check).map(|c| &c.outcome)
    }
}

/// Per-chain reports, origin first then satellites in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub chains: Vec<ChainReport>,
}

impl Report {
    pub fn chain(&self, chain_id: u64) -> Option<&ChainReport> {
        self.chains.iter().find(|c| c.chain_id == chain_id)
    }

    pub fn failure_count(&self) -> usize {
        self.chains.iter().map(ChainReport::failure_count).sum()
    }

    /// Whether the process should exit non-zero.
    pub fn has_failures(&self) -> bool {
        self.chains.iter().any(ChainReport::has_failures)
    }
}
