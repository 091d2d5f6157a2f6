//! Verification Orchestrator
//!
//! Resolves everything a run needs up front, then verifies chains
//! concurrently with a bounded degree:
//!
//! ```text
//!   manifest ─▶ preflight (origin, network names, RPC endpoints, reference code)
//!                  │  any ConfigError aborts here, before a chain is contacted
//!                  ▼
//!          ┌── chain task (origin) ──┐
//!          ├── chain task (sat. 1) ──┤  buffered(concurrency), joined in order
//!          └── chain task (sat. n) ──┘
//!                  ▼
//!               Report
//! ```
//!
//! Within a chain, each proxy and the governance suite form separate check
//! groups. A transport error ends only the group it happened in.

use super::bytecode::{compare_full_bytecode, compare_proxy_bytecode, ProxyLayout};
use super::governance::{verify_governance, GovernancePolicy};
use super::report::{ChainReport, CheckOutcome, Report};
use super::slots::verify_slot_address;
use crate::artifacts::ReferenceBytecode;
use crate::config::VerifierConfig;
use crate::errors::{ConfigError, TransportError};
use crate::manifest::{ChainRecord, Manifest, ProxyDeployment, ProxyKind};
use crate::onchain::{ChainClient, ClientFactory, ProxySlot};
use crate::registry::ChainRegistry;
use alloy_primitives::{Address, Bytes, U256};
use futures_util::{stream, StreamExt};
use std::sync::Arc;
use tracing::{info, warn};

/// Locally built code every chain is compared against.
#[derive(Debug, Clone)]
struct References {
    proxy: Bytes,
    token_implementation: Option<Bytes>,
    adapter_implementation: Option<Bytes>,
}

impl References {
    fn implementation(&self, kind: ProxyKind) -> Option<&Bytes> {
        match kind {
            ProxyKind::Token => self.token_implementation.as_ref(),
            ProxyKind::Adapter => self.adapter_implementation.as_ref(),
        }
    }
}

/// A chain that passed preflight.
#[derive(Debug)]
struct ChainPlan<'a> {
    record: &'a ChainRecord,
    network: &'static str,
    endpoint: String,
}

/// Runs every check for every chain of a manifest.
pub struct Orchestrator {
    config: VerifierConfig,
    registry: ChainRegistry,
    clients: Arc<dyn ClientFactory>,
    artifacts: Arc<dyn ReferenceBytecode>,
}

impl Orchestrator {
    pub fn new(
        config: VerifierConfig,
        registry: ChainRegistry,
        clients: Arc<dyn ClientFactory>,
        artifacts: Arc<dyn ReferenceBytecode>,
    ) -> Self {
        Self { config, registry, clients, artifacts }
    }

    /// Verify `manifest`.
    ///
    /// Returns a [`ConfigError`] if the run cannot start; otherwise a report
    /// with the origin chain first, then satellites in manifest order.
    pub async fn run(&self, manifest: &Manifest) -> Result<Report, ConfigError> {
        let plans = self.preflight(manifest)?;
        let references = self.load_references()?;
        let policy = GovernancePolicy {
            required_delay: U256::from(self.config.required_delay_secs),
            owners: &self.config.cohorts,
            deployer: manifest.deployer,
        };

        info!(
            target: "verify",
            chains = plans.len(),
            concurrency = self.config.concurrency,
            "starting verification"
        );

        let chains = stream::iter(plans)
            .map(|plan| self.verify_chain(plan, &references, &policy))
            .buffered(self.config.concurrency)
            .collect::<Vec<_>>()
            .await;

        Ok(Report { chains })
    }

    /// Resolve network names and endpoints of every chain, origin first.
    fn preflight<'a>(&self, manifest: &'a Manifest) -> Result<Vec<ChainPlan<'a>>, ConfigError> {
        manifest
            .verification_order()?
            .into_iter()
            .map(|record| -> Result<ChainPlan<'a>, ConfigError> {
                Ok(ChainPlan {
                    record,
                    network: self.registry.network_name(record.chain_id)?,
                    endpoint: self.registry.rpc_endpoint(record.chain_id)?,
                })
            })
            .collect()
    }

    fn load_references(&self) -> Result<References, ConfigError> {
        let optional = |label: &Option<String>| {
            label.as_deref().map(|label| self.artifacts.load(label)).transpose()
        };
        Ok(References {
            proxy: self.artifacts.load(&self.config.proxy_artifact)?,
            token_implementation: optional(&self.config.token_implementation_artifact)?,
            adapter_implementation: optional(&self.config.adapter_implementation_artifact)?,
        })
    }

    async fn verify_chain(
        &self,
        plan: ChainPlan<'_>,
        references: &References,
        policy: &GovernancePolicy<'_>,
    ) -> ChainReport {
        let record = plan.record;
        let mut report = ChainReport::new(record.chain_id, plan.network, record.is_origin);
        info!(target: "verify", chain_id = record.chain_id, network = plan.network, "verifying chain");

        let client = match self.clients.connect(&plan.endpoint) {
            Ok(client) => client,
            Err(error) => {
                warn!(target: "verify", chain_id = record.chain_id, %error, "cannot connect");
                report.push(CheckOutcome::error("connect", error));
                return report;
            }
        };

        let suite = ChainSuite {
            client: client.as_ref(),
            record,
            references,
            layout: self.config.proxy_variant.layout(),
            policy,
        };
        let limit = self.config.chain_timeout();
        let finished = tokio::time::timeout(limit, suite.run(&mut report)).await;
        if finished.is_err() {
            warn!(target: "verify", chain_id = record.chain_id, ?limit, "chain timed out");
            report.push(CheckOutcome::error(
                "chain suite",
                TransportError::Timeout(format!("{} check suite ({}s)", plan.network, limit.as_secs())),
            ));
        }

        info!(
            target: "verify",
            chain_id = record.chain_id,
            checks = report.checks.len(),
            failures = report.failure_count(),
            "chain verified"
        );
        report
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// Check groups of one chain, sharing one client.
struct ChainSuite<'a> {
    client: &'a dyn ChainClient,
    record: &'a ChainRecord,
    references: &'a References,
    layout: ProxyLayout,
    policy: &'a GovernancePolicy<'a>,
}

impl ChainSuite<'_> {
    async fn run(&self, report: &mut ChainReport) {
        for proxy in self.record.proxies() {
            if let Err(error) = self.verify_proxy(proxy, report).await {
                warn!(
                    target: "verify",
                    chain_id = self.record.chain_id,
                    kind = %proxy.kind,
                    %error,
                    "proxy checks aborted"
                );
            }
        }
        if let Err(error) = verify_governance(self.client, self.record, self.policy, report).await {
            warn!(target: "verify", chain_id = self.record.chain_id, %error, "governance checks aborted");
        }
    }

    /// Bytecode, EIP-1967 slots and implementation code of one proxy.
    async fn verify_proxy(
        &self,
        proxy: &ProxyDeployment,
        report: &mut ChainReport,
    ) -> Result<(), TransportError> {
        let label = format!("{} proxy", proxy.kind);

        let check = format!("{label} bytecode");
        let code = report.fetch(&check, self.client.get_code(proxy.proxy).await)?;
        let verdict = compare_proxy_bytecode(
            &label,
            &code,
            &self.references.proxy,
            proxy.proxy_admin,
            self.layout,
        );
        report.record(check, Ok(verdict))?;

        self.verify_slot(proxy.proxy, ProxySlot::Admin, proxy.proxy_admin, &label, report).await?;

        let Some(implementation) = proxy.implementation else {
            let reason = "no implementation recorded";
            let slot_check = format!("{label} {}", ProxySlot::Implementation.name());
            report.push(CheckOutcome::skipped(slot_check, reason));
            let code_check = format!("{} implementation bytecode", proxy.kind);
            report.push(CheckOutcome::skipped(code_check, reason));
            return Ok(());
        };
        self.verify_slot(proxy.proxy, ProxySlot::Implementation, implementation, &label, report)
            .await?;

        let check = format!("{} implementation bytecode", proxy.kind);
        match self.references.implementation(proxy.kind) {
            Some(reference) => {
                let code = report.fetch(&check, self.client.get_code(implementation).await)?;
                let label = format!("{} implementation", proxy.kind);
                report.record(check, Ok(compare_full_bytecode(&label, &code, reference)))?;
            }
            None => report.push(CheckOutcome::skipped(check, "no reference artifact configured")),
        }
        Ok(())
    }

    async fn verify_slot(
        &self,
        contract: Address,
        slot: ProxySlot,
        expected: Address,
        label: &str,
        report: &mut ChainReport,
    ) -> Result<(), TransportError> {
        let verdict = verify_slot_address(self.client, contract, slot, expected, label).await;
        report.record(format!("{label} {}", slot.name()), verdict)
    }
}
