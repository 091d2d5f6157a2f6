//! Governance Verifier
//!
//! Who controls each deployment once the deployer steps away:
//!
//! ```text
//!   multisig ──holds all roles──▶ timelock ──owns──▶ proxy admins ──upgrade──▶ proxies
//!      │
//!      ├──holds DEFAULT_ADMIN_ROLE──▶ token      (deployer must not)
//!      └──owns──▶ adapter
//! ```
//!
//! Every step records its own outcome. A violation in one step never hides
//! the others; a transport error ends the suite for the chain.

use super::report::{ChainReport, CheckOutcome};
use super::{Verdict, Violation};
use crate::config::CohortOwners;
use crate::errors::TransportError;
use crate::manifest::ChainRecord;
use crate::onchain::{
    has_role, read_min_delay, read_owner, read_owners, read_role_id, ChainClient, TimelockRole,
};
use alloy_primitives::{Address, U256};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// What the governance wiring of every chain must look like.
#[derive(Debug, Clone, Copy)]
pub struct GovernancePolicy<'a> {
    /// Required timelock `getMinDelay()`
    pub required_delay: U256,
    /// Expected multisig owners per cohort
    pub owners: &'a CohortOwners,
    /// Account that must hold no residual admin role
    pub deployer: Address,
}

/// Compare a multisig's owners with its cohort, ignoring order.
///
/// Returns the count verdict and the membership verdict separately.
pub fn compare_owner_sets(
    label: &str,
    expected: &[Address],
    found: &[Address],
) -> (Verdict, Verdict) {
    let count = if expected.len() == found.len() {
        Ok(())
    } else {
        Err(Violation::OwnerCountMismatch {
            label: label.to_string(),
            expected: expected.len(),
            found: found.len(),
        })
    };

    let expected_set: BTreeSet<Address> = expected.iter().copied().collect();
    let found_set: BTreeSet<Address> = found.iter().copied().collect();
    let membership = if expected_set == found_set {
        Ok(())
    } else {
        Err(Violation::OwnerSetMismatch {
            label: label.to_string(),
            missing: expected_set.difference(&found_set).copied().collect(),
            unexpected: found_set.difference(&expected_set).copied().collect(),
        })
    };

    (count, membership)
}

fn ownership(label: &str, expected: Address, found: Address) -> Verdict {
    if found == expected {
        Ok(())
    } else {
        Err(Violation::OwnershipMismatch { label: label.to_string(), expected, found })
    }
}

/// Run the governance checks for `record`, appending outcomes to `report`.
pub async fn verify_governance(
    client: &dyn ChainClient,
    record: &ChainRecord,
    policy: &GovernancePolicy<'_>,
    report: &mut ChainReport,
) -> Result<(), TransportError> {
    info!(
        target: "verify::governance",
        chain_id = record.chain_id,
        cohort = %record.cohort,
        "verifying governance"
    );

    // Timelock roles held by the multisig
    for role in TimelockRole::ALL {
        let check = format!("timelock {}", role.name());
        let id = report.fetch(&check, read_role_id(client, record.timelock, role).await)?;
        let held = has_role(client, record.timelock, id, record.multisig).await.map(|held| {
            if held {
                Ok(())
            } else {
                Err(Violation::RoleMissing {
                    label: "timelock".to_string(),
                    role: role.name().to_string(),
                    account: record.multisig,
                })
            }
        });
        report.record(check, held)?;
    }

    // Minimum delay
    let delay = read_min_delay(client, record.timelock).await.map(|found| {
        if found == policy.required_delay {
            Ok(())
        } else {
            Err(Violation::DelayMismatch {
                label: "timelock".to_string(),
                expected: policy.required_delay,
                found,
            })
        }
    });
    report.record("timelock min delay", delay)?;

    // Multisig owners
    let found = report.fetch("multisig owners", read_owners(client, record.multisig).await)?;
    let expected = policy.owners.for_cohort(record.cohort);
    let (count, membership) = compare_owner_sets("multisig", expected, &found);
    debug!(
        target: "verify::governance",
        expected = expected.len(),
        found = found.len(),
        "multisig owners"
    );
    report.record("multisig owner count", Ok(count))?;
    report.record("multisig owner set", Ok(membership))?;

    // Proxy admins owned by the timelock
    for proxy in record.proxies() {
        let check = format!("{} proxy admin owner", proxy.kind);
        if record.deployer_owned_admin == Some(proxy.kind) {
            report.push(CheckOutcome::skipped(check, "proxy admin is deployer-owned"));
            continue;
        }
        let label = format!("{} proxy admin", proxy.kind);
        let owner = read_owner(client, proxy.proxy_admin).await;
        report.record(check, owner.map(|found| ownership(&label, record.timelock, found)))?;
    }

    // Token admin role moved from the deployer to the multisig
    if let Some(token) = record.token.as_ref().filter(|_| !record.is_origin) {
        let role = TimelockRole::DefaultAdmin;
        let check = format!("token {}", role.name());
        let id = report.fetch(&check, read_role_id(client, token.proxy, role).await)?;
        let held = has_role(client, token.proxy, id, record.multisig).await.map(|held| {
            if held {
                Ok(())
            } else {
                Err(Violation::RoleMissing {
                    label: "token".to_string(),
                    role: role.name().to_string(),
                    account: record.multisig,
                })
            }
        });
        report.record(check, held)?;

        let check = format!("token {} revoked from deployer", role.name());
        if record.skip_admin_revocation_check {
            report.push(CheckOutcome::skipped(check, "revocation check disabled for this chain"));
        } else {
            let stale = has_role(client, token.proxy, id, policy.deployer).await.map(|held| {
                if held {
                    Err(Violation::StaleAdminRole {
                        label: "token".to_string(),
                        role: role.name().to_string(),
                        account: policy.deployer,
                    })
                } else {
                    Ok(())
                }
            });
            report.record(check, stale)?;
        }
    }

    // Adapter owned by the multisig
    let owner = read_owner(client, record.adapter.proxy).await;
    report.record("adapter owner", owner.map(|found| ownership("adapter", record.multisig, found)))?;

    Ok(())
}
