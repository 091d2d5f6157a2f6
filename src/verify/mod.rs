//! Deployment verification
//!
//! Pure comparators ([`bytecode`]), chain-reading checks ([`slots`],
//! [`governance`]) and the [`orchestrator`] that runs them per chain and
//! collects every outcome into a [`Report`].
//!
//! A check never fails the run: a deployed state that differs from the
//! manifest is a [`Violation`] value, an unreachable chain is a recorded
//! transport error. Only configuration problems abort.

pub mod bytecode;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod governance;
pub mod orchestrator;
pub mod report;
pub mod slots;
pub mod violation;

pub use bytecode::{compare_full_bytecode, compare_proxy_bytecode, ProxyLayout, ProxyVariant};
pub use governance::{compare_owner_sets, verify_governance, GovernancePolicy};
pub use orchestrator::Orchestrator;
pub use report::{ChainReport, CheckOutcome, Outcome, Report};
pub use slots::verify_slot_address;
pub use violation::Violation;

/// Result of one comparison: `Ok(())` or the violation found.
pub type Verdict = Result<(), Violation>;
