use alloy_primitives::{Address, B256, U256};
use serde::Serialize;
use thiserror::Error;

/// A deployed state that differs from the manifest.
///
/// These are results, not failures of the verifier: each one carries the
/// contract label plus expected and found values so it can be acted on
/// without re-running.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// Deployed code is too short to contain the proxy's admin field
    #[error("{label}: bytecode is {found} bytes, expected at least {required}")]
    BytecodeTooShort { label: String, required: usize, found: usize },

    /// Code before the embedded admin differs from the reference proxy
    #[error("{label}: preamble differs from reference at byte {offset}")]
    PreambleMismatch { label: String, offset: usize, expected: String, found: String },

    /// Code after the embedded admin differs from the reference proxy
    #[error(
        "{label}: suffix differs from reference at byte {offset} (expected {expected_len} bytes, found {found_len})"
    )]
    SuffixMismatch { label: String, offset: usize, expected_len: usize, found_len: usize },

    /// Admin address embedded in proxy bytecode is not the expected proxy admin
    #[error("{label}: embedded admin is {found}, expected {expected}")]
    AdminMismatch { label: String, expected: Address, found: Address },

    /// Implementation code differs from the locally built artifact
    #[error(
        "{label}: bytecode differs from reference at byte {offset} (expected {expected_len} bytes, found {found_len})"
    )]
    BytecodeMismatch { label: String, offset: usize, expected_len: usize, found_len: usize },

    /// Address decoded from a proxy storage slot is not the expected one
    #[error("{label}: slot {slot} holds {found}, expected {expected}")]
    SlotMismatch { label: String, slot: B256, expected: Address, found: Address },

    /// An account lacks a role it must hold
    #[error("{label}: {account} does not hold {role}")]
    RoleMissing { label: String, role: String, account: Address },

    /// Timelock minimum delay is not the required value
    #[error("{label}: min delay is {found}s, expected {expected}s")]
    DelayMismatch { label: String, expected: U256, found: U256 },

    /// Multisig has a different number of owners than its cohort
    #[error("{label}: {found} owners, expected {expected}")]
    OwnerCountMismatch { label: String, expected: usize, found: usize },

    /// Multisig owner membership differs from its cohort
    #[error("{label}: missing owners {missing:?}, unexpected owners {unexpected:?}")]
    OwnerSetMismatch { label: String, missing: Vec<Address>, unexpected: Vec<Address> },

    /// `owner()` is not the expected account
    #[error("{label}: owner is {found}, expected {expected}")]
    OwnershipMismatch { label: String, expected: Address, found: Address },

    /// The deployer still holds an admin role it should have renounced
    #[error("{label}: deployer {account} still holds {role}")]
    StaleAdminRole { label: String, role: String, account: Address },
}

impl Violation {
    /// Contract label the violation was found on.
    pub fn label(&self) -> &str {
        match self {
            Self::BytecodeTooShort { label, .. }
            | Self::PreambleMismatch { label, .. }
            | Self::SuffixMismatch { label, .. }
            | Self::AdminMismatch { label, .. }
            | Self::BytecodeMismatch { label, .. }
            | Self::SlotMismatch { label, .. }
            | Self::RoleMissing { label, .. }
            | Self::DelayMismatch { label, .. }
            | Self::OwnerCountMismatch { label, .. }
            | Self::OwnerSetMismatch { label, .. }
            | Self::OwnershipMismatch { label, .. }
            | Self::StaleAdminRole { label, .. } => label,
        }
    }
}
