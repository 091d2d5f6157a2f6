//! Bytecode Comparator
//!
//! Proxies built with an immutable admin embed that address inside their
//! runtime code, so two deployments of the same proxy only differ in that
//! one 20-byte field. The comparator splits both codes around the field:
//!
//! ```text
//!   [ preamble (admin_offset bytes) ][ admin (20 bytes) ][ suffix ... ]
//! ```
//!
//! Preamble and suffix must equal the locally built proxy byte for byte and
//! the admin must be the expected proxy admin. Implementation contracts have
//! no such field and are compared in full.

use super::{Verdict, Violation};
use crate::constants::ADDRESS_LENGTH;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Proxy implementations with a known immutable layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProxyVariant {
    /// OpenZeppelin v5 `TransparentUpgradeableProxy`: the admin is a
    /// `PUSH32` immutable right after the 15-byte dispatch prologue.
    TransparentUpgradeableProxy,
}

/// Where the embedded admin lives in a proxy's runtime code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyLayout {
    /// Byte offset of the 20-byte admin address
    pub admin_offset: usize,
}

impl ProxyVariant {
    pub const fn layout(self) -> ProxyLayout {
        match self {
            // 15-byte prologue, PUSH32 opcode, 12 zero bytes of left padding
            Self::TransparentUpgradeableProxy => ProxyLayout { admin_offset: 28 },
        }
    }

    /// Default artifact name of the variant in a Foundry `out/` directory.
    pub const fn artifact(self) -> &'static str {
        match self {
            Self::TransparentUpgradeableProxy => "TransparentUpgradeableProxy",
        }
    }
}

/// Proxy runtime code split around the embedded admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BytecodeParts<'a> {
    pub preamble: &'a [u8],
    pub owner: Address,
    pub suffix: &'a [u8],
}

impl ProxyLayout {
    /// Minimum code length that can contain the admin field.
    pub const fn min_len(self) -> usize {
        self.admin_offset + ADDRESS_LENGTH
    }

    /// Split `code`, or `None` if it is too short to hold the admin field.
    pub fn split(self, code: &[u8]) -> Option<BytecodeParts<'_>> {
        if code.len() < self.min_len() {
            return None;
        }
        let (preamble, rest) = code.split_at(self.admin_offset);
        let (owner, suffix) = rest.split_at(ADDRESS_LENGTH);
        Some(BytecodeParts { preamble, owner: Address::from_slice(owner), suffix })
    }
}

fn first_difference(a: &[u8], b: &[u8]) -> Option<usize> {
    if a == b {
        return None;
    }
    Some(a.iter().zip(b).position(|(x, y)| x != y).unwrap_or_else(|| a.len().min(b.len())))
}

/// Compare deployed proxy code against the reference proxy.
///
/// Checks, in order: length, preamble, suffix, embedded admin. The first
/// difference found is returned.
pub fn compare_proxy_bytecode(
    label: &str,
    on_chain: &[u8],
    reference: &[u8],
    expected_admin: Address,
    layout: ProxyLayout,
) -> Verdict {
    let too_short = |found: usize| Violation::BytecodeTooShort {
        label: label.to_string(),
        required: layout.min_len(),
        found,
    };
    let deployed = layout.split(on_chain).ok_or_else(|| too_short(on_chain.len()))?;
    let local = layout.split(reference).ok_or_else(|| too_short(reference.len()))?;

    if let Some(offset) = first_difference(local.preamble, deployed.preamble) {
        return Err(Violation::PreambleMismatch {
            label: label.to_string(),
            offset,
            expected: hex::encode(local.preamble),
            found: hex::encode(deployed.preamble),
        });
    }

    if let Some(offset) = first_difference(local.suffix, deployed.suffix) {
        return Err(Violation::SuffixMismatch {
            label: label.to_string(),
            offset: layout.min_len() + offset,
            expected_len: local.suffix.len(),
            found_len: deployed.suffix.len(),
        });
    }

    if deployed.owner != expected_admin {
        return Err(Violation::AdminMismatch {
            label: label.to_string(),
            expected: expected_admin,
            found: deployed.owner,
        });
    }

    Ok(())
}

/// Require deployed code to equal the reference exactly.
pub fn compare_full_bytecode(label: &str, on_chain: &[u8], reference: &[u8]) -> Verdict {
    match first_difference(reference, on_chain) {
        None => Ok(()),
        Some(offset) => Err(Violation::BytecodeMismatch {
            label: label.to_string(),
            offset,
            expected_len: reference.len(),
            found_len: on_chain.len(),
        }),
    }
}
