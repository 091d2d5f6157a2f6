/// EIP-1967 proxy storage layout.
///
/// Both keys are `keccak256("eip1967.proxy.<name>") - 1` and are fixed by the
/// standard, so they are embedded rather than derived.
pub mod eip1967_slots {
    use alloy_primitives::{b256, B256};

    /// Admin slot: `keccak256("eip1967.proxy.admin") - 1`
    pub const ADMIN: B256 =
        b256!("b53127684a568b3173ae13b9f8a6016e243e63b6e8ee1178d6a717850b5d6103");
    /// Implementation slot: `keccak256("eip1967.proxy.implementation") - 1`
    pub const IMPLEMENTATION: B256 =
        b256!("360894a13ba1a3210667c828492db98dca3e2076cc3735a920a3ca505d382bbc");
}

/// Which well-known proxy slot a check reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxySlot {
    /// EIP-1967 admin slot
    Admin,
    /// EIP-1967 implementation slot
    Implementation,
}

impl ProxySlot {
    /// The 32-byte storage key for this slot.
    pub const fn key(self) -> alloy_primitives::B256 {
        match self {
            Self::Admin => eip1967_slots::ADMIN,
            Self::Implementation => eip1967_slots::IMPLEMENTATION,
        }
    }

    /// Short name used in check labels.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Admin => "admin slot",
            Self::Implementation => "implementation slot",
        }
    }
}
