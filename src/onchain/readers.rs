use super::helpers::{
    decode_address_array_return, decode_address_return, decode_bool_return, decode_u256_return,
    encode_address, encode_call, word_at, AbiDecodeError,
};
use super::selectors;
use super::ChainClient;
use crate::errors::TransportError;
use alloy_primitives::{Address, B256, U256};

/// The four TimelockController roles the governance multisig must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimelockRole {
    DefaultAdmin,
    Executor,
    Proposer,
    Canceller,
}

impl TimelockRole {
    /// All roles in the order they are verified.
    pub const ALL: [Self; 4] = [Self::DefaultAdmin, Self::Executor, Self::Proposer, Self::Canceller];

    /// Getter that returns the role id on the contract.
    pub fn getter(self) -> [u8; 4] {
        match self {
            Self::DefaultAdmin => selectors::default_admin_role(),
            Self::Executor => selectors::executor_role(),
            Self::Proposer => selectors::proposer_role(),
            Self::Canceller => selectors::canceller_role(),
        }
    }

    /// Solidity constant name, used in labels and diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::DefaultAdmin => "DEFAULT_ADMIN_ROLE",
            Self::Executor => "EXECUTOR_ROLE",
            Self::Proposer => "PROPOSER_ROLE",
            Self::Canceller => "CANCELLER_ROLE",
        }
    }
}

fn decode_err(call: &str) -> impl FnOnce(AbiDecodeError) -> TransportError + '_ {
    move |e| TransportError::Decode { call: call.to_string(), reason: e.to_string() }
}

/// Read a role id (`bytes32`) from an AccessControl contract.
pub async fn read_role_id(
    client: &dyn ChainClient,
    contract: Address,
    role: TimelockRole,
) -> Result<B256, TransportError> {
    let ret = client.call(contract, encode_call(role.getter(), &[])).await?;
    word_at(&ret, 0).map_err(decode_err(role.name()))
}

/// `hasRole(role, account)` on an AccessControl contract.
pub async fn has_role(
    client: &dyn ChainClient,
    contract: Address,
    role: B256,
    account: Address,
) -> Result<bool, TransportError> {
    let data = encode_call(selectors::has_role(), &[role, encode_address(account)]);
    let ret = client.call(contract, data).await?;
    decode_bool_return(&ret).map_err(decode_err("hasRole"))
}

/// `getMinDelay()` on a TimelockController.
pub async fn read_min_delay(
    client: &dyn ChainClient,
    timelock: Address,
) -> Result<U256, TransportError> {
    let ret = client.call(timelock, encode_call(selectors::get_min_delay(), &[])).await?;
    decode_u256_return(&ret).map_err(decode_err("getMinDelay"))
}

/// `getOwners()` on a Safe multisig.
pub async fn read_owners(
    client: &dyn ChainClient,
    multisig: Address,
) -> Result<Vec<Address>, TransportError> {
    let ret = client.call(multisig, encode_call(selectors::get_owners(), &[])).await?;
    decode_address_array_return(&ret).map_err(decode_err("getOwners"))
}

/// `owner()` on an Ownable contract.
pub async fn read_owner(
    client: &dyn ChainClient,
    contract: Address,
) -> Result<Address, TransportError> {
    let ret = client.call(contract, encode_call(selectors::owner(), &[])).await?;
    decode_address_return(&ret).map_err(decode_err("owner"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onchain::helpers::{encode_address_array, encode_bool, encode_u64};
    use crate::onchain::testing::MockChainClient;
    use alloy_primitives::{address, b256, Bytes};

    const TIMELOCK: Address = address!("00000000000000000000000000000000714E4C00");
    const MULTISIG: Address = address!("Cb343bF07E72548349f506593336b6CB698Ad6dA");

    #[test]
    fn test_role_getters_differ() {
        let getters: Vec<_> = TimelockRole::ALL.iter().map(|r| r.getter()).collect();
        for i in 0..getters.len() {
            for j in (i + 1)..getters.len() {
                assert_ne!(getters[i], getters[j], "Getters {} and {} should differ", i, j);
            }
        }
    }

    #[tokio::test]
    async fn test_read_role_id_and_has_role() {
        let role = b256!("d8aa0f3194971a2a116679f7c2090f6939c8d4e01a2a8d7e41d55e5351469e63");
        let mock = MockChainClient::new()
            .with_call(TIMELOCK, encode_call(TimelockRole::Executor.getter(), &[]), role)
            .with_call(
                TIMELOCK,
                encode_call(selectors::has_role(), &[role, encode_address(MULTISIG)]),
                encode_bool(true),
            );

        let id = read_role_id(&mock, TIMELOCK, TimelockRole::Executor).await.unwrap();
        assert_eq!(id, role);
        assert!(has_role(&mock, TIMELOCK, id, MULTISIG).await.unwrap());
    }

    #[tokio::test]
    async fn test_read_min_delay() {
        let mock = MockChainClient::new().with_call(
            TIMELOCK,
            encode_call(selectors::get_min_delay(), &[]),
            encode_u64(86_400),
        );
        assert_eq!(read_min_delay(&mock, TIMELOCK).await.unwrap(), U256::from(86_400u64));
    }

    #[tokio::test]
    async fn test_read_owners_and_owner() {
        let owners = vec![MULTISIG, TIMELOCK];
        let mock = MockChainClient::new()
            .with_call(MULTISIG, encode_call(selectors::get_owners(), &[]), encode_address_array(&owners))
            .with_call(TIMELOCK, encode_call(selectors::owner(), &[]), encode_address(MULTISIG));

        assert_eq!(read_owners(&mock, MULTISIG).await.unwrap(), owners);
        assert_eq!(read_owner(&mock, TIMELOCK).await.unwrap(), MULTISIG);
    }

    #[tokio::test]
    async fn test_short_return_is_decode_error() {
        let mock = MockChainClient::new().with_call(
            TIMELOCK,
            encode_call(selectors::owner(), &[]),
            Bytes::from_static(&[0u8; 8]),
        );
        let err = read_owner(&mock, TIMELOCK).await.unwrap_err();
        assert!(matches!(err, TransportError::Decode { ref call, .. } if call == "owner"));
    }

    #[tokio::test]
    async fn test_unknown_call_is_transport_error() {
        let mock = MockChainClient::new();
        let err = read_min_delay(&mock, TIMELOCK).await.unwrap_err();
        assert!(matches!(err, TransportError::Request { .. }));
    }
}
