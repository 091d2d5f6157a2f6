//! Deployments and chain states shared by the verification tests.

use crate::config::CohortOwners;
use crate::manifest::{ChainRecord, Cohort, Manifest, ProxyDeployment, ProxyKind};
use crate::onchain::helpers::{encode_address_array, encode_bool, encode_call, encode_u64};
use crate::onchain::testing::MockChainClient;
use crate::onchain::{encode_address, selectors, ProxySlot, TimelockRole};
use alloy_primitives::{address, keccak256, Address, B256};

pub(crate) const DEPLOYER: Address = address!("09D4214C03D01F49544C0448DBE3A27f768F2b34");

pub(crate) const TOKEN_IMPLEMENTATION_CODE: &[u8] = &[0x60, 0x80, 0x60, 0x40, 0x52, 0x01, 0x01];
pub(crate) const ADAPTER_IMPLEMENTATION_CODE: &[u8] = &[0x60, 0x80, 0x60, 0x40, 0x52, 0x02, 0x02];

/// TransparentUpgradeableProxy runtime code with `admin` embedded.
pub(crate) fn proxy_code(admin: Address) -> Vec<u8> {
    let mut code = hex::decode("608060405261000c61000e565b005b7f000000000000000000000000").unwrap();
    code.extend_from_slice(admin.as_slice());
    code.extend_from_slice(&hex::decode("3373ffffffffffffffffffffffffffffffffffffffff1603").unwrap());
    code
}

/// Role id as the OpenZeppelin contracts define it.
pub(crate) fn role_id(role: TimelockRole) -> B256 {
    match role {
        TimelockRole::DefaultAdmin => B256::ZERO,
        other => keccak256(other.name()),
    }
}

/// Distinct address per chain and contract slot `n`.
pub(crate) fn contract(chain_id: u64, n: u8) -> Address {
    let mut bytes = [0u8; 20];
    bytes[0] = n;
    bytes[12..].copy_from_slice(&chain_id.to_be_bytes());
    Address::from(bytes)
}

fn proxy(kind: ProxyKind, chain_id: u64, base: u8, with_implementation: bool) -> ProxyDeployment {
    ProxyDeployment {
        kind,
        proxy: contract(chain_id, base),
        proxy_admin: contract(chain_id, base + 1),
        implementation: with_implementation.then(|| contract(chain_id, base + 2)),
    }
}

pub(crate) fn satellite(chain_id: u64) -> ChainRecord {
    ChainRecord {
        chain_id,
        is_origin: false,
        token: Some(proxy(ProxyKind::Token, chain_id, 1, true)),
        adapter: proxy(ProxyKind::Adapter, chain_id, 4, true),
        timelock: contract(chain_id, 7),
        multisig: contract(chain_id, 8),
        cohort: Cohort::Batch1,
        skip_admin_revocation_check: false,
        deployer_owned_admin: None,
    }
}

pub(crate) fn origin(chain_id: u64) -> ChainRecord {
    ChainRecord {
        is_origin: true,
        token: None,
        adapter: proxy(ProxyKind::Adapter, chain_id, 4, false),
        cohort: Cohort::Batch2,
        ..satellite(chain_id)
    }
}

pub(crate) fn manifest(chains: Vec<ChainRecord>) -> Manifest {
    Manifest::new(DEPLOYER, chains)
}

/// A chain whose deployed state matches `record` in every check.
pub(crate) fn healthy_chain(record: &ChainRecord, owners: &CohortOwners) -> MockChainClient {
    let mut mock = MockChainClient::new();
    deploy_proxies(&mut mock, record);
    wire_governance(&mut mock, record, owners);
    mock
}

/// Proxy code, EIP-1967 slots and implementation code of every proxy on `record`.
pub(crate) fn deploy_proxies(mock: &mut MockChainClient, record: &ChainRecord) {
    for deployment in record.proxies() {
        mock.set_code(deployment.proxy, proxy_code(deployment.proxy_admin));
        mock.set_storage(deployment.proxy, ProxySlot::Admin.key(), encode_address(deployment.proxy_admin));
        if let Some(implementation) = deployment.implementation {
            mock.set_storage(
                deployment.proxy,
                ProxySlot::Implementation.key(),
                encode_address(implementation),
            );
            let code = match deployment.kind {
                ProxyKind::Token => TOKEN_IMPLEMENTATION_CODE,
                ProxyKind::Adapter => ADAPTER_IMPLEMENTATION_CODE,
            };
            mock.set_code(implementation, code);
        }
    }
}

/// Timelock roles, delay, multisig owners and ownership as the policy requires.
pub(crate) fn wire_governance(mock: &mut MockChainClient, record: &ChainRecord, owners: &CohortOwners) {
    for role in TimelockRole::ALL {
        mock.set_call(record.timelock, encode_call(role.getter(), &[]), role_id(role));
        set_has_role(mock, record.timelock, role_id(role), record.multisig, true);
    }
    set_delay(mock, record, 86_400);
    mock.set_call(
        record.multisig,
        encode_call(selectors::get_owners(), &[]),
        encode_address_array(owners.for_cohort(record.cohort)),
    );
    for deployment in record.proxies() {
        set_owner(mock, deployment.proxy_admin, record.timelock);
    }
    if let Some(token) = &record.token {
        let admin_role = role_id(TimelockRole::DefaultAdmin);
        mock.set_call(
            token.proxy,
            encode_call(TimelockRole::DefaultAdmin.getter(), &[]),
            admin_role,
        );
        set_has_role(mock, token.proxy, admin_role, record.multisig, true);
        set_has_role(mock, token.proxy, admin_role, DEPLOYER, false);
    }
    set_owner(mock, record.adapter.proxy, record.multisig);
}

pub(crate) fn set_has_role(
    mock: &mut MockChainClient,
    contract: Address,
    role: B256,
    account: Address,
    held: bool,
) {
    mock.set_call(
        contract,
        encode_call(selectors::has_role(), &[role, encode_address(account)]),
        encode_bool(held),
    );
}

pub(crate) fn set_owner(mock: &mut MockChainClient, contract: Address, owner: Address) {
    mock.set_call(contract, encode_call(selectors::owner(), &[]), encode_address(owner));
}

pub(crate) fn set_delay(mock: &mut MockChainClient, record: &ChainRecord, secs: u64) {
    mock.set_call(record.timelock, encode_call(selectors::get_min_delay(), &[]), encode_u64(secs));
}
