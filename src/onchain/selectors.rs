use alloy_primitives::keccak256;

/// Compute the Solidity function selector (first 4 bytes of keccak256(signature)).
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash[..4]);
    selector
}

// AccessControl / TimelockController getters
pub fn has_role() -> [u8; 4] {
    function_selector("hasRole(bytes32,address)")
}
pub fn default_admin_role() -> [u8; 4] {
    function_selector("DEFAULT_ADMIN_ROLE()")
}
pub fn executor_role() -> [u8; 4] {
    function_selector("EXECUTOR_ROLE()")
}
pub fn proposer_role() -> [u8; 4] {
    function_selector("PROPOSER_ROLE()")
}
pub fn canceller_role() -> [u8; 4] {
    function_selector("CANCELLER_ROLE()")
}
pub fn get_min_delay() -> [u8; 4] {
    function_selector("getMinDelay()")
}

// Safe multisig getters
pub fn get_owners() -> [u8; 4] {
    function_selector("getOwners()")
}

// Ownable getters (ProxyAdmin, OFT adapter)
pub fn owner() -> [u8; 4] {
    function_selector("owner()")
}
