/// Required `getMinDelay()` of every bridge-adapter timelock (24 hours).
pub const REQUIRED_TIMELOCK_DELAY_SECS: u64 = 86_400;
/// Ethereum address length (20 bytes)
pub const ADDRESS_LENGTH: usize = 20;
/// ABI word length (32 bytes)
pub const WORD_LENGTH: usize = 32;
/// Default number of chains verified at the same time
pub const DEFAULT_CONCURRENCY: usize = 8;
/// Default wall-clock budget for one chain's full check suite
pub const DEFAULT_CHAIN_TIMEOUT_SECS: u64 = 120;
/// Default timeout of a single JSON-RPC request
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 30;
/// Suffix of the environment variable holding a network's RPC endpoint
pub const RPC_URL_ENV_SUFFIX: &str = "_RPC_URL";
/// Suffix of the environment variable holding a network's explorer API key
pub const EXPLORER_KEY_ENV_SUFFIX: &str = "_EXPLORER_API_KEY";
/// Default Foundry build output directory
pub const DEFAULT_ARTIFACTS_DIR: &str = "out";
