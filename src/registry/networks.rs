/// Chain id → canonical lowercase network name.
///
/// The name is also the stem of the network's credential variables
/// (`base` → `BASE_RPC_URL`), so entries must never be renamed casually.
pub const NETWORKS: &[(u64, &str)] = &[
    (1, "mainnet"),
    (8453, "base"),
    (10, "optimism"),
    (42161, "arbitrum"),
    (252, "fraxtal"),
    (169, "manta"),
    (167000, "taiko"),
    (534352, "scroll"),
    (250, "fantom"),
    (5000, "mantle"),
    (81457, "blast"),
    (59144, "linea"),
    (17000, "holesky"),
    (11155111, "sepolia"),
    (2810, "morph_testnet"),
    (2522, "fraxtal_testnet"),
    (80094, "bera"),
    (56, "binance"),
];

/// Look up the canonical name of `chain_id`.
pub fn network_name(chain_id: u64) -> Option<&'static str> {
    NETWORKS.iter().find(|(id, _)| *id == chain_id).map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_networks() {
        assert_eq!(network_name(1), Some("mainnet"));
        assert_eq!(network_name(8453), Some("base"));
        assert_eq!(network_name(80094), Some("bera"));
        assert_eq!(network_name(2810), Some("morph_testnet"));
    }

    #[test]
    fn test_unknown_network() {
        assert_eq!(network_name(0), None);
        assert_eq!(network_name(9323310), None);
    }

    #[test]
    fn test_table_has_unique_ids_and_names() {
        let ids: HashSet<_> = NETWORKS.iter().map(|(id, _)| id).collect();
        let names: HashSet<_> = NETWORKS.iter().map(|(_, name)| name).collect();
        assert_eq!(ids.len(), NETWORKS.len());
        assert_eq!(names.len(), NETWORKS.len());
    }

    #[test]
    fn test_names_are_lowercase() {
        for (_, name) in NETWORKS {
            assert_eq!(*name, name.to_lowercase());
        }
    }
}
