//! # deploy-verifier - Cross-chain deployment invariant verifier
//!
//! Reads a deployment manifest, connects to every chain it names and checks
//! that the deployed proxies, implementations and governance wiring match
//! it. Read-only: nothing is ever sent to a chain except `eth_getCode`,
//! `eth_getStorageAt` and `eth_call`.

pub mod artifacts;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod manifest;
pub mod onchain;
pub mod output;
pub mod registry;
pub mod verify;
