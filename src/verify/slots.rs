use super::{Verdict, Violation};
use crate::errors::TransportError;
use crate::onchain::{decode_address, ChainClient, ProxySlot};
use alloy_primitives::Address;
use tracing::debug;

/// Read an address-typed proxy slot and compare it to `expected`.
///
/// Only the low 20 bytes of the word are significant; anything in the
/// upper 12 bytes is ignored.
pub async fn verify_slot_address(
    client: &dyn ChainClient,
    contract: Address,
    slot: ProxySlot,
    expected: Address,
    label: &str,
) -> Result<Verdict, TransportError> {
    let word = client.get_storage_at(contract, slot.key()).await?;
    let found = decode_address(word);
    debug!(target: "verify::slots", %contract, slot = slot.name(), %found, "read slot");

    if found == expected {
        Ok(Ok(()))
    } else {
        Ok(Err(Violation::SlotMismatch { label: label.to_string(), slot: slot.key(), expected, found }))
    }
}
