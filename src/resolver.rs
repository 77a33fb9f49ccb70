//! Works out which validators a slashing actually punishes.

use crate::slashing::{SlashingKind, SlashingRecord};
use std::collections::BTreeSet;
use tracing::warn;

/// Validators present in both signer lists, ascending, without duplicates.
pub fn intersect_indices(first: &[u64], second: &[u64]) -> Vec<u64> {
    let second: BTreeSet<u64> = second.iter().copied().collect();
    first
        .iter()
        .copied()
        .filter(|i| second.contains(i))
        .collect::<BTreeSet<u64>>()
        .into_iter()
        .collect()
}

/// Slashed validator indices for a record.
///
/// An attester slashing whose attestations share no signer yields an empty
/// list and a warning; the row is still shown.
pub fn resolve_slashed_validators(record: &SlashingRecord) -> Vec<u64> {
    match &record.kind {
        SlashingKind::ProposerViolation { slashed_validator } => vec![*slashed_validator],
        SlashingKind::AttestationViolation {
            attestation1_indices,
            attestation2_indices,
        } => {
            let slashed = intersect_indices(attestation1_indices, attestation2_indices);
            if slashed.is_empty() {
                warn!(
                    "No intersection found for attestation violation, proposer: {:?}, slot: {:?}",
                    record.proposer, record.slot
                );
            }
            slashed
        }
    }
}
