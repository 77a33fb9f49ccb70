//! Slashing records as persisted by ingestion and as seen by the explorer.

use serde::{Deserialize, Serialize};

/// Block fields the slashing views join against.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlockSummary {
    pub slot: u64,
    pub epoch: u64,
    pub proposer: u64,
}

/// Attester slashing as stored, referencing its containing block by slot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AttesterSlashingEntry {
    pub block_slot: u64,
    /// Position of the slashing inside the block body.
    pub block_index: u32,
    pub attestation1_indices: Option<Vec<u64>>,
    pub attestation2_indices: Option<Vec<u64>>,
}

/// Proposer slashing as stored, referencing its containing block by slot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProposerSlashingEntry {
    pub block_slot: u64,
    pub block_index: u32,
    pub proposer_index: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum SlashingKind {
    AttestationViolation {
        attestation1_indices: Vec<u64>,
        attestation2_indices: Vec<u64>,
    },
    ProposerViolation {
        slashed_validator: u64,
    },
}

impl SlashingKind {
    pub fn label(&self) -> &'static str {
        match self {
            SlashingKind::AttestationViolation { .. } => "Attestation Violation",
            SlashingKind::ProposerViolation { .. } => "Proposer Violation",
        }
    }
}

/// One violation joined with its containing block.
///
/// `slot`, `epoch` and `proposer` are `None` when the block is not in the store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SlashingRecord {
    pub slot: Option<u64>,
    pub epoch: Option<u64>,
    pub proposer: Option<u64>,
    pub kind: SlashingKind,
}

impl SlashingRecord {
    pub fn from_attester(entry: AttesterSlashingEntry, block: Option<&BlockSummary>) -> Self {
        Self {
            slot: block.map(|b| b.slot),
            epoch: block.map(|b| b.epoch),
            proposer: block.map(|b| b.proposer),
            kind: SlashingKind::AttestationViolation {
                attestation1_indices: entry.attestation1_indices.unwrap_or_default(),
                attestation2_indices: entry.attestation2_indices.unwrap_or_default(),
            },
        }
    }

    pub fn from_proposer(entry: ProposerSlashingEntry, block: Option<&BlockSummary>) -> Self {
        Self {
            slot: block.map(|b| b.slot),
            epoch: block.map(|b| b.epoch),
            proposer: block.map(|b| b.proposer),
            kind: SlashingKind::ProposerViolation {
                slashed_validator: entry.proposer_index,
            },
        }
    }
}
