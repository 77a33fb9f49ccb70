//! HTML cell fragments for the slashings grid.

use crate::config::ChainConfig;
use crate::slashing::{SlashingKind, SlashingRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thousands::Separable;

/// Number of columns the grid binds positionally.
pub const GRID_COLUMNS: usize = 6;

/// One grid row: slashed validators, proposer, time, type, slot, epoch.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GridRow(pub [String; GRID_COLUMNS]);

pub fn format_validator(index: u64) -> String {
    format!(
        "<i class=\"fas fa-male mr-2\"></i><a href=\"/validator/{}\">{}</a>",
        index, index
    )
}

pub fn format_slashed_validator(index: u64) -> String {
    format!(
        "<i class=\"fas fa-user-slash mr-2\"></i><a href=\"/validator/{}\">{}</a>",
        index, index
    )
}

pub fn format_slashed_validators(indices: &[u64]) -> String {
    indices
        .iter()
        .map(|i| format_slashed_validator(*i))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_timestamp(unix: u64) -> String {
    let utc = i64::try_from(unix)
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_default();
    format!(
        "<span class=\"timestamp\" data-toggle=\"tooltip\" data-placement=\"top\" title=\"{}\" data-timestamp=\"{}\">{}</span>",
        utc, unix, utc
    )
}

pub fn format_block_slot(slot: u64) -> String {
    format!("<a href=\"/block/{}\">{}</a>", slot, slot.separate_with_commas())
}

pub fn format_epoch(epoch: u64) -> String {
    format!("<a href=\"/epoch/{}\">{}</a>", epoch, epoch.separate_with_commas())
}

/// Builds the display row for a record and its resolved validators.
pub fn format_row(record: &SlashingRecord, slashed: &[u64], chain: &ChainConfig) -> GridRow {
    let slashed_cell = match record.kind {
        SlashingKind::AttestationViolation { .. } => format_slashed_validators(slashed),
        SlashingKind::ProposerViolation { slashed_validator } => {
            format_slashed_validator(slashed_validator)
        }
    };

    GridRow([
        slashed_cell,
        record.proposer.map(format_validator).unwrap_or_default(),
        record
            .slot
            .map(|s| format_timestamp(chain.slot_to_unix(s)))
            .unwrap_or_default(),
        record.kind.label().to_string(),
        record.slot.map(format_block_slot).unwrap_or_default(),
        record.epoch.map(format_epoch).unwrap_or_default(),
    ])
}
