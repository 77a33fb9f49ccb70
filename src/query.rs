//! Merged, slot-ordered view over attester and proposer slashings.

use crate::error::Result;
use crate::slashing::{AttesterSlashingEntry, BlockSummary, ProposerSlashingEntry, SlashingRecord};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Upper bound on rows returned for one page.
pub const MAX_PAGE_LENGTH: u64 = 100;

/// Read access to persisted slashings and the blocks that contain them.
pub trait SlashingSource {
    fn attester_slashings(&self) -> Result<Vec<AttesterSlashingEntry>>;
    fn proposer_slashings(&self) -> Result<Vec<ProposerSlashingEntry>>;
    fn block(&self, slot: u64) -> Result<Option<BlockSummary>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u64,
    pub limit: u64,
}

impl Page {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit: limit.min(MAX_PAGE_LENGTH),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashingPage {
    pub records: Vec<SlashingRecord>,
    pub total: u64,
}

/// Loads one page of slashings, newest slot first.
///
/// Records whose block is missing carry no slot and sort ahead of the rest,
/// the way `ORDER BY slot DESC` treats NULLs. Equal slots keep store order.
pub fn fetch_slashings<S: SlashingSource + ?Sized>(source: &S, page: Page) -> Result<SlashingPage> {
    let attester = source.attester_slashings()?;
    let proposer = source.proposer_slashings()?;
    let total = (attester.len() + proposer.len()) as u64;

    let mut blocks: HashMap<u64, Option<BlockSummary>> = HashMap::new();
    let slots = attester
        .iter()
        .map(|e| e.block_slot)
        .chain(proposer.iter().map(|e| e.block_slot));
    for slot in slots {
        if !blocks.contains_key(&slot) {
            blocks.insert(slot, source.block(slot)?);
        }
    }
    let block_for = |slot: u64| blocks.get(&slot).and_then(|b| b.as_ref());

    let mut records: Vec<SlashingRecord> = Vec::with_capacity(attester.len() + proposer.len());
    for entry in attester {
        let block = block_for(entry.block_slot);
        records.push(SlashingRecord::from_attester(entry, block));
    }
    for entry in proposer {
        let block = block_for(entry.block_slot);
        records.push(SlashingRecord::from_proposer(entry, block));
    }

    // None orders before Some, so records without a block lead.
    records.sort_by_key(|r| r.slot.map(Reverse));

    let offset = usize::try_from(page.offset).unwrap_or(usize::MAX);
    let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);
    let records: Vec<SlashingRecord> = records.into_iter().skip(offset).take(limit).collect();

    Ok(SlashingPage { records, total })
}
