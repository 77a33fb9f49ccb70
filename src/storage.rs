use crate::error::Result;
use crate::query::SlashingSource;
use crate::slashing::{AttesterSlashingEntry, BlockSummary, ProposerSlashingEntry};
use rocksdb::{Direction, IteratorMode, Options, DB};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

const BLOCK_PREFIX: &str = "block:";
const ATTESTER_SLASHING_PREFIX: &str = "attester_slashing:";
const PROPOSER_SLASHING_PREFIX: &str = "proposer_slashing:";

pub struct Storage {
    db: Arc<DB>,
}

impl Storage {
    pub fn open(path: &str) -> Result<Self> {
        let path = Path::new(path);
        let mut opts = Options::default();
        opts.create_if_missing(true);

        let db = DB::open(&opts, path)?;
        Ok(Storage { db: Arc::new(db) })
    }

    /// Opens an existing store without taking the writer lock.
    ///
    /// Fails if `path` holds no database; writes through this handle fail.
    pub fn open_read_only(path: &str) -> Result<Self> {
        let db = DB::open_for_read_only(&Options::default(), Path::new(path), false)?;
        Ok(Storage { db: Arc::new(db) })
    }

    // Generic Helper: Put
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let serialized = bincode::serialize(value)?;
        self.db.put(key.as_bytes(), serialized)?;
        Ok(())
    }

    // Generic Helper: Get
    pub fn get<T: for<'a> Deserialize<'a>>(&self, key: &str) -> Result<Option<T>> {
        match self.db.get(key.as_bytes())? {
            Some(data) => Ok(Some(bincode::deserialize(&data)?)),
            None => Ok(None),
        }
    }

    /// All values under `prefix`, in key order.
    fn scan<T: for<'a> Deserialize<'a>>(&self, prefix: &str) -> Result<Vec<T>> {
        let mut out = Vec::new();
        let iter = self
            .db
            .iterator(IteratorMode::From(prefix.as_bytes(), Direction::Forward));
        for item in iter {
            let (key, value) = item?;
            if !key.starts_with(prefix.as_bytes()) {
                break;
            }
            out.push(bincode::deserialize(&value)?);
        }
        Ok(out)
    }

    // --- Specific Accessors ---
    // Slots are zero-padded so lexicographic key order is slot order.

    pub fn save_block(&self, block: &BlockSummary) -> Result<()> {
        self.put(&format!("{}{:020}", BLOCK_PREFIX, block.slot), block)
    }

    pub fn get_block(&self, slot: u64) -> Result<Option<BlockSummary>> {
        self.get(&format!("{}{:020}", BLOCK_PREFIX, slot))
    }

    pub fn save_attester_slashing(&self, entry: &AttesterSlashingEntry) -> Result<()> {
        let key = format!(
            "{}{:020}:{:010}",
            ATTESTER_SLASHING_PREFIX, entry.block_slot, entry.block_index
        );
        self.put(&key, entry)
    }

    pub fn save_proposer_slashing(&self, entry: &ProposerSlashingEntry) -> Result<()> {
        let key = format!(
            "{}{:020}:{:010}",
            PROPOSER_SLASHING_PREFIX, entry.block_slot, entry.block_index
        );
        self.put(&key, entry)
    }
}

impl SlashingSource for Storage {
    fn attester_slashings(&self) -> Result<Vec<AttesterSlashingEntry>> {
        self.scan(ATTESTER_SLASHING_PREFIX)
    }

    fn proposer_slashings(&self) -> Result<Vec<ProposerSlashingEntry>> {
        self.scan(PROPOSER_SLASHING_PREFIX)
    }

    fn block(&self, slot: u64) -> Result<Option<BlockSummary>> {
        self.get_block(slot)
    }
}
