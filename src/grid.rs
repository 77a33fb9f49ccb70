//! Paging grid protocol: `draw`/`start`/`length` in, counted envelope out.

use crate::config::ChainConfig;
use crate::error::{ExplorerError, Result};
use crate::format::{format_row, GridRow};
use crate::query::{fetch_slashings, Page, SlashingSource};
use crate::resolver::resolve_slashed_validators;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRequest {
    pub draw: u64,
    pub start: u64,
    pub length: u64,
}

impl GridRequest {
    /// Parses the three required parameters. Nothing is defaulted.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self> {
        Ok(Self {
            draw: required_u64(params, "draw")?,
            start: required_u64(params, "start")?,
            length: required_u64(params, "length")?,
        })
    }

    pub fn page(&self) -> Page {
        Page::new(self.start, self.length)
    }
}

fn required_u64(params: &HashMap<String, String>, name: &'static str) -> Result<u64> {
    let raw = params.get(name).ok_or_else(|| ExplorerError::InvalidParameter {
        name,
        reason: "missing".to_string(),
    })?;
    raw.parse::<u64>().map_err(|e| ExplorerError::InvalidParameter {
        name,
        reason: format!("'{}': {}", raw, e),
    })
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GridResponse {
    pub draw: u64,
    pub records_total: u64,
    pub records_filtered: u64,
    pub data: Vec<GridRow>,
}

impl GridResponse {
    /// No filtering happens server side, so both counts are `total`.
    pub fn new(draw: u64, total: u64, data: Vec<GridRow>) -> Self {
        Self {
            draw,
            records_total: total,
            records_filtered: total,
            data,
        }
    }
}

/// Runs query, resolution and formatting for one grid request.
pub fn slashings_grid<S: SlashingSource + ?Sized>(
    source: &S,
    request: &GridRequest,
    chain: &ChainConfig,
) -> Result<GridResponse> {
    let page = fetch_slashings(source, request.page())?;

    let data = page
        .records
        .iter()
        .map(|record| {
            let slashed = resolve_slashed_validators(record);
            format_row(record, &slashed, chain)
        })
        .collect();

    Ok(GridResponse::new(request.draw, page.total, data))
}
