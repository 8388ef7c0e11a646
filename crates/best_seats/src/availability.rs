use crate::chunks::{Chunk, extract_chunks};
use crate::error::{Result, SeatError};
use crate::seat_map::{RowId, SeatMap};
use log::debug;
use std::collections::BTreeMap;

/// A row holding at least one chunk that seats the whole party
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeasibleRow {
    pub row_offset: i32,
    pub chunks: Vec<Chunk>, // only chunks with len >= tickets
}

/// Rows that can seat the party, keyed by raw row id. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityIndex {
    tickets: usize,
    rows: BTreeMap<RowId, FeasibleRow>,
}

impl AvailabilityIndex {
    pub fn build(map: &SeatMap, tickets: usize) -> Result<Self> {
        if tickets == 0 {
            return Err(SeatError::InvalidTickets(tickets));
        }

        let rows: BTreeMap<RowId, FeasibleRow> = map
            .rows
            .iter()
            .filter_map(|row| {
                let chunks: Vec<Chunk> = extract_chunks(row)
                    .into_iter()
                    .filter(|c| c.len >= tickets)
                    .collect();
                (!chunks.is_empty()).then(|| {
                    (
                        row.id,
                        FeasibleRow {
                            row_offset: row.row_offset,
                            chunks,
                        },
                    )
                })
            })
            .collect();

        if rows.is_empty() {
            return Err(SeatError::NoFeasibleRow { tickets });
        }

        debug!(
            "{} of {} rows can seat {} participants",
            rows.len(),
            map.rows.len(),
            tickets
        );
        Ok(Self { tickets, rows })
    }

    pub fn tickets(&self) -> usize {
        self.tickets
    }

    pub fn rows(&self) -> &BTreeMap<RowId, FeasibleRow> {
        &self.rows
    }

    pub fn get(&self, row: RowId) -> Option<&FeasibleRow> {
        self.rows.get(&row)
    }
}
