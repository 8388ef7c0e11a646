//! Projection between raw chart coordinates and canonical venue space.
//!
//! Raw row and seat ids are local to the source's per-row scan. Adding the
//! row offset and seat offset puts every seat on one grid where rows and
//! seats of differently aligned sections line up.

use crate::availability::AvailabilityIndex;
use crate::chunks::Chunk;
use crate::error::{Result, SeatError};
use crate::seat_map::{RowId, SeatId};
use std::collections::BTreeMap;

#[inline]
pub fn canonical_row(raw_row: RowId, row_offset: i32) -> RowId {
    raw_row + row_offset
}

#[inline]
pub fn canonical_seat(raw_seat: SeatId, offset: i32) -> SeatId {
    raw_seat + offset
}

#[inline]
pub fn raw_row(canonical_row: RowId, row_offset: i32) -> RowId {
    canonical_row - row_offset
}

#[inline]
pub fn raw_seat(canonical_seat: SeatId, offset: i32) -> SeatId {
    canonical_seat - offset
}

/// Contiguous block of canonical seat ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatBlock {
    pub start: SeatId,
    pub len: usize,
}

impl SeatBlock {
    pub fn new(start: SeatId, len: usize) -> Self {
        Self { start, len }
    }

    pub fn end(&self) -> SeatId {
        let span = SeatId::try_from(self.len).unwrap_or(SeatId::MAX);
        self.start.saturating_add(span - 1)
    }

    /// Same block moved `delta` seats to the right
    pub fn shifted(&self, delta: i32) -> Self {
        Self {
            start: self.start.saturating_add(delta),
            len: self.len,
        }
    }

    pub fn seats(&self) -> impl Iterator<Item = SeatId> + '_ {
        self.start..=self.end()
    }
}

/// Chunk with its members expressed as canonical seat ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalChunk {
    pub first: SeatId,
    pub len: usize,
    pub offset: i32,
}

impl CanonicalChunk {
    pub fn project(chunk: &Chunk) -> Self {
        Self {
            first: canonical_seat(chunk.first, chunk.offset),
            len: chunk.len,
            offset: chunk.offset,
        }
    }

    pub fn last(&self) -> SeatId {
        self.first + self.len as SeatId - 1
    }

    pub fn contains(&self, block: &SeatBlock) -> bool {
        block.len > 0 && block.start >= self.first && block.end() <= self.last()
    }

    /// Raw seat indices of `block`, using this chunk's offset
    pub fn unproject(&self, block: &SeatBlock) -> Vec<SeatId> {
        block.seats().map(|s| raw_seat(s, self.offset)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRow {
    pub raw_row: RowId,
    pub row_offset: i32,
    pub chunks: Vec<CanonicalChunk>,
}

impl CanonicalRow {
    /// First chunk holding the whole block
    pub fn chunk_containing(&self, block: &SeatBlock) -> Option<&CanonicalChunk> {
        self.chunks.iter().find(|c| c.contains(block))
    }
}

/// Feasible rows keyed by canonical row id. Rebuilt for every ticket count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalTable {
    rows: BTreeMap<RowId, CanonicalRow>,
}

impl CanonicalTable {
    pub fn project(index: &AvailabilityIndex) -> Result<Self> {
        let mut rows: BTreeMap<RowId, CanonicalRow> = BTreeMap::new();

        for (&raw, feasible) in index.rows() {
            let canonical = canonical_row(raw, feasible.row_offset);
            if let Some(existing) = rows.get(&canonical) {
                return Err(SeatError::CanonicalRowCollision {
                    canonical,
                    first: existing.raw_row,
                    second: raw,
                });
            }
            rows.insert(
                canonical,
                CanonicalRow {
                    raw_row: raw,
                    row_offset: feasible.row_offset,
                    chunks: feasible.chunks.iter().map(CanonicalChunk::project).collect(),
                },
            );
        }

        Ok(Self { rows })
    }

    pub fn get(&self, canonical_row: RowId) -> Option<&CanonicalRow> {
        self.rows.get(&canonical_row)
    }

    pub fn contains_row(&self, canonical_row: RowId) -> bool {
        self.rows.contains_key(&canonical_row)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Raw row id of a canonical row, from the offset stored at projection time
    pub fn unproject_row(&self, canonical_row: RowId) -> Option<RowId> {
        self.rows
            .get(&canonical_row)
            .map(|row| raw_row(canonical_row, row.row_offset))
    }
}
