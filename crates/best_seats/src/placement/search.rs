use super::{IdealPosition, OutwardSteps, Placement};
use crate::canonical::{CanonicalChunk, CanonicalRow, CanonicalTable, SeatBlock, raw_row};
use crate::config::SearchConfig;
use crate::error::{Result, SeatError};
use crate::seat_map::{RowId, TheaterMeasures};
use log::{debug, info, warn};

/// Step counter and visited rows of one placement request
#[derive(Debug, Default)]
struct SearchState {
    steps: u32,
    visited: Vec<RowId>, // in the order they were first probed
}

impl SearchState {
    /// Records `row`, false when it was already probed
    fn visit(&mut self, row: RowId) -> bool {
        if self.visited.contains(&row) {
            return false;
        }
        self.visited.push(row);
        true
    }
}

/// Block accepted by seat validation, with the row and chunk holding it
struct Fit<'a> {
    row: &'a CanonicalRow,
    block: SeatBlock,
    chunk: &'a CanonicalChunk,
}

/// Finds the block closest to the ideal position.
///
/// 1. Row validation: the ideal row, or the nearest row of the table within
///    `row_steps` moves.
/// 2. Seat validation: the ideal block, moved within `seat_steps` until a
///    chunk holds all of it.
/// 3. Cross-row fallback: nearby rows within `fallback_row_steps` of the
///    candidate row, each tried once with a fresh seat validation.
pub fn find_placement(
    table: &CanonicalTable,
    measures: &TheaterMeasures,
    tickets: usize,
    config: &SearchConfig,
) -> Result<Placement> {
    let ideal = IdealPosition::compute(measures, tickets, config);
    debug!(
        "Ideal position: row {}, seats {}..={}",
        ideal.row,
        ideal.block.start,
        ideal.block.end()
    );

    let mut state = SearchState::default();
    let candidate = validate_row(table, ideal.row, config.row_steps, &mut state)?;

    if let Some(fit) = validate_seats(table, candidate, ideal.block, config.seat_steps, &mut state) {
        return Ok(accept(candidate, fit, state));
    }

    warn!(
        "No block fits in row {}, trying up to {} nearby rows",
        candidate, config.fallback_row_steps
    );
    for delta in OutwardSteps::new(config.fallback_row_steps) {
        state.steps += 1;
        let row = candidate.saturating_add(delta);
        let fresh = state.visit(row);
        if !fresh || !table.contains_row(row) {
            debug!("Skipping row {}", row);
            continue;
        }
        if let Some(fit) = validate_seats(table, row, ideal.block, config.seat_steps, &mut state) {
            return Ok(accept(row, fit, state));
        }
    }

    debug!("Rows tried: {:?}", state.visited);
    Err(SeatError::NoPlacement { steps: state.steps })
}

fn validate_row(
    table: &CanonicalTable,
    ideal_row: RowId,
    budget: u32,
    state: &mut SearchState,
) -> Result<RowId> {
    state.visit(ideal_row);
    if table.contains_row(ideal_row) {
        return Ok(ideal_row);
    }

    for delta in OutwardSteps::new(budget) {
        state.steps += 1;
        let row = ideal_row.saturating_add(delta);
        if !state.visit(row) {
            continue;
        }
        if table.contains_row(row) {
            debug!("Row {} replaces ideal row {}", row, ideal_row);
            return Ok(row);
        }
    }

    Err(SeatError::NoReachableRow { ideal_row, budget })
}

fn validate_seats<'a>(
    table: &'a CanonicalTable,
    row: RowId,
    block: SeatBlock,
    budget: u32,
    state: &mut SearchState,
) -> Option<Fit<'a>> {
    state.visit(row);
    let entry = table.get(row)?;

    if let Some(chunk) = entry.chunk_containing(&block) {
        return Some(Fit {
            row: entry,
            block,
            chunk,
        });
    }

    for delta in OutwardSteps::new(budget) {
        state.steps += 1;
        let moved = block.shifted(delta);
        if let Some(chunk) = entry.chunk_containing(&moved) {
            debug!("Row {}: block moved by {} to seat {}", row, delta, moved.start);
            return Some(Fit {
                row: entry,
                block: moved,
                chunk,
            });
        }
    }

    debug!("Row {}: no chunk within {} moves", row, budget);
    None
}

fn accept(canonical_row: RowId, fit: Fit<'_>, state: SearchState) -> Placement {
    let seats = fit.chunk.unproject(&fit.block);
    let row = raw_row(canonical_row, fit.row.row_offset);

    info!(
        "Placement: row {} seats {:?} ({} steps from ideal)",
        row, seats, state.steps
    );
    Placement {
        row,
        seats,
        canonical_row,
        block: fit.block,
        steps: state.steps,
        rows_tried: state.visited,
    }
}
