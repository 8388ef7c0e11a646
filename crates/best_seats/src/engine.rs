use crate::availability::AvailabilityIndex;
use crate::canonical::CanonicalTable;
use crate::config::{Config, SearchConfig};
use crate::display::to_display_order;
use crate::error::{Result, SeatError};
use crate::placement::{Placement, find_placement};
use crate::seat_map::{RawSeatMap, RowId, SeatId, SeatMap};
use log::debug;
use serde::Serialize;

/// Seats to book, as the venue labels them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub row: RowId,
    pub seats: Vec<SeatId>,     // venue numbering
    pub raw_seats: Vec<SeatId>, // chart source numbering
    pub steps: u32,
}

/// Loads a snapshot and selects seats for `tickets` participants
pub fn select_from_snapshot(raw: &RawSeatMap, tickets: usize, config: &Config) -> Result<Selection> {
    let map = SeatMap::load(raw)?;
    select_best_seats(&map, tickets, config)
}

/// Runs the whole pipeline on a loaded seat map: availability, canonical
/// projection, placement search and display conversion
pub fn select_best_seats(map: &SeatMap, tickets: usize, config: &Config) -> Result<Selection> {
    let placement = place(map, tickets, config)?;
    to_selection(map, placement)
}

fn to_selection(map: &SeatMap, placement: Placement) -> Result<Selection> {
    let row = map
        .row(placement.row)
        .ok_or(SeatError::UnknownRow(placement.row))?;
    let seats = to_display_order(placement.row, &row.layout, &placement.seats)?;

    Ok(Selection {
        row: placement.row,
        seats,
        raw_seats: placement.seats,
        steps: placement.steps,
    })
}

/// Placement in raw and canonical coordinates, before display conversion
pub fn place(map: &SeatMap, tickets: usize, config: &Config) -> Result<Placement> {
    let search = resolve_search_config(map, tickets, config)?;
    search.validate()?;

    let index = AvailabilityIndex::build(map, tickets)?;
    let table = CanonicalTable::project(&index)?;
    debug!("Canonical table holds {} rows", table.len());

    find_placement(&table, &map.measures, tickets, &search)
}

fn resolve_search_config(map: &SeatMap, tickets: usize, config: &Config) -> Result<SearchConfig> {
    match config.zone {
        Some(zone) => {
            debug!("Aiming at zone {}", zone);
            zone.search_config(&map.measures, tickets, &config.search)
        }
        None => Ok(config.search.clone()),
    }
}
