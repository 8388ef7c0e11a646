use crate::constants::FREE_STATE_MARKER;
use serde::{Deserialize, Serialize};

/// Row identifier (raw or canonical depending on context)
pub type RowId = i32;
/// Seat identifier (raw or canonical depending on context)
pub type SeatId = i32;

/// Seating chart snapshot as handed over by the acquisition layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawSeatMap {
    pub rows: Vec<RawRow>, // source scan order
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawRow {
    pub row: RowId,
    #[serde(default)]
    pub row_offset: i32,
    pub seats: Vec<RawSeat>, // left-to-right scan order
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawSeat {
    pub seat: SeatId,
    pub state: String,
    #[serde(default)]
    pub offset: i32,
}

impl RawSeat {
    pub fn free(seat: SeatId, offset: i32) -> Self {
        Self {
            seat,
            state: FREE_STATE_MARKER.to_string(),
            offset,
        }
    }

    pub fn taken(seat: SeatId, offset: i32) -> Self {
        Self {
            seat,
            state: "1".to_string(),
            offset,
        }
    }

    pub fn is_free(&self) -> bool {
        self.state == FREE_STATE_MARKER
    }
}

/// A free seat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub index: SeatId,
    pub offset: i32, // horizontal displacement into canonical space
}

/// A row after loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: RowId,
    pub row_offset: i32,     // vertical displacement into canonical space
    pub seats: Vec<Seat>,    // free seats only, source order
    pub layout: Vec<SeatId>, // every seat of the row, source order
}

/// Canonical extent of the venue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TheaterMeasures {
    pub horizontal: SeatId,
    pub vertical: RowId,
}

/// Free seats of a venue snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatMap {
    pub rows: Vec<Row>,
    pub measures: TheaterMeasures,
}

impl SeatMap {
    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn free_seat_count(&self) -> usize {
        self.rows.iter().map(|row| row.seats.len()).sum()
    }
}
