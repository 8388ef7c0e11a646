use crate::seat_map::{RowId, SeatId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SeatError>;

/// How far a failed request got before it stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureTier {
    /// The snapshot cannot seat the party anywhere
    Structural,
    /// A feasible row exists but lies outside the search budget
    Reachability,
    /// Every budget was spent without a placement
    Exhausted,
    /// Bad input: malformed snapshot, config or arguments
    Input,
}

#[derive(Debug, Error)]
pub enum SeatError {
    #[error("Venue has no rows")]
    EmptyVenue,

    #[error("No chunk is big enough to seat {tickets} participants")]
    NoFeasibleRow { tickets: usize },

    #[error("No row with room for the party within {budget} steps of row {ideal_row}")]
    NoReachableRow { ideal_row: RowId, budget: u32 },

    #[error("No placement found after {steps} steps away from the ideal position, do not book")]
    NoPlacement { steps: u32 },

    #[error("Ticket count must be at least 1, got {0}")]
    InvalidTickets(usize),

    #[error("Seat {seat} in row {row} is not after the previous seat")]
    UnorderedSeats { row: RowId, seat: SeatId },

    #[error("Row {0} appears more than once in the snapshot")]
    DuplicateRow(RowId),

    #[error("Rows {first} and {second} both project onto canonical row {canonical}")]
    CanonicalRowCollision {
        canonical: RowId,
        first: RowId,
        second: RowId,
    },

    #[error("Row {0} is not part of the seat map")]
    UnknownRow(RowId),

    #[error("Seat {seat} is not part of row {row}")]
    SeatNotInRow { row: RowId, seat: SeatId },

    #[error("Zone {zone} is {width} seats wide, too narrow for {tickets} participants")]
    ZoneTooNarrow {
        zone: String,
        width: i32,
        tickets: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid snapshot: {0}")]
    SnapshotFormat(String),

    #[error("Invalid snapshot row {line}: {message}")]
    SnapshotRecord { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SeatError {
    pub fn tier(&self) -> FailureTier {
        use SeatError::*;
        match self {
            EmptyVenue | NoFeasibleRow { .. } => FailureTier::Structural,
            NoReachableRow { .. } => FailureTier::Reachability,
            NoPlacement { .. } => FailureTier::Exhausted,
            _ => FailureTier::Input,
        }
    }
}

impl From<toml::de::Error> for SeatError {
    fn from(err: toml::de::Error) -> Self {
        SeatError::Config(format!("TOML parse error: {}", err))
    }
}
