pub mod loader;
pub mod reader;
pub mod types;

pub use reader::{read_snapshot, read_snapshot_csv, read_snapshot_json};
pub use types::{RawRow, RawSeat, RawSeatMap, Row, RowId, Seat, SeatId, SeatMap, TheaterMeasures};
