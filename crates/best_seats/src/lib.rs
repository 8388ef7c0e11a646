pub mod availability;
pub mod canonical;
pub mod chunks;
pub mod config;
pub mod constants;
pub mod display;
pub mod engine;
pub mod error;
pub mod placement;
pub mod seat_map;
pub mod zone;

pub use availability::AvailabilityIndex;
pub use canonical::{CanonicalTable, SeatBlock};
pub use chunks::{Chunk, extract_chunks};
pub use config::{Config, SearchConfig};
pub use engine::{Selection, place, select_best_seats, select_from_snapshot};
pub use error::{FailureTier, Result, SeatError};
pub use placement::{Placement, find_placement};
pub use seat_map::{RawSeatMap, RowId, SeatId, SeatMap, TheaterMeasures, read_snapshot};
pub use zone::Zone;
