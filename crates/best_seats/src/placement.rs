pub mod ideal;
pub mod search;
pub mod steps;

pub use ideal::IdealPosition;
pub use search::find_placement;
pub use steps::OutwardSteps;

use crate::canonical::SeatBlock;
use crate::seat_map::{RowId, SeatId};

/// Accepted block, in raw and canonical coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub row: RowId,
    pub seats: Vec<SeatId>, // raw indices, ascending
    pub canonical_row: RowId,
    pub block: SeatBlock,
    pub steps: u32, // moves away from the ideal position
    pub rows_tried: Vec<RowId>, // canonical rows probed, in search order
}
