use crate::canonical::SeatBlock;
use crate::config::SearchConfig;
use crate::seat_map::{RowId, SeatId, TheaterMeasures};

/// Best position before looking at availability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdealPosition {
    pub row: RowId,
    pub block: SeatBlock,
}

impl IdealPosition {
    pub fn compute(measures: &TheaterMeasures, tickets: usize, config: &SearchConfig) -> Self {
        Self {
            row: ideal_row(measures, config.vertical_ratio),
            block: ideal_block(measures, config.horizontal_ratio, tickets),
        }
    }
}

/// `ceil(ratio * vertical extent)`
pub fn ideal_row(measures: &TheaterMeasures, vertical_ratio: f64) -> RowId {
    (vertical_ratio * measures.vertical as f64).ceil() as RowId
}

/// Block of `tickets` seats around `ceil(horizontal extent / ratio)`.
/// With an even party the extra seat goes to the left.
pub fn ideal_block(measures: &TheaterMeasures, horizontal_ratio: f64, tickets: usize) -> SeatBlock {
    let center = (measures.horizontal as f64 / horizontal_ratio).ceil() as SeatId;
    let places_to_add = tickets.saturating_sub(1);
    let on_the_left = places_to_add.div_ceil(2) as SeatId;
    SeatBlock::new(center - on_the_left, tickets)
}
