use crate::seat_map::{Row, SeatId};
use itertools::Itertools;

/// Maximal run of free seats with contiguous raw indices and one shared offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub first: SeatId,
    pub len: usize,
    pub offset: i32,
}

impl Chunk {
    pub fn last(&self) -> SeatId {
        self.first + self.len as SeatId - 1
    }

    /// Raw seat indices, left to right
    pub fn seats(&self) -> impl Iterator<Item = SeatId> + '_ {
        self.first..=self.last()
    }

    fn continues_with(&self, next: &Chunk) -> bool {
        self.last() + 1 == next.first && self.offset == next.offset
    }
}

/// Splits a row's free seats into chunks. A gap in the raw indices or a
/// change of offset starts a new chunk.
pub fn extract_chunks(row: &Row) -> Vec<Chunk> {
    row.seats
        .iter()
        .map(|seat| Chunk {
            first: seat.index,
            len: 1,
            offset: seat.offset,
        })
        .coalesce(|current, next| {
            if current.continues_with(&next) {
                Ok(Chunk {
                    len: current.len + next.len,
                    ..current
                })
            } else {
                Err((current, next))
            }
        })
        .collect()
}
