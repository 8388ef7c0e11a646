use crate::error::{Result, SeatError};
use crate::seat_map::{RowId, SeatId};

/// Converts accepted raw seats to the venue's own numbering.
///
/// The chart source numbers seats in the opposite direction from the
/// venue. The full row layout is reversed, sliced at the positions the
/// first and last accepted seats hold in the original layout, and the slice
/// is reversed back.
pub fn to_display_order(row: RowId, layout: &[SeatId], seats: &[SeatId]) -> Result<Vec<SeatId>> {
    let (Some(&first), Some(&last)) = (seats.first(), seats.last()) else {
        return Ok(Vec::new());
    };

    let position = |seat: SeatId| {
        layout
            .iter()
            .position(|&s| s == seat)
            .ok_or(SeatError::SeatNotInRow { row, seat })
    };
    let start = position(first)?;
    let end = position(last)?;

    let mut reversed: Vec<SeatId> = layout.iter().rev().copied().collect();
    let mut slice: Vec<SeatId> = reversed.drain(start..=end).collect();
    slice.reverse();
    Ok(slice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirrors_block() {
        let layout: Vec<SeatId> = (1..=10).collect();
        assert_eq!(to_display_order(1, &layout, &[4, 5, 6]).unwrap(), vec![5, 6, 7]);
    }

    #[test]
    fn test_centered_block_stays() {
        let layout: Vec<SeatId> = (1..=9).collect();
        assert_eq!(to_display_order(1, &layout, &[4, 5, 6]).unwrap(), vec![4, 5, 6]);
    }

    #[test]
    fn test_uses_positions_not_ids() {
        // seats numbered from 11, with a hole in the numbering
        let layout = vec![11, 12, 13, 15, 16];
        assert_eq!(to_display_order(2, &layout, &[11, 12]).unwrap(), vec![15, 16]);
    }

    #[test]
    fn test_seat_outside_row() {
        let layout = vec![1, 2, 3];
        assert!(matches!(
            to_display_order(7, &layout, &[3, 4]),
            Err(SeatError::SeatNotInRow { row: 7, seat: 4 })
        ));
    }

    #[test]
    fn test_empty_selection() {
        assert!(to_display_order(1, &[1, 2], &[]).unwrap().is_empty());
    }
}
