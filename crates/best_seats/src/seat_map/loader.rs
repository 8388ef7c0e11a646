use super::types::*;
use crate::constants::MAX_COORDINATE;
use crate::error::{Result, SeatError};
use log::debug;
use std::collections::HashSet;

/// Snapshot ingestion: free seats only, measures of the canonical space
impl SeatMap {
    pub fn load(raw: &RawSeatMap) -> Result<Self> {
        if raw.rows.is_empty() {
            return Err(SeatError::EmptyVenue);
        }

        let mut seen = HashSet::with_capacity(raw.rows.len());
        let mut rows = Vec::with_capacity(raw.rows.len());
        for raw_row in &raw.rows {
            if !seen.insert(raw_row.row) {
                return Err(SeatError::DuplicateRow(raw_row.row));
            }
            rows.push(load_row(raw_row)?);
        }

        let measures = measure(raw);
        debug!(
            "Loaded {} rows, canonical extent {}x{}",
            rows.len(),
            measures.horizontal,
            measures.vertical
        );

        Ok(Self { rows, measures })
    }
}

fn load_row(raw_row: &RawRow) -> Result<Row> {
    // seat indices must be strictly increasing in scan order
    if let Some(pair) = raw_row.seats.windows(2).find(|w| w[1].seat <= w[0].seat) {
        return Err(SeatError::UnorderedSeats {
            row: raw_row.row,
            seat: pair[1].seat,
        });
    }

    on_grid(raw_row.row, raw_row.row_offset).ok_or_else(|| {
        SeatError::SnapshotFormat(format!(
            "row {} with row offset {} is outside the venue grid",
            raw_row.row, raw_row.row_offset
        ))
    })?;
    if let Some(seat) = raw_row
        .seats
        .iter()
        .find(|s| on_grid(s.seat, s.offset).is_none())
    {
        return Err(SeatError::SnapshotFormat(format!(
            "row {}: seat {} with offset {} is outside the venue grid",
            raw_row.row, seat.seat, seat.offset
        )));
    }

    let seats = raw_row
        .seats
        .iter()
        .filter(|s| s.is_free())
        .map(|s| Seat {
            index: s.seat,
            offset: s.offset,
        })
        .collect();

    Ok(Row {
        id: raw_row.row,
        row_offset: raw_row.row_offset,
        seats,
        layout: raw_row.seats.iter().map(|s| s.seat).collect(),
    })
}

/// Canonical id of `raw + offset`, when both ids stay within `MAX_COORDINATE`
fn on_grid(raw: i32, offset: i32) -> Option<i32> {
    let limit = MAX_COORDINATE.unsigned_abs();
    raw.checked_add(offset)
        .filter(|canonical| canonical.unsigned_abs() <= limit && raw.unsigned_abs() <= limit)
}

/// Largest canonical seat id and canonical row id in the whole chart,
/// occupied seats included.
fn measure(raw: &RawSeatMap) -> TheaterMeasures {
    let horizontal = raw
        .rows
        .iter()
        .filter_map(|row| row.seats.last())
        .map(|last| last.seat + last.offset)
        .max()
        .unwrap_or(0);
    let vertical = raw
        .rows
        .iter()
        .map(|row| row.row + row.row_offset)
        .max()
        .unwrap_or(0);

    TheaterMeasures {
        horizontal,
        vertical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_row(row: RowId, row_offset: i32, seats: Vec<RawSeat>) -> RawRow {
        RawRow {
            row,
            row_offset,
            seats,
        }
    }

    #[test]
    fn test_empty_venue() {
        let raw = RawSeatMap::default();
        assert!(matches!(SeatMap::load(&raw), Err(SeatError::EmptyVenue)));
    }

    #[test]
    fn test_keeps_free_seats_in_order() {
        let raw = RawSeatMap {
            rows: vec![raw_row(
                1,
                0,
                vec![
                    RawSeat::free(1, 0),
                    RawSeat::taken(2, 0),
                    RawSeat::free(3, 1),
                ],
            )],
        };
        let map = SeatMap::load(&raw).unwrap();
        let row = map.row(1).unwrap();

        assert_eq!(
            row.seats,
            vec![
                Seat {
                    index: 1,
                    offset: 0
                },
                Seat {
                    index: 3,
                    offset: 1
                }
            ]
        );
        assert_eq!(row.layout, vec![1, 2, 3]);
        assert_eq!(map.free_seat_count(), 2);
    }

    #[test]
    fn test_unknown_state_is_not_free() {
        let mut blocked = RawSeat::free(1, 0);
        blocked.state = "disabled".to_string();
        let raw = RawSeatMap {
            rows: vec![raw_row(1, 0, vec![blocked])],
        };
        let map = SeatMap::load(&raw).unwrap();
        assert!(map.rows[0].seats.is_empty());
    }

    #[test]
    fn test_measures_include_offsets_and_taken_seats() {
        let raw = RawSeatMap {
            rows: vec![
                raw_row(1, 0, vec![RawSeat::free(1, 0), RawSeat::taken(10, 2)]),
                raw_row(2, 3, vec![RawSeat::free(1, 0), RawSeat::free(8, 1)]),
                raw_row(3, 0, vec![]),
            ],
        };
        let map = SeatMap::load(&raw).unwrap();
        assert_eq!(
            map.measures,
            TheaterMeasures {
                horizontal: 12,
                vertical: 5
            }
        );
    }

    #[test]
    fn test_unordered_seats() {
        let raw = RawSeatMap {
            rows: vec![raw_row(4, 0, vec![RawSeat::free(2, 0), RawSeat::free(2, 0)])],
        };
        assert!(matches!(
            SeatMap::load(&raw),
            Err(SeatError::UnorderedSeats { row: 4, seat: 2 })
        ));
    }

    #[test]
    fn test_coordinates_outside_grid() {
        let seat_overflow = RawSeatMap {
            rows: vec![raw_row(1, 0, vec![RawSeat::free(i32::MAX, 1)])],
        };
        assert!(matches!(
            SeatMap::load(&seat_overflow),
            Err(SeatError::SnapshotFormat(_))
        ));

        let row_overflow = RawSeatMap {
            rows: vec![raw_row(i32::MAX, 1, vec![RawSeat::free(1, 0)])],
        };
        assert!(matches!(
            SeatMap::load(&row_overflow),
            Err(SeatError::SnapshotFormat(_))
        ));

        let far_left = RawSeatMap {
            rows: vec![raw_row(1, 0, vec![RawSeat::free(i32::MIN, 0)])],
        };
        assert!(matches!(
            SeatMap::load(&far_left),
            Err(SeatError::SnapshotFormat(_))
        ));

        let edge = RawSeatMap {
            rows: vec![raw_row(1, 0, vec![RawSeat::free(MAX_COORDINATE - 2, 2)])],
        };
        assert_eq!(SeatMap::load(&edge).unwrap().measures.horizontal, MAX_COORDINATE);
    }

    #[test]
    fn test_duplicate_row() {
        let raw = RawSeatMap {
            rows: vec![
                raw_row(1, 0, vec![RawSeat::free(1, 0)]),
                raw_row(1, 0, vec![RawSeat::free(1, 0)]),
            ],
        };
        assert!(matches!(
            SeatMap::load(&raw),
            Err(SeatError::DuplicateRow(1))
        ));
    }
}
