use super::types::{RawRow, RawSeat, RawSeatMap};
use crate::constants::SNAPSHOT_CSV_HEADERS;
use crate::error::{Result, SeatError};

use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads a snapshot file, choosing the format by extension (`.json` / `.csv`)
pub fn read_snapshot<P: AsRef<Path>>(path: P) -> Result<RawSeatMap> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    debug!("Reading snapshot from {}", path.display());
    match extension.as_deref() {
        Some("json") => read_snapshot_json(File::open(path)?),
        Some("csv") => read_snapshot_csv(File::open(path)?),
        _ => Err(SeatError::SnapshotFormat(format!(
            "Unsupported snapshot file '{}': expected .json or .csv",
            path.display()
        ))),
    }
}

/// Reads a JSON snapshot: `{"rows": [{"row", "row_offset", "seats": [{"seat", "state", "offset"}]}]}`
pub fn read_snapshot_json<R: Read>(reader: R) -> Result<RawSeatMap> {
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}

/// Reads a CSV snapshot with `row,row_offset,seat,state,offset` columns.
/// Consecutive lines with the same row id form one row.
pub fn read_snapshot_csv<R: Read>(reader: R) -> Result<RawSeatMap> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    validate_csv_headers(&mut rdr)?;

    let mut rows: Vec<RawRow> = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        let line = i + 2; // 1-indexed, +1 for header

        if rec.iter().all(|f| f.is_empty()) {
            continue;
        }

        let row = parse_int(&rec, 0, line)?;
        let row_offset = parse_int(&rec, 1, line)?;
        let seat = RawSeat {
            seat: parse_int(&rec, 2, line)?,
            state: get_column_value(&rec, 3, line)?.to_string(),
            offset: parse_int(&rec, 4, line)?,
        };

        match rows.last_mut() {
            Some(current) if current.row == row => {
                if current.row_offset != row_offset {
                    return Err(SeatError::SnapshotRecord {
                        line,
                        message: format!(
                            "row {} has row_offset {} but earlier seats used {}",
                            row, row_offset, current.row_offset
                        ),
                    });
                }
                current.seats.push(seat);
            }
            _ => rows.push(RawRow {
                row,
                row_offset,
                seats: vec![seat],
            }),
        }
    }

    Ok(RawSeatMap { rows })
}

fn validate_csv_headers<R: Read>(csv_reader: &mut csv::Reader<R>) -> Result<()> {
    let headers = csv_reader
        .headers()
        .map_err(|e| SeatError::SnapshotFormat(format!("Failed to read headers: {}", e)))?;

    for (idx, expected) in SNAPSHOT_CSV_HEADERS.iter().enumerate() {
        match headers.get(idx) {
            Some(found) if found.eq_ignore_ascii_case(expected) => {}
            Some(found) => {
                return Err(SeatError::SnapshotFormat(format!(
                    "Expected '{}' in column {}, found '{}'",
                    expected, idx, found
                )));
            }
            None => {
                return Err(SeatError::SnapshotFormat(format!(
                    "Missing '{}' column at index {}",
                    expected, idx
                )));
            }
        }
    }

    Ok(())
}

fn get_column_value(record: &StringRecord, column_index: usize, line: usize) -> Result<&str> {
    record
        .get(column_index)
        .ok_or_else(|| SeatError::SnapshotRecord {
            line,
            message: format!("expected 5 columns, got {}", record.len()),
        })
}

fn parse_int(record: &StringRecord, column_index: usize, line: usize) -> Result<i32> {
    let value = get_column_value(record, column_index, line)?;
    value.parse().map_err(|e| SeatError::SnapshotRecord {
        line,
        message: format!(
            "'{}' in column {} is not an integer: {}",
            value, SNAPSHOT_CSV_HEADERS[column_index], e
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const CSV_SNAPSHOT: &str = "\
row,row_offset,seat,state,offset
1,0,1,0,0
1,0,2,1,0
1,0,3,0,1
2,1,1,0,0
";

    #[test]
    fn test_read_csv_groups_rows() {
        let map = read_snapshot_csv(CSV_SNAPSHOT.as_bytes()).unwrap();
        assert_eq!(map.rows.len(), 2);
        assert_eq!(map.rows[0].row, 1);
        assert_eq!(map.rows[0].seats.len(), 3);
        assert!(!map.rows[0].seats[1].is_free());
        assert_eq!(map.rows[0].seats[2].offset, 1);
        assert_eq!(map.rows[1].row_offset, 1);
    }

    #[test]
    fn test_read_csv_bad_header() {
        let data = "line,row_offset,seat,state,offset\n1,0,1,0,0\n";
        assert!(matches!(
            read_snapshot_csv(data.as_bytes()),
            Err(SeatError::SnapshotFormat(_))
        ));
    }

    #[test]
    fn test_read_csv_inconsistent_row_offset() {
        let data = "row,row_offset,seat,state,offset\n1,0,1,0,0\n1,2,2,0,0\n";
        assert!(matches!(
            read_snapshot_csv(data.as_bytes()),
            Err(SeatError::SnapshotRecord { line: 3, .. })
        ));
    }

    #[test]
    fn test_read_csv_bad_number() {
        let data = "row,row_offset,seat,state,offset\n1,0,x,0,0\n";
        assert!(matches!(
            read_snapshot_csv(data.as_bytes()),
            Err(SeatError::SnapshotRecord { line: 2, .. })
        ));
    }

    #[test]
    fn test_read_json_defaults_offsets() {
        let data = r#"{"rows": [{"row": 3, "seats": [{"seat": 1, "state": "0"}]}]}"#;
        let map = read_snapshot_json(data.as_bytes()).unwrap();
        assert_eq!(map.rows[0].row_offset, 0);
        assert_eq!(map.rows[0].seats[0].offset, 0);
        assert!(map.rows[0].seats[0].is_free());
    }

    #[test]
    fn test_read_snapshot_by_extension() {
        let temp_dir = TempDir::new().unwrap();

        let csv_path = temp_dir.path().join("hall.csv");
        File::create(&csv_path)
            .unwrap()
            .write_all(CSV_SNAPSHOT.as_bytes())
            .unwrap();
        let from_csv = read_snapshot(&csv_path).unwrap();

        let json_path = temp_dir.path().join("hall.json");
        let json = serde_json::to_string(&from_csv).unwrap();
        File::create(&json_path)
            .unwrap()
            .write_all(json.as_bytes())
            .unwrap();
        let from_json = read_snapshot(&json_path).unwrap();

        assert_eq!(from_csv, from_json);
    }

    #[test]
    fn test_read_snapshot_unknown_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hall.txt");
        File::create(&path).unwrap();
        assert!(matches!(
            read_snapshot(&path),
            Err(SeatError::SnapshotFormat(_))
        ));
    }
}
