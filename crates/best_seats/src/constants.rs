/// State marker the seating chart uses for a free seat
pub const FREE_STATE_MARKER: &str = "0";

/// Ideal position ratios
pub const DEFAULT_VERTICAL_RATIO: f64 = 0.75; // three quarters of the way back
pub const DEFAULT_HORIZONTAL_RATIO: f64 = 2.0; // extent / 2 = center

/// Search budgets (number of outward moves)
pub const DEFAULT_ROW_STEPS: u32 = 6; // 3 rows on each side
pub const DEFAULT_SEAT_STEPS: u32 = 4; // 2 seats on each side
pub const DEFAULT_FALLBACK_ROW_STEPS: u32 = 4;

/// Expected headers in snapshot CSV files
pub const SNAPSHOT_CSV_HEADERS: [&str; 5] = ["row", "row_offset", "seat", "state", "offset"];

/// Largest absolute row or seat id, raw or canonical, a snapshot may use
pub const MAX_COORDINATE: i32 = 1_000_000;
