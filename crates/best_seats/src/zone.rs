use crate::config::SearchConfig;
use crate::error::{Result, SeatError};
use crate::seat_map::{RowId, SeatId, TheaterMeasures};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Seating zones: the venue split into front/middle/back bands and
/// left/center/right thirds
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Zone {
    FrontLeft,
    FrontCenter,
    FrontRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BackLeft,
    BackCenter,
    BackRight,
}

/// Zone bounds in canonical ids, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneBounds {
    pub seats: (SeatId, SeatId),
    pub rows: (RowId, RowId),
}

impl ZoneBounds {
    pub fn width(&self) -> i32 {
        self.seats.1 - self.seats.0 + 1
    }

    pub fn depth(&self) -> i32 {
        self.rows.1 - self.rows.0
    }
}

impl Zone {
    /// Vertical band as fractions of the vertical extent
    fn vertical(self) -> (f64, f64) {
        use Zone::*;
        match self {
            FrontLeft | FrontCenter | FrontRight => (0.0, 0.5),
            MiddleLeft | MiddleCenter | MiddleRight => (0.5, 0.75),
            BackLeft | BackCenter | BackRight => (0.75, 1.0),
        }
    }

    /// Horizontal third as fractions of the horizontal extent
    fn horizontal(self) -> (f64, f64) {
        use Zone::*;
        match self {
            FrontLeft | MiddleLeft | BackLeft => (0.0, 1.0 / 3.0),
            FrontCenter | MiddleCenter | BackCenter => (1.0 / 3.0, 2.0 / 3.0),
            FrontRight | MiddleRight | BackRight => (2.0 / 3.0, 1.0),
        }
    }

    pub fn bounds(self, measures: &TheaterMeasures) -> ZoneBounds {
        let (h0, h1) = self.horizontal();
        let (v0, v1) = self.vertical();
        ZoneBounds {
            seats: (
                scale(h0, measures.horizontal),
                scale(h1, measures.horizontal),
            ),
            rows: (scale(v0, measures.vertical), scale(v1, measures.vertical)),
        }
    }

    /// Search settings aiming at the middle of the zone. The row budget
    /// covers the zone's depth on each side.
    pub fn search_config(
        self,
        measures: &TheaterMeasures,
        tickets: usize,
        base: &SearchConfig,
    ) -> Result<SearchConfig> {
        let bounds = self.bounds(measures);
        if tickets as i64 > bounds.width() as i64 {
            return Err(SeatError::ZoneTooNarrow {
                zone: self.to_string(),
                width: bounds.width(),
                tickets,
            });
        }

        let (v0, v1) = self.vertical();
        let (h0, h1) = self.horizontal();
        Ok(SearchConfig {
            vertical_ratio: midpoint(v0, v1),
            horizontal_ratio: 1.0 / midpoint(h0, h1),
            row_steps: 2 * bounds.depth().max(0) as u32,
            ..base.clone()
        })
    }
}

fn midpoint(start: f64, end: f64) -> f64 {
    (start + end) / 2.0
}

fn scale(fraction: f64, extent: i32) -> i32 {
    ((fraction * extent as f64).ceil() as i32).max(1)
}
