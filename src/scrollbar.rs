//! Scrollbar geometry for list menus.
//!
//! A scrollbar is a vertical track of `rows` cells with an arrow marker just above
//! and just below it. The track is split into a blank run at the top, the thumb
//! (the visible window) and a blank run at the bottom:
//!
//! ```text
//!   ▲        track_top - 1
//!   ░ ┐
//!   ░ ┘ start_space = ceil(start / length * rows)
//!   █ ┐
//!   █ ┘ thumb
//!   ░ ]  end_space  = floor((length - end) / length * rows)
//!   ▼        track_top + rows
//! ```
//!
//! Rounding the top run up means any scrolled-past content shows at least one
//! blank cell above the thumb. An empty list (`length == 0`) yields a full thumb.

use crate::backend::CellPos;
use std::ops::Range;

/// Kind of a cell inside the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackCell {
    Blank,
    Thumb,
}

/// Where each part of a scrollbar goes. Rows are absolute screen rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollbarGeometry {
    /// Column the whole scrollbar is drawn in
    pub column: u16,
    /// First row of the track
    pub track_top: u16,
    /// Track length in cells
    pub rows: u16,
    /// Blank cells at the top of the track
    pub start_space: u16,
    /// Blank cells at the bottom of the track
    pub end_space: u16,
}

impl ScrollbarGeometry {
    /// Geometry for a window `[window.start, window.end)` over `length` items.
    ///
    /// The window is clamped into `[0, length]` and `start` never exceeds `end`.
    /// The track is shortened so it ends at or before row `u16::MAX`.
    pub fn compute(anchor: CellPos, window: Range<usize>, length: usize, rows: u16) -> Self {
        let rows = rows.min(u16::MAX - anchor.row);
        let (start_space, end_space) = Self::spaces(window, length, rows);
        Self {
            column: anchor.col,
            track_top: anchor.row,
            rows,
            start_space,
            end_space,
        }
    }

    fn spaces(window: Range<usize>, length: usize, rows: u16) -> (u16, u16) {
        if length == 0 {
            return (0, 0);
        }
        let length = length as u128;
        let rows_wide = u128::from(rows);
        let end = (window.end as u128).min(length);
        let start = (window.start as u128).min(end);

        let start_space = (start * rows_wide).div_ceil(length);
        let end_space = (length - end) * rows_wide / length;

        // Both are bounded by rows; narrowing cannot truncate.
        let start_space = start_space.min(rows_wide) as u16;
        let end_space = (end_space as u16).min(rows - start_space);
        (start_space, end_space)
    }

    /// Row of the up marker, `None` when the track starts on row 0
    pub fn up_marker_row(&self) -> Option<u16> {
        self.track_top.checked_sub(1)
    }

    /// Row of the down marker
    pub fn down_marker_row(&self) -> u32 {
        u32::from(self.track_top) + u32::from(self.rows)
    }

    /// Absolute rows covered by the thumb; empty when the blank runs fill the track
    pub fn thumb(&self) -> Range<u16> {
        let first = self.track_top.saturating_add(self.start_space);
        let last = self
            .track_top
            .saturating_add(self.rows)
            .saturating_sub(self.end_space);
        first..last.max(first)
    }

    pub fn thumb_len(&self) -> u16 {
        self.rows - self.start_space - self.end_space
    }

    /// Track cells in drawing order: top blanks, bottom blanks (upwards), thumb.
    pub fn cells(&self) -> impl Iterator<Item = (u16, TrackCell)> + '_ {
        let top = self.track_top;
        let bottom = self.track_top.saturating_add(self.rows);
        let top_blanks = (0..self.start_space).map(move |i| (top + i, TrackCell::Blank));
        let bottom_blanks = (0..self.end_space).map(move |i| (bottom - 1 - i, TrackCell::Blank));
        let thumb = self.thumb().map(|row| (row, TrackCell::Thumb));
        top_blanks.chain(bottom_blanks).chain(thumb)
    }

    /// Kind of the track cell at absolute `row`, `None` outside the track
    pub fn cell_at(&self, row: u16) -> Option<TrackCell> {
        let top = self.track_top;
        if row < top || u32::from(row) >= self.down_marker_row() {
            return None;
        }
        if self.thumb().contains(&row) {
            Some(TrackCell::Thumb)
        } else {
            Some(TrackCell::Blank)
        }
    }
}
