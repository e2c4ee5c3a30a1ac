//! Review cursor: which report is open, and which way the card slides

use serde::Serialize;

/// Transition direction for the detail view animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Tracks the report currently open for detailed review
///
/// Indexes refer to positions in the [`crate::ReportListStore`]; callers
/// pass the current list length so the cursor never points past the end.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewCursor {
    selected: Option<usize>,
    direction: Direction,
}

impl ReviewCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Open the report at `index`.
    ///
    /// Out-of-bounds indexes are clamped to the last valid position; opening
    /// against an empty list does nothing. Direction is forward when moving
    /// to the same or a later index, backward otherwise.
    pub fn open(&mut self, index: usize, len: usize) {
        if len == 0 {
            return;
        }
        let index = index.min(len - 1);
        self.direction = match self.selected {
            Some(previous) if index < previous => Direction::Backward,
            _ => Direction::Forward,
        };
        self.selected = Some(index);
    }

    /// Close the detail view.
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Advance after the open report was removed from the list.
    ///
    /// `len` is the post-removal length. Removing index i makes the item
    /// previously at i+1 the new occupant of i, so the cursor keeps the same
    /// numeric index; incrementing here would skip a report. When the
    /// removed item was the last one (or the list emptied), the view closes.
    pub fn advance_or_close(&mut self, len: usize) {
        let Some(selected) = self.selected else {
            return;
        };
        if selected >= len {
            self.close();
        } else {
            self.direction = Direction::Forward;
        }
    }
}
