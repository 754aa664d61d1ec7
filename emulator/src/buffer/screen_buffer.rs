// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! The screen buffer: primary and alternate grids behind one active view,
//! scrollback, and dirty-row bookkeeping.
//!
//! All mutation goes through this type so damage marking can never be
//! forgotten: every write marks its rows dirty, and [`take_damage`] drains
//! the set.
//!
//! # Scrollback discipline
//!
//! Rows enter scrollback in exactly one case: the *primary* grid scrolls up
//! with the scroll region covering the full screen. Region-limited scrolls
//! (DECSTBM) and everything on the alternate grid discard their evicted
//! rows. On resize, a shrinking primary screen moves its top rows into
//! scrollback and a growing one pulls them back, so no content is lost
//! crossing a window-resize boundary.
//!
//! [`take_damage`]: ScreenBuffer::take_damage

use tracing::debug;

use crate::style::StyleRef;

use super::cell::Cell;
use super::damage::{DirtyRows, RowPatch};
use super::grid::{Grid, Row};
use super::scrollback::ScrollbackRing;

/// Which grid is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveBuffer {
    #[default]
    Primary,
    Alternate,
}

#[derive(Debug)]
pub struct ScreenBuffer {
    width: u16,
    height: u16,
    primary: Grid,
    alternate: Grid,
    active: ActiveBuffer,
    scrollback: ScrollbackRing,
    dirty: DirtyRows,
    default_style: StyleRef,
}

impl ScreenBuffer {
    #[must_use]
    pub fn new(width: u16, height: u16, scrollback_capacity: usize, default_style: StyleRef) -> Self {
        Self {
            width,
            height,
            primary: Grid::new(width, height, &default_style),
            alternate: Grid::new(width, height, &default_style),
            active: ActiveBuffer::Primary,
            scrollback: ScrollbackRing::new(scrollback_capacity),
            dirty: DirtyRows::new(height),
            default_style,
        }
    }

    #[must_use]
    pub fn width(&self) -> u16 { self.width }

    #[must_use]
    pub fn height(&self) -> u16 { self.height }

    #[must_use]
    pub fn active(&self) -> ActiveBuffer { self.active }

    #[must_use]
    pub fn is_alternate(&self) -> bool { self.active == ActiveBuffer::Alternate }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        match self.active {
            ActiveBuffer::Primary => &self.primary,
            ActiveBuffer::Alternate => &self.alternate,
        }
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        match self.active {
            ActiveBuffer::Primary => &mut self.primary,
            ActiveBuffer::Alternate => &mut self.alternate,
        }
    }

    #[must_use]
    pub fn primary_grid(&self) -> &Grid { &self.primary }

    pub fn primary_grid_mut(&mut self) -> &mut Grid { &mut self.primary }

    #[must_use]
    pub fn scrollback(&self) -> &ScrollbackRing { &self.scrollback }

    pub fn scrollback_mut(&mut self) -> &mut ScrollbackRing { &mut self.scrollback }

    #[must_use]
    pub fn default_style(&self) -> &StyleRef { &self.default_style }

    pub fn mark_dirty(&mut self, row: u16) { self.dirty.mark(row); }

    pub fn mark_all_dirty(&mut self) { self.dirty.mark_all(); }

    // -- cell writes --

    pub fn set_cell(&mut self, row: u16, col: u16, cell: Cell) {
        let fill = self.default_style.clone();
        self.grid_mut().set_cell(row, col, cell, &fill);
        self.dirty.mark(row);
    }

    #[must_use]
    pub fn cell(&self, row: u16, col: u16) -> Option<&Cell> { self.grid().cell(row, col) }

    // -- erase / shift, all dirty-marking --

    pub fn erase_row_span(&mut self, row: u16, start_col: u16, end_col: u16, fill: &StyleRef) {
        self.grid_mut().erase_row_span(row, start_col, end_col, fill);
        self.dirty.mark(row);
    }

    pub fn erase_rows(&mut self, first: u16, last: u16, fill: &StyleRef) {
        self.grid_mut().erase_rows(first, last, fill);
        self.dirty.mark_range(first, last.min(self.height.saturating_sub(1)));
    }

    pub fn insert_cells(&mut self, row: u16, col: u16, n: u16, fill: &StyleRef) {
        self.grid_mut().insert_cells(row, col, n, fill);
        self.dirty.mark(row);
    }

    pub fn delete_cells(&mut self, row: u16, col: u16, n: u16, fill: &StyleRef) {
        self.grid_mut().delete_cells(row, col, n, fill);
        self.dirty.mark(row);
    }

    // -- scrolling --

    /// Scroll the active scroll region up by `n`. Evicted rows feed
    /// scrollback only for a full-screen region on the primary grid.
    pub fn scroll_up(&mut self, n: u16, fill: &StyleRef) {
        let (top, bottom) = (self.grid().scroll_top, self.grid().scroll_bottom);
        self.scroll_up_within(top, bottom, n, fill);
    }

    /// Scroll `[top, bottom]` up by `n` (used by DL at the cursor row).
    pub fn scroll_up_within(&mut self, top: u16, bottom: u16, n: u16, fill: &StyleRef) {
        let feeds_scrollback = self.active == ActiveBuffer::Primary
            && top == 0
            && bottom == self.height.saturating_sub(1);
        let evicted = self.grid_mut().scroll_up_region(top, bottom, n, fill);
        if feeds_scrollback {
            for row in evicted {
                self.scrollback.push(row);
            }
        }
        self.dirty.mark_range(top, bottom);
    }

    /// Scroll the active scroll region down by `n`.
    pub fn scroll_down(&mut self, n: u16, fill: &StyleRef) {
        let (top, bottom) = (self.grid().scroll_top, self.grid().scroll_bottom);
        self.scroll_down_within(top, bottom, n, fill);
    }

    /// Scroll `[top, bottom]` down by `n` (used by IL at the cursor row).
    pub fn scroll_down_within(&mut self, top: u16, bottom: u16, n: u16, fill: &StyleRef) {
        self.grid_mut().scroll_down_region(top, bottom, n, fill);
        self.dirty.mark_range(top, bottom);
    }

    // -- buffer switching --

    /// Make `target` the active grid. Returns `false` if it already was.
    /// Cursor stash/unstash is the caller's job (the cursor lives above this
    /// layer); scroll regions and saved cursors travel with their grids.
    pub fn switch_to(&mut self, target: ActiveBuffer) -> bool {
        if self.active == target {
            return false;
        }
        self.active = target;
        self.dirty.mark_all();
        debug!(?target, "screen buffer switch");
        true
    }

    /// Replace the alternate grid with a blank one (hard reset).
    pub fn reset_alternate(&mut self) {
        self.alternate = Grid::new(self.width, self.height, &self.default_style);
    }

    // -- resize --

    /// Resize both grids to `new_width × new_height`, preserving content.
    ///
    /// The primary grid adjusts height from the top through scrollback
    /// (shrink evicts, grow pulls back); the alternate grid grows and
    /// shrinks at the bottom, since it has no history to preserve. Scroll
    /// regions reset to full screen.
    ///
    /// Returns the signed row shift applied to primary content: `-n` when
    /// `n` top rows were evicted, `+n` when `n` rows were pulled back.
    pub fn resize(&mut self, new_width: u16, new_height: u16) -> i32 {
        let fill = self.default_style.clone();

        self.primary.resize_width(new_width, &fill);
        self.alternate.resize_width(new_width, &fill);
        self.width = new_width;

        let mut shift: i32 = 0;
        let old_height = self.height;
        if new_height < old_height {
            let lost = old_height - new_height;
            for row in self.primary.take_rows_from_top(lost) {
                self.scrollback.push(row);
            }
            shift = -i32::from(lost);
        } else if new_height > old_height {
            let mut needed = new_height - old_height;
            let mut pulled = 0u16;
            while needed > 0 {
                let Some(row) = self.scrollback.pop_newest() else { break };
                self.primary.insert_row_at_top(row, &fill);
                pulled += 1;
                needed -= 1;
            }
            for _ in 0..needed {
                self.primary.push_blank_row(&fill);
            }
            shift = i32::from(pulled);
        }
        self.primary.reset_scroll_region();
        self.alternate.resize_height_from_bottom(new_height, &fill);

        self.height = new_height;
        self.dirty.resize(new_height);
        shift
    }

    // -- output --

    /// Drain the dirty set as authoritative row replacements.
    pub fn take_damage(&mut self) -> Vec<RowPatch> {
        let rows = self.dirty.take();
        let grid = self.grid();
        rows.into_iter()
            .map(|row| RowPatch { row, cells: grid.row(row).cells.clone() })
            .collect()
    }

    /// Row-major copy of the full active grid.
    #[must_use]
    pub fn snapshot_cells(&self) -> Vec<Cell> {
        let grid = self.grid();
        let mut cells = Vec::with_capacity(self.width as usize * self.height as usize);
        for row in &grid.rows {
            cells.extend(row.cells.iter().cloned());
        }
        cells
    }

    /// Clone of one row's cells (diagnostics and tests).
    #[must_use]
    pub fn row_cells(&self, row: u16) -> Vec<Cell> { self.grid().row(row).cells.clone() }

    #[must_use]
    pub fn row_text(&self, row: u16) -> String { self.grid().row(row).text() }
}

impl ScreenBuffer {
    /// Take a blank row matching the current width (resize helper for the
    /// implementation layer).
    #[must_use]
    pub fn blank_row(&self) -> Row { Row::blank(self.width, &self.default_style) }
}
