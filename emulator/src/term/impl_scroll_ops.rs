// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Vertical movement that can scroll: LF/IND, RI, NEL, SU/SD, and the
//! DECSTBM margin setter.
//!
//! Scrolling up with the region covering the full primary screen is the one
//! path that feeds scrollback (the screen buffer enforces this); every
//! other scroll discards what it evicts.

use super::TerminalState;

impl TerminalState {
    /// LF / IND: down one line, scrolling when at the bottom margin. A
    /// cursor below the region (possible after DECSTBM) just clamps to the
    /// screen edge.
    pub fn linefeed(&mut self) {
        self.cursor.pending_wrap = false;
        let bottom = self.scroll_bottom();
        if self.cursor.row == bottom {
            let fill = self.erase_fill();
            self.screen.scroll_up(1, &fill);
        } else if self.cursor.row < self.height().saturating_sub(1) {
            self.cursor.row += 1;
        }
    }

    /// RI: up one line, scrolling down when at the top margin.
    pub fn reverse_index(&mut self) {
        self.cursor.pending_wrap = false;
        if self.cursor.row == self.scroll_top() {
            let fill = self.erase_fill();
            self.screen.scroll_down(1, &fill);
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
        }
    }

    /// NEL: CR then IND.
    pub fn next_line(&mut self) {
        self.cursor.move_to(self.cursor.row, 0);
        self.linefeed();
    }

    /// CSI S.
    pub fn scroll_up_lines(&mut self, n: u16) {
        let fill = self.erase_fill();
        self.screen.scroll_up(n, &fill);
    }

    /// CSI T.
    pub fn scroll_down_lines(&mut self, n: u16) {
        let fill = self.erase_fill();
        self.screen.scroll_down(n, &fill);
    }

    /// DECSTBM with 1-based margins (`None` = default edge). An invalid
    /// pair (top ≥ bottom after clamping) resets to full screen, and the
    /// cursor homes origin-aware either way.
    pub fn set_scroll_region(&mut self, top: Option<u16>, bottom: Option<u16>) {
        let height = self.height();
        let top0 = top.unwrap_or(1).max(1) - 1;
        let bottom0 = bottom.unwrap_or(height).clamp(1, height) - 1;

        let grid = self.screen.grid_mut();
        if top0 < bottom0 {
            grid.scroll_top = top0;
            grid.scroll_bottom = bottom0;
        } else {
            grid.reset_scroll_region();
        }

        let home_row = if self.modes.origin { self.scroll_top() } else { 0 };
        self.cursor.move_to(home_row, 0);
    }
}
