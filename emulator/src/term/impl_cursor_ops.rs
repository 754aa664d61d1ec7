// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Cursor motion, absolute positioning (origin-mode aware), DECSC/DECRC,
//! and tab movement.
//!
//! All parameters arrive already defaulted (missing/0 → 1) from the shim
//! layer; everything here clamps instead of erroring, and every motion
//! clears the pending-wrap flag.

use crate::cursor::SavedCursor;

use super::TerminalState;

impl TerminalState {
    /// CUU. A cursor inside the scroll region stops at its top; outside it
    /// stops at the screen edge.
    pub fn cursor_up(&mut self, n: u16) {
        let top = self.scroll_top();
        let min_row = if self.cursor.row >= top { top } else { 0 };
        let row = self.cursor.row.saturating_sub(n).max(min_row);
        self.cursor.move_to(row, self.cursor.col);
    }

    /// CUD.
    pub fn cursor_down(&mut self, n: u16) {
        let bottom = self.scroll_bottom();
        let max_row = if self.cursor.row <= bottom {
            bottom
        } else {
            self.height().saturating_sub(1)
        };
        let row = self.cursor.row.saturating_add(n).min(max_row);
        self.cursor.move_to(row, self.cursor.col);
    }

    /// CUF.
    pub fn cursor_forward(&mut self, n: u16) {
        let col = self
            .cursor
            .col
            .saturating_add(n)
            .min(self.width().saturating_sub(1));
        self.cursor.move_to(self.cursor.row, col);
    }

    /// CUB.
    pub fn cursor_backward(&mut self, n: u16) {
        let col = self.cursor.col.saturating_sub(n);
        self.cursor.move_to(self.cursor.row, col);
    }

    /// CNL: column 0 of the n-th line down.
    pub fn cursor_next_line(&mut self, n: u16) {
        self.cursor_down(n);
        self.cursor.move_to(self.cursor.row, 0);
    }

    /// CPL: column 0 of the n-th line up.
    pub fn cursor_prev_line(&mut self, n: u16) {
        self.cursor_up(n);
        self.cursor.move_to(self.cursor.row, 0);
    }

    /// CHA / HPA (0-based column, already converted by the shim).
    pub fn cursor_column(&mut self, col: u16) {
        let col = col.min(self.width().saturating_sub(1));
        self.cursor.move_to(self.cursor.row, col);
    }

    /// CUP / HVP with 0-based coordinates. Under DECOM the row is relative
    /// to the scroll region and confined to it.
    pub fn cursor_position(&mut self, row: u16, col: u16) {
        let row = self.origin_row(row);
        let col = col.min(self.width().saturating_sub(1));
        self.cursor.move_to(row, col);
    }

    /// VPA: absolute row, column unchanged.
    pub fn cursor_row(&mut self, row: u16) {
        let row = self.origin_row(row);
        self.cursor.move_to(row, self.cursor.col);
    }

    /// Translate a 0-based requested row through origin mode and clamp.
    fn origin_row(&self, row: u16) -> u16 {
        if self.modes.origin {
            let top = self.scroll_top();
            top.saturating_add(row).min(self.scroll_bottom())
        } else {
            row.min(self.height().saturating_sub(1))
        }
    }

    /// HT / CHT: advance `n` tab stops.
    pub fn tab_forward(&mut self, n: u16) {
        let width = self.width();
        let mut col = self.cursor.col;
        for _ in 0..n.max(1) {
            col = self.tabs.next_stop(col, width);
        }
        self.cursor.move_to(self.cursor.row, col);
    }

    /// CBT: back `n` tab stops.
    pub fn tab_backward(&mut self, n: u16) {
        let mut col = self.cursor.col;
        for _ in 0..n.max(1) {
            col = self.tabs.prev_stop(col);
        }
        self.cursor.move_to(self.cursor.row, col);
    }

    /// DECSC / CSI s: snapshot position, style, charsets, origin mode.
    pub fn save_cursor(&mut self) {
        let saved = SavedCursor {
            row: self.cursor.row,
            col: self.cursor.col,
            pending_wrap: self.cursor.pending_wrap,
            style: self.pending_style_ref(),
            charsets: self.charsets,
            origin_mode: self.modes.origin,
        };
        self.screen.grid_mut().saved_cursor = Some(saved);
    }

    /// DECRC / CSI u. With no prior save this resets to home with default
    /// rendition, per DEC.
    pub fn restore_cursor(&mut self) {
        match self.screen.grid().saved_cursor.clone() {
            Some(saved) => {
                let row = saved.row.min(self.height().saturating_sub(1));
                let col = saved.col.min(self.width().saturating_sub(1));
                self.cursor.move_to(row, col);
                self.cursor.pending_wrap = saved.pending_wrap;
                self.pending.modify(|style| *style = (*saved.style).clone());
                self.charsets = saved.charsets;
                self.modes.origin = saved.origin_mode;
            }
            None => {
                self.cursor.move_to(0, 0);
                self.pending.reset();
                self.charsets = crate::charset::CharsetState::default();
                self.modes.origin = false;
            }
        }
    }
}
