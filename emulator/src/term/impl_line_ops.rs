// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! IL / DL: line insertion and deletion at the cursor row.
//!
//! Both are no-ops when the cursor sits outside the scroll region. Lines
//! removed by DL are discarded, never pushed to scrollback; the shuffle is
//! confined to `[cursor row, region bottom]`.

use super::TerminalState;

impl TerminalState {
    /// CSI L.
    pub fn insert_lines(&mut self, n: u16) {
        let (top, bottom) = (self.scroll_top(), self.scroll_bottom());
        if self.cursor.row < top || self.cursor.row > bottom {
            return;
        }
        let fill = self.erase_fill();
        self.screen
            .scroll_down_within(self.cursor.row, bottom, n, &fill);
        self.cursor.move_to(self.cursor.row, 0);
    }

    /// CSI M.
    pub fn delete_lines(&mut self, n: u16) {
        let (top, bottom) = (self.scroll_top(), self.scroll_bottom());
        if self.cursor.row < top || self.cursor.row > bottom {
            return;
        }
        let fill = self.erase_fill();
        self.screen
            .scroll_up_within(self.cursor.row, bottom, n, &fill);
        self.cursor.move_to(self.cursor.row, 0);
    }
}
