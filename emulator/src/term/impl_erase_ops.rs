// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! ED (erase in display) and EL (erase in line).
//!
//! Erasure fills with the back-color-erase style: the pending background is
//! kept, every other style component resets. ED 3 is the xterm extension
//! that clears scrollback.

use crate::emulator::EmulatorEvent;
use crate::protocols::csi_codes::{
    ERASE_ALL, ERASE_ALL_AND_SCROLLBACK, ERASE_FROM_START, ERASE_TO_END,
};

use super::TerminalState;

impl TerminalState {
    /// CSI J.
    pub fn erase_display(&mut self, mode: u16) {
        self.cursor.pending_wrap = false;
        let fill = self.erase_fill();
        let (row, col) = (self.cursor.row, self.cursor.col);
        let (width, height) = (self.width(), self.height());
        match mode {
            ERASE_TO_END => {
                self.screen.erase_row_span(row, col, width, &fill);
                if row + 1 < height {
                    self.screen.erase_rows(row + 1, height - 1, &fill);
                }
            }
            ERASE_FROM_START => {
                if row > 0 {
                    self.screen.erase_rows(0, row - 1, &fill);
                }
                self.screen.erase_row_span(row, 0, col + 1, &fill);
            }
            ERASE_ALL => {
                self.screen.erase_rows(0, height - 1, &fill);
            }
            ERASE_ALL_AND_SCROLLBACK => {
                self.screen.scrollback_mut().clear();
                self.push_event(EmulatorEvent::ScrollbackCleared);
            }
            _ => tracing::debug!(mode, "ED: unknown erase mode ignored"),
        }
    }

    /// CSI K.
    pub fn erase_line(&mut self, mode: u16) {
        self.cursor.pending_wrap = false;
        let fill = self.erase_fill();
        let (row, col) = (self.cursor.row, self.cursor.col);
        let width = self.width();
        match mode {
            ERASE_TO_END => self.screen.erase_row_span(row, col, width, &fill),
            ERASE_FROM_START => self.screen.erase_row_span(row, 0, col + 1, &fill),
            ERASE_ALL => self.screen.erase_row_span(row, 0, width, &fill),
            _ => tracing::debug!(mode, "EL: unknown erase mode ignored"),
        }
    }
}
