// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Whole-terminal state: RIS and DECSTR resets, DECSCUSR, tab-stop
//! commands, and the query/report family (DSR, DA1/DA2, DECREQTPARM,
//! DECRQSS).

use tracing::debug;

use crate::cursor::{CursorShape, CursorState};
use crate::charset::CharsetState;
use crate::modes::TerminalModes;
use crate::protocols::csi_codes::{
    DSR_CURSOR_POSITION, DSR_STATUS, TBC_CLEAR_ALL, TBC_CLEAR_CURRENT,
};

use super::{PendingStyle, TerminalState};

impl TerminalState {
    /// RIS: hard reset. Everything goes back to power-on state, including
    /// scrollback, palette, and the image store. The response sink and
    /// screen dimensions survive.
    pub fn reset_hard(&mut self) {
        let fill = self.default_fill();
        if self.screen.is_alternate() {
            self.exit_alt_screen();
        }
        let last_row = self.height().saturating_sub(1);
        self.screen.erase_rows(0, last_row, &fill);
        self.screen.reset_alternate();
        self.screen.scrollback_mut().clear();
        self.screen.grid_mut().reset_scroll_region();
        self.screen.grid_mut().saved_cursor = None;

        self.cursor = CursorState::default();
        self.modes = TerminalModes::default();
        self.charsets = CharsetState::default();
        self.pending = PendingStyle::default();
        self.tabs.rebuild(self.width());
        self.title = None;
        self.palette.reset_all();
        self.clipboard = None;
        self.last_printed = None;
        self.graphics.clear();
        self.screen.mark_all_dirty();
    }

    /// DECSTR: soft reset. Narrower than RIS — rendition, margins, saved
    /// cursor, and a handful of modes; screen content stays.
    pub fn reset_soft(&mut self) {
        self.modes.soft_reset();
        self.pending.reset();
        self.charsets = CharsetState::default();
        self.cursor.pending_wrap = false;
        self.screen.grid_mut().reset_scroll_region();
        self.screen.grid_mut().saved_cursor = None;
    }

    /// DECSCUSR: `CSI Ps SP q`.
    pub fn set_cursor_style(&mut self, selector: u16) {
        let (shape, blink) = match selector {
            0 | 1 => (CursorShape::Block, true),
            2 => (CursorShape::Block, false),
            3 => (CursorShape::Underline, true),
            4 => (CursorShape::Underline, false),
            5 => (CursorShape::Bar, true),
            6 => (CursorShape::Bar, false),
            _ => {
                debug!(selector, "DECSCUSR: unknown style ignored");
                return;
            }
        };
        self.cursor.shape = shape;
        self.cursor.blink = blink;
    }

    /// ESC H.
    pub fn set_tab_stop(&mut self) { self.tabs.set(self.cursor.col); }

    /// CSI g.
    pub fn clear_tab_stops(&mut self, mode: u16) {
        match mode {
            TBC_CLEAR_CURRENT => self.tabs.clear(self.cursor.col),
            TBC_CLEAR_ALL => self.tabs.clear_all(),
            _ => debug!(mode, "TBC: unknown mode ignored"),
        }
    }

    /// CSI n. DSR 6 reports origin-relative coordinates under DECOM.
    pub fn device_status_report(&mut self, kind: u16) {
        match kind {
            DSR_STATUS => self.responses.send_str("\x1b[0n"),
            DSR_CURSOR_POSITION => {
                let row_base = if self.modes.origin { self.scroll_top() } else { 0 };
                let row = self.cursor.row.saturating_sub(row_base) + 1;
                let col = self.cursor.col + 1;
                self.responses.send_str(&format!("\x1b[{row};{col}R"));
            }
            _ => debug!(kind, "DSR: unknown report ignored"),
        }
    }

    /// CSI c — DA1. Advertises a VT220-class color terminal.
    pub fn device_attributes_primary(&mut self) {
        self.responses.send_str("\x1b[?62;22c");
    }

    /// CSI > c — DA2.
    pub fn device_attributes_secondary(&mut self) {
        self.responses.send_str("\x1b[>0;10;0c");
    }

    /// CSI x — DECREQTPARM. `sol` in the reply is the request value plus 2.
    pub fn request_terminal_parameters(&mut self, request: u16) {
        if request > 1 {
            debug!(request, "DECREQTPARM: invalid request ignored");
            return;
        }
        let sol = request + 2;
        self.responses
            .send_str(&format!("\x1b[{sol};1;1;128;128;1;0x"));
    }

    /// DCS $ q — DECRQSS. Replies `DCS 1 $ r Pt ST` for settings we track,
    /// `DCS 0 $ r ST` otherwise.
    pub fn request_status_string(&mut self, query: &[u8]) {
        let setting = match query {
            b"m" => Some("0m".to_owned()),
            b"r" => Some(format!(
                "{};{}r",
                self.scroll_top() + 1,
                self.scroll_bottom() + 1
            )),
            b" q" => {
                let selector = match (self.cursor.shape, self.cursor.blink) {
                    (CursorShape::Block, true) => 1,
                    (CursorShape::Block, false) => 2,
                    (CursorShape::Underline, true) => 3,
                    (CursorShape::Underline, false) => 4,
                    (CursorShape::Bar, true) => 5,
                    (CursorShape::Bar, false) => 6,
                };
                Some(format!("{selector} q"))
            }
            _ => None,
        };
        match setting {
            Some(text) => self.responses.send_str(&format!("\x1bP1$r{text}\x1b\\")),
            None => self.responses.send_str("\x1bP0$r\x1b\\"),
        }
    }
}
