// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! SM/RM and the DEC private mode set, including the alternate-screen
//! family (47 / 1047 / 1048 / 1049).
//!
//! Unknown modes are logged and ignored. Alternate-screen switches move the
//! live cursor into the target grid's stash so each buffer keeps its own
//! cursor, scroll region, and saved-cursor snapshot.

use tracing::debug;

use crate::buffer::screen_buffer::ActiveBuffer;
use crate::modes::MouseTracking;

use super::TerminalState;

// ANSI modes.
const ANSI_IRM_INSERT: u16 = 4;
const ANSI_LNM_NEWLINE: u16 = 20;

// DEC private modes.
const DEC_CKM_CURSOR_KEYS: u16 = 1;
const DEC_COLM_132: u16 = 3;
const DEC_SCLM_SMOOTH: u16 = 4;
const DEC_SCNM_REVERSE: u16 = 5;
const DEC_OM_ORIGIN: u16 = 6;
const DEC_AWM_AUTOWRAP: u16 = 7;
const DEC_MOUSE_X10: u16 = 9;
const DEC_CURSOR_BLINK: u16 = 12;
const DEC_TCEM_CURSOR_VISIBLE: u16 = 25;
const DEC_ALT_SCREEN: u16 = 47;
const DEC_MOUSE_NORMAL: u16 = 1000;
const DEC_MOUSE_BUTTON_MOTION: u16 = 1002;
const DEC_MOUSE_ANY_MOTION: u16 = 1003;
const DEC_FOCUS_EVENTS: u16 = 1004;
const DEC_MOUSE_SGR: u16 = 1006;
const DEC_ALT_SCREEN_CLEAR: u16 = 1047;
const DEC_SAVE_CURSOR: u16 = 1048;
const DEC_ALT_SCREEN_SAVE_CLEAR: u16 = 1049;
const DEC_BRACKETED_PASTE: u16 = 2004;

impl TerminalState {
    /// CSI h / CSI l.
    pub fn set_ansi_mode(&mut self, mode: u16, enable: bool) {
        match mode {
            ANSI_IRM_INSERT => self.modes.insert = enable,
            ANSI_LNM_NEWLINE => self.modes.linefeed_newline = enable,
            _ => debug!(mode, enable, "SM/RM: unknown ANSI mode ignored"),
        }
    }

    /// CSI ? h / CSI ? l.
    pub fn set_dec_private_mode(&mut self, mode: u16, enable: bool) {
        match mode {
            DEC_CKM_CURSOR_KEYS => self.modes.cursor_keys_application = enable,
            DEC_COLM_132 => self.set_column_mode(enable),
            DEC_SCLM_SMOOTH => self.modes.smooth_scroll = enable,
            DEC_SCNM_REVERSE => {
                if self.modes.reverse_video != enable {
                    self.modes.reverse_video = enable;
                    self.screen.mark_all_dirty();
                }
            }
            DEC_OM_ORIGIN => {
                self.modes.origin = enable;
                // Toggling DECOM homes the cursor (origin-aware).
                let home_row = if enable { self.scroll_top() } else { 0 };
                self.cursor.move_to(home_row, 0);
            }
            DEC_AWM_AUTOWRAP => {
                self.modes.autowrap = enable;
                if !enable {
                    self.cursor.pending_wrap = false;
                }
            }
            DEC_MOUSE_X10 => self.set_mouse_tracking(MouseTracking::X10, enable),
            DEC_CURSOR_BLINK => self.cursor.blink = enable,
            DEC_TCEM_CURSOR_VISIBLE => self.modes.cursor_visible = enable,
            DEC_ALT_SCREEN => {
                if enable {
                    self.enter_alt_screen(false);
                } else {
                    self.exit_alt_screen();
                }
            }
            DEC_MOUSE_NORMAL => self.set_mouse_tracking(MouseTracking::Normal, enable),
            DEC_MOUSE_BUTTON_MOTION => {
                self.set_mouse_tracking(MouseTracking::ButtonMotion, enable);
            }
            DEC_MOUSE_ANY_MOTION => {
                self.set_mouse_tracking(MouseTracking::AnyMotion, enable);
            }
            DEC_FOCUS_EVENTS => self.modes.focus_events = enable,
            DEC_MOUSE_SGR => self.modes.sgr_mouse = enable,
            DEC_ALT_SCREEN_CLEAR => {
                if enable {
                    self.enter_alt_screen(true);
                } else {
                    self.exit_alt_screen();
                }
            }
            DEC_SAVE_CURSOR => {
                if enable {
                    self.save_cursor();
                } else {
                    self.restore_cursor();
                }
            }
            DEC_ALT_SCREEN_SAVE_CLEAR => {
                if enable {
                    self.save_cursor();
                    self.enter_alt_screen(true);
                } else {
                    self.exit_alt_screen();
                    self.restore_cursor();
                }
            }
            DEC_BRACKETED_PASTE => self.modes.bracketed_paste = enable,
            _ => debug!(mode, enable, "DECSET/DECRST: unknown private mode ignored"),
        }
    }

    fn set_mouse_tracking(&mut self, level: MouseTracking, enable: bool) {
        if enable {
            self.modes.mouse_tracking = level;
        } else if self.modes.mouse_tracking == level {
            self.modes.mouse_tracking = MouseTracking::Off;
        }
    }

    /// DECCOLM: the column count itself is the embedder's concern, but the
    /// mandated side effects apply — clear screen, home cursor, reset
    /// margins.
    fn set_column_mode(&mut self, enable: bool) {
        self.modes.column_132 = enable;
        let fill = self.default_fill();
        let last_row = self.height().saturating_sub(1);
        self.screen.erase_rows(0, last_row, &fill);
        self.screen.grid_mut().reset_scroll_region();
        self.cursor.move_to(0, 0);
    }

    /// Switch to the alternate grid, stashing the primary cursor.
    pub fn enter_alt_screen(&mut self, clear: bool) {
        if self.screen.is_alternate() {
            return;
        }
        self.screen.grid_mut().stashed_cursor = self.cursor;
        self.screen.switch_to(ActiveBuffer::Alternate);
        self.cursor = self.screen.grid().stashed_cursor;
        self.cursor.clamp(self.width(), self.height());
        if clear {
            let fill = self.erase_fill();
            let last_row = self.height().saturating_sub(1);
            self.screen.erase_rows(0, last_row, &fill);
            self.cursor.move_to(0, 0);
        }
    }

    /// Back to the primary grid, restoring its stashed cursor.
    pub fn exit_alt_screen(&mut self) {
        if !self.screen.is_alternate() {
            return;
        }
        self.screen.grid_mut().stashed_cursor = self.cursor;
        self.screen.switch_to(ActiveBuffer::Primary);
        self.cursor = self.screen.grid().stashed_cursor;
        self.cursor.clamp(self.width(), self.height());
    }
}
