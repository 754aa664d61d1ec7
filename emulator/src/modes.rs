// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! The mode registry: ANSI modes (`CSI … h/l`) and DEC private modes
//! (`CSI ? … h/l`) as a flat typed struct.
//!
//! Alternate-screen selection is not a flag here; it lives in the screen
//! buffer as the active-grid choice, because switching moves cursor and
//! scroll-region state with it.

/// Mouse tracking protocol level. Higher levels report strictly more events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
pub enum MouseTracking {
    #[default]
    Off,
    /// DEC private 9: press only, no modifiers.
    X10,
    /// 1000: press and release.
    Normal,
    /// 1002: plus motion while a button is held.
    ButtonMotion,
    /// 1003: all motion.
    AnyMotion,
}

/// Every mode flag the dispatcher can set or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalModes {
    // -- ANSI modes (CSI h/l) --
    /// IRM (4): printables shift the rest of the line right.
    pub insert: bool,
    /// LNM (20): LF implies CR.
    pub linefeed_newline: bool,

    // -- DEC private modes (CSI ? h/l) --
    /// DECCKM (1): cursor keys send application sequences.
    pub cursor_keys_application: bool,
    /// DECCOLM (3): 80/132-column switch (clears screen, homes cursor).
    pub column_132: bool,
    /// DECSCLM (4): smooth scroll. Accepted, no visible effect here.
    pub smooth_scroll: bool,
    /// DECSCNM (5): global reverse video.
    pub reverse_video: bool,
    /// DECOM (6): cursor addressing is relative to the scroll region.
    pub origin: bool,
    /// DECAWM (7): autowrap at the right margin.
    pub autowrap: bool,
    /// DECTCEM (25): cursor visibility.
    pub cursor_visible: bool,
    /// 1004: report focus in/out.
    pub focus_events: bool,
    /// 1006: SGR extended mouse encoding.
    pub sgr_mouse: bool,
    /// 2004: bracket pasted text.
    pub bracketed_paste: bool,
    /// 9 / 1000 / 1002 / 1003.
    pub mouse_tracking: MouseTracking,
    /// `ESC =` / `ESC >`.
    pub keypad_application: bool,
}

impl Default for TerminalModes {
    fn default() -> Self {
        Self {
            insert: false,
            linefeed_newline: false,
            cursor_keys_application: false,
            column_132: false,
            smooth_scroll: false,
            reverse_video: false,
            origin: false,
            autowrap: true,
            cursor_visible: true,
            focus_events: false,
            sgr_mouse: false,
            bracketed_paste: false,
            mouse_tracking: MouseTracking::Off,
            keypad_application: false,
        }
    }
}

impl TerminalModes {
    /// DECSTR resets the modes it names without touching mouse reporting or
    /// paste bracketing (xterm behavior).
    pub fn soft_reset(&mut self) {
        self.insert = false;
        self.origin = false;
        self.autowrap = true;
        self.cursor_visible = true;
    }
}
