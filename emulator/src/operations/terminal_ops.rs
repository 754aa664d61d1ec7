// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Whole-terminal shims (RIS, DECSTR, DECSCUSR, TBC, HTS, keypad modes).
//! See [`crate::term::impl_terminal_ops`].

use crate::parser::params::Params;
use crate::performer::SequencePerformer;

pub fn reset_terminal(performer: &mut SequencePerformer<'_>) {
    performer.term.reset_hard();
}

pub fn soft_reset(performer: &mut SequencePerformer<'_>) {
    performer.term.reset_soft();
}

/// DECSCUSR selector defaults to 0 (blinking block).
pub fn set_cursor_style(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.set_cursor_style(params.get(0).unwrap_or(0));
}

pub fn set_tab_stop(performer: &mut SequencePerformer<'_>) {
    performer.term.set_tab_stop();
}

/// TBC selector defaults to 0 (clear at cursor).
pub fn clear_tab_stops(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.clear_tab_stops(params.get(0).unwrap_or(0));
}

pub fn set_keypad_application(performer: &mut SequencePerformer<'_>, enable: bool) {
    performer.term.modes.keypad_application = enable;
}
