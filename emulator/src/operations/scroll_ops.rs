// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Scroll and erase shims (SU/SD, ED/EL, IND/RI/NEL). See
//! [`crate::term::impl_scroll_ops`] and [`crate::term::impl_erase_ops`].

use crate::parser::params::Params;
use crate::performer::SequencePerformer;

pub fn scroll_up(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.scroll_up_lines(params.get_or(0, 1));
}

pub fn scroll_down(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.scroll_down_lines(params.get_or(0, 1));
}

/// ED: the erase selector defaults to 0 (cursor to end), not 1.
pub fn erase_display(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.erase_display(params.get(0).unwrap_or(0));
}

/// EL: selector defaults to 0.
pub fn erase_line(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.erase_line(params.get(0).unwrap_or(0));
}

pub fn index_down(performer: &mut SequencePerformer<'_>) {
    performer.term.linefeed();
}

pub fn reverse_index(performer: &mut SequencePerformer<'_>) {
    performer.term.reverse_index();
}

pub fn next_line(performer: &mut SequencePerformer<'_>) {
    performer.term.next_line();
}
